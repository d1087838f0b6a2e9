// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometry generators
//!
//! Every generator follows the same shape: resolve a typed snapshot of the
//! element's record, build the outline, add structural members, subdivide,
//! then bind each material group to the material stored in the record.

pub mod balcony;
pub mod door;
pub mod floorplan;
pub mod floors;
pub mod opening;
pub mod railing;
pub mod roof;
pub mod stairs;
pub mod window;

use cynthia_core::elements::{
    BalconyConfig, DoorConfig, FloorplanConfig, FloorsConfig, RailingConfig, RoofConfig,
    StairsConfig, WindowConfig,
};
use cynthia_core::{ElementKind, Record, Value};

use crate::error::{Error, Result};
use crate::mesh::GeneratedMesh;
use crate::region::{Footprint, Region, WallFace};

/// Output of one generator run
#[derive(Debug, Clone, PartialEq)]
pub struct Generation {
    pub mesh: GeneratedMesh,
    /// Fields the generator computed, to be written back into the record
    pub derived: Vec<(&'static str, Value)>,
}

impl Generation {
    fn mesh_only(mesh: GeneratedMesh) -> Self {
        Self {
            mesh,
            derived: Vec::new(),
        }
    }
}

/// Generate the mesh of a `kind` element from its record, placed in `region`
pub fn generate(kind: ElementKind, record: &Record, region: &Region) -> Result<Generation> {
    let generation = match kind {
        ElementKind::Window => {
            Generation::mesh_only(window::generate(&WindowConfig::resolve(record)?, region)?)
        }
        ElementKind::Door => {
            Generation::mesh_only(door::generate(&DoorConfig::resolve(record)?, region)?)
        }
        ElementKind::Floorplan => {
            Generation::mesh_only(floorplan::generate(&FloorplanConfig::resolve(record)?, region)?)
        }
        ElementKind::Floors => floors::generate(&FloorsConfig::resolve(record)?, region)?,
        ElementKind::Balcony => {
            Generation::mesh_only(balcony::generate(&BalconyConfig::resolve(record)?, region)?)
        }
        ElementKind::Railing => {
            Generation::mesh_only(railing::generate(&RailingConfig::resolve(record)?, region)?)
        }
        ElementKind::Stairs => stairs::generate(&StairsConfig::resolve(record)?, region)?,
        ElementKind::Roof => {
            Generation::mesh_only(roof::generate(&RoofConfig::resolve(record)?, region)?)
        }
    };

    tracing::trace!(
        kind = %kind,
        vertices = generation.mesh.mesh.vertex_count(),
        faces = generation.mesh.mesh.face_count(),
        "generated"
    );
    Ok(generation)
}

pub(crate) fn expect_wall(kind: ElementKind, region: &Region) -> Result<&WallFace> {
    match region {
        Region::Wall(wall) => Ok(wall),
        _ => Err(Error::RegionMismatch {
            kind,
            expected: "wall",
        }),
    }
}

pub(crate) fn expect_footprint(kind: ElementKind, region: &Region) -> Result<&Footprint> {
    match region {
        Region::Footprint(footprint) => Ok(footprint),
        _ => Err(Error::RegionMismatch {
            kind,
            expected: "footprint",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_generates_from_defaults() {
        let wall = Region::Wall(WallFace::upright(1.0, 2.0).unwrap());
        let ground = Region::Footprint(Footprint::rectangle(4.0, 3.0, 0.0));

        for kind in ElementKind::ALL {
            let region = match kind {
                ElementKind::Window | ElementKind::Door | ElementKind::Balcony => &wall,
                ElementKind::Floors | ElementKind::Roof | ElementKind::Railing => &ground,
                ElementKind::Floorplan | ElementKind::Stairs => &Region::origin(),
            };
            let record = Record::new(kind.schema());
            let generation = generate(kind, &record, region).unwrap();
            assert!(!generation.mesh.mesh.is_empty(), "{kind} produced no faces");
        }
    }

    #[test]
    fn test_region_mismatch() {
        let record = Record::new(ElementKind::Window.schema());
        let err = generate(ElementKind::Window, &record, &Region::origin()).unwrap_err();
        assert_eq!(
            err,
            Error::RegionMismatch {
                kind: ElementKind::Window,
                expected: "wall"
            }
        );
    }
}
