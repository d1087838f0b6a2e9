// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floors generator: the floorplan outline stacked `floor_count` times,
//! each storey a slab topped by walls `floor_height` tall.

use cynthia_core::elements::FloorsConfig;
use cynthia_core::{ElementKind, Value};

use super::{expect_footprint, Generation};
use crate::error::Result;
use crate::extrusion::{extrude_polygon, Caps};
use crate::mesh::{GeneratedMesh, MaterialBinding, Mesh};
use crate::polygon;
use crate::region::Region;

pub const SLAB: &str = "slab";
pub const WALL: &str = "wall";

pub fn generate(config: &FloorsConfig, region: &Region) -> Result<Generation> {
    let footprint = expect_footprint(ElementKind::Floors, region)?;
    let outline = footprint.area_checked()?;
    let slab_outline = polygon::inset(outline, -config.slab_outset);

    let mut mesh = Mesh::with_groups(&[SLAB, WALL]);
    let storey = config.floor_height + config.slab_thickness;

    for i in 0..config.floor_count {
        let base = footprint.elevation + i as f64 * storey;
        let slab_top = base + config.slab_thickness;
        extrude_polygon(&mut mesh, &slab_outline, base, slab_top, 0, Caps::Both);
        extrude_polygon(&mut mesh, outline, slab_top, slab_top + config.floor_height, 1, Caps::None);
    }

    let bindings = vec![
        MaterialBinding { group: SLAB, material: config.mat_slab },
        MaterialBinding { group: WALL, material: config.mat_wall },
    ];
    Ok(Generation {
        mesh: GeneratedMesh::new(mesh, bindings),
        derived: vec![("total_height", Value::Real(config.total_height()))],
    })
}
