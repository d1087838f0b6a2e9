// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floorplan generator: a single ground face that floors and roofs build on

use std::f64::consts::TAU;

use cynthia_core::elements::{FloorplanConfig, FloorplanType};
use cynthia_core::ElementKind;
use nalgebra::{Point2, Point3};

use crate::error::{Error, Result};
use crate::mesh::{GeneratedMesh, MaterialBinding, Mesh};
use crate::polygon;
use crate::region::{Footprint, Region};

pub const FLOOR: &str = "floor";

/// Counter-clockwise outline centered on the origin
pub fn floorplan_outline(config: &FloorplanConfig) -> Vec<Point2<f64>> {
    match config.kind {
        FloorplanType::Rectangular => polygon::rect(
            -config.width / 2.0,
            -config.length / 2.0,
            config.width / 2.0,
            config.length / 2.0,
        ),
        FloorplanType::Circular => {
            let segments = config.segments.max(3);
            (0..segments)
                .map(|i| {
                    let angle = TAU * i as f64 / segments as f64;
                    Point2::new(config.radius * angle.cos(), config.radius * angle.sin())
                })
                .collect()
        }
    }
}

/// Ground footprint of a floorplan anchored at a point region
pub fn footprint(config: &FloorplanConfig, region: &Region) -> Result<Footprint> {
    let Region::Point { origin, .. } = region else {
        return Err(Error::RegionMismatch {
            kind: ElementKind::Floorplan,
            expected: "point",
        });
    };
    let points = floorplan_outline(config)
        .into_iter()
        .map(|p| Point2::new(p.x + origin.x, p.y + origin.y))
        .collect();
    Ok(Footprint::new(points, origin.z))
}

pub fn generate(config: &FloorplanConfig, region: &Region) -> Result<GeneratedMesh> {
    let footprint = footprint(config, region)?;
    let mut mesh = Mesh::with_groups(&[FLOOR]);
    let face: Vec<Point3<f64>> = footprint
        .area_checked()?
        .iter()
        .map(|p| Point3::new(p.x, p.y, footprint.elevation))
        .collect();
    mesh.add_polygon(&face, 0);

    Ok(GeneratedMesh::new(
        mesh,
        vec![MaterialBinding { group: FLOOR, material: config.mat_floor }],
    ))
}
