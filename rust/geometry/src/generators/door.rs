// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Door generator
//!
//! Same outline and frame as a window but without a sill member. The leaf
//! is recessed `door_depth` behind the wall surface and carries raised
//! panels stacked bottom to top.

use cynthia_core::elements::{DoorConfig, TopShape};
use cynthia_core::ElementKind;
use nalgebra::{Point2, Point3};

use super::{expect_wall, opening};
use crate::arc::spring_height;
use crate::error::Result;
use crate::extrusion::{extrude_polygon, extrude_ring, Caps};
use crate::mesh::{GeneratedMesh, MaterialBinding, Mesh};
use crate::polygon::{self, rect};
use crate::region::Region;
use crate::subdivide::split_face;

pub const FRAME: &str = "frame";
pub const DOOR: &str = "door";
pub const PANEL: &str = "panel";

pub const GROUPS: [&str; 3] = [FRAME, DOOR, PANEL];

pub fn generate(config: &DoorConfig, region: &Region) -> Result<GeneratedMesh> {
    let wall = expect_wall(ElementKind::Door, region)?;
    let mut mesh = Mesh::with_groups(&GROUPS);
    let frame = mesh.declare_group(FRAME);
    let leaf = mesh.declare_group(DOOR);
    let panel = mesh.declare_group(PANEL);

    let outline = opening::outline(config.top, &config.arch, wall.width, wall.height);
    let inner = opening::frame_inner(&outline, config.frame_thickness, true)?;
    let leaf_z = -config.door_depth;

    // Edge 0 is the sill
    extrude_ring(&mut mesh, &outline, &inner, leaf_z, config.frame_depth, frame, &[0]);
    opening::arch_detail(&mut mesh, config.top, &config.arch, wall.width, wall.height, frame);

    let pieces = if config.apply_split {
        split_face(&inner, &config.split)
    } else {
        vec![inner.clone()]
    };
    for piece in &pieces {
        let face: Vec<Point3<f64>> = piece.iter().map(|p| Point3::new(p.x, p.y, leaf_z)).collect();
        mesh.add_polygon(&face, leaf);
    }

    add_panels(&mut mesh, config, &inner, wall.height, panel);
    mesh.transform(&wall.to_world());

    let bindings = vec![
        MaterialBinding { group: FRAME, material: config.mat_frame },
        MaterialBinding { group: DOOR, material: config.mat_door },
        MaterialBinding { group: PANEL, material: config.mat_panel },
    ];
    Ok(GeneratedMesh::new(mesh, bindings))
}

/// Raised panels within the rectangular part of the leaf
fn add_panels(mesh: &mut Mesh, config: &DoorConfig, inner: &[Point2<f64>], height: f64, group: usize) {
    let count = config.panel_count;
    let Some((min, max)) = polygon::bounds(inner) else {
        return;
    };
    if count == 0 {
        return;
    }

    let mut top = max.y;
    if config.top == TopShape::Arched && config.arch.resolution > 0 {
        top = top.min(spring_height(&config.arch, height));
    }

    let margin = config.panel_margin;
    let (x0, x1) = (min.x + margin, max.x - margin);
    let (y0, y1) = (min.y + margin, top - margin);
    let panel_height = (y1 - y0 - margin * (count as f64 - 1.0)) / count as f64;

    if x1 <= x0 || panel_height <= 0.0 {
        tracing::trace!(count, margin, "door leaf too small for its panels");
        return;
    }

    let z0 = -config.door_depth;
    let z1 = z0 + config.panel_depth;
    for i in 0..count {
        let bottom = y0 + i as f64 * (panel_height + margin);
        let outline = rect(x0, bottom, x1, bottom + panel_height);
        // The leaf face already covers the panel's back
        extrude_polygon(mesh, &outline, z0, z1, group, Caps::Top);
    }
}
