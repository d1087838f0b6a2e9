// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Outline and frame shared by windows and doors
//!
//! Openings are built in wall-local coordinates: the opening spans
//! `[0, width] x [0, height]` and the wall surface is `z = 0`.

use cynthia_core::elements::{ArchConfig, TopShape};
use nalgebra::Point2;

use crate::arc::{elliptic_arc, spring_height};
use crate::error::{Error, Result};
use crate::extrusion::{extrude_polygon, Caps};
use crate::mesh::Mesh;
use crate::polygon::{self, EPSILON_2D};

/// Counter-clockwise boundary of the opening, starting at the bottom-left
/// corner so that edge 0 is the sill.
///
/// An arched top with zero resolution is the same outline as a basic top.
pub fn outline(top: TopShape, arch: &ArchConfig, width: f64, height: f64) -> Vec<Point2<f64>> {
    if top == TopShape::Basic || arch.resolution == 0 {
        return polygon::rect(0.0, 0.0, width, height);
    }

    let mut points = vec![Point2::new(0.0, 0.0), Point2::new(width, 0.0)];
    points.extend(elliptic_arc(
        0.0,
        width,
        spring_height(arch, height),
        arch.height,
        arch.resolution,
    ));
    polygon::dedup(&points, EPSILON_2D)
}

/// Inner boundary of a frame `thickness` wide around `outline`.
///
/// With `open_bottom` the sill is not framed: the inner contour keeps the
/// outline's bottom edge.
pub fn frame_inner(
    outline: &[Point2<f64>],
    thickness: f64,
    open_bottom: bool,
) -> Result<Vec<Point2<f64>>> {
    let (min, max) = polygon::bounds(outline)
        .ok_or_else(|| Error::DegenerateOpening("empty outline".to_string()))?;
    let (width, height) = (max.x - min.x, max.y - min.y);
    let vertical_members = if open_bottom { 1.0 } else { 2.0 };

    if 2.0 * thickness >= width || vertical_members * thickness >= height {
        return Err(Error::DegenerateOpening(format!(
            "frame thickness {thickness} leaves no room in a {width} x {height} opening"
        )));
    }

    let mut inner = polygon::inset(outline, thickness);
    if open_bottom {
        inner[0].y = outline[0].y;
        inner[1].y = outline[1].y;
    }
    Ok(inner)
}

/// Decorative band following the arch just outside the opening
pub fn arch_detail(
    mesh: &mut Mesh,
    top: TopShape,
    arch: &ArchConfig,
    width: f64,
    height: f64,
    group: usize,
) {
    if top != TopShape::Arched || arch.resolution == 0 || !arch.detail {
        return;
    }

    let centerline = elliptic_arc(0.0, width, spring_height(arch, height), arch.height, arch.resolution);
    // The arc runs right to left, so its right-hand side is outside
    let outer = polygon::offset_polyline(&centerline, arch.detail_thickness);
    let band: Vec<Point2<f64>> = centerline
        .iter()
        .chain(outer.iter().rev())
        .copied()
        .collect();

    extrude_polygon(mesh, &band, 0.0, arch.detail_depth, group, Caps::Both);
}
