// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Extrusion operations - converting 2D outlines to polygon solids
//!
//! Outlines live in the XY plane and are extruded along Z. Faces are wound
//! counter-clockwise seen from outside the solid.

use nalgebra::{Point2, Point3, Vector3};

use crate::mesh::Mesh;
use crate::polygon::{self, EPSILON_2D};

/// Which end faces [`extrude_polygon`] emits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Caps {
    None,
    /// Only the face at the upper Z bound
    Top,
    /// Only the face at the lower Z bound
    Bottom,
    Both,
}

impl Caps {
    fn top(self) -> bool {
        matches!(self, Caps::Top | Caps::Both)
    }

    fn bottom(self) -> bool {
        matches!(self, Caps::Bottom | Caps::Both)
    }
}

#[inline]
fn lift(p: &Point2<f64>, z: f64) -> Point3<f64> {
    Point3::new(p.x, p.y, z)
}

/// Extrude a simple polygon between `z0` and `z1`.
///
/// Zero-thickness extrusions emit only the top face.
pub fn extrude_polygon(
    mesh: &mut Mesh,
    outline: &[Point2<f64>],
    z0: f64,
    z1: f64,
    group: usize,
    caps: Caps,
) {
    if !polygon::is_valid_contour(outline) {
        return;
    }
    let outline = polygon::ensure_ccw(outline);

    if (z1 - z0).abs() <= EPSILON_2D {
        let face: Vec<Point3<f64>> = outline.iter().map(|p| lift(p, z1)).collect();
        mesh.add_polygon(&face, group);
        return;
    }

    if caps.bottom() {
        let face: Vec<Point3<f64>> = outline.iter().rev().map(|p| lift(p, z0)).collect();
        mesh.add_polygon(&face, group);
    }
    if caps.top() {
        let face: Vec<Point3<f64>> = outline.iter().map(|p| lift(p, z1)).collect();
        mesh.add_polygon(&face, group);
    }

    create_side_walls(mesh, &outline, z0, z1, group, false);
}

/// Side walls of a closed boundary. `inward` flips the faces so they look
/// into the boundary (the inner walls of a ring).
fn create_side_walls(
    mesh: &mut Mesh,
    boundary: &[Point2<f64>],
    z0: f64,
    z1: f64,
    group: usize,
    inward: bool,
) {
    for i in 0..boundary.len() {
        let j = (i + 1) % boundary.len();
        side_quad(mesh, &boundary[i], &boundary[j], z0, z1, group, inward);
    }
}

fn side_quad(
    mesh: &mut Mesh,
    p0: &Point2<f64>,
    p1: &Point2<f64>,
    z0: f64,
    z1: f64,
    group: usize,
    inward: bool,
) {
    // Skip degenerate edges (duplicate consecutive points)
    if (p1 - p0).norm() <= EPSILON_2D {
        return;
    }
    let (a, b) = if inward { (p1, p0) } else { (p0, p1) };
    mesh.add_polygon(&[lift(a, z0), lift(b, z0), lift(b, z1), lift(a, z1)], group);
}

/// Extrude the band between a counter-clockwise `outer` contour and an
/// `inner` contour with the same vertex count.
///
/// Edges listed in `open_edges` (edge `i` runs from vertex `i` to `i + 1`)
/// get no band segment; the cut ends of the band are capped instead.
pub fn extrude_ring(
    mesh: &mut Mesh,
    outer: &[Point2<f64>],
    inner: &[Point2<f64>],
    z0: f64,
    z1: f64,
    group: usize,
    open_edges: &[usize],
) {
    let n = outer.len();
    if n < 3 || inner.len() != n {
        return;
    }
    let flat = (z1 - z0).abs() <= EPSILON_2D;

    for i in 0..n {
        if open_edges.contains(&i) {
            continue;
        }
        let j = (i + 1) % n;

        mesh.add_polygon(
            &[lift(&outer[i], z1), lift(&outer[j], z1), lift(&inner[j], z1), lift(&inner[i], z1)],
            group,
        );
        if flat {
            continue;
        }
        mesh.add_polygon(
            &[lift(&inner[i], z0), lift(&inner[j], z0), lift(&outer[j], z0), lift(&outer[i], z0)],
            group,
        );
        side_quad(mesh, &outer[i], &outer[j], z0, z1, group, false);
        side_quad(mesh, &inner[i], &inner[j], z0, z1, group, true);
    }

    if flat {
        return;
    }
    for &i in open_edges {
        if i >= n {
            continue;
        }
        let j = (i + 1) % n;
        side_quad(mesh, &outer[i], &inner[i], z0, z1, group, false);
        side_quad(mesh, &inner[j], &outer[j], z0, z1, group, false);
    }
}

/// Axis-aligned box
pub fn cuboid(mesh: &mut Mesh, min: Point3<f64>, max: Point3<f64>, group: usize) {
    let outline = polygon::rect(min.x, min.y, max.x, max.y);
    extrude_polygon(mesh, &outline, min.z, max.z, group, Caps::Both);
}

/// Square-section beam of side `size` centered on the segment `a -> b`
pub fn beam(mesh: &mut Mesh, a: Point3<f64>, b: Point3<f64>, size: f64, group: usize) {
    let axis = b - a;
    let Some(dir) = axis.try_normalize(1e-10) else {
        return;
    };
    let reference = if dir.z.abs() < 0.9 { Vector3::z() } else { Vector3::x() };
    let side = dir.cross(&reference).normalize() * (size / 2.0);
    let up = side.cross(&dir).normalize() * (size / 2.0);

    // Section corners, counter-clockwise seen from beyond `b`
    let corners = [-side - up, -side + up, side + up, side - up];
    let start: Vec<Point3<f64>> = corners.iter().map(|c| a + c).collect();
    let end: Vec<Point3<f64>> = corners.iter().map(|c| b + c).collect();

    mesh.add_polygon(&end, group);
    let back: Vec<Point3<f64>> = start.iter().rev().copied().collect();
    mesh.add_polygon(&back, group);
    for i in 0..4 {
        let j = (i + 1) % 4;
        mesh.add_polygon(&[start[i], start[j], end[j], end[i]], group);
    }
}
