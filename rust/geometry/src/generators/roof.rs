// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Roof generator
//!
//! Every roof starts with an eave slab `thickness` thick over the outset
//! footprint. FLAT stops there, GABLE adds a ridged prism over the slab's
//! bounding box, HIP rises to a single apex above the footprint centroid.

use std::f64::consts::FRAC_PI_2;

use cynthia_core::elements::{RoofConfig, RoofType};
use cynthia_core::ElementKind;
use nalgebra::{Matrix4, Point2, Point3, Vector3};

use super::expect_footprint;
use crate::error::Result;
use crate::extrusion::{extrude_polygon, Caps};
use crate::mesh::{GeneratedMesh, MaterialBinding, Mesh};
use crate::polygon;
use crate::region::Region;

pub const ROOF: &str = "roof";

pub fn generate(config: &RoofConfig, region: &Region) -> Result<GeneratedMesh> {
    let footprint = expect_footprint(ElementKind::Roof, region)?;
    let outline = polygon::inset(footprint.area_checked()?, -config.outset);
    let base = footprint.elevation;
    let eave = base + config.thickness;

    let mut mesh = Mesh::with_groups(&[ROOF]);
    match config.kind {
        RoofType::Flat => {
            extrude_polygon(&mut mesh, &outline, base, eave, 0, Caps::Both);
        }
        RoofType::Gable => {
            if let Some((min, max)) = polygon::bounds(&outline) {
                let slab = polygon::rect(min.x, min.y, max.x, max.y);
                extrude_polygon(&mut mesh, &slab, base, eave, 0, Caps::Bottom);
                add_gable(&mut mesh, min, max, eave, config.height);
            }
        }
        RoofType::Hip => {
            extrude_polygon(&mut mesh, &outline, base, eave, 0, Caps::Bottom);
            add_hip(&mut mesh, &outline, eave, config.height);
        }
    }

    Ok(GeneratedMesh::new(
        mesh,
        vec![MaterialBinding { group: ROOF, material: config.mat_roof }],
    ))
}

/// Ridged prism over the box `min..max`, ridge along its longer side
fn add_gable(mesh: &mut Mesh, min: Point2<f64>, max: Point2<f64>, eave: f64, height: f64) {
    let (dx, dy) = (max.x - min.x, max.y - min.y);
    let along_x = dx >= dy;
    let (hl, hs) = if along_x { (dx / 2.0, dy / 2.0) } else { (dy / 2.0, dx / 2.0) };

    // Built with the ridge on the local X axis, centered on the origin
    let a = Point3::new(-hl, -hs, 0.0);
    let b = Point3::new(hl, -hs, 0.0);
    let c = Point3::new(hl, hs, 0.0);
    let d = Point3::new(-hl, hs, 0.0);
    let r0 = Point3::new(-hl, 0.0, height);
    let r1 = Point3::new(hl, 0.0, height);

    let mut part = Mesh::with_groups(&[ROOF]);
    part.add_polygon(&[a, b, r1, r0], 0);
    part.add_polygon(&[c, d, r0, r1], 0);
    part.add_polygon(&[b, c, r1], 0);
    part.add_polygon(&[d, a, r0], 0);

    let center = Vector3::new((min.x + max.x) / 2.0, (min.y + max.y) / 2.0, eave);
    let mut placement = Matrix4::new_translation(&center);
    if !along_x {
        placement *= Matrix4::from_euler_angles(0.0, 0.0, FRAC_PI_2);
    }
    part.transform(&placement);
    mesh.merge(&part);
}

/// One sloped triangle per footprint edge, meeting above the centroid
fn add_hip(mesh: &mut Mesh, outline: &[Point2<f64>], eave: f64, height: f64) {
    let outline = polygon::ensure_ccw(outline);
    let top = polygon::centroid(&outline);
    let apex = Point3::new(top.x, top.y, eave + height);

    for i in 0..outline.len() {
        let p = outline[i];
        let q = outline[(i + 1) % outline.len()];
        mesh.add_polygon(&[Point3::new(p.x, p.y, eave), Point3::new(q.x, q.y, eave), apex], 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::Footprint;
    use crate::triangulation::calculate_polygon_normal;
    use approx::assert_relative_eq;

    fn config(kind: RoofType) -> RoofConfig {
        RoofConfig {
            kind,
            thickness: 0.1,
            outset: 0.0,
            height: 1.0,
            mat_roof: None,
        }
    }

    fn region() -> Region {
        Region::Footprint(Footprint::rectangle(2.0, 4.0, 3.0))
    }

    #[test]
    fn test_flat_roof() {
        let mesh = generate(&config(RoofType::Flat), &region()).unwrap().mesh;
        assert_eq!(mesh.face_count(), 6);
        let (min, max) = mesh.bounds().unwrap();
        assert_relative_eq!(min.z, 3.0);
        assert_relative_eq!(max.z, 3.1, epsilon = 1e-12);
    }

    #[test]
    fn test_gable_ridge_follows_longer_side() {
        let mesh = generate(&config(RoofType::Gable), &region()).unwrap().mesh;
        // Slab (bottom + 4 sides) and the prism's 4 faces
        assert_eq!(mesh.face_count(), 5 + 4);

        let ridge: Vec<_> = mesh
            .vertices
            .iter()
            .filter(|v| (v.z - 4.1).abs() < 1e-9)
            .collect();
        assert!(!ridge.is_empty());
        assert!(ridge.iter().all(|v| v.x.abs() < 1e-9));

        // Sloped faces point up and away from the ridge
        for face in &mesh.faces[5..7] {
            let normal = calculate_polygon_normal(&mesh.face_points(face));
            assert!(normal.z > 0.0);
        }
    }

    #[test]
    fn test_hip_apex_over_centroid() {
        let mesh = generate(&config(RoofType::Hip), &region()).unwrap().mesh;
        assert_eq!(mesh.face_count(), 5 + 4);
        let (_, max) = mesh.bounds().unwrap();
        assert_relative_eq!(max.z, 4.1, epsilon = 1e-12);
        for face in &mesh.faces[5..] {
            let normal = calculate_polygon_normal(&mesh.face_points(face));
            assert!(normal.z > 0.0);
        }
    }
}
