// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use approx::assert_relative_eq;
use cynthia_core::elements::{ArchConfig, TopShape, WindowConfig};
use cynthia_core::{ElementKind, Record, Value};
use cynthia_geometry::generators::opening;
use cynthia_geometry::triangulation::calculate_polygon_normal;
use cynthia_geometry::{generate, Mesh, Point3, Region, Vector3, WallFace};

fn window(edits: &[(&str, Value)]) -> Record {
    let mut record = Record::new(ElementKind::Window.schema());
    for (path, value) in edits {
        record.set(path, value.clone()).unwrap();
    }
    record
}

fn scenario() -> Record {
    window(&[
        ("type", "ARCHED".into()),
        ("fill", "PANE".into()),
        ("horizontal_panes", 2.into()),
        ("vertical_panes", 1.into()),
        ("arch.resolution", 8.into()),
        ("arch.offset", 0.5.into()),
        ("arch.height", 0.3.into()),
        ("apply_split", false.into()),
    ])
}

fn unit_opening() -> Region {
    Region::Wall(WallFace::upright(1.0, 1.0).unwrap())
}

fn assert_partition(mesh: &Mesh) {
    let mut seen = vec![0usize; mesh.face_count()];
    for (_, faces) in mesh.partition() {
        for f in faces {
            seen[f] += 1;
        }
    }
    assert!(seen.iter().all(|&n| n == 1), "every face in exactly one group");
}

#[test]
fn arched_pane_window_on_unit_opening() {
    let record = scenario();
    let config = WindowConfig::resolve(&record).unwrap();

    let outline = opening::outline(config.top, &config.arch, 1.0, 1.0);
    assert_eq!(outline.len(), 2 + 8 + 1, "arc sampled into 8 segments");

    let generated = generate(ElementKind::Window, &record, &unit_opening())
        .unwrap()
        .mesh;
    let mesh = &generated.mesh;

    // Closed frame ring: front, back, outer and inner wall per outline edge
    assert_eq!(mesh.group_faces("frame").len(), 4 * outline.len());
    assert_eq!(mesh.group_faces("glass").len(), 3 * 2);
    // Two horizontal strips plus one vertical strip per row, as prisms
    assert!(mesh.group_faces("pane").len() >= 5 * 6);
    assert!(mesh.group_faces("bar").is_empty());

    let groups: Vec<&str> = generated.bindings.iter().map(|b| b.group).collect();
    assert_eq!(groups, ["frame", "bar", "pane", "glass"]);
    assert_partition(mesh);
}

#[test]
fn zero_resolution_arch_matches_basic_window() {
    let arched = window(&[("type", "ARCHED".into()), ("arch.resolution", 0.into())]);
    let basic = window(&[("type", "BASIC".into())]);

    let arched = generate(ElementKind::Window, &arched, &unit_opening()).unwrap();
    let basic = generate(ElementKind::Window, &basic, &unit_opening()).unwrap();
    assert_eq!(arched.mesh, basic.mesh);

    let defaults = WindowConfig::resolve(&window(&[])).unwrap().arch;
    let flat = ArchConfig {
        resolution: 0,
        ..defaults
    };
    assert_eq!(
        opening::outline(TopShape::Arched, &flat, 2.0, 1.0),
        opening::outline(TopShape::Basic, &defaults, 2.0, 1.0)
    );
}

#[test]
fn generation_is_idempotent() {
    let record = scenario();
    let first = generate(ElementKind::Window, &record, &unit_opening()).unwrap();
    let second = generate(ElementKind::Window, &record, &unit_opening()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn every_configuration_partitions_its_faces() {
    for fill in ["BAR", "PANE"] {
        for top in ["BASIC", "ARCHED"] {
            for panes in [0, 1, 3] {
                let record = window(&[
                    ("type", top.into()),
                    ("fill", fill.into()),
                    ("horizontal_panes", panes.into()),
                    ("vertical_panes", panes.into()),
                    ("apply_split", (panes == 1).into()),
                    ("arch.detail", true.into()),
                ]);
                let generated = generate(ElementKind::Window, &record, &unit_opening()).unwrap();
                assert_partition(&generated.mesh.mesh);
                assert_eq!(generated.mesh.bindings.len(), 4);
            }
        }
    }
}

#[test]
fn glass_faces_point_out_of_the_wall() {
    // Wall in the YZ plane facing +X
    let wall = WallFace::from_polygon(&[
        Point3::new(5.0, 0.0, 0.0),
        Point3::new(5.0, 1.2, 0.0),
        Point3::new(5.0, 1.2, 1.5),
        Point3::new(5.0, 0.0, 1.5),
    ])
    .unwrap();
    let record = window(&[("fill", "PANE".into())]);
    let mesh = generate(ElementKind::Window, &record, &Region::Wall(wall))
        .unwrap()
        .mesh
        .mesh;

    // Four cells, each split 2 x 2 by default
    let glass = mesh.group_faces("glass");
    assert_eq!(glass.len(), 4 * 4);
    for index in glass {
        let points = mesh.face_points(&mesh.faces[index]);
        let normal = calculate_polygon_normal(&points);
        assert_relative_eq!(normal, Vector3::x(), epsilon = 1e-9);
        // Glass sits at half the frame depth
        assert_relative_eq!(points[0].x, 5.05, epsilon = 1e-9);
    }
}

#[test]
fn generated_meshes_triangulate() {
    let mesh = generate(ElementKind::Window, &scenario(), &unit_opening())
        .unwrap()
        .mesh
        .mesh;
    let triangles = mesh.triangulate().unwrap();
    assert!(triangles.get("frame").is_some());
    assert!(triangles.get("bar").is_none());
    assert!(triangles.get("glass").unwrap().triangle_count() >= 6 * 2);
}
