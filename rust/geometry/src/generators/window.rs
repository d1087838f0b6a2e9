// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Window generator
//!
//! Frame ring around the opening outline, then a fill grid of bars or pane
//! frames with one glass face per grid cell. Glass sits in the middle of
//! the frame depth; dividers are centered on the glass plane.

use cynthia_core::elements::{FillType, WindowConfig};
use cynthia_core::ElementKind;
use nalgebra::{Point2, Point3};

use super::{expect_wall, opening};
use crate::error::Result;
use crate::extrusion::{extrude_polygon, extrude_ring, Caps};
use crate::mesh::{GeneratedMesh, MaterialBinding, Mesh};
use crate::polygon::{self, rect, EPSILON_2D};
use crate::region::Region;
use crate::subdivide::{grid_positions, intervals, split_face};

pub const FRAME: &str = "frame";
pub const BAR: &str = "bar";
pub const PANE: &str = "pane";
pub const GLASS: &str = "glass";

/// Material groups of a window, in binding order
pub const GROUPS: [&str; 4] = [FRAME, BAR, PANE, GLASS];

pub fn generate(config: &WindowConfig, region: &Region) -> Result<GeneratedMesh> {
    let wall = expect_wall(ElementKind::Window, region)?;
    let mut mesh = Mesh::with_groups(&GROUPS);
    let frame = mesh.declare_group(FRAME);

    let outline = opening::outline(config.top, &config.arch, wall.width, wall.height);
    let inner = opening::frame_inner(&outline, config.frame_thickness, false)?;

    extrude_ring(&mut mesh, &outline, &inner, 0.0, config.frame_depth, frame, &[]);
    opening::arch_detail(&mut mesh, config.top, &config.arch, wall.width, wall.height, frame);
    add_fill(&mut mesh, config, &inner);

    mesh.transform(&wall.to_world());

    let bindings = vec![
        MaterialBinding { group: FRAME, material: config.mat_frame },
        MaterialBinding { group: BAR, material: config.mat_bar },
        MaterialBinding { group: PANE, material: config.mat_pane },
        MaterialBinding { group: GLASS, material: config.mat_glass },
    ];
    Ok(GeneratedMesh::new(mesh, bindings))
}

/// Dividers and glass inside the frame's inner contour
fn add_fill(mesh: &mut Mesh, config: &WindowConfig, inner: &[Point2<f64>]) {
    let Some((min, max)) = polygon::bounds(inner) else {
        return;
    };

    let glass_z = config.frame_depth / 2.0;
    let half = config.pane_thickness / 2.0;
    let (divider, depth) = match config.fill {
        FillType::Bar => (mesh.declare_group(BAR), config.pane_thickness),
        FillType::Pane => (mesh.declare_group(PANE), config.pane_depth),
    };
    let glass = mesh.declare_group(GLASS);
    let (z0, z1) = (glass_z - depth / 2.0, glass_z + depth / 2.0);

    let rows_at = grid_positions(min.y, max.y, config.horizontal_panes);
    let columns_at = grid_positions(min.x, max.x, config.vertical_panes);
    let rows = intervals(min.y, max.y, &rows_at);
    let columns = intervals(min.x, max.x, &columns_at);

    let divider_strip = |mesh: &mut Mesh, x0: f64, y0: f64, x1: f64, y1: f64| {
        if x1 - x0 <= EPSILON_2D || y1 - y0 <= EPSILON_2D {
            return;
        }
        let strip = polygon::clip_polygon(&rect(x0, y0, x1, y1), inner);
        extrude_polygon(mesh, &strip, z0, z1, divider, Caps::Both);
    };

    // Horizontal dividers run the full width; vertical ones stop at them
    for y in &rows_at {
        divider_strip(mesh, min.x, y - half, max.x, y + half);
    }

    for (r, &(y0, y1)) in rows.iter().enumerate() {
        let bottom = if r > 0 { y0 + half } else { y0 };
        let top = if r + 1 < rows.len() { y1 - half } else { y1 };

        for x in &columns_at {
            divider_strip(mesh, x - half, bottom, x + half, top);
        }

        for (c, &(x0, x1)) in columns.iter().enumerate() {
            let left = if c > 0 { x0 + half } else { x0 };
            let right = if c + 1 < columns.len() { x1 - half } else { x1 };
            if right - left <= EPSILON_2D || top - bottom <= EPSILON_2D {
                tracing::trace!(row = r, column = c, "glass cell covered by dividers");
                continue;
            }

            let cell = polygon::clip_polygon(&rect(left, bottom, right, top), inner);
            if !polygon::is_valid_contour(&cell) {
                tracing::trace!(row = r, column = c, "glass cell outside the opening");
                continue;
            }

            if config.apply_split {
                for piece in split_face(&cell, &config.split) {
                    add_pane(mesh, &piece, glass_z, glass);
                }
            } else {
                add_pane(mesh, &cell, glass_z, glass);
            }
        }
    }
}

fn add_pane(mesh: &mut Mesh, contour: &[Point2<f64>], z: f64, group: usize) {
    let face: Vec<Point3<f64>> = contour.iter().map(|p| Point3::new(p.x, p.y, z)).collect();
    mesh.add_polygon(&face, group);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::WallFace;
    use cynthia_core::elements::window::WINDOW;
    use cynthia_core::{MaterialId, Record};

    fn unit_wall() -> Region {
        Region::Wall(WallFace::upright(1.0, 1.0).unwrap())
    }

    fn config(edits: &[(&str, cynthia_core::Value)]) -> WindowConfig {
        let mut record = Record::new(&WINDOW);
        for (path, value) in edits {
            record.set(*path, value.clone()).unwrap();
        }
        WindowConfig::resolve(&record).unwrap()
    }

    #[test]
    fn test_default_window_groups() {
        let generated = generate(&config(&[]), &unit_wall()).unwrap();
        let mesh = &generated.mesh;

        // One horizontal and one vertical bar make four cells, each split 2 x 2
        assert_eq!(mesh.group_faces(GLASS).len(), 4 * 4);
        assert!(!mesh.group_faces(BAR).is_empty());
        assert!(mesh.group_faces(PANE).is_empty());
        assert_eq!(generated.bindings.len(), 4);
    }

    #[test]
    fn test_zero_panes_single_glass_face() {
        let window = config(&[
            ("horizontal_panes", 0.into()),
            ("vertical_panes", 0.into()),
            ("apply_split", false.into()),
        ]);
        let mesh = generate(&window, &unit_wall()).unwrap().mesh;
        assert_eq!(mesh.group_faces(GLASS).len(), 1);
        assert!(mesh.group_faces(BAR).is_empty());
        assert!(mesh.group_faces(PANE).is_empty());
    }

    #[test]
    fn test_split_subdivides_glass_only() {
        let plain = config(&[
            ("horizontal_panes", 0.into()),
            ("vertical_panes", 0.into()),
            ("apply_split", false.into()),
        ]);
        let split = config(&[
            ("horizontal_panes", 0.into()),
            ("vertical_panes", 0.into()),
            ("apply_split", true.into()),
            ("split.horizontal_cuts", 2.into()),
        ]);

        let plain = generate(&plain, &unit_wall()).unwrap().mesh;
        let split = generate(&split, &unit_wall()).unwrap().mesh;
        assert_eq!(split.group_faces(GLASS).len(), 3 * 2);
        assert_eq!(split.group_faces(FRAME), plain.group_faces(FRAME));
    }

    #[test]
    fn test_materials_are_bound_by_group() {
        let window = config(&[
            ("mat_frame", MaterialId(1).into()),
            ("mat_glass", MaterialId(4).into()),
        ]);
        let generated = generate(&window, &unit_wall()).unwrap();
        assert_eq!(generated.binding(FRAME).unwrap().material, Some(MaterialId(1)));
        assert_eq!(generated.binding(BAR).unwrap().material, None);
        assert_eq!(generated.binding(GLASS).unwrap().material, Some(MaterialId(4)));
    }

    #[test]
    fn test_oversized_frame_is_degenerate() {
        let window = config(&[("frame_thickness", 0.6.into())]);
        assert!(matches!(
            generate(&window, &unit_wall()),
            Err(crate::Error::DegenerateOpening(_))
        ));
    }
}
