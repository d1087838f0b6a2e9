// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Railing generator: posts along a ground path, topped by a rail

use cynthia_core::elements::{RailConfig, RailingConfig};
use cynthia_core::ElementKind;
use nalgebra::{Point2, Point3};

use super::expect_footprint;
use crate::error::{Error, Result};
use crate::extrusion::{beam, cuboid};
use crate::mesh::{GeneratedMesh, MaterialBinding, Mesh};
use crate::polygon::EPSILON_2D;
use crate::region::Region;

pub const POST: &str = "post";
pub const RAIL: &str = "rail";

pub fn generate(config: &RailingConfig, region: &Region) -> Result<GeneratedMesh> {
    let footprint = expect_footprint(ElementKind::Railing, region)?;
    if footprint.points.len() < 2 {
        return Err(Error::DegenerateRegion(format!(
            "railing path has {} points",
            footprint.points.len()
        )));
    }

    let mut mesh = Mesh::with_groups(&[POST, RAIL]);
    build_railing(
        &mut mesh,
        &footprint.points,
        config.closed,
        &config.rail,
        footprint.elevation,
        (0, 1),
    );

    let bindings = vec![
        MaterialBinding { group: POST, material: config.mat_post },
        MaterialBinding { group: RAIL, material: config.mat_rail },
    ];
    Ok(GeneratedMesh::new(mesh, bindings))
}

/// Posts and rail along `path` in a Z-up frame. `groups` is
/// `(post, rail)`.
pub(crate) fn build_railing(
    mesh: &mut Mesh,
    path: &[Point2<f64>],
    closed: bool,
    rail: &RailConfig,
    base: f64,
    groups: (usize, usize),
) {
    let (post_group, rail_group) = groups;
    let n = path.len();
    let segments = if closed && n > 2 { n } else { n.saturating_sub(1) };

    let half = rail.post_size / 2.0;
    let post_top = base + (rail.post_height - rail.rail_size).max(0.0);
    let rail_z = base + rail.post_height - rail.rail_size / 2.0;

    let post = |mesh: &mut Mesh, at: Point2<f64>| {
        cuboid(
            mesh,
            Point3::new(at.x - half, at.y - half, base),
            Point3::new(at.x + half, at.y + half, post_top),
            post_group,
        );
    };

    for s in 0..segments {
        let a = path[s];
        let b = path[(s + 1) % n];
        let length = (b - a).norm();
        if length <= EPSILON_2D {
            continue;
        }

        // The segment's end post belongs to the next segment
        let intervals = (length / rail.post_spacing).ceil().max(1.0) as usize;
        for k in 0..intervals {
            post(mesh, a + (b - a) * (k as f64 / intervals as f64));
        }

        beam(
            mesh,
            Point3::new(a.x, a.y, rail_z),
            Point3::new(b.x, b.y, rail_z),
            rail.rail_size,
            rail_group,
        );
    }

    if segments < n {
        post(mesh, path[n - 1]);
    }
}
