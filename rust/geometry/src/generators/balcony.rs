// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Balcony generator: a slab cantilevered from the bottom of a wall patch
//! with a railing around its three free edges.

use cynthia_core::elements::BalconyConfig;
use cynthia_core::ElementKind;
use nalgebra::{Point2, Point3, Vector3};

use super::expect_wall;
use super::railing::{build_railing, POST, RAIL};
use crate::error::Result;
use crate::extrusion::cuboid;
use crate::mesh::{GeneratedMesh, MaterialBinding, Mesh};
use crate::region::{frame_matrix, Region};

pub const SLAB: &str = "slab";

pub fn generate(config: &BalconyConfig, region: &Region) -> Result<GeneratedMesh> {
    let wall = expect_wall(ElementKind::Balcony, region)?;
    let mut mesh = Mesh::with_groups(&[SLAB, POST, RAIL]);

    // Z-up frame centered on the wall patch's bottom edge, -Y pointing out
    // of the wall
    let half_width = config.width / 2.0;
    cuboid(
        &mut mesh,
        Point3::new(-half_width, -config.depth, -config.slab_thickness),
        Point3::new(half_width, 0.0, 0.0),
        0,
    );

    let inset = config.rail.post_size / 2.0;
    let (x, y) = (half_width - inset, config.depth - inset);
    let path = [
        Point2::new(-x, -inset),
        Point2::new(-x, -y),
        Point2::new(x, -y),
        Point2::new(x, -inset),
    ];
    build_railing(&mut mesh, &path, false, &config.rail, 0.0, (1, 2));

    let ground_to_wall = frame_matrix(
        &Point3::new(wall.width / 2.0, 0.0, 0.0),
        &Vector3::x(),
        &-Vector3::z(),
        &Vector3::y(),
    );
    mesh.transform(&(wall.to_world() * ground_to_wall));

    let bindings = vec![
        MaterialBinding { group: SLAB, material: config.mat_slab },
        MaterialBinding { group: POST, material: config.mat_railing },
        MaterialBinding { group: RAIL, material: config.mat_railing },
    ];
    Ok(GeneratedMesh::new(mesh, bindings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::WallFace;
    use approx::assert_relative_eq;
    use cynthia_core::elements::balcony::BALCONY;
    use cynthia_core::Record;

    #[test]
    fn test_balcony_projects_out_of_the_wall() {
        let config = BalconyConfig::resolve(&Record::new(&BALCONY)).unwrap();
        let wall = WallFace::upright(2.0, 2.5).unwrap();
        let mesh = generate(&config, &Region::Wall(wall)).unwrap().mesh;

        assert_eq!(mesh.group_faces(SLAB).len(), 6);
        assert!(!mesh.group_faces(POST).is_empty());
        assert_eq!(mesh.group_faces(RAIL).len(), 3 * 6);

        // The upright wall faces -Y, so the balcony reaches into -Y
        let (min, max) = mesh.bounds().unwrap();
        assert_relative_eq!(min.y, -config.depth, epsilon = 1e-9);
        assert!(max.y <= 1e-9);
        assert_relative_eq!(min.z, -config.slab_thickness, epsilon = 1e-9);
        assert_relative_eq!((min.x + max.x) / 2.0, 1.0, epsilon = 1e-9);
    }
}
