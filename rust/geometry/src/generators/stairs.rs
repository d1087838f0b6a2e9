// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Stairs generator: a straight run of solid steps

use cynthia_core::elements::StairsConfig;
use cynthia_core::{ElementKind, Value};
use nalgebra::{Point3, Vector3};

use super::Generation;
use crate::error::{Error, Result};
use crate::extrusion::cuboid;
use crate::mesh::{GeneratedMesh, MaterialBinding, Mesh};
use crate::region::{frame_matrix, Region};

pub const STEP: &str = "step";

pub fn generate(config: &StairsConfig, region: &Region) -> Result<Generation> {
    let Region::Point { origin, direction } = region else {
        return Err(Error::RegionMismatch {
            kind: ElementKind::Stairs,
            expected: "point",
        });
    };
    let run = Vector3::new(direction.x, direction.y, 0.0)
        .try_normalize(1e-10)
        .ok_or_else(|| Error::DegenerateRegion("stairs need a horizontal direction".to_string()))?;

    let rise = config.step_height();
    let tread = config.step_depth();
    let half_width = config.width / 2.0;

    let mut mesh = Mesh::with_groups(&[STEP]);
    for i in 0..config.step_count {
        let i = i as f64;
        cuboid(
            &mut mesh,
            Point3::new(i * tread, -half_width, 0.0),
            Point3::new((i + 1.0) * tread, half_width, (i + 1.0) * rise),
            0,
        );
    }
    mesh.transform(&frame_matrix(origin, &run, &Vector3::z().cross(&run), &Vector3::z()));

    Ok(Generation {
        mesh: GeneratedMesh::new(
            mesh,
            vec![MaterialBinding { group: STEP, material: config.mat_step }],
        ),
        derived: vec![
            ("step_height", Value::Real(rise)),
            ("step_depth", Value::Real(tread)),
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn config() -> StairsConfig {
        StairsConfig {
            step_count: 4,
            total_rise: 2.0,
            total_run: 3.0,
            width: 1.0,
            mat_step: None,
        }
    }

    #[test]
    fn test_steps_follow_the_direction() {
        let region = Region::Point {
            origin: Point3::new(0.0, 0.0, 1.0),
            direction: Vector3::new(0.0, 2.0, 0.0),
        };
        let generation = generate(&config(), &region).unwrap();
        let mesh = &generation.mesh.mesh;
        assert_eq!(mesh.face_count(), 4 * 6);

        let (min, max) = mesh.bounds().unwrap();
        assert_relative_eq!(max.y, 3.0, epsilon = 1e-12);
        assert_relative_eq!(max.z, 3.0, epsilon = 1e-12);
        assert_relative_eq!(min.x, -0.5, epsilon = 1e-12);

        assert_eq!(
            generation.derived,
            vec![("step_height", Value::Real(0.5)), ("step_depth", Value::Real(0.75))]
        );
    }

    #[test]
    fn test_vertical_direction_is_degenerate() {
        let region = Region::Point {
            origin: Point3::origin(),
            direction: Vector3::z(),
        };
        assert!(matches!(
            generate(&config(), &region),
            Err(Error::DegenerateRegion(_))
        ));
    }
}
