// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Placement regions handed to generators by the host
//!
//! World space is Z-up. Wall-mounted elements are built in a local frame
//! with X along the wall, Y up the wall and Z pointing out of it.

use nalgebra::{Matrix4, Point2, Point3, Vector3};

use crate::error::{Error, Result};
use crate::polygon::{self, MIN_AREA_THRESHOLD};
use crate::triangulation::calculate_polygon_normal;

/// Build a local-to-world matrix whose columns are the given axes
pub fn frame_matrix(
    origin: &Point3<f64>,
    x_axis: &Vector3<f64>,
    y_axis: &Vector3<f64>,
    z_axis: &Vector3<f64>,
) -> Matrix4<f64> {
    let mut transform = Matrix4::identity();
    transform[(0, 0)] = x_axis.x;
    transform[(1, 0)] = x_axis.y;
    transform[(2, 0)] = x_axis.z;
    transform[(0, 1)] = y_axis.x;
    transform[(1, 1)] = y_axis.y;
    transform[(2, 1)] = y_axis.z;
    transform[(0, 2)] = z_axis.x;
    transform[(1, 2)] = z_axis.y;
    transform[(2, 2)] = z_axis.z;
    transform[(0, 3)] = origin.x;
    transform[(1, 3)] = origin.y;
    transform[(2, 3)] = origin.z;
    transform
}

/// Rectangular patch of a wall that an opening or balcony occupies
#[derive(Debug, Clone, PartialEq)]
pub struct WallFace {
    /// World position of the bottom-left corner, seen from outside
    pub origin: Point3<f64>,
    pub x_axis: Vector3<f64>,
    pub y_axis: Vector3<f64>,
    /// Outward unit normal
    pub normal: Vector3<f64>,
    pub width: f64,
    pub height: f64,
}

impl WallFace {
    /// Wall patch with its bottom-left corner at `origin`, facing `normal`
    pub fn facing(origin: Point3<f64>, normal: Vector3<f64>, width: f64, height: f64) -> Result<Self> {
        let normal = normal
            .try_normalize(1e-10)
            .ok_or_else(|| Error::DegenerateRegion("wall normal has zero length".to_string()))?;
        if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
            return Err(Error::DegenerateRegion(format!(
                "wall patch is {width} x {height}"
            )));
        }
        let (x_axis, y_axis) = wall_axes(&normal);
        Ok(Self {
            origin,
            x_axis,
            y_axis,
            normal,
            width,
            height,
        })
    }

    /// Wall patch in the XZ plane facing -Y, bottom-left corner at the origin
    pub fn upright(width: f64, height: f64) -> Result<Self> {
        Self::facing(Point3::origin(), -Vector3::y(), width, height)
    }

    /// Reduce a planar wall polygon to its in-plane bounding rectangle.
    ///
    /// The outward normal follows the polygon's winding (counter-clockwise
    /// seen from outside).
    pub fn from_polygon(points: &[Point3<f64>]) -> Result<Self> {
        if points.len() < 3 {
            return Err(Error::DegenerateRegion(format!(
                "wall polygon has {} points",
                points.len()
            )));
        }

        let normal = calculate_polygon_normal(points);
        let (x_axis, y_axis) = wall_axes(&normal);
        let anchor = points[0];
        let local: Vec<Point2<f64>> = points
            .iter()
            .map(|p| {
                let v = p - anchor;
                Point2::new(v.dot(&x_axis), v.dot(&y_axis))
            })
            .collect();

        if polygon::signed_area(&local).abs() <= MIN_AREA_THRESHOLD {
            return Err(Error::DegenerateRegion("wall polygon has no area".to_string()));
        }

        let (min, max) = polygon::bounds(&local)
            .ok_or_else(|| Error::DegenerateRegion("wall polygon is empty".to_string()))?;

        Ok(Self {
            origin: anchor + x_axis * min.x + y_axis * min.y,
            x_axis,
            y_axis,
            normal,
            width: max.x - min.x,
            height: max.y - min.y,
        })
    }

    /// Local (along, up, out) to world transform
    pub fn to_world(&self) -> Matrix4<f64> {
        frame_matrix(&self.origin, &self.x_axis, &self.y_axis, &self.normal)
    }
}

/// In-plane axes of a wall: Y follows world up where possible
fn wall_axes(normal: &Vector3<f64>) -> (Vector3<f64>, Vector3<f64>) {
    let up = Vector3::z();
    let projected = up - normal * normal.dot(&up);
    let y_axis = match projected.try_normalize(1e-6) {
        Some(y) => y,
        // Horizontal face; pick world Y as its "up"
        None => {
            let fallback = Vector3::y() - normal * normal.dot(&Vector3::y());
            fallback.try_normalize(1e-6).unwrap_or_else(Vector3::x)
        }
    };
    (y_axis.cross(normal), y_axis)
}

/// Ground polygon at an elevation
#[derive(Debug, Clone, PartialEq)]
pub struct Footprint {
    /// Counter-clockwise seen from above
    pub points: Vec<Point2<f64>>,
    pub elevation: f64,
}

impl Footprint {
    /// Normalizes the winding to counter-clockwise. Open paths (railings)
    /// may have just two points, so only closed areas are checked by
    /// [`Footprint::area_checked`].
    pub fn new(points: Vec<Point2<f64>>, elevation: f64) -> Self {
        let points = polygon::dedup(&points, polygon::EPSILON_2D);
        let points = if points.len() >= 3 {
            polygon::ensure_ccw(&points)
        } else {
            points
        };
        Self { points, elevation }
    }

    /// Axis-aligned rectangle centered on the origin
    pub fn rectangle(width: f64, length: f64, elevation: f64) -> Self {
        Self::new(
            polygon::rect(-width / 2.0, -length / 2.0, width / 2.0, length / 2.0),
            elevation,
        )
    }

    /// The same outline at another elevation
    pub fn lifted(&self, elevation: f64) -> Self {
        Self {
            points: self.points.clone(),
            elevation,
        }
    }

    /// Fails unless the footprint encloses an area
    pub fn area_checked(&self) -> Result<&[Point2<f64>]> {
        if polygon::is_valid_contour(&self.points) {
            Ok(&self.points)
        } else {
            Err(Error::DegenerateRegion(format!(
                "footprint with {} points encloses no area",
                self.points.len()
            )))
        }
    }
}

/// Geometric context an element is generated into
#[derive(Debug, Clone, PartialEq)]
pub enum Region {
    Wall(WallFace),
    Footprint(Footprint),
    /// Anchor point and horizontal heading
    Point {
        origin: Point3<f64>,
        direction: Vector3<f64>,
    },
}

impl Region {
    pub fn origin() -> Self {
        Region::Point {
            origin: Point3::origin(),
            direction: Vector3::x(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_upright_wall_axes() {
        let wall = WallFace::upright(2.0, 1.0).unwrap();
        assert_relative_eq!(wall.x_axis, Vector3::x(), epsilon = 1e-12);
        assert_relative_eq!(wall.y_axis, Vector3::z(), epsilon = 1e-12);

        let corner = wall.to_world().transform_point(&Point3::new(2.0, 1.0, 0.5));
        assert_relative_eq!(corner, Point3::new(2.0, -0.5, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn test_wall_from_polygon() {
        // Wall in the YZ plane facing +X, counter-clockwise from outside
        let points = vec![
            Point3::new(3.0, 0.0, 1.0),
            Point3::new(3.0, 2.0, 1.0),
            Point3::new(3.0, 2.0, 2.5),
            Point3::new(3.0, 0.0, 2.5),
        ];
        let wall = WallFace::from_polygon(&points).unwrap();
        assert_relative_eq!(wall.normal, Vector3::x(), epsilon = 1e-12);
        assert_relative_eq!(wall.width, 2.0, epsilon = 1e-12);
        assert_relative_eq!(wall.height, 1.5, epsilon = 1e-12);
        assert_relative_eq!(wall.origin, Point3::new(3.0, 0.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_walls() {
        let collinear = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        ];
        assert!(matches!(
            WallFace::from_polygon(&collinear),
            Err(Error::DegenerateRegion(_))
        ));
        assert!(WallFace::upright(0.0, 1.0).is_err());
    }

    #[test]
    fn test_footprint_winding_is_normalized() {
        let cw = vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 0.0),
        ];
        let footprint = Footprint::new(cw, 0.0);
        assert!(polygon::signed_area(&footprint.points) > 0.0);
        assert!(Footprint::new(vec![Point2::origin()], 0.0).area_checked().is_err());
    }
}
