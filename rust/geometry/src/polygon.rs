// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Planar polygon helpers
//!
//! Contours are open point lists (the closing edge is implicit) in the XY
//! plane of whatever local frame the caller works in.

use nalgebra::{Point2, Vector2};

/// Epsilon for floating point comparisons in 2D operations
pub const EPSILON_2D: f64 = 1e-9;

/// Minimum area threshold - polygons smaller than this are considered degenerate
pub const MIN_AREA_THRESHOLD: f64 = 1e-10;

/// Axis-aligned rectangle as a counter-clockwise contour
pub fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<Point2<f64>> {
    vec![
        Point2::new(x0, y0),
        Point2::new(x1, y0),
        Point2::new(x1, y1),
        Point2::new(x0, y1),
    ]
}

/// Compute signed area of a contour (positive = CCW, negative = CW)
pub fn signed_area(contour: &[Point2<f64>]) -> f64 {
    if contour.len() < 3 {
        return 0.0;
    }

    let mut area = 0.0;
    let n = contour.len();

    for i in 0..n {
        let j = (i + 1) % n;
        area += contour[i].x * contour[j].y;
        area -= contour[j].x * contour[i].y;
    }

    area * 0.5
}

/// Ensure contour has counter-clockwise winding (positive area)
pub fn ensure_ccw(contour: &[Point2<f64>]) -> Vec<Point2<f64>> {
    if signed_area(contour) < 0.0 {
        contour.iter().rev().copied().collect()
    } else {
        contour.to_vec()
    }
}

/// At least three points enclosing a non-negligible area
pub fn is_valid_contour(contour: &[Point2<f64>]) -> bool {
    contour.len() >= 3 && signed_area(contour).abs() > MIN_AREA_THRESHOLD
}

/// Check if a polygon is convex (all turns have the same sign)
pub fn is_convex(points: &[Point2<f64>]) -> bool {
    if points.len() < 3 {
        return false;
    }

    let n = points.len();
    let mut sign = 0i8;

    for i in 0..n {
        let p0 = &points[i];
        let p1 = &points[(i + 1) % n];
        let p2 = &points[(i + 2) % n];

        let cross = (p1.x - p0.x) * (p2.y - p1.y) - (p1.y - p0.y) * (p2.x - p1.x);

        if cross.abs() > 1e-10 {
            let current_sign = if cross > 0.0 { 1i8 } else { -1i8 };
            if sign == 0 {
                sign = current_sign;
            } else if sign != current_sign {
                return false;
            }
        }
    }

    true
}

/// Compute bounding box of a contour
pub fn bounds(contour: &[Point2<f64>]) -> Option<(Point2<f64>, Point2<f64>)> {
    let first = *contour.first()?;
    Some(contour.iter().skip(1).fold((first, first), |(min, max), p| {
        (
            Point2::new(min.x.min(p.x), min.y.min(p.y)),
            Point2::new(max.x.max(p.x), max.y.max(p.y)),
        )
    }))
}

/// Area centroid, falling back to the vertex average for degenerate input
pub fn centroid(contour: &[Point2<f64>]) -> Point2<f64> {
    let n = contour.len();
    if n == 0 {
        return Point2::origin();
    }

    let area = signed_area(contour);
    if area.abs() <= MIN_AREA_THRESHOLD {
        let sum = contour.iter().fold(Vector2::zeros(), |acc, p| acc + p.coords);
        return Point2::from(sum / n as f64);
    }

    let mut cx = 0.0;
    let mut cy = 0.0;
    for i in 0..n {
        let p = contour[i];
        let q = contour[(i + 1) % n];
        let cross = p.x * q.y - q.x * p.y;
        cx += (p.x + q.x) * cross;
        cy += (p.y + q.y) * cross;
    }
    Point2::new(cx / (6.0 * area), cy / (6.0 * area))
}

/// Drop consecutive points closer than `eps`, including a last point that
/// repeats the first.
pub fn dedup(contour: &[Point2<f64>], eps: f64) -> Vec<Point2<f64>> {
    let mut out: Vec<Point2<f64>> = Vec::with_capacity(contour.len());
    for p in contour {
        match out.last() {
            Some(last) if (p - last).norm() <= eps => {}
            _ => out.push(*p),
        }
    }
    while out.len() > 1 && (out[out.len() - 1] - out[0]).norm() <= eps {
        out.pop();
    }
    out
}

/// Left-hand unit normal of the edge `a -> b`
#[inline]
fn edge_normal(a: &Point2<f64>, b: &Point2<f64>) -> Vector2<f64> {
    let d = b - a;
    let len = d.norm();
    if len <= EPSILON_2D {
        return Vector2::zeros();
    }
    Vector2::new(-d.y / len, d.x / len)
}

/// Miter offset of a vertex between edges with unit normals `n0` and `n1`
fn miter(n0: Vector2<f64>, n1: Vector2<f64>, distance: f64) -> Vector2<f64> {
    let sum = n0 + n1;
    let len = sum.norm();
    if len <= EPSILON_2D {
        // Hairpin turn; the miter is unbounded
        return n0 * distance;
    }
    let m = sum / len;
    let cos = m.dot(&n0);
    if cos.abs() <= EPSILON_2D {
        return n0 * distance;
    }
    m * (distance / cos)
}

/// Offset a counter-clockwise contour inward by `distance`; negative
/// distances offset outward. Every vertex moves along its miter, so the
/// result keeps the input's vertex count and order.
pub fn inset(contour: &[Point2<f64>], distance: f64) -> Vec<Point2<f64>> {
    let n = contour.len();
    if n < 3 {
        return contour.to_vec();
    }

    (0..n)
        .map(|i| {
            let prev = &contour[(i + n - 1) % n];
            let curr = &contour[i];
            let next = &contour[(i + 1) % n];
            curr + miter(edge_normal(prev, curr), edge_normal(curr, next), distance)
        })
        .collect()
}

/// Offset an open polyline to the right of its direction of travel.
/// End points move perpendicular to their single edge.
pub fn offset_polyline(points: &[Point2<f64>], distance: f64) -> Vec<Point2<f64>> {
    let n = points.len();
    if n < 2 {
        return points.to_vec();
    }

    (0..n)
        .map(|i| {
            let before = (i > 0).then(|| -edge_normal(&points[i - 1], &points[i]));
            let after = (i + 1 < n).then(|| -edge_normal(&points[i], &points[i + 1]));
            let shift = match (before, after) {
                (Some(a), Some(b)) => miter(a, b, distance),
                (Some(a), None) | (None, Some(a)) => a * distance,
                (None, None) => Vector2::zeros(),
            };
            points[i] + shift
        })
        .collect()
}

/// Sutherland-Hodgman clip of `subject` against a convex counter-clockwise
/// `clip` contour. Returns an empty contour when nothing is left.
pub fn clip_polygon(subject: &[Point2<f64>], clip: &[Point2<f64>]) -> Vec<Point2<f64>> {
    let mut output = subject.to_vec();
    let n = clip.len();

    for i in 0..n {
        if output.is_empty() {
            break;
        }
        let a = clip[i];
        let b = clip[(i + 1) % n];
        let inside = |p: &Point2<f64>| (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x) >= -EPSILON_2D;

        let input = std::mem::take(&mut output);
        let m = input.len();
        for j in 0..m {
            let current = input[j];
            let previous = input[(j + m - 1) % m];
            match (inside(&previous), inside(&current)) {
                (true, true) => output.push(current),
                (true, false) => output.extend(intersect(&previous, &current, &a, &b)),
                (false, true) => {
                    output.extend(intersect(&previous, &current, &a, &b));
                    output.push(current);
                }
                (false, false) => {}
            }
        }
    }

    dedup(&output, EPSILON_2D)
}

/// Intersection of segment `p -> q` with the infinite line through `a -> b`
fn intersect(
    p: &Point2<f64>,
    q: &Point2<f64>,
    a: &Point2<f64>,
    b: &Point2<f64>,
) -> Option<Point2<f64>> {
    let r = q - p;
    let s = b - a;
    let denom = r.x * s.y - r.y * s.x;
    if denom.abs() <= f64::EPSILON {
        return None;
    }
    let t = ((a.x - p.x) * s.y - (a.y - p.y) * s.x) / denom;
    Some(p + r * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_signed_area_and_winding() {
        let square = rect(0.0, 0.0, 2.0, 2.0);
        assert_relative_eq!(signed_area(&square), 4.0);

        let cw: Vec<_> = square.iter().rev().copied().collect();
        assert_relative_eq!(signed_area(&cw), -4.0);
        assert_relative_eq!(signed_area(&ensure_ccw(&cw)), 4.0);
    }

    #[test]
    fn test_inset_square() {
        let inner = inset(&rect(0.0, 0.0, 1.0, 1.0), 0.1);
        assert_eq!(inner.len(), 4);
        assert_relative_eq!(inner[0], Point2::new(0.1, 0.1), epsilon = 1e-12);
        assert_relative_eq!(inner[2], Point2::new(0.9, 0.9), epsilon = 1e-12);

        let outer = inset(&rect(0.0, 0.0, 1.0, 1.0), -0.5);
        assert_relative_eq!(signed_area(&outer), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_clip_rect_against_triangle() {
        let triangle = vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(0.0, 2.0),
        ];
        let clipped = clip_polygon(&rect(0.0, 0.0, 2.0, 2.0), &triangle);
        assert_relative_eq!(signed_area(&clipped), 2.0, epsilon = 1e-12);

        let outside = clip_polygon(&rect(3.0, 3.0, 4.0, 4.0), &triangle);
        assert!(!is_valid_contour(&outside));
    }

    #[test]
    fn test_dedup_closing_point() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 0.0),
        ];
        assert_eq!(dedup(&points, 1e-9).len(), 3);
    }

    #[test]
    fn test_centroid_and_bounds() {
        let square = rect(1.0, 1.0, 3.0, 5.0);
        assert_relative_eq!(centroid(&square), Point2::new(2.0, 3.0), epsilon = 1e-12);
        let (min, max) = bounds(&square).unwrap();
        assert_eq!(min, Point2::new(1.0, 1.0));
        assert_eq!(max, Point2::new(3.0, 5.0));
        assert!(bounds(&[]).is_none());
    }

    #[test]
    fn test_offset_polyline_moves_right() {
        let line = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        let shifted = offset_polyline(&line, 0.5);
        assert_relative_eq!(shifted[0], Point2::new(0.0, -0.5), epsilon = 1e-12);
        assert_relative_eq!(shifted[1], Point2::new(1.0, -0.5), epsilon = 1e-12);
    }
}
