// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Grid subdivision of planar faces

use cynthia_core::elements::SplitConfig;
use nalgebra::Point2;

use crate::polygon::{self, rect};

/// Positions of `count` evenly spaced interior dividers between `lo` and
/// `hi`; the two ends are not included.
pub fn grid_positions(lo: f64, hi: f64, count: u32) -> Vec<f64> {
    let step = (hi - lo) / (count as f64 + 1.0);
    (1..=count).map(|k| lo + step * k as f64).collect()
}

/// Like [`grid_positions`], with every cut shifted by `offset` times the
/// cut spacing.
pub fn split_positions(lo: f64, hi: f64, cuts: u32, offset: f64) -> Vec<f64> {
    let step = (hi - lo) / (cuts as f64 + 1.0);
    (1..=cuts).map(|k| lo + step * (k as f64 + offset)).collect()
}

/// Consecutive intervals delimited by `lo`, each cut, and `hi`
pub fn intervals(lo: f64, hi: f64, cuts: &[f64]) -> Vec<(f64, f64)> {
    let mut bounds = Vec::with_capacity(cuts.len() + 2);
    bounds.push(lo);
    bounds.extend_from_slice(cuts);
    bounds.push(hi);
    bounds.windows(2).map(|w| (w[0], w[1])).collect()
}

/// Cut a planar face into the cells of a grid laid over its bounding box.
///
/// Rows come out bottom to top, cells left to right within a row. Cells
/// the face does not reach are dropped.
pub fn split_face(face: &[Point2<f64>], split: &SplitConfig) -> Vec<Vec<Point2<f64>>> {
    let Some((min, max)) = polygon::bounds(face) else {
        return Vec::new();
    };
    if split.is_identity() {
        return vec![face.to_vec()];
    }

    let xs = split_positions(min.x, max.x, split.vertical_cuts, split.offset_x);
    let ys = split_positions(min.y, max.y, split.horizontal_cuts, split.offset_y);
    let columns = intervals(min.x, max.x, &xs);

    let mut cells = Vec::with_capacity((xs.len() + 1) * (ys.len() + 1));
    for (y0, y1) in intervals(min.y, max.y, &ys) {
        for &(x0, x1) in &columns {
            let cell = polygon::clip_polygon(face, &rect(x0, y0, x1, y1));
            if polygon::is_valid_contour(&cell) {
                cells.push(cell);
            } else {
                tracing::trace!(x0, y0, x1, y1, "split cell outside face");
            }
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_grid_positions() {
        let ys = grid_positions(0.0, 3.0, 2);
        assert_eq!(ys.len(), 2);
        assert_relative_eq!(ys[0], 1.0);
        assert_relative_eq!(ys[1], 2.0);
        assert!(grid_positions(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn test_split_offsets_stay_inside() {
        let xs = split_positions(0.0, 1.0, 3, 0.5);
        assert!(xs.iter().all(|x| *x > 0.0 && *x < 1.0));
        assert_relative_eq!(xs[0], 0.375);
    }

    #[test]
    fn test_split_square_into_cells() {
        let split = SplitConfig {
            horizontal_cuts: 1,
            vertical_cuts: 2,
            offset_x: 0.0,
            offset_y: 0.0,
        };
        let cells = split_face(&rect(0.0, 0.0, 3.0, 2.0), &split);
        assert_eq!(cells.len(), 6);
        let total: f64 = cells.iter().map(|c| polygon::signed_area(c)).sum();
        assert_relative_eq!(total, 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_identity_split_keeps_face() {
        let split = SplitConfig {
            horizontal_cuts: 0,
            vertical_cuts: 0,
            offset_x: 0.3,
            offset_y: 0.0,
        };
        assert_eq!(split_face(&rect(0.0, 0.0, 1.0, 1.0), &split).len(), 1);
    }
}
