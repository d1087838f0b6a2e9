// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Arched opening tops

use std::f64::consts::PI;

use cynthia_core::elements::ArchConfig;
use nalgebra::Point2;

/// Half-ellipse from `(x1, spring_y)` over the top to `(x0, spring_y)`,
/// sampled into `segments` segments (`segments + 1` points).
pub fn elliptic_arc(x0: f64, x1: f64, spring_y: f64, rise: f64, segments: u32) -> Vec<Point2<f64>> {
    let segments = segments.max(1);
    let cx = (x0 + x1) / 2.0;
    let a = (x1 - x0) / 2.0;

    (0..=segments)
        .map(|i| {
            let theta = PI * i as f64 / segments as f64;
            Point2::new(cx + a * theta.cos(), spring_y + rise * theta.sin())
        })
        .collect()
}

/// Height at which an arch of `arch` springs from the sides of an opening
/// `height` tall.
#[inline]
pub fn spring_height(arch: &ArchConfig, height: f64) -> f64 {
    height - arch.offset * height
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_arc_endpoints_and_apex() {
        let arc = elliptic_arc(0.0, 2.0, 1.0, 0.5, 4);
        assert_eq!(arc.len(), 5);
        assert_relative_eq!(arc[0], Point2::new(2.0, 1.0), epsilon = 1e-12);
        assert_relative_eq!(arc[2], Point2::new(1.0, 1.5), epsilon = 1e-12);
        assert_relative_eq!(arc[4], Point2::new(0.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn test_zero_segments_is_a_chord() {
        let arc = elliptic_arc(0.0, 1.0, 0.0, 1.0, 0);
        assert_eq!(arc.len(), 2);
    }
}
