// Copyright 2025 the Kinetic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grow geometry: how big the ripple starts, how far it scales, and where it travels.

use kurbo::{Point, Size, Vec2};

use crate::config::RippleConfig;

/// Geometry of one grow animation, in host-local coordinates.
///
/// The ripple is a square of side [`initial_size`](Self::initial_size) that animates
/// from `translate(start) scale(1)` to `translate(end) scale(scale)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RippleGeometry {
    /// Side length of the ripple square before scaling.
    pub initial_size: f64,
    /// Final scale factor.
    pub scale: f64,
    /// Translation at the start of the grow: the origin, centered on the square.
    pub start: Vec2,
    /// Translation at the end of the grow: the host's center, centered on the square.
    pub end: Vec2,
}

impl RippleGeometry {
    /// Compute grow geometry for a host of `size`.
    ///
    /// `origin` is the press position relative to the host's top-left corner, or `None`
    /// for presses with no pointer position (keyboard activation), which start from the
    /// center.
    ///
    /// - `initial_size = floor(max_dim * initial_origin_scale)`, made even when `unbounded`
    /// - `soft_edge = max(soft_edge_container_ratio * max_dim, soft_edge_minimum_size)`
    /// - `max_radius = hypot(width, height) + padding`
    /// - `scale = (max_radius + soft_edge) / initial_size`
    pub fn compute(
        size: Size,
        unbounded: bool,
        origin: Option<Point>,
        config: &RippleConfig,
    ) -> Self {
        let max_dim = size.width.max(size.height);
        let soft_edge =
            (config.soft_edge_container_ratio * max_dim).max(config.soft_edge_minimum_size);

        let mut initial_size = floor_non_negative(max_dim * config.initial_origin_scale);
        if unbounded {
            initial_size -= initial_size % 2.0;
        }

        let max_radius = Vec2::new(size.width, size.height).hypot() + config.padding;
        // Hosts under a few pixels have nothing to grow from.
        let scale = if initial_size > 0.0 {
            (max_radius + soft_edge) / initial_size
        } else {
            1.0
        };

        let half = initial_size / 2.0;
        let end = Vec2::new(
            (size.width - initial_size) / 2.0,
            (size.height - initial_size) / 2.0,
        );
        let origin = origin.unwrap_or(Point::new(size.width / 2.0, size.height / 2.0));
        let start = Vec2::new(origin.x - half, origin.y - half);

        Self {
            initial_size,
            scale,
            start,
            end,
        }
    }
}

/// `floor` for finite, non-negative values without relying on `std`.
#[expect(
    clippy::cast_possible_truncation,
    reason = "inputs are finite host dimensions, far below 2^53"
)]
fn floor_non_negative(v: f64) -> f64 {
    if v.is_nan() || v <= 0.0 {
        return 0.0;
    }
    (v as u64) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-2
    }

    #[test]
    fn bounded_rectangle_scale() {
        // 100×40 host: initial 20, radius ≈ 117.7, soft edge 75.
        let g = RippleGeometry::compute(
            Size::new(100.0, 40.0),
            false,
            Some(Point::new(10.0, 10.0)),
            &RippleConfig::default(),
        );
        assert_eq!(g.initial_size, 20.0);
        assert!(approx(g.scale, 9.635), "scale was {}", g.scale);
        assert_eq!(g.start, Vec2::new(0.0, 0.0));
        assert_eq!(g.end, Vec2::new(40.0, 10.0));
    }

    #[test]
    fn unbounded_rounds_initial_size_down_to_even() {
        // max_dim 48 → floor(9.6) = 9 → 8 when unbounded.
        let bounded =
            RippleGeometry::compute(Size::new(48.0, 48.0), false, None, &RippleConfig::default());
        let unbounded =
            RippleGeometry::compute(Size::new(48.0, 48.0), true, None, &RippleConfig::default());
        assert_eq!(bounded.initial_size, 9.0);
        assert_eq!(unbounded.initial_size, 8.0);
    }

    #[test]
    fn soft_edge_grows_with_large_hosts() {
        // 400 wide: soft edge 0.35 * 400 = 140 beats the 75 minimum.
        let g =
            RippleGeometry::compute(Size::new(400.0, 0.0), false, None, &RippleConfig::default());
        assert_eq!(g.initial_size, 80.0);
        assert!(approx(g.scale, (400.0 + 10.0 + 140.0) / 80.0));
    }

    #[test]
    fn missing_origin_starts_at_center() {
        let g =
            RippleGeometry::compute(Size::new(100.0, 40.0), false, None, &RippleConfig::default());
        assert_eq!(g.start, g.end);
    }

    #[test]
    fn degenerate_host_does_not_divide_by_zero() {
        let g = RippleGeometry::compute(Size::new(3.0, 3.0), true, None, &RippleConfig::default());
        assert_eq!(g.initial_size, 0.0);
        assert_eq!(g.scale, 1.0);
    }
}
