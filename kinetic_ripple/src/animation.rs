// Copyright 2025 the Kinetic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The grow animation and the frames a renderer samples from it.

use kurbo::{Affine, Vec2};

use crate::easing::CubicBezier;
use crate::geometry::RippleGeometry;

/// Identity of a grow animation.
///
/// Ids increase monotonically per [`Ripple`](crate::Ripple); a continuation that captured
/// an id can tell whether the animation it belongs to is still the current one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnimationId(pub(crate) u64);

impl AnimationId {
    /// Raw id, for logging and host-side bookkeeping.
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A running (or finished, held at its last frame) grow animation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GrowAnimation {
    /// Identity of this animation.
    pub id: AnimationId,
    /// Timestamp at which the grow began (ms).
    pub started_at: u64,
    /// Duration of the grow (ms).
    pub duration_ms: u64,
    /// Geometry resolved when the grow began.
    pub geometry: RippleGeometry,
    /// Timing function.
    pub easing: CubicBezier,
}

impl GrowAnimation {
    /// Milliseconds since the grow began.
    pub fn elapsed(&self, now: u64) -> u64 {
        now.saturating_sub(self.started_at)
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self, now: u64) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = self.elapsed(now).min(self.duration_ms);
        elapsed as f64 / self.duration_ms as f64
    }

    /// `true` once the grow has reached its final frame.
    pub fn is_finished(&self, now: u64) -> bool {
        self.elapsed(now) >= self.duration_ms
    }

    /// Sample the animation at `now`. Past the end, the final frame is held.
    pub fn sample(&self, now: u64) -> RippleFrame {
        let progress = self.progress(now);
        let eased = self.easing.ease(progress);
        let g = &self.geometry;
        RippleFrame {
            size: g.initial_size,
            translate: g.start.lerp(g.end, eased),
            scale: 1.0 + (g.scale - 1.0) * eased,
            progress,
        }
    }
}

/// One frame of the grow, ready to paint.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RippleFrame {
    /// Side of the unscaled ripple square.
    pub size: f64,
    /// Translation of the square's top-left corner in host-local coordinates.
    pub translate: Vec2,
    /// Uniform scale applied about the square's origin.
    pub scale: f64,
    /// Linear (uneased) progress in `[0, 1]`.
    pub progress: f64,
}

impl RippleFrame {
    /// The frame as `translate(..) scale(..)`, mapping square-local points to host-local.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.translate) * Affine::scale(self.scale)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};

    use super::*;
    use crate::config::RippleConfig;

    fn grow() -> GrowAnimation {
        GrowAnimation {
            id: AnimationId(1),
            started_at: 1000,
            duration_ms: 450,
            geometry: RippleGeometry::compute(
                Size::new(100.0, 40.0),
                false,
                Some(Point::new(10.0, 10.0)),
                &RippleConfig::default(),
            ),
            easing: CubicBezier::STANDARD,
        }
    }

    #[test]
    fn first_frame_is_unscaled_at_origin() {
        let frame = grow().sample(1000);
        assert_eq!(frame.scale, 1.0);
        assert_eq!(frame.translate, Vec2::new(0.0, 0.0));
        assert_eq!(frame.size, 20.0);
    }

    #[test]
    fn final_frame_is_held() {
        let a = grow();
        let end = a.sample(1450);
        let later = a.sample(9000);
        assert_eq!(end, later);
        assert!((end.scale - a.geometry.scale).abs() < 1e-9);
        assert_eq!(end.translate, Vec2::new(40.0, 10.0));
        assert!(a.is_finished(1450));
        assert!(!a.is_finished(1449));
    }

    #[test]
    fn samples_before_start_clamp_to_first_frame() {
        let a = grow();
        assert_eq!(a.elapsed(500), 0);
        assert_eq!(a.sample(500).progress, 0.0);
    }

    #[test]
    fn transform_maps_square_corners() {
        let frame = grow().sample(1450);
        let far = frame.transform() * Point::new(frame.size, frame.size);
        let expected = 40.0 + 20.0 * frame.scale;
        assert!((far.x - expected).abs() < 1e-9);
    }
}
