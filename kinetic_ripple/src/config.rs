// Copyright 2025 the Kinetic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timing and sizing configuration for [`Ripple`](crate::Ripple).

use crate::easing::CubicBezier;

/// Delay before reacting to a touch, so swipes and scrolls do not flash a ripple (ms).
pub const TOUCH_DELAY_MS: u64 = 150;
/// Shortest time a press stays visible once started (ms).
pub const MINIMUM_PRESS_MS: u64 = 225;
/// Duration of the grow animation (ms).
pub const PRESS_GROW_MS: u64 = 450;
/// Initial ripple size as a fraction of the host's larger dimension.
pub const INITIAL_ORIGIN_SCALE: f64 = 0.2;
/// Extra radius past the host's diagonal.
pub const PADDING: f64 = 10.0;
/// Lower bound for the soft edge of the ripple.
pub const SOFT_EDGE_MINIMUM_SIZE: f64 = 75.0;
/// Soft edge as a fraction of the host's larger dimension.
pub const SOFT_EDGE_CONTAINER_RATIO: f64 = 0.35;

/// Configuration for a [`Ripple`](crate::Ripple).
///
/// [`RippleConfig::default`] uses the Material timings: a 150ms touch delay, a 225ms
/// minimum press, and a 450ms grow with the standard easing curve.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RippleConfig {
    /// Touch disambiguation delay in milliseconds.
    pub touch_delay_ms: u64,
    /// Minimum visible press duration in milliseconds.
    pub minimum_press_ms: u64,
    /// Grow animation duration in milliseconds.
    pub press_grow_ms: u64,
    /// Initial size as a fraction of the larger host dimension, in `(0, 1]`.
    pub initial_origin_scale: f64,
    /// Extra radius past the host's diagonal.
    pub padding: f64,
    /// Lower bound for the soft edge.
    pub soft_edge_minimum_size: f64,
    /// Soft edge as a fraction of the larger host dimension.
    pub soft_edge_container_ratio: f64,
    /// Easing applied to the grow animation.
    pub easing: CubicBezier,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            touch_delay_ms: TOUCH_DELAY_MS,
            minimum_press_ms: MINIMUM_PRESS_MS,
            press_grow_ms: PRESS_GROW_MS,
            initial_origin_scale: INITIAL_ORIGIN_SCALE,
            padding: PADDING,
            soft_edge_minimum_size: SOFT_EDGE_MINIMUM_SIZE,
            soft_edge_container_ratio: SOFT_EDGE_CONTAINER_RATIO,
            easing: CubicBezier::STANDARD,
        }
    }
}

impl RippleConfig {
    /// Create a configuration with custom timings and default sizing.
    ///
    /// # Arguments
    /// * `touch_delay_ms` - Delay before a touch is treated as a hold
    /// * `minimum_press_ms` - Minimum visible press duration
    /// * `press_grow_ms` - Grow animation duration
    pub fn with_timings(touch_delay_ms: u64, minimum_press_ms: u64, press_grow_ms: u64) -> Self {
        Self {
            touch_delay_ms,
            minimum_press_ms,
            press_grow_ms,
            ..Self::default()
        }
    }

    /// Check that the configuration describes a drawable ripple.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.press_grow_ms == 0 {
            return Err(ConfigError::ZeroGrowDuration);
        }
        if self.minimum_press_ms > self.press_grow_ms {
            return Err(ConfigError::MinimumPressExceedsGrow {
                minimum_press_ms: self.minimum_press_ms,
                press_grow_ms: self.press_grow_ms,
            });
        }
        if !(self.initial_origin_scale > 0.0 && self.initial_origin_scale <= 1.0) {
            return Err(ConfigError::InitialScaleOutOfRange(self.initial_origin_scale));
        }
        if !(self.padding >= 0.0
            && self.soft_edge_minimum_size >= 0.0
            && self.soft_edge_container_ratio >= 0.0)
        {
            return Err(ConfigError::NegativeExtent);
        }
        if !self.easing.is_valid() {
            return Err(ConfigError::InvalidEasing(self.easing));
        }
        Ok(())
    }
}

/// Reasons a [`RippleConfig`] is rejected.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The grow animation would have no duration.
    #[error("grow animation duration must be non-zero")]
    ZeroGrowDuration,
    /// A press would have to stay visible longer than the grow takes.
    #[error("minimum press of {minimum_press_ms}ms exceeds the {press_grow_ms}ms grow")]
    MinimumPressExceedsGrow {
        /// Configured minimum press.
        minimum_press_ms: u64,
        /// Configured grow duration.
        press_grow_ms: u64,
    },
    /// The initial origin scale is not in `(0, 1]`.
    #[error("initial origin scale {0} is outside (0, 1]")]
    InitialScaleOutOfRange(f64),
    /// Padding or soft edge values are negative or NaN.
    #[error("padding and soft edge sizes must be non-negative")]
    NegativeExtent,
    /// Easing control points have x coordinates outside `[0, 1]`.
    #[error("easing {0:?} has control points outside [0, 1] on the time axis")]
    InvalidEasing(CubicBezier),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(RippleConfig::default().validate(), Ok(()));
    }

    #[test]
    fn zero_grow_is_rejected() {
        let config = RippleConfig::with_timings(150, 0, 0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroGrowDuration));
    }

    #[test]
    fn minimum_press_longer_than_grow_is_rejected() {
        let config = RippleConfig::with_timings(150, 500, 450);
        assert_eq!(
            config.validate(),
            Err(ConfigError::MinimumPressExceedsGrow {
                minimum_press_ms: 500,
                press_grow_ms: 450,
            })
        );
    }

    #[test]
    fn initial_scale_bounds() {
        let mut config = RippleConfig::default();
        config.initial_origin_scale = 0.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::InitialScaleOutOfRange(0.0))
        );
        config.initial_origin_scale = 1.0;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn negative_soft_edge_is_rejected() {
        let config = RippleConfig {
            soft_edge_minimum_size: -1.0,
            ..RippleConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NegativeExtent));
    }

    #[test]
    fn easing_outside_time_axis_is_rejected() {
        let easing = CubicBezier::new(1.5, 0.0, 0.0, 1.0);
        let config = RippleConfig {
            easing,
            ..RippleConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidEasing(easing)));
    }
}
