// Copyright 2025 the Kinetic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform state that affects presentation.

/// Reading direction of the surrounding content.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextDirection {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

/// Explicit platform state, passed to widgets that animate or mirror.
///
/// Hosts build one from their platform's accessibility settings and update it when those
/// change; widgets never query the platform themselves.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Environment {
    /// The user asked for reduced motion; selection animations are skipped.
    pub prefers_reduced_motion: bool,
    /// Reading direction.
    pub direction: TextDirection,
}

impl Environment {
    /// Set the reduced-motion preference.
    pub const fn with_reduced_motion(mut self, reduced: bool) -> Self {
        self.prefers_reduced_motion = reduced;
        self
    }

    /// Set the reading direction.
    pub const fn with_direction(mut self, direction: TextDirection) -> Self {
        self.direction = direction;
        self
    }

    /// `true` for right-to-left content.
    pub const fn is_rtl(&self) -> bool {
        matches!(self.direction, TextDirection::Rtl)
    }
}
