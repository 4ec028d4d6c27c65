// Copyright 2025 the Kinetic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Kinetic Ripple: headless press feedback.
//!
//! A ripple is the visual response a control gives to being pressed: a soft circle that
//! grows from the point of contact toward the control's center and fades once the press
//! resolves. This crate owns everything about that response except painting it.
//!
//! ## What it decides
//!
//! - **Touch disambiguation**: a touch waits [`TOUCH_DELAY_MS`] before it counts as a
//!   hold, so swipes and scrolls never flash a ripple. A touch that lifts sooner is a
//!   tap and shows the press at once.
//! - **Pointer ownership**: only the primary pointer that started a gesture can advance
//!   it; see [`kinetic_pointer::is_reactable`].
//! - **Minimum press**: a press resolved early stays visible until
//!   [`MINIMUM_PRESS_MS`] after it began, unless a newer press has replaced it.
//! - **Synthesized activation**: a click with no gesture in progress (keyboard) shows a
//!   full press from the center.
//! - **Grow geometry**: initial size, final scale, and travel of the ripple square, from
//!   the host's bounds ([`RippleGeometry`]).
//!
//! ## Driving it
//!
//! The crate performs no I/O and keeps no clock. Every event method takes the current
//! time in milliseconds. Suspensions are explicit: [`Ripple::next_deadline`] tells the
//! host when to call [`Ripple::advance`], and each continuation re-checks that the
//! gesture or animation it belongs to is still current before it does anything.
//!
//! Every call returns [`RippleEffects`] describing what changed, so hosts can schedule
//! repaints or timers without polling.
//!
//! ```
//! use core::num::NonZeroU64;
//! use kurbo::{Point, Rect};
//! use kinetic_pointer::{PointerEvent, PointerKind};
//! use kinetic_ripple::{Phase, Ripple};
//!
//! let mut ripple = Ripple::new();
//! ripple.set_bounds(Some(Rect::new(0.0, 0.0, 48.0, 48.0)));
//!
//! let id = NonZeroU64::new(3).unwrap();
//! let finger = PointerEvent::new(id, PointerKind::Touch, Point::new(24.0, 24.0));
//! ripple.on_pointer_down(&finger, 0);
//! assert_eq!(ripple.phase(), Phase::TouchPending);
//! assert!(!ripple.is_pressed());
//!
//! // The finger stays down past the delay: it is a hold.
//! ripple.advance(ripple.next_deadline().unwrap());
//! assert_eq!(ripple.phase(), Phase::Holding);
//! assert!(ripple.is_pressed());
//!
//! // Mid-grow frame for the renderer.
//! let frame = ripple.frame(300).unwrap();
//! assert!(frame.scale > 1.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std`.

#![no_std]

mod animation;
mod config;
mod easing;
mod geometry;
mod ripple;
mod timer;

pub use animation::{AnimationId, GrowAnimation, RippleFrame};
pub use config::{
    ConfigError, INITIAL_ORIGIN_SCALE, MINIMUM_PRESS_MS, PADDING, PRESS_GROW_MS,
    RippleConfig, SOFT_EDGE_CONTAINER_RATIO, SOFT_EDGE_MINIMUM_SIZE, TOUCH_DELAY_MS,
};
pub use easing::CubicBezier;
pub use geometry::RippleGeometry;
pub use ripple::{InteractionSession, Phase, Ripple, RippleEffect, RippleEffects, RippleState};
pub use timer::{Fired, TimerQueue, TimerToken};
