// Copyright 2025 the Kinetic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Kinetic Pointer: pointer classification for press feedback.
//!
//! Press feedback (ripples, state layers) has to decide, for every incoming pointer
//! event, whether it should react at all. This crate answers that question with a
//! handful of pure predicates over a framework-neutral [`PointerEvent`] record:
//!
//! - [`PointerEvent::is_touch`]: the event comes from a touch contact.
//! - [`PointerEvent::is_primary_button_held`]: for mouse and pen, exactly the primary
//!   button is held (`buttons == 1`).
//! - [`is_reactable`]: the surface is enabled, the pointer is primary, it belongs to the
//!   active gesture (if any), and the per-[`EventClass`] device rule holds.
//!
//! Hover events (enter/leave) only react to mouse and pen, since a touch contact has no
//! meaningful hover. Press events (down/up/cancel) react to touch, or to mouse and pen
//! with the primary button held.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::num::NonZeroU64;
//! use kurbo::Point;
//! use kinetic_pointer::{EventClass, PointerButtons, PointerEvent, PointerKind, is_reactable};
//!
//! let id = NonZeroU64::new(1).unwrap();
//! let down = PointerEvent::new(id, PointerKind::Mouse, Point::new(4.0, 4.0))
//!     .with_buttons(PointerButtons::PRIMARY);
//!
//! // No gesture in flight: any primary mouse press with the primary button reacts.
//! assert!(is_reactable(true, &down, None, EventClass::Press));
//!
//! // A right-button press does not.
//! let context = down.with_buttons(PointerButtons::SECONDARY);
//! assert!(!is_reactable(true, &context, None, EventClass::Press));
//!
//! // A disabled surface never reacts.
//! assert!(!is_reactable(false, &down, None, EventClass::Press));
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std`.

#![no_std]

use core::num::NonZeroU64;

use kurbo::Point;

/// Pointer identifier for tracking which contact owns a gesture.
pub type PointerId = NonZeroU64;

/// The device class that produced a pointer event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// A mouse or trackpad.
    Mouse,
    /// A stylus.
    Pen,
    /// A finger on a touch surface.
    Touch,
}

bitflags::bitflags! {
    /// Buttons held while a pointer event was generated.
    ///
    /// Bit values follow the common platform convention where the primary button is
    /// bit 0, so a plain left-button press is exactly `1`.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct PointerButtons: u8 {
        /// Primary button (usually left).
        const PRIMARY   = 0b0000_0001;
        /// Secondary button (usually right).
        const SECONDARY = 0b0000_0010;
        /// Auxiliary button (usually the wheel).
        const AUXILIARY = 0b0000_0100;
        /// Back button.
        const BACK      = 0b0000_1000;
        /// Forward button.
        const FORWARD   = 0b0001_0000;
    }
}

/// A framework-neutral pointer event record.
///
/// Hosts translate their platform events into this shape before handing them to press
/// feedback. `position` must be in the same coordinate space as the bounds the host
/// reports for the surface.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// Identity of the contact that produced the event.
    pub pointer_id: PointerId,
    /// Device class.
    pub kind: PointerKind,
    /// Whether this is the primary pointer of its kind (first finger, the mouse).
    pub is_primary: bool,
    /// Buttons held at the time of the event.
    pub buttons: PointerButtons,
    /// Pointer position.
    pub position: Point,
}

impl PointerEvent {
    /// Create a primary pointer event with no buttons held.
    pub const fn new(pointer_id: PointerId, kind: PointerKind, position: Point) -> Self {
        Self {
            pointer_id,
            kind,
            is_primary: true,
            buttons: PointerButtons::empty(),
            position,
        }
    }

    /// Return a copy with the given held buttons.
    #[must_use]
    pub const fn with_buttons(mut self, buttons: PointerButtons) -> Self {
        self.buttons = buttons;
        self
    }

    /// Return a copy marked as a secondary (non-primary) pointer.
    #[must_use]
    pub const fn secondary(mut self) -> Self {
        self.is_primary = false;
        self
    }

    /// Return a copy at a different position.
    #[must_use]
    pub const fn at(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    /// `true` if the event comes from a touch contact.
    pub const fn is_touch(&self) -> bool {
        matches!(self.kind, PointerKind::Touch)
    }

    /// `true` if exactly the primary button is held.
    ///
    /// Chorded presses (primary plus another button) do not count.
    pub fn is_primary_button_held(&self) -> bool {
        self.buttons == PointerButtons::PRIMARY
    }
}

/// Which device rule applies to an event when deciding whether to react.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventClass {
    /// Pointer enter or leave.
    Hover,
    /// Pointer down, up, or cancel.
    Press,
}

impl EventClass {
    /// Apply the per-device rule for this class.
    pub fn admits(self, event: &PointerEvent) -> bool {
        match self {
            Self::Hover => !event.is_touch(),
            Self::Press => event.is_touch() || event.is_primary_button_held(),
        }
    }
}

/// Decide whether press feedback should react to `event`.
///
/// Returns `true` iff:
/// - the surface is `enabled`,
/// - the event comes from the primary pointer,
/// - no gesture is active, or `active_pointer` matches the event's pointer id,
/// - and the [`EventClass`] rule admits the event.
pub fn is_reactable(
    enabled: bool,
    event: &PointerEvent,
    active_pointer: Option<PointerId>,
    class: EventClass,
) -> bool {
    if !enabled || !event.is_primary {
        return false;
    }
    if active_pointer.is_some_and(|id| id != event.pointer_id) {
        return false;
    }
    class.admits(event)
}
