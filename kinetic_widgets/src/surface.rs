// Copyright 2025 the Kinetic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interactive surface shared by every control.

use kinetic_focus::{FocusRing, FocusVisibility};
use kinetic_pointer::PointerEvent;
use kinetic_ripple::{Ripple, RippleEffects};
use kurbo::Rect;

/// Press feedback plus focus ring for one control.
///
/// Hosts forward raw input here; the owning control layers its own semantics (toggling,
/// selection, events) on top of [`on_click`](Self::on_click).
#[derive(Clone, Debug)]
pub struct Surface {
    ripple: Ripple,
    ring: FocusRing,
}

impl Surface {
    /// A surface whose ripple is clipped to the host.
    pub fn new() -> Self {
        Self {
            ripple: Ripple::new(),
            ring: FocusRing::new(),
        }
    }

    /// A surface with a circular ripple, for icon-shaped controls.
    pub fn unbounded() -> Self {
        Self {
            ripple: Ripple::unbounded(),
            ring: FocusRing::new(),
        }
    }

    /// The press feedback state.
    pub fn ripple(&self) -> &Ripple {
        &self.ripple
    }

    /// Mutable access to the press feedback state.
    pub fn ripple_mut(&mut self) -> &mut Ripple {
        &mut self.ripple
    }

    /// The focus ring state.
    pub fn focus_ring(&self) -> &FocusRing {
        &self.ring
    }

    /// `true` if the strong focus ring should be drawn.
    pub fn shows_focus_ring(&self) -> bool {
        self.ring.visible()
    }

    /// Report the host's bounds.
    pub fn set_bounds(&mut self, bounds: Option<Rect>) {
        self.ripple.set_bounds(bounds);
    }

    pub(crate) fn set_disabled(&mut self, disabled: bool) -> RippleEffects {
        if disabled {
            self.ring.hide();
        }
        self.ripple.set_disabled(disabled)
    }

    /// A pointer entered.
    pub fn on_pointer_enter(&mut self, event: &PointerEvent) -> RippleEffects {
        self.ripple.on_pointer_enter(event)
    }

    /// A pointer left.
    pub fn on_pointer_leave(&mut self, event: &PointerEvent, now: u64) -> RippleEffects {
        self.ripple.on_pointer_leave(event, now)
    }

    /// A pointer went down. Records the press on `signal` before the ring reads it.
    pub fn on_pointer_down(
        &mut self,
        signal: &FocusVisibility,
        event: &PointerEvent,
        now: u64,
    ) -> RippleEffects {
        self.ring.on_pointer_down(signal);
        self.ripple.on_pointer_down(event, now)
    }

    /// A pointer went up.
    pub fn on_pointer_up(&mut self, event: &PointerEvent, now: u64) -> RippleEffects {
        self.ripple.on_pointer_up(event, now)
    }

    /// The platform canceled the pointer.
    pub fn on_pointer_cancel(&mut self, event: &PointerEvent, now: u64) -> RippleEffects {
        self.ripple.on_pointer_cancel(event, now)
    }

    /// A context menu opened.
    pub fn on_context_menu(&mut self, now: u64) -> RippleEffects {
        self.ripple.on_context_menu(now)
    }

    /// The control gained focus.
    pub fn on_focus(&mut self, signal: &FocusVisibility) -> RippleEffects {
        if self.ripple.is_disabled() {
            return RippleEffects::new();
        }
        self.ring.on_focus(signal);
        self.ripple.on_focus_in()
    }

    /// The control lost focus.
    pub fn on_blur(&mut self) -> RippleEffects {
        self.ring.on_blur();
        self.ripple.on_focus_out()
    }

    /// Run due ripple continuations.
    pub fn advance(&mut self, now: u64) -> RippleEffects {
        self.ripple.advance(now)
    }

    /// Earliest time the host should call [`advance`](Self::advance).
    pub fn next_deadline(&self) -> Option<u64> {
        self.ripple.next_deadline()
    }

    pub(crate) fn on_click(&mut self, now: u64) -> RippleEffects {
        self.ripple.on_click(now)
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::num::NonZeroU64;
    use kinetic_pointer::{PointerButtons, PointerKind};
    use kurbo::Point;

    fn mouse() -> PointerEvent {
        PointerEvent::new(NonZeroU64::new(1).unwrap(), PointerKind::Mouse, Point::new(4.0, 4.0))
            .with_buttons(PointerButtons::PRIMARY)
    }

    #[test]
    fn clicking_a_focused_control_hides_the_ring() {
        let signal = FocusVisibility::new();
        let mut surface = Surface::new();
        surface.set_bounds(Some(Rect::new(0.0, 0.0, 40.0, 40.0)));

        surface.on_focus(&signal);
        assert!(surface.shows_focus_ring());

        surface.on_pointer_down(&signal, &mouse(), 0);
        assert!(!surface.shows_focus_ring());
        assert!(surface.ripple().is_pressed());
    }

    #[test]
    fn disabled_surface_ignores_focus() {
        let signal = FocusVisibility::new();
        let mut surface = Surface::unbounded();
        surface.on_focus(&signal);
        surface.set_disabled(true);
        assert!(!surface.shows_focus_ring());

        assert!(surface.on_focus(&signal).is_empty());
        assert!(!surface.shows_focus_ring());
    }
}
