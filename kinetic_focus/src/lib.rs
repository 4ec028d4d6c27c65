// Copyright 2025 the Kinetic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Kinetic Focus: when to show a strong focus ring.
//!
//! Controls that receive focus from a mouse or a finger should not light up a prominent
//! focus ring; controls reached with the keyboard should. This crate models that
//! heuristic with two pieces:
//!
//! - [`FocusVisibility`]: a signal recording whether the most recent input was
//!   pointer-like or keyboard-like. A pointer-down anywhere flips it to
//!   [`Modality::Pointer`] before any focus event reaches a widget; a key-down flips it
//!   back to [`Modality::Keyboard`].
//! - [`FocusRing`]: per-widget ring visibility. On focus it reads the signal once and
//!   keeps that decision until blur; it never writes the signal back.
//!
//! ## Lifecycle
//!
//! Hosts usually share one signal per top-level interaction context. For the common case
//! of one context per process, [`FocusVisibility::global`] is a process-wide instance
//! initialized at startup to [`Modality::Keyboard`] (so programmatic focus before any
//! input shows the ring). Its only mutation points are [`pointer_press`] and
//! [`key_press`]. The signal is lock-free, so it can be shared freely.
//!
//! ```rust
//! use kinetic_focus::{FocusRing, FocusVisibility};
//!
//! let signal = FocusVisibility::new();
//! let mut ring = FocusRing::new();
//!
//! // Tabbing in shows the ring.
//! ring.on_focus(&signal);
//! assert!(ring.visible());
//!
//! // Clicking the focused control hides it…
//! ring.on_pointer_down(&signal);
//! assert!(!ring.visible());
//!
//! // …and blur always clears it.
//! ring.on_blur();
//! signal.key_press();
//! assert!(!ring.visible());
//! ring.on_focus(&signal);
//! assert!(ring.visible());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use core::sync::atomic::{AtomicBool, Ordering};

use tracing::trace;

/// The kind of input that happened most recently.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Modality {
    /// Mouse, pen, or touch.
    Pointer,
    /// Keyboard (or anything else that does not point).
    Keyboard,
}

/// Whether the most recent input was pointer-like or keyboard-like.
#[derive(Debug)]
pub struct FocusVisibility {
    keyboard: AtomicBool,
}

static GLOBAL: FocusVisibility = FocusVisibility::new();

impl FocusVisibility {
    /// Create a signal that starts out keyboard-like.
    pub const fn new() -> Self {
        Self::with_modality(Modality::Keyboard)
    }

    /// Create a signal with an explicit starting modality.
    pub const fn with_modality(modality: Modality) -> Self {
        Self {
            keyboard: AtomicBool::new(matches!(modality, Modality::Keyboard)),
        }
    }

    /// The process-wide signal.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Record a pointer-down.
    pub fn pointer_press(&self) {
        if self.keyboard.swap(false, Ordering::Relaxed) {
            trace!("input modality: pointer");
        }
    }

    /// Record a key-down.
    pub fn key_press(&self) {
        if !self.keyboard.swap(true, Ordering::Relaxed) {
            trace!("input modality: keyboard");
        }
    }

    /// The most recent input modality.
    pub fn modality(&self) -> Modality {
        if self.keyboard.load(Ordering::Relaxed) {
            Modality::Keyboard
        } else {
            Modality::Pointer
        }
    }

    /// `true` if a control focused now should show a strong ring.
    pub fn should_show_strong_focus(&self) -> bool {
        matches!(self.modality(), Modality::Keyboard)
    }
}

impl Default for FocusVisibility {
    fn default() -> Self {
        Self::new()
    }
}

/// Record a pointer-down on the process-wide signal.
pub fn pointer_press() {
    GLOBAL.pointer_press();
}

/// Record a key-down on the process-wide signal.
pub fn key_press() {
    GLOBAL.key_press();
}

/// Read the process-wide signal.
pub fn should_show_strong_focus() -> bool {
    GLOBAL.should_show_strong_focus()
}

/// Focus ring visibility for one widget.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FocusRing {
    focused: bool,
    visible: bool,
}

impl FocusRing {
    /// A ring for an unfocused widget.
    pub const fn new() -> Self {
        Self {
            focused: false,
            visible: false,
        }
    }

    /// The widget received focus; decide once from the signal.
    pub fn on_focus(&mut self, signal: &FocusVisibility) {
        self.focused = true;
        self.visible = signal.should_show_strong_focus();
    }

    /// A pointer went down on the widget.
    ///
    /// Records the press on `signal` first, so the ring hides even if the widget
    /// already had keyboard focus.
    pub fn on_pointer_down(&mut self, signal: &FocusVisibility) {
        signal.pointer_press();
        self.visible = self.focused && signal.should_show_strong_focus();
    }

    /// The widget lost focus.
    pub fn on_blur(&mut self) {
        self.focused = false;
        self.visible = false;
    }

    /// Hide the ring without changing focus (for example, when the widget is disabled).
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// `true` while the widget has focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// `true` if the strong ring should be drawn.
    pub fn visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_keyboard_like() {
        assert_eq!(FocusVisibility::new().modality(), Modality::Keyboard);
        assert!(FocusVisibility::default().should_show_strong_focus());
    }

    #[test]
    fn pointer_then_keyboard() {
        let signal = FocusVisibility::new();
        signal.pointer_press();
        assert!(!signal.should_show_strong_focus());
        signal.key_press();
        assert!(signal.should_show_strong_focus());
    }

    #[test]
    fn focus_after_pointer_press_is_quiet() {
        let signal = FocusVisibility::with_modality(Modality::Keyboard);
        let mut ring = FocusRing::new();
        // The pointer-down is recorded before focus is delivered.
        signal.pointer_press();
        ring.on_focus(&signal);
        assert!(ring.is_focused());
        assert!(!ring.visible());
    }

    #[test]
    fn ring_decision_is_a_one_shot_read() {
        let signal = FocusVisibility::new();
        let mut ring = FocusRing::new();
        ring.on_focus(&signal);
        assert!(ring.visible());
        // Later pointer input elsewhere does not retract an already shown ring.
        signal.pointer_press();
        assert!(ring.visible());
    }

    #[test]
    fn blur_clears_regardless_of_signal() {
        let signal = FocusVisibility::new();
        let mut ring = FocusRing::new();
        ring.on_focus(&signal);
        ring.on_blur();
        assert!(!ring.visible());
        assert!(signal.should_show_strong_focus());
    }

    #[test]
    fn pointer_down_without_focus_does_not_show() {
        let signal = FocusVisibility::new();
        let mut ring = FocusRing::new();
        ring.on_pointer_down(&signal);
        assert!(!ring.visible());
        assert_eq!(signal.modality(), Modality::Pointer);
    }

    #[test]
    fn global_signal_round_trip() {
        // The only test touching the process-wide signal.
        pointer_press();
        assert!(!should_show_strong_focus());
        assert_eq!(FocusVisibility::global().modality(), Modality::Pointer);
        key_press();
        assert!(should_show_strong_focus());
    }
}
