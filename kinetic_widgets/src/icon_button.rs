// Copyright 2025 the Kinetic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Icon buttons, optionally toggleable.

use alloc::string::String;

use smallvec::{SmallVec, smallvec};

use crate::{Environment, Surface};

/// Events an icon button dispatches, in order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IconButtonEvent {
    /// The toggle's value is about to be committed.
    Input,
    /// The toggle's value changed.
    Change,
}

/// Events produced by one activation.
pub type IconButtonEvents = SmallVec<[IconButtonEvent; 2]>;

/// An icon button.
#[derive(Clone, Debug)]
pub struct IconButton {
    toggle: bool,
    selected: bool,
    disabled: bool,
    flip_icon_in_rtl: bool,
    aria_label: Option<String>,
    selected_aria_label: Option<String>,
    surface: Surface,
}

impl IconButton {
    /// A plain (non-toggle) icon button.
    pub fn new() -> Self {
        Self {
            toggle: false,
            selected: false,
            disabled: false,
            flip_icon_in_rtl: false,
            aria_label: None,
            selected_aria_label: None,
            surface: Surface::unbounded(),
        }
    }

    /// A toggle icon button.
    pub fn toggle() -> Self {
        Self {
            toggle: true,
            ..Self::new()
        }
    }

    /// Mirror the icon in right-to-left content.
    pub fn with_flip_icon_in_rtl(mut self, flip: bool) -> Self {
        self.flip_icon_in_rtl = flip;
        self
    }

    /// `true` for a toggle button.
    pub fn is_toggle(&self) -> bool {
        self.toggle
    }

    /// `true` if a toggle button is on.
    pub fn selected(&self) -> bool {
        self.selected
    }

    /// `true` if disabled.
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// Turn a toggle on or off without dispatching events.
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Enable or disable the button.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        self.surface.set_disabled(disabled);
    }

    /// Accessible label.
    pub fn set_aria_label(&mut self, label: Option<String>) {
        self.aria_label = label;
    }

    /// Accessible label used while a toggle is on.
    pub fn set_selected_aria_label(&mut self, label: Option<String>) {
        self.selected_aria_label = label;
    }

    /// The label to expose.
    ///
    /// A toggle with a selected label swaps labels instead of reporting a pressed state.
    pub fn aria_label(&self) -> Option<&str> {
        match (&self.selected_aria_label, self.toggle && self.selected) {
            (Some(on), true) => Some(on.as_str()),
            _ => self.aria_label.as_deref(),
        }
    }

    /// The pressed state to expose, if any.
    pub fn aria_pressed(&self) -> Option<bool> {
        (self.toggle && self.selected_aria_label.is_none()).then_some(self.selected)
    }

    /// `true` if the icon should be drawn mirrored.
    pub fn flips_icon(&self, env: &Environment) -> bool {
        self.flip_icon_in_rtl && env.is_rtl()
    }

    /// The user activated the button.
    ///
    /// A toggle flips `selected` and emits [`IconButtonEvent::Input`] then
    /// [`IconButtonEvent::Change`]. Plain buttons emit nothing.
    pub fn on_click(&mut self, now: u64) -> IconButtonEvents {
        if self.disabled {
            return IconButtonEvents::new();
        }
        self.surface.on_click(now);
        if !self.toggle {
            return IconButtonEvents::new();
        }
        self.selected = !self.selected;
        smallvec![IconButtonEvent::Input, IconButtonEvent::Change]
    }

    /// The interactive surface.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Mutable access to the interactive surface, for forwarding input.
    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }
}

impl Default for IconButton {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TextDirection;

    #[test]
    fn toggle_flips_and_emits_input_then_change() {
        let mut b = IconButton::toggle();
        assert!(!b.selected());
        let events = b.on_click(0);
        assert_eq!(events.as_slice(), &[IconButtonEvent::Input, IconButtonEvent::Change]);
        assert!(b.selected());
        b.on_click(10);
        assert!(!b.selected());
    }

    #[test]
    fn plain_button_emits_nothing() {
        let mut b = IconButton::new();
        assert!(b.on_click(0).is_empty());
        assert!(!b.selected());
        assert_eq!(b.aria_pressed(), None);
    }

    #[test]
    fn disabled_toggle_does_not_flip() {
        let mut b = IconButton::toggle();
        b.set_disabled(true);
        assert!(b.on_click(0).is_empty());
        assert!(!b.selected());
    }

    #[test]
    fn pressed_state_tracks_selection() {
        let mut b = IconButton::toggle();
        assert_eq!(b.aria_pressed(), Some(false));
        b.set_selected(true);
        assert_eq!(b.aria_pressed(), Some(true));
    }

    #[test]
    fn selected_label_replaces_pressed_state() {
        let mut b = IconButton::toggle();
        b.set_selected_aria_label(Some("aria label on".into()));
        b.set_aria_label(Some("aria label off".into()));
        assert_eq!(b.aria_label(), Some("aria label off"));
        assert_eq!(b.aria_pressed(), None);

        b.on_click(0);
        assert_eq!(b.aria_label(), Some("aria label on"));
        assert_eq!(b.aria_pressed(), None);
    }

    #[test]
    fn icon_flips_only_in_rtl() {
        let b = IconButton::new().with_flip_icon_in_rtl(true);
        assert!(b.flips_icon(&Environment::default().with_direction(TextDirection::Rtl)));
        assert!(!b.flips_icon(&Environment::default()));
    }
}
