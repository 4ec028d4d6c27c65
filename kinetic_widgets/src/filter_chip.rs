// Copyright 2025 the Kinetic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Filter chips: toggleable, optionally removable.

use tracing::debug;

use crate::Surface;

/// Events a filter chip dispatches.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChipEvent {
    /// `selected` changed, by the user or programmatically.
    Selected(bool),
    /// The remove action was activated. Cancelable.
    Remove,
}

/// A filter chip.
#[derive(Clone, Debug)]
pub struct FilterChip {
    selected: bool,
    disabled: bool,
    removable: bool,
    removed: bool,
    surface: Surface,
}

impl FilterChip {
    /// An unselected chip.
    pub fn new() -> Self {
        Self {
            selected: false,
            disabled: false,
            removable: false,
            removed: false,
            surface: Surface::new(),
        }
    }

    /// Show a remove action.
    pub fn removable(mut self) -> Self {
        self.removable = true;
        self
    }

    /// `true` if selected.
    pub fn selected(&self) -> bool {
        self.selected
    }

    /// `true` if disabled.
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// `true` if the chip has a remove action.
    pub fn is_removable(&self) -> bool {
        self.removable
    }

    /// `true` once the chip has been removed.
    pub fn is_removed(&self) -> bool {
        self.removed
    }

    /// Enable or disable the chip.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        self.surface.set_disabled(disabled);
    }

    /// Set `selected`; emits [`ChipEvent::Selected`] if it changed.
    pub fn set_selected(&mut self, selected: bool) -> Option<ChipEvent> {
        if selected == self.selected {
            return None;
        }
        self.selected = selected;
        Some(ChipEvent::Selected(selected))
    }

    /// The user clicked the chip's primary action.
    pub fn on_click(&mut self, now: u64) -> Option<ChipEvent> {
        if self.disabled || self.removed {
            return None;
        }
        self.surface.on_click(now);
        self.set_selected(!self.selected)
    }

    /// The user clicked the remove action.
    ///
    /// `dispatch` receives [`ChipEvent::Remove`] and returns `false` to cancel it.
    /// Returns `true` if the chip was removed.
    pub fn on_remove_click(&mut self, dispatch: impl FnOnce(ChipEvent) -> bool) -> bool {
        if self.disabled || !self.removable || self.removed {
            return false;
        }
        if !dispatch(ChipEvent::Remove) {
            debug!("chip removal canceled");
            return false;
        }
        self.removed = true;
        true
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

impl Default for FilterChip {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_toggles_and_emits() {
        let mut chip = FilterChip::new();
        assert_eq!(chip.on_click(0), Some(ChipEvent::Selected(true)));
        assert!(chip.selected());
        assert_eq!(chip.on_click(10), Some(ChipEvent::Selected(false)));
        assert!(!chip.selected());
    }

    #[test]
    fn programmatic_changes_emit() {
        let mut chip = FilterChip::new();
        assert_eq!(chip.set_selected(true), Some(ChipEvent::Selected(true)));
        assert_eq!(chip.set_selected(true), None);
        assert_eq!(chip.set_selected(false), Some(ChipEvent::Selected(false)));
    }

    #[test]
    fn disabled_chip_does_not_select() {
        let mut chip = FilterChip::new();
        chip.set_disabled(true);
        assert_eq!(chip.on_click(0), None);
        assert!(!chip.selected());
    }

    #[test]
    fn remove_can_be_canceled() {
        let mut chip = FilterChip::new().removable();
        let mut seen = None;
        assert!(!chip.on_remove_click(|ev| {
            seen = Some(ev);
            false
        }));
        assert_eq!(seen, Some(ChipEvent::Remove));
        assert!(!chip.is_removed());

        assert!(chip.on_remove_click(|_| true));
        assert!(chip.is_removed());
        assert_eq!(chip.on_click(0), None);
    }

    #[test]
    fn remove_needs_an_enabled_removable_chip() {
        let mut plain = FilterChip::new();
        assert!(!plain.on_remove_click(|_| true));

        let mut disabled = FilterChip::new().removable();
        disabled.set_disabled(true);
        assert!(!disabled.on_remove_click(|_| panic!("disabled chips do not dispatch")));
    }
}
