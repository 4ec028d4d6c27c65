// Copyright 2025 the Kinetic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Checkbox with previous-state tracking for transition styling.

use tracing::trace;

use crate::Surface;

bitflags::bitflags! {
    /// Styling classes for the checkbox container.
    ///
    /// The `PREV_*` flags describe the state before the most recent change, so a
    /// renderer can pick the transition (for example, unselected to indeterminate).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct CheckboxClasses: u16 {
        /// Checked or indeterminate.
        const SELECTED           = 1 << 0;
        /// Neither checked nor indeterminate.
        const UNSELECTED         = 1 << 1;
        /// Checked and not indeterminate.
        const CHECKED            = 1 << 2;
        /// Indeterminate.
        const INDETERMINATE      = 1 << 3;
        /// In error and enabled.
        const ERROR              = 1 << 4;
        /// Was neither checked nor indeterminate.
        const PREV_UNSELECTED    = 1 << 5;
        /// Was checked and not indeterminate.
        const PREV_CHECKED       = 1 << 6;
        /// Was indeterminate.
        const PREV_INDETERMINATE = 1 << 7;
        /// Was disabled.
        const PREV_DISABLED      = 1 << 8;
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
struct Snapshot {
    checked: bool,
    indeterminate: bool,
    disabled: bool,
}

/// A two- or three-state checkbox.
#[derive(Clone, Debug)]
pub struct Checkbox {
    current: Snapshot,
    prev: Snapshot,
    error: bool,
    surface: Surface,
}

impl Checkbox {
    /// An unchecked, enabled checkbox.
    pub fn new() -> Self {
        Self {
            current: Snapshot::default(),
            prev: Snapshot::default(),
            error: false,
            surface: Surface::unbounded(),
        }
    }

    /// `true` if checked.
    pub fn checked(&self) -> bool {
        self.current.checked
    }

    /// `true` if indeterminate (shown as a dash, whatever `checked` says).
    pub fn indeterminate(&self) -> bool {
        self.current.indeterminate
    }

    /// `true` if disabled.
    pub fn disabled(&self) -> bool {
        self.current.disabled
    }

    /// `true` if marked as in error.
    pub fn error(&self) -> bool {
        self.error
    }

    /// Was it checked before the last change?
    pub fn prev_checked(&self) -> bool {
        self.prev.checked
    }

    /// Was it indeterminate before the last change?
    pub fn prev_indeterminate(&self) -> bool {
        self.prev.indeterminate
    }

    /// Was it disabled before the last change?
    pub fn prev_disabled(&self) -> bool {
        self.prev.disabled
    }

    /// Set the checked state.
    pub fn set_checked(&mut self, checked: bool) {
        self.apply(Snapshot {
            checked,
            ..self.current
        });
    }

    /// Set the indeterminate state.
    pub fn set_indeterminate(&mut self, indeterminate: bool) {
        self.apply(Snapshot {
            indeterminate,
            ..self.current
        });
    }

    /// Enable or disable the checkbox.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.apply(Snapshot {
            disabled,
            ..self.current
        });
        self.surface.set_disabled(disabled);
    }

    /// Mark the checkbox as in error.
    pub fn set_error(&mut self, error: bool) {
        self.error = error;
    }

    /// The user activated the checkbox.
    ///
    /// Flips `checked` and clears `indeterminate` in a single change. Returns `false` if
    /// the checkbox is disabled and nothing changed.
    pub fn toggle(&mut self, now: u64) -> bool {
        if self.current.disabled {
            return false;
        }
        self.surface.on_click(now);
        self.apply(Snapshot {
            checked: !self.current.checked,
            indeterminate: false,
            ..self.current
        });
        true
    }

    /// Styling classes for the current and previous state.
    pub fn classes(&self) -> CheckboxClasses {
        let is_checked = self.current.checked && !self.current.indeterminate;
        let is_indeterminate = self.current.indeterminate;
        let mut classes = CheckboxClasses::empty();
        classes.set(CheckboxClasses::SELECTED, is_checked || is_indeterminate);
        classes.set(CheckboxClasses::UNSELECTED, !is_checked && !is_indeterminate);
        classes.set(CheckboxClasses::CHECKED, is_checked);
        classes.set(CheckboxClasses::INDETERMINATE, is_indeterminate);
        classes.set(CheckboxClasses::ERROR, self.error && !self.current.disabled);
        classes.set(
            CheckboxClasses::PREV_UNSELECTED,
            !self.prev.checked && !self.prev.indeterminate,
        );
        classes.set(
            CheckboxClasses::PREV_CHECKED,
            self.prev.checked && !self.prev.indeterminate,
        );
        classes.set(CheckboxClasses::PREV_INDETERMINATE, self.prev.indeterminate);
        classes.set(CheckboxClasses::PREV_DISABLED, self.prev.disabled);
        classes
    }

    /// The interactive surface.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Mutable access to the interactive surface, for forwarding input.
    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    fn apply(&mut self, next: Snapshot) {
        if next == self.current {
            return;
        }
        trace!(?next, "checkbox state");
        self.prev = self.current;
        self.current = next;
    }
}

impl Default for Checkbox {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinetic_ripple::RippleState;

    #[test]
    fn toggle_records_previous_state() {
        let mut c = Checkbox::new();
        assert!(c.toggle(0));
        assert!(c.checked());
        assert!(!c.prev_checked());
        let classes = c.classes();
        assert!(classes.contains(CheckboxClasses::CHECKED | CheckboxClasses::PREV_UNSELECTED));

        c.toggle(10);
        assert!(!c.checked());
        assert!(c.prev_checked());
        assert!(c.classes().contains(CheckboxClasses::UNSELECTED | CheckboxClasses::PREV_CHECKED));
    }

    #[test]
    fn toggle_clears_indeterminate() {
        let mut c = Checkbox::new();
        c.set_indeterminate(true);
        assert!(c.classes().contains(CheckboxClasses::SELECTED | CheckboxClasses::INDETERMINATE));

        c.toggle(0);
        assert!(c.checked());
        assert!(!c.indeterminate());
        assert!(c.classes().contains(CheckboxClasses::PREV_INDETERMINATE));
    }

    #[test]
    fn unchanged_values_keep_previous_state() {
        let mut c = Checkbox::new();
        c.set_checked(true);
        c.set_checked(true);
        assert!(!c.prev_checked());
    }

    #[test]
    fn disabled_checkbox_ignores_activation() {
        let mut c = Checkbox::new();
        c.set_error(true);
        c.set_disabled(true);
        assert!(!c.toggle(0));
        assert!(!c.checked());
        assert!(!c.classes().contains(CheckboxClasses::ERROR));
        assert!(c.surface().ripple().is_disabled());

        c.set_disabled(false);
        assert!(c.prev_disabled());
        assert!(c.classes().contains(CheckboxClasses::ERROR));
    }

    #[test]
    fn ripple_is_unbounded() {
        let c = Checkbox::new();
        assert!(c.surface().ripple().state().contains(RippleState::UNBOUNDED));
    }
}
