// Copyright 2025 the Kinetic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One segment of a segmented button set.

use crate::Surface;

/// Checkmark transition to play after an update.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SegmentAnimation {
    /// Nothing to animate.
    #[default]
    None,
    /// The checkmark is drawing in.
    Selecting,
    /// The checkmark is drawing out.
    Deselecting,
}

/// Events a segment dispatches.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SegmentEvent {
    /// The segment was clicked; the owning set decides what that selects.
    Interaction,
}

/// A segmented button.
///
/// Selection is owned by the enclosing set, which calls
/// [`set_selected`](Self::set_selected) in response to [`SegmentEvent::Interaction`].
#[derive(Clone, Debug)]
pub struct SegmentedButton {
    selected: bool,
    disabled: bool,
    no_checkmark: bool,
    animation: SegmentAnimation,
    surface: Surface,
}

impl SegmentedButton {
    /// A segment with its initial selection. The first render never animates.
    pub fn new(selected: bool) -> Self {
        Self {
            selected,
            disabled: false,
            no_checkmark: false,
            animation: SegmentAnimation::None,
            surface: Surface::new(),
        }
    }

    /// Hide the checkmark.
    pub fn without_checkmark(mut self) -> Self {
        self.no_checkmark = true;
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

    /// `true` if the checkmark is hidden.
    pub fn no_checkmark(&self) -> bool {
        self.no_checkmark
    }

    /// `true` if the segment should be in the tab order.
    pub fn is_focusable(&self) -> bool {
        !self.disabled
    }

    /// The transition for the most recent update.
    pub fn animation(&self) -> SegmentAnimation {
        self.animation
    }

    /// Update the selection and compute the checkmark transition.
    pub fn set_selected(&mut self, selected: bool) -> SegmentAnimation {
        let prev = self.selected;
        self.selected = selected;
        self.animation = match (prev, selected, self.no_checkmark) {
            (false, true, false) => SegmentAnimation::Selecting,
            (true, false, false) => SegmentAnimation::Deselecting,
            _ => SegmentAnimation::None,
        };
        self.animation
    }

    /// Show or hide the checkmark. Clears any pending transition.
    pub fn set_no_checkmark(&mut self, no_checkmark: bool) {
        self.no_checkmark = no_checkmark;
        self.animation = SegmentAnimation::None;
    }

    /// Enable or disable the segment. Clears any pending transition.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        self.animation = SegmentAnimation::None;
        self.surface.set_disabled(disabled);
    }

    /// The user clicked the segment.
    pub fn on_click(&mut self, now: u64) -> Option<SegmentEvent> {
        if self.disabled {
            return None;
        }
        self.surface.on_click(now);
        Some(SegmentEvent::Interaction)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_render_does_not_animate() {
        assert_eq!(SegmentedButton::new(true).animation(), SegmentAnimation::None);
    }

    #[test]
    fn selection_transitions() {
        let mut s = SegmentedButton::new(false);
        assert_eq!(s.set_selected(true), SegmentAnimation::Selecting);
        assert_eq!(s.set_selected(true), SegmentAnimation::None);
        assert_eq!(s.set_selected(false), SegmentAnimation::Deselecting);
    }

    #[test]
    fn no_checkmark_never_animates() {
        let mut s = SegmentedButton::new(false).without_checkmark();
        assert_eq!(s.set_selected(true), SegmentAnimation::None);
        assert_eq!(s.set_selected(false), SegmentAnimation::None);
    }

    #[test]
    fn unrelated_updates_clear_the_transition() {
        let mut s = SegmentedButton::new(false);
        s.set_selected(true);
        s.set_no_checkmark(false);
        assert_eq!(s.animation(), SegmentAnimation::None);
    }

    #[test]
    fn clicks_emit_interaction_unless_disabled() {
        let mut s = SegmentedButton::new(false);
        assert_eq!(s.on_click(0), Some(SegmentEvent::Interaction));
        // The set owns selection.
        assert!(!s.selected());
        s.set_disabled(true);
        assert_eq!(s.on_click(0), None);
        assert!(!s.is_focusable());
    }
}
