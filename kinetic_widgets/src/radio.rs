// Copyright 2025 the Kinetic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radio buttons grouped by name.

use alloc::string::String;

use kinetic_selection::{Direction, SelectionRegistry, Unchecked};
use tracing::debug;

use crate::Surface;

/// Host-assigned identity of a radio button.
pub type RadioId = u64;

/// Registry of radio groups, keyed by name.
pub type RadioGroups = SelectionRegistry<RadioId, String>;

/// A radio button.
///
/// Radios sharing a non-empty `name` form a group in a [`RadioGroups`] registry owned by
/// the host; a radio with an empty name stands alone. Whenever a radio becomes checked,
/// the ids it unchecked are returned and the host calls [`sync`](Self::sync) on those
/// radios.
#[derive(Clone, Debug)]
pub struct Radio {
    id: RadioId,
    checked: bool,
    disabled: bool,
    value: String,
    name: String,
    attached: bool,
    surface: Surface,
}

impl Radio {
    /// A detached, unchecked radio with the value `"on"`.
    pub fn new(id: RadioId, name: impl Into<String>) -> Self {
        Self {
            id,
            checked: false,
            disabled: false,
            value: String::from("on"),
            name: name.into(),
            attached: false,
            surface: Surface::unbounded(),
        }
    }

    /// Set the value submitted with a form.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// The radio's id.
    pub fn id(&self) -> RadioId {
        self.id
    }

    /// `true` if checked.
    pub fn checked(&self) -> bool {
        self.checked
    }

    /// `true` if disabled.
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// Group name; empty for a standalone radio.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Form value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The value to submit: `Some` only while checked.
    pub fn form_value(&self) -> Option<&str> {
        self.checked.then_some(self.value.as_str())
    }

    /// Join the radio's group.
    pub fn attach(&mut self, groups: &mut RadioGroups) -> Unchecked<RadioId> {
        self.attached = true;
        if self.name.is_empty() {
            return Unchecked::new();
        }
        let unchecked = groups.register(self.id, self.name.clone(), self.checked);
        groups.set_disabled(self.id, self.disabled);
        unchecked
    }

    /// Leave the radio's group.
    pub fn detach(&mut self, groups: &mut RadioGroups) {
        self.attached = false;
        groups.deregister(self.id);
    }

    /// Rename the group, moving the radio if it is attached.
    pub fn set_name(
        &mut self,
        name: impl Into<String>,
        groups: &mut RadioGroups,
    ) -> Unchecked<RadioId> {
        let name = name.into();
        if name == self.name {
            return Unchecked::new();
        }
        self.name = name;
        if !self.attached {
            return Unchecked::new();
        }
        groups.deregister(self.id);
        self.attach(groups)
    }

    /// Set the checked state. Checking unchecks the rest of the group.
    pub fn set_checked(&mut self, checked: bool, groups: &mut RadioGroups) -> Unchecked<RadioId> {
        if checked == self.checked {
            return Unchecked::new();
        }
        self.checked = checked;
        if !self.is_grouped(groups) {
            return Unchecked::new();
        }
        groups.set_checked(self.id, checked)
    }

    /// Enable or disable the radio.
    pub fn set_disabled(&mut self, disabled: bool, groups: &mut RadioGroups) {
        self.disabled = disabled;
        groups.set_disabled(self.id, disabled);
        self.surface.set_disabled(disabled);
    }

    /// The user activated the radio.
    ///
    /// A change on a radio always means checked. Returns `None` if the radio is
    /// disabled; otherwise the ids of radios that were unchecked.
    pub fn on_change(&mut self, groups: &mut RadioGroups, now: u64) -> Option<Unchecked<RadioId>> {
        if self.disabled {
            debug!(id = self.id, "change on disabled radio ignored");
            return None;
        }
        self.surface.on_click(now);
        Some(self.set_checked(true, groups))
    }

    /// Arrow-key navigation: check the adjacent enabled radio in the group.
    ///
    /// Returns the radio to focus and the ids that were unchecked; the host syncs both.
    pub fn on_arrow_key(
        &self,
        direction: Direction,
        groups: &mut RadioGroups,
    ) -> Option<(RadioId, Unchecked<RadioId>)> {
        if !self.is_grouped(groups) {
            return None;
        }
        groups.select_adjacent(self.id, direction)
    }

    /// `true` if this radio should be in the tab order.
    pub fn is_tab_stop(&self, groups: &RadioGroups) -> bool {
        if !self.is_grouped(groups) {
            return !self.disabled;
        }
        groups.tab_stop(&self.name) == Some(self.id)
    }

    /// Pull the checked state from the registry after a sibling changed.
    pub fn sync(&mut self, groups: &RadioGroups) {
        if self.is_grouped(groups) {
            self.checked = groups.is_checked(self.id);
        }
    }

    /// The interactive surface.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Mutable access to the interactive surface, for forwarding input.
    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    fn is_grouped(&self, groups: &RadioGroups) -> bool {
        self.attached && !self.name.is_empty() && groups.contains(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn group(groups: &mut RadioGroups) -> Vec<Radio> {
        let mut radios: Vec<Radio> = [(1, "s"), (2, "m"), (3, "l")]
            .into_iter()
            .map(|(id, value)| Radio::new(id, "size").with_value(value))
            .collect();
        for r in &mut radios {
            r.attach(groups);
        }
        radios
    }

    fn sync_all(radios: &mut [Radio], groups: &RadioGroups) {
        for r in radios {
            r.sync(groups);
        }
    }

    #[test]
    fn change_checks_and_unchecks_siblings() {
        let mut groups = RadioGroups::new();
        let mut radios = group(&mut groups);

        assert!(radios[0].on_change(&mut groups, 0).unwrap().is_empty());
        let unchecked = radios[2].on_change(&mut groups, 10).unwrap();
        assert_eq!(unchecked.as_slice(), &[1]);
        sync_all(&mut radios, &groups);

        let checked: Vec<RadioId> = radios.iter().filter(|r| r.checked()).map(Radio::id).collect();
        assert_eq!(checked, [3]);
        assert_eq!(radios[2].form_value(), Some("l"));
        assert_eq!(radios[0].form_value(), None);
    }

    #[test]
    fn disabled_radio_ignores_change() {
        let mut groups = RadioGroups::new();
        let mut radios = group(&mut groups);
        radios[1].set_disabled(true, &mut groups);
        assert!(radios[1].on_change(&mut groups, 0).is_none());
        assert!(!radios[1].checked());
    }

    #[test]
    fn unnamed_radios_stand_alone() {
        let mut groups = RadioGroups::new();
        let mut a = Radio::new(1, "");
        let mut b = Radio::new(2, "");
        a.attach(&mut groups);
        b.attach(&mut groups);
        a.on_change(&mut groups, 0);
        b.on_change(&mut groups, 0);
        assert!(a.checked() && b.checked());
        assert!(groups.is_empty());
    }

    #[test]
    fn attaching_checked_radio_wins() {
        let mut groups = RadioGroups::new();
        let mut radios = group(&mut groups);
        radios[0].set_checked(true, &mut groups);

        let mut late = Radio::new(4, "size");
        late.set_checked(true, &mut groups);
        let unchecked = late.attach(&mut groups);
        assert_eq!(unchecked.as_slice(), &[1]);
        sync_all(&mut radios, &groups);
        assert!(!radios[0].checked());
    }

    #[test]
    fn renaming_moves_between_groups() {
        let mut groups = RadioGroups::new();
        let mut radios = group(&mut groups);
        radios[0].set_checked(true, &mut groups);
        radios[0].set_name("color", &mut groups);
        assert_eq!(groups.checked_in(&String::from("color")), Some(1));
        assert_eq!(groups.checked_in(&String::from("size")), None);
    }

    #[test]
    fn arrow_keys_rove_through_enabled_radios() {
        let mut groups = RadioGroups::new();
        let mut radios = group(&mut groups);
        radios[1].set_disabled(true, &mut groups);
        assert!(radios[0].is_tab_stop(&groups));

        radios[0].on_change(&mut groups, 0);
        let (next, unchecked) = radios[0].on_arrow_key(Direction::Next, &mut groups).unwrap();
        assert_eq!(next, 3);
        assert_eq!(unchecked.as_slice(), &[1]);
        sync_all(&mut radios, &groups);
        assert!(radios[2].checked());
        assert!(radios[2].is_tab_stop(&groups));
        assert!(!radios[0].is_tab_stop(&groups));
    }
}
