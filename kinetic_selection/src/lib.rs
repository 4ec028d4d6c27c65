// Copyright 2025 the Kinetic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Kinetic Selection: mutually exclusive selection among sibling controls.
//!
//! Radio buttons (and, conceptually, tabs) form groups in which at most one member is
//! checked. A group has no identity of its own: it is whatever set of controls currently
//! shares a group key (a form field name, for example). [`SelectionRegistry`] tracks that
//! membership as controls attach and detach, and enforces exclusivity whenever one of
//! them becomes checked.
//!
//! ## Contract
//!
//! - [`SelectionRegistry::register`] when a control attaches.
//! - [`SelectionRegistry::deregister`] when it detaches.
//! - [`SelectionRegistry::notify_checked`] when it becomes checked. Every other checked
//!   member of its group is unchecked, and their ids are returned so the host can update
//!   them.
//!
//! The returned [`Unchecked`] list is owned, so the registry is free while the host
//! walks it: deregistering members (even the newly checked one) mid-walk is fine.
//!
//! ```rust
//! use kinetic_selection::SelectionRegistry;
//!
//! let mut radios: SelectionRegistry<u32, &str> = SelectionRegistry::new();
//! radios.register(1, "size", true);
//! radios.register(2, "size", false);
//! radios.register(3, "size", false);
//! radios.register(10, "color", true);
//!
//! let unchecked = radios.notify_checked(2);
//! assert_eq!(unchecked.as_slice(), &[1]);
//! assert_eq!(radios.checked_in(&"size"), Some(2));
//!
//! // Other groups are unaffected.
//! assert!(radios.is_checked(10));
//! ```
//!
//! ## Keyboard support
//!
//! Grouped controls act as a single tab stop ([`SelectionRegistry::tab_stop`]): the
//! checked member if there is one, otherwise the first enabled member. Arrow keys move
//! the selection within the group with wrap-around, skipping disabled members
//! ([`SelectionRegistry::select_adjacent`]).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

use core::hash::Hash;

use hashbrown::HashMap;
use smallvec::SmallVec;
use tracing::trace;

/// Ids of members that were unchecked by an operation.
pub type Unchecked<K> = SmallVec<[K; 4]>;

/// Direction of arrow-key navigation within a group.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Down or right (in left-to-right layouts).
    Next,
    /// Up or left (in left-to-right layouts).
    Previous,
}

#[derive(Clone, Debug)]
struct Member<G> {
    group: G,
    checked: bool,
    disabled: bool,
}

/// Registry of selectable controls keyed by group.
///
/// `K` is the host's control id; `G` is the group key. Members keep their registration
/// order within a group, which is the order used for keyboard navigation.
#[derive(Clone, Debug)]
pub struct SelectionRegistry<K, G> {
    members: HashMap<K, Member<G>>,
    groups: HashMap<G, SmallVec<[K; 4]>>,
}

impl<K, G> SelectionRegistry<K, G>
where
    K: Copy + Eq + Hash,
    G: Clone + Eq + Hash,
{
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            members: HashMap::new(),
            groups: HashMap::new(),
        }
    }

    /// Attach a control to `group`.
    ///
    /// A control that is already registered is moved. Registering a checked control
    /// unchecks its siblings, just as checking it later would.
    pub fn register(&mut self, id: K, group: G, checked: bool) -> Unchecked<K> {
        self.deregister(id);
        self.groups.entry(group.clone()).or_default().push(id);
        self.members.insert(
            id,
            Member {
                group,
                checked: false,
                disabled: false,
            },
        );
        if checked {
            self.notify_checked(id)
        } else {
            Unchecked::new()
        }
    }

    /// Detach a control. Returns `false` if it was not registered.
    pub fn deregister(&mut self, id: K) -> bool {
        let Some(member) = self.members.remove(&id) else {
            return false;
        };
        if let Some(siblings) = self.groups.get_mut(&member.group) {
            siblings.retain(|k| *k != id);
            if siblings.is_empty() {
                self.groups.remove(&member.group);
            }
        }
        true
    }

    /// Mark `id` checked and uncheck every other checked member of its group.
    ///
    /// Returns the ids that were unchecked. Unknown ids are ignored.
    pub fn notify_checked(&mut self, id: K) -> Unchecked<K> {
        let mut unchecked = Unchecked::new();
        let Some(member) = self.members.get_mut(&id) else {
            return unchecked;
        };
        member.checked = true;
        let group = member.group.clone();

        let Some(siblings) = self.groups.get(&group) else {
            return unchecked;
        };
        for sibling in siblings.iter().copied().filter(|k| *k != id) {
            if let Some(m) = self.members.get_mut(&sibling) {
                if m.checked {
                    m.checked = false;
                    unchecked.push(sibling);
                }
            }
        }
        if !unchecked.is_empty() {
            trace!(count = unchecked.len(), "unchecked siblings");
        }
        unchecked
    }

    /// Set the checked state of `id`.
    ///
    /// Checking goes through [`notify_checked`](Self::notify_checked).
    pub fn set_checked(&mut self, id: K, checked: bool) -> Unchecked<K> {
        if checked {
            return self.notify_checked(id);
        }
        if let Some(m) = self.members.get_mut(&id) {
            m.checked = false;
        }
        Unchecked::new()
    }

    /// Move `id` to another group. A checked member keeps its state and unchecks the
    /// new group's checked member, if any.
    pub fn set_group(&mut self, id: K, group: G) -> Unchecked<K> {
        let Some(member) = self.members.get(&id) else {
            return Unchecked::new();
        };
        if member.group == group {
            return Unchecked::new();
        }
        let (checked, disabled) = (member.checked, member.disabled);
        let unchecked = self.register(id, group, checked);
        self.set_disabled(id, disabled);
        unchecked
    }

    /// Enable or disable a member for keyboard navigation.
    pub fn set_disabled(&mut self, id: K, disabled: bool) {
        if let Some(m) = self.members.get_mut(&id) {
            m.disabled = disabled;
        }
    }

    /// `true` if `id` is registered and checked.
    pub fn is_checked(&self, id: K) -> bool {
        self.members.get(&id).is_some_and(|m| m.checked)
    }

    /// `true` if `id` is registered.
    pub fn contains(&self, id: K) -> bool {
        self.members.contains_key(&id)
    }

    /// Group of `id`, if registered.
    pub fn group_of(&self, id: K) -> Option<&G> {
        self.members.get(&id).map(|m| &m.group)
    }

    /// Members of `group` in registration order.
    pub fn members_of(&self, group: &G) -> &[K] {
        self.groups.get(group).map_or(&[], |s| s.as_slice())
    }

    /// The checked member of `group`, if any.
    pub fn checked_in(&self, group: &G) -> Option<K> {
        self.members_of(group)
            .iter()
            .copied()
            .find(|k| self.is_checked(*k))
    }

    /// The member of `group` that should be reachable with Tab.
    pub fn tab_stop(&self, group: &G) -> Option<K> {
        self.checked_in(group).or_else(|| {
            self.members_of(group)
                .iter()
                .copied()
                .find(|k| self.members.get(k).is_some_and(|m| !m.disabled))
        })
    }

    /// Check the enabled sibling after (or before) `id`, wrapping around the group.
    ///
    /// Returns the newly checked id and the ids it unchecked, or `None` if `id` is not
    /// registered or has no enabled sibling.
    pub fn select_adjacent(&mut self, id: K, direction: Direction) -> Option<(K, Unchecked<K>)> {
        let group = self.members.get(&id)?.group.clone();
        let siblings = self.groups.get(&group)?;
        let len = siblings.len();
        let origin = siblings.iter().position(|k| *k == id)?;

        let target = (1..len)
            .map(|step| match direction {
                Direction::Next => siblings[(origin + step) % len],
                Direction::Previous => siblings[(origin + len - step) % len],
            })
            .find(|k| self.members.get(k).is_some_and(|m| !m.disabled))?;

        let unchecked = self.notify_checked(target);
        Some((target, unchecked))
    }

    /// Number of registered members across all groups.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<K, G> Default for SelectionRegistry<K, G>
where
    K: Copy + Eq + Hash,
    G: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> SelectionRegistry<u32, &'static str> {
        let mut r = SelectionRegistry::new();
        r.register(1, "a", false);
        r.register(2, "a", false);
        r.register(3, "a", false);
        r.register(4, "b", false);
        r
    }

    fn checked_count(r: &SelectionRegistry<u32, &'static str>, group: &'static str) -> usize {
        r.members_of(&group)
            .iter()
            .filter(|k| r.is_checked(**k))
            .count()
    }

    #[test]
    fn exactly_the_notified_member_is_checked() {
        let mut r = registry();
        for id in [1, 3, 2, 2, 1] {
            r.notify_checked(id);
            assert_eq!(checked_count(&r, "a"), 1);
            assert_eq!(r.checked_in(&"a"), Some(id));
        }
    }

    #[test]
    fn groups_are_independent() {
        let mut r = registry();
        r.notify_checked(1);
        r.notify_checked(4);
        assert!(r.is_checked(1));
        assert!(r.is_checked(4));
    }

    #[test]
    fn deregistering_while_walking_unchecked_is_safe() {
        let mut r = registry();
        r.set_checked(1, true);
        // Force an inconsistent start: a second checked member slipped in unnoticed.
        r.members.get_mut(&3).unwrap().checked = true;

        let unchecked = r.notify_checked(2);
        assert_eq!(unchecked.as_slice(), &[1, 3]);
        for id in unchecked {
            assert!(r.deregister(id));
            // Removing the newly checked member mid-walk is fine too.
            r.deregister(2);
        }
        assert!(r.members_of(&"a").is_empty());
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn empty_groups_disappear() {
        let mut r = registry();
        assert!(r.deregister(4));
        assert!(r.members_of(&"b").is_empty());
        assert!(!r.groups.contains_key(&"b"));
        assert!(!r.deregister(4));
    }

    #[test]
    fn registering_checked_unchecks_siblings() {
        let mut r = registry();
        r.notify_checked(1);
        let unchecked = r.register(5, "a", true);
        assert_eq!(unchecked.as_slice(), &[1]);
        assert_eq!(r.checked_in(&"a"), Some(5));
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut r = registry();
        assert!(r.notify_checked(99).is_empty());
        assert!(!r.is_checked(99));
        assert!(r.select_adjacent(99, Direction::Next).is_none());
    }

    #[test]
    fn unchecking_does_not_touch_siblings() {
        let mut r = registry();
        r.notify_checked(2);
        assert!(r.set_checked(2, false).is_empty());
        assert_eq!(r.checked_in(&"a"), None);
    }

    #[test]
    fn moving_groups_enforces_the_new_group() {
        let mut r = registry();
        r.notify_checked(1);
        r.notify_checked(4);
        let unchecked = r.set_group(1, "b");
        assert_eq!(unchecked.as_slice(), &[4]);
        assert_eq!(r.checked_in(&"b"), Some(1));
        assert_eq!(r.checked_in(&"a"), None);
        assert_eq!(r.group_of(1), Some(&"b"));
    }

    #[test]
    fn tab_stop_prefers_checked_then_first_enabled() {
        let mut r = registry();
        r.set_disabled(1, true);
        assert_eq!(r.tab_stop(&"a"), Some(2));
        r.notify_checked(3);
        assert_eq!(r.tab_stop(&"a"), Some(3));
        assert_eq!(r.tab_stop(&"missing"), None);
    }

    #[test]
    fn arrow_navigation_wraps_and_skips_disabled() {
        let mut r = registry();
        r.notify_checked(1);
        r.set_disabled(2, true);

        let (next, unchecked) = r.select_adjacent(1, Direction::Next).unwrap();
        assert_eq!(next, 3);
        assert_eq!(unchecked.as_slice(), &[1]);

        let (wrapped, _) = r.select_adjacent(3, Direction::Next).unwrap();
        assert_eq!(wrapped, 1);

        let (prev, _) = r.select_adjacent(1, Direction::Previous).unwrap();
        assert_eq!(prev, 3);
        assert_eq!(checked_count(&r, "a"), 1);
    }

    #[test]
    fn lone_member_has_no_adjacent() {
        let mut r = registry();
        assert!(r.select_adjacent(4, Direction::Next).is_none());
    }
}
