// Copyright 2025 the Kinetic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Kinetic Widgets: headless selection controls.
//!
//! Each control is a small state holder composed from the lower-level crates:
//!
//! - a [`Surface`] pairing a [`kinetic_ripple::Ripple`] (press feedback) with a
//!   [`kinetic_focus::FocusRing`] (strong focus ring on keyboard focus);
//! - the control's own semantics: toggling, grouping through
//!   [`kinetic_selection`], and the events it dispatches.
//!
//! Controls:
//!
//! - [`Checkbox`]: checked, indeterminate, error, with previous-state classes.
//! - [`Radio`]: grouped by name through a [`RadioGroups`] registry.
//! - [`Tab`] and [`Tabs`]: selection with a sliding indicator.
//! - [`FilterChip`]: toggleable, with a cancelable remove action.
//! - [`IconButton`]: plain or toggle.
//! - [`SegmentedButton`]: checkmark transitions and interaction events.
//!
//! Hosts forward pointer and focus input to each control's surface, and activation
//! (click, keyboard) to the control itself. Platform preferences that affect motion or
//! mirroring travel in an explicit [`Environment`].
//!
//! ```rust
//! use kinetic_widgets::{ChipEvent, FilterChip, IconButton, IconButtonEvent};
//!
//! let mut chip = FilterChip::new();
//! assert_eq!(chip.on_click(0), Some(ChipEvent::Selected(true)));
//!
//! let mut star = IconButton::toggle();
//! let events = star.on_click(0);
//! assert_eq!(events.as_slice(), &[IconButtonEvent::Input, IconButtonEvent::Change]);
//! assert!(star.selected());
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod checkbox;
mod environment;
mod filter_chip;
mod icon_button;
mod radio;
mod segmented_button;
mod surface;
mod tab;

pub use checkbox::{Checkbox, CheckboxClasses};
pub use environment::{Environment, TextDirection};
pub use filter_chip::{ChipEvent, FilterChip};
pub use icon_button::{IconButton, IconButtonEvent, IconButtonEvents};
pub use radio::{Radio, RadioGroups, RadioId};
pub use segmented_button::{SegmentAnimation, SegmentEvent, SegmentedButton};
pub use surface::Surface;
pub use tab::{
    INDICATOR_DURATION_MS, IndicatorAnimation, IndicatorFrame, IndicatorStart, Tab, TabStyle,
    TabVariant, Tabs,
};
