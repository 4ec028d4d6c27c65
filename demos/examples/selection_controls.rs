// Copyright 2025 the Kinetic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection controls wired to a host loop.
//!
//! This example shows how to combine:
//! - `kinetic_widgets::Radio` with a shared `RadioGroups` registry, including
//!   arrow-key roving,
//! - `kinetic_focus` deciding whether focus rings are shown,
//! - `kinetic_widgets::Tabs` animating the selection indicator.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p kinetic_demos --example selection_controls`

use core::num::NonZeroU64;

use kinetic_focus::FocusVisibility;
use kinetic_pointer::{PointerButtons, PointerEvent, PointerKind};
use kinetic_selection::Direction;
use kinetic_widgets::{Environment, Radio, RadioGroups, Tab, TabVariant, Tabs};
use kurbo::{Point, Rect};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn sync(radios: &mut [Radio], groups: &RadioGroups) {
    for r in radios {
        r.sync(groups);
    }
}

fn summary(radios: &[Radio]) -> Vec<(u64, bool)> {
    radios.iter().map(|r| (r.id(), r.checked())).collect()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let signal = FocusVisibility::new();
    let env = Environment::default();

    // Radios.
    let mut groups = RadioGroups::new();
    let mut radios: Vec<Radio> = ["small", "medium", "large"]
        .into_iter()
        .zip(1..)
        .map(|(value, id)| Radio::new(id, "size").with_value(value))
        .collect();
    for (i, r) in radios.iter_mut().enumerate() {
        r.attach(&mut groups);
        let x = i as f64 * 48.0;
        r.surface_mut().set_bounds(Some(Rect::new(x, 0.0, x + 40.0, 40.0)));
    }
    radios[1].set_disabled(true, &mut groups);

    // Tab in: the keyboard-like signal shows the ring.
    radios[0].surface_mut().on_focus(&signal);
    info!(ring = radios[0].surface().shows_focus_ring(), "focus by keyboard");

    // Click the first radio with a mouse.
    let mouse_id = NonZeroU64::new(1).unwrap();
    let mouse = PointerEvent::new(mouse_id, PointerKind::Mouse, Point::new(20.0, 20.0))
        .with_buttons(PointerButtons::PRIMARY);
    radios[0].surface_mut().on_pointer_down(&signal, &mouse, 0);
    info!(ring = radios[0].surface().shows_focus_ring(), "after pointer down");
    if let Some(unchecked) = radios[0].on_change(&mut groups, 50) {
        info!(?unchecked, "radio 1 checked");
    }
    sync(&mut radios, &groups);
    info!(radios = ?summary(&radios));

    // Arrow right skips the disabled radio.
    signal.key_press();
    if let Some((focus, unchecked)) = radios[0].on_arrow_key(Direction::Next, &mut groups) {
        info!(focus, ?unchecked, "arrow key");
    }
    sync(&mut radios, &groups);
    info!(radios = ?summary(&radios));

    // Tabs.
    let mut tabs = Tabs::new(
        (0_u32..3)
            .map(|i| {
                let mut tab = Tab::new(TabVariant::default());
                let x = f64::from(i) * 120.0;
                tab.set_indicator_bounds(Some(Rect::new(x + 20.0, 46.0, x + 100.0, 48.0)));
                tab
            })
            .collect(),
    );
    tabs.select(0, &env, 0);
    tabs.on_animation_frame();
    tabs.activate(2, &env, 1000);
    if let Some(tab) = tabs.tab_mut(2) {
        for now in (1000..=1400).step_by(100) {
            if let Some(frame) = tab.indicator_frame(now) {
                let transform = frame.transform.as_coeffs();
                info!(now, ?transform, opacity = frame.opacity, "indicator");
            }
        }
    }
}
