// Copyright 2025 the Kinetic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press feedback driven by a scripted clock.
//!
//! This example feeds a `kinetic_ripple::Ripple` three gestures (a mouse click, a
//! touch tap, and a touch hold) and a keyboard activation, advancing a fake clock
//! through each pending deadline and printing the grow frames a renderer would paint.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p kinetic_demos --example press_feedback`

use core::num::NonZeroU64;

use kinetic_pointer::{PointerButtons, PointerEvent, PointerKind};
use kinetic_ripple::{Ripple, RippleEffects};
use kurbo::{Point, Rect};
use tracing::info;
use tracing_subscriber::EnvFilter;

struct Clock {
    now: u64,
}

impl Clock {
    fn tick(&mut self, ms: u64) -> u64 {
        self.now += ms;
        self.now
    }
}

fn report(label: &str, ripple: &Ripple, effects: &RippleEffects, now: u64) {
    info!(label, now, phase = ?ripple.phase(), state = ?ripple.state(), ?effects);
}

/// Drain deadlines up to `until`, sampling frames every 75 ms like a vsync would.
fn run_until(ripple: &mut Ripple, clock: &mut Clock, until: u64) {
    while clock.now < until {
        let step = ripple
            .next_deadline()
            .filter(|d| *d > clock.now)
            .map_or(75, |d| (d - clock.now).min(75));
        let now = clock.tick(step.min(until - clock.now));
        let effects = ripple.advance(now);
        if !effects.is_empty() {
            report("advance", ripple, &effects, now);
        }
        if let Some(frame) = ripple.frame(now) {
            info!(
                now,
                progress = frame.progress,
                scale = frame.scale,
                x = frame.translate.x,
                y = frame.translate.y,
                "frame"
            );
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut ripple = Ripple::new();
    ripple.set_bounds(Some(Rect::new(0.0, 0.0, 100.0, 40.0)));
    let mut clock = Clock { now: 0 };

    let mouse_id = NonZeroU64::new(1).unwrap();
    let finger_id = NonZeroU64::new(2).unwrap();
    let mouse = PointerEvent::new(mouse_id, PointerKind::Mouse, Point::new(10.0, 10.0))
        .with_buttons(PointerButtons::PRIMARY);
    let finger = PointerEvent::new(finger_id, PointerKind::Touch, Point::new(80.0, 20.0));

    info!("mouse click");
    let e = ripple.on_pointer_down(&mouse, clock.now);
    report("down", &ripple, &e, clock.now);
    let now = clock.tick(60);
    let e = ripple.on_pointer_up(&mouse.with_buttons(PointerButtons::empty()), now);
    report("up", &ripple, &e, now);
    let e = ripple.on_click(now);
    report("click", &ripple, &e, now);
    run_until(&mut ripple, &mut clock, 600);

    info!("touch tap");
    let e = ripple.on_pointer_down(&finger, clock.now);
    report("down", &ripple, &e, clock.now);
    let now = clock.tick(40);
    let e = ripple.on_pointer_up(&finger, now);
    report("up", &ripple, &e, now);
    let e = ripple.on_click(now);
    report("click", &ripple, &e, now);
    run_until(&mut ripple, &mut clock, 1200);

    info!("touch hold");
    let e = ripple.on_pointer_down(&finger, clock.now);
    report("down", &ripple, &e, clock.now);
    run_until(&mut ripple, &mut clock, 1800);
    let e = ripple.on_pointer_up(&finger, clock.now);
    report("up", &ripple, &e, clock.now);
    let e = ripple.on_click(clock.now);
    report("click", &ripple, &e, clock.now);
    run_until(&mut ripple, &mut clock, 2100);

    info!("keyboard activation");
    let e = ripple.on_click(clock.now);
    report("click", &ripple, &e, clock.now);
    run_until(&mut ripple, &mut clock, 2600);
}
