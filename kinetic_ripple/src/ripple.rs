// Copyright 2025 the Kinetic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The press state machine.

use kinetic_pointer::{EventClass, PointerEvent, PointerId, is_reactable};
use kurbo::{Point, Rect};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::animation::{AnimationId, GrowAnimation, RippleFrame};
use crate::config::{ConfigError, RippleConfig};
use crate::geometry::RippleGeometry;
use crate::timer::{TimerQueue, TimerToken};

bitflags::bitflags! {
    /// Presentational flags a host maps onto its state layer.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct RippleState: u8 {
        /// A mouse or pen is over the surface.
        const HOVERED   = 0b0000_0001;
        /// The host has focus.
        const FOCUSED   = 0b0000_0010;
        /// A press is visible.
        const PRESSED   = 0b0000_0100;
        /// The ripple is circular rather than clipped to the host.
        const UNBOUNDED = 0b0000_1000;
        /// The surface ignores input.
        const DISABLED  = 0b0001_0000;
    }
}

/// Phase of the current gesture.
///
/// On touch:
/// - `Inactive → TouchPending → AwaitingRelease → Inactive` (tap)
/// - `Inactive → TouchPending → Holding → AwaitingRelease → Inactive` (hold)
///
/// On mouse or pen:
/// - `Inactive → AwaitingRelease → Inactive`
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No gesture in progress.
    #[default]
    Inactive,
    /// A touch landed; waiting to tell a press from a swipe or scroll.
    TouchPending,
    /// The touch outlasted the delay and is being held.
    Holding,
    /// The press is released or is a mouse press; waiting for the click.
    AwaitingRelease,
}

impl Phase {
    /// `true` for every phase except [`Phase::Inactive`].
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Inactive)
    }
}

/// One press gesture, from contact to resolution.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct InteractionSession {
    phase: Phase,
    pointer: Option<PointerId>,
    down_position: Option<Point>,
    started_at: u64,
    touch_delay: Option<TimerToken>,
}

impl InteractionSession {
    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The pointer that started the gesture, while one is active.
    pub fn pointer_id(&self) -> Option<PointerId> {
        self.pointer
    }

    /// Position of the pointer-down that started the gesture.
    pub fn down_position(&self) -> Option<Point> {
        self.down_position
    }

    /// Timestamp of the pointer-down that started the gesture (ms).
    pub fn started_at(&self) -> u64 {
        self.started_at
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// What a call into [`Ripple`] changed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RippleEffect {
    /// The phase moved.
    PhaseChanged {
        /// Phase before the event.
        from: Phase,
        /// Phase after the event.
        to: Phase,
    },
    /// A new grow animation began.
    AnimationStarted(AnimationId),
    /// A running grow animation was replaced before it resolved.
    AnimationCanceled(AnimationId),
    /// The touch delay was scheduled to end at `at` (ms).
    TouchDelayScheduled {
        /// Deadline of the delay.
        at: u64,
    },
    /// `pressed` will clear at `at` (ms) if `animation` is still current then.
    FadeScheduled {
        /// Animation the fade belongs to.
        animation: AnimationId,
        /// Deadline of the fade.
        at: u64,
    },
    /// `pressed` cleared.
    PressReleased,
    /// A hover, focus, or press flag changed.
    StateChanged(RippleState),
}

/// Effects produced by a single call. Empty means the event was filtered.
pub type RippleEffects = SmallVec<[RippleEffect; 4]>;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Continuation {
    TouchDelay,
    Fade(AnimationId),
    TapRelease(AnimationId),
}

/// Headless press feedback for one host surface.
///
/// A host owns one `Ripple`, forwards its input events with the current time in
/// milliseconds, reports its bounds whenever layout changes, and calls
/// [`advance`](Self::advance) when [`next_deadline`](Self::next_deadline) passes. It
/// renders [`state`](Self::state) as state-layer classes and
/// [`frame`](Self::frame) as the pressed ripple's transform.
///
/// ```
/// use core::num::NonZeroU64;
/// use kurbo::{Point, Rect};
/// use kinetic_pointer::{PointerButtons, PointerEvent, PointerKind};
/// use kinetic_ripple::{Phase, Ripple, RippleState};
///
/// let mut ripple = Ripple::new();
/// ripple.set_bounds(Some(Rect::new(0.0, 0.0, 100.0, 40.0)));
///
/// let id = NonZeroU64::new(1).unwrap();
/// let down = PointerEvent::new(id, PointerKind::Mouse, Point::new(10.0, 10.0))
///     .with_buttons(PointerButtons::PRIMARY);
///
/// ripple.on_pointer_down(&down, 0);
/// assert_eq!(ripple.phase(), Phase::AwaitingRelease);
/// assert!(ripple.state().contains(RippleState::PRESSED));
///
/// // The click resolves the gesture; the press stays visible for its minimum duration.
/// ripple.on_click(100);
/// assert_eq!(ripple.phase(), Phase::Inactive);
/// assert_eq!(ripple.next_deadline(), Some(225));
/// ripple.advance(225);
/// assert!(!ripple.state().contains(RippleState::PRESSED));
/// ```
#[derive(Clone, Debug)]
pub struct Ripple {
    config: RippleConfig,
    state: RippleState,
    session: InteractionSession,
    bounds: Option<Rect>,
    grow: Option<GrowAnimation>,
    next_animation: u64,
    timers: TimerQueue<Continuation>,
    check_bounds_after_context_menu: bool,
}

impl Ripple {
    /// Create a ripple with the default configuration and no bounds.
    pub fn new() -> Self {
        Self::from_valid_config(RippleConfig::default())
    }

    /// Create a ripple with a custom configuration.
    pub fn with_config(config: RippleConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: RippleConfig) -> Self {
        Self {
            config,
            state: RippleState::empty(),
            session: InteractionSession::default(),
            bounds: None,
            grow: None,
            next_animation: 0,
            timers: TimerQueue::new(),
            check_bounds_after_context_menu: false,
        }
    }

    /// Create an unbounded ripple, as used by icon-shaped controls.
    pub fn unbounded() -> Self {
        let mut ripple = Self::new();
        ripple.state.insert(RippleState::UNBOUNDED);
        ripple
    }

    /// The active configuration.
    pub fn config(&self) -> &RippleConfig {
        &self.config
    }

    /// Presentational flags.
    pub fn state(&self) -> RippleState {
        self.state
    }

    /// `true` while a press is visible.
    pub fn is_pressed(&self) -> bool {
        self.state.contains(RippleState::PRESSED)
    }

    /// Phase of the current gesture.
    pub fn phase(&self) -> Phase {
        self.session.phase
    }

    /// The current gesture.
    pub fn session(&self) -> &InteractionSession {
        &self.session
    }

    /// The most recent grow animation, held at its last frame once finished.
    pub fn animation(&self) -> Option<&GrowAnimation> {
        self.grow.as_ref()
    }

    /// Sample the current grow animation at `now`.
    pub fn frame(&self, now: u64) -> Option<RippleFrame> {
        self.grow.as_ref().map(|g| g.sample(now))
    }

    /// Host bounds in the coordinate space of incoming pointer positions.
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// Report the host's bounds; `None` while the host is not attached.
    pub fn set_bounds(&mut self, bounds: Option<Rect>) {
        self.bounds = bounds;
    }

    /// Switch between a circular and a host-clipped ripple.
    pub fn set_unbounded(&mut self, unbounded: bool) {
        self.state.set(RippleState::UNBOUNDED, unbounded);
    }

    /// `true` if input is ignored.
    pub fn is_disabled(&self) -> bool {
        self.state.contains(RippleState::DISABLED)
    }

    /// Enable or disable the surface.
    ///
    /// Disabling clears `hovered`, `focused`, and `pressed` immediately and abandons the
    /// current gesture, whatever its phase. A running grow animation is left alone; it
    /// is simply no longer shown as pressed.
    pub fn set_disabled(&mut self, disabled: bool) -> RippleEffects {
        let mut effects = RippleEffects::new();
        if disabled == self.is_disabled() {
            return effects;
        }
        self.state.set(RippleState::DISABLED, disabled);
        if disabled {
            self.state
                .remove(RippleState::HOVERED | RippleState::FOCUSED | RippleState::PRESSED);
            if let Some(token) = self.session.touch_delay.take() {
                self.timers.cancel(token);
            }
            self.set_phase(Phase::Inactive, &mut effects);
            self.session.reset();
            debug!("ripple disabled");
        }
        effects.push(RippleEffect::StateChanged(self.state));
        effects
    }

    /// Earliest pending continuation deadline (ms).
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// Run every continuation due at or before `now`.
    ///
    /// Each continuation checks that the gesture or animation it was scheduled for is
    /// still current; stale ones do nothing.
    pub fn advance(&mut self, now: u64) -> RippleEffects {
        let mut effects = RippleEffects::new();
        while let Some(fired) = self.timers.pop_due(now) {
            match fired.payload {
                Continuation::TouchDelay => {
                    let current = self.session.phase == Phase::TouchPending
                        && self.session.touch_delay == Some(fired.token);
                    if !current || self.is_disabled() {
                        trace!(deadline = fired.deadline, "stale touch delay");
                        continue;
                    }
                    self.session.touch_delay = None;
                    self.set_phase(Phase::Holding, &mut effects);
                    let origin = self.session.down_position;
                    self.start_press(origin, fired.deadline, &mut effects);
                }
                Continuation::Fade(animation) => {
                    if self.grow.map(|g| g.id) != Some(animation) {
                        trace!(animation = animation.get(), "stale fade");
                        continue;
                    }
                    self.release(&mut effects);
                }
                Continuation::TapRelease(animation) => {
                    if self.grow.map(|g| g.id) != Some(animation) {
                        trace!(animation = animation.get(), "stale tap release");
                        continue;
                    }
                    if self.session.phase == Phase::AwaitingRelease {
                        // No click followed the tap.
                        self.end_press(fired.deadline, &mut effects);
                    } else {
                        self.release(&mut effects);
                    }
                }
            }
        }
        effects
    }

    /// A pointer entered the surface.
    pub fn on_pointer_enter(&mut self, event: &PointerEvent) -> RippleEffects {
        let mut effects = RippleEffects::new();
        if !self.reacts(event, EventClass::Hover) {
            return effects;
        }
        self.set_flag(RippleState::HOVERED, true, &mut effects);
        effects
    }

    /// A pointer left the surface. A held mouse or pen press that leaves is released.
    pub fn on_pointer_leave(&mut self, event: &PointerEvent, now: u64) -> RippleEffects {
        let mut effects = RippleEffects::new();
        if !self.reacts(event, EventClass::Hover) {
            return effects;
        }
        self.set_flag(RippleState::HOVERED, false, &mut effects);
        if self.session.phase.is_active() {
            self.end_press(now, &mut effects);
        }
        effects
    }

    /// A pointer went down on the surface.
    pub fn on_pointer_down(&mut self, event: &PointerEvent, now: u64) -> RippleEffects {
        let mut effects = RippleEffects::new();
        if !self.reacts(event, EventClass::Press) {
            return effects;
        }

        // After a long-press context menu some platforms dispatch an extra down to the
        // pressed element. Accept it only if it actually lands on the host. With no
        // bounds reported, every down is dropped until the host reports them.
        if self.check_bounds_after_context_menu {
            if !self.in_bounds(event.position) {
                trace!(position = ?event.position, "down outside bounds after context menu");
                return effects;
            }
            self.check_bounds_after_context_menu = false;
        }

        if let Some(token) = self.session.touch_delay.take() {
            self.timers.cancel(token);
        }
        self.session.pointer = Some(event.pointer_id);
        self.session.down_position = Some(event.position);
        self.session.started_at = now;

        if !event.is_touch() {
            self.set_phase(Phase::AwaitingRelease, &mut effects);
            self.start_press(Some(event.position), now, &mut effects);
            return effects;
        }

        self.set_phase(Phase::TouchPending, &mut effects);
        let at = now.saturating_add(self.config.touch_delay_ms);
        self.session.touch_delay = Some(self.timers.schedule(at, Continuation::TouchDelay));
        effects.push(RippleEffect::TouchDelayScheduled { at });
        effects
    }

    /// A pointer went up.
    pub fn on_pointer_up(&mut self, event: &PointerEvent, now: u64) -> RippleEffects {
        let mut effects = RippleEffects::new();
        if !self.reacts(event, EventClass::Press) {
            return effects;
        }
        match self.session.phase {
            Phase::Holding => self.set_phase(Phase::AwaitingRelease, &mut effects),
            Phase::TouchPending => {
                // A tap: show the press now, from where the touch landed, and schedule
                // its completion. A click that follows is still consumed.
                if let Some(token) = self.session.touch_delay.take() {
                    self.timers.cancel(token);
                }
                self.set_phase(Phase::AwaitingRelease, &mut effects);
                let previous = self.grow.map(|g| g.id);
                let origin = self.session.down_position;
                self.start_press(origin, now, &mut effects);
                match self.grow.map(|g| g.id) {
                    Some(id) if Some(id) != previous => {
                        let at = now.saturating_add(self.config.minimum_press_ms);
                        self.timers.schedule(at, Continuation::TapRelease(id));
                        effects.push(RippleEffect::FadeScheduled { animation: id, at });
                    }
                    // Nothing to show: the gesture is over.
                    _ => self.end_press(now, &mut effects),
                }
            }
            Phase::Inactive | Phase::AwaitingRelease => {}
        }
        effects
    }

    /// The platform canceled the pointer (for example, it became a scroll).
    pub fn on_pointer_cancel(&mut self, event: &PointerEvent, now: u64) -> RippleEffects {
        let mut effects = RippleEffects::new();
        if !self.reacts(event, EventClass::Press) {
            return effects;
        }
        self.end_press(now, &mut effects);
        effects
    }

    /// The host was activated.
    ///
    /// Ends a pointer press awaiting its click. With no gesture in progress the click
    /// was synthesized (keyboard activation), so a full press is shown from the center.
    pub fn on_click(&mut self, now: u64) -> RippleEffects {
        let mut effects = RippleEffects::new();
        if self.is_disabled() {
            return effects;
        }
        match self.session.phase {
            Phase::AwaitingRelease => self.end_press(now, &mut effects),
            Phase::Inactive => {
                self.start_press(None, now, &mut effects);
                self.end_press(now, &mut effects);
            }
            Phase::TouchPending | Phase::Holding => {}
        }
        effects
    }

    /// A context menu opened on the host.
    pub fn on_context_menu(&mut self, now: u64) -> RippleEffects {
        let mut effects = RippleEffects::new();
        if self.is_disabled() {
            return effects;
        }
        self.check_bounds_after_context_menu = true;
        self.end_press(now, &mut effects);
        effects
    }

    /// The host gained focus.
    pub fn on_focus_in(&mut self) -> RippleEffects {
        let mut effects = RippleEffects::new();
        if !self.is_disabled() {
            self.set_flag(RippleState::FOCUSED, true, &mut effects);
        }
        effects
    }

    /// The host lost focus.
    pub fn on_focus_out(&mut self) -> RippleEffects {
        let mut effects = RippleEffects::new();
        self.set_flag(RippleState::FOCUSED, false, &mut effects);
        effects
    }

    fn reacts(&self, event: &PointerEvent, class: EventClass) -> bool {
        let reacts = is_reactable(!self.is_disabled(), event, self.session.pointer, class);
        if !reacts {
            trace!(pointer = event.pointer_id.get(), ?class, "ignored pointer event");
        }
        reacts
    }

    fn in_bounds(&self, p: Point) -> bool {
        self.bounds
            .is_some_and(|r| p.x >= r.x0 && p.x <= r.x1 && p.y >= r.y0 && p.y <= r.y1)
    }

    fn set_phase(&mut self, to: Phase, effects: &mut RippleEffects) {
        let from = self.session.phase;
        if from != to {
            trace!(?from, ?to, "phase");
            self.session.phase = to;
            effects.push(RippleEffect::PhaseChanged { from, to });
        }
    }

    fn set_flag(&mut self, flag: RippleState, on: bool, effects: &mut RippleEffects) {
        if self.state.contains(flag) != on {
            self.state.set(flag, on);
            effects.push(RippleEffect::StateChanged(self.state));
        }
    }

    fn start_press(&mut self, origin: Option<Point>, now: u64, effects: &mut RippleEffects) {
        let Some(bounds) = self.bounds else {
            trace!("press without a render target");
            return;
        };

        self.set_flag(RippleState::PRESSED, true, effects);
        if let Some(previous) = self.grow.take() {
            if !previous.is_finished(now) {
                effects.push(RippleEffect::AnimationCanceled(previous.id));
            }
        }

        let local = origin.map(|p| (p - bounds.origin()).to_point());
        let geometry = RippleGeometry::compute(
            bounds.size(),
            self.state.contains(RippleState::UNBOUNDED),
            local,
            &self.config,
        );
        let id = AnimationId(self.next_animation);
        self.next_animation += 1;
        self.grow = Some(GrowAnimation {
            id,
            started_at: now,
            duration_ms: self.config.press_grow_ms,
            geometry,
            easing: self.config.easing,
        });
        debug!(
            animation = id.get(),
            scale = geometry.scale,
            size = geometry.initial_size,
            "grow started"
        );
        effects.push(RippleEffect::AnimationStarted(id));
    }

    fn end_press(&mut self, now: u64, effects: &mut RippleEffects) {
        if let Some(token) = self.session.touch_delay.take() {
            self.timers.cancel(token);
        }
        self.set_phase(Phase::Inactive, effects);
        self.session.reset();

        let Some(grow) = self.grow else {
            self.release(effects);
            return;
        };
        let elapsed = grow.elapsed(now);
        if elapsed >= self.config.minimum_press_ms {
            self.release(effects);
            return;
        }

        let at = now.saturating_add(self.config.minimum_press_ms - elapsed);
        self.timers.schedule(at, Continuation::Fade(grow.id));
        effects.push(RippleEffect::FadeScheduled {
            animation: grow.id,
            at,
        });
    }

    fn release(&mut self, effects: &mut RippleEffects) {
        if self.is_pressed() {
            self.set_flag(RippleState::PRESSED, false, effects);
            effects.push(RippleEffect::PressReleased);
        }
    }
}

impl Default for Ripple {
    fn default() -> Self {
        Self::new()
    }
}
