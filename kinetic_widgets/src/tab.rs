// Copyright 2025 the Kinetic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tabs and the sliding selection indicator.

use alloc::vec::Vec;

use kinetic_ripple::CubicBezier;
use kurbo::{Affine, Rect, Vec2};
use tracing::trace;

use crate::{Environment, Surface};

/// Duration of the indicator animation (ms).
pub const INDICATOR_DURATION_MS: u64 = 400;

/// Visual emphasis of a tab.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TabStyle {
    /// Top-level navigation.
    #[default]
    Primary,
    /// Navigation within a content area.
    Secondary,
}

/// Style plus orientation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TabVariant {
    /// Emphasis.
    pub style: TabStyle,
    /// Tabs are stacked vertically and the indicator moves along y.
    pub vertical: bool,
}

impl TabVariant {
    /// A horizontal tab of the given style.
    pub const fn new(style: TabStyle) -> Self {
        Self {
            style,
            vertical: false,
        }
    }

    /// The same style, stacked vertically.
    pub const fn vertical(mut self) -> Self {
        self.vertical = true;
        self
    }
}

/// Where the indicator starts before easing into place.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum IndicatorStart {
    /// Slide from the previous tab's indicator.
    Slide {
        /// Offset along the tab axis, previous minus current position.
        offset: f64,
        /// Previous extent over current extent, along the tab axis.
        scale: f64,
    },
    /// No usable previous indicator: fade in.
    FadeIn,
}

impl IndicatorStart {
    /// Derive the first keyframe from the previous and current indicator rects.
    pub fn between(from: Option<Rect>, to: Option<Rect>, vertical: bool) -> Self {
        let (Some(from), Some(to)) = (from, to) else {
            return Self::FadeIn;
        };
        let (from_pos, from_extent, to_pos, to_extent) = if vertical {
            (from.y0, from.height(), to.y0, to.height())
        } else {
            (from.x0, from.width(), to.x0, to.width())
        };
        let scale = from_extent / to_extent;
        if !scale.is_finite() {
            return Self::FadeIn;
        }
        Self::Slide {
            offset: from_pos - to_pos,
            scale,
        }
    }
}

/// The indicator easing from its start keyframe to rest.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IndicatorAnimation {
    /// First keyframe; the last is always the identity.
    pub start: IndicatorStart,
    /// Animate along y instead of x.
    pub vertical: bool,
    /// Start time (ms).
    pub started_at: u64,
    /// Duration (ms).
    pub duration_ms: u64,
    /// Timing function.
    pub easing: CubicBezier,
}

/// One frame of the indicator.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IndicatorFrame {
    /// `translate(..) scale(..)` along the tab axis.
    pub transform: Affine,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

impl IndicatorAnimation {
    /// `true` once the final frame has been reached.
    pub fn is_finished(&self, now: u64) -> bool {
        now.saturating_sub(self.started_at) >= self.duration_ms
    }

    /// Sample at `now`; past the end this is the identity at full opacity.
    pub fn sample(&self, now: u64) -> IndicatorFrame {
        let elapsed = now.saturating_sub(self.started_at).min(self.duration_ms);
        let t = if self.duration_ms == 0 {
            1.0
        } else {
            elapsed as f64 / self.duration_ms as f64
        };
        let eased = self.easing.ease(t);
        match self.start {
            IndicatorStart::Slide { offset, scale } => {
                let offset = offset * (1.0 - eased);
                let scale = scale + (1.0 - scale) * eased;
                let (translate, stretch) = if self.vertical {
                    (Vec2::new(0.0, offset), Affine::scale_non_uniform(1.0, scale))
                } else {
                    (Vec2::new(offset, 0.0), Affine::scale_non_uniform(scale, 1.0))
                };
                IndicatorFrame {
                    transform: Affine::translate(translate) * stretch,
                    opacity: 1.0,
                }
            }
            IndicatorStart::FadeIn => IndicatorFrame {
                transform: Affine::IDENTITY,
                opacity: eased,
            },
        }
    }
}

/// A single tab.
#[derive(Clone, Debug)]
pub struct Tab {
    selected: bool,
    disabled: bool,
    variant: TabVariant,
    can_animate: bool,
    indicator: Option<Rect>,
    animation: Option<IndicatorAnimation>,
    surface: Surface,
}

impl Tab {
    /// An unselected tab.
    pub fn new(variant: TabVariant) -> Self {
        Self {
            selected: false,
            disabled: false,
            variant,
            can_animate: false,
            indicator: None,
            animation: None,
            surface: Surface::new(),
        }
    }

    /// `true` if selected.
    pub fn selected(&self) -> bool {
        self.selected
    }

    /// `true` if disabled.
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// Style and orientation.
    pub fn variant(&self) -> TabVariant {
        self.variant
    }

    /// `true` once the first frame after creation has been presented.
    pub fn can_animate(&self) -> bool {
        self.can_animate
    }

    /// The first animation frame after creation has been presented.
    ///
    /// Until then selection changes are applied without animation, so a tab that
    /// starts out selected does not slide in.
    pub fn on_animation_frame(&mut self) {
        self.can_animate = true;
    }

    /// Enable or disable the tab.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        self.surface.set_disabled(disabled);
    }

    /// Report the indicator's laid-out rect.
    pub fn set_indicator_bounds(&mut self, bounds: Option<Rect>) {
        self.indicator = bounds;
    }

    /// The indicator's laid-out rect.
    pub fn indicator_bounds(&self) -> Option<Rect> {
        self.indicator
    }

    /// `true` if a selection change now would animate.
    pub fn should_animate(&self, env: &Environment) -> bool {
        self.can_animate && !self.disabled && !env.prefers_reduced_motion
    }

    /// Change the selection.
    ///
    /// `previous_indicator` is the indicator rect of the tab that was selected before.
    /// Returns the new indicator animation, if one started.
    pub fn set_selected(
        &mut self,
        selected: bool,
        previous_indicator: Option<Rect>,
        env: &Environment,
        now: u64,
    ) -> Option<&IndicatorAnimation> {
        if selected == self.selected {
            return None;
        }
        self.selected = selected;
        if !self.should_animate(env) {
            return None;
        }
        // Any running animation is canceled; a deselected tab has nothing to show.
        self.animation = None;
        if !selected {
            return None;
        }
        let start =
            IndicatorStart::between(previous_indicator, self.indicator, self.variant.vertical);
        trace!(?start, "tab indicator animation");
        self.animation = Some(IndicatorAnimation {
            start,
            vertical: self.variant.vertical,
            started_at: now,
            duration_ms: INDICATOR_DURATION_MS,
            easing: CubicBezier::EASE_OUT,
        });
        self.animation.as_ref()
    }

    /// The running indicator animation, if any.
    pub fn indicator_animation(&self) -> Option<&IndicatorAnimation> {
        self.animation.as_ref()
    }

    /// Sample the indicator at `now`. Finished animations are dropped.
    pub fn indicator_frame(&mut self, now: u64) -> Option<IndicatorFrame> {
        let animation = self.animation?;
        if animation.is_finished(now) {
            self.animation = None;
        }
        Some(animation.sample(now))
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

/// A row (or column) of tabs with a single selection.
#[derive(Clone, Debug, Default)]
pub struct Tabs {
    tabs: Vec<Tab>,
    selected: Option<usize>,
    previous: Option<usize>,
}

impl Tabs {
    /// Wrap a set of tabs. The first tab marked selected becomes the selection; any
    /// later ones are deselected without animation.
    pub fn new(mut tabs: Vec<Tab>) -> Self {
        let selected = tabs.iter().position(Tab::selected);
        if let Some(first) = selected {
            for tab in tabs.iter_mut().skip(first + 1) {
                tab.selected = false;
                tab.animation = None;
            }
        }
        Self {
            tabs,
            selected,
            previous: None,
        }
    }

    /// All tabs, in order.
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Mutable access to one tab.
    pub fn tab_mut(&mut self, index: usize) -> Option<&mut Tab> {
        self.tabs.get_mut(index)
    }

    /// Index of the selected tab.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Index of the tab selected before the current one.
    pub fn previous(&self) -> Option<usize> {
        self.previous
    }

    /// Forward the first animation frame to every tab.
    pub fn on_animation_frame(&mut self) {
        for tab in &mut self.tabs {
            tab.on_animation_frame();
        }
    }

    /// Select the tab at `index`. Returns `false` if it is missing, disabled, or
    /// already selected.
    pub fn select(&mut self, index: usize, env: &Environment, now: u64) -> bool {
        if self.selected == Some(index) || self.tabs.get(index).is_none_or(Tab::disabled) {
            return false;
        }
        let from = self.selected.and_then(|i| self.tabs.get(i));
        let previous_indicator = from.and_then(Tab::indicator_bounds);
        if let Some(prev) = self.selected.and_then(|i| self.tabs.get_mut(i)) {
            prev.set_selected(false, None, env, now);
        }
        if let Some(tab) = self.tabs.get_mut(index) {
            tab.set_selected(true, previous_indicator, env, now);
        }
        self.previous = self.selected;
        self.selected = Some(index);
        true
    }

    /// The user activated the tab at `index`.
    pub fn activate(&mut self, index: usize, env: &Environment, now: u64) -> bool {
        match self.tabs.get_mut(index) {
            Some(tab) if !tab.disabled => {
                tab.surface.on_click(now);
            }
            _ => return false,
        }
        self.select(index, env, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn row(env: &Environment) -> Tabs {
        let mut tabs = Tabs::new(vec![
            Tab::new(TabVariant::default()),
            Tab::new(TabVariant::default()),
            Tab::new(TabVariant::default()),
        ]);
        for (i, x) in [0.0, 100.0, 200.0].into_iter().enumerate() {
            let right = x + 50.0 + i as f64 * 25.0;
            tabs.tab_mut(i)
                .unwrap()
                .set_indicator_bounds(Some(Rect::new(x, 46.0, right, 48.0)));
        }
        tabs.select(0, env, 0);
        tabs
    }

    #[test]
    fn no_animation_before_first_frame() {
        let env = Environment::default();
        let tabs = row(&env);
        assert_eq!(tabs.selected(), Some(0));
        assert!(tabs.tabs()[0].indicator_animation().is_none());
    }

    #[test]
    fn slides_from_previous_indicator() {
        let env = Environment::default();
        let mut tabs = row(&env);
        tabs.on_animation_frame();
        assert!(tabs.select(2, &env, 1000));
        assert_eq!(tabs.previous(), Some(0));

        let anim = tabs.tabs()[2].indicator_animation().copied().unwrap();
        assert_eq!(anim.duration_ms, 400);
        assert_eq!(anim.easing, CubicBezier::EASE_OUT);
        let IndicatorStart::Slide { offset, scale } = anim.start else {
            panic!("expected a slide, got {:?}", anim.start);
        };
        assert_eq!(offset, -200.0);
        assert_eq!(scale, 0.5);

        let first = anim.sample(1000);
        assert_eq!(
            first.transform,
            Affine::translate((-200.0, 0.0)) * Affine::scale_non_uniform(0.5, 1.0)
        );
        let last = tabs.tab_mut(2).unwrap().indicator_frame(1400).unwrap();
        assert_eq!(last.transform, Affine::IDENTITY);
        assert!(tabs.tabs()[2].indicator_animation().is_none());
    }

    #[test]
    fn only_the_first_preselected_tab_stays_selected() {
        let env = Environment::default();
        let mut a = Tab::new(TabVariant::default());
        let mut b = Tab::new(TabVariant::default());
        a.set_selected(true, None, &env, 0);
        b.set_selected(true, None, &env, 0);

        let tabs = Tabs::new(vec![Tab::new(TabVariant::default()), a, b]);
        assert_eq!(tabs.selected(), Some(1));
        assert_eq!(tabs.tabs().iter().filter(|t| t.selected()).count(), 1);
        assert!(tabs.tabs()[1].selected());
    }

    #[test]
    fn vertical_tabs_slide_along_y() {
        let from = Rect::new(0.0, 10.0, 4.0, 30.0);
        let to = Rect::new(0.0, 50.0, 4.0, 90.0);
        assert_eq!(
            IndicatorStart::between(Some(from), Some(to), true),
            IndicatorStart::Slide { offset: -40.0, scale: 0.5 }
        );
    }

    #[test]
    fn fades_in_without_usable_previous_rect() {
        assert_eq!(IndicatorStart::between(None, Some(Rect::ZERO), false), IndicatorStart::FadeIn);
        // Zero-width target: the scale is not finite.
        let r = Rect::new(0.0, 0.0, 0.0, 2.0);
        assert_eq!(IndicatorStart::between(Some(r), Some(r), false), IndicatorStart::FadeIn);

        let mut tab = Tab::new(TabVariant::new(TabStyle::Secondary));
        tab.on_animation_frame();
        tab.set_selected(true, None, &Environment::default(), 0);
        let mid = tab.indicator_frame(200).unwrap();
        assert_eq!(mid.transform, Affine::IDENTITY);
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
    }

    #[test]
    fn reduced_motion_and_disabled_skip_animation() {
        let reduced = Environment::default().with_reduced_motion(true);
        let mut tab = Tab::new(TabVariant::default());
        tab.on_animation_frame();
        assert!(tab.set_selected(true, None, &reduced, 0).is_none());
        assert!(tab.selected());

        let mut tabs = row(&Environment::default());
        tabs.on_animation_frame();
        tabs.tab_mut(1).unwrap().set_disabled(true);
        assert!(!tabs.activate(1, &Environment::default(), 0));
        assert_eq!(tabs.selected(), Some(0));
    }

    #[test]
    fn deselecting_cancels_running_animation() {
        let env = Environment::default();
        let mut tabs = row(&env);
        tabs.on_animation_frame();
        tabs.select(1, &env, 0);
        tabs.select(2, &env, 100);
        assert!(tabs.tabs()[1].indicator_animation().is_none());
        assert!(tabs.tabs()[2].indicator_animation().is_some());
    }
}
