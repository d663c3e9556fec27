//! Hover and page-entry animations using iced_anim
//!
//! `HoverAnimations` gives exclusive hover tracking with only the active and
//! the fading item animated, so cost stays O(1) regardless of list size.
//! `RevealAnimation` is the one-shot fade-in that plays when a page mounts.

use std::hash::Hash;
use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Hover animation duration (200ms for snappy feel)
const HOVER_DURATION: Duration = Duration::from_millis(200);

/// Page-entry reveal duration
const REVEAL_DURATION: Duration = Duration::from_millis(600);

fn hover_easing() -> Easing {
    Easing::EASE_OUT.with_duration(HOVER_DURATION)
}

/// Exclusive hover state manager
///
/// Only one item can be hovered at a time, so we track just the currently
/// active item (fading in) and the previously active one (fading out).
#[derive(Debug)]
pub struct HoverAnimations<K: Eq + Hash + Clone> {
    /// Currently hovered item key
    active_key: Option<K>,
    /// Animation for active item (fading in)
    active_anim: Animated<f32>,
    /// Previously hovered item key (fading out)
    fading_key: Option<K>,
    /// Animation for fading item
    fading_anim: Animated<f32>,
}

impl<K: Eq + Hash + Clone> Default for HoverAnimations<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> HoverAnimations<K> {
    pub fn new() -> Self {
        Self {
            active_key: None,
            active_anim: Animated::transition(0.0, hover_easing()),
            fading_key: None,
            fading_anim: Animated::transition(0.0, hover_easing()),
        }
    }

    /// Set hovered item exclusively; pass None to unhover all
    pub fn set_hovered(&mut self, key: Option<K>) {
        if self.active_key == key {
            return;
        }

        // Whatever was active starts fading out from its current value
        if let Some(old) = self.active_key.take() {
            self.fading_key = Some(old);
            let current = *self.active_anim.value();
            self.fading_anim = Animated::transition(current, hover_easing());
            self.fading_anim.update(0.0.into());
        }

        if let Some(new_key) = key {
            self.active_key = Some(new_key);
            self.active_anim = Animated::transition(0.0, hover_easing());
            self.active_anim.update(1.0.into());
        }
    }

    /// Set the hovered item without animating, for reduced-motion mode
    ///
    /// Lands directly on the end value so it needs no ticks to settle.
    pub fn snap_hovered(&mut self, key: Option<K>) {
        self.fading_key = None;
        self.fading_anim = Animated::transition(0.0, hover_easing());
        self.active_anim =
            Animated::transition(if key.is_some() { 1.0 } else { 0.0 }, hover_easing());
        self.active_key = key;
    }

    /// Get interpolated value for a key (0.0 to 1.0)
    pub fn progress(&self, key: &K) -> f32 {
        if self.active_key.as_ref() == Some(key) {
            *self.active_anim.value()
        } else if self.fading_key.as_ref() == Some(key) {
            *self.fading_anim.value()
        } else {
            0.0
        }
    }

    /// Check if a specific key is currently the hovered item
    pub fn is_hovered(&self, key: &K) -> bool {
        self.active_key.as_ref() == Some(key)
    }

    /// Check if any animation is currently in progress
    pub fn is_animating(&self) -> bool {
        self.active_anim.is_animating() || self.fading_anim.is_animating()
    }

    /// Drop the fade-out entry once it has settled at zero
    pub fn cleanup_completed(&mut self) {
        if self.fading_key.is_some()
            && *self.fading_anim.value() < 0.01
            && self.fading_anim.value() == self.fading_anim.target()
        {
            self.fading_key = None;
        }
    }

    /// Tick the animations forward in time
    pub fn tick(&mut self, now: Instant) {
        self.active_anim.tick(now);
        self.fading_anim.tick(now);
        self.cleanup_completed();
    }
}

/// One-shot fade-in played when a page is constructed
#[derive(Debug)]
pub struct RevealAnimation {
    animation: Animated<f32>,
}

impl Default for RevealAnimation {
    fn default() -> Self {
        Self::begin()
    }
}

impl RevealAnimation {
    /// Create the animation already running toward fully revealed
    pub fn begin() -> Self {
        let mut animation =
            Animated::transition(0.0, Easing::EASE_OUT.with_duration(REVEAL_DURATION));
        animation.update(1.0.into());
        Self { animation }
    }

    /// Create the animation already at rest, fully revealed
    ///
    /// Used when motion is reduced and no frame clock will run.
    pub fn settled() -> Self {
        Self {
            animation: Animated::transition(1.0, Easing::EASE_OUT.with_duration(REVEAL_DURATION)),
        }
    }

    /// Get progress (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        *self.animation.value()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Tick the animation forward in time
    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_is_exclusive() {
        let mut anims: HoverAnimations<u32> = HoverAnimations::new();
        assert_eq!(anims.progress(&1), 0.0);

        anims.set_hovered(Some(1));
        assert!(anims.is_hovered(&1));

        anims.set_hovered(Some(2));
        assert!(anims.is_hovered(&2));
        assert!(!anims.is_hovered(&1));
    }

    #[test]
    fn test_unhover_clears_active() {
        let mut anims: HoverAnimations<u32> = HoverAnimations::new();
        anims.set_hovered(Some(7));
        anims.set_hovered(None);
        assert!(!anims.is_hovered(&7));
    }

    #[test]
    fn test_progress_range() {
        let mut anims: HoverAnimations<u32> = HoverAnimations::new();
        anims.set_hovered(Some(1));
        let p = anims.progress(&1);
        assert!((0.0..=1.0).contains(&p));
    }

    #[test]
    fn test_snap_hover_needs_no_ticks() {
        let mut anims: HoverAnimations<u32> = HoverAnimations::new();
        anims.snap_hovered(Some(4));
        assert_eq!(anims.progress(&4), 1.0);
        assert!(!anims.is_animating());

        anims.snap_hovered(None);
        assert_eq!(anims.progress(&4), 0.0);
        assert!(!anims.is_animating());
    }

    #[test]
    fn test_reveal_starts_running() {
        let reveal = RevealAnimation::begin();
        assert!(reveal.is_animating() || reveal.progress() >= 1.0);
    }

    #[test]
    fn test_settled_reveal_is_complete() {
        let reveal = RevealAnimation::settled();
        assert!(reveal.progress() >= 1.0);
        assert!(!reveal.is_animating());
    }
}
