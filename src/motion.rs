//! Eased scroll transitions
//!
//! The scrollable widget only supports discrete jumps, so smooth paging is
//! animated here: a [`Transition`] interpolates the scroll offset from its
//! current position to the target over a fixed duration, and the application
//! drives it from a timer subscription while it is active.

use std::time::{Duration, Instant};

/// Easing function applied to transition progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    EaseOutCubic,
    EaseInOutCubic,
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// An in-flight interpolation between two scroll offsets
#[derive(Debug, Clone)]
pub struct Transition {
    from: f32,
    to: f32,
    start_time: Option<Instant>,
    duration: Duration,
    easing: Easing,
    progress: f32,
}

impl Transition {
    /// Create an idle transition resting at `initial`
    pub fn new(initial: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            from: initial,
            to: initial,
            start_time: None,
            duration,
            easing,
            progress: 1.0,
        }
    }

    /// Begin animating from `from` to `to`
    pub fn start(&mut self, from: f32, to: f32) {
        self.from = from;
        self.to = to;
        self.start_time = Some(Instant::now());
        self.progress = 0.0;
    }

    /// Advance progress based on the given instant
    pub fn update_at(&mut self, now: Instant) {
        if let Some(start) = self.start_time {
            let elapsed = now.saturating_duration_since(start);
            let raw = elapsed.as_secs_f32() / self.duration.as_secs_f32();

            if raw >= 1.0 {
                self.progress = 1.0;
                self.start_time = None;
            } else {
                self.progress = self.easing.apply(raw);
            }
        }
    }

    /// Whether the transition is still animating
    pub fn is_active(&self) -> bool {
        self.start_time.is_some() && self.progress < 1.0
    }

    /// Current interpolated value
    pub fn value(&self) -> f32 {
        self.from + (self.to - self.from) * self.progress
    }

    /// Final value the transition is heading toward
    pub fn target(&self) -> f32 {
        self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_bounds() {
        for easing in [Easing::Linear, Easing::EaseOutCubic, Easing::EaseInOutCubic] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            // Out-of-range input is clamped
            assert_eq!(easing.apply(1.5), 1.0);
            assert_eq!(easing.apply(-0.5), 0.0);
        }

        assert_eq!(Easing::Linear.apply(0.5), 0.5);
        // EaseOutCubic is past halfway at the midpoint
        assert!(Easing::EaseOutCubic.apply(0.5) > 0.5);
    }

    #[test]
    fn test_transition_starts_idle() {
        let transition = Transition::new(100.0, Duration::from_millis(300), Easing::Linear);
        assert!(!transition.is_active());
        assert_eq!(transition.value(), 100.0);
    }

    #[test]
    fn test_transition_interpolates_and_completes() {
        let mut transition = Transition::new(0.0, Duration::from_millis(300), Easing::Linear);
        transition.start(0.0, 600.0);
        assert!(transition.is_active());
        assert_eq!(transition.value(), 0.0);

        let start = transition.start_time.expect("transition should be running");

        transition.update_at(start + Duration::from_millis(150));
        assert!(transition.is_active());
        assert!((transition.value() - 300.0).abs() < 1.0);

        transition.update_at(start + Duration::from_millis(400));
        assert!(!transition.is_active());
        assert_eq!(transition.value(), 600.0);
    }

    #[test]
    fn test_transition_value_is_monotonic() {
        let mut transition = Transition::new(0.0, Duration::from_millis(300), Easing::EaseOutCubic);
        transition.start(0.0, 860.0);
        let start = transition.start_time.expect("transition should be running");

        let mut previous = transition.value();
        for ms in (0..=300).step_by(30) {
            transition.update_at(start + Duration::from_millis(ms));
            let value = transition.value();
            assert!(value >= previous);
            previous = value;
        }
    }
}
