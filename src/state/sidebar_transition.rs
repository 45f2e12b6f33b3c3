//! Animated sidebar footprint.
//!
//! The collapse state itself flips instantly; what animates is the number
//! of columns the sidebar occupies on screen. Body padding, header padding
//! and sidebar width are all read from [`SidebarTransition::footprint_at`]
//! once per frame, so they cannot drift apart mid-animation.

use crate::model::{Easing, TransitionSpec};
use std::time::{Duration, Instant};

/// Interpolation of the sidebar footprint between two widths.
///
/// Time is passed in explicitly so the animation is deterministic under test.
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarTransition {
    from: f64,
    to: u16,
    started_at: Option<Instant>,
    duration: Duration,
    easing: Easing,
}

impl SidebarTransition {
    /// A transition at rest at `footprint`.
    pub fn settled(footprint: u16) -> Self {
        Self {
            from: f64::from(footprint),
            to: footprint,
            started_at: None,
            duration: Duration::ZERO,
            easing: Easing::Ease,
        }
    }

    /// Width the transition is heading to (or resting at).
    pub fn target(&self) -> u16 {
        self.to
    }

    /// Linear progress in `[0, 1]`; 1 when at rest.
    pub fn progress_at(&self, now: Instant) -> f64 {
        let Some(started_at) = self.started_at else {
            return 1.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Whether the footprint is still moving at `now`.
    pub fn is_running(&self, now: Instant) -> bool {
        self.started_at.is_some() && self.progress_at(now) < 1.0
    }

    /// Whether no animation is pending, including a finished one not yet
    /// settled by [`SidebarTransition::settle_if_finished`].
    pub fn is_settled(&self) -> bool {
        self.started_at.is_none()
    }

    /// Exact interpolated width at `now`.
    pub fn value_at(&self, now: Instant) -> f64 {
        if !self.is_running(now) {
            return f64::from(self.to);
        }
        let eased = self.easing.apply(self.progress_at(now));
        self.from + (f64::from(self.to) - self.from) * eased
    }

    /// Width in whole columns at `now`.
    pub fn footprint_at(&self, now: Instant) -> u16 {
        if !self.is_running(now) {
            return self.to;
        }
        // Interpolated values lie between two u16 endpoints.
        self.value_at(now).round() as u16
    }

    /// Head for `target`, starting from wherever the footprint is at `now`.
    ///
    /// A running transition is superseded, not queued: the new one starts
    /// from the current interpolated width and runs the full `spec.duration`.
    /// Retargeting to the current target leaves the transition untouched.
    pub fn retarget(&mut self, target: u16, spec: &TransitionSpec, now: Instant) {
        if self.to == target {
            return;
        }

        let current = self.value_at(now);
        self.from = current;
        self.to = target;
        self.duration = spec.duration;
        self.easing = spec.easing;
        self.started_at = if spec.duration.is_zero() || current == f64::from(target) {
            None
        } else {
            Some(now)
        };
    }

    /// Drop the start time once the animation has completed.
    pub fn settle_if_finished(&mut self, now: Instant) {
        if self.started_at.is_some() && !self.is_running(now) {
            self.started_at = None;
            self.from = f64::from(self.to);
        }
    }
}
