//! One-shot "entered the viewport" notifications.
//!
//! A [`VisibilityTrigger`] owns its registrations. Each registration fires its
//! callback at most once and is retired afterwards. When the host cannot
//! observe visibility, the trigger is built with [`TriggerStrategy::Eager`]
//! and every target fires as soon as it is registered.

use super::constants::{OBSERVER_THRESHOLD_STEPS, RATIO_EPSILON};

/// How registrations are resolved; chosen once when the trigger is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerStrategy {
    /// Wait for intersection notifications from the host.
    Observe,
    /// No observer available: fire on registration.
    Eager,
}

/// One intersection observation of a target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionReport {
    pub is_intersecting: bool,
    /// Visible fraction of the target.
    pub ratio: f64,
    /// Visible height of the target over the viewport height.
    pub viewport_fraction: f64,
}

impl IntersectionReport {
    pub fn new(is_intersecting: bool, ratio: f64) -> Self {
        Self {
            is_intersecting,
            ratio,
            viewport_fraction: 0.0,
        }
    }

    pub fn covering(mut self, visible_height: f64, viewport_height: f64) -> Self {
        self.viewport_fraction = if viewport_height > 0.0 {
            visible_height / viewport_height
        } else {
            0.0
        };
        self
    }
}

/// Ratios the host observer should report at: evenly spaced up to
/// `threshold`, so tall targets keep reporting while they scroll in.
pub fn observer_thresholds(threshold: f64) -> Vec<f64> {
    (0..=OBSERVER_THRESHOLD_STEPS)
        .map(|i| threshold * i as f64 / OBSERVER_THRESHOLD_STEPS as f64)
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistrationState {
    Pending,
    Consumed,
}

pub struct TriggerRegistration<E> {
    pub target: E,
    on_enter: Option<Box<dyn FnMut(&E)>>,
    state: RegistrationState,
}

impl<E> TriggerRegistration<E> {
    fn new(target: E, on_enter: Box<dyn FnMut(&E)>) -> Self {
        Self {
            target,
            on_enter: Some(on_enter),
            state: RegistrationState::Pending,
        }
    }

    pub fn state(&self) -> RegistrationState {
        self.state
    }

    // Pending -> Consumed; the callback is dropped with the transition.
    fn consume(&mut self) {
        if self.state == RegistrationState::Consumed {
            return;
        }
        self.state = RegistrationState::Consumed;
        if let Some(mut on_enter) = self.on_enter.take() {
            on_enter(&self.target);
        }
    }
}

pub struct VisibilityTrigger<E> {
    threshold: f64,
    strategy: TriggerStrategy,
    registrations: Vec<TriggerRegistration<E>>,
    fired: usize,
}

impl<E: PartialEq> VisibilityTrigger<E> {
    pub fn new(threshold: f64, strategy: TriggerStrategy) -> Self {
        Self {
            threshold,
            strategy,
            registrations: Vec::new(),
            fired: 0,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn strategy(&self) -> TriggerStrategy {
        self.strategy
    }

    /// Register `target`. Returns `true` while the registration is still
    /// pending, i.e. the host observer must start watching the target.
    pub fn observe(&mut self, target: E, on_enter: impl FnMut(&E) + 'static) -> bool {
        let mut registration = TriggerRegistration::new(target, Box::new(on_enter));
        match self.strategy {
            TriggerStrategy::Eager => {
                registration.consume();
                self.fired += 1;
                false
            }
            TriggerStrategy::Observe => {
                self.registrations.push(registration);
                true
            }
        }
    }

    /// Whether an intersection report counts as entering: the target's
    /// visible fraction crossed the threshold, or the visible part already
    /// covers that fraction of the viewport (targets too tall to ever reach
    /// the ratio).
    #[inline]
    pub fn is_entering(&self, report: &IntersectionReport) -> bool {
        report.is_intersecting
            && (report.ratio + RATIO_EPSILON >= self.threshold
                || report.viewport_fraction + RATIO_EPSILON >= self.threshold)
    }

    /// Deliver an intersection report for `target`. Returns `true` when the
    /// target's callback fired and its registration was retired; the host
    /// should stop observing it.
    pub fn notify(&mut self, target: &E, is_intersecting: bool, ratio: f64) -> bool {
        self.notify_report(target, &IntersectionReport::new(is_intersecting, ratio))
    }

    pub fn notify_report(&mut self, target: &E, report: &IntersectionReport) -> bool {
        if !self.is_entering(report) {
            return false;
        }
        let Some(index) = self.registrations.iter().position(|r| &r.target == target) else {
            return false;
        };
        let mut registration = self.registrations.swap_remove(index);
        registration.consume();
        self.fired += 1;
        true
    }

    /// Registrations still waiting for their target to enter.
    pub fn pending(&self) -> usize {
        self.registrations.len()
    }

    /// Callbacks fired so far.
    pub fn fired(&self) -> usize {
        self.fired
    }
}
