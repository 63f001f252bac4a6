use super::constants::{COUNTER_SPEED, COUNTER_TARGET_ATTR};
use super::port::{FrameScheduler, PresentationPort};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RampStep {
    Continue,
    Done,
}

/// Integer target from a `data-target` value.
///
/// Absent, empty, non-numeric and non-finite values give 0; fractional
/// values are truncated toward zero.
pub fn parse_target(raw: Option<&str>) -> i64 {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return 0;
    };
    if let Ok(v) = raw.parse::<i64>() {
        return v;
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => v.trunc() as i64,
        _ => 0,
    }
}

/// Per-frame increment: `ceil(target / COUNTER_SPEED)`, at least 1.
pub fn step_for(target: i64) -> i64 {
    if target <= 0 {
        return 1;
    }
    let step = target / COUNTER_SPEED + i64::from(target % COUNTER_SPEED != 0);
    step.max(1)
}

/// Numeric ramp from 0 to `target`, one step per frame.
#[derive(Clone, Debug)]
pub struct CounterState<E> {
    pub element: E,
    pub target: i64,
    pub current: i64,
    pub step: i64,
}

impl<E> CounterState<E> {
    pub fn new(element: E, target: i64) -> Self {
        Self {
            element,
            target,
            current: 0,
            step: step_for(target),
        }
    }

    pub fn from_element<P>(port: &P, element: E) -> Self
    where
        P: PresentationPort<Element = E>,
    {
        let raw = port.attribute(&element, COUNTER_TARGET_ATTR);
        Self::new(element, parse_target(raw.as_deref()))
    }

    /// Advance one frame and render the new value.
    pub fn advance<P>(&mut self, port: &P) -> RampStep
    where
        P: PresentationPort<Element = E>,
    {
        self.current = self.current.saturating_add(self.step);
        if self.current < self.target {
            port.set_text(&self.element, &self.current.to_string());
            RampStep::Continue
        } else {
            self.current = self.target;
            port.set_text(&self.element, &self.target.to_string());
            RampStep::Done
        }
    }
}

/// Run a ramp to completion: the first step is synchronous, each further
/// step waits for the next frame.
pub fn run<P, S>(mut state: CounterState<P::Element>, port: P, frames: S)
where
    P: PresentationPort + 'static,
    S: FrameScheduler + 'static,
{
    if state.advance(&port) == RampStep::Done {
        return;
    }
    let next = frames.clone();
    frames.request_frame(Box::new(move || run(state, port, next)));
}

/// Visibility callback body: read the element's target and start ramping.
pub fn start<P, S>(port: &P, frames: &S, element: &P::Element)
where
    P: PresentationPort + 'static,
    S: FrameScheduler + 'static,
{
    let state = CounterState::from_element(port, element.clone());
    log::debug!("[counter] ramp to {} step {}", state.target, state.step);
    run(state, port.clone(), frames.clone());
}
