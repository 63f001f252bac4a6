use super::constants::{TYPEWRITER_DEFAULT_DURATION_MS, TYPEWRITER_DURATION_ATTR};
use super::port::{DelayScheduler, PresentationPort};

/// Leading-integer parse in the manner of an HTML attribute: optional
/// whitespace and sign, then digits; anything after the digits is ignored.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end]
        .parse::<i64>()
        .ok()
        .map(|v| v.saturating_mul(sign))
}

/// Total reveal time from `data-duration`; missing, zero or invalid values
/// fall back to the default.
pub fn duration_ms(raw: Option<&str>) -> i64 {
    match raw.and_then(parse_int_prefix) {
        Some(v) if v != 0 => v,
        _ => TYPEWRITER_DEFAULT_DURATION_MS,
    }
}

/// Deterministic reveal cadence for one element's text.
#[derive(Clone, Debug, PartialEq)]
pub struct TypewriterPlan {
    text: String,
    total_chars: usize,
    step_ms: u32,
}

impl TypewriterPlan {
    pub fn new(text: &str, duration_ms: i64) -> Self {
        let text = text.trim().to_owned();
        let total_chars = text.chars().count().max(1);
        let step = (duration_ms as f64 / total_chars as f64).floor() as i64;
        Self {
            text,
            total_chars,
            step_ms: step.clamp(1, i64::from(u32::MAX)) as u32,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of reveal frames (at least one, even for empty text).
    pub fn frames(&self) -> usize {
        self.total_chars
    }

    pub fn step_ms(&self) -> u32 {
        self.step_ms
    }

    /// Text shown after `n` characters have been typed.
    pub fn prefix(&self, n: usize) -> &str {
        match self.text.char_indices().nth(n) {
            Some((byte, _)) => &self.text[..byte],
            None => &self.text,
        }
    }
}

/// Clear the element and type its text back in, one character per step.
pub fn run<P, T>(port: P, timers: T, element: P::Element, plan: TypewriterPlan)
where
    P: PresentationPort + 'static,
    T: DelayScheduler + 'static,
{
    port.set_text(&element, "");
    type_char(port, timers, element, plan, 0);
}

fn type_char<P, T>(port: P, timers: T, element: P::Element, plan: TypewriterPlan, typed: usize)
where
    P: PresentationPort + 'static,
    T: DelayScheduler + 'static,
{
    let typed = typed + 1;
    port.set_text(&element, plan.prefix(typed));
    if typed >= plan.frames() {
        return;
    }
    let delay = plan.step_ms();
    let next = timers.clone();
    timers.schedule_after(
        delay,
        Box::new(move || type_char(port, next, element, plan, typed)),
    );
}

/// Build the plan from the element's current text and `data-duration`.
pub fn plan_for<P: PresentationPort>(port: &P, element: &P::Element) -> TypewriterPlan {
    let raw = port.attribute(element, TYPEWRITER_DURATION_ATTR);
    TypewriterPlan::new(&port.text(element), duration_ms(raw.as_deref()))
}
