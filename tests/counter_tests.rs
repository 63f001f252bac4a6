// Host-side tests for the counter ramp.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;
mod common;

use common::*;
use crate::core::constants::COUNTER_TARGET_ATTR;
use crate::core::counter::*;

fn ramp(target: i64) -> (Vec<String>, usize) {
    let port = FakePort::new();
    let frames = ManualFrames::default();
    let el = port.add(Node::default());
    run(CounterState::new(el, target), port.clone(), frames.clone());
    let extra_frames = frames.run_until_idle(10_000);
    (port.text_log(el), extra_frames)
}

#[test]
fn ramps_terminate_on_exact_target() {
    for target in [0_i64, 1, 50, 200, 4999] {
        let (shown, extra_frames) = ramp(target);
        let values: Vec<i64> = shown.iter().map(|s| s.parse().unwrap()).collect();

        assert_eq!(*values.last().unwrap(), target, "target {}", target);
        assert!(
            values.windows(2).all(|w| w[0] <= w[1]),
            "target {} not monotonic: {:?}",
            target,
            values
        );
        let step = step_for(target);
        let bound = ((target.max(0) + step - 1) / step).max(1) as usize;
        assert!(values.len() <= bound, "target {} took {} frames", target, values.len());
        assert_eq!(values.len(), extra_frames + 1);
    }
}

#[test]
fn large_target_uses_two_hundred_steps() {
    let (shown, _) = ramp(4999);
    assert_eq!(step_for(4999), 25);
    assert_eq!(shown.len(), 200);
    assert_eq!(shown[0], "25");
    assert_eq!(shown[198], "4975");
    assert_eq!(shown[199], "4999");
}

#[test]
fn small_targets_count_by_one() {
    let (shown, _) = ramp(3);
    assert_eq!(shown, vec!["1", "2", "3"]);
    assert_eq!(step_for(50), 1);
    assert_eq!(step_for(200), 1);
    assert_eq!(step_for(201), 2);
}

#[test]
fn first_step_is_synchronous() {
    let port = FakePort::new();
    let frames = ManualFrames::default();
    let el = port.add(with_attr(COUNTER_TARGET_ATTR, "400"));
    start(&port, &frames, &el);
    assert_eq!(port.text(el), "2");
    assert_eq!(frames.pending(), 1);
    frames.run_frame();
    assert_eq!(port.text(el), "4");
}

#[test]
fn degenerate_targets_settle_immediately() {
    let (zero, frames) = ramp(0);
    assert_eq!(zero, vec!["0"]);
    assert_eq!(frames, 0);

    let (negative, frames) = ramp(-5);
    assert_eq!(negative, vec!["-5"]);
    assert_eq!(frames, 0);
}

#[test]
fn parses_data_target() {
    assert_eq!(parse_target(Some("1500")), 1500);
    assert_eq!(parse_target(Some("  42 ")), 42);
    assert_eq!(parse_target(Some("12.9")), 12);
    assert_eq!(parse_target(Some("-7")), -7);
    assert_eq!(parse_target(Some("1e3")), 1000);
    assert_eq!(parse_target(Some("")), 0);
    assert_eq!(parse_target(Some("lots")), 0);
    assert_eq!(parse_target(Some("NaN")), 0);
    assert_eq!(parse_target(Some("inf")), 0);
    assert_eq!(parse_target(None), 0);
}

#[test]
fn missing_attribute_counts_to_zero() {
    let port = FakePort::new();
    let frames = ManualFrames::default();
    let el = port.add(Node::default());
    start(&port, &frames, &el);
    assert_eq!(port.text(el), "0");
    assert_eq!(frames.pending(), 0);
}

#[test]
fn state_snaps_to_target() {
    let port = FakePort::new();
    let el = port.add(Node::default());
    let mut state = CounterState::new(el, 450);
    assert_eq!(state.step, 3);
    let mut steps = 0;
    while state.advance(&port) == RampStep::Continue {
        steps += 1;
    }
    assert_eq!(steps, 149);
    assert_eq!(state.current, 450);
    assert_eq!(port.text(el), "450");
}
