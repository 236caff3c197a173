#![cfg(not(target_arch = "wasm32"))]

use super::*;

#[test]
fn connect_returns_none_outside_browser() {
    assert!(SectionObserver::connect(|_| {}).is_none());
}

#[test]
fn threshold_is_thirty_percent() {
    assert!((REVEAL_THRESHOLD - 0.3).abs() < f64::EPSILON);
}

#[test]
fn viewport_margin_shrinks_only_the_bottom() {
    assert_eq!(VIEWPORT_MARGIN, "0px 0px -20% 0px");
}
