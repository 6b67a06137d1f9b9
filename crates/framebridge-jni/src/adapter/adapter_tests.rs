#![allow(non_snake_case)]

use super::*;

#[test]
fn dropped_frames___no_deliveries___starts_at_zero() {
    // Nothing in this binary can run a session, so the counter never moves.
    assert_eq!(dropped_frames(), 0);
}
