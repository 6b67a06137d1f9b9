#![allow(non_snake_case)]

use super::*;

#[test]
fn init___called_twice___keeps_first_subscriber() {
    init("debug");
    init("trace");
}

#[test]
fn init___invalid_directive___falls_back_without_panicking() {
    init("not [ a ] filter //");
}
