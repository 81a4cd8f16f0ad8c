// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use input::*;
use slider_core::{key_command, KeyCommand};

#[test]
fn pixel_deltas_pass_through() {
    let d = wheel_delta_px(12.0, -3.0, 0, 800.0);
    assert_eq!(d, glam::DVec2::new(12.0, -3.0));
}

#[test]
fn line_and_page_deltas_are_scaled() {
    let line = wheel_delta_px(1.0, -3.0, 1, 800.0);
    assert_eq!(line, glam::DVec2::new(40.0, -120.0));
    let page = wheel_delta_px(0.5, 0.0, 2, 800.0);
    assert_eq!(page.x, 400.0);
    // A collapsed root still scrolls by at least one pixel per page.
    assert_eq!(wheel_delta_px(2.0, 0.0, 2, 0.0).x, 2.0);
    // Unknown modes are treated as pixels.
    assert_eq!(wheel_delta_px(5.0, 0.0, 7, 800.0).x, 5.0);
}

#[test]
fn non_finite_deltas_become_zero() {
    assert_eq!(wheel_delta_px(f64::NAN, 1.0, 0, 800.0), glam::DVec2::ZERO);
    assert_eq!(wheel_delta_px(f64::MAX, 0.0, 1, 800.0), glam::DVec2::ZERO);
}

#[test]
fn modifiers_and_form_fields_keep_their_keys() {
    let none = Modifiers::default();
    assert!(forwards_key("ArrowRight", none, None));
    assert!(forwards_key("ArrowRight", none, Some("DIV")));
    assert!(!forwards_key("ArrowRight", none, Some("INPUT")));
    assert!(!forwards_key("1", none, Some("textarea")));
    assert!(!forwards_key("Home", none, Some("Select")));
    assert!(!forwards_key(
        "ArrowLeft",
        Modifiers {
            meta: true,
            ..Modifiers::default()
        },
        None
    ));
    assert!(!forwards_key("", none, None));
    assert!(Modifiers {
        ctrl: true,
        ..Modifiers::default()
    }
    .any());
}

#[test]
fn forwarded_keys_map_to_slider_commands() {
    let none = Modifiers::default();
    let cases = [
        ("ArrowRight", Some(KeyCommand::Next)),
        ("ArrowLeft", Some(KeyCommand::Prev)),
        (" ", Some(KeyCommand::Next)),
        ("Home", Some(KeyCommand::First)),
        ("End", Some(KeyCommand::Last)),
        ("3", Some(KeyCommand::Index(2))),
        ("Enter", None),
    ];
    for (key, expected) in cases {
        assert!(forwards_key(key, none, Some("BODY")));
        assert_eq!(key_command(key), expected, "key {key:?}");
    }
}
