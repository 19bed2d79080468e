// Host-side tests for the focus hint text.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod hint {
    include!("../src/hint.rs");
}

use hint::*;

#[test]
fn letter_and_digit_codes_lose_their_prefix() {
    assert_eq!(key_label("KeyE"), "E");
    assert_eq!(key_label("KeyF"), "F");
    assert_eq!(key_label("Digit3"), "3");
}

#[test]
fn arrows_become_glyphs() {
    assert_eq!(key_label("ArrowUp"), "↑");
    assert_eq!(key_label("ArrowDown"), "↓");
    assert_eq!(key_label("ArrowLeft"), "←");
    assert_eq!(key_label("ArrowRight"), "→");
}

#[test]
fn other_codes_pass_through() {
    assert_eq!(key_label("Space"), "Space");
    assert_eq!(key_label("ShiftLeft"), "ShiftLeft");
}

#[test]
fn hint_is_empty_without_focus() {
    assert_eq!(hint_text(false, Some("KeyE")), "");
    assert_eq!(hint_text(false, None), "");
}

#[test]
fn hint_names_the_hold_key() {
    assert_eq!(hint_text(true, Some("KeyE")), "Hold E to open the door");
    assert_eq!(hint_text(true, Some("Space")), "Hold Space to open the door");
    assert_eq!(hint_text(true, None), "Hold to open the door");
}
