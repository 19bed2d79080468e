// Host-side tests for front-end constants.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn sound_urls_live_under_the_sounds_dir() {
    assert_eq!(sound_url("open.mp3"), "sounds/open.mp3");
    for theme in rotunda_core::DOOR_THEMES {
        let url = sound_url(theme.sound);
        assert!(url.starts_with("sounds/door-"), "{url}");
        assert!(url.ends_with(".mp3"));
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn audio_levels_are_sane() {
    // Volumes are linear gains in (0, 1]
    assert!(AMBIENT_VOLUME > 0.0 && AMBIENT_VOLUME <= 1.0);
    assert!(CUE_VOLUME > 0.0 && CUE_VOLUME <= 1.0);
    // Cues should reach full volume before the viewer can touch a door
    assert!(CUE_REF_DISTANCE > 0.0);
    assert!(CUE_REF_DISTANCE < rotunda_core::FOCUS_MAX_DISTANCE);
}

#[test]
fn dom_ids_are_distinct() {
    assert_ne!(HINT_ID, LOCK_ID);
    assert!(!BINDINGS_PARAM.is_empty());
}
