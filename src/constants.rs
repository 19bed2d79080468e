/// Front-end wiring constants: DOM ids, asset locations and audio levels.
///
/// Simulation tuning lives in `rotunda_core::constants`; only values that
/// concern the page and the WebAudio graph belong here.
// DOM
pub const HINT_ID: &str = "hint";
pub const LOCK_ID: &str = "lock";

// URL query parameter carrying key binding overrides, e.g. `?keys=hold:KeyF`
pub const BINDINGS_PARAM: &str = "keys";

// Assets
pub const SOUNDS_DIR: &str = "sounds";

// Positional audio
pub const AMBIENT_VOLUME: f32 = 0.9;
pub const CUE_VOLUME: f32 = 0.7;
pub const CUE_REF_DISTANCE: f32 = 2.0; // distance at which a cue plays at full volume

#[inline]
pub fn sound_url(file: &str) -> String {
    format!("{}/{}", SOUNDS_DIR, file)
}
