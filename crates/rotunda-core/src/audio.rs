//! Audio cue capability.
//!
//! Doors never talk to an audio API directly. They hold boxed [`AudioCue`]s
//! that the front-end supplies; a cue whose backing sound has not finished
//! loading simply behaves like [`SilentCue`] until it has.

pub trait AudioCue {
    /// Start playback. Calling this while already playing is a no-op.
    fn play(&mut self);
    fn stop(&mut self);
    fn is_playing(&self) -> bool;
}

/// A cue that never makes a sound and never reports playing.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentCue;

impl AudioCue for SilentCue {
    fn play(&mut self) {}
    fn stop(&mut self) {}
    fn is_playing(&self) -> bool {
        false
    }
}

/// The three cues every door carries.
pub struct DoorCues {
    /// Looping ambience heard through the open door.
    pub ambient: Box<dyn AudioCue>,
    pub open: Box<dyn AudioCue>,
    pub close: Box<dyn AudioCue>,
}

impl DoorCues {
    pub fn new(
        ambient: Box<dyn AudioCue>,
        open: Box<dyn AudioCue>,
        close: Box<dyn AudioCue>,
    ) -> Self {
        Self {
            ambient,
            open,
            close,
        }
    }

    pub fn silent() -> Self {
        Self::new(Box::new(SilentCue), Box::new(SilentCue), Box::new(SilentCue))
    }
}

impl Default for DoorCues {
    fn default() -> Self {
        Self::silent()
    }
}

impl std::fmt::Debug for DoorCues {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DoorCues")
            .field("ambient_playing", &self.ambient.is_playing())
            .field("open_playing", &self.open.is_playing())
            .field("close_playing", &self.close.is_playing())
            .finish()
    }
}

/// Play `cue` unless it is already sounding.
#[inline]
pub(crate) fn play_once(cue: &mut dyn AudioCue) {
    if !cue.is_playing() {
        cue.play();
    }
}

/// Stop `cue` if it is sounding.
#[inline]
pub(crate) fn stop_if_playing(cue: &mut dyn AudioCue) {
    if cue.is_playing() {
        cue.stop();
    }
}
