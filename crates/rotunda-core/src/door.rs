//! Per-door open/close animation.
//!
//! Each door keeps a normalized `progress` (0 closed, 1 fully open) that
//! rises while the door is held and falls once it is released. The visible
//! hinge angle is re-derived from `progress` every tick through a smoothstep
//! ease, so it never accumulates drift.

use crate::audio::{play_once, stop_if_playing, DoorCues};
use crate::constants::{CLOSE_SPEED, OPEN_SPEED};
use crate::layout::DoorAnchor;
use std::time::Duration;

/// Cubic ease `3p² − 2p³`, flat at both ends.
#[inline]
pub fn smoothstep(p: f32) -> f32 {
    p * p * (3.0 - 2.0 * p)
}

#[derive(Debug)]
pub struct DoorState {
    pub anchor: DoorAnchor,
    pub cues: DoorCues,
    /// Radians the hinge swings at full progress.
    pub open_angle_limit: f32,
    progress: f32,
    is_held: bool,
    was_opening: bool,
    hinge_rotation: f32,
}

impl DoorState {
    pub fn new(anchor: DoorAnchor, open_angle_limit: f32, cues: DoorCues) -> Self {
        Self {
            anchor,
            cues,
            open_angle_limit,
            progress: 0.0,
            is_held: false,
            was_opening: false,
            hinge_rotation: 0.0,
        }
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[inline]
    pub fn is_held(&self) -> bool {
        self.is_held
    }

    pub fn set_held(&mut self, held: bool) {
        self.is_held = held;
    }

    #[inline]
    pub fn is_opening(&self) -> bool {
        self.was_opening
    }

    /// Hinge angle derived on the last tick.
    #[inline]
    pub fn hinge_rotation(&self) -> f32 {
        self.hinge_rotation
    }

    /// Hinge angle for a given progress. Negative swings toward the room.
    #[inline]
    pub fn rotation_for(progress: f32, open_angle_limit: f32) -> f32 {
        -smoothstep(progress) * open_angle_limit
    }

    pub fn tick(&mut self, dt: Duration) {
        let dt = dt.as_secs_f32();
        let prev = self.progress;

        if self.is_held {
            self.progress = (self.progress + OPEN_SPEED * dt).min(1.0);
            if !self.was_opening && self.progress > 0.0 {
                self.was_opening = true;
                log::debug!("[door] opening from {:.3}", prev);
                play_once(self.cues.open.as_mut());
            }
            if self.progress > 0.0 {
                play_once(self.cues.ambient.as_mut());
            }
        } else if self.progress > 0.0 {
            if self.was_opening && prev > 0.0 {
                self.was_opening = false;
                log::debug!("[door] closing from {:.3}", prev);
                play_once(self.cues.close.as_mut());
            }
            self.progress = (self.progress - CLOSE_SPEED * dt).max(0.0);
            if self.progress == 0.0 {
                stop_if_playing(self.cues.ambient.as_mut());
            }
        }

        self.hinge_rotation = Self::rotation_for(self.progress, self.open_angle_limit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoothstep_endpoints_and_midpoint() {
        assert_eq!(smoothstep(0.0), 0.0);
        assert_eq!(smoothstep(1.0), 1.0);
        assert_eq!(smoothstep(0.5), 0.5);
    }

    #[test]
    fn smoothstep_is_monotonic_on_unit_interval() {
        let mut prev = smoothstep(0.0);
        for i in 1..=100 {
            let v = smoothstep(i as f32 / 100.0);
            assert!(v >= prev, "not increasing at {i}");
            prev = v;
        }
    }

    #[test]
    fn zero_dt_tick_while_held_does_not_start_opening() {
        let mut d = DoorState::new(DoorAnchor::at(glam::Vec3::ZERO), 0.26, DoorCues::silent());
        d.set_held(true);
        d.tick(Duration::ZERO);
        assert_eq!(d.progress(), 0.0);
        assert!(!d.is_opening());
    }
}
