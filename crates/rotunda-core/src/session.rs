//! Session state and the per-frame entry point.
//!
//! Everything the simulation mutates lives in [`SessionState`]: held input,
//! the hold latch, the viewer and the doors. Front-ends feed it key events
//! as they arrive and call [`SessionState::tick`] once per frame with a delta
//! from [`FrameClock`].

use crate::audio::DoorCues;
use crate::constants::{DOOR_INSET, DOOR_OPEN_ANGLE, FOCUS_MAX_DISTANCE, MAX_FRAME_DT_SEC};
use crate::door::DoorState;
use crate::focus::{self, FocusCandidate};
use crate::input::{Control, InputState, KeyBindings};
use crate::interaction::InteractionCoordinator;
use crate::layout::{DoorAnchor, RoomLayout};
use crate::locomotion;
use crate::pose::Pose;
use instant::Instant;
use std::time::Duration;

/// Runtime-tunable settings. Defaults reproduce the stock room.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub room: RoomLayout,
    pub focus_max_distance: f32,
    pub door_open_angle: f32,
    pub door_inset: f32,
    pub bindings: KeyBindings,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            room: RoomLayout::default(),
            focus_max_distance: FOCUS_MAX_DISTANCE,
            door_open_angle: DOOR_OPEN_ANGLE,
            door_inset: DOOR_INSET,
            bindings: KeyBindings::default(),
        }
    }
}

#[inline]
pub fn max_frame_dt() -> Duration {
    Duration::from_secs_f32(MAX_FRAME_DT_SEC)
}

/// Clamp a frame delta to the largest step the simulation will take.
#[inline]
pub fn clamp_dt(dt: Duration) -> Duration {
    dt.min(max_frame_dt())
}

/// Wall-clock deltas between frames, clamped.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delta since the previous call. The first call yields zero.
    pub fn delta(&mut self, now: Instant) -> Duration {
        let dt = match self.last {
            Some(prev) if now > prev => now - prev,
            _ => Duration::ZERO,
        };
        self.last = Some(now);
        clamp_dt(dt)
    }
}

pub struct SessionState {
    pub config: SessionConfig,
    pub input: InputState,
    pub interaction: InteractionCoordinator,
    pub viewer: Pose,
    pub doors: Vec<DoorState>,
}

impl SessionState {
    pub fn new(config: SessionConfig, doors: Vec<DoorState>) -> Self {
        log::info!(
            "[session] room r={:.1} segments={} doors={}",
            config.room.radius,
            config.room.segments,
            doors.len()
        );
        Self {
            config,
            input: InputState::new(),
            interaction: InteractionCoordinator::new(),
            viewer: Pose::default(),
            doors,
        }
    }

    /// Build one door per wall segment, asking `make_cues` for each door's
    /// cues by index.
    pub fn with_ring(
        config: SessionConfig,
        mut make_cues: impl FnMut(usize, &DoorAnchor) -> DoorCues,
    ) -> Self {
        let limit = config.door_open_angle;
        let doors = config
            .room
            .door_anchors(config.door_inset)
            .into_iter()
            .enumerate()
            .map(|(i, anchor)| {
                let cues = make_cues(i, &anchor);
                DoorState::new(anchor, limit, cues)
            })
            .collect();
        Self::new(config, doors)
    }

    /// Key-down for a raw key code. Returns true if the code is bound.
    pub fn key_down(&mut self, code: &str, repeat: bool) -> bool {
        match self.config.bindings.control_for(code) {
            Some(control) => {
                self.control_down(control, repeat);
                true
            }
            None => false,
        }
    }

    /// Key-up for a raw key code. Returns true if the code is bound.
    pub fn key_up(&mut self, code: &str) -> bool {
        match self.config.bindings.control_for(code) {
            Some(control) => {
                self.control_up(control);
                true
            }
            None => false,
        }
    }

    pub fn control_down(&mut self, control: Control, repeat: bool) {
        self.input.press(control);
        if control == Control::Hold {
            self.interaction.press(
                repeat,
                &self.viewer,
                &mut self.doors,
                self.config.focus_max_distance,
            );
        }
    }

    pub fn control_up(&mut self, control: Control) {
        self.input.release(control);
        if control == Control::Hold {
            self.interaction.release(&mut self.doors);
        }
    }

    /// Drop all held input, including any held door, e.g. on window blur.
    pub fn release_all(&mut self) {
        self.input.clear();
        self.interaction.release(&mut self.doors);
    }

    /// Door the viewer is addressing right now, for hints.
    pub fn focused_door(&self) -> Option<FocusCandidate> {
        focus::resolve(&self.viewer, &self.doors, self.config.focus_max_distance)
    }

    /// Advance one frame: the viewer first, then every door in order.
    pub fn tick(&mut self, dt: Duration) {
        let dt = clamp_dt(dt);
        locomotion::step(&mut self.viewer, &self.input, dt, &self.config.room);
        for door in &mut self.doors {
            door.tick(dt);
        }
    }
}
