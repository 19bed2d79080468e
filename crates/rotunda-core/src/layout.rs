//! Room geometry and door placement.
//!
//! The room is a regular polygon approximating a circle. One door stands in
//! front of the middle of every wall segment, turned to face the centre.
//! Placement is stored as two explicit transforms per door, the root (floor
//! position and facing) and the hinge-local offset of the door's hit volume,
//! and world positions are obtained by composing them.

use crate::constants::*;
use glam::{Affine3A, Quat, Vec3};
use std::f32::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoomLayout {
    pub radius: f32,
    pub height: f32,
    pub segments: usize,
}

impl Default for RoomLayout {
    fn default() -> Self {
        Self {
            radius: ROOM_RADIUS,
            height: ROOM_HEIGHT,
            segments: ROOM_SEGMENTS,
        }
    }
}

impl RoomLayout {
    #[inline]
    pub fn angle_step(&self) -> f32 {
        std::f32::consts::TAU / self.segments.max(1) as f32
    }

    /// Length of one polygon side.
    pub fn wall_width(&self) -> f32 {
        2.0 * self.radius * (self.angle_step() * 0.5).sin()
    }

    /// Farthest the viewer may stand from the centre.
    #[inline]
    pub fn walkable_radius(&self) -> f32 {
        self.radius - WALL_INSET
    }

    /// One anchor per wall segment, in segment order.
    pub fn door_anchors(&self, inset: f32) -> Vec<DoorAnchor> {
        let step = self.angle_step();
        let ring = self.radius - inset;
        (0..self.segments)
            .map(|i| {
                let angle = i as f32 * step + step * 0.5;
                let root = Vec3::new(angle.cos() * ring, 0.0, angle.sin() * ring);
                DoorAnchor::new(root, -angle + PI * 0.5 + PI)
            })
            .collect()
    }
}

/// Where a door stands and where its hit volume sits relative to the hinge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DoorAnchor {
    root: Affine3A,
    hinge_local: Affine3A,
    rotation_y: f32,
}

impl DoorAnchor {
    pub fn new(root_position: Vec3, rotation_y: f32) -> Self {
        Self {
            root: Affine3A::from_rotation_translation(
                Quat::from_rotation_y(rotation_y),
                root_position,
            ),
            hinge_local: Affine3A::from_translation(Vec3::new(
                DOOR_WIDTH * 0.5,
                DOOR_HEIGHT * 0.5,
                0.0,
            )),
            rotation_y,
        }
    }

    /// Anchor whose hit volume is centred exactly on `position`.
    pub fn at(position: Vec3) -> Self {
        Self {
            root: Affine3A::from_translation(position),
            hinge_local: Affine3A::IDENTITY,
            rotation_y: 0.0,
        }
    }

    #[inline]
    pub fn root_position(&self) -> Vec3 {
        self.root.translation.into()
    }

    #[inline]
    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    /// World transform of the hit volume.
    pub fn world_transform(&self) -> Affine3A {
        self.root * self.hinge_local
    }

    /// World position used for focus tests.
    #[inline]
    pub fn world_position(&self) -> Vec3 {
        self.world_transform().translation.into()
    }
}

/// Colour and ambience of one door.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DoorTheme {
    pub color: u32,
    pub sound: &'static str,
}

impl DoorTheme {
    pub const fn new(color: u32, sound: &'static str) -> Self {
        Self { color, sound }
    }
}

pub const OPEN_SOUND: &str = "open.mp3";
pub const CLOSE_SOUND: &str = "close.mp3";

pub const DOOR_THEMES: [DoorTheme; ROOM_SEGMENTS] = [
    DoorTheme::new(0x4cc9f0, "door-baby.mp3"),
    DoorTheme::new(0xf72585, "door-birds.mp3"),
    DoorTheme::new(0xb5179e, "door-wind.mp3"),
    DoorTheme::new(0x7209b7, "door-cicada.mp3"),
    DoorTheme::new(0x3a0ca3, "door-rain.mp3"),
    DoorTheme::new(0xf72585, "door-intersection.mp3"),
    DoorTheme::new(0x4cc9f0, "door-bath.mp3"),
    DoorTheme::new(0x560bad, "door-market.mp3"),
    DoorTheme::new(0x4cc9f0, "door-town.mp3"),
    DoorTheme::new(0xb5179e, "door-river.mp3"),
    DoorTheme::new(0x7209b7, "door-water.mp3"),
    DoorTheme::new(0xf72585, "door-fire-works.mp3"),
    DoorTheme::new(0x560bad, "door-factory.mp3"),
    DoorTheme::new(0x4cc9f0, "door-noise.mp3"),
    DoorTheme::new(0x7209b7, "door-higurashi.mp3"),
    DoorTheme::new(0xb5179e, "door-japanese-home.mp3"),
];

/// Theme for the door at `index`, cycling when the room has more segments
/// than themes.
#[inline]
pub fn theme_for(index: usize) -> DoorTheme {
    DOOR_THEMES[index % DOOR_THEMES.len()]
}
