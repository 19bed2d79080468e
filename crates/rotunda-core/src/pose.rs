//! Viewer pose.
//!
//! The viewer only ever walks on the floor plane and turns about the vertical
//! axis, so a pose is a position plus a yaw. Yaw 0 looks down -Z and positive
//! yaw turns to the left, matching a right-handed camera rotated about +Y.

use glam::{Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    /// Radians. Unbounded; only `display_yaw` wraps it.
    pub yaw: f32,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: crate::constants::viewer_start(),
            yaw: 0.0,
        }
    }
}

impl Pose {
    pub fn new(position: Vec3, yaw: f32) -> Self {
        Self { position, yaw }
    }

    /// World-space view direction with the vertical component discarded.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        let (s, c) = self.yaw.sin_cos();
        Vec3::new(-s, 0.0, -c)
    }

    /// Forward on the ground plane as (x, z).
    #[inline]
    pub fn forward_xz(&self) -> Vec2 {
        let f = self.forward();
        Vec2::new(f.x, f.z)
    }

    /// Position on the ground plane as (x, z).
    #[inline]
    pub fn position_xz(&self) -> Vec2 {
        Vec2::new(self.position.x, self.position.z)
    }

    /// Yaw wrapped into (-PI, PI] for display.
    pub fn display_yaw(&self) -> f32 {
        use std::f32::consts::{PI, TAU};
        let w = self.yaw.rem_euclid(TAU);
        if w > PI {
            w - TAU
        } else {
            w
        }
    }

    /// Yaw that makes `forward()` point along the given ground direction.
    pub fn yaw_facing(dir_xz: Vec2) -> f32 {
        (-dir_xz.x).atan2(-dir_xz.y)
    }
}
