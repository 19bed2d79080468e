//! Turning, walking and the round-wall clamp.

use crate::constants::{MOVE_SPEED, TURN_RATE};
use crate::input::{Control, InputState};
use crate::layout::RoomLayout;
use crate::pose::Pose;
use glam::Vec3;
use std::time::Duration;

/// Advance the viewer by one tick of held controls.
///
/// Left and right turns are applied independently, so holding both cancels
/// out. Walking is along the horizontal forward only and the result is kept
/// inside the walkable circle of `room`.
pub fn step(pose: &mut Pose, input: &InputState, dt: Duration, room: &RoomLayout) {
    let dt = dt.as_secs_f32();

    if input.is_held(Control::TurnLeft) {
        pose.yaw += TURN_RATE * dt;
    }
    if input.is_held(Control::TurnRight) {
        pose.yaw -= TURN_RATE * dt;
    }

    let forward = pose.forward();
    let mut v = Vec3::ZERO;
    if input.is_held(Control::Forward) {
        v += forward;
    }
    if input.is_held(Control::Backward) {
        v -= forward;
    }

    if v.length_squared() > 0.0 {
        let candidate = pose.position + v.normalize() * (MOVE_SPEED * dt);
        pose.position = clamp_to_room(candidate, room.walkable_radius());
    }
}

/// Keep `candidate` within `max_dist` of the room centre on the ground plane.
///
/// Points outside are pulled radially back onto the circle at the same
/// angle; there is no sliding along the wall. Height is left alone.
pub fn clamp_to_room(candidate: Vec3, max_dist: f32) -> Vec3 {
    let dist = (candidate.x * candidate.x + candidate.z * candidate.z).sqrt();
    if dist < max_dist {
        return candidate;
    }
    let angle = candidate.z.atan2(candidate.x);
    Vec3::new(angle.cos() * max_dist, candidate.y, angle.sin() * max_dist)
}
