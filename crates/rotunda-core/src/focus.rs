//! Which door the viewer is addressing.
//!
//! Only the ground plane matters: heights of viewer and door are dropped
//! before any distance or angle is measured. A door qualifies when it is
//! closer than the distance limit and lies strictly inside the forward
//! half-space; the nearest qualifying door wins, earlier doors winning ties.

use crate::constants::FOCUS_MAX_DISTANCE;
use crate::door::DoorState;
use crate::pose::Pose;
use std::f32::consts::FRAC_PI_2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusCandidate {
    /// Index into the door slice passed to [`resolve`].
    pub index: usize,
    /// Horizontal distance from the viewer.
    pub distance: f32,
}

/// Pick the focused door, if any. Pure: no door is touched.
pub fn resolve(viewer: &Pose, doors: &[DoorState], max_distance: f32) -> Option<FocusCandidate> {
    let forward = viewer.forward_xz().normalize_or_zero();
    let eye = viewer.position_xz();

    let mut best: Option<FocusCandidate> = None;
    let mut min_distance = max_distance;

    for (index, door) in doors.iter().enumerate() {
        let p = door.anchor.world_position();
        let to_door = glam::Vec2::new(p.x, p.z) - eye;
        let distance = to_door.length();
        if distance > max_distance {
            continue;
        }
        let cos = forward.dot(to_door.normalize_or_zero()).clamp(-1.0, 1.0);
        let angle = cos.acos();
        if angle < FRAC_PI_2 && distance < min_distance {
            min_distance = distance;
            best = Some(FocusCandidate { index, distance });
        }
    }
    best
}

/// [`resolve`] with the default reach.
#[inline]
pub fn resolve_default(viewer: &Pose, doors: &[DoorState]) -> Option<FocusCandidate> {
    resolve(viewer, doors, FOCUS_MAX_DISTANCE)
}
