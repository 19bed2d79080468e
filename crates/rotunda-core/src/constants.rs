use glam::Vec3;

// Shared tuning constants for the door walkthrough. Front-ends read these
// rather than carrying their own copies.

// Doors
pub const OPEN_SPEED: f32 = 3.0; // progress units per second while held
pub const CLOSE_SPEED: f32 = 4.0; // progress units per second after release
pub const DOOR_OPEN_ANGLE: f32 = 0.26; // hinge swing at full progress (radians)
pub const DOOR_WIDTH: f32 = 0.9;
pub const DOOR_HEIGHT: f32 = 2.2;
pub const DOOR_DEPTH: f32 = 0.05;
pub const DOOR_INSET: f32 = 0.3; // distance from the wall to the door root

// Viewer
pub const MOVE_SPEED: f32 = 7.0; // units per second
pub const TURN_RATE: f32 = 2.0; // radians per second
pub const EYE_HEIGHT: f32 = 1.7;
pub const WALL_INSET: f32 = 0.5; // closest the viewer may get to the wall

// Interaction
pub const FOCUS_MAX_DISTANCE: f32 = 3.5;

// Frame loop
pub const MAX_FRAME_DT_SEC: f32 = 0.033; // bounds one simulation step under hitches

// Room
pub const ROOM_RADIUS: f32 = 10.0;
pub const ROOM_HEIGHT: f32 = 4.0;
pub const ROOM_SEGMENTS: usize = 16;

#[inline]
pub fn viewer_start() -> Vec3 {
    Vec3::new(0.0, EYE_HEIGHT, 0.0)
}
