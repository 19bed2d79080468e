// Session-level behaviour: hold latching, key bindings, frame clock and tick.

use glam::{Vec2, Vec3};
use instant::Instant;
use rotunda_core::*;
use std::time::Duration;

fn door_at(x: f32, z: f32) -> DoorState {
    DoorState::new(DoorAnchor::at(Vec3::new(x, 0.0, z)), DOOR_OPEN_ANGLE, DoorCues::silent())
}

/// Viewer at the origin facing +X with two doors ahead: A at 2, B at 3.
fn two_door_session() -> SessionState {
    let mut s = SessionState::new(
        SessionConfig::default(),
        vec![door_at(2.0, 0.0), door_at(3.0, 0.0)],
    );
    s.viewer = Pose::new(Vec3::new(0.0, EYE_HEIGHT, 0.0), Pose::yaw_facing(Vec2::X));
    s
}

const A: usize = 0;
const B: usize = 1;

#[test]
fn hold_press_latches_focused_door() {
    let mut s = two_door_session();
    assert!(s.key_down("KeyE", false));
    assert_eq!(s.interaction.held(), Some(HeldInteraction { door: A }));
    assert!(s.doors[A].is_held());
    assert!(!s.doors[B].is_held());
}

#[test]
fn hold_press_with_nothing_focused_stays_idle() {
    let mut s = two_door_session();
    s.viewer.yaw += std::f32::consts::PI; // turn around
    s.key_down("KeyE", false);
    assert!(!s.interaction.is_holding());
    assert!(s.doors.iter().all(|d| !d.is_held()));
}

#[test]
fn repeated_press_does_not_rebind() {
    let mut s = two_door_session();
    s.key_down("KeyE", false);
    // Step past A so that B is now the focused door.
    s.viewer.position.x = 2.9;
    assert_eq!(s.focused_door().map(|c| c.index), Some(B));

    s.key_down("KeyE", true);
    assert_eq!(s.interaction.held(), Some(HeldInteraction { door: A }));
    s.key_down("KeyE", false);
    assert_eq!(s.interaction.held(), Some(HeldInteraction { door: A }));
    assert!(!s.doors[B].is_held());
}

#[test]
fn release_reaches_the_latched_door_after_turning_away() {
    let mut s = two_door_session();
    s.key_down("KeyE", false);
    s.viewer.yaw += std::f32::consts::PI;
    assert_eq!(s.focused_door(), None);
    s.tick(Duration::from_millis(16));
    assert!(s.doors[A].progress() > 0.0);

    assert!(s.key_up("KeyE"));
    assert!(!s.doors[A].is_held());
    assert!(!s.interaction.is_holding());
}

#[test]
fn release_then_press_can_grab_a_different_door() {
    let mut s = two_door_session();
    s.key_down("KeyE", false);
    s.viewer.position.x = 2.9;
    s.key_up("KeyE");
    s.key_down("KeyE", false);
    assert_eq!(s.interaction.held(), Some(HeldInteraction { door: B }));
}

#[test]
fn held_door_opens_over_ticks_and_closes_after_release() {
    let mut s = two_door_session();
    s.key_down("KeyE", false);
    for _ in 0..30 {
        s.tick(Duration::from_millis(16));
    }
    assert_eq!(s.doors[A].progress(), 1.0);
    assert_eq!(s.doors[A].hinge_rotation(), -DOOR_OPEN_ANGLE);
    assert_eq!(s.doors[B].progress(), 0.0);

    s.key_up("KeyE");
    for _ in 0..30 {
        s.tick(Duration::from_millis(16));
    }
    assert_eq!(s.doors[A].progress(), 0.0);
}

#[test]
fn tick_clamps_large_deltas() {
    let mut s = two_door_session();
    s.key_down("KeyE", false);
    s.tick(Duration::from_secs(5));
    let expected = OPEN_SPEED * MAX_FRAME_DT_SEC;
    assert!((s.doors[A].progress() - expected).abs() < 1e-4);
}

#[test]
fn tick_moves_viewer_from_held_arrows() {
    let mut s = two_door_session();
    s.key_down("ArrowUp", false);
    s.tick(Duration::from_millis(20));
    assert!((s.viewer.position.x - MOVE_SPEED * 0.02).abs() < 1e-4);
    s.key_up("ArrowUp");
    let x = s.viewer.position.x;
    s.tick(Duration::from_millis(20));
    assert_eq!(s.viewer.position.x, x);
}

#[test]
fn unbound_keys_are_reported_and_ignored() {
    let mut s = two_door_session();
    assert!(!s.key_down("KeyQ", false));
    assert!(!s.key_up("KeyQ"));
    assert!(!s.interaction.is_holding());
}

#[test]
fn release_all_lets_go_of_everything() {
    let mut s = two_door_session();
    s.key_down("ArrowUp", false);
    s.key_down("KeyE", false);
    s.release_all();
    assert!(!s.input.is_held(Control::Forward));
    assert!(!s.doors[A].is_held());
    assert!(!s.interaction.is_holding());
}

#[test]
fn rebinding_hold_moves_interaction_to_new_key() {
    let mut config = SessionConfig::default();
    config.bindings = KeyBindings::with_overrides("hold=KeyF").expect("valid override");
    let mut s = SessionState::new(config, vec![door_at(2.0, 0.0)]);
    s.viewer = Pose::new(Vec3::ZERO, Pose::yaw_facing(Vec2::X));
    assert!(!s.key_down("KeyE", false));
    assert!(s.key_down("KeyF", false));
    assert!(s.doors[0].is_held());
}

#[test]
fn binding_overrides_parse_and_reject() {
    let b = KeyBindings::with_overrides(" forward:KeyW , turn-left=KeyA ,").expect("valid");
    assert_eq!(b.control_for("KeyW"), Some(Control::Forward));
    assert_eq!(b.control_for("ArrowUp"), None);
    assert_eq!(b.control_for("KeyA"), Some(Control::TurnLeft));
    assert_eq!(b.code_for(Control::Hold), Some("KeyE"));

    assert_eq!(
        KeyBindings::with_overrides("jump=Space").unwrap_err(),
        ConfigError::UnknownControl("jump".into())
    );
    assert_eq!(
        KeyBindings::with_overrides("hold").unwrap_err(),
        ConfigError::MalformedBinding("hold".into())
    );
    assert_eq!(
        KeyBindings::with_overrides("hold=").unwrap_err(),
        ConfigError::EmptyKey("hold".into())
    );
}

#[test]
fn frame_clock_first_delta_is_zero_then_clamped() {
    let mut clock = FrameClock::new();
    let t0 = Instant::now();
    assert_eq!(clock.delta(t0), Duration::ZERO);
    assert_eq!(clock.delta(t0 + Duration::from_millis(10)), Duration::from_millis(10));
    assert_eq!(clock.delta(t0 + Duration::from_secs(2)), max_frame_dt());
    // Going backwards never yields a negative step.
    assert_eq!(clock.delta(t0), Duration::ZERO);
}

#[test]
fn ring_session_has_one_door_per_segment() {
    let mut built = Vec::new();
    let s = SessionState::with_ring(SessionConfig::default(), |i, anchor| {
        built.push((i, anchor.root_position()));
        DoorCues::silent()
    });
    assert_eq!(s.doors.len(), ROOM_SEGMENTS);
    assert_eq!(built.len(), ROOM_SEGMENTS);
    for (i, root) in built {
        let r = Vec2::new(root.x, root.z).length();
        assert!((r - (ROOM_RADIUS - DOOR_INSET)).abs() < 1e-4, "door {i} at r={r}");
    }
    assert_eq!(s.viewer, Pose::default());
    assert_eq!(s.focused_door(), None);
}

#[test]
fn long_turn_reports_wrapped_yaw_matching_facing() {
    let mut s = SessionState::with_ring(SessionConfig::default(), |_, _| DoorCues::silent());
    s.key_down("ArrowLeft", false);
    for _ in 0..600 {
        s.tick(Duration::from_secs_f32(1.0 / 60.0));
    }
    assert!(s.viewer.yaw > std::f32::consts::TAU, "raw yaw {}", s.viewer.yaw);
    let shown = s.viewer.display_yaw();
    assert!(shown > -std::f32::consts::PI && shown <= std::f32::consts::PI);
    let f = s.viewer.forward_xz();
    assert!((Pose::yaw_facing(f) - shown).abs() < 1e-3, "shown {shown}");
}

#[test]
fn ring_doors_are_spaced_by_scaled_wall_width() {
    let s = SessionState::with_ring(SessionConfig::default(), |_, _| DoorCues::silent());
    let room = s.config.room;
    let scale = (room.radius - DOOR_INSET) / room.radius;
    let a = s.doors[0].anchor.root_position();
    let b = s.doors[1].anchor.root_position();
    assert!(((b - a).length() - room.wall_width() * scale).abs() < 1e-4);
}
