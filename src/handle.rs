//! Read-only view of the running session for the page's renderer.
//!
//! The page draws the room itself; each frame it asks for the viewer pose
//! and every door's placement and hinge angle through this handle.

use rotunda_core::{theme_for, SessionState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

thread_local! {
    static SESSION: RefCell<Option<Rc<RefCell<SessionState>>>> = const { RefCell::new(None) };
}

pub fn publish(session: Rc<RefCell<SessionState>>) {
    SESSION.with(|s| *s.borrow_mut() = Some(session));
}

/// Handle to the running session, or `undefined` while audio and doors are
/// still being set up.
#[wasm_bindgen]
pub fn session_handle() -> Option<RotundaHandle> {
    SESSION.with(|s| s.borrow().clone()).map(|session| RotundaHandle { session })
}

#[wasm_bindgen]
pub struct RotundaHandle {
    session: Rc<RefCell<SessionState>>,
}

#[wasm_bindgen]
impl RotundaHandle {
    /// `[x, y, z]` of the viewer's eye.
    pub fn viewer_position(&self) -> Vec<f32> {
        self.session.borrow().viewer.position.to_array().to_vec()
    }

    /// Viewer yaw wrapped to `(-PI, PI]`.
    pub fn viewer_yaw(&self) -> f32 {
        self.session.borrow().viewer.display_yaw()
    }

    pub fn room_radius(&self) -> f32 {
        self.session.borrow().config.room.radius
    }

    pub fn room_height(&self) -> f32 {
        self.session.borrow().config.room.height
    }

    pub fn room_segments(&self) -> usize {
        self.session.borrow().config.room.segments
    }

    /// Length of one wall panel.
    pub fn wall_width(&self) -> f32 {
        self.session.borrow().config.room.wall_width()
    }

    pub fn door_count(&self) -> usize {
        self.session.borrow().doors.len()
    }

    /// `[x, z, rotation_y]` of the door's hinge root, or empty if out of range.
    pub fn door_root(&self, index: usize) -> Vec<f32> {
        self.session
            .borrow()
            .doors
            .get(index)
            .map(|d| {
                let p = d.anchor.root_position();
                vec![p.x, p.z, d.anchor.rotation_y()]
            })
            .unwrap_or_default()
    }

    /// Hinge angle in radians; 0 for an unknown door.
    pub fn door_rotation(&self, index: usize) -> f32 {
        self.session
            .borrow()
            .doors
            .get(index)
            .map_or(0.0, |d| d.hinge_rotation())
    }

    pub fn door_progress(&self, index: usize) -> f32 {
        self.session
            .borrow()
            .doors
            .get(index)
            .map_or(0.0, |d| d.progress())
    }

    /// True from the first opening tick until the door starts closing.
    pub fn door_opening(&self, index: usize) -> bool {
        self.session
            .borrow()
            .doors
            .get(index)
            .is_some_and(|d| d.is_opening())
    }

    /// `0xRRGGBB` panel colour.
    pub fn door_color(&self, index: usize) -> u32 {
        theme_for(index).color
    }

    /// Index of the door currently in focus, or -1.
    pub fn focused_door(&self) -> i32 {
        self.session
            .borrow()
            .focused_door()
            .map_or(-1, |c| c.index as i32)
    }
}
