//! Hold-to-open binding.
//!
//! A hold press latches onto whichever door is focused at that moment. The
//! latch survives the viewer turning or walking away and is only undone by
//! the matching release.

use crate::door::DoorState;
use crate::focus;
use crate::pose::Pose;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeldInteraction {
    pub door: usize,
}

#[derive(Clone, Debug, Default)]
pub struct InteractionCoordinator {
    held: Option<HeldInteraction>,
}

impl InteractionCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn held(&self) -> Option<HeldInteraction> {
        self.held
    }

    #[inline]
    pub fn is_holding(&self) -> bool {
        self.held.is_some()
    }

    /// Handle a hold-key press. Auto-repeat events and presses while already
    /// holding are ignored. Returns the door that was grabbed, if any.
    pub fn press(
        &mut self,
        repeat: bool,
        viewer: &Pose,
        doors: &mut [DoorState],
        max_distance: f32,
    ) -> Option<usize> {
        if repeat || self.held.is_some() {
            return None;
        }
        let candidate = focus::resolve(viewer, doors, max_distance)?;
        doors[candidate.index].set_held(true);
        self.held = Some(HeldInteraction {
            door: candidate.index,
        });
        log::debug!(
            "[interaction] holding door {} at {:.2}",
            candidate.index,
            candidate.distance
        );
        Some(candidate.index)
    }

    /// Handle a hold-key release. Returns the door that was let go, if any.
    pub fn release(&mut self, doors: &mut [DoorState]) -> Option<usize> {
        let held = self.held.take()?;
        if let Some(d) = doors.get_mut(held.door) {
            d.set_held(false);
        }
        log::debug!("[interaction] released door {}", held.door);
        Some(held.door)
    }
}
