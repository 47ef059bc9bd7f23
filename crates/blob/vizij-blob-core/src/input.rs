//! Input contracts: raw scroll events and the stateless adapter that turns them
//! into transition requests.
//!
//! Scroll deltas follow the DOM wheel convention: positive `deltaY` means the
//! content scrolls down, which advances to the next preset.

use serde::{Deserialize, Serialize};

use crate::controller::TransitionController;

/// Signed step through the catalog.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Sign of a scroll delta. Zero and NaN count as forward.
    #[inline]
    pub fn from_delta(delta: f32) -> Self {
        if delta < 0.0 {
            Direction::Backward
        } else {
            Direction::Forward
        }
    }

    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    #[inline]
    pub fn signum(self) -> f32 {
        self.sign() as f32
    }
}

/// Wheel-style scroll event as delivered by the host.
/// Missing fields default to zero so malformed payloads still map to a direction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollEvent {
    #[serde(rename = "deltaX", default)]
    pub delta_x: f32,
    #[serde(rename = "deltaY", default)]
    pub delta_y: f32,
}

impl ScrollEvent {
    pub fn vertical(delta_y: f32) -> Self {
        Self {
            delta_x: 0.0,
            delta_y,
        }
    }
}

/// Stateless bridge from scroll events to `TransitionController::begin`.
/// The controller owns the busy guard; this type forwards every event.
#[derive(Copy, Clone, Debug, Default)]
pub struct InputAdapter;

impl InputAdapter {
    pub fn new() -> Self {
        Self
    }

    #[inline]
    pub fn direction(event: &ScrollEvent) -> Direction {
        Direction::from_delta(event.delta_y)
    }

    /// Forward one scroll event. Returns whether a transition was started.
    pub fn on_scroll(&self, controller: &mut TransitionController, event: &ScrollEvent) -> bool {
        controller.begin(Self::direction(event))
    }
}
