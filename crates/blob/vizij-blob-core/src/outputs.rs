//! Output contracts from the controller.
//!
//! Values live in `RenderState`; Outputs only carry the discrete events of the
//! last tick so hosts can react (sound, analytics, UI) without diffing state.

use serde::{Deserialize, Serialize};

use crate::input::Direction;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum BlobEvent {
    TransitionStarted {
        from: usize,
        to: usize,
        direction: Direction,
    },
    /// Scroll arrived while a transition was in flight and was dropped.
    ScrollIgnored { direction: Direction },
    TransitionCommitted { index: usize, name: String },
}

/// Outputs returned by `TransitionController::update()`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub events: Vec<BlobEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.events.clear();
    }

    #[inline]
    pub fn push_event(&mut self, event: BlobEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
