use bevy::prelude::*;
use vizij_blob_core::{BlobEvent, TransitionController};

#[derive(Resource)]
pub struct BlobController(pub TransitionController);

/// Core events re-emitted into the Bevy event queue each frame.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct BlobTransitionEvent(pub BlobEvent);
