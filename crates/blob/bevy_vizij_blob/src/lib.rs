//! Bevy adapter for `vizij-blob-core`.
//!
//! Per frame, in `Update`: wheel input → controller tick → write `RenderState` into the world.
//! The host spawns the sphere (`BlobSphere`) and one entity per preset label
//! (`BlobLabel { index }`); glyph meshes and the deformation shader stay on the host side.

use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;
use vizij_blob_core::{Config, PresetCatalog, TransitionController};

pub mod components;
pub mod resources;
pub mod systems;

pub use components::{BlobLabel, BlobSphere};
pub use resources::{BlobController, BlobTransitionEvent};

/// Plugin that owns a `TransitionController` as the `BlobController` resource.
#[derive(Default)]
pub struct VizijBlobPlugin {
    pub catalog: PresetCatalog,
    pub config: Config,
}

impl VizijBlobPlugin {
    pub fn new(catalog: PresetCatalog, config: Config) -> Self {
        Self { catalog, config }
    }
}

impl Plugin for VizijBlobPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(BlobController(TransitionController::new(
            self.catalog.clone(),
            self.config.clone(),
        )))
        .init_resource::<ClearColor>()
        .add_event::<MouseWheel>()
        .add_event::<BlobTransitionEvent>()
        .add_systems(
            Update,
            (
                systems::scroll_input_system,
                systems::tick_controller_system,
                systems::apply_render_state_system,
            )
                .chain(),
        );
    }
}
