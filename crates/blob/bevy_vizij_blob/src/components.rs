use bevy::prelude::*;

/// Marker for the deformable sphere. Its Transform rotation and StandardMaterial
/// (if any) are driven from `RenderState`.
#[derive(Component, Debug, Default)]
pub struct BlobSphere;

/// Text label for the preset at `index` in the catalog.
/// The apply system owns its translation.x and scale.
#[derive(Component, Debug, Clone, Copy)]
pub struct BlobLabel {
    pub index: usize,
}
