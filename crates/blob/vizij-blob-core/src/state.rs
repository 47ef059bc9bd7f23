//! RenderState: every value the render loop reads per frame.
//!
//! Owned by `TransitionController`; hosts get it by reference and copy what they
//! need into their scene (uniforms, material, clear color, label transforms).

use serde::{Deserialize, Serialize};

use crate::catalog::{PresetCatalog, PresetParams};
use crate::color::Rgb;
use crate::config::Config;

/// Vertex deformation uniforms.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BlobUniforms {
    /// Elapsed seconds, advanced by `update(dt)`.
    pub time: f32,
    pub position_frequency: f32,
    pub position_strength: f32,
    pub time_frequency: f32,
    pub small_wave_position_frequency: f32,
    pub small_wave_position_strength: f32,
    pub small_wave_time_frequency: f32,
}

/// Physical material parameters of the sphere.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialState {
    pub roughness: f32,
    pub metalness: f32,
    pub env_map_intensity: f32,
    pub clearcoat: f32,
    pub clearcoat_roughness: f32,
    pub transmission: f32,
    pub flat_shading: bool,
    pub wireframe: bool,
    pub map_id: Option<String>,
}

impl Default for MaterialState {
    // Physical-material defaults for fields a preset leaves out.
    fn default() -> Self {
        Self {
            roughness: 1.0,
            metalness: 0.0,
            env_map_intensity: 1.0,
            clearcoat: 0.0,
            clearcoat_roughness: 0.0,
            transmission: 0.0,
            flat_shading: false,
            wireframe: false,
            map_id: None,
        }
    }
}

/// Transform of one preset's text label.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabelState {
    pub text: String,
    pub position: [f32; 3],
    /// Uniform scale; 0 hides the label.
    pub scale: f32,
}

impl LabelState {
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.scale > 0.0
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderState {
    pub uniforms: BlobUniforms,
    pub material: MaterialState,
    pub background: Rgb,
    /// Accumulated spin about Y (radians); never wrapped.
    pub sphere_rotation_y: f32,
    /// One label per preset, same order as the catalog.
    pub labels: Vec<LabelState>,
    /// Shared text-reveal progress.
    pub text_progress: f32,
}

impl RenderState {
    /// Initial state showing preset 0: its params applied, its label centered, all others hidden.
    pub fn new(catalog: &PresetCatalog, cfg: &Config) -> Self {
        let labels = catalog
            .iter()
            .enumerate()
            .map(|(i, p)| LabelState {
                text: p.name.clone(),
                position: [0.0, 0.0, cfg.label_depth],
                scale: if i == 0 { 1.0 } else { 0.0 },
            })
            .collect();

        let first = catalog.get(0);
        let mut state = Self {
            uniforms: BlobUniforms {
                time_frequency: cfg.time_frequency,
                small_wave_time_frequency: cfg.small_wave_time_frequency,
                ..BlobUniforms::default()
            },
            material: MaterialState::default(),
            background: first.background,
            sphere_rotation_y: 0.0,
            labels,
            text_progress: 0.0,
        };
        state.apply_params(&first.params);
        state
    }

    /// Copy every present field of `params`; absent fields keep their current value.
    pub fn apply_params(&mut self, params: &PresetParams) {
        fn set<T: Clone>(dst: &mut T, src: &Option<T>) {
            if let Some(v) = src {
                *dst = v.clone();
            }
        }

        let u = &mut self.uniforms;
        set(&mut u.position_frequency, &params.position_frequency);
        set(&mut u.position_strength, &params.position_strength);
        set(
            &mut u.small_wave_position_frequency,
            &params.small_wave_position_frequency,
        );
        set(
            &mut u.small_wave_position_strength,
            &params.small_wave_position_strength,
        );

        let m = &mut self.material;
        set(&mut m.roughness, &params.roughness);
        set(&mut m.metalness, &params.metalness);
        set(&mut m.env_map_intensity, &params.env_map_intensity);
        set(&mut m.clearcoat, &params.clearcoat);
        set(&mut m.clearcoat_roughness, &params.clearcoat_roughness);
        set(&mut m.transmission, &params.transmission);
        set(&mut m.flat_shading, &params.flat_shading);
        set(&mut m.wireframe, &params.wireframe);
        if params.map_id.is_some() {
            m.map_id = params.map_id.clone();
        }
    }

    /// Hard-cut a label to full scale at horizontal offset `x`.
    pub fn show_label(&mut self, index: usize, x: f32) {
        if let Some(label) = self.labels.get_mut(index) {
            label.scale = 1.0;
            label.position[0] = x;
        }
    }

    pub fn hide_label(&mut self, index: usize) {
        if let Some(label) = self.labels.get_mut(index) {
            label.scale = 0.0;
        }
    }

    /// Indices of labels with non-zero scale.
    pub fn visible_labels(&self) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|(_, l)| l.is_visible())
            .map(|(i, _)| i)
            .collect()
    }
}
