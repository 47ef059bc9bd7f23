//! Core configuration for vizij-blob-core.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// Transition tuning and scene defaults.
/// Every field has a default so hosts can pass partial JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Shared duration (seconds) of all five sub-animations of a transition.
    pub transition_duration: f32,
    /// Distance off-center where the incoming label starts.
    pub incoming_label_offset: f32,
    /// Distance off-center where the outgoing label ends.
    pub outgoing_label_offset: f32,
    /// Radians added to the sphere's Y rotation per transition (sign opposite the scroll).
    pub spin_per_transition: f32,
    /// Text-reveal progress reached at the commit point.
    pub reveal_target: f32,
    /// Z coordinate of every label.
    pub label_depth: f32,

    pub initial_background: Rgb,
    /// Fade from `initial_background` to preset 0's background on startup.
    pub intro_fade: bool,

    /// Deformation time frequencies (not part of presets).
    pub time_frequency: f32,
    pub small_wave_time_frequency: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            transition_duration: 1.0,
            incoming_label_offset: 3.5,
            outgoing_label_offset: 3.0,
            spin_per_transition: std::f32::consts::PI * 4.0,
            reveal_target: 0.5,
            label_depth: 2.0,
            initial_background: Rgb::from_u32(0x333333),
            intro_fade: true,
            time_frequency: 0.3,
            small_wave_time_frequency: 0.3,
        }
    }
}
