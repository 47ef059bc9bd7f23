//! Preset data model and the ordered, fixed-size catalog.
//!
//! JSON shape (one entry):
//! `{ "name": "Color Fusion", "background": "#9D73F7", "config": { "uPositionFrequency": 1, ... } }`
//! Every `config` field is optional; absent fields leave render state untouched on apply.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::BlobError;
use crate::input::Direction;

/// Shape and material parameters of one preset.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PresetParams {
    #[serde(
        rename = "uPositionFrequency",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub position_frequency: Option<f32>,
    #[serde(
        rename = "uPositionStrength",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub position_strength: Option<f32>,
    #[serde(
        rename = "uSmallWavePositionFrequency",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub small_wave_position_frequency: Option<f32>,
    #[serde(
        rename = "uSmallWavePositionStrength",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub small_wave_position_strength: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roughness: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metalness: Option<f32>,
    #[serde(
        rename = "envMapIntensity",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub env_map_intensity: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clearcoat: Option<f32>,
    #[serde(
        rename = "clearcoatRoughness",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub clearcoat_roughness: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transmission: Option<f32>,

    #[serde(
        rename = "flatShading",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub flat_shading: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wireframe: Option<bool>,
    /// Gradient texture id.
    #[serde(rename = "map", default, skip_serializing_if = "Option::is_none")]
    pub map_id: Option<String>,
}

/// A named bundle of shape/material parameters and a background color.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PresetDef", into = "PresetDef")]
pub struct Preset {
    pub name: String,
    pub background: Rgb,
    pub params: PresetParams,
}

/// Wire form of a preset (background as hex string).
#[derive(Clone, Debug, Serialize, Deserialize)]
struct PresetDef {
    name: String,
    background: String,
    #[serde(default, alias = "params")]
    config: PresetParams,
}

impl TryFrom<PresetDef> for Preset {
    type Error = BlobError;

    fn try_from(def: PresetDef) -> Result<Self, Self::Error> {
        Ok(Preset {
            background: Rgb::from_hex(&def.background)?,
            name: def.name,
            params: def.config,
        })
    }
}

impl From<Preset> for PresetDef {
    fn from(p: Preset) -> Self {
        PresetDef {
            name: p.name,
            background: p.background.to_hex(),
            config: p.params,
        }
    }
}

/// Ordered, immutable list of presets. Never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct PresetCatalog {
    presets: Vec<Preset>,
}

impl PresetCatalog {
    pub fn new(presets: Vec<Preset>) -> Result<Self, BlobError> {
        if presets.is_empty() {
            return Err(BlobError::EmptyCatalog);
        }
        Ok(Self { presets })
    }

    /// Parse a JSON array of presets.
    pub fn from_json(json: &str) -> Result<Self, BlobError> {
        let presets: Vec<Preset> = serde_json::from_str(json)?;
        Self::new(presets)
    }

    pub fn count(&self) -> usize {
        self.presets.len()
    }

    /// Lookup by position. Out-of-range indices wrap, so lookup is total.
    pub fn get(&self, index: usize) -> &Preset {
        &self.presets[index % self.presets.len()]
    }

    /// `(index + direction + count) mod count`, wrapping both ways.
    pub fn next(&self, index: usize, direction: Direction) -> usize {
        let count = self.presets.len() as i64;
        (index as i64 + i64::from(direction.sign())).rem_euclid(count) as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    /// The eight stock blob presets.
    pub fn builtin() -> Self {
        fn preset(
            name: &str,
            background: u32,
            shape: [f32; 4],
            material: [f32; 6],
            map: &str,
        ) -> Preset {
            Preset {
                name: name.to_string(),
                background: Rgb::from_u32(background),
                params: PresetParams {
                    position_frequency: Some(shape[0]),
                    position_strength: Some(shape[1]),
                    small_wave_position_frequency: Some(shape[2]),
                    small_wave_position_strength: Some(shape[3]),
                    roughness: Some(material[0]),
                    metalness: Some(material[1]),
                    env_map_intensity: Some(material[2]),
                    clearcoat: Some(material[3]),
                    clearcoat_roughness: Some(material[4]),
                    transmission: Some(material[5]),
                    flat_shading: Some(false),
                    wireframe: Some(false),
                    map_id: Some(map.to_string()),
                },
            }
        }

        let presets = vec![
            preset(
                "Color Fusion",
                0x9D73F7,
                [1.0, 0.3, 0.5, 0.7],
                [1.0, 0.0, 0.5, 0.0, 0.0, 0.0],
                "cosmic-fusion",
            ),
            preset(
                "Purple Mirror",
                0x5300B1,
                [0.584, 0.276, 0.899, 1.266],
                [0.0, 1.0, 2.0, 0.0, 0.0, 0.0],
                "purple-rain",
            ),
            preset(
                "Alien Goo",
                0x45ACD8,
                [1.022, 0.99, 0.378, 0.341],
                [0.292, 0.73, 0.86, 1.0, 0.0, 0.0],
                "lucky-day",
            ),
            preset(
                "Neon Dreams",
                0xFF3CAC,
                [0.8, 0.4, 0.6, 0.5],
                [0.1, 0.9, 1.5, 0.5, 0.2, 0.0],
                "passion",
            ),
            preset(
                "Ocean Breeze",
                0x0093E9,
                [1.2, 0.35, 0.7, 0.4],
                [0.4, 0.6, 1.2, 0.8, 0.1, 0.2],
                "sirens",
            ),
            preset(
                "Sunset Vibes",
                0xFF8C42,
                [0.9, 0.45, 0.8, 0.6],
                [0.3, 0.7, 1.8, 0.6, 0.15, 0.1],
                "synthwave",
            ),
            preset(
                "Electric Forest",
                0x00F260,
                [1.1, 0.5, 0.9, 0.8],
                [0.2, 0.8, 1.6, 0.7, 0.1, 0.15],
                "electric-forest",
            ),
            preset(
                "Cosmic Wave",
                0x8E2DE2,
                [0.7, 0.6, 1.0, 0.9],
                [0.15, 0.85, 1.7, 0.9, 0.05, 0.25],
                "cosmic-wave",
            ),
        ];
        Self { presets }
    }
}

impl Default for PresetCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
