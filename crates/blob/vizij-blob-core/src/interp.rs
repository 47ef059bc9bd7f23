//! Interpolation helpers:
//! - lerp_f32 (scalar blend)
//! - Easing curves used by transition tweens (linear and power2 family)

use serde::{Deserialize, Serialize};

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Timing curve applied to normalized tween progress.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    #[default]
    Linear,
    Power2In,
    Power2Out,
    Power2InOut,
}

impl Easing {
    /// Map progress `t` in [0,1] to eased progress. Input is clamped; endpoints are exact.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Power2In => t * t,
            Easing::Power2Out => {
                let u = 1.0 - t;
                1.0 - u * u
            }
            Easing::Power2InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = 2.0 * (1.0 - t);
                    1.0 - u * u * 0.5
                }
            }
        }
    }
}
