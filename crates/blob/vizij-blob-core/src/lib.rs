//! Vizij Blob Core (engine-agnostic)
//!
//! Scroll-driven preset transitions for a single deformable sphere. The crate owns
//! the preset catalog, the per-frame render state, a small tween registry polled
//! once per tick, and the transition controller that ties them together. Host
//! adapters (Bevy/WASM) feed scroll input in, call `update(dt)` every frame and
//! read `RenderState` back out.

pub mod catalog;
pub mod color;
pub mod config;
pub mod controller;
pub mod error;
pub mod input;
pub mod interp;
pub mod outputs;
pub mod plan;
pub mod state;
pub mod tween;

// Re-exports for consumers (adapters)
pub use catalog::{Preset, PresetCatalog, PresetParams};
pub use color::Rgb;
pub use config::Config;
pub use controller::TransitionController;
pub use error::BlobError;
pub use input::{Direction, InputAdapter, ScrollEvent};
pub use interp::Easing;
pub use outputs::{BlobEvent, Outputs};
pub use plan::{PlannedTween, TransitionPlan};
pub use state::{BlobUniforms, LabelState, MaterialState, RenderState};
pub use tween::{Animator, Completion, Tween, TweenId, TweenTarget, TweenValue};
