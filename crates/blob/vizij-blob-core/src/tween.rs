//! Tween registry polled once per tick.
//!
//! Each tween interpolates one `RenderState` field from the value it had when the
//! tween started toward a target, over a duration, with an easing curve. Tweens
//! never call back into the controller; a finished tween hands back its
//! `Completion` (if any) and the controller applies it after every write of the
//! tick has landed.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::interp::{lerp_f32, Easing};
use crate::plan::PlannedTween;
use crate::state::RenderState;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TweenId(pub u32);

/// Animatable field of `RenderState`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum TweenTarget {
    TextProgress,
    /// Horizontal position of the label at this catalog index.
    LabelX(usize),
    SphereRotationY,
    Background,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TweenValue {
    Scalar(f32),
    Color(Rgb),
}

impl TweenValue {
    /// Blend two values. Mismatched kinds keep the left value (fail-soft).
    pub fn lerp(a: TweenValue, b: TweenValue, t: f32) -> TweenValue {
        match (a, b) {
            (TweenValue::Scalar(x), TweenValue::Scalar(y)) => TweenValue::Scalar(lerp_f32(x, y, t)),
            (TweenValue::Color(x), TweenValue::Color(y)) => TweenValue::Color(Rgb::lerp(x, y, t)),
            _ => a,
        }
    }
}

impl TweenTarget {
    /// Current value of the field, or None when it does not exist (label index out of range).
    pub fn read(&self, state: &RenderState) -> Option<TweenValue> {
        match *self {
            TweenTarget::TextProgress => Some(TweenValue::Scalar(state.text_progress)),
            TweenTarget::LabelX(i) => state
                .labels
                .get(i)
                .map(|l| TweenValue::Scalar(l.position[0])),
            TweenTarget::SphereRotationY => Some(TweenValue::Scalar(state.sphere_rotation_y)),
            TweenTarget::Background => Some(TweenValue::Color(state.background)),
        }
    }

    pub fn write(&self, state: &mut RenderState, value: TweenValue) {
        match (*self, value) {
            (TweenTarget::TextProgress, TweenValue::Scalar(v)) => state.text_progress = v,
            (TweenTarget::LabelX(i), TweenValue::Scalar(v)) => {
                if let Some(l) = state.labels.get_mut(i) {
                    l.position[0] = v;
                }
            }
            (TweenTarget::SphereRotationY, TweenValue::Scalar(v)) => state.sphere_rotation_y = v,
            (TweenTarget::Background, TweenValue::Color(c)) => state.background = c,
            _ => {}
        }
    }
}

/// Action requested by a tween when it reaches its target.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Completion {
    /// Commit point of a preset transition.
    CommitTransition { from: usize, to: usize },
}

// Relative slack so a duration split into N equal frames finishes on frame N.
const FINISH_EPSILON: f64 = 1e-6;

#[derive(Clone, Debug)]
pub struct Tween {
    pub id: TweenId,
    pub target: TweenTarget,
    pub from: TweenValue,
    pub to: TweenValue,
    pub duration: f32,
    /// Accumulated in f64 so per-frame deltas sum back to the duration.
    pub elapsed: f64,
    pub easing: Easing,
    pub on_complete: Option<Completion>,
}

impl Tween {
    /// Normalized linear progress in [0,1]. Non-positive or non-finite durations
    /// are already done.
    #[inline]
    pub fn progress(&self) -> f32 {
        if !(self.duration.is_finite() && self.duration > 0.0) {
            return 1.0;
        }
        let u = self.elapsed / f64::from(self.duration);
        if u >= 1.0 - FINISH_EPSILON {
            1.0
        } else {
            u.clamp(0.0, 1.0) as f32
        }
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Interpolated value at the current progress; exactly `to` once finished.
    pub fn value(&self) -> TweenValue {
        if self.is_finished() {
            return self.to;
        }
        TweenValue::lerp(self.from, self.to, self.easing.apply(self.progress()))
    }
}

/// Registry of in-flight tweens.
#[derive(Debug, Default)]
pub struct Animator {
    tweens: Vec<Tween>,
    next_id: u32,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a tween from the target's current value.
    /// A tween already running on the same target is replaced (its completion is dropped).
    /// Returns None when the target cannot be read.
    pub fn start(
        &mut self,
        state: &RenderState,
        planned: &PlannedTween,
        duration: f32,
    ) -> Option<TweenId> {
        let from = planned.target.read(state)?;
        self.tweens.retain(|t| t.target != planned.target);

        let id = TweenId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.tweens.push(Tween {
            id,
            target: planned.target,
            from,
            to: planned.to,
            duration,
            elapsed: 0.0,
            easing: planned.easing,
            on_complete: planned.completion,
        });
        Some(id)
    }

    /// Advance all tweens by `dt`, write their values, drop finished ones and
    /// append their completions (in start order) to `completed`.
    pub fn advance(&mut self, dt: f32, state: &mut RenderState, completed: &mut Vec<Completion>) {
        let dt = f64::from(dt.max(0.0));
        for tween in &mut self.tweens {
            tween.elapsed += dt;
            tween.target.write(state, tween.value());
        }
        self.tweens.retain(|t| {
            if t.is_finished() {
                if let Some(c) = t.on_complete {
                    completed.push(c);
                }
                false
            } else {
                true
            }
        });
    }

    pub fn active_count(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_idle(&self) -> bool {
        self.tweens.is_empty()
    }

    pub fn is_animating(&self, target: TweenTarget) -> bool {
        self.tweens.iter().any(|t| t.target == target)
    }
}
