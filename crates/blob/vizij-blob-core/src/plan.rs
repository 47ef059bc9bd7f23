//! TransitionPlan: everything one accepted transition does, decided up front.
//!
//! All five sub-animations share `duration`. Only the text-reveal tween carries
//! a completion; the others are cosmetic.

use serde::{Deserialize, Serialize};

use crate::catalog::{PresetCatalog, PresetParams};
use crate::config::Config;
use crate::input::Direction;
use crate::interp::Easing;
use crate::state::RenderState;
use crate::tween::{Completion, TweenTarget, TweenValue};

/// One sub-animation of a plan. Its start value is read when it launches.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlannedTween {
    pub target: TweenTarget,
    pub to: TweenValue,
    pub easing: Easing,
    #[serde(default)]
    pub completion: Option<Completion>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionPlan {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
    /// Canonical duration for every tween in `tweens`.
    pub duration: f32,
    /// Where the incoming label is cut to before it slides in.
    pub incoming_start_x: f32,
    /// Order: text reveal (commits), outgoing label, sphere spin, incoming label, background.
    pub tweens: [PlannedTween; 5],
    /// Shape/material snapshot applied at transition start.
    pub params: PresetParams,
}

impl TransitionPlan {
    pub fn build(
        catalog: &PresetCatalog,
        cfg: &Config,
        state: &RenderState,
        from: usize,
        direction: Direction,
    ) -> Self {
        let to = catalog.next(from, direction);
        let next = catalog.get(to);
        let sign = direction.signum();

        let tweens = [
            PlannedTween {
                target: TweenTarget::TextProgress,
                to: TweenValue::Scalar(cfg.reveal_target),
                easing: Easing::Linear,
                completion: Some(Completion::CommitTransition { from, to }),
            },
            PlannedTween {
                target: TweenTarget::LabelX(from),
                to: TweenValue::Scalar(-sign * cfg.outgoing_label_offset),
                easing: Easing::Power2InOut,
                completion: None,
            },
            PlannedTween {
                target: TweenTarget::SphereRotationY,
                to: TweenValue::Scalar(state.sphere_rotation_y - sign * cfg.spin_per_transition),
                easing: Easing::Power2InOut,
                completion: None,
            },
            PlannedTween {
                target: TweenTarget::LabelX(to),
                to: TweenValue::Scalar(0.0),
                easing: Easing::Power2InOut,
                completion: None,
            },
            PlannedTween {
                target: TweenTarget::Background,
                to: TweenValue::Color(next.background),
                easing: Easing::Linear,
                completion: None,
            },
        ];

        Self {
            from,
            to,
            direction,
            duration: cfg.transition_duration,
            incoming_start_x: sign * cfg.incoming_label_offset,
            tweens,
            params: next.params.clone(),
        }
    }

    /// The tween whose completion is the commit point.
    pub fn commit_tween(&self) -> &PlannedTween {
        &self.tweens[0]
    }
}
