//! TransitionController: the scroll-driven preset state machine.
//!
//! Idle --begin(direction)--> Transitioning --commit tween finishes--> Idle
//!
//! `begin` sets the guard, cuts the incoming label in, launches the five tweens
//! of a `TransitionPlan` and snaps the next preset's shape/material params into
//! `RenderState`. `update(dt)` advances every tween, then applies completions;
//! the text-reveal completion is the only place `current_index` changes.

use log::{debug, trace};

use crate::catalog::PresetCatalog;
use crate::config::Config;
use crate::input::Direction;
use crate::interp::Easing;
use crate::outputs::{BlobEvent, Outputs};
use crate::plan::{PlannedTween, TransitionPlan};
use crate::state::RenderState;
use crate::tween::{Animator, Completion, TweenTarget, TweenValue};

#[derive(Debug)]
pub struct TransitionController {
    cfg: Config,
    catalog: PresetCatalog,
    state: RenderState,
    animator: Animator,
    current_index: usize,
    /// Some while Transitioning; None is Idle.
    active: Option<TransitionPlan>,

    // Per-tick buffers
    completions: Vec<Completion>,
    pending_events: Vec<BlobEvent>,
    outputs: Outputs,
}

impl TransitionController {
    /// Create a controller resting on preset 0. With `cfg.intro_fade` the background
    /// starts at `cfg.initial_background` and blends to preset 0's color.
    pub fn new(catalog: PresetCatalog, cfg: Config) -> Self {
        let mut state = RenderState::new(&catalog, &cfg);
        let mut animator = Animator::new();

        if cfg.intro_fade {
            state.background = cfg.initial_background;
            animator.start(
                &state,
                &PlannedTween {
                    target: TweenTarget::Background,
                    to: TweenValue::Color(catalog.get(0).background),
                    easing: Easing::Linear,
                    completion: None,
                },
                cfg.transition_duration,
            );
        }

        Self {
            cfg,
            catalog,
            state,
            animator,
            current_index: 0,
            active: None,
            completions: Vec::new(),
            pending_events: Vec::new(),
            outputs: Outputs::default(),
        }
    }

    pub fn with_builtin_presets(cfg: Config) -> Self {
        Self::new(PresetCatalog::builtin(), cfg)
    }

    /// Request a transition one step in `direction`.
    /// Returns false (and changes nothing) while another transition is in flight.
    pub fn begin(&mut self, direction: Direction) -> bool {
        if self.is_transitioning() {
            trace!("blob: scroll {direction:?} ignored, transition in flight");
            self.pending_events
                .push(BlobEvent::ScrollIgnored { direction });
            return false;
        }

        let plan = TransitionPlan::build(
            &self.catalog,
            &self.cfg,
            &self.state,
            self.current_index,
            direction,
        );
        debug!(
            "blob: transition {} -> {} ({direction:?})",
            plan.from, plan.to
        );

        // Guard first, then launch.
        let plan = &*self.active.insert(plan);

        self.state.show_label(plan.to, plan.incoming_start_x);
        for planned in &plan.tweens {
            self.animator.start(&self.state, planned, plan.duration);
        }
        self.state.apply_params(&plan.params);

        self.pending_events.push(BlobEvent::TransitionStarted {
            from: plan.from,
            to: plan.to,
            direction,
        });
        true
    }

    /// Advance by `dt` seconds: time uniform, every tween, then completions.
    pub fn update(&mut self, dt: f32) -> &Outputs {
        self.outputs.clear();
        self.outputs.events.append(&mut self.pending_events);

        let dt = dt.max(0.0);
        self.state.uniforms.time += dt;

        self.completions.clear();
        self.animator
            .advance(dt, &mut self.state, &mut self.completions);

        let completions = std::mem::take(&mut self.completions);
        for completion in &completions {
            self.apply_completion(*completion);
        }
        self.completions = completions;

        &self.outputs
    }

    fn apply_completion(&mut self, completion: Completion) {
        match completion {
            Completion::CommitTransition { from, to } => {
                if self.active.as_ref().map(|plan| plan.to) != Some(to) {
                    return;
                }
                self.current_index = to;
                self.state.text_progress = 0.0;
                if from != to {
                    self.state.hide_label(from);
                }
                self.active = None;

                let name = self.catalog.get(to).name.clone();
                debug!("blob: committed preset {to} '{name}'");
                self.outputs
                    .push_event(BlobEvent::TransitionCommitted { index: to, name });
            }
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_transitioning(&self) -> bool {
        self.active.is_some()
    }

    /// Plan of the transition in flight, if any.
    pub fn active_plan(&self) -> Option<&TransitionPlan> {
        self.active.as_ref()
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    pub fn catalog(&self) -> &PresetCatalog {
        &self.catalog
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }
}
