use vizij_blob_core::{
    BlobEvent, Config, Direction, InputAdapter, PresetCatalog, Rgb, ScrollEvent,
    TransitionController, TweenTarget,
};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn abc() -> PresetCatalog {
    let json = vizij_test_fixtures::presets::json("abc").expect("abc fixture");
    PresetCatalog::from_json(&json).expect("abc presets parse")
}

fn no_intro() -> Config {
    Config {
        intro_fade: false,
        ..Config::default()
    }
}

/// Tick in quarter seconds until the controller is idle again.
fn run_to_rest(ctrl: &mut TransitionController) {
    for _ in 0..64 {
        if !ctrl.is_transitioning() {
            return;
        }
        ctrl.update(0.25);
    }
    panic!("transition never committed");
}

/// Exactly one visible label, centered; every other label at scale 0.
fn assert_rest_labels(ctrl: &TransitionController) {
    let state = ctrl.state();
    let visible = state.visible_labels();
    assert_eq!(visible, vec![ctrl.current_index()], "visible labels at rest");
    let active = &state.labels[ctrl.current_index()];
    assert_eq!(active.scale, 1.0);
    assert_eq!(active.position[0], 0.0);
    for (i, label) in state.labels.iter().enumerate() {
        if i != ctrl.current_index() {
            assert_eq!(label.scale, 0.0, "label {i} should be hidden");
        }
    }
}

#[test]
fn sequential_forward_scrolls_land_on_n_mod_count() {
    for catalog in [abc(), PresetCatalog::builtin()] {
        let count = catalog.count();
        let mut ctrl = TransitionController::new(catalog, no_intro());
        for n in 1..=(2 * count + 3) {
            assert!(ctrl.begin(Direction::Forward));
            run_to_rest(&mut ctrl);
            assert_eq!(ctrl.current_index(), n % count);
        }
    }
}

#[test]
fn index_stays_in_range_for_mixed_sequences() {
    let mut ctrl = TransitionController::new(abc(), no_intro());
    let mut expected: i64 = 0;
    // Small LCG for a reproducible direction stream.
    let mut seed: u32 = 0x1234_5678;
    for _ in 0..200 {
        seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        let dir = if seed >> 31 == 0 {
            Direction::Forward
        } else {
            Direction::Backward
        };
        assert!(ctrl.begin(dir));
        run_to_rest(&mut ctrl);
        expected = (expected + i64::from(dir.sign())).rem_euclid(3);
        assert!(ctrl.current_index() < 3);
        assert_eq!(ctrl.current_index() as i64, expected);
        assert_rest_labels(&ctrl);
    }
}

#[test]
fn scroll_during_transition_is_dropped() {
    let mut ctrl = TransitionController::new(abc(), no_intro());
    assert!(ctrl.begin(Direction::Forward));
    assert_eq!(ctrl.animator().active_count(), 5);
    let plan = ctrl.active_plan().cloned().expect("plan in flight");
    assert_eq!((plan.from, plan.to), (0, 1));

    ctrl.update(0.25);
    assert!(!ctrl.begin(Direction::Backward));
    assert!(!ctrl.begin(Direction::Forward));
    assert_eq!(ctrl.animator().active_count(), 5);
    assert_eq!(ctrl.active_plan(), Some(&plan));
    assert_eq!(ctrl.current_index(), 0);

    let out = ctrl.update(0.25);
    let ignored = out
        .events
        .iter()
        .filter(|e| matches!(e, BlobEvent::ScrollIgnored { .. }))
        .count();
    assert_eq!(ignored, 2);

    run_to_rest(&mut ctrl);
    assert_eq!(ctrl.current_index(), 1);
    assert!(ctrl.animator().is_idle());
}

#[test]
fn rest_state_has_one_centered_label() {
    let mut ctrl = TransitionController::new(PresetCatalog::builtin(), no_intro());
    assert_rest_labels(&ctrl);
    for dir in [
        Direction::Forward,
        Direction::Forward,
        Direction::Backward,
        Direction::Backward,
        Direction::Backward,
    ] {
        ctrl.begin(dir);
        run_to_rest(&mut ctrl);
        assert_rest_labels(&ctrl);
    }
}

#[test]
fn partial_preset_leaves_missing_fields_untouched() {
    let json = vizij_test_fixtures::presets::json("partial").expect("partial fixture");
    let catalog = PresetCatalog::from_json(&json).expect("partial presets parse");
    let mut ctrl = TransitionController::new(catalog, no_intro());
    let before = ctrl.state().clone();
    assert_eq!(before.material.transmission, 0.9);

    ctrl.begin(Direction::Forward);
    // Shape/material swap happens at transition start, before any tick.
    let snapped = ctrl.state();
    assert_eq!(snapped.material.transmission, 0.9);
    assert_eq!(snapped.material.roughness, 0.7);
    assert_eq!(snapped.material.metalness, 0.4);
    assert_eq!(snapped.material.env_map_intensity, 1.3);
    assert_eq!(snapped.material.clearcoat, 0.2);
    assert_eq!(snapped.uniforms.position_frequency, 0.5);
    assert_eq!(snapped.uniforms.position_strength, 0.6);
    assert_eq!(
        snapped.uniforms.small_wave_position_frequency,
        before.uniforms.small_wave_position_frequency
    );
    assert_eq!(snapped.material.map_id.as_deref(), Some("glass"));

    run_to_rest(&mut ctrl);
    assert_eq!(ctrl.state().material.transmission, 0.9);
    assert_eq!(ctrl.state().material.roughness, 0.7);
}

#[test]
fn end_to_end_abc_forward_then_back_twice() {
    let catalog = abc();
    let b = catalog.get(1).clone();
    let mut ctrl = TransitionController::new(catalog, Config::default());
    ctrl.update(1.0); // intro fade
    assert_eq!(ctrl.state().background, Rgb::from_u32(0xFF0000));

    assert!(InputAdapter.on_scroll(&mut ctrl, &ScrollEvent::vertical(100.0)));
    assert_eq!(ctrl.state().uniforms.position_frequency, 2.0);
    assert_eq!(ctrl.state().material.metalness, 1.0);
    assert_eq!(ctrl.state().material.transmission, 0.5);
    assert_eq!(ctrl.current_index(), 0);

    run_to_rest(&mut ctrl);
    let state = ctrl.state();
    assert_eq!(ctrl.current_index(), 1);
    assert_eq!(state.labels[1].position[0], 0.0);
    assert_eq!(state.labels[1].scale, 1.0);
    assert_eq!(state.labels[0].scale, 0.0);
    assert_eq!(state.background, b.background);

    for _ in 0..2 {
        assert!(InputAdapter.on_scroll(&mut ctrl, &ScrollEvent::vertical(-100.0)));
        run_to_rest(&mut ctrl);
    }
    assert_eq!(ctrl.current_index(), 2);
    assert_eq!(ctrl.state().background, Rgb::from_u32(0x0000FF));
}

#[test]
fn backward_from_zero_wraps_to_last() {
    let mut ctrl = TransitionController::new(abc(), no_intro());
    ctrl.begin(Direction::Backward);
    assert_eq!(ctrl.active_plan().map(|p| p.to), Some(2));
    assert_eq!(ctrl.state().labels[2].position[0], -3.5);
    assert_eq!(ctrl.state().labels[2].scale, 1.0);
    run_to_rest(&mut ctrl);
    assert_eq!(ctrl.current_index(), 2);
}

#[test]
fn commit_happens_only_when_text_reveal_finishes() {
    let mut ctrl = TransitionController::new(abc(), no_intro());
    ctrl.begin(Direction::Forward);

    ctrl.update(0.5);
    let state = ctrl.state();
    assert!(ctrl.is_transitioning());
    assert_eq!(ctrl.current_index(), 0);
    approx(state.text_progress, 0.25, 1e-6);
    // power2 in-out is exactly halfway at t = 0.5
    approx(state.labels[1].position[0], 1.75, 1e-5);
    approx(state.labels[0].position[0], -1.5, 1e-5);
    approx(state.sphere_rotation_y, -2.0 * std::f32::consts::PI, 1e-4);

    ctrl.update(0.25);
    assert!(ctrl.is_transitioning());
    approx(ctrl.state().text_progress, 0.375, 1e-6);

    let out = ctrl.update(0.25).clone();
    assert!(!ctrl.is_transitioning());
    assert_eq!(ctrl.current_index(), 1);
    assert_eq!(ctrl.state().text_progress, 0.0);
    assert_eq!(ctrl.state().labels[0].position[0], -3.0);
    assert!(out.events.contains(&BlobEvent::TransitionCommitted {
        index: 1,
        name: "B".into()
    }));
}

#[test]
fn sphere_rotation_accumulates_across_transitions() {
    let mut ctrl = TransitionController::new(abc(), no_intro());
    let spin = 4.0 * std::f32::consts::PI;
    ctrl.begin(Direction::Forward);
    run_to_rest(&mut ctrl);
    approx(ctrl.state().sphere_rotation_y, -spin, 1e-4);
    ctrl.begin(Direction::Forward);
    run_to_rest(&mut ctrl);
    approx(ctrl.state().sphere_rotation_y, -2.0 * spin, 1e-4);
    ctrl.begin(Direction::Backward);
    run_to_rest(&mut ctrl);
    approx(ctrl.state().sphere_rotation_y, -spin, 1e-4);
}

#[test]
fn intro_fade_blends_from_neutral_background() {
    let catalog = abc();
    let mut ctrl = TransitionController::new(catalog, Config::default());
    assert_eq!(ctrl.state().background, Rgb::from_u32(0x333333));
    assert!(ctrl.animator().is_animating(TweenTarget::Background));
    assert!(!ctrl.is_transitioning());

    ctrl.update(0.5);
    let mid = ctrl.state().background;
    approx(mid.r, (0.2 + 1.0) / 2.0, 1e-5);
    approx(mid.g, 0.1, 1e-5);

    // A scroll mid-fade takes over the background tween instead of stacking.
    assert!(ctrl.begin(Direction::Forward));
    assert_eq!(ctrl.animator().active_count(), 5);
    run_to_rest(&mut ctrl);
    assert_eq!(ctrl.state().background, Rgb::from_u32(0x00FF00));
}

#[test]
fn events_report_start_and_commit_in_order() {
    let mut ctrl = TransitionController::new(abc(), no_intro());
    ctrl.begin(Direction::Backward);
    let first = ctrl.update(0.5).clone();
    assert_eq!(
        first.events,
        vec![BlobEvent::TransitionStarted {
            from: 0,
            to: 2,
            direction: Direction::Backward
        }]
    );
    let second = ctrl.update(0.5).clone();
    assert_eq!(
        second.events,
        vec![BlobEvent::TransitionCommitted {
            index: 2,
            name: "C".into()
        }]
    );
    assert!(ctrl.update(0.5).is_empty());
}

#[test]
fn trackpad_burst_starts_a_single_transition() {
    let events: Vec<ScrollEvent> =
        vizij_test_fixtures::scrolls::load("trackpad-burst").expect("scroll fixture");
    let mut ctrl = TransitionController::with_builtin_presets(no_intro());
    let adapter = InputAdapter::new();
    let accepted = events
        .iter()
        .filter(|ev| adapter.on_scroll(&mut ctrl, ev))
        .count();
    assert_eq!(accepted, 1);
    assert_eq!(ctrl.animator().active_count(), 5);
    run_to_rest(&mut ctrl);
    assert_eq!(ctrl.current_index(), 1);
}

#[test]
fn zero_delta_scroll_moves_forward() {
    let mut ctrl = TransitionController::new(abc(), no_intro());
    assert!(InputAdapter.on_scroll(&mut ctrl, &ScrollEvent::default()));
    run_to_rest(&mut ctrl);
    assert_eq!(ctrl.current_index(), 1);
}

#[test]
fn single_preset_catalog_transitions_onto_itself() {
    let one = PresetCatalog::new(vec![abc().get(0).clone()]).unwrap();
    let mut ctrl = TransitionController::new(one, no_intro());
    assert!(ctrl.begin(Direction::Forward));
    run_to_rest(&mut ctrl);
    assert_eq!(ctrl.current_index(), 0);
    assert_rest_labels(&ctrl);
}

#[test]
fn time_uniform_tracks_elapsed_ticks() {
    let mut ctrl = TransitionController::with_builtin_presets(Config::default());
    ctrl.update(0.5);
    ctrl.update(0.25);
    ctrl.update(-1.0);
    approx(ctrl.state().uniforms.time, 0.75, 1e-6);
}

#[test]
fn non_finite_transition_duration_still_commits() {
    for duration in [f32::NAN, f32::INFINITY] {
        let cfg = Config {
            transition_duration: duration,
            ..Config::default()
        };
        let mut ctrl = TransitionController::new(abc(), cfg);
        assert!(ctrl.begin(Direction::Forward));
        ctrl.update(0.1);
        assert!(!ctrl.is_transitioning(), "duration {duration}");
        assert_eq!(ctrl.current_index(), 1);
        assert!(ctrl.animator().is_idle());
        assert_rest_labels(&ctrl);

        assert!(ctrl.begin(Direction::Backward));
        ctrl.update(0.1);
        assert_eq!(ctrl.current_index(), 0);
    }
}

#[test]
fn commit_lands_on_the_frame_the_duration_implies() {
    let mut ctrl = TransitionController::new(abc(), no_intro());
    assert!(ctrl.begin(Direction::Forward));
    for _ in 0..59 {
        ctrl.update(1.0 / 60.0);
    }
    assert!(ctrl.is_transitioning());
    let out = ctrl.update(1.0 / 60.0);
    assert_eq!(
        out.events,
        vec![BlobEvent::TransitionCommitted {
            index: 1,
            name: "B".into()
        }]
    );
    assert!(!ctrl.is_transitioning());
}
