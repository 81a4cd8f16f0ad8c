// Drag, wheel, keyboard and auto-play trackers in isolation, then wired
// through the `Slider` handle.

use slider_core::*;

fn tracker() -> DragTracker {
    DragTracker::new(GestureTuning::default(), 1.0)
}

fn make_slider(slide_count: usize, infinite: bool) -> Slider {
    let mut config = SliderConfig::new(slide_count, 100.0);
    config.infinite = infinite;
    Slider::new(config).unwrap()
}

/// Drag from `from` to `to` in `steps` moves spaced `interval_ms` apart.
fn drag(tracker: &mut DragTracker, from: f64, to: f64, steps: usize, interval_ms: f64) -> f64 {
    tracker.begin(from, 0.0, 0.0);
    let mut total = 0.0;
    for i in 1..=steps {
        let x = from + (to - from) * i as f64 / steps as f64;
        total += tracker.update(x, i as f64 * interval_ms).unwrap();
    }
    total
}

#[test]
fn drag_moves_are_damped_and_incremental() {
    let mut t = tracker();
    let total = drag(&mut t, 400.0, 300.0, 4, 16.0);
    assert!((total - (-100.0 * 0.24)).abs() < 1e-9, "total {total}");
}

#[test]
fn fast_flick_produces_momentum() {
    let mut t = tracker();
    drag(&mut t, 300.0, 200.0, 5, 10.0);
    let (outcome, start) = t.end(200.0, 50.0).unwrap();
    // 100 px in 50 ms is 2 px/ms to the left.
    assert_eq!(outcome, DragOutcome::Momentum { steps: 2 });
    assert_eq!(start, 0.0);
    assert!(!t.is_active());
}

#[test]
fn momentum_is_capped() {
    let mut t = tracker();
    drag(&mut t, 100.0, 600.0, 5, 10.0);
    let (outcome, _) = t.end(600.0, 50.0).unwrap();
    assert_eq!(outcome, DragOutcome::Momentum { steps: -3 });
}

#[test]
fn slow_long_drag_steps_one_slide() {
    let mut t = tracker();
    drag(&mut t, 300.0, 240.0, 6, 100.0);
    // Held still for a while before release: no velocity left.
    let (outcome, _) = t.end(240.0, 700.0).unwrap();
    assert_eq!(outcome, DragOutcome::Step { steps: 1 });

    drag(&mut t, 240.0, 320.0, 8, 100.0);
    let (outcome, _) = t.end(320.0, 900.0).unwrap();
    assert_eq!(outcome, DragOutcome::Step { steps: -1 });
}

#[test]
fn short_drag_snaps_back() {
    let mut t = tracker();
    drag(&mut t, 300.0, 270.0, 3, 100.0);
    let (outcome, _) = t.end(270.0, 400.0).unwrap();
    assert_eq!(outcome, DragOutcome::SnapBack);
    assert_eq!(outcome.steps(), 0);
}

#[test]
fn jittery_tap_is_not_a_flick() {
    let mut t = tracker();
    t.begin(100.0, 0.0, 0.0);
    t.update(96.0, 2.0);
    let (outcome, _) = t.end(96.0, 4.0).unwrap();
    assert_eq!(outcome, DragOutcome::SnapBack);
}

#[test]
fn drag_events_without_a_session_are_ignored() {
    let mut t = tracker();
    assert!(t.update(10.0, 0.0).is_none());
    assert!(t.end(10.0, 0.0).is_none());
    assert!(t.cancel().is_none());
}

#[test]
fn shift_origin_follows_wraparound() {
    let mut t = tracker();
    t.begin(0.0, 0.0, -300.0);
    t.shift_origin(500.0);
    assert_eq!(t.start_target(), Some(200.0));
    assert_eq!(t.cancel(), Some(200.0));
}

#[test]
fn five_horizontal_wheel_events_fire_one_step() {
    let mut wheel = WheelAccumulator::new(GestureTuning::default(), 1.0);
    let mut window = 0.0;
    for i in 0..5 {
        window = wheel.push(20.0, 3.0, i as f64 * 10.0).unwrap();
        assert_eq!(wheel.poll(i as f64 * 10.0), None);
    }
    assert_eq!(window, 150.0);
    assert_eq!(wheel.axis(), Some(WheelAxis::Horizontal));
    assert_eq!(wheel.poll(189.0), None, "window restarts on every event");
    assert_eq!(wheel.poll(190.0), Some(1));
    assert_eq!(wheel.poll(400.0), None);
    assert!(!wheel.is_pending());
}

#[test]
fn vertical_wheel_needs_the_larger_threshold() {
    let mut wheel = WheelAccumulator::new(GestureTuning::default(), 1.0);
    for i in 0..4 {
        assert_eq!(wheel.push(0.0, -20.0, i as f64 * 10.0), Some(200.0));
    }
    assert_eq!(wheel.poll(230.0), None, "80 is below the vertical threshold");

    for i in 0..6 {
        wheel.push(0.0, -20.0, 1000.0 + i as f64 * 10.0);
    }
    assert_eq!(wheel.poll(1250.0), Some(-1));
}

#[test]
fn switching_wheel_axis_restarts_accumulation() {
    let mut wheel = WheelAccumulator::new(GestureTuning::default(), 1.0);
    wheel.push(0.0, 90.0, 0.0);
    wheel.push(30.0, 0.0, 10.0);
    assert_eq!(wheel.accumulated(), 30.0);
    assert_eq!(wheel.poll(160.0), None);
}

#[test]
fn scroll_sensitivity_scales_wheel_deltas() {
    let mut wheel = WheelAccumulator::new(GestureTuning::default(), 3.0);
    wheel.push(20.0, 0.0, 0.0);
    assert_eq!(wheel.accumulated(), 60.0);
    assert_eq!(wheel.poll(150.0), Some(1));
    assert_eq!(wheel.push(0.0, 0.0, 200.0), None);
}

#[test]
fn key_mapping() {
    assert_eq!(key_command("ArrowRight"), Some(KeyCommand::Next));
    assert_eq!(key_command("ArrowLeft"), Some(KeyCommand::Prev));
    assert_eq!(key_command(" "), Some(KeyCommand::Next));
    assert_eq!(key_command("Home"), Some(KeyCommand::First));
    assert_eq!(key_command("End"), Some(KeyCommand::Last));
    assert_eq!(key_command("1"), Some(KeyCommand::Index(0)));
    assert_eq!(key_command("9"), Some(KeyCommand::Index(8)));
    assert_eq!(key_command("0"), None);
    assert_eq!(key_command("10"), None);
    assert_eq!(key_command("a"), None);
}

#[test]
fn auto_play_schedule() {
    let mut auto = AutoPlay::new(AutoPlayConfig {
        enabled: true,
        ..AutoPlayConfig::default()
    });
    assert!(!auto.poll(0.0), "first poll only schedules");
    assert!(!auto.poll(4999.0));
    assert!(auto.poll(5000.0));
    assert!(!auto.poll(5001.0));

    auto.set_dragging(true, 6000.0);
    assert!(!auto.poll(20_000.0));
    auto.set_dragging(false, 20_000.0);
    assert!(!auto.poll(26_199.0));
    assert!(auto.poll(26_200.0));

    auto.set_visible(false, 30_000.0);
    assert!(!auto.poll(40_000.0));
    auto.set_visible(true, 40_000.0);
    assert!(auto.poll(45_000.0));
}

#[test]
fn disabled_auto_play_never_fires() {
    let mut auto = AutoPlay::new(AutoPlayConfig::default());
    for t in 0..20 {
        assert!(!auto.poll(t as f64 * 1000.0));
    }
}

#[test]
fn slider_drag_left_advances_one_slide() {
    let mut slider = make_slider(5, false);
    slider.frame(0.0);
    slider.pointer_down(500.0, 0.0);
    for i in 1..=6 {
        assert!(slider.pointer_move(500.0 - 10.0 * i as f64, i as f64 * 100.0));
    }
    assert!(slider.is_dragging());
    assert!(slider.motion().target() < 0.0, "dragging pulls the target");
    let outcome = slider.pointer_up(440.0, 800.0);
    assert_eq!(outcome, Some(DragOutcome::Step { steps: 1 }));
    assert_eq!(slider.motion().target(), -100.0);
}

#[test]
fn slider_short_drag_returns_to_start() {
    let mut slider = make_slider(5, false);
    slider.go_to(2, true);
    slider.pointer_down(500.0, 0.0);
    slider.pointer_move(520.0, 200.0);
    assert_eq!(slider.pointer_up(520.0, 400.0), Some(DragOutcome::SnapBack));
    assert_eq!(slider.motion().target(), -200.0);

    slider.pointer_down(500.0, 1000.0);
    slider.pointer_move(300.0, 1100.0);
    slider.pointer_cancel(1200.0);
    assert_eq!(slider.motion().target(), -200.0);
    assert!(!slider.is_dragging());
}

#[test]
fn slider_flick_at_the_end_stays_put() {
    let mut slider = make_slider(3, false);
    slider.go_to(2, true);
    slider.pointer_down(600.0, 0.0);
    slider.pointer_move(500.0, 20.0);
    assert_eq!(
        slider.pointer_up(400.0, 40.0),
        Some(DragOutcome::Momentum { steps: 3 })
    );
    assert_eq!(slider.motion().target(), -200.0);
}

#[test]
fn slider_wheel_burst_steps_once() {
    let mut slider = make_slider(5, false);
    for i in 0..5 {
        assert_eq!(slider.wheel(20.0, 0.0, i as f64 * 10.0), Some(150.0));
    }
    assert!(slider.is_wheel_pending());
    assert_eq!(slider.wheel_deadline(), Some(190.0));
    assert_eq!(slider.poll_wheel(100.0), None);
    assert_eq!(slider.poll_wheel(190.0), Some(1));
    assert_eq!(slider.wheel_deadline(), None);
    assert_eq!(slider.poll_wheel(500.0), None);
    assert_eq!(slider.motion().target(), -100.0);
}

#[test]
fn slider_keys() {
    let mut slider = make_slider(5, false);
    assert_eq!(slider.key("End", 0.0), Some(KeyCommand::Last));
    assert_eq!(slider.motion().current(), -400.0);
    assert_eq!(slider.key("Home", 0.0), Some(KeyCommand::First));
    assert_eq!(slider.motion().current(), 0.0);
    assert_eq!(slider.key("3", 0.0), Some(KeyCommand::Index(2)));
    assert_eq!(slider.motion().target(), -200.0);
    assert_eq!(slider.key("7", 0.0), None, "out of range digits are ignored");
    assert_eq!(slider.motion().target(), -200.0);
    assert_eq!(slider.key("ArrowLeft", 0.0), Some(KeyCommand::Prev));
    assert_eq!(slider.motion().target(), -100.0);
    assert_eq!(slider.key("Escape", 0.0), None);
}

#[test]
fn hidden_slider_ignores_keys_and_stops_ticking() {
    let mut slider = make_slider(5, false);
    slider.frame(0.0);
    slider.set_visible(false, 10.0);
    assert_eq!(slider.key("ArrowRight", 20.0), None);
    assert_eq!(slider.motion().target(), 0.0);
    assert!(slider.frame(32.0).is_none());
    slider.set_visible(true, 40.0);
    assert!(slider.frame(50.0).is_none());
    assert!(slider.frame(66.0).is_some());
}

#[test]
fn slider_auto_play_rewinds_a_finite_slider() {
    let mut config = SliderConfig::new(2, 100.0);
    config.auto_play.enabled = true;
    let mut slider = Slider::new(config).unwrap();
    assert!(!slider.poll_autoplay(0.0));
    assert!(slider.poll_autoplay(5000.0));
    assert_eq!(slider.motion().target(), -100.0);
    assert!(slider.poll_autoplay(10_000.0));
    assert_eq!(slider.motion().target(), 0.0);
}

#[test]
fn slider_auto_play_waits_for_a_drag() {
    let mut config = SliderConfig::new(4, 100.0);
    config.auto_play.enabled = true;
    let mut slider = Slider::new(config).unwrap();
    slider.poll_autoplay(0.0);
    slider.pointer_down(100.0, 1000.0);
    assert!(!slider.poll_autoplay(9000.0));
    slider.pointer_up(100.0, 9000.0);
    assert!(!slider.poll_autoplay(15_000.0));
    assert!(slider.poll_autoplay(15_200.0));
}

#[test]
fn destroyed_slider_ignores_input() {
    let mut slider = make_slider(5, false);
    slider.destroy();
    slider.pointer_down(100.0, 0.0);
    assert!(!slider.pointer_move(0.0, 10.0));
    assert_eq!(slider.wheel(50.0, 0.0, 0.0), None);
    assert_eq!(slider.key("End", 0.0), None);
    assert!(slider.frame(16.0).is_none());
    slider.destroy();
}
