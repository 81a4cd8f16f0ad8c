// Motion core behavior driven with simulated 16 ms frames.

use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use slider_core::*;

const FRAME_MS: f64 = 16.0;

fn make_core(slide_count: usize, infinite: bool, continuous: bool) -> MotionCore {
    let mut config = SliderConfig::new(slide_count, 100.0);
    config.infinite = infinite;
    config.continuous_scroll = continuous;
    MotionCore::new(config).expect("valid config")
}

/// Ticks until settled; returns the frame count.
fn run_until_settled(core: &mut MotionCore, clock: &mut f64, max_frames: usize) -> usize {
    for frame in 0..max_frames {
        *clock += FRAME_MS;
        core.tick(*clock);
        if core.is_settled() {
            return frame;
        }
    }
    panic!(
        "core did not settle in {max_frames} frames: current={} target={} speed={}",
        core.current(),
        core.target(),
        core.speed()
    );
}

fn record_slide_changes(core: &mut MotionCore) -> Rc<RefCell<Vec<usize>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    core.subscribe(move |event| {
        if let SliderEvent::SlideChanged { index } = event {
            sink.borrow_mut().push(*index);
        }
        Ok(())
    });
    seen
}

#[test]
fn first_tick_only_primes_the_clock() {
    let mut core = make_core(5, false, false);
    assert!(core.tick(1000.0).is_none());
    assert!(core.tick(1000.0).is_none(), "zero delta must be ignored");
    assert!(core.tick(990.0).is_none(), "negative delta must be ignored");
    assert!(core.tick(1006.0).is_some());
}

#[test]
fn converges_and_snaps_exactly_with_proportional_snap() {
    let mut core = make_core(5, false, false);
    let mut clock = 0.0;
    core.tick(clock);
    core.go_to_index(3, false);
    let frames = run_until_settled(&mut core, &mut clock, 600);
    assert!(frames < 300, "took {frames} frames");
    assert_eq!(core.current(), -300.0);
    assert_eq!(core.speed(), 0.0);
}

#[test]
fn converges_with_fixed_threshold_snap() {
    for luxury in [true, false] {
        let mut config = SliderConfig::new(5, 100.0);
        config.snap_strength = 0.0;
        config.motion.luxury_easing = luxury;
        let mut core = MotionCore::new(config).unwrap();
        let mut clock = 0.0;
        core.tick(clock);
        core.set_target(-250.0);
        run_until_settled(&mut core, &mut clock, 600);
        assert_eq!(core.current(), -250.0, "luxury={luxury}");
        assert_eq!(core.speed(), 0.0, "luxury={luxury}");
    }
}

#[test]
fn approach_never_overshoots() {
    let mut core = make_core(5, false, false);
    let mut clock = 0.0;
    core.tick(clock);
    core.set_target(-400.0);
    let mut prev = core.current();
    for _ in 0..600 {
        clock += FRAME_MS;
        core.tick(clock);
        assert!(core.current() <= prev, "moved backwards");
        assert!(core.current() >= -400.0, "overshot to {}", core.current());
        prev = core.current();
    }
}

#[test]
fn long_frames_are_capped_to_the_mode_budget() {
    let mut a = make_core(5, false, false);
    let mut b = make_core(5, false, false);
    for core in [&mut a, &mut b] {
        core.tick(0.0);
        core.set_target(-100.0);
    }
    // A 500 ms hitch integrates like a single 1/60 s frame.
    a.tick(500.0);
    b.tick(1000.0 / 60.0);
    assert!((a.current() - b.current()).abs() < 1e-9);
}

#[test]
fn go_to_index_immediate_is_idempotent() {
    let mut core = make_core(5, false, false);
    core.go_to_index(2, true);
    let snapshot = (core.current(), core.target(), core.speed());
    core.go_to_index(2, true);
    assert_eq!((core.current(), core.target(), core.speed()), snapshot);
    assert_eq!(snapshot, (-200.0, -200.0, 0.0));
}

#[test]
fn five_slide_scenario_clamps_at_the_last_slide() {
    let mut core = make_core(5, false, false);
    core.go_to_index(3, true);
    assert_eq!(core.current_index(), 3);
    assert!((core.progress() - 0.6).abs() < 1e-9);

    core.go_to_index(4, true);
    assert!(!core.go_to_next(), "next past the last slide must be refused");
    assert_eq!(core.target_index(), 4);
    assert_eq!(core.target(), -400.0);
}

#[test]
fn go_to_index_clamps_out_of_range_requests() {
    let mut core = make_core(5, false, false);
    core.go_to_index(99, true);
    assert_eq!(core.current_index(), 4);
}

#[test]
fn infinite_slider_wraps_indices_without_continuous_scroll() {
    let mut core = make_core(5, true, false);
    assert!(core.go_to_prev());
    assert_eq!(core.target_index(), 4);
    assert_eq!(core.target(), -400.0);
    core.go_to_index(4, true);
    assert!(core.go_to_next());
    assert_eq!(core.target_index(), 0);
}

#[test]
fn progress_is_monotonic_while_advancing() {
    let mut core = make_core(6, false, false);
    let mut clock = 0.0;
    core.tick(clock);
    let mut prev = core.progress();
    for _ in 0..5 {
        assert!(core.go_to_next());
        for _ in 0..120 {
            clock += FRAME_MS;
            core.tick(clock);
            let p = core.progress();
            assert!(p >= prev, "progress went back from {prev} to {p}");
            prev = p;
        }
    }
    assert!(core.progress() <= 1.0);
}

#[test]
fn add_offset_never_escapes_target_bounds() {
    let mut core = make_core(5, false, false);
    let bound = 2.0 * core.total_width();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..2000 {
        core.add_offset(rng.gen_range(-3000.0..3000.0));
        assert!(core.target().abs() <= bound, "target {} escaped", core.target());
    }
    core.add_offset(f64::INFINITY);
    core.add_offset(f64::NAN);
    assert!(core.target().is_finite());
}

#[test]
fn continuous_wrap_shifts_by_total_width_and_damps_speed() {
    // Same motion with and without wraparound; the only difference at the
    // wrap frame must be the shift and the speed damping.
    let mut wrapping = make_core(5, true, true);
    let mut reference = make_core(5, true, false);
    for core in [&mut wrapping, &mut reference] {
        core.tick(0.0);
        core.set_target(-320.0);
    }
    let mut clock = 0.0;
    for _ in 0..600 {
        clock += FRAME_MS;
        wrapping.tick(clock);
        reference.tick(clock);
        let shift = wrapping.take_wrap_shift();
        if shift != 0.0 {
            assert_eq!(shift, 500.0);
            assert!((wrapping.current() - (reference.current() + 500.0)).abs() < 1e-9);
            assert!((wrapping.target() - (reference.target() + 500.0)).abs() < 1e-9);
            assert!((wrapping.speed() - reference.speed() * 0.95).abs() < 1e-9);
            return;
        }
        assert_eq!(wrapping.current(), reference.current());
    }
    panic!("never wrapped");
}

#[test]
fn continuous_wrap_keeps_position_inside_buffer() {
    let mut core = make_core(4, true, true);
    let mut clock = 0.0;
    core.tick(clock);
    for _ in 0..30 {
        core.go_to_next();
        for _ in 0..20 {
            clock += FRAME_MS;
            core.tick(clock);
            assert!(core.current().abs() <= 200.0 + 100.0);
        }
    }
    run_until_settled(&mut core, &mut clock, 600);
    assert_eq!(core.current() % 100.0, 0.0);
}

#[test]
fn animated_jump_reports_only_the_destination() {
    let mut core = make_core(5, false, false);
    let seen = record_slide_changes(&mut core);
    let mut clock = 0.0;
    core.tick(clock);
    core.go_to_index(3, false);
    run_until_settled(&mut core, &mut clock, 600);
    assert_eq!(*seen.borrow(), vec![3]);
}

#[test]
fn dragging_across_a_boundary_reports_the_crossing() {
    let mut core = make_core(5, false, false);
    let seen = record_slide_changes(&mut core);
    let mut clock = 0.0;
    core.tick(clock);
    core.add_offset(-120.0);
    run_until_settled(&mut core, &mut clock, 600);
    assert_eq!(*seen.borrow(), vec![1]);
}

#[test]
fn failing_listener_does_not_stop_ticks() {
    let mut core = make_core(5, false, false);
    core.subscribe(|_| Err(anyhow::anyhow!("listener exploded")));
    let frames = Rc::new(RefCell::new(0));
    let counter = frames.clone();
    core.subscribe(move |event| {
        if matches!(event, SliderEvent::Frame(_)) {
            *counter.borrow_mut() += 1;
        }
        Ok(())
    });
    core.go_to_index(1, false);
    for i in 0..=10 {
        core.tick(i as f64 * FRAME_MS);
    }
    assert_eq!(*frames.borrow(), 10);
    assert!(core.current() < 0.0);
}

#[test]
fn unsubscribe_stops_delivery() {
    let mut core = make_core(5, false, false);
    let seen = Rc::new(RefCell::new(0));
    let counter = seen.clone();
    let id = core.subscribe(move |_| {
        *counter.borrow_mut() += 1;
        Ok(())
    });
    core.go_to_index(1, true);
    assert_eq!(*seen.borrow(), 1);
    assert!(core.unsubscribe(id));
    assert!(!core.unsubscribe(id));
    core.go_to_index(2, true);
    assert_eq!(*seen.borrow(), 1);
}

#[test]
fn performance_mode_downgrades_and_recovers() {
    let mut core = make_core(5, false, false);
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = changes.clone();
    core.subscribe(move |event| {
        if let SliderEvent::PerformanceModeChanged { from, to } = event {
            sink.borrow_mut().push((*from, *to));
        }
        Ok(())
    });

    // Two seconds at 25 fps, then two seconds at 62.5 fps.
    let mut clock = 0.0;
    core.tick(clock);
    for _ in 0..50 {
        clock += 40.0;
        core.tick(clock);
    }
    assert_eq!(core.performance_mode(), PerformanceMode::PowerSave);
    for _ in 0..125 {
        clock += FRAME_MS;
        core.tick(clock);
    }
    assert_eq!(
        *changes.borrow(),
        vec![
            (PerformanceMode::High, PerformanceMode::Balanced),
            (PerformanceMode::Balanced, PerformanceMode::PowerSave),
            (PerformanceMode::PowerSave, PerformanceMode::High),
        ]
    );
}

#[test]
fn paused_core_does_not_advance_until_resumed() {
    let mut core = make_core(5, false, false);
    core.tick(0.0);
    core.go_to_index(1, false);
    core.pause();
    assert!(core.tick(16.0).is_none());
    assert_eq!(core.current(), 0.0);
    core.resume();
    assert!(core.tick(5000.0).is_none(), "first tick after resume re-primes");
    assert!(core.tick(5016.0).is_some());
    assert!(core.current() < 0.0);
}

#[test]
fn resize_keeps_the_slide_position() {
    let mut core = make_core(5, false, false);
    core.go_to_index(2, true);
    core.resize(200.0).unwrap();
    assert_eq!(core.current(), -400.0);
    assert_eq!(core.current_index(), 2);
    assert_eq!(core.total_width(), 1000.0);
    assert_eq!(core.resize(0.0), Err(ConfigError::InvalidItemWidth(0.0)));
}

#[test]
fn destroy_stops_everything() {
    let mut core = make_core(5, false, false);
    core.subscribe(|_| Ok(()));
    core.tick(0.0);
    core.go_to_index(3, true);
    core.destroy();
    assert!(core.is_destroyed());
    assert_eq!(core.listener_count(), 0);
    assert_eq!(core.current(), 0.0);
    assert!(core.tick(16.0).is_none());
    core.resume();
    assert!(!core.is_running());

    assert!(!core.go_to_next());
    assert!(!core.go_to_prev());
    assert!(!core.go_by(2));
    core.go_to_index(2, false);
    core.add_offset(-50.0);
    core.set_target(-300.0);
    assert_eq!(core.target(), 0.0);
    assert_eq!(core.current(), 0.0);
}

#[test]
fn empty_slider_is_inert() {
    let mut core = make_core(0, true, true);
    assert_eq!(core.progress(), 0.0);
    assert_eq!(core.current_index(), 0);
    assert!(!core.go_to_next());
    core.go_to_index(3, true);
    assert_eq!(core.target(), 0.0);
    core.tick(0.0);
    assert!(core.tick(16.0).is_some());
}

#[test]
fn continuous_jump_takes_the_short_way_across_the_seam() {
    let mut core = make_core(5, true, true);
    let mut clock = 0.0;
    core.tick(clock);
    for _ in 0..3 {
        core.go_to_next();
        run_until_settled(&mut core, &mut clock, 400);
    }
    // Slide 3 is shown from the wrapped side of the strip.
    assert_eq!(core.current_index(), 3);
    assert!(core.current() > 0.0);
    let start = core.current();
    core.take_wrap_shift();

    let seen = record_slide_changes(&mut core);
    let mut visited = vec![core.current_index()];
    let mut travelled = 0.0;
    core.go_to_index(4, false);
    assert_eq!(core.target(), start - 100.0);
    for _ in 0..400 {
        let before = core.current();
        clock += FRAME_MS;
        core.tick(clock);
        let shift = core.take_wrap_shift();
        travelled += (core.current() - shift - before).abs();
        let index = core.current_index();
        if visited.last() != Some(&index) {
            visited.push(index);
        }
        if core.is_settled() {
            break;
        }
    }
    assert!(core.is_settled());
    assert_eq!(visited, vec![3, 4]);
    assert_eq!(core.current_index(), 4);
    assert!((core.current() - (start - 100.0)).abs() < 1e-9);
    assert!(travelled < 150.0, "travelled {travelled}");
    assert_eq!(*seen.borrow(), vec![4]);
}

#[test]
fn continuous_immediate_jump_stays_near_the_current_copy() {
    let mut core = make_core(5, true, true);
    let mut clock = 0.0;
    core.tick(clock);
    for _ in 0..3 {
        core.go_to_next();
        run_until_settled(&mut core, &mut clock, 400);
    }
    let start = core.current();
    core.go_to_index(0, true);
    assert_eq!(core.current_index(), 0);
    assert!((core.current() - start).abs() <= core.total_width() / 2.0);
}

#[test]
fn speed_below_epsilon_snaps_to_zero_while_moving() {
    let mut core = make_core(5, false, false);
    let epsilon = core.config().motion.speed_epsilon;
    let mut clock = 0.0;
    core.tick(clock);
    core.go_to_index(4, false);
    for _ in 0..400 {
        clock += FRAME_MS;
        core.tick(clock);
        let speed = core.speed().abs();
        assert!(speed == 0.0 || speed >= epsilon, "speed {speed}");
        if core.is_settled() {
            break;
        }
    }
    assert!(core.is_settled());
    assert_eq!(core.speed(), 0.0);
}
