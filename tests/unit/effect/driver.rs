use super::*;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn driver() -> GlowDriver {
    GlowDriver::new(TickSchedule {
        phase_interval: ms(20),
        phase_step: 0.1,
        mesh_interval: ms(30),
        mesh_speed: 0.5,
    })
    .unwrap()
}

#[test]
fn stopped_driver_does_not_tick() {
    let mut d = driver();
    assert!(!d.is_running());
    assert!(d.advance(ms(1000)).is_idle());
    assert_eq!(*d.state(), GlowState {
        phase: 0.0,
        mesh: MeshClock {
            timer: 0.0,
            speed: 0.5
        }
    });
}

#[test]
fn timers_run_whole_intervals_independently() {
    let mut d = driver();
    d.start();
    let r = d.advance(ms(65));
    assert_eq!(r, TickReport {
        phase_ticks: 3,
        mesh_ticks: 2
    });
    assert!((d.state().phase - 0.3).abs() < 1e-12);
    assert!((d.state().mesh.timer - 1.0).abs() < 1e-12);

    // Remainders carry over: 5ms + 15ms completes one phase tick, 5ms + 15ms < 30ms for mesh.
    let r = d.advance(ms(15));
    assert_eq!(r, TickReport {
        phase_ticks: 1,
        mesh_ticks: 0
    });
}

#[test]
fn stop_discards_partial_intervals() {
    let mut d = driver();
    d.start();
    d.advance(ms(19));
    d.stop();
    d.start();
    assert!(d.advance(ms(1)).is_idle());
    assert_eq!(d.advance(ms(19)).phase_ticks, 1);
}

#[test]
fn phase_wraps_into_one_turn() {
    let mut d = GlowDriver::new(TickSchedule {
        phase_step: 4.0,
        ..TickSchedule::default()
    })
    .unwrap();
    d.start();
    d.advance(ms(40));
    let p = d.state().phase;
    assert!((0.0..TAU).contains(&p));
    assert!((p - (8.0 - TAU)).abs() < 1e-12);
}

#[test]
fn reset_restores_initial_state() {
    let initial = GlowState {
        phase: 1.0,
        mesh: MeshClock {
            timer: 2.0,
            speed: 99.0,
        },
    };
    let mut d = GlowDriver::with_state(TickSchedule::default(), initial).unwrap();
    // Schedule speed replaces the one passed in.
    assert_eq!(d.state().mesh.speed, TickSchedule::default().mesh_speed);
    d.start();
    d.advance(ms(200));
    assert_ne!(d.state().phase, 1.0);
    d.reset();
    assert_eq!(d.state().phase, 1.0);
    assert_eq!(d.state().mesh.timer, 2.0);
    assert!(d.is_running());
}

#[test]
fn session_stops_on_drop() {
    let mut d = driver();
    {
        let mut s = d.session();
        assert_eq!(s.advance(ms(20)).phase_ticks, 1);
        assert!((s.state().phase - 0.1).abs() < 1e-12);
    }
    assert!(!d.is_running());
    assert!(d.advance(ms(100)).is_idle());
}

#[test]
fn long_gaps_are_capped() {
    let mut d = driver();
    d.start();
    let r = d.advance(Duration::from_secs(3600));
    assert_eq!(r.phase_ticks, MAX_CATCH_UP_TICKS);
    assert_eq!(r.mesh_ticks, MAX_CATCH_UP_TICKS);
    assert!(d.advance(ms(1)).is_idle());
}

#[test]
fn frame_stepping_uses_fps() {
    let mut d = driver();
    d.start();
    // 5 frames at 60 fps is about 83ms.
    let r = d.advance_frames(Fps::new(60, 1).unwrap(), 5);
    assert_eq!(r.phase_ticks, 4);
    assert_eq!(r.mesh_ticks, 2);
}

#[test]
fn zero_interval_is_rejected() {
    let bad = TickSchedule {
        mesh_interval: Duration::ZERO,
        ..TickSchedule::default()
    };
    assert!(GlowDriver::new(bad).is_err());
    let bad = TickSchedule {
        phase_step: f64::NAN,
        ..TickSchedule::default()
    };
    assert!(bad.validate().is_err());
}

#[test]
fn fast_forward_keeps_the_whole_backlog() {
    let mut d = driver();
    assert!(d.fast_forward(Duration::from_secs(10)).is_idle());
    d.start();
    let r = d.fast_forward(Duration::from_secs(10));
    assert_eq!(r, TickReport {
        phase_ticks: 500,
        mesh_ticks: 333
    });
    assert!((d.state().mesh.timer - 333.0 * 0.5).abs() < 1e-9);
}

#[test]
fn fast_forward_over_huge_gaps_saturates_counts() {
    let mut d = driver();
    d.start();
    let r = d.fast_forward(Duration::from_secs(1_000_000_000));
    assert_eq!(r.phase_ticks, u32::MAX);
    assert_eq!(r.mesh_ticks, u32::MAX);
    let state = *d.state();
    assert!((0.0..TAU).contains(&state.phase), "{}", state.phase);
    assert!(state.mesh.timer.is_finite());
    // 1e9 s / 30 ms ticks of 0.5 each.
    let expected = (1_000_000_000_000u64 / 30) as f64 * 0.5;
    assert!((state.mesh.timer - expected).abs() / expected < 1e-12);

    // Leftover time carries into the next call.
    let r = d.fast_forward(ms(25));
    assert_eq!(r.phase_ticks, 1);
}

#[test]
fn fast_forward_matches_stepwise_advance() {
    let mut a = driver();
    let mut b = driver();
    a.start();
    b.start();
    a.fast_forward(ms(4_010));
    for _ in 0..401 {
        b.advance(ms(10));
    }
    assert!((a.state().phase - b.state().phase).abs() < 1e-9);
    assert_eq!(a.state().mesh, b.state().mesh);
}

#[test]
fn session_steps_frames() {
    let mut d = driver();
    let mut s = d.session();
    assert_eq!(s.advance_frames(Fps::new(25, 1).unwrap(), 1).phase_ticks, 2);
}
