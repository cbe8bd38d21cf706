use sfx_core::{SoundKind, ThrottleGate};

#[test]
fn second_trigger_within_cooldown_is_dropped() {
    let mut gate = ThrottleGate::new();
    assert!(gate.allow(SoundKind::Ping, 0.0));
    assert!(!gate.allow(SoundKind::Ping, 100.0)); // ping cooldown is 200ms
}

#[test]
fn trigger_after_cooldown_elapses_passes() {
    let mut gate = ThrottleGate::new();
    assert!(gate.allow(SoundKind::Ping, 0.0));
    assert!(gate.allow(SoundKind::Ping, 200.0));
    assert!(gate.allow(SoundKind::Ping, 401.0));
}

#[test]
fn rapid_ticks_pass_four_times_in_a_two_hundred_ms_window() {
    // Calls every 20ms over [0, 200]; with a 50ms cooldown the gate passes
    // at 0, 60, 120 and 180ms and drops the rest.
    let mut gate = ThrottleGate::new();
    let mut passed = Vec::new();
    let mut t = 0.0;
    while t <= 200.0 {
        if gate.allow(SoundKind::Tick, t) {
            passed.push(t);
        }
        t += 20.0;
    }
    assert_eq!(passed, vec![0.0, 60.0, 120.0, 180.0]);
}

#[test]
fn kinds_are_throttled_independently() {
    let mut gate = ThrottleGate::new();
    assert!(gate.allow(SoundKind::Whoosh, 0.0));
    assert!(gate.allow(SoundKind::Knock, 1.0));
    assert!(gate.allow(SoundKind::Tick, 2.0));
    assert!(!gate.allow(SoundKind::Whoosh, 3.0));
}

#[test]
fn reset_forgets_history() {
    let mut gate = ThrottleGate::new();
    assert!(gate.allow(SoundKind::Resonance, 0.0));
    assert!(!gate.allow(SoundKind::Resonance, 10.0));
    gate.reset();
    assert!(gate.allow(SoundKind::Resonance, 10.0));
}

#[test]
fn dropped_triggers_do_not_extend_the_cooldown() {
    let mut gate = ThrottleGate::new();
    assert!(gate.allow(SoundKind::Pop, 0.0));
    // Hammering during the window must not push the next pass later.
    assert!(!gate.allow(SoundKind::Pop, 20.0));
    assert!(!gate.allow(SoundKind::Pop, 40.0));
    assert!(!gate.allow(SoundKind::Pop, 60.0));
    assert!(gate.allow(SoundKind::Pop, 80.0));
}
