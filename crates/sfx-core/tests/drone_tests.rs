use sfx_core::{DronePhase, DroneState};

#[test]
fn start_is_idempotent_while_running() {
    let mut drone = DroneState::new();
    assert!(drone.begin_start());
    assert_eq!(drone.phase(), DronePhase::Starting);
    // A second start while the first is underway must not be granted.
    assert!(!drone.begin_start());

    drone.mark_running();
    assert_eq!(drone.phase(), DronePhase::Running);
    for _ in 0..5 {
        assert!(!drone.begin_start());
    }
}

#[test]
fn stop_is_granted_exactly_once() {
    let mut drone = DroneState::new();
    assert!(drone.begin_start());
    drone.mark_running();

    assert!(drone.begin_stop());
    assert_eq!(drone.phase(), DronePhase::Stopping);
    for _ in 0..5 {
        assert!(!drone.begin_stop());
    }

    drone.mark_stopped();
    assert!(!drone.begin_stop(), "stop from Stopped must be a no-op");
}

#[test]
fn start_during_pending_teardown_is_refused() {
    // The old oscillator pair still exists until the deferred teardown runs;
    // granting a start here would break the single-instance invariant.
    let mut drone = DroneState::new();
    assert!(drone.begin_start());
    drone.mark_running();
    assert!(drone.begin_stop());
    assert!(!drone.begin_start());
}

#[test]
fn drone_can_restart_after_full_teardown() {
    let mut drone = DroneState::new();
    assert!(drone.begin_start());
    drone.mark_running();
    assert!(drone.begin_stop());
    drone.mark_stopped();

    assert!(drone.begin_start());
    drone.mark_running();
    assert_eq!(drone.phase(), DronePhase::Running);
}

#[test]
fn failed_node_creation_returns_to_stopped() {
    let mut drone = DroneState::new();
    assert!(drone.begin_start());
    // Platform layer could not build the subgraph.
    drone.mark_stopped();
    assert_eq!(drone.phase(), DronePhase::Stopped);
    assert!(drone.begin_start());
}

#[test]
fn stop_before_running_is_granted_from_starting() {
    let mut drone = DroneState::new();
    assert!(drone.begin_start());
    assert!(drone.begin_stop());
    assert_eq!(drone.phase(), DronePhase::Stopping);
}
