/// Lifecycle of the ambient drone.
///
/// `Stopping` lasts from the stop request until the deferred teardown runs
/// (fade-out plus a grace period), so the previous oscillator pair still
/// exists during it. At most one drone instance may exist at any time, which
/// is why a start request during `Stopping` is refused rather than honored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DronePhase {
    Stopped,
    Starting,
    Running,
    Stopping,
}

/// State-machine guard for the drone. Holds no audio resources itself; the
/// platform layer creates and destroys nodes only when a transition is
/// granted, which keeps duplicate starts and double-teardowns impossible.
#[derive(Debug)]
pub struct DroneState {
    phase: DronePhase,
}

impl Default for DroneState {
    fn default() -> Self {
        Self {
            phase: DronePhase::Stopped,
        }
    }
}

impl DroneState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DronePhase {
        self.phase
    }

    /// Request a start. Granted only from `Stopped`; duplicate starts and
    /// starts racing a pending teardown are benign no-ops.
    pub fn begin_start(&mut self) -> bool {
        match self.phase {
            DronePhase::Stopped => {
                self.phase = DronePhase::Starting;
                true
            }
            _ => false,
        }
    }

    /// Node creation succeeded; playback is underway.
    pub fn mark_running(&mut self) {
        debug_assert_eq!(self.phase, DronePhase::Starting);
        self.phase = DronePhase::Running;
    }

    /// Request a stop. Granted from `Starting` or `Running`; duplicate stops
    /// are benign no-ops.
    pub fn begin_stop(&mut self) -> bool {
        match self.phase {
            DronePhase::Starting | DronePhase::Running => {
                self.phase = DronePhase::Stopping;
                true
            }
            _ => false,
        }
    }

    /// Teardown finished (or node creation failed); the drone may start again.
    pub fn mark_stopped(&mut self) {
        self.phase = DronePhase::Stopped;
    }
}
