use crate::kinds::SoundKind;
use fnv::FnvHashMap;

/// Per-kind cooldown gate.
///
/// A trigger passes iff at least the kind's cooldown has elapsed since the
/// last passing trigger of the same kind. Throttled triggers are dropped
/// outright, never queued, so rapid hover/scroll bursts cannot build a
/// backlog of pending sounds.
///
/// Timestamps are caller-supplied milliseconds (wall clock in production,
/// a virtual clock in tests).
#[derive(Debug, Default)]
pub struct ThrottleGate {
    last_fired_ms: FnvHashMap<SoundKind, f64>,
}

impl ThrottleGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true and records `now_ms` iff the kind is off cooldown.
    pub fn allow(&mut self, kind: SoundKind, now_ms: f64) -> bool {
        if let Some(&last) = self.last_fired_ms.get(&kind) {
            if now_ms - last < kind.cooldown_ms() {
                return false;
            }
        }
        self.last_fired_ms.insert(kind, now_ms);
        true
    }

    /// Forget all recorded timestamps.
    pub fn reset(&mut self) {
        self.last_fired_ms.clear();
    }
}
