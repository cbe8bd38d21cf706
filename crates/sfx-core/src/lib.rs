pub mod buffers;
pub mod constants;
pub mod drone;
pub mod kinds;
pub mod plan;
pub mod throttle;

pub use drone::{DronePhase, DroneState};
pub use kinds::SoundKind;
pub use plan::{plan_sound, SoundPlan};
pub use throttle::ThrottleGate;
