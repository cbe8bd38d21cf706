// Shared tuning constants for the effects graph and the ambient drone.
// These are brand-defined values reproduced literally; they are not derived.

// Effects graph
pub const DRY_GAIN: f32 = 0.7;
pub const WET_GAIN: f32 = 0.3;
pub const MASTER_GAIN: f32 = 1.0;

// Dynamics compressor: keeps overlapping one-shots from clipping without
// audibly squashing a single event.
pub const COMPRESSOR_THRESHOLD_DB: f32 = -24.0;
pub const COMPRESSOR_KNEE_DB: f32 = 30.0;
pub const COMPRESSOR_RATIO: f32 = 12.0;
pub const COMPRESSOR_ATTACK_SEC: f32 = 0.003;
pub const COMPRESSOR_RELEASE_SEC: f32 = 0.25;

// Impulse response: built once per context, reused for its lifetime.
pub const IR_DURATION_SEC: f64 = 0.4;
pub const IR_DECAY_EXPONENT: f32 = 2.0;

// Ambient drone
pub const DRONE_LOW_HZ: f32 = 40.0;
pub const DRONE_HIGH_HZ: f32 = 80.0;
pub const DRONE_HIGH_MIX: f32 = 0.5;
pub const DRONE_LOWPASS_HZ: f32 = 120.0;
pub const DRONE_LOWPASS_Q: f32 = 0.7;
pub const DRONE_LEVEL: f32 = 0.012;
pub const DRONE_FADE_IN_SEC: f64 = 2.0;
pub const DRONE_FADE_OUT_SEC: f64 = 1.0;
pub const DRONE_TEARDOWN_MS: i32 = 1200;

// Transient subgraphs are disconnected this long after their audible tail.
pub const CLEANUP_MARGIN_MS: i32 = 100;

// WebAudio exponential ramps cannot reach zero; this is the silence floor.
pub const ENVELOPE_FLOOR: f32 = 0.001;

// Noise shaping
pub const TICK_NOISE_TAU_FRACTION: f32 = 0.15;
