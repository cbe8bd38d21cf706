//! Declarative synthesis plans.
//!
//! Every sound kind compiles to a [`SoundPlan`]: a handful of oscillator and
//! noise-burst specs with parameter curves expressed in seconds relative to
//! the trigger. The platform layer replays the curves verbatim onto
//! `AudioParam`s; nothing here touches an audio backend, so the exact
//! frequencies, gains and stop times are assertable in native tests.
//!
//! The numeric tables are brand-defined constants. They are reproduced
//! literally rather than derived.

use crate::buffers::NoiseShape;
use crate::constants::{ENVELOPE_FLOOR, TICK_NOISE_TAU_FRACTION};
use crate::kinds::SoundKind;
use rand::Rng;
use smallvec::{smallvec, SmallVec};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Triangle,
}

/// How a curve point is reached from the previous one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ramp {
    /// Jump to the value at the given time.
    Set,
    Linear,
    /// Exponential ramps cannot target zero; use [`ENVELOPE_FLOOR`].
    Exponential,
}

#[derive(Clone, Copy, Debug)]
pub struct ParamPoint {
    /// Seconds after the trigger.
    pub time: f64,
    pub value: f32,
    pub ramp: Ramp,
}

pub type Curve = SmallVec<[ParamPoint; 4]>;

/// Frequency wobble applied by a dedicated LFO.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vibrato {
    pub rate_hz: f32,
    pub depth_hz: f32,
}

#[derive(Clone, Debug)]
pub struct OscSpec {
    pub waveform: Waveform,
    pub frequency: Curve,
    pub envelope: Curve,
    /// Seconds after the trigger.
    pub start: f64,
    pub stop: f64,
    pub vibrato: Option<Vibrato>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterKind {
    Bandpass,
    Highpass,
}

#[derive(Clone, Debug)]
pub struct FilterSpec {
    pub kind: FilterKind,
    pub frequency: Curve,
    pub q: f32,
}

/// Constant-rate stereo sweep across the burst.
#[derive(Clone, Copy, Debug)]
pub struct PanSweep {
    pub from: f32,
    pub to: f32,
    pub duration: f64,
}

#[derive(Clone, Debug)]
pub struct NoiseSpec {
    pub duration: f64,
    pub shape: NoiseShape,
    pub filter: Option<FilterSpec>,
    pub gain: f32,
    pub pan: Option<PanSweep>,
    pub start: f64,
}

/// One trigger's worth of scheduled sources.
#[derive(Clone, Debug, Default)]
pub struct SoundPlan {
    pub oscillators: Vec<OscSpec>,
    pub noises: Vec<NoiseSpec>,
    /// Seconds from the trigger until the last audible output ends; node
    /// cleanup is deferred until shortly after this.
    pub tail: f64,
}

fn set(time: f64, value: f32) -> ParamPoint {
    ParamPoint {
        time,
        value,
        ramp: Ramp::Set,
    }
}

fn lin(time: f64, value: f32) -> ParamPoint {
    ParamPoint {
        time,
        value,
        ramp: Ramp::Linear,
    }
}

fn exp(time: f64, value: f32) -> ParamPoint {
    ParamPoint {
        time,
        value,
        ramp: Ramp::Exponential,
    }
}

/// Build the plan for one trigger of `kind`.
///
/// Only shimmer consumes randomness (its per-partial detune); every other
/// plan is deterministic.
pub fn plan_sound(kind: SoundKind, rng: &mut impl Rng) -> SoundPlan {
    match kind {
        SoundKind::Ping => ping(),
        SoundKind::Tick => tick(),
        SoundKind::Pop => pop(),
        SoundKind::Whoosh => whoosh(),
        SoundKind::Knock => knock(),
        SoundKind::Chime => chime(),
        SoundKind::Shimmer => shimmer(rng),
        SoundKind::GlassTap => glass_tap(),
        SoundKind::Resonance => resonance(),
    }
}

/// Crystalline success chime: three sine partials, the fundamental bending
/// 880 -> 1320 Hz over 60 ms, upper partials at 2x and ~1.78x.
fn ping() -> SoundPlan {
    let fundamental = OscSpec {
        waveform: Waveform::Sine,
        frequency: smallvec![set(0.0, 880.0), exp(0.06, 1320.0)],
        envelope: smallvec![set(0.0, 0.0), lin(0.008, 0.12), exp(0.35, ENVELOPE_FLOOR)],
        start: 0.0,
        stop: 0.4,
        vibrato: None,
    };
    let octave = OscSpec {
        waveform: Waveform::Sine,
        frequency: smallvec![set(0.0, 1760.0), exp(0.06, 2640.0)],
        envelope: smallvec![set(0.0, 0.04), exp(0.25, ENVELOPE_FLOOR)],
        start: 0.0,
        stop: 0.3,
        vibrato: None,
    };
    // Inharmonic partial at ~1.78x for the glassy edge.
    let sheen = OscSpec {
        waveform: Waveform::Sine,
        frequency: smallvec![set(0.0, 1566.0), exp(0.06, 2350.0)],
        envelope: smallvec![set(0.0, 0.025), exp(0.3, ENVELOPE_FLOOR)],
        start: 0.0,
        stop: 0.35,
        vibrato: None,
    };
    SoundPlan {
        oscillators: vec![fundamental, octave, sheen],
        noises: vec![],
        tail: 0.4,
    }
}

/// Micro-click: 15 ms decaying noise burst through a tight bandpass.
fn tick() -> SoundPlan {
    SoundPlan {
        oscillators: vec![],
        noises: vec![NoiseSpec {
            duration: 0.015,
            shape: NoiseShape::ExpDecay {
                tau_fraction: TICK_NOISE_TAU_FRACTION,
            },
            filter: Some(FilterSpec {
                kind: FilterKind::Bandpass,
                frequency: smallvec![set(0.0, 3000.0)],
                q: 2.5,
            }),
            gain: 0.06,
            pan: None,
            start: 0.0,
        }],
        tail: 0.05,
    }
}

/// Bubbly blip: one sine bending 400 -> 800 -> 600 Hz.
fn pop() -> SoundPlan {
    SoundPlan {
        oscillators: vec![OscSpec {
            waveform: Waveform::Sine,
            frequency: smallvec![set(0.0, 400.0), exp(0.04, 800.0), exp(0.1, 600.0)],
            envelope: smallvec![set(0.0, 0.0), lin(0.005, 0.08), exp(0.12, ENVELOPE_FLOOR)],
            start: 0.0,
            stop: 0.15,
            vibrato: None,
        }],
        noises: vec![],
        tail: 0.15,
    }
}

/// Directional sweep: bell-enveloped noise through a rising bandpass, panned
/// hard left to hard right across the burst.
fn whoosh() -> SoundPlan {
    SoundPlan {
        oscillators: vec![],
        noises: vec![NoiseSpec {
            duration: 0.25,
            shape: NoiseShape::Bell,
            filter: Some(FilterSpec {
                kind: FilterKind::Bandpass,
                frequency: smallvec![set(0.0, 200.0), exp(0.2, 4000.0)],
                q: 1.5,
            }),
            gain: 0.04,
            pan: Some(PanSweep {
                from: -0.8,
                to: 0.8,
                duration: 0.25,
            }),
            start: 0.0,
        }],
        tail: 0.25,
    }
}

/// Dry knock: a triangle dropping 150 -> 80 Hz, gone in 80 ms.
fn knock() -> SoundPlan {
    SoundPlan {
        oscillators: vec![OscSpec {
            waveform: Waveform::Triangle,
            frequency: smallvec![set(0.0, 150.0), exp(0.06, 80.0)],
            envelope: smallvec![set(0.0, 0.15), exp(0.08, ENVELOPE_FLOOR)],
            start: 0.0,
            stop: 0.1,
            vibrato: None,
        }],
        noises: vec![],
        tail: 0.1,
    }
}

const CHIME_TRIAD_HZ: [f32; 3] = [523.25, 659.25, 783.99];
const CHIME_STAGGER_SEC: f64 = 0.06;

/// Confirmation arpeggio: C5/E5/G5 fired 60 ms apart, each with its own
/// decay envelope, ~800 ms total.
fn chime() -> SoundPlan {
    let oscillators = CHIME_TRIAD_HZ
        .iter()
        .enumerate()
        .map(|(i, &hz)| {
            let onset = i as f64 * CHIME_STAGGER_SEC;
            OscSpec {
                waveform: Waveform::Sine,
                frequency: smallvec![set(onset, hz)],
                envelope: smallvec![
                    set(onset, 0.0),
                    lin(onset + 0.01, 0.06),
                    exp(onset + 0.6, ENVELOPE_FLOOR),
                ],
                start: onset,
                stop: onset + 0.68,
                vibrato: None,
            }
        })
        .collect();
    SoundPlan {
        oscillators,
        noises: vec![],
        tail: 0.8,
    }
}

const SHIMMER_BASE_HZ: [f32; 4] = [2637.02, 2793.83, 3135.96, 3520.0];
const SHIMMER_DETUNE_HZ: f32 = 10.0;
const SHIMMER_STAGGER_SEC: f64 = 0.03;

/// Sparkle cluster: four very quiet sines near E7/F7/G7/A7, each randomly
/// detuned within +-10 Hz and staggered 30 ms apart.
fn shimmer(rng: &mut impl Rng) -> SoundPlan {
    let oscillators = SHIMMER_BASE_HZ
        .iter()
        .enumerate()
        .map(|(i, &base)| {
            let hz = base + rng.gen_range(-SHIMMER_DETUNE_HZ..SHIMMER_DETUNE_HZ);
            let onset = i as f64 * SHIMMER_STAGGER_SEC;
            OscSpec {
                waveform: Waveform::Sine,
                frequency: smallvec![set(onset, hz)],
                envelope: smallvec![
                    set(onset, 0.0),
                    lin(onset + 0.015, 0.015),
                    exp(onset + 0.45, ENVELOPE_FLOOR),
                ],
                start: onset,
                stop: onset + 0.5,
                vibrato: None,
            }
        })
        .collect();
    SoundPlan {
        oscillators,
        noises: vec![],
        tail: 0.6,
    }
}

/// Glassy tap: a falling sine (2400 -> 1800 Hz) mixed with an 8 ms
/// high-passed noise transient.
fn glass_tap() -> SoundPlan {
    SoundPlan {
        oscillators: vec![OscSpec {
            waveform: Waveform::Sine,
            frequency: smallvec![set(0.0, 2400.0), exp(0.08, 1800.0)],
            envelope: smallvec![set(0.0, 0.0), lin(0.005, 0.08), exp(0.12, ENVELOPE_FLOOR)],
            start: 0.0,
            stop: 0.15,
            vibrato: None,
        }],
        noises: vec![NoiseSpec {
            duration: 0.008,
            shape: NoiseShape::ExpDecay {
                tau_fraction: TICK_NOISE_TAU_FRACTION,
            },
            filter: Some(FilterSpec {
                kind: FilterKind::Highpass,
                frequency: smallvec![set(0.0, 5000.0)],
                q: 0.7,
            }),
            gain: 0.04,
            pan: None,
            start: 0.0,
        }],
        tail: 0.15,
    }
}

/// Low hum: 220 Hz sine with a 5 Hz / +-3 Hz vibrato, plus a quieter octave
/// partial that decays faster.
fn resonance() -> SoundPlan {
    let fundamental = OscSpec {
        waveform: Waveform::Sine,
        frequency: smallvec![set(0.0, 220.0)],
        envelope: smallvec![set(0.0, 0.0), lin(0.02, 0.06), exp(0.7, ENVELOPE_FLOOR)],
        start: 0.0,
        stop: 0.75,
        vibrato: Some(Vibrato {
            rate_hz: 5.0,
            depth_hz: 3.0,
        }),
    };
    let octave = OscSpec {
        waveform: Waveform::Sine,
        frequency: smallvec![set(0.0, 440.0)],
        envelope: smallvec![set(0.0, 0.0), lin(0.02, 0.02), exp(0.35, ENVELOPE_FLOOR)],
        start: 0.0,
        stop: 0.4,
        vibrato: None,
    };
    SoundPlan {
        oscillators: vec![fundamental, octave],
        noises: vec![],
        tail: 0.75,
    }
}

/// Highest value an envelope curve reaches. Handy for tests and level checks.
pub fn peak_gain(envelope: &Curve) -> f32 {
    envelope.iter().map(|p| p.value).fold(0.0, f32::max)
}
