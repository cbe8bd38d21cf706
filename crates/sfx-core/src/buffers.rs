//! Sample math for the synthesized buffers: the reverb impulse response and
//! the shaped noise bursts. Pure functions of length and an RNG so the shapes
//! are testable without an audio backend; the platform layer uploads the
//! resulting samples at the context's sample rate.

use rand::Rng;

/// Shaping applied to a noise burst.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NoiseShape {
    /// `random * exp(-i / (len * tau_fraction))`, a sharp transient.
    ExpDecay { tau_fraction: f32 },
    /// `random * sin(pi * i/len)`, swells in and out.
    Bell,
}

/// One channel of the reverb impulse response:
/// `sample[i] = random(-1, 1) * (1 - i/len)^decay_exponent`.
///
/// Deterministic shape, stochastic content: two calls sound alike but are
/// not bit-identical. Callers build this once per context and reuse it.
pub fn impulse_response_channel(len: usize, decay_exponent: f32, rng: &mut impl Rng) -> Vec<f32> {
    let mut out = Vec::with_capacity(len);
    for i in 0..len {
        let n: f32 = rng.gen_range(-1.0..1.0);
        let fade = 1.0 - i as f32 / len as f32;
        out.push(n * fade.powf(decay_exponent));
    }
    out
}

/// A noise burst shaped per `shape`.
pub fn noise_channel(len: usize, shape: NoiseShape, rng: &mut impl Rng) -> Vec<f32> {
    let mut out = Vec::with_capacity(len);
    for i in 0..len {
        let n: f32 = rng.gen_range(-1.0..1.0);
        let env = match shape {
            NoiseShape::ExpDecay { tau_fraction } => {
                (-(i as f32) / (len as f32 * tau_fraction)).exp()
            }
            NoiseShape::Bell => (std::f32::consts::PI * i as f32 / len as f32).sin(),
        };
        out.push(n * env);
    }
    out
}
