//! The shared effects graph: master gain -> dry/wet split -> convolution
//! reverb -> dynamics compressor -> destination.
//!
//! Built once alongside the context. Every synthesizer terminates at
//! `master`, never at the destination directly, so global volume and the
//! reverb/compression stage apply uniformly and overlapping one-shots cannot
//! clip.

use rand::rngs::StdRng;
use sfx_core::buffers::impulse_response_channel;
use sfx_core::constants::{
    COMPRESSOR_ATTACK_SEC, COMPRESSOR_KNEE_DB, COMPRESSOR_RATIO, COMPRESSOR_RELEASE_SEC,
    COMPRESSOR_THRESHOLD_DB, DRY_GAIN, IR_DECAY_EXPONENT, IR_DURATION_SEC, MASTER_GAIN, WET_GAIN,
};
use web_sys as web;

pub struct FxGraph {
    pub master: web::GainNode,
    dry: web::GainNode,
    wet: web::GainNode,
    convolver: web::ConvolverNode,
    compressor: web::DynamicsCompressorNode,
}

pub fn create_gain(ctx: &web::AudioContext, value: f32, label: &str) -> Result<web::GainNode, ()> {
    match web::GainNode::new(ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            Err(())
        }
    }
}

pub fn build_fx_graph(ctx: &web::AudioContext, rng: &mut StdRng) -> Result<FxGraph, ()> {
    let master = create_gain(ctx, MASTER_GAIN, "master")?;
    let dry = create_gain(ctx, DRY_GAIN, "dry")?;
    let wet = create_gain(ctx, WET_GAIN, "wet")?;

    let convolver = web::ConvolverNode::new(ctx)
        .map_err(|e| {
            log::error!("ConvolverNode error: {:?}", e);
        })
        .map_err(|_| ())?;
    convolver.set_normalize(true);
    if let Some(ir) = build_impulse_response(ctx, rng) {
        convolver.set_buffer(Some(&ir));
    }

    let compressor = web::DynamicsCompressorNode::new(ctx)
        .map_err(|e| {
            log::error!("DynamicsCompressorNode error: {:?}", e);
        })
        .map_err(|_| ())?;
    compressor.threshold().set_value(COMPRESSOR_THRESHOLD_DB);
    compressor.knee().set_value(COMPRESSOR_KNEE_DB);
    compressor.ratio().set_value(COMPRESSOR_RATIO);
    compressor.attack().set_value(COMPRESSOR_ATTACK_SEC);
    compressor.release().set_value(COMPRESSOR_RELEASE_SEC);

    // master -> dry -> compressor, master -> convolver -> wet -> compressor
    let _ = master.connect_with_audio_node(&dry);
    let _ = dry.connect_with_audio_node(&compressor);
    let _ = master.connect_with_audio_node(&convolver);
    let _ = convolver.connect_with_audio_node(&wet);
    let _ = wet.connect_with_audio_node(&compressor);
    let _ = compressor.connect_with_audio_node(&ctx.destination());

    Ok(FxGraph {
        master,
        dry,
        wet,
        convolver,
        compressor,
    })
}

/// Synthesize the two-channel reverb impulse response: 0.4 s of random noise
/// under a `(1 - t/T)^decay` fade. Built exactly once per context; the
/// convolver holds the same buffer for the context's lifetime.
fn build_impulse_response(ctx: &web::AudioContext, rng: &mut StdRng) -> Option<web::AudioBuffer> {
    let sr = ctx.sample_rate();
    let len = (sr as f64 * IR_DURATION_SEC) as u32;
    let ir = match ctx.create_buffer(2, len.max(1), sr) {
        Ok(b) => b,
        Err(e) => {
            log::error!("impulse response buffer error: {:?}", e);
            return None;
        }
    };
    for ch in 0..2 {
        let mut samples = impulse_response_channel(len as usize, IR_DECAY_EXPONENT, rng);
        let _ = ir.copy_to_channel(&mut samples, ch);
    }
    Some(ir)
}

impl FxGraph {
    /// Tear the fixed wiring down. Used by `dispose`; disconnect errors on
    /// already-dead nodes are ignored.
    pub fn disconnect(&self) {
        let _ = self.master.disconnect();
        let _ = self.dry.disconnect();
        let _ = self.wet.disconnect();
        let _ = self.convolver.disconnect();
        let _ = self.compressor.disconnect();
    }
}
