//! Renders a [`SoundPlan`] into a short-lived WebAudio subgraph.
//!
//! One invocation owns its nodes exclusively: they are created, scheduled
//! against the context clock, started, and handed to the cleanup scheduler.
//! Construction failures degrade to partial or no sound; nothing propagates
//! to the caller.

use crate::cleanup::{schedule_cleanup, TaskTimers};
use rand::rngs::StdRng;
use sfx_core::buffers::noise_channel;
use sfx_core::plan::{Curve, FilterKind, NoiseSpec, OscSpec, Ramp, SoundPlan, Waveform};
use web_sys as web;

/// Build, schedule and start the plan's subgraph, rooted at `master`.
pub fn spawn(
    ctx: &web::AudioContext,
    master: &web::GainNode,
    timers: &TaskTimers,
    plan: &SoundPlan,
    rng: &mut StdRng,
) {
    let base = ctx.current_time();
    let mut nodes: Vec<web::AudioNode> = Vec::new();
    for spec in &plan.oscillators {
        spawn_osc(ctx, master, spec, base, &mut nodes);
    }
    for spec in &plan.noises {
        spawn_noise(ctx, master, spec, base, rng, &mut nodes);
    }
    if !nodes.is_empty() {
        schedule_cleanup(timers, nodes, plan.tail);
    }
}

fn apply_curve(param: &web::AudioParam, curve: &Curve, base: f64) {
    for p in curve.iter() {
        let t = base + p.time;
        let _ = match p.ramp {
            Ramp::Set => param.set_value_at_time(p.value, t),
            Ramp::Linear => param.linear_ramp_to_value_at_time(p.value, t),
            Ramp::Exponential => param.exponential_ramp_to_value_at_time(p.value, t),
        };
    }
}

fn spawn_osc(
    ctx: &web::AudioContext,
    master: &web::GainNode,
    spec: &OscSpec,
    base: f64,
    nodes: &mut Vec<web::AudioNode>,
) {
    let Ok(osc) = web::OscillatorNode::new(ctx) else {
        return;
    };
    osc.set_type(match spec.waveform {
        Waveform::Sine => web::OscillatorType::Sine,
        Waveform::Triangle => web::OscillatorType::Triangle,
    });
    apply_curve(&osc.frequency(), &spec.frequency, base);

    let Ok(env) = web::GainNode::new(ctx) else {
        return;
    };
    env.gain().set_value(0.0);
    apply_curve(&env.gain(), &spec.envelope, base);

    if let Some(v) = spec.vibrato {
        if let (Ok(lfo), Ok(depth)) = (web::OscillatorNode::new(ctx), web::GainNode::new(ctx)) {
            lfo.frequency().set_value(v.rate_hz);
            depth.gain().set_value(v.depth_hz);
            let _ = lfo.connect_with_audio_node(&depth);
            let _ = depth.connect_with_audio_param(&osc.frequency());
            let _ = lfo.start_with_when(base + spec.start);
            let _ = lfo.stop_with_when(base + spec.stop);
            nodes.push(lfo.into());
            nodes.push(depth.into());
        }
    }

    let _ = osc.connect_with_audio_node(&env);
    let _ = env.connect_with_audio_node(master);
    let _ = osc.start_with_when(base + spec.start);
    let _ = osc.stop_with_when(base + spec.stop);
    nodes.push(osc.into());
    nodes.push(env.into());
}

fn spawn_noise(
    ctx: &web::AudioContext,
    master: &web::GainNode,
    spec: &NoiseSpec,
    base: f64,
    rng: &mut StdRng,
    nodes: &mut Vec<web::AudioNode>,
) {
    let sr = ctx.sample_rate();
    let len = ((sr as f64 * spec.duration) as u32).max(1);
    let Ok(buffer) = ctx.create_buffer(1, len, sr) else {
        return;
    };
    let mut samples = noise_channel(len as usize, spec.shape, rng);
    let _ = buffer.copy_to_channel(&mut samples, 0);

    let Ok(src) = ctx.create_buffer_source() else {
        return;
    };
    src.set_buffer(Some(&buffer));

    let mut head: web::AudioNode = src.clone().into();
    if let Some(f) = &spec.filter {
        let Ok(filter) = web::BiquadFilterNode::new(ctx) else {
            return;
        };
        filter.set_type(match f.kind {
            FilterKind::Bandpass => web::BiquadFilterType::Bandpass,
            FilterKind::Highpass => web::BiquadFilterType::Highpass,
        });
        apply_curve(&filter.frequency(), &f.frequency, base);
        filter.q().set_value(f.q);
        let _ = head.connect_with_audio_node(&filter);
        head = filter.clone().into();
        nodes.push(filter.into());
    }

    let Ok(gain) = web::GainNode::new(ctx) else {
        return;
    };
    gain.gain().set_value(spec.gain);
    let _ = head.connect_with_audio_node(&gain);

    if let Some(p) = spec.pan {
        let Ok(panner) = web::StereoPannerNode::new(ctx) else {
            return;
        };
        let _ = panner.pan().set_value_at_time(p.from, base + spec.start);
        let _ = panner
            .pan()
            .linear_ramp_to_value_at_time(p.to, base + spec.start + p.duration);
        let _ = gain.connect_with_audio_node(&panner);
        let _ = panner.connect_with_audio_node(master);
        nodes.push(panner.into());
    } else {
        let _ = gain.connect_with_audio_node(master);
    }
    let _ = src.start_with_when(base + spec.start);
    nodes.push(gain.into());
    nodes.push(src.into());
}
