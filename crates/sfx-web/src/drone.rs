//! The ambient drone: a continuous 40 Hz + 80 Hz pair under a low-pass,
//! faded in over 2 s and out over 1 s. Unlike the one-shots it is start/stop
//! controlled, and the state machine in `sfx_core::drone` guarantees a
//! second `start` can never stack a second oscillator pair.

use crate::cleanup::TaskTimers;
use crate::graph::create_gain;
use sfx_core::constants::{
    DRONE_FADE_IN_SEC, DRONE_FADE_OUT_SEC, DRONE_HIGH_HZ, DRONE_HIGH_MIX, DRONE_LEVEL,
    DRONE_LOWPASS_HZ, DRONE_LOWPASS_Q, DRONE_LOW_HZ, DRONE_TEARDOWN_MS,
};
use sfx_core::drone::DroneState;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct DroneNodes {
    osc_low: web::OscillatorNode,
    osc_high: web::OscillatorNode,
    high_mix: web::GainNode,
    lowpass: web::BiquadFilterNode,
    fade: web::GainNode,
}

#[derive(Default)]
pub struct DroneRuntime {
    state: DroneState,
    nodes: Option<DroneNodes>,
}

impl DroneRuntime {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Start the drone if it is fully stopped. Duplicate starts, and starts
/// racing a pending teardown, are benign no-ops.
pub fn start(ctx: &web::AudioContext, master: &web::GainNode, runtime: &Rc<RefCell<DroneRuntime>>) {
    let mut rt = runtime.borrow_mut();
    if !rt.state.begin_start() {
        return;
    }
    match build_nodes(ctx, master) {
        Ok(nodes) => {
            rt.nodes = Some(nodes);
            rt.state.mark_running();
        }
        Err(()) => rt.state.mark_stopped(),
    }
}

/// Fade the drone out over 1 s and tear its nodes down 1.2 s after the stop
/// request. Teardown runs through the engine's timer registry so `dispose`
/// can cancel it.
pub fn stop(ctx: &web::AudioContext, timers: &TaskTimers, runtime: &Rc<RefCell<DroneRuntime>>) {
    let mut rt = runtime.borrow_mut();
    if !rt.state.begin_stop() {
        return;
    }
    let Some(nodes) = rt.nodes.take() else {
        rt.state.mark_stopped();
        return;
    };
    let now = ctx.current_time();
    let gain = nodes.fade.gain();
    let _ = gain.cancel_scheduled_values(now);
    let _ = gain.set_value_at_time(gain.value(), now);
    let _ = gain.linear_ramp_to_value_at_time(0.0, now + DRONE_FADE_OUT_SEC);

    let runtime = runtime.clone();
    timers.schedule(DRONE_TEARDOWN_MS, move || {
        teardown(&nodes);
        runtime.borrow_mut().state.mark_stopped();
    });
}

/// Immediate teardown for `dispose`: no fade, no deferral.
pub fn halt(runtime: &Rc<RefCell<DroneRuntime>>) {
    let mut rt = runtime.borrow_mut();
    if let Some(nodes) = rt.nodes.take() {
        teardown(&nodes);
    }
    rt.state.mark_stopped();
}

fn build_nodes(ctx: &web::AudioContext, master: &web::GainNode) -> Result<DroneNodes, ()> {
    let osc_low = web::OscillatorNode::new(ctx)
        .map_err(|e| {
            log::error!("drone OscillatorNode error: {:?}", e);
        })
        .map_err(|_| ())?;
    osc_low.set_type(web::OscillatorType::Sine);
    osc_low.frequency().set_value(DRONE_LOW_HZ);

    let osc_high = web::OscillatorNode::new(ctx)
        .map_err(|e| {
            log::error!("drone OscillatorNode error: {:?}", e);
        })
        .map_err(|_| ())?;
    osc_high.set_type(web::OscillatorType::Sine);
    osc_high.frequency().set_value(DRONE_HIGH_HZ);

    let high_mix = create_gain(ctx, DRONE_HIGH_MIX, "drone high mix")?;

    let lowpass = web::BiquadFilterNode::new(ctx)
        .map_err(|e| {
            log::error!("drone BiquadFilterNode error: {:?}", e);
        })
        .map_err(|_| ())?;
    lowpass.set_type(web::BiquadFilterType::Lowpass);
    lowpass.frequency().set_value(DRONE_LOWPASS_HZ);
    lowpass.q().set_value(DRONE_LOWPASS_Q);

    let fade = create_gain(ctx, 0.0, "drone fade")?;
    let now = ctx.current_time();
    let _ = fade.gain().set_value_at_time(0.0, now);
    let _ = fade
        .gain()
        .linear_ramp_to_value_at_time(DRONE_LEVEL, now + DRONE_FADE_IN_SEC);

    let _ = osc_low.connect_with_audio_node(&lowpass);
    let _ = osc_high.connect_with_audio_node(&high_mix);
    let _ = high_mix.connect_with_audio_node(&lowpass);
    let _ = lowpass.connect_with_audio_node(&fade);
    let _ = fade.connect_with_audio_node(master);
    let _ = osc_low.start();
    let _ = osc_high.start();

    Ok(DroneNodes {
        osc_low,
        osc_high,
        high_mix,
        lowpass,
        fade,
    })
}

fn teardown(nodes: &DroneNodes) {
    let _ = nodes.osc_low.stop();
    let _ = nodes.osc_high.stop();
    let _ = nodes.osc_low.disconnect();
    let _ = nodes.osc_high.disconnect();
    let _ = nodes.high_mix.disconnect();
    let _ = nodes.lowpass.disconnect();
    let _ = nodes.fade.disconnect();
}
