#![cfg(target_arch = "wasm32")]
//! JS-facing bindings for the sound-effects engine.
//!
//! The UI creates one `SoundEngine` and calls the zero-argument triggers from
//! event handlers (hover, click, scroll-reveal). Every call is fire-and-
//! forget and never throws; with no audio capability, or with mute or the
//! OS reduced-motion preference active, the calls are silent no-ops.

use sfx_core::SoundKind;
use std::sync::Once;
use wasm_bindgen::prelude::*;

mod cleanup;
mod drone;
mod engine;
mod graph;
mod prefs;
mod render;

pub use engine::AudioEngine;

static INIT_LOGGING: Once = Once::new();

#[wasm_bindgen]
pub struct SoundEngine {
    inner: AudioEngine,
}

#[wasm_bindgen]
impl SoundEngine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> SoundEngine {
        INIT_LOGGING.call_once(|| {
            console_error_panic_hook::set_once();
            console_log::init_with_level(log::Level::Info).ok();
        });
        log::info!("sfx engine ready");
        SoundEngine {
            inner: AudioEngine::new(),
        }
    }

    pub fn ping(&self) {
        self.inner.trigger(SoundKind::Ping);
    }

    pub fn tick(&self) {
        self.inner.trigger(SoundKind::Tick);
    }

    pub fn pop(&self) {
        self.inner.trigger(SoundKind::Pop);
    }

    pub fn whoosh(&self) {
        self.inner.trigger(SoundKind::Whoosh);
    }

    pub fn knock(&self) {
        self.inner.trigger(SoundKind::Knock);
    }

    pub fn chime(&self) {
        self.inner.trigger(SoundKind::Chime);
    }

    pub fn shimmer(&self) {
        self.inner.trigger(SoundKind::Shimmer);
    }

    #[wasm_bindgen(js_name = glassTap)]
    pub fn glass_tap(&self) {
        self.inner.trigger(SoundKind::GlassTap);
    }

    pub fn resonance(&self) {
        self.inner.trigger(SoundKind::Resonance);
    }

    #[wasm_bindgen(js_name = startAmbient)]
    pub fn start_ambient(&self) {
        self.inner.start_ambient();
    }

    #[wasm_bindgen(js_name = stopAmbient)]
    pub fn stop_ambient(&self) {
        self.inner.stop_ambient();
    }

    #[wasm_bindgen(getter, js_name = isMuted)]
    pub fn is_muted(&self) -> bool {
        self.inner.is_muted()
    }

    /// Flips the persisted mute flag and returns the new value. Muting also
    /// stops the ambient drone.
    #[wasm_bindgen(js_name = toggleMute)]
    pub fn toggle_mute(&self) -> bool {
        self.inner.toggle_mute()
    }

    /// Cancel pending cleanup timers, silence the drone and close the audio
    /// context. The engine is inert afterwards.
    pub fn dispose(&self) {
        self.inner.dispose();
    }
}

impl Default for SoundEngine {
    fn default() -> Self {
        Self::new()
    }
}
