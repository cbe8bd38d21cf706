//! The engine object that owns every process-wide audio resource: the lazy
//! context, the shared effects graph, the throttle gate, the drone runtime,
//! the pending cleanup timers and the user preferences.
//!
//! Everything lives on the UI thread; interior mutability is `RefCell`, not
//! locks. All failure degrades to silence; no method here ever surfaces an
//! error to the caller.

use crate::cleanup::TaskTimers;
use crate::drone::{self, DroneRuntime};
use crate::graph::{build_fx_graph, FxGraph};
use crate::prefs::Prefs;
use crate::render;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sfx_core::{plan_sound, SoundKind, ThrottleGate};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

struct Backend {
    ctx: web::AudioContext,
    graph: FxGraph,
}

pub struct AudioEngine {
    backend: RefCell<Option<Backend>>,
    gate: RefCell<ThrottleGate>,
    drone: Rc<RefCell<DroneRuntime>>,
    timers: TaskTimers,
    prefs: Prefs,
    rng: RefCell<StdRng>,
    disposed: Cell<bool>,
}

impl AudioEngine {
    /// Cheap: no audio context is created until the first audible trigger,
    /// so construction is safe before any user gesture.
    pub fn new() -> Self {
        Self {
            backend: RefCell::new(None),
            gate: RefCell::new(ThrottleGate::new()),
            drone: Rc::new(RefCell::new(DroneRuntime::new())),
            timers: TaskTimers::new(),
            prefs: Prefs::load(),
            rng: RefCell::new(StdRng::from_entropy()),
            disposed: Cell::new(false),
        }
    }

    /// Fire one sound. Order matters: preference gate, then throttle, then
    /// lazy backend init, so a throttled or muted trigger must not create a
    /// context.
    pub fn trigger(&self, kind: SoundKind) {
        if self.prefs.suppressed() {
            return;
        }
        if !self.gate.borrow_mut().allow(kind, js_sys::Date::now()) {
            return;
        }
        let Some((ctx, master)) = self.backend_handles() else {
            return;
        };
        let plan = plan_sound(kind, &mut *self.rng.borrow_mut());
        render::spawn(
            &ctx,
            &master,
            &self.timers,
            &plan,
            &mut *self.rng.borrow_mut(),
        );
    }

    pub fn start_ambient(&self) {
        if self.prefs.suppressed() {
            return;
        }
        let Some((ctx, master)) = self.backend_handles() else {
            return;
        };
        drone::start(&ctx, &master, &self.drone);
    }

    pub fn stop_ambient(&self) {
        let backend = self.backend.borrow();
        let Some(b) = backend.as_ref() else {
            return;
        };
        drone::stop(&b.ctx, &self.timers, &self.drone);
    }

    pub fn is_muted(&self) -> bool {
        self.prefs.muted()
    }

    /// Flip and persist the mute flag. Muting silences the ambient drone as
    /// well; one-shots already in flight are short enough to let ring out.
    pub fn toggle_mute(&self) -> bool {
        let muted = self.prefs.toggle_mute();
        if muted {
            self.stop_ambient();
        }
        muted
    }

    /// Deterministic teardown: cancel every pending timer, kill the drone
    /// without a fade, drop the graph and close the context.
    pub fn dispose(&self) {
        self.disposed.set(true);
        self.timers.cancel_all();
        drone::halt(&self.drone);
        self.gate.borrow_mut().reset();
        if let Some(backend) = self.backend.borrow_mut().take() {
            backend.graph.disconnect();
            let _ = backend.ctx.close();
        }
    }

    /// The singleton context and master input, created on first use and
    /// resumed if the autoplay policy suspended it. `None` means no audio
    /// capability; callers no-op.
    fn backend_handles(&self) -> Option<(web::AudioContext, web::GainNode)> {
        if self.disposed.get() {
            return None;
        }
        let mut slot = self.backend.borrow_mut();
        if slot.is_none() {
            match create_backend(&mut *self.rng.borrow_mut()) {
                Ok(b) => *slot = Some(b),
                Err(e) => {
                    log::error!("audio backend unavailable: {:?}", e);
                    return None;
                }
            }
        }
        let b = slot.as_ref()?;
        if b.ctx.state() == web::AudioContextState::Suspended {
            // Resume is async; if the gesture unlock is still pending this
            // trigger simply stays silent.
            let _ = b.ctx.resume();
        }
        Some((b.ctx.clone(), b.graph.master.clone()))
    }
}

fn create_backend(rng: &mut StdRng) -> anyhow::Result<Backend> {
    let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let graph = build_fx_graph(&ctx, rng).map_err(|_| anyhow::anyhow!("fx graph"))?;
    Ok(Backend { ctx, graph })
}

impl Default for AudioEngine {
    fn default() -> Self {
        Self::new()
    }
}
