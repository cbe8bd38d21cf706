//! Deferred teardown of transient audio nodes.
//!
//! Every one-shot sound leaves a small subgraph behind; disconnecting it
//! shortly after the audible tail keeps the graph from accumulating dead
//! nodes across hundreds of hover/click triggers. Timing tolerance here is
//! loose (sample accuracy is only needed for scheduling, not teardown), so
//! coarse `setTimeout` timers are fine.
//!
//! Timers are owned by the engine, not fired-and-forgotten: `cancel_all`
//! clears anything still pending so a disposed engine leaks no callbacks.

use sfx_core::constants::CLEANUP_MARGIN_MS;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct PendingTimer {
    handle: i32,
    fired: Rc<Cell<bool>>,
    // Kept alive until swept; dropping a closure mid-invocation is not safe,
    // so fired entries are only released on the next schedule/cancel pass.
    _closure: Closure<dyn FnMut()>,
}

/// Registry of pending delayed tasks.
#[derive(Default)]
pub struct TaskTimers {
    pending: RefCell<Vec<PendingTimer>>,
}

impl TaskTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `task` after `delay_ms`. If no window exists the task is dropped;
    /// that only happens when the whole audio backend is unavailable anyway.
    pub fn schedule(&self, delay_ms: i32, task: impl FnOnce() + 'static) {
        self.sweep();
        let Some(win) = web::window() else { return };
        let fired = Rc::new(Cell::new(false));
        let fired_in_cb = fired.clone();
        let mut task = Some(task);
        let closure = Closure::wrap(Box::new(move || {
            fired_in_cb.set(true);
            if let Some(t) = task.take() {
                t();
            }
        }) as Box<dyn FnMut()>);
        match win.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms,
        ) {
            Ok(handle) => self.pending.borrow_mut().push(PendingTimer {
                handle,
                fired,
                _closure: closure,
            }),
            Err(e) => log::error!("setTimeout error: {:?}", e),
        }
    }

    /// Cancel every timer that has not fired and release all entries.
    pub fn cancel_all(&self) {
        let drained: Vec<PendingTimer> = self.pending.borrow_mut().drain(..).collect();
        if let Some(win) = web::window() {
            for t in &drained {
                if !t.fired.get() {
                    win.clear_timeout_with_handle(t.handle);
                }
            }
        }
    }

    fn sweep(&self) {
        self.pending.borrow_mut().retain(|t| !t.fired.get());
    }
}

/// Disconnect `nodes` once the sound's tail has decayed.
///
/// An already-disconnected node is a normal state (two sounds can share a
/// teardown race), so disconnect results are deliberately ignored.
pub fn schedule_cleanup(timers: &TaskTimers, nodes: Vec<web::AudioNode>, tail_seconds: f64) {
    let delay_ms = (tail_seconds * 1000.0) as i32 + CLEANUP_MARGIN_MS;
    timers.schedule(delay_ms, move || {
        for node in &nodes {
            let _ = node.disconnect();
        }
    });
}
