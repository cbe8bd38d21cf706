//! Mute preference and the OS reduced-motion setting.
//!
//! The mute flag persists across sessions in local storage; it is read once
//! at engine construction and written on every toggle. Reduced motion is
//! read-only environmental input: when set, every trigger becomes a no-op
//! regardless of the mute flag.

use std::cell::Cell;
use web_sys as web;

pub const MUTE_STORAGE_KEY: &str = "sv-sound-muted";
const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

pub struct Prefs {
    muted: Cell<bool>,
    reduced_motion: bool,
}

impl Prefs {
    pub fn load() -> Self {
        Self {
            muted: Cell::new(read_stored_mute().unwrap_or(false)),
            reduced_motion: prefers_reduced_motion(),
        }
    }

    pub fn muted(&self) -> bool {
        self.muted.get()
    }

    /// True when no sound should be produced at all.
    pub fn suppressed(&self) -> bool {
        self.muted.get() || self.reduced_motion
    }

    /// Flip the mute flag, persist it, and return the new value.
    pub fn toggle_mute(&self) -> bool {
        let next = !self.muted.get();
        self.muted.set(next);
        write_stored_mute(next);
        next
    }
}

fn local_storage() -> Option<web::Storage> {
    web::window()?.local_storage().ok()?
}

fn read_stored_mute() -> Option<bool> {
    let stored = local_storage()?.get_item(MUTE_STORAGE_KEY).ok()??;
    Some(stored == "true")
}

fn write_stored_mute(muted: bool) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(MUTE_STORAGE_KEY, if muted { "true" } else { "false" });
    }
}

fn prefers_reduced_motion() -> bool {
    web::window()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok())
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false)
}
