//! WebAssembly FFI bindings for the browser shell
//!
//! The browser shell serializes events and effect outputs, calls into these
//! functions and receives serialized effects back. Failures are logged to the
//! browser console and answered with an empty effect list.

use lazy_static::lazy_static;
use wasm_bindgen::prelude::wasm_bindgen;

use crux_core::{
    bridge::{Bridge, EffectId},
    Core,
};

use crate::App;

const LOG_LEVEL: log::Level = log::Level::Info;

lazy_static! {
    static ref CORE: Bridge<App> = Bridge::new(Core::new());
}

#[wasm_bindgen(start)]
pub fn init_wasm() {
    // Fails only when a logger is already installed
    let _ = console_log::init_with_level(LOG_LEVEL);
}

/// Process a serialized `Event` (e.g. `Initialize`, `SelectDepartment`)
#[wasm_bindgen]
pub fn process_event(event_bytes: &[u8]) -> Vec<u8> {
    let mut effects = Vec::new();
    if let Err(e) = CORE.update(event_bytes, &mut effects) {
        log::error!("failed to process event: {e:?}");
        effects.clear();
    }
    effects
}

/// Serialized `ViewModel` for the current state
#[wasm_bindgen]
pub fn view() -> Vec<u8> {
    let mut view = Vec::new();
    if let Err(e) = CORE.view(&mut view) {
        log::error!("failed to serialize view model: {e:?}");
        view.clear();
    }
    view
}

/// Resolve effect `id` (typically a finished `fetch`) with its serialized output
#[wasm_bindgen]
pub fn handle_response(id: u32, response_bytes: &[u8]) -> Vec<u8> {
    let mut effects = Vec::new();
    if let Err(e) = CORE.resolve(EffectId(id), response_bytes, &mut effects) {
        log::error!("failed to resolve effect {id}: {e:?}");
        effects.clear();
    }
    effects
}
