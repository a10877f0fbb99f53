//! Space-bar image zoom for the Google Slides editor.
//!
//! Runs as a content script: once the preference store has been read it
//! waits for the editor's input iframe, then toggles a full-screen cropped
//! copy of the selected image on Space and closes it on Escape or click.

mod crop;
mod diag;
mod dom;
mod input;
mod locator;
mod options;
mod overlay;
mod runtime;
mod watch;

#[cfg(test)]
mod fixture;

use spotlight_core::HostContract;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::diag::diag_warn;

#[cfg_attr(not(test), wasm_bindgen(start))]
pub fn start() {
    spawn_local(async {
        if let Err(err) = options::bootstrap().await {
            diag_warn!("preferences unavailable, using defaults:", dom::js_err(err));
        }
        let Some(document) = dom::document() else {
            return;
        };
        let contract = HostContract::default();
        runtime::install(document.clone(), contract.clone());
        input::install(&document, &contract);
    });
}
