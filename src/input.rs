//! Keyboard wiring for the editor page.
//!
//! Focus lives either on the page document or inside the editor's hidden
//! text-input iframe, so the same handler listens on both.

use std::cell::{Cell, RefCell};

use gloo::events::EventListener;
use spotlight_core::HostContract;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, HtmlIFrameElement, KeyboardEvent, MutationRecord};

use crate::diag::diag;
use crate::runtime;
use crate::watch::{added_elements, first_match};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum KeySource {
    Document,
    IframeWindow,
}

impl KeySource {
    pub(crate) fn label(self) -> &'static str {
        match self {
            KeySource::Document => "document",
            KeySource::IframeWindow => "iframe content window",
        }
    }
}

thread_local! {
    static ATTACHED: Cell<bool> = Cell::new(false);
    static KEY_LISTENERS: RefCell<Vec<EventListener>> = RefCell::new(Vec::new());
}

/// Attaches the key handlers once the input iframe exists, now or later.
pub(crate) fn install(document: &Document, contract: &HostContract) {
    let selector = contract.input_iframe_selector();
    if let Some(iframe) = document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlIFrameElement>().ok())
    {
        diag!("found target iframe immediately");
        attach(document, &iframe);
        return;
    }
    let Some(body) = document.body() else {
        diag!("no body to observe for the target iframe");
        return;
    };
    let document = document.clone();
    let contract = contract.clone();
    spawn_local(async move {
        let found = first_match(&body, move |records| find_input_iframe(records, &contract)).await;
        match found {
            Ok(iframe) => {
                diag!("target iframe detected", iframe.clone());
                attach(&document, &iframe);
            }
            Err(err) => diag!("stopped waiting for target iframe:", err),
        }
    });
}

fn find_input_iframe(
    records: &[MutationRecord],
    contract: &HostContract,
) -> Option<HtmlIFrameElement> {
    let selector = contract.input_iframe_selector();
    added_elements(records).find_map(|element: Element| {
        if contract.is_input_iframe(&element.tag_name(), &element.class_name()) {
            return element.dyn_into::<HtmlIFrameElement>().ok();
        }
        element
            .query_selector(&selector)
            .ok()
            .flatten()
            .and_then(|nested| nested.dyn_into::<HtmlIFrameElement>().ok())
    })
}

fn attach(document: &Document, iframe: &HtmlIFrameElement) {
    if ATTACHED.with(|flag| flag.replace(true)) {
        return;
    }
    let mut listeners = vec![EventListener::new(document, "keydown", |event: &Event| {
        on_keydown(event, KeySource::Document);
    })];
    match iframe.content_window() {
        Some(window) => listeners.push(EventListener::new(&window, "keydown", |event: &Event| {
            on_keydown(event, KeySource::IframeWindow);
        })),
        None => diag!("target iframe has no content window"),
    }
    diag!("keyboard listeners attached:", listeners.len() as u32);
    KEY_LISTENERS.with(|slot| slot.borrow_mut().extend(listeners));
}

fn on_keydown(event: &Event, source: KeySource) {
    // Events from the iframe belong to another realm; instanceof fails there.
    let key = event.unchecked_ref::<KeyboardEvent>().key();
    runtime::handle_key(&key, source);
}
