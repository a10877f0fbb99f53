//! The page's zoom session: state, overlay, key gate and fade timer.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use js_sys::Date;
use spotlight_core::{
    command_for, finish_unzoom, toggle_zoom, unzoom, HostContract, KeyCommand, KeyGate,
    ZoomPhase, ZoomState,
};
use web_sys::{Document, Element};

use crate::diag::diag;
use crate::input::KeySource;
use crate::locator;
use crate::overlay::DomOverlay;

thread_local! {
    static SESSION: RefCell<Option<Session>> = RefCell::new(None);
}

pub(crate) struct Session {
    document: Document,
    contract: HostContract,
    state: ZoomState<Element>,
    overlay: DomOverlay,
    gate: KeyGate,
    fade_timer: Option<Timeout>,
}

impl Session {
    pub(crate) fn new(document: Document, contract: HostContract) -> Self {
        let overlay = DomOverlay::new(document.clone(), contract.clone(), Rc::new(dismiss));
        let gate = KeyGate::new(contract.key_debounce_ms);
        Self {
            document,
            contract,
            state: ZoomState::new(),
            overlay,
            gate,
            fade_timer: None,
        }
    }

    pub(crate) fn is_zoomed(&self) -> bool {
        self.state.is_zoomed()
    }

    pub(crate) fn handle_key(&mut self, key: &str, source: KeySource, now_ms: f64) {
        if !self.gate.accept(now_ms) {
            diag!("ignoring rapid keypress");
            return;
        }
        diag!("key pressed", key, source.label());
        match command_for(key, self.is_zoomed()) {
            Some(KeyCommand::Toggle) => self.toggle_selection(),
            Some(KeyCommand::Dismiss) => self.dismiss(),
            None => {}
        }
    }

    fn toggle_selection(&mut self) {
        let image = match locator::locate(&self.document, &self.contract) {
            Ok(image) => image,
            Err(err) => {
                diag!("nothing to zoom:", err.to_string());
                return;
            }
        };
        self.transition(|state, overlay| toggle_zoom(state.with_target(image), overlay));
    }

    pub(crate) fn dismiss(&mut self) {
        self.transition(|state, overlay| unzoom(state, overlay));
    }

    pub(crate) fn finish_fade(&mut self) {
        self.transition(|state, overlay| finish_unzoom(state, overlay));
    }

    fn transition<F>(&mut self, step: F)
    where
        F: FnOnce(ZoomState<Element>, &mut DomOverlay) -> ZoomState<Element>,
    {
        let before = self.state.phase();
        let state = std::mem::take(&mut self.state);
        self.state = step(state, &mut self.overlay);
        if before != ZoomPhase::Closing && self.state.phase() == ZoomPhase::Closing {
            self.schedule_finish();
        }
    }

    fn schedule_finish(&mut self) {
        // A fired timer is only replaced from a later event, never from its own callback.
        self.fade_timer = Some(Timeout::new(self.contract.fade_out_ms, || {
            with_session(Session::finish_fade);
        }));
    }
}

fn with_session<R>(action: impl FnOnce(&mut Session) -> R) -> Option<R> {
    SESSION.with(|slot| slot.borrow_mut().as_mut().map(action))
}

pub(crate) fn install(document: Document, contract: HostContract) {
    SESSION.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            *slot = Some(Session::new(document, contract));
        }
    });
}

pub(crate) fn handle_key(key: &str, source: KeySource) {
    let now_ms = Date::now();
    with_session(|session| session.handle_key(key, source, now_ms));
}

pub(crate) fn dismiss() {
    with_session(Session::dismiss);
}
