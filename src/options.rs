//! The extension's single preference, read from `chrome.storage.local`.
//!
//! Outside an extension context (plain page, tests) there is no `chrome`
//! global and the defaults apply.

use std::cell::{Cell, RefCell};

use js_sys::{Array, Function, Promise, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

pub(crate) const LOGGING_ENABLED_KEY: &str = "loggingEnabled";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Options {
    pub(crate) logging_enabled: bool,
}

impl Options {
    fn from_stored(values: &JsValue) -> Self {
        let logging_enabled = Reflect::get(values, &JsValue::from_str(LOGGING_ENABLED_KEY))
            .ok()
            .and_then(|value| value.as_bool())
            .unwrap_or(false);
        Self { logging_enabled }
    }
}

type ChangeListener = Closure<dyn FnMut(JsValue, JsValue)>;

thread_local! {
    static OPTIONS: Cell<Options> = Cell::new(Options::default());
    static CHANGE_LISTENER: RefCell<Option<ChangeListener>> = RefCell::new(None);
}

pub(crate) fn options() -> Options {
    OPTIONS.with(|slot| slot.get())
}

pub(crate) fn logging_enabled() -> bool {
    options().logging_enabled
}

pub(crate) fn set_options(next: Options) {
    OPTIONS.with(|slot| slot.set(next));
}

/// Loads the stored preference and subscribes to later changes.
pub(crate) async fn bootstrap() -> Result<(), JsValue> {
    let Some(storage) = chrome_storage()? else {
        return Ok(());
    };
    let local = Reflect::get(&storage, &JsValue::from_str("local"))?;
    let stored = storage_get(&local, LOGGING_ENABLED_KEY).await?;
    set_options(Options::from_stored(&stored));
    install_change_listener(&storage)
}

fn chrome_storage() -> Result<Option<JsValue>, JsValue> {
    let chrome = Reflect::get(&js_sys::global(), &JsValue::from_str("chrome"))?;
    if chrome.is_undefined() || chrome.is_null() {
        return Ok(None);
    }
    let storage = Reflect::get(&chrome, &JsValue::from_str("storage"))?;
    if storage.is_undefined() || storage.is_null() {
        return Ok(None);
    }
    Ok(Some(storage))
}

async fn storage_get(area: &JsValue, key: &str) -> Result<JsValue, JsValue> {
    let get = Reflect::get(area, &JsValue::from_str("get"))?.dyn_into::<Function>()?;
    let keys = Array::of1(&JsValue::from_str(key));
    let promise = get.call1(area, &keys)?.dyn_into::<Promise>()?;
    JsFuture::from(promise).await
}

fn install_change_listener(storage: &JsValue) -> Result<(), JsValue> {
    let on_changed = Reflect::get(storage, &JsValue::from_str("onChanged"))?;
    let add_listener =
        Reflect::get(&on_changed, &JsValue::from_str("addListener"))?.dyn_into::<Function>()?;
    let listener = ChangeListener::new(move |changes: JsValue, _area: JsValue| {
        let Ok(change) = Reflect::get(&changes, &JsValue::from_str(LOGGING_ENABLED_KEY)) else {
            return;
        };
        if change.is_undefined() || change.is_null() {
            return;
        }
        let logging_enabled = Reflect::get(&change, &JsValue::from_str("newValue"))
            .ok()
            .and_then(|value| value.as_bool())
            .unwrap_or(false);
        set_options(Options { logging_enabled });
    });
    add_listener.call1(&on_changed, listener.as_ref().unchecked_ref())?;
    CHANGE_LISTENER.with(|slot| {
        *slot.borrow_mut() = Some(listener);
    });
    Ok(())
}
