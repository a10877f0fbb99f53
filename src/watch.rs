//! One-shot waits on DOM mutations.

use futures::channel::oneshot;
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, MutationObserver, MutationObserverInit, MutationRecord, Node};

type BatchCallback = Closure<dyn FnMut(Array, MutationObserver)>;

/// A live `MutationObserver` on a subtree; disconnects when dropped.
pub(crate) struct MutationWatch {
    observer: MutationObserver,
    _callback: BatchCallback,
}

impl MutationWatch {
    pub(crate) fn subtree<F>(root: &Node, mut on_batch: F) -> Result<Self, JsValue>
    where
        F: FnMut(&[MutationRecord], &MutationObserver) + 'static,
    {
        let callback = BatchCallback::new(move |records: Array, observer: MutationObserver| {
            let records: Vec<MutationRecord> = records
                .iter()
                .filter_map(|record| record.dyn_into::<MutationRecord>().ok())
                .collect();
            on_batch(&records, &observer);
        });
        let observer = MutationObserver::new(callback.as_ref().unchecked_ref())?;
        let options = MutationObserverInit::new();
        options.set_child_list(true);
        options.set_subtree(true);
        observer.observe_with_options(root, &options)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for MutationWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Resolves with the first value `matcher` extracts from a mutation batch
/// under `root`. Observation stops as soon as a batch matches, and also
/// when the returned future is dropped.
pub(crate) async fn first_match<T, F>(root: &Node, mut matcher: F) -> Result<T, JsValue>
where
    T: 'static,
    F: FnMut(&[MutationRecord]) -> Option<T> + 'static,
{
    let (sender, receiver) = oneshot::channel();
    let mut sender = Some(sender);
    let _watch = MutationWatch::subtree(root, move |records, observer| {
        if sender.is_none() {
            return;
        }
        if let Some(found) = matcher(records) {
            observer.disconnect();
            if let Some(sender) = sender.take() {
                let _ = sender.send(found);
            }
        }
    })?;
    receiver
        .await
        .map_err(|_| JsValue::from_str("mutation watch cancelled"))
}

/// Elements added by `records`, in insertion order.
pub(crate) fn added_elements(
    records: &[MutationRecord],
) -> impl Iterator<Item = Element> + '_ {
    records.iter().flat_map(|record| {
        let added = record.added_nodes();
        (0..added.length())
            .filter_map(move |idx| added.item(idx))
            .filter_map(|node| node.dyn_into::<Element>().ok())
    })
}
