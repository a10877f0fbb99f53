use std::rc::Rc;

use gloo::events::EventListener;
use spotlight_core::{HostContract, OverlayHost};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement};

use crate::crop::{build_cropped_document, CroppedDocument};
use crate::diag::diag;

struct MountedOverlay {
    root: Element,
    _click: EventListener,
}

/// Full-viewport layer that shows one cropped document at a time.
pub(crate) struct DomOverlay {
    document: Document,
    contract: HostContract,
    on_dismiss: Rc<dyn Fn()>,
    mounted: Option<MountedOverlay>,
}

impl DomOverlay {
    pub(crate) fn new(document: Document, contract: HostContract, on_dismiss: Rc<dyn Fn()>) -> Self {
        Self {
            document,
            contract,
            on_dismiss,
            mounted: None,
        }
    }

    fn attach_layer(&self, cropped: &CroppedDocument) -> Result<Element, JsValue> {
        let body = self
            .document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        let layer = self.document.create_element("div")?;
        layer.set_id(self.contract.overlay_id);
        layer.set_class_name(self.contract.overlay_classes);
        layer.append_child(&cropped.root)?;
        body.append_child(&layer)?;
        // Flush layout so adding the visible class animates instead of snapping.
        if let Some(html) = layer.dyn_ref::<HtmlElement>() {
            let _ = html.offset_height();
        }
        layer
            .class_list()
            .add_1(self.contract.overlay_visible_class)?;
        Ok(layer)
    }
}

impl OverlayHost for DomOverlay {
    type Target = Element;

    fn mount(&mut self, image: &Element) -> bool {
        if self.mounted.is_some() {
            return false;
        }
        let cropped = match build_cropped_document(&self.document, image, &self.contract) {
            Ok(cropped) => cropped,
            Err(err) => {
                diag!("zoom aborted:", err.to_string());
                return false;
            }
        };
        let layer = match self.attach_layer(&cropped) {
            Ok(layer) => layer,
            Err(err) => {
                diag!("overlay mount failed:", err);
                return false;
            }
        };
        diag!(
            "zoomed",
            format!("{}x{}", cropped.frame.width, cropped.frame.height)
        );
        let on_dismiss = Rc::clone(&self.on_dismiss);
        let click = EventListener::new(&layer, "click", move |_event: &Event| {
            on_dismiss();
        });
        self.mounted = Some(MountedOverlay {
            root: layer,
            _click: click,
        });
        true
    }

    fn begin_unmount(&mut self) -> bool {
        let Some(mounted) = self.mounted.as_ref() else {
            return false;
        };
        if !mounted.root.is_connected() {
            return false;
        }
        let _ = mounted
            .root
            .class_list()
            .remove_1(self.contract.overlay_visible_class);
        true
    }

    fn finish_unmount(&mut self) {
        if let Some(mounted) = self.mounted.take() {
            mounted.root.remove();
        }
    }
}
