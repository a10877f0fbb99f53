//! Builds a standalone SVG document that frames one slide object.
//!
//! The host canvas is cloned, emptied down to the selected object, and
//! wrapped in an outer `<svg>` whose size and view box are cut to the
//! selection marker's bounds. Nothing in the host tree is modified.

use std::cell::Cell;

use spotlight_core::{
    crop_frame, CanvasSize, CropError, CropFrame, HostContract, Rect, Scale, Transform, ViewBox,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, SvgGraphicsElement};

use crate::diag::diag_warn;
use crate::dom::{clear_children, create_svg_element, js_err, SVG_NS, XLINK_NS};
use crate::locator::ascend_to_object_group;

const MEASURE_STYLE: &str =
    "position: absolute; left: 0; top: 0; visibility: hidden; pointer-events: none;";

thread_local! {
    static SCALE_FALLBACKS: Cell<u32> = Cell::new(0);
}

pub(crate) struct CroppedDocument {
    pub(crate) root: Element,
    pub(crate) frame: CropFrame,
}

/// How often a transform group without `scale(...)` was seen on this page.
pub(crate) fn scale_fallback_count() -> u32 {
    SCALE_FALLBACKS.with(|count| count.get())
}

fn record_scale_fallback() {
    SCALE_FALLBACKS.with(|count| count.set(count.get().saturating_add(1)));
}

pub(crate) fn build_cropped_document(
    document: &Document,
    image: &Element,
    contract: &HostContract,
) -> Result<CroppedDocument, CropError> {
    let canvas = image
        .closest("svg")
        .map_err(dom_err)?
        .ok_or(CropError::NoCanvas)?;
    let canvas_clone = deep_clone(&canvas)?;

    // Resolved against the live tree; the clone only serves as a shell.
    let object_group = ascend_to_object_group(Some(image.clone()), &canvas, contract)
        .ok_or(CropError::NoObjectGroup)?;
    let object_clone = deep_clone(&object_group)?;

    let transform_group = canvas_clone
        .query_selector("g")
        .map_err(dom_err)?
        .ok_or(CropError::NoTransformGroup)?;
    clear_children(&transform_group);
    transform_group.append_child(&object_clone).map_err(dom_err)?;

    let canvas_size = CanvasSize::from_attrs(
        canvas_clone.get_attribute("width").as_deref(),
        canvas_clone.get_attribute("height").as_deref(),
    )?;
    let outer = create_svg_element(document, "svg").map_err(dom_err)?;
    set_frame_attrs(
        &outer,
        &format!("{}px", spotlight_core::fmt_num(canvas_size.width)),
        &format!("{}px", spotlight_core::fmt_num(canvas_size.height)),
        &canvas_size.view_box(),
    )?;
    outer.set_attribute("xmlns", SVG_NS).map_err(dom_err)?;
    outer.set_attribute("xmlns:xlink", XLINK_NS).map_err(dom_err)?;
    outer
        .class_list()
        .add_1(contract.cropped_class)
        .map_err(dom_err)?;
    outer.set_attribute("style", MEASURE_STYLE).map_err(dom_err)?;
    outer.append_child(&canvas_clone).map_err(dom_err)?;

    // getBBox only reports real geometry for rendered elements.
    let body = document
        .body()
        .ok_or_else(|| CropError::Dom("document has no body".to_string()))?;
    let mount = MeasureMount::attach(&body, outer.clone())?;

    let host_transform = Transform::parse(
        transform_group
            .get_attribute("transform")
            .as_deref()
            .unwrap_or_default(),
    );
    let scale = match host_transform.scale {
        Some(scale) => scale,
        None if host_transform.malformed_scale => {
            diag_warn!("transform group scale is unreadable");
            return Err(CropError::InvalidDimensions {
                width: f64::NAN,
                height: f64::NAN,
            });
        }
        None => {
            record_scale_fallback();
            diag_warn!(
                "no scale in transform group, assuming 1; fallbacks so far:",
                scale_fallback_count()
            );
            Scale::IDENTITY
        }
    };
    transform_group
        .set_attribute("transform", &Transform::scale_only(scale).to_string())
        .map_err(dom_err)?;

    let marker = object_clone
        .query_selector(&contract.selection_selector())
        .map_err(dom_err)?
        .ok_or(CropError::NoSelectionMarker)?;
    let bounds = measure(&marker)?.ensure_measurable()?;
    marker.remove();

    transform_group
        .set_attribute(
            "transform",
            &Transform::framed(scale, bounds.x, bounds.y).to_string(),
        )
        .map_err(dom_err)?;

    let view_box = canvas_clone
        .get_attribute("viewBox")
        .and_then(|value| ViewBox::parse(&value));
    if view_box.is_none() {
        diag_warn!("canvas has no usable viewBox");
    }
    let frame = crop_frame(canvas_size, view_box, scale, bounds)?;
    set_frame_attrs(
        &outer,
        &frame.width_attr(),
        &frame.height_attr(),
        &frame.view_box(),
    )?;

    Ok(CroppedDocument {
        root: mount.release(),
        frame,
    })
}

fn set_frame_attrs(
    svg: &Element,
    width: &str,
    height: &str,
    view_box: &ViewBox,
) -> Result<(), CropError> {
    svg.set_attribute("width", width).map_err(dom_err)?;
    svg.set_attribute("height", height).map_err(dom_err)?;
    svg.set_attribute("viewBox", &view_box.to_attr())
        .map_err(dom_err)?;
    Ok(())
}

fn measure(element: &Element) -> Result<Rect, CropError> {
    let graphics = element
        .dyn_ref::<SvgGraphicsElement>()
        .ok_or(CropError::NoSelectionMarker)?;
    let bbox = graphics.get_b_box().map_err(dom_err)?;
    Ok(Rect {
        x: bbox.x() as f64,
        y: bbox.y() as f64,
        width: bbox.width() as f64,
        height: bbox.height() as f64,
    })
}

fn deep_clone(element: &Element) -> Result<Element, CropError> {
    element
        .clone_node_with_deep(true)
        .map_err(dom_err)?
        .dyn_into::<Element>()
        .map_err(|_| CropError::Dom("clone is not an element".to_string()))
}

fn dom_err(error: JsValue) -> CropError {
    CropError::Dom(js_err(error))
}

/// Keeps the wrapping document in the live tree while it is measured and
/// takes it out again on every exit path.
struct MeasureMount {
    element: Element,
    armed: bool,
}

impl MeasureMount {
    fn attach(parent: &HtmlElement, element: Element) -> Result<Self, CropError> {
        parent.append_child(&element).map_err(dom_err)?;
        Ok(Self {
            element,
            armed: true,
        })
    }

    fn release(mut self) -> Element {
        self.armed = false;
        self.element.remove();
        let _ = self.element.remove_attribute("style");
        self.element.clone()
    }
}

impl Drop for MeasureMount {
    fn drop(&mut self) {
        if self.armed {
            self.element.remove();
        }
    }
}
