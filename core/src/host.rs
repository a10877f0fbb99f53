//! Conventions of the host slide editor's DOM.
//!
//! The editor is not ours and its markup can change under us; everything
//! the extension relies on is collected here so a format change touches a
//! single value.

pub const WORKSPACE_ID: &str = "workspace";
pub const SELECTION_STROKE: &str = "#8ab4f8";
pub const OBJECT_ID_PREFIX: &str = "editor-";
pub const INPUT_IFRAME_CLASS: &str = "docs-texteventtarget-iframe";

pub const OVERLAY_ID: &str = "image-zoom-overlay";
pub const OVERLAY_CLASSES: &str = "image-zoom-overlay zoom-out-cursor";
pub const OVERLAY_VISIBLE_CLASS: &str = "visible";
pub const CROPPED_CLASS: &str = "slides-image-zoom-img";

/// Matches the overlay fade transition in `extension/zoom.css`.
pub const FADE_OUT_MS: u32 = 200;
pub const KEY_DEBOUNCE_MS: f64 = 250.0;

#[derive(Clone, Debug, PartialEq)]
pub struct HostContract {
    pub workspace_id: &'static str,
    pub selection_stroke: &'static str,
    pub object_id_prefix: &'static str,
    pub input_iframe_class: &'static str,
    pub overlay_id: &'static str,
    pub overlay_classes: &'static str,
    pub overlay_visible_class: &'static str,
    pub cropped_class: &'static str,
    pub fade_out_ms: u32,
    pub key_debounce_ms: f64,
}

impl Default for HostContract {
    fn default() -> Self {
        Self {
            workspace_id: WORKSPACE_ID,
            selection_stroke: SELECTION_STROKE,
            object_id_prefix: OBJECT_ID_PREFIX,
            input_iframe_class: INPUT_IFRAME_CLASS,
            overlay_id: OVERLAY_ID,
            overlay_classes: OVERLAY_CLASSES,
            overlay_visible_class: OVERLAY_VISIBLE_CLASS,
            cropped_class: CROPPED_CLASS,
            fade_out_ms: FADE_OUT_MS,
            key_debounce_ms: KEY_DEBOUNCE_MS,
        }
    }
}

impl HostContract {
    pub fn selection_selector(&self) -> String {
        format!("path[stroke=\"{}\"]", self.selection_stroke)
    }

    pub fn input_iframe_selector(&self) -> String {
        format!("iframe.{}", self.input_iframe_class)
    }

    pub fn is_object_id(&self, id: &str) -> bool {
        id.starts_with(self.object_id_prefix)
    }

    pub fn is_input_iframe(&self, tag_name: &str, class_name: &str) -> bool {
        tag_name.eq_ignore_ascii_case("iframe")
            && class_name
                .split_ascii_whitespace()
                .any(|class| class == self.input_iframe_class)
    }
}
