//! Miniature copies of the editor's slide markup for browser tests.

use console_error_panic_hook::set_once as set_panic_hook;
use web_sys::{Document, Element, Node};

/// One selected image object next to an unselected background object, on a
/// canvas of 800x600 px showing 400x300 units, zoomed 2x and panned.
pub(crate) const SELECTED_SLIDE: &str = r##"
<div id="workspace">
  <svg width="800" height="600" viewBox="0 0 400 300">
    <g transform="scale(2) translate(100,50)">
      <g id="editor-background">
        <rect x="0" y="0" width="400" height="300" fill="#ffffff"></rect>
      </g>
      <g id="editor-photo">
        <g class="photo-frame">
          <image x="10" y="10" width="50" height="25"></image>
        </g>
        <path stroke="#8ab4f8" fill="none" d="M10 10 H60 V35 H10 Z"></path>
      </g>
    </g>
  </svg>
</div>
"##;

pub(crate) const UNSELECTED_SLIDE: &str = r##"
<div id="workspace">
  <svg width="800" height="600" viewBox="0 0 400 300">
    <g transform="scale(2) translate(100,50)">
      <g id="editor-photo">
        <image x="10" y="10" width="50" height="25"></image>
      </g>
    </g>
  </svg>
</div>
"##;

pub(crate) const UNSCALED_SLIDE: &str = r##"
<div id="workspace">
  <svg width="800" height="600" viewBox="0 0 400 300">
    <g transform="translate(100,50)">
      <g id="editor-photo">
        <image x="10" y="10" width="50" height="25"></image>
        <path stroke="#8ab4f8" fill="none" d="M10 10 H60 V35 H10 Z"></path>
      </g>
    </g>
  </svg>
</div>
"##;

pub(crate) const MALFORMED_SCALE_SLIDE: &str = r##"
<div id="workspace">
  <svg width="800" height="600" viewBox="0 0 400 300">
    <g transform="scale(abc) translate(100,50)">
      <g id="editor-photo">
        <image x="10" y="10" width="50" height="25"></image>
        <path stroke="#8ab4f8" fill="none" d="M10 10 H60 V35 H10 Z"></path>
      </g>
    </g>
  </svg>
</div>
"##;

pub(crate) const FRACTIONAL_SCALE_SLIDE: &str = r##"
<div id="workspace">
  <svg width="800" height="600" viewBox="0 0 400 300">
    <g transform="scale(0.21333333333333335) translate(100,50)">
      <g id="editor-photo">
        <image x="10" y="10" width="50" height="25"></image>
        <path stroke="#8ab4f8" fill="none" d="M10 10 H60 V35 H10 Z"></path>
      </g>
    </g>
  </svg>
</div>
"##;

pub(crate) const FLAT_SELECTION_SLIDE: &str = r##"
<div id="workspace">
  <svg width="800" height="600" viewBox="0 0 400 300">
    <g transform="scale(2)">
      <g id="editor-photo">
        <image x="10" y="10" width="50" height="25"></image>
        <path stroke="#8ab4f8" fill="none" d="M10 10 H60"></path>
      </g>
    </g>
  </svg>
</div>
"##;

pub(crate) const NO_VIEW_BOX_SLIDE: &str = r##"
<div id="workspace">
  <svg width="800" height="600">
    <g transform="scale(2)">
      <g id="editor-photo">
        <image x="10" y="10" width="50" height="25"></image>
        <path stroke="#8ab4f8" fill="none" d="M10 10 H60 V35 H10 Z"></path>
      </g>
    </g>
  </svg>
</div>
"##;

pub(crate) const UNGROUPED_SELECTION_SLIDE: &str = r##"
<div id="workspace">
  <svg width="800" height="600" viewBox="0 0 400 300">
    <g transform="scale(2)">
      <image x="10" y="10" width="50" height="25"></image>
      <path stroke="#8ab4f8" fill="none" d="M10 10 H60 V35 H10 Z"></path>
    </g>
  </svg>
</div>
"##;

/// The test page's document, with panics routed to the browser console.
pub(crate) fn document() -> Document {
    set_panic_hook();
    web_sys::window()
        .and_then(|window| window.document())
        .expect("document available")
}

pub(crate) fn same_node(a: &Element, b: &Element) -> bool {
    let b: &Node = b;
    a.is_same_node(Some(b))
}

/// Fixture markup mounted under `<body>`; removed again on drop.
pub(crate) struct SlideFixture {
    root: Element,
}

impl SlideFixture {
    pub(crate) fn mount(markup: &str) -> Self {
        let document = document();
        let root = document
            .create_element("div")
            .expect("create fixture root");
        root.set_inner_html(markup);
        document
            .body()
            .expect("body available")
            .append_child(&root)
            .expect("append fixture");
        Self { root }
    }

    pub(crate) fn find(&self, selector: &str) -> Element {
        self.root
            .query_selector(selector)
            .ok()
            .flatten()
            .unwrap_or_else(|| panic!("fixture has no {selector}"))
    }

    pub(crate) fn image(&self) -> Element {
        self.find("image")
    }
}

impl Drop for SlideFixture {
    fn drop(&mut self) {
        self.root.remove();
    }
}
