use viz_viewer::Surface;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

pub const OVERLAY_ID: &str = "intro-popup";
pub const CONTAINER_ID: &str = "map";

/// The intro popup and the visualization container on the page.
pub struct DomSurface {
    overlay: HtmlElement,
    container: Element,
}

impl DomSurface {
    pub fn from_document(document: &Document) -> Result<Self, JsValue> {
        let overlay = find_element(document, OVERLAY_ID)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| JsValue::from_str(&format!("#{OVERLAY_ID} is not an HTML element")))?;
        let container = find_element(document, CONTAINER_ID)?;

        Ok(Self { overlay, container })
    }
}

impl Surface for DomSurface {
    fn hide_overlay(&mut self) -> bool {
        match self.overlay.style().set_property("display", "none") {
            Ok(()) => true,
            Err(error) => {
                web_sys::console::error_2(&"Failed to hide intro popup".into(), &error);
                false
            }
        }
    }

    fn replace_content(&mut self, heading: &str) {
        self.container.set_inner_html(&heading_markup(heading));
    }
}

fn find_element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing #{id} element")))
}

pub fn heading_markup(heading: &str) -> String {
    let mut escaped = String::with_capacity(heading.len());
    for ch in heading.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    format!("<h2>{escaped}</h2>")
}
