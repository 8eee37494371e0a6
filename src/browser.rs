use anyhow::{Result, anyhow};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, Window};

macro_rules! log {
    ( $( $t:tt )* ) => {
        web_sys::console::log_1(&format!( $( $t )* ).into())
    }
}

macro_rules! error {
    ( $( $t:tt )* ) => {
        web_sys::console::error_1(&format!( $( $t )* ).into())
    }
}

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| anyhow!("No Window Found"))
}

pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| anyhow!("No Document Found"))
}

pub fn js_value_to_string(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

pub fn js_error(value: JsValue) -> anyhow::Error {
    anyhow!(js_value_to_string(&value))
}

pub fn canvas(document: &Document, id: &str) -> Result<HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("Missing canvas #{}", id))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|element| anyhow!("#{} is not a canvas: {:?}", id, element))
}

pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(js_error)?
        .ok_or_else(|| anyhow!("2D canvas unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|element| anyhow!("Error converting {:?} to CanvasRenderingContext2d", element))
}

pub fn html_element(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

pub fn request_animation_frame(callback: &js_sys::Function) -> Result<i32> {
    window()?
        .request_animation_frame(callback)
        .map_err(js_error)
}

pub fn cancel_animation_frame(handle: i32) -> Result<()> {
    window()?.cancel_animation_frame(handle).map_err(js_error)
}

/// Marks the page so hosts and browser tests can see where the game stands.
pub fn set_status(document: &Document, status: &str) {
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("data-game-status", status);
    }
}
