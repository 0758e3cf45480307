// web.rs - Browser bootstrap
//
// Logging and panic hooks, and attaching the drawing canvas to its
// container. A missing container is fatal: nothing can render.

use std::sync::Once;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::error::FloorError;

pub const DEFAULT_CONTAINER_ID: &str = "canvas-container";

static INIT: Once = Once::new();

#[wasm_bindgen]
pub fn init() {
    INIT.call_once(|| {
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));
        // The host page may already have installed a logger.
        let _ = console_log::init_with_level(log::Level::Debug);
    });
}

/// Create the drawing canvas inside `#container_id` and hand it to the host
#[wasm_bindgen]
pub fn mount(container_id: &str) -> std::result::Result<HtmlCanvasElement, JsError> {
    init();
    Ok(attach_canvas(container_id)?)
}

fn attach_canvas(container_id: &str) -> crate::error::Result<HtmlCanvasElement> {
    let window = web_sys::window().ok_or(FloorError::NoWindow)?;
    let document = window.document().ok_or(FloorError::NoDocument)?;
    let container = document
        .get_element_by_id(container_id)
        .ok_or_else(|| FloorError::MissingContainer(container_id.to_owned()))?;

    let canvas = document
        .create_element("canvas")
        .map_err(dom)?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| FloorError::Dom("created element is not a canvas".into()))?;
    container.append_child(&canvas).map_err(dom)?;

    log::info!("mounted canvas in #{container_id}");
    Ok(canvas)
}

fn dom(err: JsValue) -> FloorError {
    FloorError::Dom(format!("{err:?}"))
}
