//! Browser Mount Tests
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn mount_without_container_fails() {
    assert!(floor_engine::mount("no-such-container").is_err());
}

#[wasm_bindgen_test]
fn mount_appends_canvas_to_container() {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document.create_element("div").unwrap();
    container.set_id(floor_engine::DEFAULT_CONTAINER_ID);
    document.body().unwrap().append_child(&container).unwrap();

    let canvas = floor_engine::mount(floor_engine::DEFAULT_CONTAINER_ID).ok().unwrap();

    assert_eq!(container.child_element_count(), 1);
    assert_eq!(canvas.tag_name(), "CANVAS");
}
