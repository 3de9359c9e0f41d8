#![cfg(target_arch = "wasm32")]

//! In-browser smoke tests

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn app_mounts() {
    leptos::mount_to_body(|| leptos::view! { <siges_ui::App /> });

    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .expect("document body");
    assert!(body.inner_html().contains("SIGES"));
}
