//! Browser tests for the DOM-backed navigator.
//!
//! Run with `wasm-pack test --headless --firefox landing`.

#![cfg(target_arch = "wasm32")]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use practice_core::navigation::{Anchor, ScrollOutcome, ViewportNavigator, navigate};
use practice_landing::navigator::DomNavigator;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_anchor(id: &str) -> web_sys::Element {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .expect("document");
    let element = document.create_element("section").expect("create section");
    element.set_id(id);
    document
        .body()
        .expect("body")
        .append_child(&element)
        .expect("append section");
    element
}

#[wasm_bindgen_test]
fn scrolls_to_existing_anchor() {
    let element = mount_anchor("services");
    assert_eq!(
        navigate(&DomNavigator, Anchor::Services),
        ScrollOutcome::Scrolled
    );
    element.remove();
}

#[wasm_bindgen_test]
fn missing_anchor_is_noop() {
    assert_eq!(
        DomNavigator.scroll_to_anchor("no-such-anchor"),
        ScrollOutcome::Noop
    );
}

#[wasm_bindgen_test]
fn repeated_scrolls_are_safe() {
    let element = mount_anchor("appointment");
    for _ in 0..3 {
        assert_eq!(
            navigate(&DomNavigator, Anchor::Appointment),
            ScrollOutcome::Scrolled
        );
    }
    element.remove();
}
