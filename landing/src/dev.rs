//! Developer-tooling overlay hooks.
//!
//! Tagged elements carry `data-dev-id` / `data-dev-name` /
//! `data-dev-description`; section containers carry
//! `data-component-id`. The overlay script reads these off the DOM.

use leptos::prelude::*;

/// Wrapper marking a top-level component boundary for the overlay.
#[component]
pub fn DevContainer(component_id: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="dev-container" data-component-id=component_id>
            {children()}
        </div>
    }
}
