//! DOM-backed [`ViewportNavigator`].

use practice_core::navigation::{Anchor, ScrollOutcome, ViewportNavigator, navigate};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Looks anchors up in the live document and scrolls them smoothly.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomNavigator;

impl ViewportNavigator for DomNavigator {
    fn scroll_to_anchor(&self, anchor_id: &str) -> ScrollOutcome {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(anchor_id))
        else {
            return ScrollOutcome::Noop;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        ScrollOutcome::Scrolled
    }
}

/// Click handler that scrolls to `anchor`.
pub fn jump_to(anchor: Anchor) -> impl Fn(leptos::ev::MouseEvent) + Clone + 'static {
    move |_| {
        navigate(&DomNavigator, anchor);
    }
}
