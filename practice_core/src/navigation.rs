//! Anchor scrolling.
//!
//! Nav and call-to-action buttons jump to fixed anchors. Looking the
//! anchor up is delegated to a [`ViewportNavigator`] so the page logic
//! never touches the DOM directly. A missing anchor is a silent no-op.

/// Anchors targeted by the page's buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// Services grid
    Services,
    /// About the doctor
    About,
    /// Appointment form
    Appointment,
}

impl Anchor {
    /// Element id of the anchor.
    pub const fn id(self) -> &'static str {
        match self {
            Anchor::Services => "services",
            Anchor::About => "about",
            Anchor::Appointment => "appointment",
        }
    }
}

/// Result of a scroll request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// The anchor was found and scrolled into view
    Scrolled,
    /// No element with that id; nothing happened
    Noop,
}

/// Smooth-scroll capability of the current viewport.
pub trait ViewportNavigator {
    /// Scroll the element with `anchor_id` into view, or do nothing.
    fn scroll_to_anchor(&self, anchor_id: &str) -> ScrollOutcome;
}

/// Scroll to `anchor`. Never fails; a missing anchor is logged at `debug`.
pub fn navigate<N>(navigator: &N, anchor: Anchor) -> ScrollOutcome
where
    N: ViewportNavigator + ?Sized,
{
    let outcome = navigator.scroll_to_anchor(anchor.id());
    if outcome == ScrollOutcome::Noop {
        log::debug!("[nav] anchor #{} not on page", anchor.id());
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeNavigator;
    use pretty_assertions::assert_eq;

    #[test]
    fn scrolls_to_present_anchor() {
        let nav = FakeNavigator::with_anchors(["services", "about", "appointment"]);
        assert_eq!(navigate(&nav, Anchor::Services), ScrollOutcome::Scrolled);
        assert_eq!(nav.scrolled(), vec!["services"]);
    }

    #[test]
    fn missing_anchor_is_noop() {
        let nav = FakeNavigator::with_anchors(["about"]);
        assert_eq!(navigate(&nav, Anchor::Services), ScrollOutcome::Noop);
        assert!(nav.scrolled().is_empty());
    }

    #[test]
    fn repeated_navigation_is_idempotent() {
        let nav = FakeNavigator::with_anchors(["appointment"]);
        for _ in 0..3 {
            assert_eq!(navigate(&nav, Anchor::Appointment), ScrollOutcome::Scrolled);
        }
        assert_eq!(nav.scrolled(), vec!["appointment"; 3]);
    }

    #[test]
    fn works_through_trait_object() {
        let nav: Box<dyn ViewportNavigator> = Box::new(FakeNavigator::default());
        assert_eq!(navigate(nav.as_ref(), Anchor::About), ScrollOutcome::Noop);
    }

    #[test]
    fn anchor_ids() {
        assert_eq!(Anchor::Services.id(), "services");
        assert_eq!(Anchor::About.id(), "about");
        assert_eq!(Anchor::Appointment.id(), "appointment");
    }
}
