//! Test doubles for the sink and navigator seams.

use crate::appointment::{AppointmentRequest, SubmissionSink};
use crate::navigation::{ScrollOutcome, ViewportNavigator};
use std::cell::RefCell;

/// Sink that remembers every record it receives.
#[derive(Debug, Default)]
pub struct RecordingSink {
    calls: RefCell<Vec<AppointmentRequest>>,
}

impl RecordingSink {
    /// Records received so far, oldest first.
    pub fn calls(&self) -> Vec<AppointmentRequest> {
        self.calls.borrow().clone()
    }
}

impl SubmissionSink for RecordingSink {
    fn receive(&self, request: &AppointmentRequest) {
        self.calls.borrow_mut().push(request.clone());
    }
}

/// Navigator over a fixed set of anchor ids.
#[derive(Debug, Default)]
pub struct FakeNavigator {
    present: Vec<String>,
    scrolled: RefCell<Vec<String>>,
}

impl FakeNavigator {
    /// Navigator whose page contains exactly `anchors`.
    pub fn with_anchors<I, S>(anchors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            present: anchors.into_iter().map(Into::into).collect(),
            scrolled: RefCell::default(),
        }
    }

    /// Anchors scrolled into view, in order.
    pub fn scrolled(&self) -> Vec<String> {
        self.scrolled.borrow().clone()
    }
}

impl ViewportNavigator for FakeNavigator {
    fn scroll_to_anchor(&self, anchor_id: &str) -> ScrollOutcome {
        if self.present.iter().any(|id| id == anchor_id) {
            self.scrolled.borrow_mut().push(anchor_id.to_string());
            ScrollOutcome::Scrolled
        } else {
            ScrollOutcome::Noop
        }
    }
}
