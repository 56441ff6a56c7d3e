//! # practice-core
//!
//! Page model for the Dr. Mike medical practice landing page.
//!
//! Everything the landing page decides lives here, independent of any
//! rendering surface:
//!
//! - [`content`] - the fixed service / stat / specialty / contact tables
//! - [`appointment`] - the appointment request record and its reducer
//! - [`auth`] - the read-only identity and the header it produces
//! - [`devtools`] - identifiers for the developer-tooling overlay
//! - [`mount`] - the one-shot hero reveal flag
//! - [`navigation`] - anchor scrolling behind an injected navigator
//! - [`config`] - embedded site configuration
//!
//! The Leptos frontend in `practice-landing` only wires these into views.
//!
//! ```rust
//! use practice_core::appointment::{AppointmentRequest, FormField, submit};
//!
//! let form = AppointmentRequest::default()
//!     .with_field(FormField::Name, "Jane Doe")
//!     .with_field(FormField::Email, "jane@example.com");
//!
//! let submission = submit(form);
//! assert_eq!(submission.sink_call.request.name, "Jane Doe");
//! assert!(submission.next.is_empty());
//! ```

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod appointment;
pub mod auth;
pub mod config;
pub mod content;
pub mod devtools;
pub mod error;
pub mod mount;
pub mod navigation;

#[cfg(test)]
mod testing;

pub use error::{Result, SiteError};
