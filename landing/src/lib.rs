// Dr. Mike Medical Practice landing page — Leptos 0.8 CSR edition

//! Browser frontend for the practice landing page.
//!
//! The page model (content tables, form reducer, header model) lives in
//! `practice-core`; this crate only turns it into views and wires the
//! browser capabilities (DOM scrolling, `localStorage`, `alert`).

pub mod auth;
pub mod dev;
pub mod icons;
pub mod navigator;
pub mod pages;
pub mod router;
pub mod sections;

use leptos::prelude::*;
use practice_core::auth::AuthIdentity;
use practice_core::config::SiteConfig;

/// Root component: provides config and auth, then hands over to the router.
#[component]
pub fn App(config: SiteConfig, identity: AuthIdentity) -> impl IntoView {
    provide_context(config);
    auth::provide_auth(identity);

    view! { <router::AppRouter /> }
}
