//! Route table.
//!
//! Only `/` belongs to this page. The other destinations are owned by the
//! rest of the portal; they get a placeholder so links resolve in
//! standalone builds.

use leptos::prelude::*;
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use practice_core::auth::Route as Destination;

use crate::pages::{LandingPage, NotFound, PortalPlaceholder};

#[component]
pub fn AppRouter() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=StaticSegment("") view=LandingPage />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <PortalPlaceholder destination=Destination::Dashboard /> }
                />
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <PortalPlaceholder destination=Destination::Login /> }
                />
                <Route
                    path=StaticSegment("register")
                    view=|| view! { <PortalPlaceholder destination=Destination::Register /> }
                />
            </Routes>
        </Router>
    }
}
