use leptos::prelude::*;
use leptos_router::components::A;
use practice_core::auth::{HeaderModel, NavAction, Route};
use practice_core::config::SiteConfig;
use practice_core::navigation::Anchor;

use crate::auth::use_auth;
use crate::icons::{Glyph, Icon};
use crate::navigator::jump_to;

#[component]
pub fn Header() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let identity = use_auth();
    let header = Memo::new(move |_| identity.with(HeaderModel::for_identity));

    view! {
        <header
            class="site-header"
            data-dev-id="main-header"
            data-dev-name="Main Header"
            data-dev-description="Primary site header with navigation"
        >
            <nav
                class="nav"
                data-dev-id="main-nav"
                data-dev-name="Main Navigation"
                data-dev-description="Primary navigation bar"
            >
                <div
                    class="nav-brand"
                    data-dev-id="logo-section"
                    data-dev-name="Logo Section"
                    data-dev-description="Doctor logo and brand name"
                >
                    <div class="nav-logo" data-dev-id="noID">
                        <Icon glyph=Glyph::Heart class="icon-sm tone-white" />
                    </div>
                    <span
                        class="nav-title"
                        data-dev-id="brand-name"
                        data-dev-name="Brand Name"
                        data-dev-description=format!("{} brand name", config.brand_name)
                    >
                        {config.brand_name.clone()}
                    </span>
                </div>
                <div
                    class="nav-links"
                    data-dev-id="nav-actions"
                    data-dev-name="Navigation Actions"
                    data-dev-description="Navigation buttons and user menu"
                >
                    <button
                        class="btn btn-ghost"
                        data-dev-id="services-button"
                        data-dev-name="Services Button"
                        data-dev-description="Link to services section"
                        on:click=jump_to(Anchor::Services)
                    >
                        "Services"
                    </button>
                    <button
                        class="btn btn-ghost"
                        data-dev-id="about-button"
                        data-dev-name="About Button"
                        data-dev-description="Link to about section"
                        on:click=jump_to(Anchor::About)
                    >
                        "About"
                    </button>
                    {move || session_actions(header.get())}
                </div>
            </nav>
        </header>
    }
}

/// Greeting + dashboard for signed-in visitors, login + register otherwise.
fn session_actions(model: HeaderModel) -> impl IntoView {
    let HeaderModel {
        greeting,
        actions,
        dev,
    } = model;

    view! {
        <div
            class="nav-session"
            data-dev-id=dev.id.as_str()
            data-dev-name=dev.name
            data-dev-description=dev.description
        >
            {greeting.map(|text| view! {
                <span
                    class="nav-greeting"
                    data-dev-id="welcome-message"
                    data-dev-name="Welcome Message"
                    data-dev-description="Welcome message for authenticated user"
                >
                    {text}
                </span>
            })}
            {actions
                .into_iter()
                .map(|action| view! { <NavActionLink action=action /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn NavActionLink(action: NavAction) -> impl IntoView {
    let NavAction {
        route,
        label,
        primary,
        dev,
    } = action;
    let class = if primary { "btn btn-primary" } else { "btn btn-ghost" };

    view! {
        <A
            href=route.path()
            {..}
            class=class
            data-dev-id=dev.id.as_str()
            data-dev-name=dev.name
            data-dev-description=dev.description
        >
            {(route == Route::Dashboard)
                .then(|| view! { <Icon glyph=Glyph::User class="icon-xs" /> })}
            {label}
        </A>
    }
}
