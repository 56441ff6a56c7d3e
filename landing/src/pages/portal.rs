// Stand-ins for destinations served by the patient portal
use leptos::prelude::*;
use leptos_router::components::A;
use practice_core::auth::Route;

#[component]
pub fn PortalPlaceholder(destination: Route) -> impl IntoView {
    let title = match destination {
        Route::Dashboard => "Patient Dashboard",
        Route::Login => "Sign In",
        Route::Register => "Create an Account",
    };

    view! {
        <section class="portal container">
            <h1 class="section-title">{title}</h1>
            <p class="section-description">
                "This area is served by the patient portal."
            </p>
            <A href="/">"← Back to home"</A>
        </section>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class="portal container">
            <h1 class="section-title">"Page not found"</h1>
            <A href="/">"← Back to home"</A>
        </section>
    }
}
