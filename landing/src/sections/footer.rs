use leptos::prelude::*;
use practice_core::config::SiteConfig;
use practice_core::content::{FOOTER_LINKS, copyright_line};

#[component]
pub fn Footer() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();

    view! {
        <footer
            class="footer container"
            data-dev-id="main-footer"
            data-dev-name="Main Footer"
            data-dev-description="Site footer with links and copyright"
        >
            <div class="footer-inner">
                <p class="footer-copyright">{copyright_line(&config)}</p>
                <div class="footer-links">
                    {FOOTER_LINKS
                        .iter()
                        .map(|link| view! { <a href=link.href class="footer-link">{link.label}</a> })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
