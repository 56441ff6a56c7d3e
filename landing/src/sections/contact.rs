use leptos::prelude::*;
use practice_core::config::SiteConfig;
use practice_core::content::{ContactEntry, contact_entries};
use practice_core::devtools::components;

use crate::dev::DevContainer;
use crate::icons::{Glyph, Icon, contact_tone};

#[component]
pub fn Contact() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();

    view! {
        <DevContainer component_id=components::CONTACT>
            <section class="contact container" data-dev-id="noID">
                <div class="contact-box">
                    <h2 class="section-title">"Get in Touch"</h2>
                    <p class="section-description">
                        "Have questions or need immediate assistance? Contact our office directly."
                    </p>
                    <div class="contact-grid">
                        {contact_entries(&config)
                            .into_iter()
                            .map(|entry| view! { <ContactColumn entry=entry /> })
                            .collect_view()}
                    </div>
                </div>
            </section>
        </DevContainer>
    }
}

#[component]
fn ContactColumn(entry: ContactEntry) -> impl IntoView {
    view! {
        <div class="contact-column">
            <Icon glyph=Glyph::from(entry.kind) class=contact_tone(entry.kind) />
            <h3 class="contact-title">{entry.title}</h3>
            <p class="contact-value">{entry.value}</p>
        </div>
    }
}
