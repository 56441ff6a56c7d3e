use leptos::prelude::*;
use practice_core::content::{ServiceEntry, Tagged, service_cards};
use practice_core::devtools::components;
use practice_core::navigation::Anchor;

use crate::dev::DevContainer;
use crate::icons::{Glyph, Icon, service_tone};

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <DevContainer component_id=components::SERVICES>
            <section id=Anchor::Services.id() class="services container" data-dev-id="noID">
                <div class="section-header">
                    <h2 class="section-title">"Our Medical Services"</h2>
                    <p class="section-description">
                        "Comprehensive healthcare services designed to keep you and your family healthy and thriving"
                    </p>
                </div>
                <div class="services-grid">
                    {service_cards()
                        .into_iter()
                        .map(|card| view! { <ServiceCard card=card /> })
                        .collect_view()}
                </div>
            </section>
        </DevContainer>
    }
}

#[component]
fn ServiceCard(card: Tagged<ServiceEntry>) -> impl IntoView {
    let Tagged { entry, dev, .. } = card;
    let tone = service_tone(entry.icon);
    view! {
        <div
            class="card service-card"
            data-dev-id=dev.id.as_str()
            data-dev-name=dev.name
            data-dev-description=dev.description
        >
            <div class="service-icon">
                <Icon glyph=Glyph::from(entry.icon) class=tone />
            </div>
            <h3 class="service-title">{entry.title}</h3>
            <p class="service-description">{entry.description}</p>
        </div>
    }
}
