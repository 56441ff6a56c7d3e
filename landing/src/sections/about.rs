use leptos::prelude::*;
use practice_core::config::SiteConfig;
use practice_core::content::{STAR_COUNT, SpecialtyTile, specialty_tiles};
use practice_core::devtools::components;
use practice_core::navigation::Anchor;

use crate::dev::DevContainer;
use crate::icons::{Glyph, Icon};

#[component]
pub fn About() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let brand = config.brand_name.clone();
    let doctor = config.doctor;

    view! {
        <DevContainer component_id=components::ABOUT>
            <section id=Anchor::About.id() class="about container" data-dev-id="noID">
                <div class="about-grid">
                    <div>
                        <h2 class="section-title">{format!("Meet {brand}")}</h2>
                        <p class="about-bio">
                            {format!(
                                "With over 15 years of experience in family medicine, {brand} is \
                                 dedicated to providing compassionate, comprehensive healthcare to \
                                 patients of all ages, combining evidence-based medicine with \
                                 personalized care to ensure the best outcomes for every patient."
                            )}
                        </p>
                        <div class="specialties-grid">
                            {specialty_tiles()
                                .into_iter()
                                .map(|tile| view! { <Specialty tile=tile /> })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="doctor-card">
                        <div class="doctor-avatar">
                            <Icon glyph=Glyph::User class="icon-xl tone-white" />
                        </div>
                        <h2 class="doctor-name">{doctor.display_name}</h2>
                        <p class="doctor-credentials">{doctor.credentials}</p>
                        <div class="doctor-rating">
                            {(0..STAR_COUNT)
                                .map(|_| view! { <Icon glyph=Glyph::Star class="icon-sm tone-yellow" filled=true /> })
                                .collect_view()}
                        </div>
                        <p class="doctor-quote">{format!("\"{}\"", doctor.quote)}</p>
                    </div>
                </div>
            </section>
        </DevContainer>
    }
}

#[component]
fn Specialty(tile: SpecialtyTile) -> impl IntoView {
    let SpecialtyTile {
        entry,
        initials,
        icon_id,
        badge,
        ..
    } = tile;

    view! {
        <div class="specialty">
            <div class=format!("specialty-tile {}", entry.gradient) data-dev-id=icon_id.as_str()>
                <span class="specialty-initials">{initials}</span>
            </div>
            <span
                class="badge specialty-badge"
                data-dev-id=badge.id.as_str()
                data-dev-name=badge.name
                data-dev-description=badge.description
            >
                {entry.name}
            </span>
        </div>
    }
}
