use leptos::prelude::*;
use practice_core::content::{StatEntry, Tagged, stat_cards};
use practice_core::devtools::components;

use crate::dev::DevContainer;

#[component]
pub fn Stats() -> impl IntoView {
    view! {
        <DevContainer component_id=components::STATS>
            <section
                class="stats container"
                data-dev-id="stats-content"
                data-dev-name="Stats Content"
                data-dev-description="Statistics section showing practice metrics"
            >
                <div
                    class="stats-grid"
                    data-dev-id="stats-grid"
                    data-dev-name="Stats Grid"
                    data-dev-description="Grid container for statistics cards"
                >
                    {stat_cards().into_iter().map(|card| view! { <StatCard card=card /> }).collect_view()}
                </div>
            </section>
        </DevContainer>
    }
}

#[component]
fn StatCard(card: Tagged<StatEntry>) -> impl IntoView {
    let Tagged { entry, dev, .. } = card;
    view! {
        <div
            class="card stat-card"
            data-dev-id=dev.id.as_str()
            data-dev-name=dev.name
            data-dev-description=dev.description
        >
            <div class="stat-value">{entry.value}</div>
            <div class="stat-label">{entry.label}</div>
        </div>
    }
}
