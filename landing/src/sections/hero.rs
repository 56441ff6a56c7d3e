use leptos::prelude::*;
use practice_core::config::SiteConfig;
use practice_core::devtools::components;
use practice_core::mount::MountFlag;
use practice_core::navigation::Anchor;

use crate::dev::DevContainer;
use crate::icons::{Glyph, Icon};
use crate::navigator::jump_to;

#[component]
pub fn Hero() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let mounted = RwSignal::new(MountFlag::new());

    // Flip after the first paint so the settled-out state is actually shown
    Effect::new(move || {
        request_animation_frame(move || {
            mounted.update(|flag| {
                if flag.mark_mounted() {
                    log::debug!("[hero] mounted");
                }
            });
        });
    });

    let description = format!(
        "Comprehensive healthcare services with a personal touch. {} provides \
         expert medical care, preventive services, and ongoing health management \
         for you and your family.",
        config.brand_name
    );

    view! {
        <DevContainer component_id=components::HERO>
            <section
                class="hero container"
                data-dev-id="hero-content"
                data-dev-name="Hero Content"
                data-dev-description="Main hero section with title and call-to-action"
            >
                <div
                    class=move || mounted.get().hero_state().class()
                    data-dev-id="hero-content-wrapper"
                    data-dev-name="Hero Content Wrapper"
                    data-dev-description="Animated wrapper for hero content"
                >
                    <h1
                        class="hero-title"
                        data-dev-id="hero-title"
                        data-dev-name="Hero Title"
                        data-dev-description="Main hero title showcasing the practice"
                    >
                        "Your Health, "
                        <span
                            class="hero-title-accent"
                            data-dev-id="care-highlight"
                            data-dev-name="Care Highlight"
                            data-dev-description="Highlighted care text in gradient"
                        >
                            "Our Priority"
                        </span>
                    </h1>
                    <p
                        class="hero-description"
                        data-dev-id="hero-description"
                        data-dev-name="Hero Description"
                        data-dev-description="Hero section description explaining the practice's approach"
                    >
                        {description}
                    </p>
                    <div
                        class="hero-actions"
                        data-dev-id="hero-cta-buttons"
                        data-dev-name="Hero CTA Buttons"
                        data-dev-description="Call-to-action buttons in hero section"
                    >
                        <button
                            class="btn btn-gradient btn-lg"
                            data-dev-id="hero-book-appointment"
                            data-dev-name="Book Appointment Button"
                            data-dev-description="Primary call-to-action button for booking appointments"
                            on:click=jump_to(Anchor::Appointment)
                        >
                            <Icon glyph=Glyph::Calendar class="icon-sm" />
                            "Book Appointment"
                        </button>
                        <button
                            class="btn btn-outline btn-lg"
                            data-dev-id="hero-learn-more"
                            data-dev-name="Learn More Button"
                            data-dev-description="Secondary button to learn more about services"
                            on:click=jump_to(Anchor::Services)
                        >
                            "Learn More"
                        </button>
                    </div>
                </div>
            </section>
        </DevContainer>
    }
}
