// Landing page - every section, top to bottom
use crate::dev::DevContainer;
use crate::sections::{About, AppointmentSection, Contact, Footer, Header, Hero, Services, Stats};
use leptos::prelude::*;
use practice_core::devtools::components;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <DevContainer component_id=components::LANDING_ROOT>
            <div
                class="page"
                data-dev-id="main-wrapper"
                data-dev-name="Main Wrapper"
                data-dev-description="Main page wrapper with medical gradient background"
            >
                <Header />
                <main>
                    <Hero />
                    <Stats />
                    <Services />
                    <About />
                    <AppointmentSection />
                    <Contact />
                </main>
                <Footer />
            </div>
        </DevContainer>
    }
}
