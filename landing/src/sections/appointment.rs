//! Appointment request form.
//!
//! All state handling goes through the `practice_core::appointment`
//! reducer. Inputs are bound one-way (`prop:value`); edits reach the form
//! through a single `input` listener on the `<form>` that routes each event
//! by the control's `name`.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use practice_core::appointment::{
    Acknowledgment, AppointmentRequest, FormField, LogSink, PreferredTime, SelectOption,
    VisitReason, apply_input, date_input_min, submit_to,
};
use practice_core::config::SiteConfig;
use practice_core::devtools::components;
use practice_core::navigation::Anchor;

use crate::dev::DevContainer;
use crate::icons::{Glyph, Icon};

#[component]
pub fn AppointmentSection() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let form = RwSignal::new(AppointmentRequest::default());
    let today = todays_date();
    let intro = format!(
        "Schedule your visit with {}. Fill out the form below and we'll contact you to confirm your appointment.",
        config.brand_name
    );

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let (next, ack) = submit_to(&LogSink, form.get_untracked());
        form.set(next);
        acknowledge(ack);
    };

    view! {
        <DevContainer component_id=components::APPOINTMENT>
            <section id=Anchor::Appointment.id() class="appointment container" data-dev-id="noID">
                <div class="section-header">
                    <h2 class="section-title">"Request an Appointment"</h2>
                    <p class="section-description">{intro}</p>
                </div>
                <div class="card appointment-card">
                    <form
                        class="appointment-form"
                        on:input=move |ev| apply_input_event(form, &ev)
                        on:submit=on_submit
                    >
                        <div class="form-row">
                            <TextInput
                                form=form
                                field=FormField::Name
                                label="Full Name *"
                                kind="text"
                                placeholder="Enter your full name"
                                required=true
                            />
                            <TextInput
                                form=form
                                field=FormField::Email
                                label="Email Address *"
                                kind="email"
                                placeholder="Enter your email"
                                required=true
                            />
                        </div>
                        <div class="form-row">
                            <TextInput
                                form=form
                                field=FormField::Phone
                                label="Phone Number *"
                                kind="tel"
                                placeholder="Enter your phone number"
                                required=true
                            />
                            <SelectInput
                                form=form
                                field=FormField::Reason
                                label="Reason for Visit"
                                placeholder=VisitReason::PLACEHOLDER
                                options=VisitReason::options()
                            />
                        </div>
                        <div class="form-row">
                            <TextInput
                                form=form
                                field=FormField::PreferredDate
                                label="Preferred Date"
                                kind="date"
                                min=today
                            />
                            <SelectInput
                                form=form
                                field=FormField::PreferredTime
                                label="Preferred Time"
                                placeholder=PreferredTime::PLACEHOLDER
                                options=PreferredTime::options()
                            />
                        </div>
                        <div class="form-field">
                            <label class="form-label" for=FormField::Message.as_str()>
                                "Additional Message"
                            </label>
                            <textarea
                                id=FormField::Message.as_str()
                                name=FormField::Message.as_str()
                                class="form-control"
                                rows="4"
                                placeholder="Any additional information or questions..."
                                prop:value=move || form.with(|f| f.message.clone())
                            ></textarea>
                        </div>
                        <div class="form-actions">
                            <button
                                type="submit"
                                class="btn btn-gradient btn-lg"
                                data-dev-id="submit-appointment"
                                data-dev-name="Submit Appointment Button"
                                data-dev-description="Submit button for appointment request form"
                            >
                                <Icon glyph=Glyph::Calendar class="icon-sm" />
                                "Request Appointment"
                            </button>
                        </div>
                    </form>
                </div>
            </section>
        </DevContainer>
    }
}

/// Single-line input bound to one form field.
#[component]
fn TextInput(
    form: RwSignal<AppointmentRequest>,
    field: FormField,
    label: &'static str,
    kind: &'static str,
    #[prop(default = "")] placeholder: &'static str,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] min: Option<String>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label class="form-label" for=field.as_str()>{label}</label>
            <input
                id=field.as_str()
                name=field.as_str()
                type=kind
                class="form-control"
                placeholder=placeholder
                required=required
                min=min
                prop:value=move || form.with(|f| f.field(field).to_string())
            />
        </div>
    }
}

/// `<select>` over a fixed option table plus an empty placeholder.
#[component]
fn SelectInput(
    form: RwSignal<AppointmentRequest>,
    field: FormField,
    label: &'static str,
    placeholder: &'static str,
    options: Vec<SelectOption>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label class="form-label" for=field.as_str()>{label}</label>
            <select
                id=field.as_str()
                name=field.as_str()
                class="form-control"
            >
                <option value="" prop:selected=move || form.with(|f| f.field(field).is_empty())>
                    {placeholder}
                </option>
                {options
                    .into_iter()
                    .map(|option| {
                        view! {
                            <option
                                value=option.value
                                prop:selected=move || form.with(|f| f.field(field) == option.value)
                            >
                                {option.label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

/// Route one bubbled `input` event to the field named by its target.
fn apply_input_event(form: RwSignal<AppointmentRequest>, ev: &web_sys::Event) {
    let name = event_target::<web_sys::Element>(ev)
        .get_attribute("name")
        .unwrap_or_default();
    let value = event_target_value(ev);
    form.update(|f| {
        if let Err(e) = apply_input(f, &name, value) {
            log::warn!("[appointment] ignoring input: {e}");
        }
    });
}

/// Today's date as `YYYY-MM-DD`, for the date input's `min`.
fn todays_date() -> String {
    let iso = String::from(js_sys::Date::new_0().to_iso_string());
    date_input_min(&iso).to_string()
}

fn acknowledge(ack: Acknowledgment) {
    let Some(window) = web_sys::window() else {
        log::info!("{}", ack.message());
        return;
    };
    if window.alert_with_message(ack.message()).is_err() {
        log::warn!("[appointment] alert blocked: {}", ack.message());
    }
}
