//! Appointment request form.
//!
//! The form is a plain reducer over [`AppointmentRequest`]:
//!
//! - [`update_field`] replaces exactly one field, verbatim
//! - [`submit`] hands the record to the sink and clears it
//!
//! Submission never fails. Browser-side `required` / `type=email` /
//! `type=tel` / `type=date` checks are the only gate, and they run before
//! the submit handler is ever invoked.

use crate::error::{Result, SiteError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Message shown to the visitor after every submission.
pub const ACKNOWLEDGMENT: &str =
    "Appointment request submitted successfully! We will contact you soon.";

/// Form contents. Every field is free text; empty means "not provided".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    /// Full name (required in the form)
    pub name: String,
    /// Email address (required in the form)
    pub email: String,
    /// Phone number (required in the form)
    pub phone: String,
    /// `YYYY-MM-DD` from the date input
    pub preferred_date: String,
    /// One of [`PreferredTime`] values, or empty
    pub preferred_time: String,
    /// One of [`VisitReason`] values, or empty
    pub reason: String,
    /// Additional message
    pub message: String,
}

/// Names of the seven form fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    /// `name`
    Name,
    /// `email`
    Email,
    /// `phone`
    Phone,
    /// `preferredDate`
    PreferredDate,
    /// `preferredTime`
    PreferredTime,
    /// `reason`
    Reason,
    /// `message`
    Message,
}

impl FormField {
    /// All fields in form order.
    pub const ALL: [FormField; 7] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::PreferredDate,
        FormField::PreferredTime,
        FormField::Reason,
        FormField::Message,
    ];

    /// Name used for the input's `name` attribute and in the sink payload.
    pub const fn as_str(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::PreferredDate => "preferredDate",
            FormField::PreferredTime => "preferredTime",
            FormField::Reason => "reason",
            FormField::Message => "message",
        }
    }
}

impl FromStr for FormField {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        FormField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| SiteError::UnknownField(s.to_string()))
    }
}

impl AppointmentRequest {
    /// Current value of `field`.
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::PreferredDate => &self.preferred_date,
            FormField::PreferredTime => &self.preferred_time,
            FormField::Reason => &self.reason,
            FormField::Message => &self.message,
        }
    }

    fn slot_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::PreferredDate => &mut self.preferred_date,
            FormField::PreferredTime => &mut self.preferred_time,
            FormField::Reason => &mut self.reason,
            FormField::Message => &mut self.message,
        }
    }

    /// Replace one field in place. No trimming, no length cap.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// Builder form of [`AppointmentRequest::set_field`].
    pub fn with_field(mut self, field: FormField, value: impl Into<String>) -> Self {
        self.set_field(field, value);
        self
    }

    /// `true` when every field is empty.
    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|f| self.field(*f).is_empty())
    }

    /// Select values that are set but missing from their option table.
    ///
    /// The record is still submitted verbatim; these are only reported.
    pub fn unknown_options(&self) -> Vec<SiteError> {
        let reason = (!self.reason.is_empty())
            .then(|| self.reason.parse::<VisitReason>().err())
            .flatten();
        let time = (!self.preferred_time.is_empty())
            .then(|| self.preferred_time.parse::<PreferredTime>().err())
            .flatten();
        reason.into_iter().chain(time).collect()
    }
}

/// Apply an input event by the input's `name` attribute.
///
/// Unknown names leave the form untouched and return
/// [`SiteError::UnknownField`].
pub fn apply_input(
    state: &mut AppointmentRequest,
    name: &str,
    value: impl Into<String>,
) -> Result<FormField> {
    let field = name.parse::<FormField>()?;
    state.set_field(field, value);
    Ok(field)
}

/// Replace exactly one field; every other field is carried over unchanged.
pub fn update_field(
    state: AppointmentRequest,
    field: FormField,
    value: impl Into<String>,
) -> AppointmentRequest {
    state.with_field(field, value)
}

/// What the submission sink receives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SinkCall {
    /// Record as it was at submit time
    pub request: AppointmentRequest,
}

/// Visitor-facing confirmation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Acknowledgment(&'static str);

impl Acknowledgment {
    /// Text to show.
    pub const fn message(self) -> &'static str {
        self.0
    }
}

/// Outcome of [`submit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    /// Payload for the sink
    pub sink_call: SinkCall,
    /// Form state after submit (always empty)
    pub next: AppointmentRequest,
    /// Confirmation to show, exactly once
    pub acknowledgment: Acknowledgment,
}

/// Pure submit step: capture the record, clear the form, acknowledge.
pub fn submit(state: AppointmentRequest) -> Submission {
    Submission {
        sink_call: SinkCall { request: state },
        next: AppointmentRequest::default(),
        acknowledgment: Acknowledgment(ACKNOWLEDGMENT),
    }
}

/// Receives submitted appointment requests.
pub trait SubmissionSink {
    /// Called exactly once per submit, with the pre-reset record.
    fn receive(&self, request: &AppointmentRequest);
}

/// Default sink: serialises the record and logs it at `info`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl LogSink {
    /// JSON payload as written to the log.
    pub fn payload(request: &AppointmentRequest) -> Result<String> {
        Ok(serde_json::to_string(request)?)
    }
}

impl SubmissionSink for LogSink {
    fn receive(&self, request: &AppointmentRequest) {
        for e in request.unknown_options() {
            log::warn!("[appointment] {e}");
        }
        match Self::payload(request) {
            Ok(json) => log::info!("Appointment request: {json}"),
            Err(e) => log::error!("[appointment] {e}"),
        }
    }
}

/// Run [`submit`] against a sink; returns the cleared form and the
/// acknowledgment for the caller to display.
pub fn submit_to<S>(sink: &S, state: AppointmentRequest) -> (AppointmentRequest, Acknowledgment)
where
    S: SubmissionSink + ?Sized,
{
    let Submission {
        sink_call,
        next,
        acknowledgment,
    } = submit(state);
    sink.receive(&sink_call.request);
    (next, acknowledgment)
}

/// `value` / `label` pair for a `<select>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectOption {
    /// Submitted value
    pub value: &'static str,
    /// Visible label
    pub label: &'static str,
}

/// Reason for the visit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VisitReason {
    /// Routine checkup
    RoutineCheckup,
    /// Follow-up visit
    FollowUp,
    /// New patient consultation
    NewPatient,
    /// Urgent care
    UrgentCare,
    /// Preventive care
    PreventiveCare,
    /// Anything else
    Other,
}

impl VisitReason {
    /// Options in display order.
    pub const ALL: [VisitReason; 6] = [
        VisitReason::RoutineCheckup,
        VisitReason::FollowUp,
        VisitReason::NewPatient,
        VisitReason::UrgentCare,
        VisitReason::PreventiveCare,
        VisitReason::Other,
    ];

    /// Placeholder shown while nothing is selected.
    pub const PLACEHOLDER: &'static str = "Select reason";

    /// Submitted value.
    pub const fn value(self) -> &'static str {
        match self {
            VisitReason::RoutineCheckup => "routine-checkup",
            VisitReason::FollowUp => "follow-up",
            VisitReason::NewPatient => "new-patient",
            VisitReason::UrgentCare => "urgent-care",
            VisitReason::PreventiveCare => "preventive-care",
            VisitReason::Other => "other",
        }
    }

    /// Visible label.
    pub const fn label(self) -> &'static str {
        match self {
            VisitReason::RoutineCheckup => "Routine Checkup",
            VisitReason::FollowUp => "Follow-up Visit",
            VisitReason::NewPatient => "New Patient Consultation",
            VisitReason::UrgentCare => "Urgent Care",
            VisitReason::PreventiveCare => "Preventive Care",
            VisitReason::Other => "Other",
        }
    }

    /// Select options in display order.
    pub fn options() -> Vec<SelectOption> {
        Self::ALL
            .iter()
            .map(|r| SelectOption {
                value: r.value(),
                label: r.label(),
            })
            .collect()
    }
}

impl FromStr for VisitReason {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|r| r.value() == s)
            .ok_or_else(|| SiteError::UnknownOption {
                field: FormField::Reason.as_str(),
                value: s.to_string(),
            })
    }
}

/// Preferred time of day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PreferredTime {
    /// 8:00 AM - 12:00 PM
    Morning,
    /// 12:00 PM - 5:00 PM
    Afternoon,
    /// 5:00 PM - 8:00 PM
    Evening,
}

impl PreferredTime {
    /// Options in display order.
    pub const ALL: [PreferredTime; 3] = [
        PreferredTime::Morning,
        PreferredTime::Afternoon,
        PreferredTime::Evening,
    ];

    /// Placeholder shown while nothing is selected.
    pub const PLACEHOLDER: &'static str = "Select time";

    /// Submitted value.
    pub const fn value(self) -> &'static str {
        match self {
            PreferredTime::Morning => "morning",
            PreferredTime::Afternoon => "afternoon",
            PreferredTime::Evening => "evening",
        }
    }

    /// Visible label.
    pub const fn label(self) -> &'static str {
        match self {
            PreferredTime::Morning => "Morning (8:00 AM - 12:00 PM)",
            PreferredTime::Afternoon => "Afternoon (12:00 PM - 5:00 PM)",
            PreferredTime::Evening => "Evening (5:00 PM - 8:00 PM)",
        }
    }

    /// Select options in display order.
    pub fn options() -> Vec<SelectOption> {
        Self::ALL
            .iter()
            .map(|t| SelectOption {
                value: t.value(),
                label: t.label(),
            })
            .collect()
    }
}

impl FromStr for PreferredTime {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.value() == s)
            .ok_or_else(|| SiteError::UnknownOption {
                field: FormField::PreferredTime.as_str(),
                value: s.to_string(),
            })
    }
}

/// `min` for the date input: the date part of an ISO-8601 timestamp.
pub fn date_input_min(iso_timestamp: &str) -> &str {
    iso_timestamp
        .split_once('T')
        .map_or(iso_timestamp, |(date, _)| date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingSink;
    use pretty_assertions::assert_eq;

    fn filled() -> AppointmentRequest {
        AppointmentRequest {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: "555-0100".into(),
            preferred_date: "2026-11-02".into(),
            preferred_time: "morning".into(),
            reason: "follow-up".into(),
            message: "Knee still hurts".into(),
        }
    }

    #[test]
    fn starts_empty() {
        let form = AppointmentRequest::default();
        assert!(form.is_empty());
        for field in FormField::ALL {
            assert_eq!(form.field(field), "");
        }
    }

    #[test]
    fn update_name_leaves_other_fields() {
        let before = filled();
        let after = update_field(before.clone(), FormField::Name, "John Roe");

        assert_eq!(after.name, "John Roe");
        for field in FormField::ALL.into_iter().filter(|f| *f != FormField::Name) {
            assert_eq!(after.field(field), before.field(field), "{field:?} changed");
        }
    }

    #[test]
    fn update_reason_leaves_other_fields() {
        let before = AppointmentRequest::default().with_field(FormField::Name, "Jane Doe");
        let after = update_field(before, FormField::Reason, "urgent-care");

        assert_eq!(
            after,
            AppointmentRequest {
                name: "Jane Doe".into(),
                reason: "urgent-care".into(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn update_is_verbatim() {
        let form = update_field(
            AppointmentRequest::default(),
            FormField::Message,
            "  padded\n",
        );
        assert_eq!(form.message, "  padded\n");

        let long = "x".repeat(10_000);
        let form = update_field(form, FormField::Phone, long.clone());
        assert_eq!(form.phone, long);
    }

    #[test]
    fn submit_reports_then_clears() {
        let submission = submit(filled());

        assert_eq!(submission.sink_call.request, filled());
        assert!(submission.next.is_empty());
        assert_eq!(submission.acknowledgment.message(), ACKNOWLEDGMENT);
    }

    #[test]
    fn submit_to_calls_sink_exactly_once() {
        let sink = RecordingSink::default();
        let (next, ack) = submit_to(&sink, filled());

        assert_eq!(sink.calls(), vec![filled()]);
        assert_eq!(next, AppointmentRequest::default());
        assert_eq!(ack.message(), ACKNOWLEDGMENT);
    }

    #[test]
    fn submit_empty_form_still_succeeds() {
        let sink = RecordingSink::default();
        let (next, ack) = submit_to(&sink, AppointmentRequest::default());

        assert_eq!(sink.calls().len(), 1);
        assert!(sink.calls()[0].is_empty());
        assert!(next.is_empty());
        assert_eq!(ack.message(), ACKNOWLEDGMENT);
    }

    #[test]
    fn log_sink_payload_uses_form_field_names() {
        let json = LogSink::payload(&filled()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        for field in FormField::ALL {
            assert_eq!(value[field.as_str()], filled().field(field), "{field:?}");
        }
    }

    #[test]
    fn form_field_names_round_trip() {
        for field in FormField::ALL {
            assert_eq!(field.as_str().parse::<FormField>().unwrap(), field);
        }
        assert!(matches!(
            "zip".parse::<FormField>(),
            Err(SiteError::UnknownField(name)) if name == "zip"
        ));
    }

    #[test]
    fn option_tables() {
        let reasons: Vec<_> = VisitReason::options().iter().map(|o| o.value).collect();
        assert_eq!(
            reasons,
            vec![
                "routine-checkup",
                "follow-up",
                "new-patient",
                "urgent-care",
                "preventive-care",
                "other"
            ]
        );
        assert_eq!(PreferredTime::options().len(), 3);
        assert_eq!(
            PreferredTime::options()[2].label,
            "Evening (5:00 PM - 8:00 PM)"
        );
    }

    #[test]
    fn known_options_are_not_reported() {
        assert!(filled().unknown_options().is_empty());
        assert!(AppointmentRequest::default().unknown_options().is_empty());
        assert_eq!(
            "urgent-care".parse::<VisitReason>().unwrap(),
            VisitReason::UrgentCare
        );
        assert_eq!(
            "evening".parse::<PreferredTime>().unwrap(),
            PreferredTime::Evening
        );
    }

    #[test]
    fn unknown_options_are_reported_but_kept() {
        let form = filled()
            .with_field(FormField::Reason, "surgery")
            .with_field(FormField::PreferredTime, "midnight");

        let errors = form.unknown_options();
        assert_eq!(errors.len(), 2);
        assert!(matches!(
            &errors[0],
            SiteError::UnknownOption { field: "reason", value } if value == "surgery"
        ));
        assert!(matches!(
            &errors[1],
            SiteError::UnknownOption { field: "preferredTime", value } if value == "midnight"
        ));

        let sink = RecordingSink::default();
        submit_to(&sink, form.clone());
        assert_eq!(sink.calls(), vec![form]);
    }

    #[test]
    fn input_by_name_updates_one_field() {
        let mut form = filled();
        let field = apply_input(&mut form, "preferredDate", "2026-12-01").unwrap();

        assert_eq!(field, FormField::PreferredDate);
        assert_eq!(
            form,
            filled().with_field(FormField::PreferredDate, "2026-12-01")
        );
    }

    #[test]
    fn input_with_unknown_name_is_ignored() {
        let mut form = filled();
        let err = apply_input(&mut form, "zip", "12345").unwrap_err();

        assert!(matches!(err, SiteError::UnknownField(name) if name == "zip"));
        assert_eq!(form, filled());
    }

    #[test]
    fn date_min_takes_date_part() {
        assert_eq!(date_input_min("2026-10-19T08:15:00.000Z"), "2026-10-19");
        assert_eq!(date_input_min("2026-10-19"), "2026-10-19");
    }
}
