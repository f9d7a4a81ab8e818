//! Contact form state machine
//!
//! ```text
//! Idle ──submit──▶ Submitting ──2xx──────────▶ Success ──5s──▶ Idle
//!                       │
//!                       └──non-2xx / network──▶ Error (stays until next submit)
//! ```
//!
//! The controller owns no timers and performs no I/O. The caller sends the
//! payload returned by `begin_submit`, reports the outcome through `finish`,
//! and schedules `reset_after_success` when it gets a ticket back.

use crate::error::{Error, Result, ValidationError};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;

/// How long the success message stays before the form returns to idle
pub const SUCCESS_RESET_DELAY: Duration = Duration::from_secs(5);

/// Address offered when a submission fails
pub const FALLBACK_EMAIL: &str = "ayoolumimelehon@gmail.com";

/// Environment variable naming the form-processing endpoint. There is no
/// built-in default: without it, submissions end in the error state.
pub const ENDPOINT_ENV: &str = "PORTFOLIO_CONTACT_ENDPOINT";

pub const DEFAULT_INQUIRY_TYPE: &str = "contact";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl FormStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormStatus::Idle => "idle",
            FormStatus::Submitting => "submitting",
            FormStatus::Success => "success",
            FormStatus::Error => "error",
        }
    }
}

/// "I'm interested in" checkboxes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interest {
    ProductAnalytics,
    WorkforceAnalytics,
    MlAiSolutions,
    BiDashboards,
    DataEngineering,
    ResearchCollaboration,
    TrainingConsulting,
    Other,
}

impl Interest {
    pub const ALL: [Interest; 8] = [
        Interest::ProductAnalytics,
        Interest::WorkforceAnalytics,
        Interest::MlAiSolutions,
        Interest::BiDashboards,
        Interest::DataEngineering,
        Interest::ResearchCollaboration,
        Interest::TrainingConsulting,
        Interest::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Interest::ProductAnalytics => "Product Analytics",
            Interest::WorkforceAnalytics => "Workforce Analytics",
            Interest::MlAiSolutions => "ML/AI Solutions",
            Interest::BiDashboards => "BI & Dashboards",
            Interest::DataEngineering => "Data Engineering",
            Interest::ResearchCollaboration => "Research Collaboration",
            Interest::TrainingConsulting => "Training/Consulting",
            Interest::Other => "Other",
        }
    }
}

impl std::str::FromStr for Interest {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Interest::ALL
            .into_iter()
            .find(|i| i.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown interest: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Timeline {
    #[default]
    Urgent,
    OneToThreeMonths,
    ThreeToSixMonths,
    Flexible,
}

impl Timeline {
    pub const ALL: [Timeline; 4] = [
        Timeline::Urgent,
        Timeline::OneToThreeMonths,
        Timeline::ThreeToSixMonths,
        Timeline::Flexible,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Timeline::Urgent => "Urgent",
            Timeline::OneToThreeMonths => "1-3 months",
            Timeline::ThreeToSixMonths => "3-6 months",
            Timeline::Flexible => "Flexible",
        }
    }
}

impl std::str::FromStr for Timeline {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Timeline::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown timeline: {}. Use Urgent, 1-3 months, 3-6 months or Flexible", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Budget {
    #[default]
    UnderFiveK,
    FiveToFifteenK,
    OverFifteenK,
    Tbd,
}

impl Budget {
    pub const ALL: [Budget; 4] = [
        Budget::UnderFiveK,
        Budget::FiveToFifteenK,
        Budget::OverFifteenK,
        Budget::Tbd,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Budget::UnderFiveK => "<£5k",
            Budget::FiveToFifteenK => "£5-15k",
            Budget::OverFifteenK => "£15k+",
            Budget::Tbd => "TBD",
        }
    }
}

impl std::str::FromStr for Budget {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim();
        Budget::ALL
            .into_iter()
            .find(|b| b.label().eq_ignore_ascii_case(wanted))
            .or_else(|| match wanted.to_lowercase().as_str() {
                "<5k" | "under-5k" => Some(Budget::UnderFiveK),
                "5-15k" => Some(Budget::FiveToFifteenK),
                "15k+" | "over-15k" => Some(Budget::OverFifteenK),
                _ => None,
            })
            .ok_or_else(|| format!("Unknown budget: {}", s))
    }
}

/// What the visitor typed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub organization: String,
    pub interests: Vec<Interest>,
    pub message: String,
    pub timeline: Timeline,
    pub budget: Budget,
    pub inquiry_type: String,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            organization: String::new(),
            interests: Vec::new(),
            message: String::new(),
            timeline: Timeline::default(),
            budget: Budget::default(),
            inquiry_type: DEFAULT_INQUIRY_TYPE.to_string(),
        }
    }
}

impl ContactForm {
    /// Same checks the browser applies to `required` and `type="email"` fields
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ValidationError::MissingMessage);
        }
        Ok(())
    }

    pub fn toggle_interest(&mut self, interest: Interest) {
        if let Some(pos) = self.interests.iter().position(|i| *i == interest) {
            self.interests.remove(pos);
        } else {
            self.interests.push(interest);
        }
    }

    /// Fields in the order they are posted
    pub fn to_form_fields(&self) -> Vec<(&'static str, String)> {
        let interest = self
            .interests
            .iter()
            .map(Interest::label)
            .collect::<Vec<_>>()
            .join(", ");

        vec![
            ("name", self.name.trim().to_string()),
            ("email", self.email.trim().to_string()),
            ("organization", self.organization.trim().to_string()),
            ("interest", interest),
            ("message", self.message.trim().to_string()),
            ("timeline", self.timeline.label().to_string()),
            ("budget", self.budget.label().to_string()),
            ("type", self.inquiry_type.clone()),
        ]
    }

    /// `application/x-www-form-urlencoded` body
    pub fn to_urlencoded(&self) -> String {
        encode_form_fields(&self.to_form_fields())
    }
}

/// Join key/value pairs into an `application/x-www-form-urlencoded` body
pub fn encode_form_fields(fields: &[(&str, String)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields.iter().map(|(k, v)| (*k, v.as_str())))
        .finish()
}

/// Loose shape check, roughly what `<input type="email">` accepts
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
        && !domain.contains('@')
}

/// Wait out `SUCCESS_RESET_DELAY` on the caller's timer, then hand the
/// ticket to `apply`. Returns whatever `apply` reports.
pub async fn reset_after_delay<T, F>(timer: impl FnOnce(Duration) -> T, ticket: ResetTicket, apply: F) -> bool
where
    T: Future<Output = ()>,
    F: FnOnce(ResetTicket) -> bool,
{
    timer(SUCCESS_RESET_DELAY).await;
    apply(ticket)
}

/// Result of the single network call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The endpoint answered with this HTTP status
    Status(u16),
    /// The request never completed
    Transport(String),
    /// No endpoint is configured, so nothing was sent
    NotConfigured,
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Status(code) if (200..300).contains(code))
    }

    pub fn describe(&self) -> String {
        match self {
            SubmitOutcome::Status(code) => format!("endpoint returned HTTP {}", code),
            SubmitOutcome::Transport(reason) => format!("network error: {}", reason),
            SubmitOutcome::NotConfigured => "no contact endpoint is configured".to_string(),
        }
    }
}

/// Handed out on success; only the latest ticket may reset the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTicket(u64);

/// One form instance
#[derive(Debug, Clone, Default)]
pub struct ContactFormController {
    pub form: ContactForm,
    status: FormStatus,
    last_error: Option<String>,
    generation: u64,
}

impl ContactFormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Submit button is disabled while a request is in flight
    pub fn is_submit_disabled(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    /// Validate and move to `Submitting`, returning the fields to post.
    ///
    /// Fails without changing state when a submission is already in flight or
    /// the input is invalid.
    pub fn begin_submit(&mut self) -> Result<Vec<(&'static str, String)>> {
        if self.status == FormStatus::Submitting {
            return Err(Error::SubmissionInFlight);
        }
        self.form.validate()?;

        self.status = FormStatus::Submitting;
        self.last_error = None;
        self.generation += 1;
        Ok(self.form.to_form_fields())
    }

    /// Record the outcome of the request started by `begin_submit`.
    ///
    /// Success clears the input and returns a ticket for the delayed reset;
    /// failure keeps the input so the visitor can retry or copy it.
    pub fn finish(&mut self, outcome: SubmitOutcome) -> Option<ResetTicket> {
        if self.status != FormStatus::Submitting {
            return None;
        }

        if outcome.is_success() {
            self.status = FormStatus::Success;
            self.form = ContactForm {
                inquiry_type: self.form.inquiry_type.clone(),
                ..ContactForm::default()
            };
            Some(ResetTicket(self.generation))
        } else {
            self.status = FormStatus::Error;
            self.last_error = Some(outcome.describe());
            None
        }
    }

    /// Called `SUCCESS_RESET_DELAY` after a success. Stale tickets are ignored.
    pub fn reset_after_success(&mut self, ticket: ResetTicket) -> bool {
        if self.status == FormStatus::Success && ticket.0 == self.generation {
            self.status = FormStatus::Idle;
            true
        } else {
            false
        }
    }

    /// Text shown under the form for the current state
    pub fn status_message(&self) -> Option<String> {
        match self.status {
            FormStatus::Idle => None,
            FormStatus::Submitting => Some("Sending...".to_string()),
            FormStatus::Success => {
                Some("Thank you! Your message has been sent. I'll get back to you within 24 hours.".to_string())
            }
            FormStatus::Error => Some(format!(
                "Something went wrong. Please email me directly at {}",
                FALLBACK_EMAIL
            )),
        }
    }
}
