//! Support form state, validation and submission

use super::field::{apply_update, field_value, FieldName};
use super::mailto::MailtoLink;
use super::tags::default_tag;
use crate::launcher::Navigator;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Loose email shape: something, `@`, something, `.`, something.
/// No part may span a line terminator (LF, CR, U+2028, U+2029).
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\n\r\x{2028}\x{2029}]+@[^\n\r\x{2028}\x{2029}]+\.[^\n\r\x{2028}\x{2029}]+")
        .expect("email pattern is valid")
});

const INCOMPLETE_MESSAGE: &str = "Please complete all fields before submitting.";
const SENT_MESSAGE: &str = "Your email client should now open with the support request.";

/// Raw values of the four form fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub tag: String,
    pub description: String,
}

impl Default for FormData {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            tag: default_tag().to_string(),
            description: String::new(),
        }
    }
}

/// Whether the form data may be submitted. The tag is never checked.
pub fn compute_validity(data: &FormData) -> bool {
    !data.name.trim().is_empty()
        && EMAIL_SHAPE.is_match(&data.email)
        && !data.description.trim().is_empty()
}

/// Submission refused before any hand-off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Please complete all fields before submitting.")]
    IncompleteSubmission,
}

pub type SubmissionResult = Result<MailtoLink, SubmitError>;

/// Feedback from the latest submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Incomplete,
    Sent,
}

impl FormStatus {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Incomplete => INCOMPLETE_MESSAGE,
            Self::Sent => SENT_MESSAGE,
        }
    }
}

/// The support form controller
#[derive(Debug, Clone, Default)]
pub struct SupportForm {
    data: FormData,
    status: Option<FormStatus>,
}

impl SupportForm {
    pub fn value(&self, field: FieldName) -> &str {
        field_value(&self.data, field)
    }

    pub fn status(&self) -> Option<FormStatus> {
        self.status
    }

    /// Current status text, empty when no message is active
    pub fn status_message(&self) -> &str {
        self.status.map(|s| s.message()).unwrap_or("")
    }

    /// Replace a field value. Any edit clears the status message.
    pub fn update_field(&mut self, field: FieldName, value: impl Into<String>) {
        apply_update(&mut self.data, field, value.into());
        self.status = None;
    }

    /// Append a character to a text field
    pub fn push_char(&mut self, field: FieldName, c: char) {
        let mut value = self.value(field).to_string();
        value.push(c);
        self.update_field(field, value);
    }

    /// Remove the last character of a text field
    pub fn pop_char(&mut self, field: FieldName) {
        let mut value = self.value(field).to_string();
        if value.pop().is_some() {
            self.update_field(field, value);
        }
    }

    pub fn is_valid(&self) -> bool {
        compute_validity(&self.data)
    }

    /// Validate, compose the mailto link and hand it to the navigator
    pub fn submit(&mut self, navigator: &mut dyn Navigator) -> SubmissionResult {
        if !self.is_valid() {
            self.status = Some(FormStatus::Incomplete);
            return Err(SubmitError::IncompleteSubmission);
        }

        let link = MailtoLink::compose(&self.data);
        tracing::info!(subject = %link.subject, "Handing support request to mail client");
        tracing::debug!(body_len = link.body.len(), "Composed support request body");

        // The handler's outcome is not observable past this point
        if let Err(err) = navigator.navigate(&link.uri) {
            tracing::warn!("Failed to hand off mailto link: {err}");
        }

        self.status = Some(FormStatus::Sent);
        Ok(link)
    }
}
