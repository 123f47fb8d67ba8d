//! Contact form validation and recording.
//!
//! Submissions are checked against a fixed schema (four non-empty strings, one of
//! them a well-formed email) before anything else happens. Accepted submissions
//! go to a [`ContactRecorder`]; the default recorder only writes a log line.

use crate::models::{ContactForm, ContactSubmission};
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::LazyLock;

pub const CONTACT_ACKNOWLEDGEMENT: &str =
    "Thank you for your message! We'll get back to you soon.";

// local@label.label...tld; local part ends on a non-dot, tld is 2+ letters
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email regex is valid")
});

/// Validate email address format.
///
/// The regex crate has no lookahead, so the leading-dot and double-dot rules
/// are checked outside the pattern.
pub fn is_valid_email(email: &str) -> bool {
    email.len() <= 254
        && !email.starts_with('.')
        && !email.contains("..")
        && EMAIL_REGEX.is_match(email)
}

/// One failed rule on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub code: &'static str,
    pub path: Vec<&'static str>,
    pub message: &'static str,
}

/// All issues found in a request body, serialized as the 400 error payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    pub name: &'static str,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationErrors {
    fn new(issues: Vec<ValidationIssue>) -> Self {
        Self {
            name: "ValidationError",
            issues,
        }
    }

    /// Names of the offending fields, in schema order.
    pub fn fields(&self) -> Vec<&'static str> {
        self.issues
            .iter()
            .filter_map(|issue| issue.path.first().copied())
            .collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .issues
            .iter()
            .map(|issue| format!("{}: {}", issue.path.join("."), issue.message))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

fn received_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "Expected string, received null",
        Value::Bool(_) => "Expected string, received boolean",
        Value::Number(_) => "Expected string, received number",
        Value::Array(_) => "Expected string, received array",
        Value::Object(_) => "Expected string, received object",
        Value::String(_) => "Expected string, received string",
    }
}

/// Extracts a string field, recording an issue when it is absent or not a string.
fn string_field(
    field: &'static str,
    value: Option<Value>,
    issues: &mut Vec<ValidationIssue>,
) -> Option<String> {
    match value {
        None => {
            issues.push(ValidationIssue {
                code: "invalid_type",
                path: vec![field],
                message: "Required",
            });
            None
        }
        Some(Value::String(s)) => Some(s),
        Some(other) => {
            issues.push(ValidationIssue {
                code: "invalid_type",
                path: vec![field],
                message: received_type(&other),
            });
            None
        }
    }
}

fn required_string(
    field: &'static str,
    value: Option<Value>,
    issues: &mut Vec<ValidationIssue>,
) -> Option<String> {
    match string_field(field, value, issues)? {
        v if v.is_empty() => {
            issues.push(ValidationIssue {
                code: "too_small",
                path: vec![field],
                message: "String must contain at least 1 character(s)",
            });
            None
        }
        v => Some(v),
    }
}

fn email_string(value: Option<Value>, issues: &mut Vec<ValidationIssue>) -> Option<String> {
    let email = string_field("email", value, issues)?;
    if !is_valid_email(&email) {
        issues.push(ValidationIssue {
            code: "invalid_string",
            path: vec!["email"],
            message: "Invalid email",
        });
        return None;
    }
    Some(email)
}

/// Check a raw contact form against the schema.
///
/// Every field is checked so that the caller gets all issues at once.
pub fn validate_contact(form: ContactForm) -> Result<ContactSubmission, ValidationErrors> {
    let mut issues = Vec::new();

    let name = required_string("name", form.name, &mut issues);
    let email = email_string(form.email, &mut issues);
    let subject = required_string("subject", form.subject, &mut issues);
    let message = required_string("message", form.message, &mut issues);

    match (name, email, subject, message) {
        (Some(name), Some(email), Some(subject), Some(message)) if issues.is_empty() => {
            Ok(ContactSubmission {
                name,
                email,
                subject,
                message,
            })
        }
        _ => Err(ValidationErrors::new(issues)),
    }
}

/// Destination for accepted contact submissions.
pub trait ContactRecorder: Send + Sync {
    fn record(&self, submission: &ContactSubmission);
}

/// Writes each submission to the log. Nothing is persisted or forwarded.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogContactRecorder;

impl ContactRecorder for LogContactRecorder {
    fn record(&self, submission: &ContactSubmission) {
        tracing::info!(
            name = %submission.name,
            email = %submission.email,
            subject = %submission.subject,
            message = %submission.message,
            "Contact form submission"
        );
    }
}
