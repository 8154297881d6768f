//! Contact submission data model and request validation.
//!
//! [`ContactRequest`] is the untrusted inbound shape. Validation is a pure
//! function of the input and produces either a [`NewContactSubmission`]
//! (the only type the storage ports accept for inserts) or a
//! [`ContactValidationError`] aggregating every offending field. This is
//! what guarantees the store never sees unvalidated data.

use std::fmt;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Standard liberal email shape: no whitespace, exactly one `@`,
        // at least one dot in the domain part.
        let pattern = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Validation failure for a single contact request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactFieldError {
    /// `name` was absent or empty after trimming.
    MissingName,
    /// `email` was absent or empty after trimming.
    MissingEmail,
    /// `email` was present but not valid email syntax.
    InvalidEmail,
    /// `message` was absent or empty after trimming.
    MissingMessage,
}

impl ContactFieldError {
    /// Name of the offending request field.
    #[must_use]
    pub fn field(self) -> &'static str {
        match self {
            Self::MissingName => "name",
            Self::MissingEmail | Self::InvalidEmail => "email",
            Self::MissingMessage => "message",
        }
    }

    /// Stable machine-readable reason code.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::MissingName | Self::MissingEmail | Self::MissingMessage => "missing_field",
            Self::InvalidEmail => "invalid_email",
        }
    }
}

impl fmt::Display for ContactFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => write!(f, "name must not be empty"),
            Self::MissingEmail => write!(f, "email must not be empty"),
            Self::InvalidEmail => write!(f, "email must be a valid email address"),
            Self::MissingMessage => write!(f, "message must not be empty"),
        }
    }
}

/// Aggregated validation failure for a contact request.
///
/// ## Invariants
/// - Holds at least one [`ContactFieldError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactValidationError(Vec<ContactFieldError>);

impl ContactValidationError {
    /// Per-field failures, in request-field order.
    #[must_use]
    pub fn fields(&self) -> &[ContactFieldError] {
        &self.0
    }
}

impl fmt::Display for ContactValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for field in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ContactValidationError {}

/// Validated email address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`] from untrusted input.
    ///
    /// The value is trimmed before validation.
    ///
    /// # Errors
    /// Returns [`ContactFieldError::MissingEmail`] for blank input and
    /// [`ContactFieldError::InvalidEmail`] for malformed syntax.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ContactFieldError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ContactFieldError::MissingEmail);
        }
        if !email_regex().is_match(trimmed) {
            return Err(ContactFieldError::InvalidEmail);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

/// Untrusted inbound contact request shape.
///
/// All fields are optional at the serde layer so that missing keys reach
/// [`ContactRequest::validate`] and surface as field errors in the API's
/// own envelope rather than as a deserialisation failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactRequest {
    /// Sender name; required, non-empty.
    pub name: Option<String>,
    /// Sender email; required, valid email syntax.
    pub email: Option<String>,
    /// Sender company; optional, blank values treated as absent.
    pub company: Option<String>,
    /// Enquiry body; required, non-empty.
    pub message: Option<String>,
}

impl ContactRequest {
    /// Validate the request into a [`NewContactSubmission`].
    ///
    /// Pure function of the input; collects every field failure rather than
    /// stopping at the first.
    ///
    /// # Errors
    /// Returns a [`ContactValidationError`] naming each offending field.
    pub fn validate(self) -> Result<NewContactSubmission, ContactValidationError> {
        let mut failures = Vec::new();

        let name = non_blank(self.name);
        if name.is_none() {
            failures.push(ContactFieldError::MissingName);
        }

        let email = match self.email {
            Some(raw) => match EmailAddress::new(raw) {
                Ok(address) => Some(address),
                Err(failure) => {
                    failures.push(failure);
                    None
                }
            },
            None => {
                failures.push(ContactFieldError::MissingEmail);
                None
            }
        };

        // Blank company strings collapse to absent so the stored row holds
        // NULL rather than an empty value.
        let company = non_blank(self.company).map(|value| value.trim().to_owned());

        let message = non_blank(self.message);
        if message.is_none() {
            failures.push(ContactFieldError::MissingMessage);
        }

        match (name, email, message) {
            (Some(name), Some(email), Some(message)) if failures.is_empty() => {
                Ok(NewContactSubmission {
                    name,
                    email,
                    company,
                    message,
                })
            }
            _ => Err(ContactValidationError(failures)),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|candidate| !candidate.trim().is_empty())
}

/// Validated contact submission awaiting insertion.
///
/// ## Invariants
/// - Only constructable through [`ContactRequest::validate`], so every
///   instance has passed the schema rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactSubmission {
    name: String,
    email: EmailAddress,
    company: Option<String>,
    message: String,
}

impl NewContactSubmission {
    /// Sender name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sender email address.
    #[must_use]
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Sender company, if supplied.
    #[must_use]
    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    /// Enquiry body.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Stable contact submission identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(Uuid);

impl SubmissionId {
    /// Wrap an identifier read back from the store.
    #[must_use]
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a new random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stored contact submission row.
///
/// Immutable once persisted; the store assigns `id` and `created_at`.
/// The email field is plain text here: validation happens at the inbound
/// boundary and persisted rows are trusted on read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    /// Store-assigned identifier.
    pub id: SubmissionId,
    /// Sender name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Sender company; `None` when not supplied.
    pub company: Option<String>,
    /// Enquiry body.
    pub message: String,
    /// Store-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn request(
        name: Option<&str>,
        email: Option<&str>,
        company: Option<&str>,
        message: Option<&str>,
    ) -> ContactRequest {
        ContactRequest {
            name: name.map(str::to_owned),
            email: email.map(str::to_owned),
            company: company.map(str::to_owned),
            message: message.map(str::to_owned),
        }
    }

    #[test]
    fn valid_request_produces_submission() {
        let validated = request(
            Some("Jane Doe"),
            Some("jane@acme.com"),
            Some("Acme"),
            Some("Need 10 units"),
        )
        .validate()
        .expect("valid request");

        assert_eq!(validated.name(), "Jane Doe");
        assert_eq!(validated.email().as_ref(), "jane@acme.com");
        assert_eq!(validated.company(), Some("Acme"));
        assert_eq!(validated.message(), "Need 10 units");
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("   "))]
    fn blank_company_collapses_to_absent(#[case] company: Option<&str>) {
        let validated = request(Some("Jane"), Some("jane@acme.com"), company, Some("hi"))
            .validate()
            .expect("valid request");
        assert_eq!(validated.company(), None);
    }

    #[rstest]
    #[case(request(None, Some("jane@acme.com"), None, Some("hi")), ContactFieldError::MissingName)]
    #[case(request(Some(""), Some("jane@acme.com"), None, Some("hi")), ContactFieldError::MissingName)]
    #[case(request(Some("Jane"), None, None, Some("hi")), ContactFieldError::MissingEmail)]
    #[case(request(Some("Jane"), Some("not-an-email"), None, Some("hi")), ContactFieldError::InvalidEmail)]
    #[case(request(Some("Jane"), Some("a@b"), None, Some("hi")), ContactFieldError::InvalidEmail)]
    #[case(request(Some("Jane"), Some("jane@acme.com"), None, None), ContactFieldError::MissingMessage)]
    #[case(request(Some("Jane"), Some("jane@acme.com"), None, Some(" ")), ContactFieldError::MissingMessage)]
    fn invalid_requests_name_the_offending_field(
        #[case] req: ContactRequest,
        #[case] expected: ContactFieldError,
    ) {
        let error = req.validate().expect_err("invalid request");
        assert_eq!(error.fields(), &[expected]);
        assert!(error.to_string().contains(expected.field()));
    }

    #[test]
    fn failures_aggregate_across_fields() {
        let error = request(None, Some("bad"), None, None)
            .validate()
            .expect_err("invalid request");

        assert_eq!(
            error.fields(),
            &[
                ContactFieldError::MissingName,
                ContactFieldError::InvalidEmail,
                ContactFieldError::MissingMessage,
            ]
        );
        let message = error.to_string();
        assert!(message.contains("name"));
        assert!(message.contains("email"));
        assert!(message.contains("message"));
    }

    #[rstest]
    #[case("jane@acme.com")]
    #[case("  jane@acme.com  ")]
    #[case("first.last+tag@sub.example.co")]
    fn email_accepts_standard_shapes(#[case] raw: &str) {
        let address = EmailAddress::new(raw).expect("valid email");
        assert_eq!(address.as_ref(), raw.trim());
    }

    #[rstest]
    #[case("not-an-email")]
    #[case("a@b")]
    #[case("two@@example.com")]
    #[case("spaces in@example.com")]
    fn email_rejects_malformed_shapes(#[case] raw: &str) {
        assert_eq!(EmailAddress::new(raw), Err(ContactFieldError::InvalidEmail));
    }
}
