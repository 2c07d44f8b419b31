use std::collections::BTreeMap;

use portfolio_models::contact::{ContactMessageAuthor, ContactMessageContent};

/// Checks a raw contact form submission.
///
/// Implementations must not perform any I/O.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactSubmissionValidator: Send + Sync + 'static {
    /// The question whose answer is expected in [`ContactSubmission::captcha`].
    fn captcha_prompt(&self) -> String;

    fn validate(
        &self,
        submission: &ContactSubmission,
    ) -> Result<ValidatedContactSubmission, ContactRejection>;
}

#[cfg(feature = "mock")]
impl MockContactSubmissionValidator {
    pub fn with_captcha_prompt(mut self, prompt: impl Into<String>) -> Self {
        let prompt = prompt.into();
        self.expect_captcha_prompt()
            .once()
            .return_once(|| prompt);
        self
    }

    pub fn with_validate(
        mut self,
        submission: ContactSubmission,
        result: Result<ValidatedContactSubmission, ContactRejection>,
    ) -> Self {
        self.expect_validate()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(|_| result);
        self
    }
}

/// The unvalidated values of the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    /// Hidden from human visitors. Bots tend to fill in every field.
    pub website: String,
    pub captcha: String,
}

/// The normalized values of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedContactSubmission {
    pub author: ContactMessageAuthor,
    pub content: ContactMessageContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactRejection {
    /// The honeypot field has been filled in. No details are revealed to the
    /// submitter.
    Honeypot,
    Invalid(ContactFieldErrors),
}

pub type ContactFieldErrors = BTreeMap<ContactField, Vec<ContactFieldError>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Message,
    Captcha,
}

impl ContactField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Message => "message",
            Self::Captcha => "captcha",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactFieldError {
    Required,
    TooLong,
    InvalidFormat,
    DisposableAddress,
    InvalidPhoneFormat,
    TooShort,
    SpamContent,
    IncorrectAnswer,
}

impl ContactFieldError {
    pub fn reason(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::TooLong => "too long",
            Self::InvalidFormat => "invalid format",
            Self::DisposableAddress => "disposable address not allowed",
            Self::InvalidPhoneFormat => "invalid phone format",
            Self::TooShort => "too short",
            Self::SpamContent => "spam content detected",
            Self::IncorrectAnswer => "incorrect answer",
        }
    }
}

impl std::fmt::Display for ContactFieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.reason())
    }
}
