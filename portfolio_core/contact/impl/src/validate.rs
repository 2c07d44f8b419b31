use std::sync::{Arc, LazyLock};

use portfolio_core_contact_contracts::validate::{
    ContactField, ContactFieldError, ContactFieldErrors, ContactRejection, ContactSubmission,
    ContactSubmissionValidator, ValidatedContactSubmission,
};
use portfolio_di::Build;
use portfolio_models::{
    contact::{ContactMessageAuthor, ContactMessageAuthorName, ContactMessageContent, PhoneNumber},
    email_address::EmailAddress,
};
use portfolio_shared_contracts::captcha::CaptchaService;
use portfolio_utils::{collapse_whitespace, trace_instrument};
use regex::Regex;

/// Lowercase hostname labels separated by dots. The last label is the top
/// level domain and has at least two characters.
static DOMAIN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z0-9][a-z0-9-]{0,61}[a-z0-9]$")
        .unwrap()
});

#[derive(Debug, Clone, Build)]
pub struct ContactSubmissionValidatorImpl<Captcha> {
    captcha: Captcha,
    config: ContactSubmissionValidatorConfig,
}

#[derive(Debug, Clone)]
pub struct ContactSubmissionValidatorConfig {
    /// Lowercase domains of throwaway email providers.
    disposable_domains: Arc<[String]>,
    /// Lowercase phrases which must not appear in a message.
    spam_keywords: Arc<[String]>,
}

impl ContactSubmissionValidatorConfig {
    pub const DEFAULT_DISPOSABLE_DOMAINS: &'static [&'static str] = &[
        "10minutemail.com",
        "tempmail.org",
        "guerrillamail.com",
        "mailinator.com",
        "throwaway.email",
    ];

    pub const DEFAULT_SPAM_KEYWORDS: &'static [&'static str] = &[
        "viagra",
        "casino",
        "lottery",
        "winner",
        "congratulations",
        "click here",
    ];

    pub fn new<D, K>(
        disposable_domains: impl IntoIterator<Item = D>,
        spam_keywords: impl IntoIterator<Item = K>,
    ) -> Self
    where
        D: AsRef<str>,
        K: AsRef<str>,
    {
        let normalize = |s: &str| s.trim().to_lowercase();
        Self {
            disposable_domains: disposable_domains
                .into_iter()
                .map(|x| normalize(x.as_ref()))
                .collect(),
            spam_keywords: spam_keywords
                .into_iter()
                .map(|x| normalize(x.as_ref()))
                .filter(|x| !x.is_empty())
                .collect(),
        }
    }
}

impl Default for ContactSubmissionValidatorConfig {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_DISPOSABLE_DOMAINS,
            Self::DEFAULT_SPAM_KEYWORDS,
        )
    }
}

impl<Captcha> ContactSubmissionValidator for ContactSubmissionValidatorImpl<Captcha>
where
    Captcha: CaptchaService,
{
    fn captcha_prompt(&self) -> String {
        self.captcha.prompt()
    }

    #[trace_instrument(skip(self, submission))]
    fn validate(
        &self,
        submission: &ContactSubmission,
    ) -> Result<ValidatedContactSubmission, ContactRejection> {
        if !submission.website.trim().is_empty() {
            return Err(ContactRejection::Honeypot);
        }

        let mut errors = ContactFieldErrors::new();

        let name = record(&mut errors, ContactField::Name, validate_name(&submission.name));
        let email = record(
            &mut errors,
            ContactField::Email,
            self.validate_email(&submission.email),
        );
        let phone = record(
            &mut errors,
            ContactField::Phone,
            validate_phone(&submission.phone),
        );
        let content = record(
            &mut errors,
            ContactField::Message,
            self.validate_message(&submission.message),
        );

        if !self.captcha.check(&submission.captcha) {
            errors.insert(ContactField::Captcha, vec![ContactFieldError::IncorrectAnswer]);
        }

        match (name, email, phone, content) {
            (Some(name), Some(email), Some(phone), Some(content)) if errors.is_empty() => {
                Ok(ValidatedContactSubmission {
                    author: ContactMessageAuthor { name, email, phone },
                    content,
                })
            }
            _ => Err(ContactRejection::Invalid(errors)),
        }
    }
}

impl<Captcha> ContactSubmissionValidatorImpl<Captcha> {
    fn validate_email(&self, email: &str) -> Result<EmailAddress, Vec<ContactFieldError>> {
        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return Err(vec![ContactFieldError::Required]);
        }

        let mut errors = Vec::new();

        let parsed = email
            .parse::<EmailAddress>()
            .ok()
            .filter(|x| DOMAIN_REGEX.is_match(x.domain()));
        if parsed.is_none() {
            errors.push(ContactFieldError::InvalidFormat);
        }

        // checked on the raw input so that malformed disposable addresses are
        // reported as such too
        let domain = email.rsplit_once('@').map(|(_, d)| d).unwrap_or_default();
        if self
            .config
            .disposable_domains
            .iter()
            .any(|x| x == domain)
        {
            errors.push(ContactFieldError::DisposableAddress);
        }

        match parsed {
            Some(email) if errors.is_empty() => Ok(email),
            _ => Err(errors),
        }
    }

    fn validate_message(
        &self,
        message: &str,
    ) -> Result<ContactMessageContent, Vec<ContactFieldError>> {
        let message = collapse_whitespace(message);
        if message.is_empty() {
            return Err(vec![ContactFieldError::Required]);
        }

        let mut errors = Vec::new();

        if message.chars().count() < ContactMessageContent::MIN_LENGTH {
            errors.push(ContactFieldError::TooShort);
        }

        let lowercase = message.to_lowercase();
        if self
            .config
            .spam_keywords
            .iter()
            .any(|x| lowercase.contains(x.as_str()))
        {
            errors.push(ContactFieldError::SpamContent);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        ContactMessageContent::try_new(message).map_err(|_| vec![ContactFieldError::TooShort])
    }
}

fn validate_name(name: &str) -> Result<ContactMessageAuthorName, Vec<ContactFieldError>> {
    let name = name.trim();
    if name.is_empty() {
        return Err(vec![ContactFieldError::Required]);
    }
    if name.chars().count() > ContactMessageAuthorName::MAX_LENGTH {
        return Err(vec![ContactFieldError::TooLong]);
    }

    ContactMessageAuthorName::try_new(name).map_err(|_| vec![ContactFieldError::InvalidFormat])
}

fn validate_phone(phone: &str) -> Result<Option<PhoneNumber>, Vec<ContactFieldError>> {
    let phone = phone.trim();
    if phone.is_empty() {
        return Ok(None);
    }

    PhoneNumber::try_new(phone)
        .map(Some)
        .map_err(|_| vec![ContactFieldError::InvalidPhoneFormat])
}

fn record<T>(
    errors: &mut ContactFieldErrors,
    field: ContactField,
    result: Result<T, Vec<ContactFieldError>>,
) -> Option<T> {
    result
        .map_err(|err| {
            errors.insert(field, err);
        })
        .ok()
}
