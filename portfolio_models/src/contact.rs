use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use portfolio_utils::collapse_whitespace;
use regex::Regex;

use crate::{
    email_address::EmailAddress,
    macros::{id, nutype_string},
    SearchTerm,
};

pub static PHONE_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?1?[0-9]{9,15}$").unwrap());

id!(ContactMessageId);

/// A message submitted using the contact form.
///
/// Apart from `is_read` a message is never modified after it has been
/// created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub id: ContactMessageId,
    pub author: ContactMessageAuthor,
    pub content: ContactMessageContent,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessageAuthor {
    pub name: ContactMessageAuthorName,
    pub email: EmailAddress,
    pub phone: Option<PhoneNumber>,
}

nutype_string!(ContactMessageAuthorName(
    sanitize(trim),
    validate(not_empty, len_char_max = ContactMessageAuthorName::MAX_LENGTH)
));
impl ContactMessageAuthorName {
    pub const MAX_LENGTH: usize = 100;
}

nutype_string!(PhoneNumber(
    sanitize(trim),
    validate(regex = PHONE_NUMBER_REGEX)
));

nutype_string!(ContactMessageContent(
    sanitize(with = |s: String| collapse_whitespace(&s)),
    validate(len_char_min = ContactMessageContent::MIN_LENGTH)
));
impl ContactMessageContent {
    pub const MIN_LENGTH: usize = 10;
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactMessageFilter {
    pub is_read: Option<bool>,
    /// Matches name, email or phone number (case insensitive).
    pub search: Option<SearchTerm>,
}

impl std::fmt::Display for ContactMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {} ({})",
            *self.author.name,
            self.author.email,
            self.created_at.format("%Y-%m-%d %H:%M")
        )
    }
}
