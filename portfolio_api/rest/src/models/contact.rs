use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use portfolio_core_contact_contracts::validate::{ContactFieldErrors, ContactSubmission};
use portfolio_models::contact::{
    ContactMessage, ContactMessageAuthorName, ContactMessageContent, ContactMessageId,
    PhoneNumber,
};
use serde::{Deserialize, Serialize};

/// The fields of the contact form. Missing fields are treated as empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub website: String,
    pub captcha: String,
}

impl From<ApiContactSubmission> for ContactSubmission {
    fn from(value: ApiContactSubmission) -> Self {
        Self {
            name: value.name,
            email: value.email,
            phone: value.phone,
            message: value.message,
            website: value.website,
            captcha: value.captcha,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiContactMessage {
    pub id: ContactMessageId,
    pub name: ContactMessageAuthorName,
    pub email: String,
    pub phone: Option<PhoneNumber>,
    pub message: ContactMessageContent,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
}

impl From<ContactMessage> for ApiContactMessage {
    fn from(value: ContactMessage) -> Self {
        Self {
            id: value.id,
            name: value.author.name,
            email: value.author.email.to_string(),
            phone: value.author.phone,
            message: value.content,
            created_at: value.created_at,
            is_read: value.is_read,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiCaptcha {
    pub prompt: String,
}

/// Reasons per field name, e.g. `{"email": ["invalid format"]}`.
#[derive(Debug, Serialize)]
pub struct ApiContactFieldErrors {
    pub errors: BTreeMap<&'static str, Vec<&'static str>>,
}

impl From<ContactFieldErrors> for ApiContactFieldErrors {
    fn from(value: ContactFieldErrors) -> Self {
        Self {
            errors: value
                .into_iter()
                .map(|(field, errors)| {
                    (
                        field.as_str(),
                        errors.into_iter().map(|x| x.reason()).collect(),
                    )
                })
                .collect(),
        }
    }
}
