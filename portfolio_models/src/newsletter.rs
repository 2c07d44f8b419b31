use chrono::{DateTime, Utc};

use crate::email_address::EmailAddress;

/// A newsletter subscription. The email address is stored in lowercase and
/// is unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsletterSubscription {
    pub email: EmailAddress,
    pub subscribed_at: DateTime<Utc>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NewsletterSubscriptionFilter {
    pub is_active: Option<bool>,
}
