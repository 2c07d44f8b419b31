use std::future::Future;

use portfolio_models::email_address::EmailAddressWithName;
use portfolio_templates_contracts::{ContactNotificationTemplate, NewsletterWelcomeTemplate};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateEmailService: Send + Sync + 'static {
    /// Notifies the site owner about a new contact message. Replies go to
    /// `reply_to`.
    fn send_contact_notification_email(
        &self,
        recipient: EmailAddressWithName,
        reply_to: EmailAddressWithName,
        data: &ContactNotificationTemplate,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;

    fn send_newsletter_welcome_email(
        &self,
        recipient: EmailAddressWithName,
        data: &NewsletterWelcomeTemplate,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;
}

#[cfg(feature = "mock")]
impl MockTemplateEmailService {
    pub fn with_send_contact_notification_email(
        mut self,
        recipient: EmailAddressWithName,
        reply_to: EmailAddressWithName,
        data: ContactNotificationTemplate,
        result: anyhow::Result<bool>,
    ) -> Self {
        self.expect_send_contact_notification_email()
            .once()
            .with(
                mockall::predicate::eq(recipient),
                mockall::predicate::eq(reply_to),
                mockall::predicate::eq(data),
            )
            .return_once(|_, _, _| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_send_newsletter_welcome_email(
        mut self,
        recipient: EmailAddressWithName,
        data: NewsletterWelcomeTemplate,
        result: anyhow::Result<bool>,
    ) -> Self {
        self.expect_send_newsletter_welcome_email()
            .once()
            .with(
                mockall::predicate::eq(recipient),
                mockall::predicate::eq(data),
            )
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }
}
