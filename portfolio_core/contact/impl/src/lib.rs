use std::sync::Arc;

use portfolio_core_contact_contracts::{
    validate::{
        ContactRejection, ContactSubmission, ContactSubmissionValidator,
        ValidatedContactSubmission,
    },
    ContactDeleteMessageError, ContactFeatureService, ContactGetMessageError,
    ContactListMessagesError, ContactMessageListQuery, ContactMessageListResult,
    ContactSubmitError, ContactSubmitOutcome, ContactUpdateMessageReadError,
};
use portfolio_di::Build;
use portfolio_email_contracts::template::TemplateEmailService;
use portfolio_models::{
    contact::{ContactMessage, ContactMessageId},
    email_address::EmailAddressWithName,
};
use portfolio_persistence_contracts::{contact::ContactRepository, Database, Transaction};
use portfolio_shared_contracts::{id::IdService, time::TimeService};
use portfolio_templates_contracts::ContactNotificationTemplate;
use portfolio_utils::trace_instrument;
use tracing::{error, info, warn};

pub mod validate;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Build)]
#[cfg_attr(test, derive(Default))]
pub struct ContactFeatureServiceImpl<Db, Validator, Id, Time, TemplateEmail, ContactRepo>
{
    db: Db,
    validator: Validator,
    id: Id,
    time: Time,
    template_email: TemplateEmail,
    contact_repo: ContactRepo,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    /// Receives a notification for every new message.
    pub email: Arc<EmailAddressWithName>,
}

impl<Db, Validator, Id, Time, TemplateEmail, ContactRepo> ContactFeatureService
    for ContactFeatureServiceImpl<Db, Validator, Id, Time, TemplateEmail, ContactRepo>
where
    Db: Database,
    Validator: ContactSubmissionValidator,
    Id: IdService,
    Time: TimeService,
    TemplateEmail: TemplateEmailService,
    ContactRepo: ContactRepository<Db::Transaction>,
{
    fn get_captcha_prompt(&self) -> String {
        self.validator.captcha_prompt()
    }

    #[trace_instrument(skip(self, submission))]
    async fn submit(
        &self,
        submission: ContactSubmission,
    ) -> Result<ContactSubmitOutcome, ContactSubmitError> {
        let ValidatedContactSubmission { author, content } =
            match self.validator.validate(&submission) {
                Ok(validated) => validated,
                Err(rejection) => {
                    match &rejection {
                        ContactRejection::Honeypot => info!("Honeypot triggered"),
                        ContactRejection::Invalid(errors) => {
                            info!(fields = ?errors.keys().collect::<Vec<_>>(), "Invalid submission")
                        }
                    }
                    return Ok(ContactSubmitOutcome::Rejected(rejection));
                }
            };

        let message = ContactMessage {
            id: self.id.generate(),
            author,
            content,
            created_at: self.time.now(),
            is_read: false,
        };

        let mut txn = self.db.begin_transaction().await?;
        self.contact_repo.create(&mut txn, &message).await?;
        txn.commit().await?;

        self.send_notification(&message).await;

        Ok(ContactSubmitOutcome::Accepted(message))
    }

    #[trace_instrument(skip(self))]
    async fn list_messages(
        &self,
        query: ContactMessageListQuery,
    ) -> Result<ContactMessageListResult, ContactListMessagesError> {
        let mut txn = self.db.begin_transaction().await?;

        let total = self.contact_repo.count(&mut txn, &query.filter).await?;
        let messages = self
            .contact_repo
            .list(&mut txn, &query.filter, query.pagination)
            .await?;

        Ok(ContactMessageListResult { total, messages })
    }

    #[trace_instrument(skip(self))]
    async fn get_message(&self, id: ContactMessageId) -> Result<ContactMessage, ContactGetMessageError> {
        let mut txn = self.db.begin_transaction().await?;

        self.contact_repo
            .get(&mut txn, id)
            .await?
            .ok_or(ContactGetMessageError::NotFound)
    }

    #[trace_instrument(skip(self))]
    async fn update_message_read(
        &self,
        id: ContactMessageId,
        is_read: bool,
    ) -> Result<(), ContactUpdateMessageReadError> {
        let mut txn = self.db.begin_transaction().await?;

        if !self.contact_repo.update_read(&mut txn, id, is_read).await? {
            return Err(ContactUpdateMessageReadError::NotFound);
        }

        txn.commit().await?;

        Ok(())
    }

    #[trace_instrument(skip(self))]
    async fn delete_message(&self, id: ContactMessageId) -> Result<(), ContactDeleteMessageError> {
        let mut txn = self.db.begin_transaction().await?;

        if !self.contact_repo.delete(&mut txn, id).await? {
            return Err(ContactDeleteMessageError::NotFound);
        }

        txn.commit().await?;

        Ok(())
    }
}

impl<Db, Validator, Id, Time, TemplateEmail, ContactRepo>
    ContactFeatureServiceImpl<Db, Validator, Id, Time, TemplateEmail, ContactRepo>
where
    TemplateEmail: TemplateEmailService,
{
    /// The message has already been stored at this point, so errors are only
    /// logged.
    async fn send_notification(&self, message: &ContactMessage) {
        let data = notification_template(message);
        let reply_to = message
            .author
            .email
            .clone()
            .with_name((*message.author.name).clone());

        match self
            .template_email
            .send_contact_notification_email((*self.config.email).clone(), reply_to, &data)
            .await
        {
            Ok(true) => {}
            Ok(false) => warn!(id = %message.id, "Contact notification has been rejected"),
            Err(err) => {
                error!(id = %message.id, "Failed to send contact notification: {err}")
            }
        }
    }
}

fn notification_template(message: &ContactMessage) -> ContactNotificationTemplate {
    ContactNotificationTemplate {
        name: (*message.author.name).clone(),
        email: message.author.email.to_string(),
        phone: message.author.phone.as_ref().map(|x| (**x).clone()),
        message: (*message.content).clone(),
        submitted_at: message
            .created_at
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string(),
    }
}

#[cfg(test)]
impl Default for ContactFeatureConfig {
    fn default() -> Self {
        Self {
            email: Arc::new("Portfolio <contact@example.com>".parse().unwrap()),
        }
    }
}
