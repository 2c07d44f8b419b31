use std::future::Future;

use portfolio_models::{
    contact::{ContactMessage, ContactMessageFilter, ContactMessageId},
    pagination::PaginationSlice,
};
use thiserror::Error;
use validate::{ContactRejection, ContactSubmission};

pub mod validate;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Return the question which has to be answered to submit the contact
    /// form.
    fn get_captcha_prompt(&self) -> String;

    /// Validate a contact form submission and store it as a new message.
    ///
    /// Rejected submissions are returned as
    /// [`ContactSubmitOutcome::Rejected`] and never touch the database. After
    /// a message has been stored, a notification is sent to the site owner.
    /// Failing to send this notification does not affect the outcome.
    fn submit(
        &self,
        submission: ContactSubmission,
    ) -> impl Future<Output = Result<ContactSubmitOutcome, ContactSubmitError>> + Send;

    /// Return all messages matching the given query.
    fn list_messages(
        &self,
        query: ContactMessageListQuery,
    ) -> impl Future<Output = Result<ContactMessageListResult, ContactListMessagesError>> + Send;

    /// Return the message with the given id.
    fn get_message(
        &self,
        id: ContactMessageId,
    ) -> impl Future<Output = Result<ContactMessage, ContactGetMessageError>> + Send;

    /// Mark a message as read or unread.
    fn update_message_read(
        &self,
        id: ContactMessageId,
        is_read: bool,
    ) -> impl Future<Output = Result<(), ContactUpdateMessageReadError>> + Send;

    /// Delete a message.
    fn delete_message(
        &self,
        id: ContactMessageId,
    ) -> impl Future<Output = Result<(), ContactDeleteMessageError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactSubmitOutcome {
    Accepted(ContactMessage),
    Rejected(ContactRejection),
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactMessageListQuery {
    pub pagination: PaginationSlice,
    pub filter: ContactMessageFilter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessageListResult {
    pub total: u64,
    pub messages: Vec<ContactMessage>,
}

#[derive(Debug, Error)]
pub enum ContactListMessagesError {
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum ContactGetMessageError {
    #[error("The message does not exist.")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum ContactUpdateMessageReadError {
    #[error("The message does not exist.")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum ContactDeleteMessageError {
    #[error("The message does not exist.")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_get_captcha_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.expect_get_captcha_prompt()
            .once()
            .return_const(prompt.into());
        self
    }

    pub fn with_submit(
        mut self,
        submission: ContactSubmission,
        result: Result<ContactSubmitOutcome, ContactSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_list_messages(
        mut self,
        query: ContactMessageListQuery,
        result: ContactMessageListResult,
    ) -> Self {
        self.expect_list_messages()
            .once()
            .with(mockall::predicate::eq(query))
            .return_once(|_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_get_message(
        mut self,
        id: ContactMessageId,
        result: Result<ContactMessage, ContactGetMessageError>,
    ) -> Self {
        self.expect_get_message()
            .once()
            .with(mockall::predicate::eq(id))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_update_message_read(
        mut self,
        id: ContactMessageId,
        is_read: bool,
        result: Result<(), ContactUpdateMessageReadError>,
    ) -> Self {
        self.expect_update_message_read()
            .once()
            .with(mockall::predicate::eq(id), mockall::predicate::eq(is_read))
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_delete_message(
        mut self,
        id: ContactMessageId,
        result: Result<(), ContactDeleteMessageError>,
    ) -> Self {
        self.expect_delete_message()
            .once()
            .with(mockall::predicate::eq(id))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
