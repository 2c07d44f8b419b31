use std::future::Future;

use portfolio_models::{
    email_address::EmailAddress,
    newsletter::{NewsletterSubscription, NewsletterSubscriptionFilter},
};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait NewsletterRepository<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    /// Returns all subscriptions matching the given filter, newest first.
    fn list(
        &self,
        txn: &mut Txn,
        filter: NewsletterSubscriptionFilter,
    ) -> impl Future<Output = anyhow::Result<Vec<NewsletterSubscription>>> + Send;

    /// Returns the subscription of the given email address (case
    /// insensitive).
    fn get(
        &self,
        txn: &mut Txn,
        email: &EmailAddress,
    ) -> impl Future<Output = anyhow::Result<Option<NewsletterSubscription>>> + Send;

    /// Creates a new subscription.
    ///
    /// Returns an error if the email address is already subscribed.
    fn create(
        &self,
        txn: &mut Txn,
        subscription: &NewsletterSubscription,
    ) -> impl Future<Output = Result<(), NewsletterRepoError>> + Send;

    /// Sets the active flag of a subscription. Returns `false` if the email
    /// address is not subscribed.
    fn update_active(
        &self,
        txn: &mut Txn,
        email: &EmailAddress,
        is_active: bool,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;
}

#[derive(Debug, Error)]
pub enum NewsletterRepoError {
    #[error("The email address is already subscribed.")]
    Conflict,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockNewsletterRepository<Txn> {
    pub fn with_list(
        mut self,
        filter: NewsletterSubscriptionFilter,
        result: Vec<NewsletterSubscription>,
    ) -> Self {
        self.expect_list()
            .once()
            .with(mockall::predicate::always(), mockall::predicate::eq(filter))
            .return_once(|_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_get(mut self, email: EmailAddress, result: Option<NewsletterSubscription>) -> Self {
        self.expect_get()
            .once()
            .with(mockall::predicate::always(), mockall::predicate::eq(email))
            .return_once(|_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_create(
        mut self,
        subscription: NewsletterSubscription,
        result: Result<(), NewsletterRepoError>,
    ) -> Self {
        self.expect_create()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(subscription),
            )
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_update_active(mut self, email: EmailAddress, is_active: bool, result: bool) -> Self {
        self.expect_update_active()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(email),
                mockall::predicate::eq(is_active),
            )
            .return_once(move |_, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
