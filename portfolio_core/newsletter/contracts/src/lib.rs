use std::future::Future;

use portfolio_models::{
    email_address::EmailAddress,
    newsletter::{NewsletterSubscription, NewsletterSubscriptionFilter},
};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait NewsletterFeatureService: Send + Sync + 'static {
    /// Subscribe an email address to the newsletter.
    ///
    /// The address is stored in lowercase. An inactive subscription of the
    /// same address is reactivated. If enabled, a welcome email is sent
    /// afterwards. Failing to send this email does not affect the result.
    fn subscribe(
        &self,
        email: EmailAddress,
    ) -> impl Future<Output = Result<NewsletterSubscription, NewsletterSubscribeError>> + Send;

    /// Return all subscriptions matching the given filter.
    fn list_subscriptions(
        &self,
        filter: NewsletterSubscriptionFilter,
    ) -> impl Future<Output = Result<Vec<NewsletterSubscription>, NewsletterListSubscriptionsError>>
           + Send;

    /// Activate or deactivate a subscription.
    fn set_active(
        &self,
        email: EmailAddress,
        is_active: bool,
    ) -> impl Future<Output = Result<(), NewsletterSetActiveError>> + Send;
}

#[derive(Debug, Error)]
pub enum NewsletterSubscribeError {
    #[error("The email address is already subscribed.")]
    AlreadySubscribed,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum NewsletterListSubscriptionsError {
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum NewsletterSetActiveError {
    #[error("The email address is not subscribed.")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockNewsletterFeatureService {
    pub fn with_subscribe(
        mut self,
        email: EmailAddress,
        result: Result<NewsletterSubscription, NewsletterSubscribeError>,
    ) -> Self {
        self.expect_subscribe()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_list_subscriptions(
        mut self,
        filter: NewsletterSubscriptionFilter,
        result: Vec<NewsletterSubscription>,
    ) -> Self {
        self.expect_list_subscriptions()
            .once()
            .with(mockall::predicate::eq(filter))
            .return_once(|_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_set_active(
        mut self,
        email: EmailAddress,
        is_active: bool,
        result: Result<(), NewsletterSetActiveError>,
    ) -> Self {
        self.expect_set_active()
            .once()
            .with(mockall::predicate::eq(email), mockall::predicate::eq(is_active))
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }
}
