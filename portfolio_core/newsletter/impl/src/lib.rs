use anyhow::Context;
use portfolio_core_newsletter_contracts::{
    NewsletterFeatureService, NewsletterListSubscriptionsError, NewsletterSetActiveError,
    NewsletterSubscribeError,
};
use portfolio_di::Build;
use portfolio_email_contracts::template::TemplateEmailService;
use portfolio_models::{
    email_address::EmailAddress,
    newsletter::{NewsletterSubscription, NewsletterSubscriptionFilter},
};
use portfolio_persistence_contracts::{
    newsletter::{NewsletterRepoError, NewsletterRepository},
    Database, Transaction,
};
use portfolio_shared_contracts::time::TimeService;
use portfolio_templates_contracts::NewsletterWelcomeTemplate;
use portfolio_utils::trace_instrument;
use tracing::{error, warn};

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Default, Build)]
pub struct NewsletterFeatureServiceImpl<Db, Time, TemplateEmail, NewsletterRepo> {
    db: Db,
    time: Time,
    template_email: TemplateEmail,
    newsletter_repo: NewsletterRepo,
    config: NewsletterFeatureConfig,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NewsletterFeatureConfig {
    /// Whether to send a welcome email to new subscribers.
    pub welcome_email: bool,
}

impl<Db, Time, TemplateEmail, NewsletterRepo> NewsletterFeatureService
    for NewsletterFeatureServiceImpl<Db, Time, TemplateEmail, NewsletterRepo>
where
    Db: Database,
    Time: TimeService,
    TemplateEmail: TemplateEmailService,
    NewsletterRepo: NewsletterRepository<Db::Transaction>,
{
    #[trace_instrument(skip(self))]
    async fn subscribe(
        &self,
        email: EmailAddress,
    ) -> Result<NewsletterSubscription, NewsletterSubscribeError> {
        let email = email
            .as_str()
            .to_lowercase()
            .parse::<EmailAddress>()
            .context("Failed to normalize email address")?;

        let mut txn = self.db.begin_transaction().await?;

        let subscription = match self.newsletter_repo.get(&mut txn, &email).await? {
            Some(subscription) if subscription.is_active => {
                return Err(NewsletterSubscribeError::AlreadySubscribed);
            }
            Some(subscription) => {
                self.newsletter_repo
                    .update_active(&mut txn, &email, true)
                    .await?;
                NewsletterSubscription {
                    is_active: true,
                    ..subscription
                }
            }
            None => {
                let subscription = NewsletterSubscription {
                    email,
                    subscribed_at: self.time.now(),
                    is_active: true,
                };
                self.newsletter_repo
                    .create(&mut txn, &subscription)
                    .await
                    .map_err(|err| match err {
                        NewsletterRepoError::Conflict => NewsletterSubscribeError::AlreadySubscribed,
                        NewsletterRepoError::Other(err) => err.into(),
                    })?;
                subscription
            }
        };

        txn.commit().await?;

        if self.config.welcome_email {
            self.send_welcome_email(&subscription.email).await;
        }

        Ok(subscription)
    }

    #[trace_instrument(skip(self))]
    async fn list_subscriptions(
        &self,
        filter: NewsletterSubscriptionFilter,
    ) -> Result<Vec<NewsletterSubscription>, NewsletterListSubscriptionsError> {
        let mut txn = self.db.begin_transaction().await?;

        self.newsletter_repo
            .list(&mut txn, filter)
            .await
            .map_err(Into::into)
    }

    #[trace_instrument(skip(self))]
    async fn set_active(
        &self,
        email: EmailAddress,
        is_active: bool,
    ) -> Result<(), NewsletterSetActiveError> {
        let mut txn = self.db.begin_transaction().await?;

        if !self
            .newsletter_repo
            .update_active(&mut txn, &email, is_active)
            .await?
        {
            return Err(NewsletterSetActiveError::NotFound);
        }

        txn.commit().await?;

        Ok(())
    }
}

impl<Db, Time, TemplateEmail, NewsletterRepo>
    NewsletterFeatureServiceImpl<Db, Time, TemplateEmail, NewsletterRepo>
where
    TemplateEmail: TemplateEmailService,
{
    async fn send_welcome_email(&self, email: &EmailAddress) {
        let data = NewsletterWelcomeTemplate {
            email: email.to_string(),
        };

        match self
            .template_email
            .send_newsletter_welcome_email(email.clone().into(), &data)
            .await
        {
            Ok(true) => {}
            Ok(false) => warn!(%email, "Newsletter welcome email has been rejected"),
            Err(err) => error!(%email, "Failed to send newsletter welcome email: {err}"),
        }
    }
}
