use clap::Subcommand;
use portfolio_core_newsletter_contracts::NewsletterFeatureService;
use portfolio_di::Provide;
use portfolio_models::{email_address::EmailAddress, newsletter::NewsletterSubscriptionFilter};

use crate::environment::{types::NewsletterFeature, Provider};

#[derive(Debug, Subcommand)]
pub enum AdminNewsletterCommand {
    /// List newsletter subscriptions, newest first
    #[command(aliases(["l", "ls"]))]
    List {
        /// Only list active subscriptions
        #[arg(long, conflicts_with = "inactive")]
        active: bool,
        /// Only list inactive subscriptions
        #[arg(long)]
        inactive: bool,
    },
    /// Reactivate a subscription
    Activate { email: String },
    /// Deactivate a subscription
    Deactivate { email: String },
}

impl AdminNewsletterCommand {
    pub async fn invoke(self, provider: &mut Provider) -> anyhow::Result<()> {
        let newsletter: NewsletterFeature = provider.provide();
        match self {
            Self::List { active, inactive } => {
                let filter = NewsletterSubscriptionFilter {
                    is_active: (active || inactive).then_some(active),
                };
                list(newsletter, filter).await
            }
            Self::Activate { email } => set_active(newsletter, parse_email(&email)?, true).await,
            Self::Deactivate { email } => {
                set_active(newsletter, parse_email(&email)?, false).await
            }
        }
    }
}

/// Subscriptions are stored in lowercase.
fn parse_email(email: &str) -> anyhow::Result<EmailAddress> {
    email.trim().to_lowercase().parse().map_err(Into::into)
}

async fn list(
    newsletter: NewsletterFeature,
    filter: NewsletterSubscriptionFilter,
) -> anyhow::Result<()> {
    let subscriptions = newsletter.list_subscriptions(filter).await?;
    for subscription in &subscriptions {
        println!(
            "{} {} {}",
            if subscription.is_active { "[active]  " } else { "[inactive]" },
            subscription.subscribed_at.format("%Y-%m-%d %H:%M:%S"),
            subscription.email
        );
    }
    println!("{} subscriptions", subscriptions.len());

    Ok(())
}

async fn set_active(
    newsletter: NewsletterFeature,
    email: EmailAddress,
    is_active: bool,
) -> anyhow::Result<()> {
    newsletter.set_active(email.clone(), is_active).await?;
    println!(
        "Subscription of {email} has been {}",
        if is_active { "activated" } else { "deactivated" }
    );

    Ok(())
}
