use std::sync::LazyLock;

use chrono::{TimeZone, Utc};
use portfolio_models::newsletter::NewsletterSubscription;
use portfolio_persistence_contracts::newsletter::NewsletterRepository;

/// Newest first.
pub static ALL_SUBSCRIPTIONS: LazyLock<Vec<&NewsletterSubscription>> =
    LazyLock::new(|| vec![&SUBSCRIPTION_BOB, &SUBSCRIPTION_ALICE]);

pub static SUBSCRIPTION_ALICE: LazyLock<NewsletterSubscription> =
    LazyLock::new(|| NewsletterSubscription {
        email: "alice@example.com".parse().unwrap(),
        subscribed_at: Utc.with_ymd_and_hms(2024, 3, 14, 9, 0, 0).unwrap(),
        is_active: true,
    });

pub static SUBSCRIPTION_BOB: LazyLock<NewsletterSubscription> =
    LazyLock::new(|| NewsletterSubscription {
        email: "bob@example.net".parse().unwrap(),
        subscribed_at: Utc.with_ymd_and_hms(2024, 4, 2, 17, 30, 0).unwrap(),
        is_active: false,
    });

pub async fn create<Txn: Send + Sync + 'static>(
    txn: &mut Txn,
    repo: impl NewsletterRepository<Txn>,
) -> anyhow::Result<()> {
    for subscription in ALL_SUBSCRIPTIONS.iter().rev() {
        repo.create(txn, subscription).await?;
    }
    Ok(())
}
