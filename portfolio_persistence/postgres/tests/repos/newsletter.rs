use portfolio_demo::newsletter::{ALL_SUBSCRIPTIONS, SUBSCRIPTION_ALICE, SUBSCRIPTION_BOB};
use portfolio_models::newsletter::{NewsletterSubscription, NewsletterSubscriptionFilter};
use portfolio_persistence_contracts::{
    newsletter::{NewsletterRepoError, NewsletterRepository},
    Database, Transaction,
};
use portfolio_persistence_postgres::newsletter::PostgresNewsletterRepository;
use portfolio_utils::assert_matches;
use pretty_assertions::assert_eq;

use crate::common::setup;

const REPO: PostgresNewsletterRepository = PostgresNewsletterRepository;

#[tokio::test]
async fn list() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    for (is_active, expected) in [
        (None, ALL_SUBSCRIPTIONS.clone()),
        (Some(true), vec![&*SUBSCRIPTION_ALICE]),
        (Some(false), vec![&*SUBSCRIPTION_BOB]),
    ] {
        let result = REPO
            .list(&mut txn, NewsletterSubscriptionFilter { is_active })
            .await
            .unwrap();
        assert_eq!(result.iter().collect::<Vec<_>>(), expected);
    }
}

#[tokio::test]
async fn get_is_case_insensitive() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let result = REPO
        .get(&mut txn, &"ALICE@example.COM".parse().unwrap())
        .await
        .unwrap();
    assert_eq!(result.as_ref(), Some(&*SUBSCRIPTION_ALICE));

    let result = REPO
        .get(&mut txn, &"nobody@example.com".parse().unwrap())
        .await
        .unwrap();
    assert_eq!(result, None);
}

#[tokio::test]
async fn create_conflict() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let subscription = NewsletterSubscription {
        email: "Alice@Example.com".parse().unwrap(),
        ..SUBSCRIPTION_ALICE.clone()
    };

    let result = REPO.create(&mut txn, &subscription).await;
    assert_matches!(result, Err(NewsletterRepoError::Conflict));
}

#[tokio::test]
async fn update_active() {
    let db = setup().await;

    let mut txn = db.begin_transaction().await.unwrap();
    let result = REPO
        .update_active(&mut txn, &SUBSCRIPTION_BOB.email, true)
        .await
        .unwrap();
    assert!(result);
    txn.commit().await.unwrap();

    let mut txn = db.begin_transaction().await.unwrap();
    let result = REPO
        .get(&mut txn, &SUBSCRIPTION_BOB.email)
        .await
        .unwrap()
        .unwrap();
    assert!(result.is_active);

    let result = REPO
        .update_active(&mut txn, &"nobody@example.com".parse().unwrap(), true)
        .await
        .unwrap();
    assert!(!result);
}
