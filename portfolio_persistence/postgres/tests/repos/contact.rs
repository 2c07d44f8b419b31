use std::sync::LazyLock;

use portfolio_demo::{
    contact::{ALL_CONTACT_MESSAGES, CONTACT_MESSAGE_JANE, CONTACT_MESSAGE_JOHN},
    UUID1,
};
use portfolio_models::contact::{
    ContactMessage, ContactMessageAuthor, ContactMessageFilter,
};
use portfolio_persistence_contracts::{contact::ContactRepository, Database, Transaction};
use portfolio_persistence_postgres::contact::PostgresContactRepository;
use pretty_assertions::assert_eq;

use crate::{common::setup, make_slice, sliced};

const REPO: PostgresContactRepository = PostgresContactRepository;

macro_rules! filter {
    ($($key:ident: $value:expr),* $(,)?) => {
        ContactMessageFilter {
            $( $key: Some(TryFrom::try_from($value).unwrap()), )*
            ..Default::default()
        }
    };
}

static FILTER_TESTS: LazyLock<Vec<(ContactMessageFilter, Vec<&ContactMessage>)>> =
    LazyLock::new(|| {
        vec![
            (filter!(), ALL_CONTACT_MESSAGES.clone()),
            (filter!(is_read: true), vec![&CONTACT_MESSAGE_JANE]),
            (filter!(is_read: false), vec![&CONTACT_MESSAGE_JOHN]),
            (filter!(search: "JOHN"), vec![&CONTACT_MESSAGE_JOHN]),
            (filter!(search: "example"), ALL_CONTACT_MESSAGES.clone()),
            (filter!(search: "example.org"), vec![&CONTACT_MESSAGE_JANE]),
            (filter!(search: "4567"), vec![&CONTACT_MESSAGE_JOHN]),
            (filter!(search: "%"), vec![]),
            (filter!(search: "does not exist"), vec![]),
            (filter!(search: "roe", is_read: false), vec![]),
        ]
    });

#[tokio::test]
async fn count() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    for (filter, expected) in &*FILTER_TESTS {
        let count = REPO.count(&mut txn, filter).await.unwrap();
        assert_eq!(count, expected.len() as u64, "{filter:?}");
    }
}

#[tokio::test]
async fn list() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    for (filter, expected) in &*FILTER_TESTS {
        for slice in [make_slice(100, 0), make_slice(1, 0), make_slice(100, 1)] {
            let result = REPO.list(&mut txn, filter, slice).await.unwrap();
            assert_eq!(&result.iter().collect::<Vec<_>>(), sliced(expected, slice));
        }
    }
}

#[tokio::test]
async fn get() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    for &message in &*ALL_CONTACT_MESSAGES {
        let result = REPO.get(&mut txn, message.id).await.unwrap().unwrap();
        assert_eq!(&result, message);
    }

    let result = REPO.get(&mut txn, UUID1.into()).await.unwrap();
    assert_eq!(result, None);
}

#[tokio::test]
async fn create() {
    let db = setup().await;

    let message = ContactMessage {
        id: UUID1.into(),
        author: ContactMessageAuthor {
            name: "Max Mustermann".try_into().unwrap(),
            email: "max@example.de".parse().unwrap(),
            phone: None,
        },
        content: "Hello, this is a message.".try_into().unwrap(),
        created_at: CONTACT_MESSAGE_JANE.created_at,
        is_read: false,
    };

    let mut txn = db.begin_transaction().await.unwrap();
    REPO.create(&mut txn, &message).await.unwrap();
    txn.commit().await.unwrap();

    let mut txn = db.begin_transaction().await.unwrap();
    let result = REPO.get(&mut txn, message.id).await.unwrap().unwrap();
    assert_eq!(result, message);
}

#[tokio::test]
async fn update_read() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let result = REPO
        .update_read(&mut txn, CONTACT_MESSAGE_JOHN.id, true)
        .await
        .unwrap();
    assert!(result);

    let result = REPO
        .get(&mut txn, CONTACT_MESSAGE_JOHN.id)
        .await
        .unwrap()
        .unwrap();
    assert!(result.is_read);

    let result = REPO.update_read(&mut txn, UUID1.into(), true).await.unwrap();
    assert!(!result);
}

#[tokio::test]
async fn delete() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let result = REPO.delete(&mut txn, CONTACT_MESSAGE_JOHN.id).await.unwrap();
    assert!(result);

    let result = REPO.get(&mut txn, CONTACT_MESSAGE_JOHN.id).await.unwrap();
    assert_eq!(result, None);

    let result = REPO.delete(&mut txn, CONTACT_MESSAGE_JOHN.id).await.unwrap();
    assert!(!result);
}
