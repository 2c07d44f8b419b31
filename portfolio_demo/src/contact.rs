use std::sync::LazyLock;

use chrono::{TimeZone, Utc};
use portfolio_models::contact::{ContactMessage, ContactMessageAuthor};
use portfolio_persistence_contracts::contact::ContactRepository;
use uuid::uuid;

/// Newest first.
pub static ALL_CONTACT_MESSAGES: LazyLock<Vec<&ContactMessage>> =
    LazyLock::new(|| vec![&CONTACT_MESSAGE_JANE, &CONTACT_MESSAGE_JOHN]);

pub static CONTACT_MESSAGE_JOHN: LazyLock<ContactMessage> = LazyLock::new(|| ContactMessage {
    id: uuid!("0c7e8e38-1a3e-4b8f-9b44-5d2c3c8a7f10").into(),
    author: ContactMessageAuthor {
        name: "John Doe".try_into().unwrap(),
        email: "john@example.com".parse().unwrap(),
        phone: Some("+1234567890".try_into().unwrap()),
    },
    content: "Hi, I would like to talk about a freelance project.".try_into().unwrap(),
    created_at: Utc.with_ymd_and_hms(2024, 5, 1, 13, 37, 0).unwrap(),
    is_read: false,
});

pub static CONTACT_MESSAGE_JANE: LazyLock<ContactMessage> = LazyLock::new(|| ContactMessage {
    id: uuid!("5b0a0d4e-6a92-4f1e-8d0c-2e61f1c5b9a3").into(),
    author: ContactMessageAuthor {
        name: "Jane Roe".try_into().unwrap(),
        email: "jane.roe@example.org".parse().unwrap(),
        phone: None,
    },
    content: "Great portfolio! Are you available for a short call next week?"
        .try_into()
        .unwrap(),
    created_at: Utc.with_ymd_and_hms(2024, 5, 2, 8, 15, 0).unwrap(),
    is_read: true,
});

pub async fn create<Txn: Send + Sync + 'static>(
    txn: &mut Txn,
    repo: impl ContactRepository<Txn>,
) -> anyhow::Result<()> {
    for message in ALL_CONTACT_MESSAGES.iter().rev() {
        repo.create(txn, message).await?;
    }
    Ok(())
}
