use portfolio_core_contact_contracts::{ContactDeleteMessageError, ContactFeatureService};
use portfolio_demo::{contact::CONTACT_MESSAGE_JANE, UUID1};
use portfolio_persistence_contracts::{contact::MockContactRepository, MockDatabase};
use portfolio_utils::assert_matches;

use crate::{tests::Sut, ContactFeatureServiceImpl};

#[tokio::test]
async fn ok() {
    // Arrange
    let db = MockDatabase::build(true);
    let contact_repo = MockContactRepository::new().with_delete(CONTACT_MESSAGE_JANE.id, true);

    let sut = ContactFeatureServiceImpl {
        db,
        contact_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.delete_message(CONTACT_MESSAGE_JANE.id).await;

    // Assert
    result.unwrap();
}

#[tokio::test]
async fn not_found() {
    // Arrange
    let db = MockDatabase::build(false);
    let contact_repo = MockContactRepository::new().with_delete(UUID1.into(), false);

    let sut = ContactFeatureServiceImpl {
        db,
        contact_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.delete_message(UUID1.into()).await;

    // Assert
    assert_matches!(result, Err(ContactDeleteMessageError::NotFound));
}
