use portfolio_core_contact_contracts::{
    validate::{
        ContactField, ContactFieldError, ContactRejection, ContactSubmission,
        MockContactSubmissionValidator, ValidatedContactSubmission,
    },
    ContactFeatureService, ContactSubmitOutcome,
};
use portfolio_demo::contact::{CONTACT_MESSAGE_JANE, CONTACT_MESSAGE_JOHN};
use portfolio_email_contracts::template::MockTemplateEmailService;
use portfolio_models::contact::ContactMessage;
use portfolio_persistence_contracts::{contact::MockContactRepository, MockDatabase};
use portfolio_shared_contracts::{id::MockIdService, time::MockTimeService};
use portfolio_templates_contracts::ContactNotificationTemplate;
use portfolio_utils::assert_matches;
use pretty_assertions::assert_eq;

use crate::{tests::Sut, ContactFeatureConfig, ContactFeatureServiceImpl};

fn submission(message: &ContactMessage) -> ContactSubmission {
    ContactSubmission {
        name: (*message.author.name).clone(),
        email: message.author.email.to_string(),
        phone: message
            .author
            .phone
            .as_ref()
            .map(|x| (**x).clone())
            .unwrap_or_default(),
        message: (*message.content).clone(),
        website: "".into(),
        captcha: "8".into(),
    }
}

fn validated(message: &ContactMessage) -> ValidatedContactSubmission {
    ValidatedContactSubmission {
        author: message.author.clone(),
        content: message.content.clone(),
    }
}

fn expected_notification(message: &ContactMessage) -> ContactNotificationTemplate {
    ContactNotificationTemplate {
        name: (*message.author.name).clone(),
        email: message.author.email.to_string(),
        phone: message.author.phone.as_ref().map(|x| (**x).clone()),
        message: (*message.content).clone(),
        submitted_at: message
            .created_at
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string(),
    }
}

#[tokio::test]
async fn ok() {
    // Arrange
    let expected = ContactMessage {
        is_read: false,
        ..CONTACT_MESSAGE_JOHN.clone()
    };
    let config = ContactFeatureConfig::default();

    let db = MockDatabase::build(true);
    let validator = MockContactSubmissionValidator::new()
        .with_validate(submission(&expected), Ok(validated(&expected)));
    let id = MockIdService::new().with_generate(expected.id);
    let time = MockTimeService::new().with_now(expected.created_at);
    let contact_repo = MockContactRepository::new().with_create(expected.clone(), Ok(()));
    let template_email = MockTemplateEmailService::new().with_send_contact_notification_email(
        (*config.email).clone(),
        expected.author.email.clone().with_name("John Doe".into()),
        ContactNotificationTemplate {
            name: "John Doe".into(),
            email: "john@example.com".into(),
            phone: Some("+1234567890".into()),
            message: "Hi, I would like to talk about a freelance project.".into(),
            submitted_at: "2024-05-01 13:37:00 UTC".into(),
        },
        Ok(true),
    );

    let sut = ContactFeatureServiceImpl {
        db,
        validator,
        id,
        time,
        template_email,
        contact_repo,
        config,
        ..Sut::default()
    };

    // Act
    let result = sut.submit(submission(&expected)).await;

    // Assert
    assert_eq!(result.unwrap(), ContactSubmitOutcome::Accepted(expected));
}

#[tokio::test]
async fn ok_without_phone() {
    // Arrange
    let expected = ContactMessage {
        is_read: false,
        ..CONTACT_MESSAGE_JANE.clone()
    };
    let config = ContactFeatureConfig::default();

    let db = MockDatabase::build(true);
    let validator = MockContactSubmissionValidator::new()
        .with_validate(submission(&expected), Ok(validated(&expected)));
    let id = MockIdService::new().with_generate(expected.id);
    let time = MockTimeService::new().with_now(expected.created_at);
    let contact_repo = MockContactRepository::new().with_create(expected.clone(), Ok(()));
    let template_email = MockTemplateEmailService::new().with_send_contact_notification_email(
        (*config.email).clone(),
        expected.author.email.clone().with_name("Jane Roe".into()),
        expected_notification(&expected),
        Ok(true),
    );

    let sut = ContactFeatureServiceImpl {
        db,
        validator,
        id,
        time,
        template_email,
        contact_repo,
        config,
        ..Sut::default()
    };

    // Act
    let result = sut.submit(submission(&expected)).await;

    // Assert
    assert_eq!(result.unwrap(), ContactSubmitOutcome::Accepted(expected));
}

#[tokio::test]
async fn notification_rejected() {
    // Arrange
    let expected = CONTACT_MESSAGE_JOHN.clone();
    let config = ContactFeatureConfig::default();

    let db = MockDatabase::build(true);
    let validator = MockContactSubmissionValidator::new()
        .with_validate(submission(&expected), Ok(validated(&expected)));
    let id = MockIdService::new().with_generate(expected.id);
    let time = MockTimeService::new().with_now(expected.created_at);
    let contact_repo = MockContactRepository::new().with_create(expected.clone(), Ok(()));
    let template_email = MockTemplateEmailService::new().with_send_contact_notification_email(
        (*config.email).clone(),
        expected.author.email.clone().with_name("John Doe".into()),
        expected_notification(&expected),
        Ok(false),
    );

    let sut = ContactFeatureServiceImpl {
        db,
        validator,
        id,
        time,
        template_email,
        contact_repo,
        config,
        ..Sut::default()
    };

    // Act
    let result = sut.submit(submission(&expected)).await;

    // Assert
    assert_eq!(result.unwrap(), ContactSubmitOutcome::Accepted(expected));
}

#[tokio::test]
async fn notification_error() {
    // Arrange
    let expected = CONTACT_MESSAGE_JOHN.clone();
    let config = ContactFeatureConfig::default();

    let db = MockDatabase::build(true);
    let validator = MockContactSubmissionValidator::new()
        .with_validate(submission(&expected), Ok(validated(&expected)));
    let id = MockIdService::new().with_generate(expected.id);
    let time = MockTimeService::new().with_now(expected.created_at);
    let contact_repo = MockContactRepository::new().with_create(expected.clone(), Ok(()));
    let template_email = MockTemplateEmailService::new().with_send_contact_notification_email(
        (*config.email).clone(),
        expected.author.email.clone().with_name("John Doe".into()),
        expected_notification(&expected),
        Err(anyhow::anyhow!("connection refused")),
    );

    let sut = ContactFeatureServiceImpl {
        db,
        validator,
        id,
        time,
        template_email,
        contact_repo,
        config,
        ..Sut::default()
    };

    // Act
    let result = sut.submit(submission(&expected)).await;

    // Assert
    assert_eq!(result.unwrap(), ContactSubmitOutcome::Accepted(expected));
}

#[tokio::test]
async fn rejected() {
    // Arrange
    let submission = ContactSubmission {
        captcha: "7".into(),
        ..submission(&CONTACT_MESSAGE_JOHN)
    };
    let rejection = ContactRejection::Invalid(
        [(ContactField::Captcha, vec![ContactFieldError::IncorrectAnswer])].into(),
    );

    let validator = MockContactSubmissionValidator::new()
        .with_validate(submission.clone(), Err(rejection.clone()));

    let sut = ContactFeatureServiceImpl {
        validator,
        ..Sut::default()
    };

    // Act
    let result = sut.submit(submission).await;

    // Assert
    assert_eq!(result.unwrap(), ContactSubmitOutcome::Rejected(rejection));
}

#[tokio::test]
async fn honeypot() {
    // Arrange
    let submission = ContactSubmission {
        website: "http://spam.example".into(),
        ..submission(&CONTACT_MESSAGE_JOHN)
    };

    let validator = MockContactSubmissionValidator::new()
        .with_validate(submission.clone(), Err(ContactRejection::Honeypot));

    let sut = ContactFeatureServiceImpl {
        validator,
        ..Sut::default()
    };

    // Act
    let result = sut.submit(submission).await;

    // Assert
    assert_matches!(
        result,
        Ok(ContactSubmitOutcome::Rejected(ContactRejection::Honeypot))
    );
}

#[tokio::test]
async fn database_error() {
    // Arrange
    let expected = CONTACT_MESSAGE_JOHN.clone();

    let db = MockDatabase::build(false);
    let validator = MockContactSubmissionValidator::new()
        .with_validate(submission(&expected), Ok(validated(&expected)));
    let id = MockIdService::new().with_generate(expected.id);
    let time = MockTimeService::new().with_now(expected.created_at);
    let contact_repo = MockContactRepository::new()
        .with_create(expected.clone(), Err(anyhow::anyhow!("disk full")));

    let sut = ContactFeatureServiceImpl {
        db,
        validator,
        id,
        time,
        contact_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.submit(submission(&expected)).await;

    // Assert
    assert!(result.is_err());
}
