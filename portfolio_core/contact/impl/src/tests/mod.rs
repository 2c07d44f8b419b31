use portfolio_core_contact_contracts::validate::MockContactSubmissionValidator;
use portfolio_email_contracts::template::MockTemplateEmailService;
use portfolio_persistence_contracts::{contact::MockContactRepository, MockDatabase, MockTransaction};
use portfolio_shared_contracts::{id::MockIdService, time::MockTimeService};

use crate::ContactFeatureServiceImpl;

mod delete_message;
mod submit;

type Sut = ContactFeatureServiceImpl<
    MockDatabase,
    MockContactSubmissionValidator,
    MockIdService,
    MockTimeService,
    MockTemplateEmailService,
    MockContactRepository<MockTransaction>,
>;
