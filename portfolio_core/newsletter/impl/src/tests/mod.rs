use portfolio_email_contracts::template::MockTemplateEmailService;
use portfolio_persistence_contracts::{
    newsletter::MockNewsletterRepository, MockDatabase, MockTransaction,
};
use portfolio_shared_contracts::time::MockTimeService;

use crate::NewsletterFeatureServiceImpl;


type Sut = NewsletterFeatureServiceImpl<
    MockDatabase,
    MockTimeService,
    MockTemplateEmailService,
    MockNewsletterRepository<MockTransaction>,
>;
