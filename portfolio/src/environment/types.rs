use portfolio_core_contact_impl::{validate::ContactSubmissionValidatorImpl, ContactFeatureServiceImpl};
use portfolio_core_health_impl::HealthFeatureServiceImpl;
use portfolio_core_newsletter_impl::NewsletterFeatureServiceImpl;
use portfolio_core_showcase_impl::ShowcaseFeatureServiceImpl;
use portfolio_email_impl::{template::TemplateEmailServiceImpl, EmailServiceImpl};
use portfolio_persistence_postgres::{
    blog::PostgresBlogRepository, contact::PostgresContactRepository,
    newsletter::PostgresNewsletterRepository, project::PostgresProjectRepository,
    skill::PostgresSkillRepository, PostgresDatabase,
};
use portfolio_shared_impl::{
    captcha::MathCaptchaServiceImpl, id::IdServiceImpl, time::TimeServiceImpl,
};
use portfolio_templates_impl::TemplateServiceImpl;

// API
pub type RestServer =
    portfolio_api_rest::RestServer<HealthFeature, ContactFeature, NewsletterFeature, ShowcaseFeature>;

// Persistence
pub type Database = PostgresDatabase;

// Email
pub type Email = EmailServiceImpl;
pub type TemplateEmail = TemplateEmailServiceImpl<Email, Template>;

// Template
pub type Template = TemplateServiceImpl;

// Shared
pub type Captcha = MathCaptchaServiceImpl;
pub type Id = IdServiceImpl;
pub type Time = TimeServiceImpl;

// Repositories
pub type ContactRepo = PostgresContactRepository;
pub type NewsletterRepo = PostgresNewsletterRepository;
pub type ProjectRepo = PostgresProjectRepository;
pub type SkillRepo = PostgresSkillRepository;
pub type BlogRepo = PostgresBlogRepository;

// Core
pub type HealthFeature = HealthFeatureServiceImpl<Time, Database, Email>;

pub type ContactFeature = ContactFeatureServiceImpl<
    Database,
    ContactValidator,
    Id,
    Time,
    TemplateEmail,
    ContactRepo,
>;
pub type ContactValidator = ContactSubmissionValidatorImpl<Captcha>;

pub type NewsletterFeature =
    NewsletterFeatureServiceImpl<Database, Time, TemplateEmail, NewsletterRepo>;

pub type ShowcaseFeature =
    ShowcaseFeatureServiceImpl<Database, Time, ProjectRepo, SkillRepo, BlogRepo>;
