use std::sync::Arc;

use portfolio_api_rest::RestServerConfig;
use portfolio_config::Config;
use portfolio_core_contact_impl::{validate::ContactSubmissionValidatorConfig, ContactFeatureConfig};
use portfolio_core_health_impl::HealthFeatureConfig;
use portfolio_core_newsletter_impl::NewsletterFeatureConfig;
use portfolio_di::provider;
use portfolio_shared_impl::captcha::MathCaptchaServiceConfig;
use types::{Database, Email};

pub mod types;

provider! {
    /// The default provider, capable of providing all the dependencies
    pub Provider {
        database: Database,
        email: Email,
        ..config: ConfigProvider {
            // API
            RestServerConfig,

            // Shared
            MathCaptchaServiceConfig,

            // Core
            ContactFeatureConfig,
            ContactSubmissionValidatorConfig,
            HealthFeatureConfig,
            NewsletterFeatureConfig,
        }
    }
}

impl Provider {
    pub fn new(config: ConfigProvider, database: Database, email: Email) -> Self {
        Self {
            _cache: Default::default(),
            database,
            email,
            config,
        }
    }
}

provider! {
    /// Reduced provider, capable of providing services that only depend on the configuration
    pub ConfigProvider {
        // API
        rest_server_config: RestServerConfig,

        // Shared
        math_captcha_service_config: MathCaptchaServiceConfig,

        // Core
        contact_feature_config: ContactFeatureConfig,
        contact_submission_validator_config: ContactSubmissionValidatorConfig,
        health_feature_config: HealthFeatureConfig,
        newsletter_feature_config: NewsletterFeatureConfig,
    }
}

impl ConfigProvider {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        // API
        let rest_server_config = RestServerConfig {
            host: config.http.host,
            port: config.http.port,
        };

        // Shared
        let math_captcha_service_config = MathCaptchaServiceConfig {
            prompt: config.contact.captcha_prompt.as_str().into(),
            answer: config.contact.captcha_answer,
        };

        // Core
        let contact_feature_config = ContactFeatureConfig {
            email: Arc::new(config.contact.email.clone().into()),
        };

        let contact_submission_validator_config = ContactSubmissionValidatorConfig::new(
            &config.contact.disposable_domains,
            &config.contact.spam_keywords,
        );

        let health_feature_config = HealthFeatureConfig {
            cache_ttl: config.health.cache_ttl.into(),
        };

        let newsletter_feature_config = NewsletterFeatureConfig {
            welcome_email: config.newsletter.welcome_email,
        };

        Ok(Self {
            _cache: Default::default(),

            // API
            rest_server_config,

            // Shared
            math_captcha_service_config,

            // Core
            contact_feature_config,
            contact_submission_validator_config,
            health_feature_config,
            newsletter_feature_config,
        })
    }
}
