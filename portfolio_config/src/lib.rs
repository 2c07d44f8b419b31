use std::{
    net::IpAddr,
    path::{Path, PathBuf},
};

use anyhow::Context;
use config::{File, FileFormat};
use portfolio_models::email_address::{EmailAddress, EmailAddressWithName};
use serde::Deserialize;
use url::Url;

pub use duration::Duration;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Colon separated list of additional config files. Files listed later
/// override values from earlier ones.
pub const CONFIG_PATHS_ENV: &str = "PORTFOLIO_CONFIG";

/// Loads the bundled default config followed by the files listed in
/// `PORTFOLIO_CONFIG`.
pub fn load() -> anyhow::Result<Config> {
    let extra = std::env::var(CONFIG_PATHS_ENV).unwrap_or_default();
    let paths = std::iter::once(PathBuf::from(DEFAULT_CONFIG_PATH))
        .chain(
            extra
                .split(':')
                .filter(|x| !x.is_empty())
                .map(PathBuf::from),
        )
        .collect::<Vec<_>>();
    load_paths(&paths)
}

pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub database: DatabaseConfig,
    pub email: EmailConfig,
    pub health: HealthConfig,
    pub contact: ContactConfig,
    pub newsletter: NewsletterConfig,
    pub sentry: Option<SentryConfig>,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Option<Duration>,
    pub max_lifetime: Option<Duration>,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    pub smtp_url: Url,
    pub from: EmailAddressWithName,
}

#[derive(Debug, Deserialize)]
pub struct HealthConfig {
    pub cache_ttl: Duration,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    /// Recipient of the notification sent for every new message.
    pub email: EmailAddress,
    pub captcha_prompt: String,
    pub captcha_answer: i64,
    pub disposable_domains: Vec<String>,
    pub spam_keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewsletterConfig {
    pub welcome_email: bool,
}

#[derive(Debug, Deserialize)]
pub struct SentryConfig {
    pub dsn: Url,
}
