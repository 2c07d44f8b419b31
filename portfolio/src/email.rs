use anyhow::Context;
use portfolio_config::EmailConfig;
use portfolio_email_impl::EmailServiceImpl;

/// Create the SMTP transport. No connection is opened until the first email
/// is sent or the server is pinged.
pub async fn connect(config: &EmailConfig) -> anyhow::Result<EmailServiceImpl> {
    EmailServiceImpl::new(&config.smtp_url, config.from.clone())
        .await
        .context("Failed to connect to SMTP server")
}
