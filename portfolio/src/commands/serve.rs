use portfolio_config::Config;
use portfolio_di::Provide;
use portfolio_email_contracts::EmailService;
use portfolio_persistence_contracts::Database;
use tracing::{info, warn};

use crate::{
    database, email,
    environment::{types::RestServer, ConfigProvider, Provider},
};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Connecting to database");
    let database = database::connect(&config.database).await?;
    database.ping().await?;

    info!("Applying pending migrations");
    let mut applied = false;
    for name in database.run_migrations(None).await? {
        info!("Applied {name}");
        applied = true;
    }
    if !applied {
        info!("No migrations pending");
    }

    info!("Connecting to smtp server");
    let email = email::connect(&config.email).await?;
    // contact messages are stored even if notifications cannot be delivered
    if let Err(err) = email.ping().await {
        warn!("SMTP server is not reachable: {err:#}");
    }

    let config_provider = ConfigProvider::new(&config)?;
    let mut provider = Provider::new(config_provider, database, email);
    let server: RestServer = provider.provide();
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve().await
}
