use blog::AdminBlogCommand;
use clap::Subcommand;
use contact::AdminContactCommand;
use newsletter::AdminNewsletterCommand;
use portfolio_config::Config;
use project::AdminProjectCommand;

use crate::{
    database, email,
    environment::{ConfigProvider, Provider},
};

mod blog;
mod contact;
mod newsletter;
mod project;

#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Manage messages submitted using the contact form
    #[command(aliases(["c"]))]
    Contact {
        #[command(subcommand)]
        command: AdminContactCommand,
    },
    /// Manage newsletter subscriptions
    #[command(aliases(["n"]))]
    Newsletter {
        #[command(subcommand)]
        command: AdminNewsletterCommand,
    },
    /// Manage projects
    #[command(aliases(["p"]))]
    Project {
        #[command(subcommand)]
        command: AdminProjectCommand,
    },
    /// Manage blog posts
    #[command(aliases(["b"]))]
    Blog {
        #[command(subcommand)]
        command: AdminBlogCommand,
    },
}

impl AdminCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let mut provider = provider(&config).await?;
        match self {
            AdminCommand::Contact { command } => command.invoke(&mut provider).await,
            AdminCommand::Newsletter { command } => command.invoke(&mut provider).await,
            AdminCommand::Project { command } => command.invoke(&mut provider).await,
            AdminCommand::Blog { command } => command.invoke(&mut provider).await,
        }
    }
}

async fn provider(config: &Config) -> anyhow::Result<Provider> {
    let database = database::connect(&config.database).await?;
    let email_service = email::connect(&config.email).await?;
    let config_provider = ConfigProvider::new(config)?;
    Ok(Provider::new(config_provider, database, email_service))
}
