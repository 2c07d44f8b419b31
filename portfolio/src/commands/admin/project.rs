use clap::Subcommand;
use portfolio_core_showcase_contracts::ShowcaseFeatureService;
use portfolio_di::Provide;
use uuid::Uuid;

use crate::environment::{types::ShowcaseFeature, Provider};

#[derive(Debug, Subcommand)]
pub enum AdminProjectCommand {
    /// Show a project on the home page
    Feature { id: Uuid },
    /// Stop showing a project on the home page
    Unfeature { id: Uuid },
}

impl AdminProjectCommand {
    pub async fn invoke(self, provider: &mut Provider) -> anyhow::Result<()> {
        let showcase: ShowcaseFeature = provider.provide();
        let (id, featured) = match self {
            Self::Feature { id } => (id, true),
            Self::Unfeature { id } => (id, false),
        };

        showcase.set_project_featured(id.into(), featured).await?;
        println!(
            "Project {id} has been {}",
            if featured { "featured" } else { "unfeatured" }
        );

        Ok(())
    }
}
