use clap::Subcommand;
use portfolio_core_showcase_contracts::ShowcaseFeatureService;
use portfolio_di::Provide;
use portfolio_models::blog::BlogPostSlug;

use crate::environment::{types::ShowcaseFeature, Provider};

#[derive(Debug, Subcommand)]
pub enum AdminBlogCommand {
    /// Make a blog post publicly visible
    Publish { slug: String },
    /// Hide a blog post
    Unpublish { slug: String },
}

impl AdminBlogCommand {
    pub async fn invoke(self, provider: &mut Provider) -> anyhow::Result<()> {
        let showcase: ShowcaseFeature = provider.provide();
        let (slug, published) = match self {
            Self::Publish { slug } => (slug, true),
            Self::Unpublish { slug } => (slug, false),
        };

        let slug = BlogPostSlug::try_new(slug)?;
        showcase
            .set_blog_post_published(slug.clone(), published)
            .await?;
        println!(
            "Blog post {} has been {}",
            slug.as_str(),
            if published { "published" } else { "unpublished" }
        );

        Ok(())
    }
}
