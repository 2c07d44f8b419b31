use std::future::Future;

use portfolio_models::{
    blog::{BlogPost, BlogPostSlug},
    project::{Project, ProjectId},
    skill::{Skill, SkillCategory},
};
use thiserror::Error;

/// Public content of the site and its moderation.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ShowcaseFeatureService: Send + Sync + 'static {
    /// Return all projects, featured ones first.
    fn list_projects(&self) -> impl Future<Output = anyhow::Result<Vec<Project>>> + Send;

    /// Return all skills grouped by category.
    fn list_skills(&self) -> impl Future<Output = anyhow::Result<Vec<SkillGroup>>> + Send;

    /// Return all published blog posts, newest first.
    fn list_blog_posts(&self) -> impl Future<Output = anyhow::Result<Vec<BlogPost>>> + Send;

    /// Return the published blog post with the given slug.
    fn get_blog_post(
        &self,
        slug: BlogPostSlug,
    ) -> impl Future<Output = Result<BlogPost, ShowcaseGetBlogPostError>> + Send;

    /// Return the content of the home page.
    fn get_overview(&self) -> impl Future<Output = anyhow::Result<ShowcaseOverview>> + Send;

    fn set_project_featured(
        &self,
        id: ProjectId,
        featured: bool,
    ) -> impl Future<Output = Result<(), ShowcaseSetProjectFeaturedError>> + Send;

    /// Publish or unpublish a blog post. Unpublished posts are hidden from
    /// all public listings.
    fn set_blog_post_published(
        &self,
        slug: BlogPostSlug,
        published: bool,
    ) -> impl Future<Output = Result<(), ShowcaseSetBlogPostPublishedError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillGroup {
    pub category: SkillCategory,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseOverview {
    pub featured_projects: Vec<Project>,
    pub skills: Vec<SkillGroup>,
    pub recent_blog_posts: Vec<BlogPost>,
}

impl ShowcaseOverview {
    pub const FEATURED_PROJECTS: u64 = 6;
    pub const RECENT_BLOG_POSTS: u64 = 3;
}

#[derive(Debug, Error)]
pub enum ShowcaseGetBlogPostError {
    #[error("Blog post not found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum ShowcaseSetProjectFeaturedError {
    #[error("The project does not exist.")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum ShowcaseSetBlogPostPublishedError {
    #[error("The blog post does not exist.")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockShowcaseFeatureService {
    pub fn with_list_projects(mut self, result: Vec<Project>) -> Self {
        self.expect_list_projects()
            .once()
            .return_once(|| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_list_skills(mut self, result: Vec<SkillGroup>) -> Self {
        self.expect_list_skills()
            .once()
            .return_once(|| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_list_blog_posts(mut self, result: Vec<BlogPost>) -> Self {
        self.expect_list_blog_posts()
            .once()
            .return_once(|| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_get_blog_post(
        mut self,
        slug: BlogPostSlug,
        result: Result<BlogPost, ShowcaseGetBlogPostError>,
    ) -> Self {
        self.expect_get_blog_post()
            .once()
            .with(mockall::predicate::eq(slug))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_get_overview(mut self, result: ShowcaseOverview) -> Self {
        self.expect_get_overview()
            .once()
            .return_once(|| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_set_project_featured(
        mut self,
        id: ProjectId,
        featured: bool,
        result: Result<(), ShowcaseSetProjectFeaturedError>,
    ) -> Self {
        self.expect_set_project_featured()
            .once()
            .with(mockall::predicate::eq(id), mockall::predicate::eq(featured))
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_set_blog_post_published(
        mut self,
        slug: BlogPostSlug,
        published: bool,
        result: Result<(), ShowcaseSetBlogPostPublishedError>,
    ) -> Self {
        self.expect_set_blog_post_published()
            .once()
            .with(mockall::predicate::eq(slug), mockall::predicate::eq(published))
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }
}
