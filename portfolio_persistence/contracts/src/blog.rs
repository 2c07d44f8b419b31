use std::future::Future;

use chrono::{DateTime, Utc};
use portfolio_models::blog::{BlogPost, BlogPostFilter, BlogPostSlug};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait BlogRepository<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    /// Returns the blog posts matching the given filter, newest first.
    fn list(
        &self,
        txn: &mut Txn,
        filter: BlogPostFilter,
        limit: Option<u64>,
    ) -> impl Future<Output = anyhow::Result<Vec<BlogPost>>> + Send;

    fn get_by_slug(
        &self,
        txn: &mut Txn,
        slug: &BlogPostSlug,
    ) -> impl Future<Output = anyhow::Result<Option<BlogPost>>> + Send;

    /// Creates a new blog post.
    ///
    /// Returns an error if a post with the same slug already exists.
    fn create(
        &self,
        txn: &mut Txn,
        post: &BlogPost,
    ) -> impl Future<Output = Result<(), BlogRepoError>> + Send;

    /// Returns `false` if the blog post does not exist.
    fn update_published(
        &self,
        txn: &mut Txn,
        slug: &BlogPostSlug,
        published: bool,
        updated_at: DateTime<Utc>,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;
}

#[derive(Debug, Error)]
pub enum BlogRepoError {
    #[error("A blog post with the same slug already exists.")]
    SlugConflict,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockBlogRepository<Txn> {
    pub fn with_list(
        mut self,
        filter: BlogPostFilter,
        limit: Option<u64>,
        result: Vec<BlogPost>,
    ) -> Self {
        self.expect_list()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(filter),
                mockall::predicate::eq(limit),
            )
            .return_once(|_, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_get_by_slug(mut self, slug: BlogPostSlug, result: Option<BlogPost>) -> Self {
        self.expect_get_by_slug()
            .once()
            .with(mockall::predicate::always(), mockall::predicate::eq(slug))
            .return_once(|_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_update_published(
        mut self,
        slug: BlogPostSlug,
        published: bool,
        updated_at: DateTime<Utc>,
        result: bool,
    ) -> Self {
        self.expect_update_published()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(slug),
                mockall::predicate::eq(published),
                mockall::predicate::eq(updated_at),
            )
            .return_once(move |_, _, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
