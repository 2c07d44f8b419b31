use std::future::Future;

use portfolio_models::project::{Project, ProjectFilter, ProjectId};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ProjectRepository<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    /// Returns the projects matching the given filter. Featured projects come
    /// first, then the newest ones.
    fn list(
        &self,
        txn: &mut Txn,
        filter: ProjectFilter,
        limit: Option<u64>,
    ) -> impl Future<Output = anyhow::Result<Vec<Project>>> + Send;

    fn create(
        &self,
        txn: &mut Txn,
        project: &Project,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Returns `false` if the project does not exist.
    fn update_featured(
        &self,
        txn: &mut Txn,
        id: ProjectId,
        featured: bool,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockProjectRepository<Txn> {
    pub fn with_list(
        mut self,
        filter: ProjectFilter,
        limit: Option<u64>,
        result: Vec<Project>,
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

    pub fn with_update_featured(mut self, id: ProjectId, featured: bool, result: bool) -> Self {
        self.expect_update_featured()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(id),
                mockall::predicate::eq(featured),
            )
            .return_once(move |_, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
