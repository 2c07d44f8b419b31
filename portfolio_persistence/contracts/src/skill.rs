use std::future::Future;

use portfolio_models::skill::Skill;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait SkillRepository<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    /// Returns all skills ordered by category, proficiency (descending) and
    /// name.
    fn list(&self, txn: &mut Txn) -> impl Future<Output = anyhow::Result<Vec<Skill>>> + Send;

    fn create(&self, txn: &mut Txn, skill: &Skill)
        -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockSkillRepository<Txn> {
    pub fn with_list(mut self, result: Vec<Skill>) -> Self {
        self.expect_list()
            .once()
            .with(mockall::predicate::always())
            .return_once(|_| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
