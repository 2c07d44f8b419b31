use portfolio_persistence_contracts::{
    blog::BlogRepository, contact::ContactRepository, newsletter::NewsletterRepository,
    project::ProjectRepository, skill::SkillRepository,
};
use uuid::{uuid, Uuid};

pub mod blog;
pub mod contact;
pub mod newsletter;
pub mod project;
pub mod skill;

pub const UUID1: Uuid = uuid!("eb1cd87a-4475-4d68-a2c2-0216bdaac8f7");

pub async fn create<Txn: Send + Sync + 'static>(
    txn: &mut Txn,
    contact: impl ContactRepository<Txn>,
    newsletter: impl NewsletterRepository<Txn>,
    project: impl ProjectRepository<Txn>,
    skill: impl SkillRepository<Txn>,
    blog: impl BlogRepository<Txn>,
) -> anyhow::Result<()> {
    contact::create(txn, contact).await?;
    newsletter::create(txn, newsletter).await?;
    project::create(txn, project).await?;
    skill::create(txn, skill).await?;
    blog::create(txn, blog).await?;
    Ok(())
}
