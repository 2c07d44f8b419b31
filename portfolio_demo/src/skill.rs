use std::sync::LazyLock;

use portfolio_models::skill::{Skill, SkillCategory, SkillProficiency};
use portfolio_persistence_contracts::skill::SkillRepository;
use uuid::uuid;

/// Ordered by category, proficiency (descending) and name.
pub static ALL_SKILLS: LazyLock<Vec<&Skill>> =
    LazyLock::new(|| vec![&PYTHON, &RUST, &POSTGRESQL, &DOCKER, &REACT]);

pub static RUST: LazyLock<Skill> = LazyLock::new(|| Skill {
    id: uuid!("1d6a2c1e-7d0b-4c5e-9a8f-3b2c1d0e9f8a").into(),
    name: "Rust".try_into().unwrap(),
    category: SkillCategory::Backend,
    proficiency: SkillProficiency::try_new(90).unwrap(),
    icon_class: "fab fa-rust".try_into().unwrap(),
});

pub static PYTHON: LazyLock<Skill> = LazyLock::new(|| Skill {
    id: uuid!("2e7b3d2f-8e1c-4d6f-8b9a-4c3d2e1f0a9b").into(),
    name: "Python".try_into().unwrap(),
    category: SkillCategory::Backend,
    proficiency: SkillProficiency::try_new(90).unwrap(),
    icon_class: "fab fa-python".try_into().unwrap(),
});

pub static POSTGRESQL: LazyLock<Skill> = LazyLock::new(|| Skill {
    id: uuid!("3f8c4e3a-9f2d-4e7a-9cab-5d4e3f2a1b0c").into(),
    name: "PostgreSQL".try_into().unwrap(),
    category: SkillCategory::Database,
    proficiency: SkillProficiency::try_new(80).unwrap(),
    icon_class: "fas fa-database".try_into().unwrap(),
});

pub static DOCKER: LazyLock<Skill> = LazyLock::new(|| Skill {
    id: uuid!("4a9d5f4b-0a3e-4f8b-adbc-6e5f4a3b2c1d").into(),
    name: "Docker".try_into().unwrap(),
    category: SkillCategory::Devops,
    proficiency: Default::default(),
    icon_class: Default::default(),
});

pub static REACT: LazyLock<Skill> = LazyLock::new(|| Skill {
    id: uuid!("5b0e6a5c-1b4f-4a9c-becd-7f6a5b4c3d2e").into(),
    name: "React".try_into().unwrap(),
    category: SkillCategory::Frontend,
    proficiency: SkillProficiency::try_new(70).unwrap(),
    icon_class: "fab fa-react".try_into().unwrap(),
});

pub async fn create<Txn: Send + Sync + 'static>(
    txn: &mut Txn,
    repo: impl SkillRepository<Txn>,
) -> anyhow::Result<()> {
    for skill in ALL_SKILLS.iter() {
        repo.create(txn, skill).await?;
    }
    Ok(())
}
