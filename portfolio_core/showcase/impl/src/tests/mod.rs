use portfolio_core_showcase_contracts::SkillGroup;
use portfolio_demo::skill::{DOCKER, POSTGRESQL, PYTHON, REACT, RUST};
use portfolio_models::skill::SkillCategory;
use portfolio_persistence_contracts::{
    blog::MockBlogRepository, project::MockProjectRepository, skill::MockSkillRepository,
    MockDatabase, MockTransaction,
};
use portfolio_shared_contracts::time::MockTimeService;

use crate::ShowcaseFeatureServiceImpl;

mod blog;

type Sut = ShowcaseFeatureServiceImpl<
    MockDatabase,
    MockTimeService,
    MockProjectRepository<MockTransaction>,
    MockSkillRepository<MockTransaction>,
    MockBlogRepository<MockTransaction>,
>;

/// The demo skills grouped by category.
fn skill_groups() -> Vec<SkillGroup> {
    vec![
        SkillGroup {
            category: SkillCategory::Backend,
            skills: vec![PYTHON.clone(), RUST.clone()],
        },
        SkillGroup {
            category: SkillCategory::Database,
            skills: vec![POSTGRESQL.clone()],
        },
        SkillGroup {
            category: SkillCategory::Devops,
            skills: vec![DOCKER.clone()],
        },
        SkillGroup {
            category: SkillCategory::Frontend,
            skills: vec![REACT.clone()],
        },
    ]
}
