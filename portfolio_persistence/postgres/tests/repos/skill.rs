use portfolio_demo::skill::ALL_SKILLS;
use portfolio_persistence_contracts::{skill::SkillRepository, Database};
use portfolio_persistence_postgres::skill::PostgresSkillRepository;
use pretty_assertions::assert_eq;

use crate::common::setup;

const REPO: PostgresSkillRepository = PostgresSkillRepository;

#[tokio::test]
async fn list() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let result = REPO.list(&mut txn).await.unwrap();
    assert_eq!(result.iter().collect::<Vec<_>>(), *ALL_SKILLS);
}
