use portfolio_demo::{
    project::{ALL_PROJECTS, CHAT_BOT, FEATURED_PROJECTS, LOG_ANALYZER},
    UUID1,
};
use portfolio_models::project::ProjectFilter;
use portfolio_persistence_contracts::{project::ProjectRepository, Database};
use portfolio_persistence_postgres::project::PostgresProjectRepository;
use pretty_assertions::assert_eq;

use crate::common::setup;

const REPO: PostgresProjectRepository = PostgresProjectRepository;

#[tokio::test]
async fn list() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    for (filter, limit, expected) in [
        (ProjectFilter::default(), None, ALL_PROJECTS.clone()),
        (ProjectFilter::default(), Some(1), vec![&*CHAT_BOT]),
        (
            ProjectFilter {
                featured: Some(true),
            },
            None,
            FEATURED_PROJECTS.clone(),
        ),
        (
            ProjectFilter {
                featured: Some(false),
            },
            None,
            vec![&*LOG_ANALYZER],
        ),
    ] {
        let result = REPO.list(&mut txn, filter, limit).await.unwrap();
        assert_eq!(result.iter().collect::<Vec<_>>(), expected);
    }
}

#[tokio::test]
async fn update_featured() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let result = REPO
        .update_featured(&mut txn, LOG_ANALYZER.id, true)
        .await
        .unwrap();
    assert!(result);

    let result = REPO
        .list(&mut txn, ProjectFilter::default(), Some(1))
        .await
        .unwrap();
    assert_eq!(result[0].id, LOG_ANALYZER.id);
    assert!(result[0].featured);

    let result = REPO.update_featured(&mut txn, UUID1.into(), true).await.unwrap();
    assert!(!result);
}
