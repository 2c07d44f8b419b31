use portfolio_demo::blog::{ALL_BLOG_POSTS, DRAFT, HELLO_WORLD, PUBLISHED_BLOG_POSTS, RUST_TIPS};
use portfolio_models::blog::{BlogPost, BlogPostFilter};
use portfolio_persistence_contracts::{
    blog::{BlogRepoError, BlogRepository},
    Database,
};
use portfolio_persistence_postgres::blog::PostgresBlogRepository;
use portfolio_utils::assert_matches;
use pretty_assertions::assert_eq;

use crate::common::setup;

const REPO: PostgresBlogRepository = PostgresBlogRepository;

#[tokio::test]
async fn list() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    for (published, limit, expected) in [
        (None, None, ALL_BLOG_POSTS.clone()),
        (Some(true), None, PUBLISHED_BLOG_POSTS.clone()),
        (Some(true), Some(1), vec![&*RUST_TIPS]),
        (Some(false), None, vec![&*DRAFT]),
    ] {
        let result = REPO
            .list(&mut txn, BlogPostFilter { published }, limit)
            .await
            .unwrap();
        assert_eq!(result.iter().collect::<Vec<_>>(), expected);
    }
}

#[tokio::test]
async fn get_by_slug() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    for &post in &*ALL_BLOG_POSTS {
        let result = REPO.get_by_slug(&mut txn, &post.slug).await.unwrap();
        assert_eq!(result.as_ref(), Some(post));
    }

    let result = REPO
        .get_by_slug(&mut txn, &"does-not-exist".try_into().unwrap())
        .await
        .unwrap();
    assert_eq!(result, None);
}

#[tokio::test]
async fn create_slug_conflict() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let post = BlogPost {
        id: portfolio_demo::UUID1.into(),
        ..HELLO_WORLD.clone()
    };

    let result = REPO.create(&mut txn, &post).await;
    assert_matches!(result, Err(BlogRepoError::SlugConflict));
}

#[tokio::test]
async fn update_published() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let result = REPO
        .update_published(&mut txn, &DRAFT.slug, true, RUST_TIPS.updated_at)
        .await
        .unwrap();
    assert!(result);

    let result = REPO
        .get_by_slug(&mut txn, &DRAFT.slug)
        .await
        .unwrap()
        .unwrap();
    assert!(result.published);
    assert_eq!(result.updated_at, RUST_TIPS.updated_at);

    let result = REPO
        .update_published(
            &mut txn,
            &"does-not-exist".try_into().unwrap(),
            true,
            RUST_TIPS.updated_at,
        )
        .await
        .unwrap();
    assert!(!result);
}
