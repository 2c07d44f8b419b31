use chrono::{TimeZone, Utc};
use portfolio_core_showcase_contracts::{
    ShowcaseFeatureService, ShowcaseGetBlogPostError, ShowcaseSetBlogPostPublishedError,
};
use portfolio_demo::blog::{DRAFT, PUBLISHED_BLOG_POSTS, RUST_TIPS};
use portfolio_models::blog::{BlogPostFilter, BlogPostSlug};
use portfolio_persistence_contracts::{blog::MockBlogRepository, MockDatabase};
use portfolio_shared_contracts::time::MockTimeService;
use portfolio_utils::assert_matches;
use pretty_assertions::assert_eq;

use crate::{tests::Sut, ShowcaseFeatureServiceImpl};

#[tokio::test]
async fn list_published() {
    // Arrange
    let expected = PUBLISHED_BLOG_POSTS
        .iter()
        .copied()
        .cloned()
        .collect::<Vec<_>>();

    let db = MockDatabase::build(false);
    let blog_repo = MockBlogRepository::new().with_list(
        BlogPostFilter {
            published: Some(true),
        },
        None,
        expected.clone(),
    );

    let sut = ShowcaseFeatureServiceImpl {
        db,
        blog_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.list_blog_posts().await;

    // Assert
    assert_eq!(result.unwrap(), expected);
}

#[tokio::test]
async fn get() {
    // Arrange
    let db = MockDatabase::build(false);
    let blog_repo = MockBlogRepository::new()
        .with_get_by_slug(RUST_TIPS.slug.clone(), Some(RUST_TIPS.clone()));

    let sut = ShowcaseFeatureServiceImpl {
        db,
        blog_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.get_blog_post(RUST_TIPS.slug.clone()).await;

    // Assert
    assert_eq!(result.unwrap(), *RUST_TIPS);
}

#[tokio::test]
async fn get_unpublished() {
    // Arrange
    let db = MockDatabase::build(false);
    let blog_repo =
        MockBlogRepository::new().with_get_by_slug(DRAFT.slug.clone(), Some(DRAFT.clone()));

    let sut = ShowcaseFeatureServiceImpl {
        db,
        blog_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.get_blog_post(DRAFT.slug.clone()).await;

    // Assert
    assert_matches!(result, Err(ShowcaseGetBlogPostError::NotFound));
}

#[tokio::test]
async fn get_not_found() {
    // Arrange
    let slug = BlogPostSlug::try_new("does-not-exist").unwrap();

    let db = MockDatabase::build(false);
    let blog_repo = MockBlogRepository::new().with_get_by_slug(slug.clone(), None);

    let sut = ShowcaseFeatureServiceImpl {
        db,
        blog_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.get_blog_post(slug).await;

    // Assert
    assert_matches!(result, Err(ShowcaseGetBlogPostError::NotFound));
}

#[tokio::test]
async fn publish() {
    // Arrange
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

    let db = MockDatabase::build(true);
    let time = MockTimeService::new().with_now(now);
    let blog_repo =
        MockBlogRepository::new().with_update_published(DRAFT.slug.clone(), true, now, true);

    let sut = ShowcaseFeatureServiceImpl {
        db,
        time,
        blog_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.set_blog_post_published(DRAFT.slug.clone(), true).await;

    // Assert
    result.unwrap();
}

#[tokio::test]
async fn publish_not_found() {
    // Arrange
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let slug = BlogPostSlug::try_new("does-not-exist").unwrap();

    let db = MockDatabase::build(false);
    let time = MockTimeService::new().with_now(now);
    let blog_repo =
        MockBlogRepository::new().with_update_published(slug.clone(), false, now, false);

    let sut = ShowcaseFeatureServiceImpl {
        db,
        time,
        blog_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.set_blog_post_published(slug, false).await;

    // Assert
    assert_matches!(result, Err(ShowcaseSetBlogPostPublishedError::NotFound));
}
