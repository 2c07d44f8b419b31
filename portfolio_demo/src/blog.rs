use std::sync::LazyLock;

use chrono::{TimeZone, Utc};
use portfolio_models::blog::BlogPost;
use portfolio_persistence_contracts::blog::BlogRepository;
use uuid::uuid;

/// Newest first.
pub static ALL_BLOG_POSTS: LazyLock<Vec<&BlogPost>> =
    LazyLock::new(|| vec![&DRAFT, &RUST_TIPS, &HELLO_WORLD]);

/// Newest first.
pub static PUBLISHED_BLOG_POSTS: LazyLock<Vec<&BlogPost>> =
    LazyLock::new(|| vec![&RUST_TIPS, &HELLO_WORLD]);

pub static HELLO_WORLD: LazyLock<BlogPost> = LazyLock::new(|| BlogPost {
    id: uuid!("7d2a8c7e-3d6b-4cbe-8def-9b8c7d6e5f40").into(),
    title: "Hello World".try_into().unwrap(),
    slug: "hello-world".try_into().unwrap(),
    excerpt: "The first post on this blog.".try_into().unwrap(),
    content: "Welcome to my blog! I will write about backend development here."
        .try_into()
        .unwrap(),
    featured_image_url: None,
    published: true,
    created_at: Utc.with_ymd_and_hms(2024, 2, 1, 10, 0, 0).unwrap(),
    updated_at: Utc.with_ymd_and_hms(2024, 2, 1, 10, 0, 0).unwrap(),
});

pub static RUST_TIPS: LazyLock<BlogPost> = LazyLock::new(|| BlogPost {
    id: uuid!("8e3b9d8f-4e7c-4dcf-9ef0-ac9d8e7f6051").into(),
    title: "Five Rust Tips".try_into().unwrap(),
    slug: "five-rust-tips".try_into().unwrap(),
    excerpt: "Small things that make Rust code nicer to read.".try_into().unwrap(),
    content: "1. Use the ? operator. 2. Prefer iterators. 3. Derive what you can."
        .try_into()
        .unwrap(),
    featured_image_url: Some("https://portfolio.example.com/media/rust.png".parse().unwrap()),
    published: true,
    created_at: Utc.with_ymd_and_hms(2024, 4, 1, 10, 0, 0).unwrap(),
    updated_at: Utc.with_ymd_and_hms(2024, 4, 3, 18, 0, 0).unwrap(),
});

pub static DRAFT: LazyLock<BlogPost> = LazyLock::new(|| BlogPost {
    id: uuid!("9f4cae90-5f8d-4ed0-af01-bdae9f807162").into(),
    title: "Work in Progress".try_into().unwrap(),
    slug: "work-in-progress".try_into().unwrap(),
    excerpt: "Not ready yet.".try_into().unwrap(),
    content: "Draft content.".try_into().unwrap(),
    featured_image_url: None,
    published: false,
    created_at: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
    updated_at: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
});

pub async fn create<Txn: Send + Sync + 'static>(
    txn: &mut Txn,
    repo: impl BlogRepository<Txn>,
) -> anyhow::Result<()> {
    for post in ALL_BLOG_POSTS.iter().rev() {
        repo.create(txn, post).await?;
    }
    Ok(())
}
