use std::sync::LazyLock;

use chrono::{TimeZone, Utc};
use portfolio_models::project::{Project, ProjectTechnologies};
use portfolio_persistence_contracts::project::ProjectRepository;
use uuid::uuid;

/// Featured projects first, then newest first.
pub static ALL_PROJECTS: LazyLock<Vec<&Project>> =
    LazyLock::new(|| vec![&CHAT_BOT, &PORTFOLIO_SITE, &LOG_ANALYZER]);

pub static FEATURED_PROJECTS: LazyLock<Vec<&Project>> =
    LazyLock::new(|| vec![&CHAT_BOT, &PORTFOLIO_SITE]);

pub static PORTFOLIO_SITE: LazyLock<Project> = LazyLock::new(|| Project {
    id: uuid!("a3b5a4c2-51c9-4c1b-9f0e-0f4d2d9e6a11").into(),
    title: "Portfolio Website".try_into().unwrap(),
    short_description: "My personal portfolio and blog.".try_into().unwrap(),
    description: "A server rendered portfolio with a blog, a contact form and a newsletter."
        .try_into()
        .unwrap(),
    image_url: None,
    demo_url: Some("https://portfolio.example.com/".parse().unwrap()),
    github_url: Some("https://github.com/example/portfolio".parse().unwrap()),
    technologies: ProjectTechnologies::from_comma_separated("Rust, axum, PostgreSQL"),
    featured: true,
    created_at: Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap(),
});

pub static CHAT_BOT: LazyLock<Project> = LazyLock::new(|| Project {
    id: uuid!("6f2d9b8e-3c4a-4e5f-8a7b-1c2d3e4f5a6b").into(),
    title: "Support Chat Bot".try_into().unwrap(),
    short_description: "A retrieval based chat bot for support tickets."
        .try_into()
        .unwrap(),
    description: "Answers frequent support questions using a small embedding index."
        .try_into()
        .unwrap(),
    image_url: Some("https://portfolio.example.com/media/chat-bot.png".parse().unwrap()),
    demo_url: None,
    github_url: Some("https://github.com/example/chat-bot".parse().unwrap()),
    technologies: ProjectTechnologies::from_comma_separated("Python, PyTorch, FastAPI"),
    featured: true,
    created_at: Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap(),
});

pub static LOG_ANALYZER: LazyLock<Project> = LazyLock::new(|| Project {
    id: uuid!("c4dba95e-8498-40fb-8412-7faecaf94787").into(),
    title: "Log Analyzer".try_into().unwrap(),
    short_description: "Command line tool to summarize access logs."
        .try_into()
        .unwrap(),
    description: "Parses nginx access logs and prints request statistics."
        .try_into()
        .unwrap(),
    image_url: None,
    demo_url: None,
    github_url: None,
    technologies: ProjectTechnologies::from_comma_separated("Rust"),
    featured: false,
    created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
});

pub async fn create<Txn: Send + Sync + 'static>(
    txn: &mut Txn,
    repo: impl ProjectRepository<Txn>,
) -> anyhow::Result<()> {
    for project in ALL_PROJECTS.iter() {
        repo.create(txn, project).await?;
    }
    Ok(())
}
