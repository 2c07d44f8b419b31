use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use portfolio_core_showcase_contracts::{ShowcaseOverview, SkillGroup};
use portfolio_models::{
    blog::{BlogPost, BlogPostExcerpt, BlogPostId, BlogPostSlug, BlogPostTitle},
    project::{Project, ProjectDescription, ProjectId, ProjectShortDescription, ProjectTitle},
    skill::{Skill, SkillIconClass, SkillName, SkillProficiency},
    Url,
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ApiProject {
    pub id: ProjectId,
    pub title: ProjectTitle,
    pub short_description: ProjectShortDescription,
    pub description: ProjectDescription,
    pub image_url: Option<Url>,
    pub demo_url: Option<Url>,
    pub github_url: Option<Url>,
    pub technologies: Vec<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Project> for ApiProject {
    fn from(value: Project) -> Self {
        Self {
            id: value.id,
            title: value.title,
            short_description: value.short_description,
            description: value.description,
            image_url: value.image_url,
            demo_url: value.demo_url,
            github_url: value.github_url,
            technologies: value.technologies.into_inner(),
            featured: value.featured,
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiSkill {
    pub name: SkillName,
    pub proficiency: SkillProficiency,
    pub icon_class: SkillIconClass,
}

impl From<Skill> for ApiSkill {
    fn from(value: Skill) -> Self {
        Self {
            name: value.name,
            proficiency: value.proficiency,
            icon_class: value.icon_class,
        }
    }
}

/// Skills keyed by the display name of their category.
pub type ApiSkillGroups = BTreeMap<&'static str, Vec<ApiSkill>>;

pub fn skill_groups(groups: Vec<SkillGroup>) -> ApiSkillGroups {
    groups
        .into_iter()
        .map(|group| {
            (
                group.category.display_name(),
                group.skills.into_iter().map(Into::into).collect(),
            )
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiBlogPost {
    pub id: BlogPostId,
    pub title: BlogPostTitle,
    pub slug: BlogPostSlug,
    pub url: String,
    pub excerpt: BlogPostExcerpt,
    pub content: String,
    pub featured_image_url: Option<Url>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BlogPost> for ApiBlogPost {
    fn from(value: BlogPost) -> Self {
        Self {
            url: value.url_path(),
            id: value.id,
            title: value.title,
            slug: value.slug,
            excerpt: value.excerpt,
            content: value.content.into_inner(),
            featured_image_url: value.featured_image_url,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiOverview {
    pub featured_projects: Vec<ApiProject>,
    pub skills: ApiSkillGroups,
    pub recent_posts: Vec<ApiBlogPost>,
}

impl From<ShowcaseOverview> for ApiOverview {
    fn from(value: ShowcaseOverview) -> Self {
        Self {
            featured_projects: value
                .featured_projects
                .into_iter()
                .map(Into::into)
                .collect(),
            skills: skill_groups(value.skills),
            recent_posts: value
                .recent_blog_posts
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}
