use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use portfolio_core_showcase_contracts::{ShowcaseFeatureService, ShowcaseGetBlogPostError};
use portfolio_models::blog::BlogPostSlug;
use serde::Serialize;

use crate::{
    errors::{error, internal_server_error},
    models::showcase::{skill_groups, ApiBlogPost, ApiOverview, ApiProject, ApiSkillGroups},
};

pub fn router(service: Arc<impl ShowcaseFeatureService>) -> Router<()> {
    Router::new()
        .route("/home", routing::get(overview))
        .route("/projects", routing::get(list_projects))
        .route("/skills", routing::get(list_skills))
        .route("/blog", routing::get(list_blog_posts))
        .route("/blog/:slug", routing::get(get_blog_post))
        .with_state(service)
}

#[derive(Serialize)]
struct ProjectsResponse {
    projects: Vec<ApiProject>,
}

#[derive(Serialize)]
struct SkillsResponse {
    skills: ApiSkillGroups,
}

#[derive(Serialize)]
struct BlogPostsResponse {
    posts: Vec<ApiBlogPost>,
}

async fn overview(service: State<Arc<impl ShowcaseFeatureService>>) -> Response {
    match service.get_overview().await {
        Ok(overview) => Json(ApiOverview::from(overview)).into_response(),
        Err(err) => internal_server_error(err),
    }
}

async fn list_projects(service: State<Arc<impl ShowcaseFeatureService>>) -> Response {
    match service.list_projects().await {
        Ok(projects) => Json(ProjectsResponse {
            projects: projects.into_iter().map(Into::into).collect(),
        })
        .into_response(),
        Err(err) => internal_server_error(err),
    }
}

async fn list_skills(service: State<Arc<impl ShowcaseFeatureService>>) -> Response {
    match service.list_skills().await {
        Ok(groups) => Json(SkillsResponse {
            skills: skill_groups(groups),
        })
        .into_response(),
        Err(err) => internal_server_error(err),
    }
}

async fn list_blog_posts(service: State<Arc<impl ShowcaseFeatureService>>) -> Response {
    match service.list_blog_posts().await {
        Ok(posts) => Json(BlogPostsResponse {
            posts: posts.into_iter().map(Into::into).collect(),
        })
        .into_response(),
        Err(err) => internal_server_error(err),
    }
}

async fn get_blog_post(
    service: State<Arc<impl ShowcaseFeatureService>>,
    Path(slug): Path<String>,
) -> Response {
    let Ok(slug) = BlogPostSlug::try_new(slug) else {
        return blog_post_not_found();
    };

    match service.get_blog_post(slug).await {
        Ok(post) => Json(ApiBlogPost::from(post)).into_response(),
        Err(ShowcaseGetBlogPostError::NotFound) => blog_post_not_found(),
        Err(ShowcaseGetBlogPostError::Other(err)) => internal_server_error(err),
    }
}

fn blog_post_not_found() -> Response {
    error(StatusCode::NOT_FOUND, "Blog post not found")
}
