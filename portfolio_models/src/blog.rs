use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use url::Url;

use crate::macros::{id, nutype_string};

pub static BLOG_POST_SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap());

id!(BlogPostId);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    pub id: BlogPostId,
    pub title: BlogPostTitle,
    pub slug: BlogPostSlug,
    pub excerpt: BlogPostExcerpt,
    pub content: BlogPostContent,
    pub featured_image_url: Option<Url>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    pub fn url_path(&self) -> String {
        format!("/blog/{}/", *self.slug)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlogPostFilter {
    pub published: Option<bool>,
}

nutype_string!(BlogPostTitle(
    sanitize(trim),
    validate(not_empty, len_char_max = 200)
));
nutype_string!(BlogPostSlug(validate(
    len_char_max = 200,
    regex = BLOG_POST_SLUG_REGEX
)));
nutype_string!(BlogPostExcerpt(
    sanitize(trim),
    validate(not_empty, len_char_max = 500)
));
nutype_string!(BlogPostContent(sanitize(trim), validate(not_empty)));

impl BlogPostSlug {
    /// Derives a slug from a title by lowercasing it and joining its
    /// alphanumeric words with `-`.
    pub fn from_title(title: &BlogPostTitle) -> Option<Self> {
        let slug = title
            .to_lowercase()
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|x| !x.is_empty())
            .collect::<Vec<_>>()
            .join("-");
        let slug = slug
            .char_indices()
            .nth(200)
            .map(|(i, _)| slug[..i].trim_end_matches('-').to_owned())
            .unwrap_or(slug);
        Self::try_new(slug).ok()
    }
}
