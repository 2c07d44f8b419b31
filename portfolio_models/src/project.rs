use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::macros::{id, nutype_string};

id!(ProjectId);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: ProjectId,
    pub title: ProjectTitle,
    pub short_description: ProjectShortDescription,
    pub description: ProjectDescription,
    pub image_url: Option<Url>,
    pub demo_url: Option<Url>,
    pub github_url: Option<Url>,
    pub technologies: ProjectTechnologies,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectFilter {
    pub featured: Option<bool>,
}

nutype_string!(ProjectTitle(
    sanitize(trim),
    validate(not_empty, len_char_max = 200)
));
nutype_string!(ProjectShortDescription(
    sanitize(trim),
    validate(not_empty, len_char_max = 300)
));
nutype_string!(ProjectDescription(sanitize(trim), validate(not_empty)));

/// The technologies a project has been built with, e.g. `Rust`, `PostgreSQL`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectTechnologies(Vec<String>);

impl ProjectTechnologies {
    /// Parses a comma separated list of technologies. Entries are trimmed and
    /// empty entries are skipped.
    pub fn from_comma_separated(s: &str) -> Self {
        s.split(',')
            .map(str::trim)
            .filter(|x| !x.is_empty())
            .map(Into::into)
            .collect()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl FromIterator<String> for ProjectTechnologies {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|x| x.trim().to_owned())
                .filter(|x| !x.is_empty())
                .collect(),
        )
    }
}

impl std::fmt::Display for ProjectTechnologies {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}
