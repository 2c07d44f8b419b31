use std::str::FromStr;

use nutype::nutype;
use serde::{Deserialize, Serialize};

use crate::macros::{id, nutype_string};

id!(SkillId);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub id: SkillId,
    pub name: SkillName,
    pub category: SkillCategory,
    pub proficiency: SkillProficiency,
    pub icon_class: SkillIconClass,
}

nutype_string!(SkillName(
    sanitize(trim),
    validate(not_empty, len_char_max = 100)
));

/// CSS class of the icon shown next to a skill. May be empty.
#[nutype(
    sanitize(trim),
    validate(len_char_max = 100),
    default = "",
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Deref,
        TryFrom,
        Default,
        Serialize,
        Deserialize
    )
)]
pub struct SkillIconClass(String);

/// Proficiency in percent.
#[nutype(
    validate(less_or_equal = 100),
    default = 50,
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Deref,
        TryFrom,
        Default,
        Serialize,
        Deserialize
    )
)]
pub struct SkillProficiency(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Frontend,
    Backend,
    AiMl,
    Database,
    Devops,
    Tools,
    Other,
}

impl SkillCategory {
    pub const ALL: [Self; 7] = [
        Self::Frontend,
        Self::Backend,
        Self::AiMl,
        Self::Database,
        Self::Devops,
        Self::Tools,
        Self::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::AiMl => "ai_ml",
            Self::Database => "database",
            Self::Devops => "devops",
            Self::Tools => "tools",
            Self::Other => "other",
        }
    }

    /// Human readable name used to group skills in listings.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::AiMl => "AI/ML",
            Self::Database => "Database",
            Self::Devops => "DevOps",
            Self::Tools => "Tools",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSkillCategory(pub String);

impl std::fmt::Display for InvalidSkillCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid skill category: {:?}", self.0)
    }
}

impl std::error::Error for InvalidSkillCategory {}

impl FromStr for SkillCategory {
    type Err = InvalidSkillCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|x| x.as_str() == s)
            .ok_or_else(|| InvalidSkillCategory(s.into()))
    }
}
