//! Domain entities for the Creations domain
//!
//! Creations are server-owned. The client only ever receives full snapshots
//! and never builds or patches one locally.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use creatorkit_common::Error;

/// Shown when a published creation has no creator name
pub const ANONYMOUS_CREATOR: &str = "Anonymous";

/// Server-assigned creation identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CreationId(pub i64);

impl<'de> Deserialize<'de> for CreationId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(i64),
            Text(String),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Number(n) => Ok(Self(n)),
            RawId::Text(s) => s
                .trim()
                .parse()
                .map(Self)
                .map_err(|_| serde::de::Error::custom(format!("invalid creation id: {s}"))),
        }
    }
}

impl std::fmt::Display for CreationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CreationId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|_| Error::Validation(format!("Invalid creation id: {}", s)))
    }
}

/// Creation type; decides how `content` is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreationType {
    Image,
    Text,
}

impl std::fmt::Display for CreationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreationType::Image => write!(f, "image"),
            CreationType::Text => write!(f, "text"),
        }
    }
}

impl std::str::FromStr for CreationType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(Self::Image),
            "text" => Ok(Self::Text),
            other => Err(Error::Validation(format!(
                "Unknown creation type: {}. Expected image or text",
                other
            ))),
        }
    }
}

/// Type filter for list views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(CreationType),
}

impl TypeFilter {
    pub fn matches(&self, kind: CreationType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(wanted) => *wanted == kind,
        }
    }
}

impl std::fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeFilter::All => write!(f, "all"),
            TypeFilter::Only(kind) => write!(f, "{}", kind),
        }
    }
}

impl std::str::FromStr for TypeFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            other => other.parse().map(Self::Only),
        }
    }
}

/// Creator reference attached to published creations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    #[serde(default)]
    pub name: Option<String>,
}

/// How a creation's content must be rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationBody<'a> {
    ImageUrl(&'a str),
    Markdown(&'a str),
}

/// A generated creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creation {
    pub id: CreationId,
    #[serde(rename = "type")]
    pub kind: CreationType,
    pub prompt: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// User ids that liked this creation; duplicates collapse
    #[serde(default, deserialize_with = "deserialize_likes")]
    pub likes: BTreeSet<String>,
    #[serde(default)]
    pub creator: Option<Creator>,
    #[serde(default)]
    pub publish: Option<bool>,
}

impl Creation {
    pub fn body(&self) -> CreationBody<'_> {
        match self.kind {
            CreationType::Image => CreationBody::ImageUrl(&self.content),
            CreationType::Text => CreationBody::Markdown(&self.content),
        }
    }

    pub fn like_count(&self) -> usize {
        self.likes.len()
    }

    /// Whether the given user has liked this creation
    pub fn liked_by(&self, user_id: &str) -> bool {
        self.likes.contains(user_id)
    }

    pub fn creator_name(&self) -> &str {
        self.creator
            .as_ref()
            .and_then(|c| c.name.as_deref())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(ANONYMOUS_CREATOR)
    }

    /// Case-insensitive substring match on the prompt
    pub fn prompt_matches(&self, search: &str) -> bool {
        search.is_empty() || self.prompt.to_lowercase().contains(&search.to_lowercase())
    }
}

fn deserialize_likes<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let likes: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(likes.unwrap_or_default().into_iter().collect())
}
