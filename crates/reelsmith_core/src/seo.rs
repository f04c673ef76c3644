//! SEO copy and keyword research records.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Formatted metadata for one platform.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct SeoCopy {
    /// Normalized platform key.
    platform: String,
    /// Title, truncated to the platform limit.
    title: String,
    /// Description followed by the hashtag line.
    description: String,
    /// Keywords used for hashtags.
    keywords: Vec<String>,
}

impl SeoCopy {
    /// Create SEO copy for a platform.
    pub fn new(
        platform: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        keywords: Vec<String>,
    ) -> Self {
        Self {
            platform: platform.into(),
            title: title.into(),
            description: description.into(),
            keywords,
        }
    }
}

/// Projected competition for a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum Competition {
    /// Contested keyword.
    #[display("medium")]
    Medium,
    /// Open keyword.
    #[display("low")]
    Low,
}

/// Synthetic keyword research result.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct KeywordInsight {
    /// Lowercased keyword.
    keyword: String,
    /// Projected monthly searches.
    search_volume: u32,
    /// Projected competition.
    competition: Competition,
}

impl KeywordInsight {
    /// Create a research result.
    pub fn new(keyword: impl Into<String>, search_volume: u32, competition: Competition) -> Self {
        Self {
            keyword: keyword.into(),
            search_volume,
            competition,
        }
    }
}

/// Promotional copy crafted from the top research keywords.
///
/// # Examples
///
/// ```
/// use reelsmith_core::CraftedCopy;
///
/// let copy = CraftedCopy::new("youtube", "Demo | demo", "Discover more.", vec!["demo".to_string()]);
/// assert_eq!(copy.to_text(), "Title: Demo | demo\nDescription: Discover more.\nTags: demo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct CraftedCopy {
    /// Normalized platform key.
    platform: String,
    /// `<title> | <kw1> <kw2>`
    title: String,
    /// Call to action, tone and goals in one paragraph.
    description: String,
    /// Keywords with spaces removed.
    tags: Vec<String>,
}

impl CraftedCopy {
    /// Create crafted copy for a platform.
    pub fn new(
        platform: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            platform: platform.into(),
            title: title.into(),
            description: description.into(),
            tags,
        }
    }

    /// Three-line `Title:`, `Description:`, `Tags:` block.
    pub fn to_text(&self) -> String {
        format!(
            "Title: {}\nDescription: {}\nTags: {}",
            self.title,
            self.description,
            self.tags.join(", ")
        )
    }
}
