//! Campaign scenario and media asset records.

use derive_getters::Getters;
use serde::Serialize;

/// High-level description of a video campaign.
///
/// # Examples
///
/// ```
/// use reelsmith_core::ScenarioBuilder;
///
/// let scenario = ScenarioBuilder::default()
///     .title("Demo")
///     .objectives(vec!["Grow reach".to_string()])
///     .audience("Creators")
///     .call_to_action("Subscribe")
///     .build()
///     .expect("Valid scenario");
///
/// assert_eq!(scenario.title(), "Demo");
/// assert!(scenario.platforms().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct Scenario {
    /// Campaign title.
    title: String,

    /// Free-text description.
    #[builder(default)]
    description: String,

    /// Ordered campaign objectives.
    #[builder(default)]
    objectives: Vec<String>,

    /// Audience description.
    #[builder(default)]
    audience: String,

    /// Voice of the campaign, empty when unspecified.
    #[builder(default)]
    tone: String,

    /// Call-to-action text, carried verbatim into every prompt.
    #[builder(default)]
    call_to_action: String,

    /// Target platform identifiers as written in the source.
    #[builder(default)]
    platforms: Vec<String>,
}

/// Existing media referenced by a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct MediaAsset {
    /// Asset identifier.
    id: String,

    /// Free-text description.
    #[builder(default)]
    description: String,

    /// Tags, unique and in first-seen order.
    #[builder(default)]
    tags: Vec<String>,
}

impl MediaAsset {
    /// Render this asset as a prompt reference line.
    ///
    /// ```
    /// use reelsmith_core::MediaAssetBuilder;
    ///
    /// let asset = MediaAssetBuilder::default()
    ///     .id("B1")
    ///     .description("Demo clip")
    ///     .tags(vec!["product".to_string(), "demo".to_string()])
    ///     .build()
    ///     .expect("Valid asset");
    /// assert_eq!(asset.reference(), "B1: Demo clip [tags: product, demo]");
    /// ```
    pub fn reference(&self) -> String {
        format!(
            "{}: {} [tags: {}]",
            self.id,
            self.description,
            self.tags.join(", ")
        )
    }
}
