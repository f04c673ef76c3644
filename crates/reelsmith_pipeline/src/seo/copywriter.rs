//! Promotional copy built from keyword research.

use reelsmith_core::{CraftedCopy, KeywordInsight, Scenario, normalize_platform_key};

/// Research keywords that feed crafted copy.
const COPY_KEYWORDS: usize = 3;

/// The leading research keywords used for crafted copy, in research order.
pub fn copy_keywords(insights: &[KeywordInsight]) -> Vec<String> {
    insights
        .iter()
        .take(COPY_KEYWORDS)
        .map(|insight| insight.keyword().clone())
        .collect()
}

/// Craft a title, description and tags for one platform.
///
/// The title joins the scenario title with the first two keywords; tags
/// are every keyword with its spaces removed. Nothing is truncated.
///
/// # Examples
///
/// ```
/// use reelsmith_core::ScenarioBuilder;
/// use reelsmith_pipeline::seo::craft_copy;
///
/// let scenario = ScenarioBuilder::default()
///     .title("Demo")
///     .objectives(vec!["Grow reach".to_string(), "Signups".to_string()])
///     .tone("Upbeat")
///     .call_to_action("Subscribe")
///     .build()
///     .unwrap();
///
/// let copy = craft_copy(&scenario, "YouTube", &["demo".to_string(), "grow reach".to_string()]);
/// assert_eq!(copy.title(), "Demo | demo grow reach");
/// assert_eq!(
///     copy.description(),
///     "Discover Subscribe with insights for youtube. Tone: Upbeat. Goals: Grow reach, Signups."
/// );
/// assert_eq!(copy.tags(), &vec!["demo".to_string(), "growreach".to_string()]);
/// ```
pub fn craft_copy(scenario: &Scenario, platform: &str, keywords: &[String]) -> CraftedCopy {
    let platform = normalize_platform_key(platform);
    let lead = keywords.iter().take(2).cloned().collect::<Vec<_>>().join(" ");
    let title = format!("{} | {}", scenario.title(), lead).trim().to_string();
    let description = format!(
        "Discover {} with insights for {}. Tone: {}. Goals: {}.",
        scenario.call_to_action(),
        platform,
        scenario.tone(),
        scenario.objectives().join(", ")
    );
    let tags = keywords.iter().map(|keyword| keyword.replace(' ', "")).collect();

    tracing::debug!(platform = %platform, title = %title, "Crafted copy");
    CraftedCopy::new(platform, title, description, tags)
}
