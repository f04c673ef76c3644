//! Per-platform keyword lists.

use crate::PlatformConfig;
use reelsmith_core::{Scenario, normalize_platform_key};
use std::collections::BTreeMap;

/// Terms of this many characters or fewer are dropped.
const MIN_TERM_CHARS: usize = 3;

/// Lowercased, trimmed candidate terms shared by every platform.
///
/// Title, audience, call-to-action and each objective, in that order.
pub fn candidate_terms(scenario: &Scenario) -> Vec<String> {
    [scenario.title(), scenario.audience(), scenario.call_to_action()]
        .into_iter()
        .chain(scenario.objectives())
        .map(|term| term.trim().to_lowercase())
        .collect()
}

/// Keywords for one platform.
///
/// Candidate terms plus the platform's must-include hints, short terms
/// dropped, deduplicated, sorted and cut to the platform keyword limit.
pub fn keywords_for(scenario: &Scenario, platform: &str, config: &PlatformConfig) -> Vec<String> {
    let hints = config.hints_for(platform).terms();
    let limit = *config.requirements_for(platform).keyword_limit();

    let mut terms: Vec<String> = candidate_terms(scenario)
        .into_iter()
        .chain(hints.iter().map(|hint| hint.trim().to_lowercase()))
        .filter(|term| term.chars().count() > MIN_TERM_CHARS)
        .collect();
    terms.sort();
    terms.dedup();
    terms.truncate(limit);
    terms
}

/// Keywords for every platform, keyed by normalized platform.
///
/// # Examples
///
/// ```
/// use reelsmith_core::ScenarioBuilder;
/// use reelsmith_pipeline::PlatformConfig;
/// use reelsmith_pipeline::seo::generate_keywords;
///
/// let scenario = ScenarioBuilder::default()
///     .title("Demo Launch")
///     .objectives(vec!["Grow reach".to_string(), "SEO".to_string()])
///     .call_to_action("Subscribe")
///     .build()
///     .unwrap();
///
/// let keywords = generate_keywords(&scenario, &["YouTube".to_string()], &PlatformConfig::default());
/// assert_eq!(keywords["youtube"], vec!["demo launch", "grow reach", "subscribe"]);
/// ```
#[tracing::instrument(skip_all, fields(platforms = platforms.len()))]
pub fn generate_keywords(
    scenario: &Scenario,
    platforms: &[String],
    config: &PlatformConfig,
) -> BTreeMap<String, Vec<String>> {
    let keywords: BTreeMap<String, Vec<String>> = platforms
        .iter()
        .map(|platform| {
            let key = normalize_platform_key(platform);
            let terms = keywords_for(scenario, &key, config);
            tracing::debug!(platform = %key, count = terms.len(), "Generated keywords");
            (key, terms)
        })
        .collect();
    keywords
}
