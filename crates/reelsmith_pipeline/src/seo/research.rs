//! Synthetic keyword research.

use reelsmith_core::{Competition, KeywordInsight, Scenario};

const BASE_VOLUME: u32 = 5000;
const VOLUME_STEP: u32 = 500;

/// Project search volume and competition for the title and objectives.
///
/// Volume falls by a fixed step per position and bottoms out at zero;
/// competition alternates starting from medium.
///
/// # Examples
///
/// ```
/// use reelsmith_core::{Competition, ScenarioBuilder};
/// use reelsmith_pipeline::seo::research_keywords;
///
/// let scenario = ScenarioBuilder::default()
///     .title("Demo")
///     .objectives(vec!["Grow Reach".to_string()])
///     .build()
///     .unwrap();
///
/// let insights = research_keywords(&scenario);
/// assert_eq!(insights[1].keyword(), "grow reach");
/// assert_eq!(*insights[1].search_volume(), 4500);
/// assert_eq!(*insights[1].competition(), Competition::Low);
/// ```
#[tracing::instrument(skip_all, fields(title = %scenario.title()))]
pub fn research_keywords(scenario: &Scenario) -> Vec<KeywordInsight> {
    std::iter::once(scenario.title())
        .chain(scenario.objectives())
        .enumerate()
        .map(|(index, keyword)| {
            let step = u32::try_from(index).unwrap_or(u32::MAX);
            let volume = BASE_VOLUME.saturating_sub(step.saturating_mul(VOLUME_STEP));
            let competition = if index % 2 == 0 {
                Competition::Medium
            } else {
                Competition::Low
            };
            KeywordInsight::new(keyword.to_lowercase(), volume, competition)
        })
        .collect()
}
