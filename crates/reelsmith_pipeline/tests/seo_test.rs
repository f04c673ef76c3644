//! Tests for keyword generation, research and metadata formatting.

use reelsmith_core::{Competition, Scenario, ScenarioBuilder};
use reelsmith_pipeline::seo::{
    copy_keywords, craft_copy, format_metadata, generate_keywords, keywords_for, research_keywords,
};
use reelsmith_pipeline::PlatformConfig;

fn scenario() -> Scenario {
    ScenarioBuilder::default()
        .title("Demo")
        .objectives(vec!["Grow reach".to_string(), "SEO".to_string()])
        .audience("Creators")
        .call_to_action("Subscribe")
        .build()
        .expect("Valid scenario")
}

fn platform_config() -> PlatformConfig {
    PlatformConfig::from_toml_str(
        r#"
[platforms.youtube]
must_include = ["Tutorial", " Product Demo "]

[platforms.tiktok]
must_include = "trending sound, fyp"

[requirements.tiktok]
keyword_limit = 2

[requirements.instagram]
title_limit = 4
description_limit = 12
hashtag_limit = 1
"#,
    )
    .expect("Valid config")
}

fn platforms(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|k| k.to_string()).collect()
}

#[test]
fn test_one_keyword_list_per_platform() {
    let keywords = generate_keywords(
        &scenario(),
        &platforms(&["YouTube", "instagram", "tiktok"]),
        &platform_config(),
    );
    assert_eq!(keywords.len(), 3);
    assert!(keywords.contains_key("youtube"));
}

#[test]
fn test_keywords_merge_hints_sorted_without_short_terms() {
    let keywords = keywords_for(&scenario(), "youtube", &platform_config());
    assert_eq!(
        keywords,
        vec!["creators", "demo", "grow reach", "product demo", "subscribe", "tutorial"]
    );
    assert!(keywords.iter().all(|k| k.chars().count() > 3));
}

#[test]
fn test_keyword_limit_truncates_after_sorting() {
    let keywords = keywords_for(&scenario(), "tiktok", &platform_config());
    assert_eq!(keywords, vec!["creators", "demo"]);
}

#[test]
fn test_keywords_are_idempotent_and_order_independent() {
    let config = platform_config();
    let forward = generate_keywords(&scenario(), &platforms(&["youtube", "tiktok"]), &config);
    let again = generate_keywords(&scenario(), &platforms(&["youtube", "tiktok"]), &config);
    let backward = generate_keywords(&scenario(), &platforms(&["tiktok", "youtube"]), &config);
    assert_eq!(forward, again);
    assert_eq!(forward, backward);

    let shuffled = ScenarioBuilder::default()
        .title("Demo")
        .objectives(vec!["SEO".to_string(), "Grow reach".to_string()])
        .audience("Creators")
        .call_to_action("Subscribe")
        .build()
        .unwrap();
    assert_eq!(
        keywords_for(&scenario(), "youtube", &config),
        keywords_for(&shuffled, "youtube", &config)
    );
}

#[test]
fn test_format_metadata_applies_limits() {
    let config = platform_config();
    let keywords = vec!["grow reach".to_string(), "demo".to_string()];
    let copy = format_metadata(
        "Instagram",
        "Spring Launch",
        "Watch the full walkthrough now",
        &keywords,
        &config,
    );

    assert_eq!(copy.platform(), "instagram");
    assert_eq!(copy.title(), "Spri");
    assert_eq!(copy.description(), "Watch the fu\n\n#growreach");
    assert_eq!(copy.keywords(), &vec!["grow reach".to_string()]);
}

#[test]
fn test_description_limit_excludes_hashtags() {
    let config = platform_config();
    let long = "x".repeat(200);
    let keywords = vec!["alpha".to_string()];
    let copy = format_metadata("instagram", "T", &long, &keywords, &config);

    let (body, tags) = copy.description().split_once("\n\n").unwrap();
    assert!(body.chars().count() <= 12);
    assert_eq!(tags, "#alpha");
}

#[test]
fn test_format_metadata_defaults_without_requirements() {
    let title = "t".repeat(150);
    let copy = format_metadata("facebook", &title, "Body", &[], &PlatformConfig::default());
    assert_eq!(copy.title().chars().count(), 100);
    assert_eq!(copy.description(), "Body");
}

#[test]
fn test_format_metadata_truncates_by_character() {
    let config = PlatformConfig::from_toml_str("[requirements.youtube]\ntitle_limit = 3\n").unwrap();
    let copy = format_metadata("youtube", "éàüö", "", &[], &config);
    assert_eq!(copy.title(), "éàü");
    assert_eq!(copy.description(), "");
}

#[test]
fn test_hashtags_strip_all_whitespace() {
    let keywords = vec!["grow\treach now".to_string()];
    let copy = format_metadata("youtube", "T", "D", &keywords, &PlatformConfig::default());
    assert_eq!(copy.description(), "D\n\n#growreachnow");
}

#[test]
fn test_research_keywords_volumes_and_competition() {
    let insights = research_keywords(&scenario());
    let summary: Vec<(&str, u32, Competition)> = insights
        .iter()
        .map(|i| (i.keyword().as_str(), *i.search_volume(), *i.competition()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("demo", 5000, Competition::Medium),
            ("grow reach", 4500, Competition::Low),
            ("seo", 4000, Competition::Medium),
        ]
    );
}

#[test]
fn test_research_volume_floors_at_zero() {
    let objectives: Vec<String> = (0..12).map(|i| format!("goal {}", i)).collect();
    let scenario = ScenarioBuilder::default()
        .title("Demo")
        .objectives(objectives)
        .build()
        .unwrap();
    let insights = research_keywords(&scenario);
    assert_eq!(insights.len(), 13);
    assert_eq!(*insights[10].search_volume(), 0);
    assert_eq!(*insights[12].search_volume(), 0);
}

#[test]
fn test_copy_keywords_take_top_three_research_terms() {
    let scenario = ScenarioBuilder::default()
        .title("Demo")
        .objectives(vec![
            "Grow reach".to_string(),
            "SEO".to_string(),
            "Signups".to_string(),
        ])
        .build()
        .unwrap();
    let keywords = copy_keywords(&research_keywords(&scenario));
    assert_eq!(keywords, vec!["demo", "grow reach", "seo"]);
}

#[test]
fn test_crafted_copy_title_description_and_tags() {
    let scenario = ScenarioBuilder::default()
        .title("Demo")
        .objectives(vec!["Grow reach".to_string(), "SEO".to_string()])
        .tone("Upbeat")
        .call_to_action("Subscribe")
        .build()
        .unwrap();
    let keywords = copy_keywords(&research_keywords(&scenario));
    let copy = craft_copy(&scenario, "TikTok", &keywords);

    assert_eq!(copy.platform(), "tiktok");
    assert_eq!(copy.title(), "Demo | demo grow reach");
    assert_eq!(
        copy.description(),
        "Discover Subscribe with insights for tiktok. Tone: Upbeat. Goals: Grow reach, SEO."
    );
    assert_eq!(copy.tags(), &vec!["demo", "growreach", "seo"]);
    assert_eq!(
        copy.to_text(),
        "Title: Demo | demo grow reach\n\
         Description: Discover Subscribe with insights for tiktok. Tone: Upbeat. Goals: Grow reach, SEO.\n\
         Tags: demo, growreach, seo"
    );
}

#[test]
fn test_crafted_copy_without_keywords_keeps_bare_title() {
    let copy = craft_copy(&scenario(), "youtube", &[]);
    assert_eq!(copy.title(), "Demo |");
    assert!(copy.tags().is_empty());
    assert!(copy.description().contains("Tone: ."));
}
