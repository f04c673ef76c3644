//! Tests for projected analytics.

use reelsmith_core::MetricUnit;
use reelsmith_pipeline::analytics::project_metrics;

#[test]
fn test_views_precede_rates() {
    let report = project_metrics(&["youtube".to_string(), "instagram".to_string()]);
    let names: Vec<&str> = report.metrics().iter().map(|m| m.name().as_str()).collect();
    assert_eq!(
        names,
        vec![
            "youtube_expected_views",
            "instagram_expected_views",
            "youtube_engagement_rate",
            "instagram_engagement_rate",
        ]
    );
    assert_eq!(*report.metrics()[0].unit(), MetricUnit::Views);
    assert_eq!(*report.metrics()[3].unit(), MetricUnit::Percent);
}

#[test]
fn test_projection_formulas() {
    let platforms: Vec<String> = ["youtube", "instagram", "tiktok"]
        .iter()
        .map(|p| p.to_string())
        .collect();
    let map = project_metrics(&platforms).to_map();

    assert_eq!(map.len(), 6);
    assert_eq!(map["youtube_expected_views"], 5000.0);
    assert_eq!(map["tiktok_expected_views"], 7000.0);
    assert_eq!(map["youtube_engagement_rate"], 4.5);
    assert_eq!(map["tiktok_engagement_rate"], 6.5);
}

#[test]
fn test_no_platforms_no_metrics() {
    assert!(project_metrics(&[]).metrics().is_empty());
}
