//! Projected per-platform analytics.
//!
//! Values are synthetic: views grow and engagement rises by platform
//! position. No metrics are collected.

use reelsmith_core::{AnalyticsReport, Metric, MetricUnit, normalize_platform_key};

const BASE_VIEWS: f64 = 5000.0;
const VIEWS_STEP: f64 = 1000.0;
const BASE_ENGAGEMENT: f64 = 4.5;

/// Project metrics for each platform, all view counts before all rates.
///
/// # Examples
///
/// ```
/// use reelsmith_pipeline::analytics::project_metrics;
///
/// let report = project_metrics(&["youtube".to_string(), "tiktok".to_string()]);
/// assert_eq!(report.get("tiktok_expected_views"), Some(6000.0));
/// assert_eq!(report.get("tiktok_engagement_rate"), Some(5.5));
/// assert_eq!(report.metrics()[1].name(), "tiktok_expected_views");
/// ```
#[tracing::instrument(skip_all, fields(platforms = platforms.len()))]
pub fn project_metrics(platforms: &[String]) -> AnalyticsReport {
    let keys: Vec<String> = platforms.iter().map(|p| normalize_platform_key(p)).collect();

    let views = keys.iter().enumerate().map(|(index, key)| {
        Metric::new(
            format!("{}_expected_views", key),
            BASE_VIEWS + VIEWS_STEP * index as f64,
            MetricUnit::Views,
        )
    });
    let rates = keys.iter().enumerate().map(|(index, key)| {
        Metric::new(
            format!("{}_engagement_rate", key),
            BASE_ENGAGEMENT + index as f64,
            MetricUnit::Percent,
        )
    });

    let report = AnalyticsReport::new(views.chain(rates).collect());
    tracing::info!(metrics = report.metrics().len(), "Projected analytics");
    report
}
