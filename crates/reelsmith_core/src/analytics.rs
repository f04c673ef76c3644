//! Synthetic analytics metrics.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Unit of a projected metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum MetricUnit {
    /// View count.
    #[display("views")]
    Views,
    /// Percentage.
    #[display("percent")]
    Percent,
}

/// One projected metric.
#[derive(Debug, Clone, PartialEq, Getters, Serialize)]
pub struct Metric {
    /// Metric name, prefixed with the platform key.
    name: String,
    /// Projected value.
    value: f64,
    /// Unit of the value.
    unit: MetricUnit,
}

impl Metric {
    /// Create a metric.
    pub fn new(name: impl Into<String>, value: f64, unit: MetricUnit) -> Self {
        Self {
            name: name.into(),
            value,
            unit,
        }
    }
}

/// Ordered collection of projected metrics.
#[derive(Debug, Clone, Default, PartialEq, Getters, Serialize)]
pub struct AnalyticsReport {
    /// Metrics in projection order.
    metrics: Vec<Metric>,
}

impl AnalyticsReport {
    /// Create a report from metrics.
    pub fn new(metrics: Vec<Metric>) -> Self {
        Self { metrics }
    }

    /// Metric name to value.
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        self.metrics
            .iter()
            .map(|m| (m.name.clone(), m.value))
            .collect()
    }

    /// Value of a named metric.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.metrics.iter().find(|m| m.name == name).map(|m| m.value)
    }
}
