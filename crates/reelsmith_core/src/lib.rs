//! Core data types for the Reelsmith content pipeline.
//!
//! This crate provides the records passed forward between pipeline stages:
//! the loaded [`Scenario`] and [`MediaAsset`]s, engine [`Prompt`]s, stub
//! [`RenderRecord`]s, per-platform [`ExportDescriptor`]s, SEO copy, schedule
//! items and analytics metrics. It also owns the static [`PlatformTable`].
//!
//! Every record is immutable once constructed. Stages never read back from a
//! later stage, so nothing here needs interior mutability.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analytics;
mod engine;
mod export;
mod platform;
mod prompt;
mod render;
mod scenario;
mod schedule;
mod seo;

pub use analytics::{AnalyticsReport, Metric, MetricUnit};
pub use engine::Engine;
pub use export::ExportDescriptor;
pub use platform::{PlatformProfile, PlatformProfileBuilder, PlatformTable, normalize_platform_key};
pub use prompt::Prompt;
pub use render::{RenderRecord, RenderStatus};
pub use scenario::{MediaAsset, MediaAssetBuilder, Scenario, ScenarioBuilder};
pub use schedule::{EngagementTask, ScheduleItem};
pub use seo::{Competition, CraftedCopy, KeywordInsight, SeoCopy};
