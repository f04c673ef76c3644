//! Pipeline stages for Reelsmith.
//!
//! Turns a campaign scenario and its media into engine prompts, stub renders,
//! per-platform exports, SEO copy, a publishing schedule and projected
//! analytics. Every stage is a plain synchronous function over the records in
//! `reelsmith_core`; the [`Pipeline`] runs them in a fixed order and stops at
//! the first error.
//!
//! # Stages
//!
//! 1. [`loader`]: scenario JSON and media (directory, CSV or JSON)
//! 2. [`PromptBuilder`]: one prompt per engine
//! 3. [`StubRenderer`]: deterministic manifest in place of a real render
//! 4. [`ExportMapper`]: one export per render and platform
//! 5. [`seo`]: keywords, keyword research and formatted metadata
//! 6. [`Scheduler`] and [`EngagementPlanner`]: publish slots and follow-ups
//! 7. [`analytics`]: synthetic metrics
//!
//! # Example
//!
//! ```no_run
//! use reelsmith_core::PlatformTable;
//! use reelsmith_pipeline::{Pipeline, PipelineConfig, PipelineRequestBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PipelineConfig::load(Some("config/platforms.toml".as_ref()), None)?;
//! let pipeline = Pipeline::new(config, PlatformTable::builtin(), "build");
//!
//! let request = PipelineRequestBuilder::default()
//!     .scenario_path("scenario.json")
//!     .media_path("media")
//!     .engines(vec!["canva".to_string()])
//!     .build()?;
//!
//! let output = pipeline.run(&request)?;
//! println!("{}", output.to_json_pretty()?);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod analytics;
mod config;
mod engagement;
mod export;
pub mod loader;
mod orchestrator;
mod prompt_builder;
mod render;
mod scheduler;
pub mod seo;

pub use config::{
    MustInclude, PipelineConfig, PlatformConfig, PlatformHints, PlatformRequirements,
    PlatformRequirementsBuilder, PublishingConfig, PublishingConfigBuilder, ScheduleStrategy,
};
pub use engagement::EngagementPlanner;
pub use export::ExportMapper;
pub use orchestrator::{Pipeline, PipelineOutput, PipelineRequest, PipelineRequestBuilder};
pub use prompt_builder::{PromptBuilder, guidelines};
pub use render::{
    RenderBackend, StubRenderer, apply_post_processing, content_hash, render_summary,
};
pub use scheduler::{Scheduler, publication_log, recommend_publication_times};
