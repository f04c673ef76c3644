//! Reelsmith: scenario-driven content pipeline.
//!
//! Reelsmith turns a campaign scenario and a pile of existing media into
//! everything needed to publish a short video: prompts for external video
//! engines, stub render manifests, per-platform export targets, SEO copy,
//! a publishing schedule with reminders and engagement follow-ups, and
//! projected analytics.
//!
//! Nothing calls a real rendering service, SEO API or scheduler. Renders are
//! JSON manifests named by a content hash, and every projection is derived
//! from the scenario text and platform position.
//!
//! # Quick Start
//!
//! ```no_run
//! use reelsmith::{Pipeline, PipelineConfig, PipelineRequestBuilder, PlatformTable};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pipeline = Pipeline::new(PipelineConfig::default(), PlatformTable::builtin(), "build");
//! let request = PipelineRequestBuilder::default()
//!     .scenario_path("scenario.json")
//!     .media_path("media.csv")
//!     .build()?;
//!
//! let output = pipeline.run(&request)?;
//! for item in output.schedule() {
//!     println!("{}: {}", item.platform(), item.publish_at());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - `reelsmith_error` - Error types
//! - `reelsmith_core` - Records passed between stages and the platform table
//! - `reelsmith_pipeline` - Stages, configuration and the orchestrator
//!
//! This crate (`reelsmith`) re-exports everything for convenience and ships
//! the `reelsmith` binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use reelsmith_core::*;
pub use reelsmith_error::*;
pub use reelsmith_pipeline::*;
