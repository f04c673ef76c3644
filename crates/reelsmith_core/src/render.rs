//! Render records produced by the render stage.

use crate::{Engine, Prompt};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Lifecycle of a render request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum RenderStatus {
    /// Submitted, no artifact yet.
    #[display("pending")]
    Pending,
    /// Artifact written.
    #[display("complete")]
    Complete,
}

/// A render request and its outcome.
///
/// Created pending and completed exactly once: [`RenderRecord::complete`]
/// consumes the pending record.
///
/// # Examples
///
/// ```
/// use reelsmith_core::{Engine, Prompt, RenderRecord, RenderStatus};
///
/// let prompt = Prompt::new(Engine::GoogleVeo3, [("narrative", "CTA")], "");
/// let pending = RenderRecord::pending(prompt);
/// assert_eq!(*pending.status(), RenderStatus::Pending);
///
/// let done = pending.complete("build/google_veo_3_abc.json", "abc");
/// assert!(done.is_complete());
/// assert_eq!(done.artifact_stem(), "google_veo_3_abc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct RenderRecord {
    /// Prompt this render was produced from.
    #[serde(skip)]
    prompt: Prompt,

    /// Engine of the owning prompt.
    engine: Engine,

    /// Current status.
    status: RenderStatus,

    /// Path of the written artifact, once complete.
    artifact_path: Option<PathBuf>,

    /// Hash of the canonical prompt payload, once complete.
    content_hash: Option<String>,
}

impl RenderRecord {
    /// Create a pending record for a prompt.
    pub fn pending(prompt: Prompt) -> Self {
        Self {
            engine: *prompt.engine(),
            prompt,
            status: RenderStatus::Pending,
            artifact_path: None,
            content_hash: None,
        }
    }

    /// Mark the render complete with its artifact location.
    pub fn complete(self, artifact_path: impl Into<PathBuf>, content_hash: impl Into<String>) -> Self {
        Self {
            status: RenderStatus::Complete,
            artifact_path: Some(artifact_path.into()),
            content_hash: Some(content_hash.into()),
            ..self
        }
    }

    /// Whether an artifact has been written.
    pub fn is_complete(&self) -> bool {
        self.status == RenderStatus::Complete
    }

    /// File stem of the artifact, `unknown` while pending.
    pub fn artifact_stem(&self) -> String {
        self.artifact_path
            .as_deref()
            .and_then(Path::file_stem)
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "unknown".to_string())
    }
}
