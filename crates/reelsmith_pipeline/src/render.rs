//! Render stage: deterministic manifests stand in for engine output.

use derive_getters::Getters;
use reelsmith_core::{Prompt, RenderRecord};
use reelsmith_error::{IoWriteError, IoWriteErrorKind, JsonError, ReelsmithResult};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Length of the hash prefix used in artifact file names.
const HASH_PREFIX_LEN: usize = 12;

/// Turns a prompt into a completed render.
pub trait RenderBackend {
    /// Render a prompt, returning the completed record.
    fn render(&self, prompt: &Prompt) -> ReelsmithResult<RenderRecord>;
}

/// SHA-256 of a prompt's canonical JSON, lowercase hex.
///
/// Identical engine and payload give identical hashes, whatever order the
/// payload fields were inserted in.
pub fn content_hash(prompt: &Prompt) -> String {
    let mut hasher = Sha256::new();
    hasher.update(prompt.canonical_json().as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Writes a JSON manifest per prompt instead of calling an engine.
///
/// Artifacts land at `<output_dir>/<engine>_<hash prefix>.json`.
///
/// # Examples
///
/// ```
/// use reelsmith_core::{Engine, Prompt};
/// use reelsmith_pipeline::{RenderBackend, StubRenderer};
///
/// let dir = tempfile::tempdir().unwrap();
/// let renderer = StubRenderer::new(dir.path());
///
/// let prompt = Prompt::new(Engine::Canva, [("project_name", "Demo")], "");
/// let record = renderer.render(&prompt).unwrap();
///
/// assert!(record.is_complete());
/// assert!(record.artifact_stem().starts_with("canva_"));
/// ```
#[derive(Debug, Clone, Getters)]
pub struct StubRenderer {
    /// Directory manifests are written into.
    output_dir: PathBuf,
}

impl StubRenderer {
    /// Create a renderer writing into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Where the manifest for a given hash belongs.
    fn artifact_path(&self, prompt: &Prompt, hash: &str) -> PathBuf {
        let prefix = &hash[..HASH_PREFIX_LEN.min(hash.len())];
        self.output_dir
            .join(format!("{}_{}.json", prompt.engine(), prefix))
    }
}

impl RenderBackend for StubRenderer {
    #[tracing::instrument(skip_all, fields(engine = %prompt.engine()))]
    fn render(&self, prompt: &Prompt) -> ReelsmithResult<RenderRecord> {
        let hash = content_hash(prompt);
        let path = self.artifact_path(prompt, &hash);

        fs::create_dir_all(&self.output_dir).map_err(|e| {
            IoWriteError::new(IoWriteErrorKind::DirectoryCreation(format!(
                "{}: {}",
                self.output_dir.display(),
                e
            )))
        })?;

        let manifest = serde_json::json!({
            "engine": prompt.engine().as_str(),
            "content_hash": hash,
            "payload": prompt.payload(),
            "prompt": prompt.text(),
        });
        let body = serde_json::to_string_pretty(&manifest)
            .map_err(|e| JsonError::new(format!("Failed to serialize manifest: {}", e)))?;
        write_file(&path, &body)?;

        tracing::info!(path = %path.display(), hash = %hash, "Wrote render manifest");
        Ok(RenderRecord::pending(prompt.clone()).complete(path, hash))
    }
}

/// Write a post-processing note next to a render's artifact.
///
/// The sidecar replaces the artifact extension with `.post.txt` and holds
/// `Engine: <engine>` followed by one `key: value` line per overlay.
///
/// # Errors
///
/// Returns [`IoWriteError`] if the render has no artifact or the sidecar
/// cannot be written.
#[tracing::instrument(skip_all, fields(engine = %record.engine(), overlays = overlays.len()))]
pub fn apply_post_processing(
    record: &RenderRecord,
    overlays: &BTreeMap<String, String>,
) -> ReelsmithResult<PathBuf> {
    let artifact = record.artifact_path().as_ref().ok_or_else(|| {
        IoWriteError::new(IoWriteErrorKind::FileWrite(format!(
            "{} render has no artifact to annotate",
            record.engine()
        )))
    })?;
    let sidecar = artifact.with_extension("post.txt");

    let mut lines = vec![format!("Engine: {}", record.engine())];
    lines.extend(overlays.iter().map(|(key, value)| format!("{}: {}", key, value)));
    write_file(&sidecar, &lines.join("\n"))?;

    tracing::debug!(path = %sidecar.display(), "Wrote post-processing sidecar");
    Ok(sidecar)
}

fn write_file(path: &Path, contents: &str) -> ReelsmithResult<()> {
    fs::write(path, contents).map_err(|e| {
        IoWriteError::new(IoWriteErrorKind::FileWrite(format!(
            "{}: {}",
            path.display(),
            e
        )))
        .into()
    })
}

/// Artifact path per engine, `pending` for renders not yet written.
///
/// A later render of the same engine replaces an earlier one.
///
/// ```
/// use reelsmith_core::{Engine, Prompt, RenderRecord};
/// use reelsmith_pipeline::render_summary;
///
/// let veo = RenderRecord::pending(Prompt::new(Engine::GoogleVeo3, [("title", "Demo")], ""));
/// let canva = RenderRecord::pending(Prompt::new(Engine::Canva, [("project_name", "Demo")], ""))
///     .complete("build/canva_abc.json", "abc");
///
/// let summary = render_summary(&[veo, canva]);
/// assert_eq!(summary["google_veo_3"], "pending");
/// assert_eq!(summary["canva"], "build/canva_abc.json");
/// ```
pub fn render_summary(renders: &[RenderRecord]) -> BTreeMap<String, String> {
    renders
        .iter()
        .map(|render| {
            let location = render
                .artifact_path()
                .as_deref()
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "pending".to_string());
            (render.engine().as_str().to_string(), location)
        })
        .collect()
}
