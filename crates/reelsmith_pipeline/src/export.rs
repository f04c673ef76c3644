//! Maps renders onto platform export targets.

use reelsmith_core::{ExportDescriptor, PlatformProfile, PlatformTable, RenderRecord};
use reelsmith_error::ReelsmithResult;
use std::path::{Path, PathBuf};

/// Derives one export per render and platform.
///
/// # Examples
///
/// ```
/// use reelsmith_core::{Engine, PlatformTable, Prompt, RenderRecord};
/// use reelsmith_pipeline::ExportMapper;
///
/// let table = PlatformTable::builtin();
/// let mapper = ExportMapper::new(&table, "build/exports");
///
/// let render = RenderRecord::pending(Prompt::new(Engine::Canva, [("a", "1")], ""))
///     .complete("build/canva_abc.json", "abc");
/// let exports = mapper.export(&[render], &["Instagram".to_string()]).unwrap();
///
/// assert_eq!(
///     exports[0].output_path().to_str(),
///     Some("build/exports/canva_abc_instagram_reels.mp4")
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ExportMapper<'a> {
    table: &'a PlatformTable,
    export_dir: PathBuf,
}

impl<'a> ExportMapper<'a> {
    /// Create a mapper over a platform table, writing under `export_dir`.
    pub fn new(table: &'a PlatformTable, export_dir: impl Into<PathBuf>) -> Self {
        Self {
            table,
            export_dir: export_dir.into(),
        }
    }

    /// Directory export paths are derived under.
    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    /// Map every render onto every platform, renders outer.
    ///
    /// Every platform is resolved before any descriptor is built.
    ///
    /// # Errors
    ///
    /// Returns [`reelsmith_error::UnknownPlatformError`] for a key missing
    /// from the table.
    #[tracing::instrument(skip_all, fields(renders = renders.len(), platforms = platforms.len()))]
    pub fn export(
        &self,
        renders: &[RenderRecord],
        platforms: &[String],
    ) -> ReelsmithResult<Vec<ExportDescriptor>> {
        let profiles = platforms
            .iter()
            .map(|key| self.table.lookup(key))
            .collect::<Result<Vec<&PlatformProfile>, _>>()?;

        let exports: Vec<ExportDescriptor> = renders
            .iter()
            .flat_map(|render| {
                profiles.iter().map(move |profile| {
                    let path = self.output_path(render, profile);
                    ExportDescriptor::new(render.clone(), (*profile).clone(), path)
                })
            })
            .collect();

        tracing::info!(count = exports.len(), "Mapped exports");
        Ok(exports)
    }

    fn output_path(&self, render: &RenderRecord, profile: &PlatformProfile) -> PathBuf {
        self.export_dir.join(format!(
            "{}_{}.{}",
            render.artifact_stem(),
            profile.normalized_name(),
            profile.file_extension()
        ))
    }
}
