//! End-to-end pipeline run.

use crate::analytics::project_metrics;
use crate::loader::{load_media, load_scenario};
use crate::seo::{copy_keywords, craft_copy, format_metadata, generate_keywords, research_keywords};
use crate::{
    EngagementPlanner, ExportMapper, PipelineConfig, PromptBuilder, RenderBackend,
    ScheduleStrategy, Scheduler, StubRenderer, apply_post_processing, publication_log,
    recommend_publication_times, render_summary,
};
use chrono::{Duration, Local, NaiveDateTime, NaiveTime};
use derive_getters::Getters;
use reelsmith_core::{
    CraftedCopy, EngagementTask, Engine, ExportDescriptor, KeywordInsight, PlatformTable,
    Prompt, RenderRecord, Scenario, ScheduleItem, SeoCopy, normalize_platform_key,
};
use reelsmith_error::{JsonError, ReelsmithResult};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Inputs for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct PipelineRequest {
    /// Scenario JSON file.
    scenario_path: PathBuf,

    /// Media directory, CSV or JSON file.
    media_path: PathBuf,

    /// Engine names, parsed leniently.
    #[builder(default = "vec![Engine::GoogleVeo3.as_str().to_string()]")]
    engines: Vec<String>,

    /// Platform subset; empty means resolve from the scenario or config.
    #[builder(default)]
    platforms: Vec<String>,

    /// Extension filter for media directories.
    #[builder(default)]
    media_extensions: Vec<String>,
}

/// Everything a run produced.
#[derive(Debug, Clone, Serialize, Getters)]
pub struct PipelineOutput {
    /// Loaded scenario.
    scenario: Scenario,
    /// Resolved platform keys, in run order.
    platforms: Vec<String>,
    /// One prompt per engine.
    prompts: Vec<Prompt>,
    /// One completed render per prompt.
    renders: Vec<RenderRecord>,
    /// Artifact path per engine.
    render_summary: BTreeMap<String, String>,
    /// Post-processing sidecar per render.
    post_process: Vec<PathBuf>,
    /// One export per render and platform.
    exports: Vec<ExportDescriptor>,
    /// Keywords per platform.
    keywords: BTreeMap<String, Vec<String>>,
    /// Projected keyword research.
    keyword_research: Vec<KeywordInsight>,
    /// Formatted copy per platform.
    metadata: BTreeMap<String, SeoCopy>,
    /// Copy crafted from the top research keywords, per platform.
    seo_copy: BTreeMap<String, CraftedCopy>,
    /// One publish slot per platform.
    schedule: Vec<ScheduleItem>,
    /// One publish and reminder line per slot.
    schedule_log: String,
    /// Two follow-ups per publish slot.
    engagement: Vec<EngagementTask>,
    /// Projected metric values by name.
    analytics: BTreeMap<String, f64>,
    /// One line per publish slot.
    publication_log: String,
}

impl PipelineOutput {
    /// Pretty-printed JSON of the whole output.
    pub fn to_json_pretty(&self) -> ReelsmithResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            JsonError::new(format!("Failed to serialize pipeline output: {}", e)).into()
        })
    }
}

/// Runs every stage in order against one configuration.
///
/// The first failing stage aborts the run; its error is returned as is.
pub struct Pipeline {
    config: PipelineConfig,
    table: PlatformTable,
    output_dir: PathBuf,
    backend: Box<dyn RenderBackend>,
}

impl Pipeline {
    /// Create a pipeline rendering manifests into `output_dir`.
    pub fn new(config: PipelineConfig, table: PlatformTable, output_dir: impl Into<PathBuf>) -> Self {
        let output_dir = output_dir.into();
        Self {
            backend: Box::new(StubRenderer::new(output_dir.clone())),
            config,
            table,
            output_dir,
        }
    }

    /// Replace the render backend.
    pub fn with_backend(mut self, backend: impl RenderBackend + 'static) -> Self {
        self.backend = Box::new(backend);
        self
    }

    /// Configuration in use.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Platform table in use.
    pub fn table(&self) -> &PlatformTable {
        &self.table
    }

    /// Run the pipeline for one request.
    ///
    /// Engines and platforms are validated before anything is written.
    ///
    /// # Errors
    ///
    /// Returns the first stage error: malformed input, an unsupported engine,
    /// an unknown platform or a failed write.
    #[tracing::instrument(
        skip_all,
        fields(
            scenario = %request.scenario_path().display(),
            media = %request.media_path().display()
        )
    )]
    pub fn run(&self, request: &PipelineRequest) -> ReelsmithResult<PipelineOutput> {
        let scenario = load_scenario(request.scenario_path())?;
        let assets = load_media(request.media_path(), request.media_extensions())?;
        if assets.is_empty() {
            tracing::warn!("No media assets found; prompts will carry no references");
        }
        if scenario.call_to_action().trim().is_empty() {
            tracing::warn!("Scenario has no call to action");
        }

        let engines = parse_engines(request.engines())?;
        let platforms = self.resolve_platforms(request, &scenario);
        for platform in &platforms {
            self.table.lookup(platform)?;
        }
        tracing::info!(engines = engines.len(), platforms = ?platforms, "Resolved run targets");

        let builder = PromptBuilder::new(&scenario, &assets);
        let prompts: Vec<Prompt> = engines.iter().map(|e| builder.build_for(*e)).collect();

        let renders = prompts
            .iter()
            .map(|prompt| self.backend.render(prompt))
            .collect::<ReelsmithResult<Vec<_>>>()?;

        let overlays = self.overlays(&scenario, &platforms)?;
        let post_process = renders
            .iter()
            .map(|render| apply_post_processing(render, &overlays))
            .collect::<ReelsmithResult<Vec<_>>>()?;

        let exports = ExportMapper::new(&self.table, self.output_dir.join("exports"))
            .export(&renders, &platforms)?;

        let platform_config = self.config.platform();
        let keywords = generate_keywords(&scenario, &platforms, platform_config);
        let keyword_research = research_keywords(&scenario);
        let metadata: BTreeMap<String, SeoCopy> = platforms
            .iter()
            .map(|platform| {
                let terms = keywords.get(platform).map(Vec::as_slice).unwrap_or_default();
                let copy = format_metadata(
                    platform,
                    scenario.title(),
                    scenario.description(),
                    terms,
                    platform_config,
                );
                (platform.clone(), copy)
            })
            .collect();
        tracing::info!(platforms = metadata.len(), "Formatted SEO metadata");

        let lead_keywords = copy_keywords(&keyword_research);
        let seo_copy: BTreeMap<String, CraftedCopy> = platforms
            .iter()
            .map(|platform| (platform.clone(), craft_copy(&scenario, platform, &lead_keywords)))
            .collect();

        let publishing = self.config.publishing();
        let base = publishing.start_at().unwrap_or_else(default_start);
        let scheduler = Scheduler::from_config(publishing);
        let schedule = match publishing.strategy() {
            ScheduleStrategy::Cadence => scheduler.schedule(base, publishing, &platforms)?,
            ScheduleStrategy::Recommended => {
                let spacing = Duration::hours(i64::from(*publishing.recommended_spacing_hours()));
                let recommendations = recommend_publication_times(base, &platforms, spacing)?;
                scheduler.from_recommendations(&recommendations)?
            }
        };
        tracing::info!(slots = schedule.len(), strategy = ?publishing.strategy(), "Built schedule");

        let engagement = EngagementPlanner::from_config(publishing).plan(&schedule)?;
        let analytics = project_metrics(&platforms).to_map();
        let publication_log = publication_log(&schedule);
        let schedule_log = Scheduler::format_schedule(&schedule);
        let render_summary = render_summary(&renders);

        tracing::info!(
            prompts = prompts.len(),
            exports = exports.len(),
            "Pipeline run complete"
        );

        Ok(PipelineOutput {
            scenario,
            platforms,
            prompts,
            renders,
            render_summary,
            post_process,
            exports,
            keywords,
            keyword_research,
            metadata,
            seo_copy,
            schedule,
            schedule_log,
            engagement,
            analytics,
            publication_log,
        })
    }

    /// Requested subset, else scenario platforms, else configured platforms,
    /// else the whole table. Normalized, first occurrence kept.
    fn resolve_platforms(&self, request: &PipelineRequest, scenario: &Scenario) -> Vec<String> {
        let configured = self.config.platform().platform_keys();
        let source: Vec<String> = if !request.platforms().is_empty() {
            request.platforms().clone()
        } else if !scenario.platforms().is_empty() {
            scenario.platforms().clone()
        } else if !configured.is_empty() {
            configured
        } else {
            self.table.keys()
        };

        let mut resolved: Vec<String> = Vec::with_capacity(source.len());
        for platform in source {
            let key = normalize_platform_key(&platform);
            if !key.is_empty() && !resolved.contains(&key) {
                resolved.push(key);
            }
        }
        resolved
    }

    /// Overlays noted on every render: the call to action, plus the
    /// platforms that need captions.
    fn overlays(
        &self,
        scenario: &Scenario,
        platforms: &[String],
    ) -> ReelsmithResult<BTreeMap<String, String>> {
        let mut captioned = Vec::new();
        for platform in platforms {
            let profile = self.table.lookup(platform)?;
            if *profile.captions() {
                captioned.push(profile.key().clone());
            }
        }

        let mut overlays = BTreeMap::new();
        overlays.insert("cta".to_string(), scenario.call_to_action().clone());
        if !captioned.is_empty() {
            overlays.insert("captions".to_string(), captioned.join(", "));
        }
        Ok(overlays)
    }
}

/// Parse engine names, keeping the first occurrence of each.
fn parse_engines(names: &[String]) -> ReelsmithResult<Vec<Engine>> {
    let mut engines = Vec::with_capacity(names.len());
    for name in names {
        let engine: Engine = name.parse()?;
        if !engines.contains(&engine) {
            engines.push(engine);
        }
    }
    Ok(engines)
}

/// Today at 09:00 local time.
fn default_start() -> NaiveDateTime {
    let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN);
    Local::now().date_naive().and_time(nine)
}
