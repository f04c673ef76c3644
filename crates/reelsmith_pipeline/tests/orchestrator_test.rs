//! End-to-end tests for the pipeline orchestrator.

use reelsmith_core::{Engine, PlatformTable, Prompt, RenderRecord};
use reelsmith_error::{ReelsmithErrorKind, ReelsmithResult};
use reelsmith_pipeline::{
    Pipeline, PipelineConfig, PipelineRequest, PipelineRequestBuilder, PublishingConfig,
    RenderBackend,
};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn fixture_config() -> PipelineConfig {
    PipelineConfig::load(
        Some(fixture("platforms.toml").as_path()),
        Some(fixture("publishing.toml").as_path()),
    )
    .expect("Fixture config loads")
}

fn request(engines: &[&str], platforms: &[&str]) -> PipelineRequest {
    PipelineRequestBuilder::default()
        .scenario_path(fixture("scenario.json"))
        .media_path(fixture("media.csv"))
        .engines(engines.iter().map(|e| e.to_string()).collect::<Vec<_>>())
        .platforms(platforms.iter().map(|p| p.to_string()).collect::<Vec<_>>())
        .build()
        .expect("Valid request")
}

#[test]
fn test_request_defaults_to_veo() {
    let request = PipelineRequestBuilder::default()
        .scenario_path("s.json")
        .media_path("m")
        .build()
        .unwrap();
    assert_eq!(request.engines(), &vec!["google_veo_3".to_string()]);
    assert!(request.platforms().is_empty());
}

#[test]
fn test_full_run_has_one_entry_per_platform() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = Pipeline::new(fixture_config(), PlatformTable::builtin(), dir.path());

    let output = pipeline
        .run(&request(&["google_veo_3", "canva"], &[]))
        .unwrap();

    assert_eq!(output.platforms(), &vec!["youtube".to_string(), "instagram".to_string()]);
    assert_eq!(output.prompts().len(), 2);
    assert_eq!(output.renders().len(), 2);
    assert_eq!(output.post_process().len(), 2);
    assert_eq!(output.exports().len(), 4);
    assert_eq!(output.keywords().len(), 2);
    assert_eq!(output.metadata().len(), 2);
    assert_eq!(output.schedule().len(), 2);
    assert_eq!(output.engagement().len(), 4);
    assert_eq!(output.analytics().len(), 4);
    assert_eq!(output.keyword_research().len(), 3);
    assert_eq!(output.seo_copy().len(), 2);
    assert_eq!(output.render_summary().len(), 2);
}

#[test]
fn test_full_run_schedule_from_start_at() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = Pipeline::new(fixture_config(), PlatformTable::builtin(), dir.path());
    let output = pipeline.run(&request(&["canva"], &[])).unwrap();

    let publish: Vec<String> = output
        .schedule()
        .iter()
        .map(|item| item.publish_at().to_string())
        .collect();
    assert_eq!(publish, vec!["2024-01-01 09:00:00", "2024-01-02 09:00:00"]);
    assert_eq!(
        output.publication_log(),
        "youtube: 2024-01-01T09:00:00\ninstagram: 2024-01-02T09:00:00"
    );
}

#[test]
fn test_full_run_writes_artifacts_and_sidecars() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = Pipeline::new(fixture_config(), PlatformTable::builtin(), dir.path());
    let output = pipeline.run(&request(&["canva"], &[])).unwrap();

    let artifact = output.renders()[0].artifact_path().clone().unwrap();
    assert!(artifact.starts_with(dir.path()));
    assert!(artifact.exists());

    let sidecar = std::fs::read_to_string(&output.post_process()[0]).unwrap();
    assert_eq!(
        sidecar,
        "Engine: canva\ncaptions: youtube, instagram\ncta: Subscribe"
    );

    let export = output.exports()[0].output_path();
    assert!(export.starts_with(dir.path().join("exports")));
    assert!(export.to_string_lossy().ends_with("_youtube.mp4"));
}

#[test]
fn test_requested_platforms_override_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = Pipeline::new(fixture_config(), PlatformTable::builtin(), dir.path());
    let output = pipeline
        .run(&request(&["canva"], &["TikTok", "facebook", "tiktok"]))
        .unwrap();

    assert_eq!(output.platforms(), &vec!["tiktok".to_string(), "facebook".to_string()]);
    assert!(output.metadata().contains_key("facebook"));
    assert_eq!(output.analytics()["facebook_expected_views"], 6000.0);
}

#[test]
fn test_platforms_fall_back_to_config_then_table() {
    let dir = tempfile::tempdir().unwrap();
    let scenario = dir.path().join("scenario.json");
    std::fs::write(&scenario, r#"{"title": "No platforms", "call_to_action": "Go"}"#).unwrap();
    let request = PipelineRequestBuilder::default()
        .scenario_path(&scenario)
        .media_path(fixture("media.json"))
        .build()
        .unwrap();

    let configured = Pipeline::new(fixture_config(), PlatformTable::builtin(), dir.path().join("a"));
    let output = configured.run(&request).unwrap();
    assert_eq!(output.platforms(), &vec!["instagram", "tiktok", "youtube"]);

    let bare = Pipeline::new(PipelineConfig::default(), PlatformTable::builtin(), dir.path().join("b"));
    let output = bare.run(&request).unwrap();
    assert_eq!(output.platforms(), &PlatformTable::builtin().keys());
}

#[test]
fn test_unknown_engine_fails_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let pipeline = Pipeline::new(fixture_config(), PlatformTable::builtin(), &out);

    let err = pipeline
        .run(&request(&["canva", "unknown_engine"], &[]))
        .unwrap_err();
    assert!(matches!(err.kind(), ReelsmithErrorKind::Engine(_)));
    assert!(!out.exists());
}

#[test]
fn test_unknown_platform_fails_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let pipeline = Pipeline::new(fixture_config(), PlatformTable::builtin(), &out);

    let err = pipeline.run(&request(&["canva"], &["myspace"])).unwrap_err();
    match err.kind() {
        ReelsmithErrorKind::Platform(platform_err) => assert_eq!(platform_err.key, "myspace"),
        other => panic!("Expected platform error, got {}", other),
    }
    assert!(!out.exists());
}

#[test]
fn test_missing_scenario_aborts_run() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = Pipeline::new(fixture_config(), PlatformTable::builtin(), dir.path());
    let request = PipelineRequestBuilder::default()
        .scenario_path(fixture("absent.json"))
        .media_path(fixture("media.csv"))
        .build()
        .unwrap();

    let err = pipeline.run(&request).unwrap_err();
    assert!(matches!(err.kind(), ReelsmithErrorKind::Input(_)));
}

#[test]
fn test_recommended_strategy_spaces_slots_by_hours() {
    let dir = tempfile::tempdir().unwrap();
    let publishing = PublishingConfig::from_toml_str(
        "start_at = \"2024-01-01T09:00:00\"\nstrategy = \"recommended\"\n",
    )
    .unwrap();
    let config = PipelineConfig::new(fixture_config().platform().clone(), publishing);
    let pipeline = Pipeline::new(config, PlatformTable::builtin(), dir.path());

    let output = pipeline.run(&request(&["canva"], &[])).unwrap();
    assert_eq!(
        output.schedule()[1].publish_at().to_string(),
        "2024-01-01 11:00:00"
    );
}

/// Backend that writes an empty placeholder instead of a manifest.
struct PlaceholderRenderer {
    dir: PathBuf,
}

impl RenderBackend for PlaceholderRenderer {
    fn render(&self, prompt: &Prompt) -> ReelsmithResult<RenderRecord> {
        let path = self.dir.join(format!("{}_placeholder.json", prompt.engine()));
        std::fs::write(&path, "").expect("Placeholder written");
        Ok(RenderRecord::pending(prompt.clone()).complete(path, "placeholder"))
    }
}

#[test]
fn test_custom_backend_is_used() {
    let dir = tempfile::tempdir().unwrap();
    let backend = PlaceholderRenderer {
        dir: dir.path().to_path_buf(),
    };
    let pipeline = Pipeline::new(fixture_config(), PlatformTable::builtin(), dir.path())
        .with_backend(backend);

    let output = pipeline.run(&request(&["canva"], &[])).unwrap();
    assert_eq!(output.renders()[0].artifact_stem(), "canva_placeholder");
    assert_eq!(*output.renders()[0].engine(), Engine::Canva);
    assert!(dir.path().join("canva_placeholder.post.txt").exists());
    assert!(
        output.exports()[0]
            .output_path()
            .ends_with("canva_placeholder_youtube.mp4")
    );
}

#[test]
fn test_output_serializes_to_json() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = Pipeline::new(fixture_config(), PlatformTable::builtin(), dir.path());
    let output = pipeline.run(&request(&["google_veo_3"], &[])).unwrap();

    let value: serde_json::Value = serde_json::from_str(&output.to_json_pretty().unwrap()).unwrap();
    assert_eq!(value["platforms"][0], "youtube");
    assert_eq!(value["renders"][0]["status"], "complete");
    assert_eq!(value["prompts"][0]["engine"], "google_veo_3");
    assert_eq!(value["prompts"][0]["payload"]["call_to_action"], "Subscribe");
    assert_eq!(value["metadata"]["instagram"]["title"], "Dem");
    assert_eq!(value["keyword_research"][1]["competition"], "low");
}

#[test]
fn test_full_run_crafted_copy_and_summaries() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = Pipeline::new(fixture_config(), PlatformTable::builtin(), dir.path());
    let output = pipeline.run(&request(&["canva"], &[])).unwrap();

    let copy = &output.seo_copy()["youtube"];
    assert_eq!(copy.title(), "Demo | demo grow reach");
    assert_eq!(copy.tags(), &vec!["demo", "growreach", "drivenewslettersignups"]);
    assert!(copy.description().starts_with("Discover Subscribe with insights for youtube."));

    assert_eq!(
        output.schedule_log(),
        "youtube: publish at 2024-01-01T09:00:00 (remind at 2024-01-01T08:30:00)\n\
         instagram: publish at 2024-01-02T09:00:00 (remind at 2024-01-02T08:30:00)"
    );

    let artifact = output.renders()[0].artifact_path().as_deref().unwrap();
    assert_eq!(output.render_summary()["canva"], artifact.display().to_string());
}

#[test]
fn test_cadence_past_calendar_fails_run() {
    let dir = tempfile::tempdir().unwrap();
    let publishing = PublishingConfig::from_toml_str(
        "start_at = \"2024-01-01T09:00:00\"\n[cadence]\ndefault = 4294967295\n",
    )
    .unwrap();
    let config = PipelineConfig::new(fixture_config().platform().clone(), publishing);
    let pipeline = Pipeline::new(config, PlatformTable::builtin(), dir.path());

    let err = pipeline.run(&request(&["canva"], &[])).unwrap_err();
    assert!(matches!(err.kind(), ReelsmithErrorKind::Input(_)));
}
