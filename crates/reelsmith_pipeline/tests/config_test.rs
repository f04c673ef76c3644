//! Tests for platform and publishing configuration.

use reelsmith_error::ReelsmithErrorKind;
use reelsmith_pipeline::{
    MustInclude, PipelineConfig, PlatformConfig, PublishingConfig, ScheduleStrategy,
};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn test_platform_config_from_file_normalizes_keys() {
    let config = PlatformConfig::from_file(fixture("platforms.toml")).unwrap();
    assert_eq!(config.platform_keys(), vec!["instagram", "tiktok", "youtube"]);
    assert_eq!(
        config.hints_for("TikTok").terms(),
        vec!["trending sound", "how to"]
    );
    assert_eq!(*config.requirements_for("youtube").hashtag_limit(), 15);
}

#[test]
fn test_platform_requirements_default_per_field() {
    let config = PlatformConfig::from_toml_str("[requirements.facebook]\ntitle_limit = 80\n").unwrap();
    let requirements = config.requirements_for("facebook");
    assert_eq!(*requirements.title_limit(), 80);
    assert_eq!(*requirements.description_limit(), 500);
    assert_eq!(*requirements.keyword_limit(), 10);
}

#[test]
fn test_platform_config_from_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("platforms.json");
    std::fs::write(
        &path,
        r#"{"platforms": {"youtube": {"must_include": ["Tutorial"]}}}"#,
    )
    .unwrap();

    let config = PlatformConfig::from_file(&path).unwrap();
    assert_eq!(
        config.hints_for("youtube").must_include(),
        &Some(MustInclude::List(vec!["Tutorial".to_string()]))
    );
}

#[test]
fn test_invalid_platform_config_is_input_error() {
    let err = PlatformConfig::from_toml_str("[platforms.youtube\n").unwrap_err();
    assert!(matches!(err.kind(), ReelsmithErrorKind::Input(_)));
}

#[test]
fn test_must_include_drops_blank_terms() {
    let hints = MustInclude::Text(" a , ,b ".to_string());
    assert_eq!(hints.terms(), vec!["a", "b"]);
}

#[test]
fn test_publishing_config_from_file() {
    let config = PublishingConfig::from_file(fixture("publishing.toml")).unwrap();
    assert_eq!(
        config.start_at().map(|t| t.to_string()),
        Some("2024-01-01 09:00:00".to_string())
    );
    assert_eq!(*config.strategy(), ScheduleStrategy::Cadence);
    assert_eq!(config.cadence_days("youtube"), 3);
    assert_eq!(config.cadence_days("tiktok"), 1);
}

#[test]
fn test_publishing_config_defaults() {
    let config = PublishingConfig::default();
    assert!(config.start_at().is_none());
    assert_eq!(*config.reminder_buffer_minutes(), 30);
    assert_eq!(*config.follow_up_delay_hours(), 24);
    assert_eq!(*config.recommended_spacing_hours(), 2);
    assert_eq!(config.cadence_days("anything"), 1);
}

#[test]
fn test_publishing_default_cadence_key() {
    let config = PublishingConfig::from_toml_str("[cadence]\ndefault = 2\n").unwrap();
    assert_eq!(config.cadence_days("instagram"), 2);
}

#[test]
fn test_recommended_strategy_parses() {
    let config = PublishingConfig::from_toml_str("strategy = \"recommended\"\n").unwrap();
    assert_eq!(*config.strategy(), ScheduleStrategy::Recommended);
}

#[test]
fn test_pipeline_config_load_without_files() {
    let config = PipelineConfig::load(None, None).unwrap();
    assert!(config.platform().platform_keys().is_empty());
    assert_eq!(*config.publishing().strategy(), ScheduleStrategy::Cadence);
}

#[test]
fn test_pipeline_config_missing_file() {
    let missing = fixture("absent.toml");
    let err = PipelineConfig::load(Some(missing.as_path()), None).unwrap_err();
    assert!(matches!(err.kind(), ReelsmithErrorKind::Input(_)));
}

#[test]
fn test_platform_keys_colliding_after_normalization_are_rejected() {
    let err = PlatformConfig::from_toml_str(
        "[requirements.YouTube]\ntitle_limit = 50\n\n[requirements.youtube]\ntitle_limit = 70\n",
    )
    .unwrap_err();
    match err.kind() {
        ReelsmithErrorKind::Input(input) => {
            assert!(input.kind.to_string().contains("duplicate entry for platform 'youtube'"));
        }
        other => panic!("Expected input error, got {:?}", other),
    }
}

#[test]
fn test_cadence_keys_colliding_after_normalization_are_rejected() {
    let err = PublishingConfig::from_toml_str("[cadence]\nTikTok = 2\ntiktok = 3\n").unwrap_err();
    assert!(matches!(err.kind(), ReelsmithErrorKind::Input(_)));
    assert!(err.to_string().contains("cadence"));
}
