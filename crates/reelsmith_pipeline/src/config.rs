//! Platform and publishing configuration.

use chrono::NaiveDateTime;
use derive_getters::Getters;
use reelsmith_core::normalize_platform_key;
use reelsmith_error::{InputError, InputErrorKind, ReelsmithResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Keywords a platform must always carry.
///
/// Accepts either a comma-separated string or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MustInclude {
    /// `"tutorial, how to"`
    Text(String),
    /// `["Tutorial", "How to"]`
    List(Vec<String>),
}

impl MustInclude {
    /// Trimmed, non-empty terms in the order given.
    pub fn terms(&self) -> Vec<String> {
        let raw: Vec<&str> = match self {
            MustInclude::Text(text) => text.split(',').collect(),
            MustInclude::List(items) => items.iter().map(String::as_str).collect(),
        };
        raw.into_iter()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Keyword hints for one platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct PlatformHints {
    /// Terms forced into the platform keyword list.
    #[serde(default)]
    must_include: Option<MustInclude>,
}

impl PlatformHints {
    /// Create hints from a must-include value.
    pub fn new(must_include: MustInclude) -> Self {
        Self {
            must_include: Some(must_include),
        }
    }

    /// Must-include terms, empty when none are configured.
    pub fn terms(&self) -> Vec<String> {
        self.must_include
            .as_ref()
            .map(MustInclude::terms)
            .unwrap_or_default()
    }
}

/// Copy limits for one platform.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(default)]
pub struct PlatformRequirements {
    /// Maximum title length in characters.
    #[serde(default = "default_title_limit")]
    title_limit: usize,

    /// Maximum description length in characters, hashtags excluded.
    #[serde(default = "default_description_limit")]
    description_limit: usize,

    /// Maximum number of hashtags appended to the description.
    #[serde(default = "default_hashtag_limit")]
    hashtag_limit: usize,

    /// Maximum number of keywords generated.
    #[serde(default = "default_keyword_limit")]
    keyword_limit: usize,
}

fn default_title_limit() -> usize {
    100
}

fn default_description_limit() -> usize {
    500
}

fn default_hashtag_limit() -> usize {
    10
}

fn default_keyword_limit() -> usize {
    10
}

impl Default for PlatformRequirements {
    fn default() -> Self {
        Self {
            title_limit: default_title_limit(),
            description_limit: default_description_limit(),
            hashtag_limit: default_hashtag_limit(),
            keyword_limit: default_keyword_limit(),
        }
    }
}

/// Per-platform keyword hints and copy limits.
///
/// # Examples
///
/// ```
/// use reelsmith_pipeline::PlatformConfig;
///
/// let config = PlatformConfig::from_toml_str(r#"
///     [platforms.YouTube]
///     must_include = "tutorial, how to"
///
///     [requirements.youtube]
///     title_limit = 50
/// "#).unwrap();
///
/// assert_eq!(config.hints_for("youtube").terms(), vec!["tutorial", "how to"]);
/// assert_eq!(*config.requirements_for("YouTube").title_limit(), 50);
/// assert_eq!(*config.requirements_for("tiktok").title_limit(), 100);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct PlatformConfig {
    /// Keyword hints keyed by normalized platform.
    #[serde(default)]
    platforms: BTreeMap<String, PlatformHints>,

    /// Copy limits keyed by normalized platform.
    #[serde(default)]
    requirements: BTreeMap<String, PlatformRequirements>,
}

impl PlatformConfig {
    /// Create a config from hint and requirement maps, normalizing keys.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] if two keys in one map normalize to the same
    /// platform.
    pub fn new(
        platforms: BTreeMap<String, PlatformHints>,
        requirements: BTreeMap<String, PlatformRequirements>,
    ) -> ReelsmithResult<Self> {
        Ok(Self {
            platforms: normalize_keys("platforms", platforms)?,
            requirements: normalize_keys("requirements", requirements)?,
        })
    }

    /// Load from a TOML file, or JSON when the extension is `.json`.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] if the file cannot be read or parsed.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> ReelsmithResult<Self> {
        let config: Self = read_document(path.as_ref())?;
        let config = Self::new(config.platforms, config.requirements)?;
        tracing::debug!(
            hinted = config.platforms.len(),
            constrained = config.requirements.len(),
            "Loaded platform config"
        );
        Ok(config)
    }

    /// Parse from TOML text.
    pub fn from_toml_str(text: &str) -> ReelsmithResult<Self> {
        let config: Self = parse_toml(text)?;
        Self::new(config.platforms, config.requirements)
    }

    /// Hints for a platform, empty when none are configured.
    pub fn hints_for(&self, platform: &str) -> PlatformHints {
        self.platforms
            .get(&normalize_platform_key(platform))
            .cloned()
            .unwrap_or_default()
    }

    /// Limits for a platform, defaults when none are configured.
    pub fn requirements_for(&self, platform: &str) -> PlatformRequirements {
        self.requirements
            .get(&normalize_platform_key(platform))
            .cloned()
            .unwrap_or_default()
    }

    /// Every platform named in either section, sorted.
    pub fn platform_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .platforms
            .keys()
            .chain(self.requirements.keys())
            .cloned()
            .collect();
        keys.sort();
        keys.dedup();
        keys
    }
}

/// How publish slots are derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStrategy {
    /// Day offsets from the per-platform cadence.
    #[default]
    Cadence,
    /// Fixed hourly spacing from the start time.
    Recommended,
}

/// Publishing schedule parameters.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(default)]
pub struct PublishingConfig {
    /// First publish slot; today at 09:00 when absent.
    #[serde(default)]
    start_at: Option<NaiveDateTime>,

    /// Slot derivation strategy.
    #[serde(default)]
    strategy: ScheduleStrategy,

    /// Days between slots keyed by platform, with an optional `default` key.
    #[serde(default)]
    cadence: BTreeMap<String, u32>,

    /// Minutes between the reminder and the publish slot.
    #[serde(default = "default_reminder_buffer_minutes")]
    reminder_buffer_minutes: u32,

    /// Hours between publishing and the comment follow-up.
    #[serde(default = "default_follow_up_delay_hours")]
    follow_up_delay_hours: u32,

    /// Hours between recommended slots.
    #[serde(default = "default_recommended_spacing_hours")]
    recommended_spacing_hours: u32,
}

fn default_reminder_buffer_minutes() -> u32 {
    30
}

fn default_follow_up_delay_hours() -> u32 {
    24
}

fn default_recommended_spacing_hours() -> u32 {
    2
}

impl Default for PublishingConfig {
    fn default() -> Self {
        Self {
            start_at: None,
            strategy: ScheduleStrategy::default(),
            cadence: BTreeMap::new(),
            reminder_buffer_minutes: default_reminder_buffer_minutes(),
            follow_up_delay_hours: default_follow_up_delay_hours(),
            recommended_spacing_hours: default_recommended_spacing_hours(),
        }
    }
}

impl PublishingConfig {
    /// Load from a TOML file, or JSON when the extension is `.json`.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] if the file cannot be read or parsed.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> ReelsmithResult<Self> {
        let config: Self = read_document(path.as_ref())?;
        let config = config.normalized()?;
        tracing::debug!(
            start_at = ?config.start_at,
            strategy = ?config.strategy,
            "Loaded publishing config"
        );
        Ok(config)
    }

    /// Parse from TOML text.
    pub fn from_toml_str(text: &str) -> ReelsmithResult<Self> {
        let config: Self = parse_toml(text)?;
        config.normalized()
    }

    /// Days between slots for a platform: its own cadence, else `default`, else 1.
    pub fn cadence_days(&self, platform: &str) -> u32 {
        self.cadence
            .get(&normalize_platform_key(platform))
            .or_else(|| self.cadence.get("default"))
            .copied()
            .unwrap_or(1)
    }

    fn normalized(self) -> ReelsmithResult<Self> {
        Ok(Self {
            cadence: normalize_keys("cadence", self.cadence)?,
            ..self
        })
    }
}

/// Everything the pipeline reads from configuration files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct PipelineConfig {
    /// Keyword hints and copy limits.
    platform: PlatformConfig,
    /// Schedule parameters.
    publishing: PublishingConfig,
}

impl PipelineConfig {
    /// Bundle both configuration sections.
    pub fn new(platform: PlatformConfig, publishing: PublishingConfig) -> Self {
        Self {
            platform,
            publishing,
        }
    }

    /// Load whichever files are given, defaulting the rest.
    pub fn load(
        platform_path: Option<&Path>,
        publishing_path: Option<&Path>,
    ) -> ReelsmithResult<Self> {
        let platform = match platform_path {
            Some(path) => PlatformConfig::from_file(path)?,
            None => PlatformConfig::default(),
        };
        let publishing = match publishing_path {
            Some(path) => PublishingConfig::from_file(path)?,
            None => PublishingConfig::default(),
        };
        Ok(Self::new(platform, publishing))
    }
}

/// Normalize platform keys, rejecting two spellings of one platform.
fn normalize_keys<V>(section: &str, map: BTreeMap<String, V>) -> ReelsmithResult<BTreeMap<String, V>> {
    let mut normalized = BTreeMap::new();
    for (key, value) in map {
        let platform = normalize_platform_key(&key);
        if normalized.insert(platform.clone(), value).is_some() {
            return Err(InputError::new(InputErrorKind::Parse(format!(
                "{}: duplicate entry for platform '{}' (from '{}')",
                section, platform, key
            )))
            .into());
        }
    }
    Ok(normalized)
}

fn read_document<T: DeserializeOwned>(path: &Path) -> ReelsmithResult<T> {
    let contents = fs::read_to_string(path).map_err(|e| {
        InputError::new(InputErrorKind::Unreadable(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        serde_json::from_str(&contents).map_err(|e| {
            InputError::new(InputErrorKind::Parse(format!("{}: {}", path.display(), e))).into()
        })
    } else {
        parse_toml(&contents)
    }
}

fn parse_toml<T: DeserializeOwned>(text: &str) -> ReelsmithResult<T> {
    toml::from_str(text)
        .map_err(|e| InputError::new(InputErrorKind::Parse(e.to_string())).into())
}
