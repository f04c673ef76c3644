//! Scenario and media source loading.
//!
//! A scenario is a single JSON object. Media may come from a directory tree,
//! a CSV file or a JSON array; the source kind is picked from the path.

use reelsmith_core::{MediaAsset, MediaAssetBuilder, Scenario, ScenarioBuilder};
use reelsmith_error::{InputError, InputErrorKind, ReelsmithResult};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Audience given either as text or as a list of segments.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Audience {
    Text(String),
    List(Vec<String>),
}

impl Audience {
    fn into_text(self) -> String {
        match self {
            Audience::Text(text) => text,
            Audience::List(items) => items.join(", "),
        }
    }
}

/// Scenario document with every accepted alias.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ScenarioDocument {
    title: Option<String>,
    name: Option<String>,
    description: Option<String>,
    objectives: Option<Vec<String>>,
    goals: Option<Vec<String>>,
    audience: Option<Audience>,
    target_audience: Option<Audience>,
    tone: Option<String>,
    call_to_action: Option<String>,
    platforms: Option<Vec<String>>,
}

impl ScenarioDocument {
    fn into_scenario(self) -> ReelsmithResult<Scenario> {
        let title = [self.title, self.name]
            .into_iter()
            .flatten()
            .find(|candidate| !candidate.trim().is_empty())
            .ok_or_else(|| InputError::new(InputErrorKind::MissingField("title".to_string())))?;

        let audience = self
            .audience
            .or(self.target_audience)
            .map(Audience::into_text)
            .unwrap_or_default();

        let scenario = ScenarioBuilder::default()
            .title(title)
            .description(self.description.unwrap_or_default())
            .objectives(self.objectives.or(self.goals).unwrap_or_default())
            .audience(audience)
            .tone(self.tone.unwrap_or_default())
            .call_to_action(self.call_to_action.unwrap_or_default())
            .platforms(self.platforms.unwrap_or_default())
            .build()
            .map_err(|e| InputError::new(InputErrorKind::MissingField(e.to_string())))?;
        Ok(scenario)
    }
}

/// Load a scenario from a JSON file.
///
/// # Errors
///
/// Returns [`InputError`] if the file is unreadable, is not a JSON object or
/// has no usable title.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_scenario(path: impl AsRef<Path>) -> ReelsmithResult<Scenario> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| {
        InputError::new(InputErrorKind::Unreadable(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;
    let scenario = parse_scenario(&text)?;
    tracing::info!(
        title = %scenario.title(),
        objectives = scenario.objectives().len(),
        platforms = scenario.platforms().len(),
        "Loaded scenario"
    );
    Ok(scenario)
}

/// Parse a scenario from JSON text.
///
/// `title` wins over `name`, `objectives` over `goals` and `audience` over
/// `target_audience`. Unknown fields are ignored.
///
/// # Examples
///
/// ```
/// use reelsmith_pipeline::loader::parse_scenario;
///
/// let scenario = parse_scenario(r#"{
///     "name": "Launch",
///     "goals": ["Grow reach"],
///     "target_audience": ["Creators", "Marketers"]
/// }"#).unwrap();
///
/// assert_eq!(scenario.title(), "Launch");
/// assert_eq!(scenario.audience(), "Creators, Marketers");
/// ```
pub fn parse_scenario(text: &str) -> ReelsmithResult<Scenario> {
    let value: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| InputError::new(InputErrorKind::Parse(format!("scenario: {}", e))))?;

    if !value.is_object() {
        return Err(InputError::new(InputErrorKind::Parse(
            "scenario must be a JSON object".to_string(),
        ))
        .into());
    }

    let document: ScenarioDocument = serde_json::from_value(value)
        .map_err(|e| InputError::new(InputErrorKind::Parse(format!("scenario: {}", e))))?;
    document.into_scenario()
}

/// Load media assets from a directory, `.csv` file or `.json` file.
///
/// `extensions` filters directory walks only; entries are accepted with or
/// without the leading dot and matched case-insensitively. An empty filter
/// keeps every file.
///
/// # Errors
///
/// Returns [`InputError`] if the path is missing, of an unsupported kind, or
/// holds a malformed document.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_media(path: impl AsRef<Path>, extensions: &[String]) -> ReelsmithResult<Vec<MediaAsset>> {
    let path = path.as_ref();

    let assets = if path.is_dir() {
        load_media_directory(path, extensions)?
    } else {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "csv" => parse_media_csv(&read_source(path)?)?,
            "json" => parse_media_json(&read_source(path)?)?,
            _ if !path.exists() => {
                return Err(InputError::new(InputErrorKind::Unreadable(format!(
                    "{}: no such file or directory",
                    path.display()
                )))
                .into());
            }
            _ => {
                return Err(InputError::new(InputErrorKind::UnsupportedFormat(format!(
                    "{}: expected a directory, .csv or .json file",
                    path.display()
                )))
                .into());
            }
        }
    };

    tracing::info!(count = assets.len(), "Loaded media assets");
    Ok(assets)
}

fn read_source(path: &Path) -> ReelsmithResult<String> {
    fs::read_to_string(path).map_err(|e| {
        InputError::new(InputErrorKind::Unreadable(format!(
            "{}: {}",
            path.display(),
            e
        )))
        .into()
    })
}

fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_lowercase()
}

fn load_media_directory(root: &Path, extensions: &[String]) -> ReelsmithResult<Vec<MediaAsset>> {
    let allowed: Vec<String> = extensions
        .iter()
        .map(|ext| normalize_extension(ext))
        .filter(|ext| !ext.is_empty())
        .collect();

    let mut assets = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            InputError::new(InputErrorKind::Unreadable(format!(
                "{}: {}",
                root.display(),
                e
            )))
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let extension = entry
            .path()
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase());
        if !allowed.is_empty() && !extension.as_ref().is_some_and(|ext| allowed.contains(ext)) {
            tracing::debug!(path = %entry.path().display(), "Skipping filtered file");
            continue;
        }

        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        let id = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/");

        let asset = MediaAssetBuilder::default()
            .id(id)
            .description(entry.file_name().to_string_lossy().into_owned())
            .tags(extension.into_iter().collect::<Vec<_>>())
            .build()
            .map_err(|e| InputError::new(InputErrorKind::MissingField(e.to_string())))?;
        assets.push(asset);
    }
    Ok(assets)
}

/// One CSV row, identifier under any accepted column name.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MediaRow {
    asset_id: Option<String>,
    id: Option<String>,
    identifier: Option<String>,
    description: Option<String>,
    tags: Option<String>,
}

/// Parse media assets from CSV text with a header row.
///
/// Columns are `asset_id` (or `id`, `identifier`), `description` and
/// `tags`, with tags separated by `|`.
///
/// # Examples
///
/// ```
/// use reelsmith_pipeline::loader::parse_media_csv;
///
/// let assets = parse_media_csv("asset_id,description,tags\nA1,Intro,brand|brand|intro\n").unwrap();
/// assert_eq!(assets[0].tags(), &vec!["brand".to_string(), "intro".to_string()]);
/// ```
pub fn parse_media_csv(text: &str) -> ReelsmithResult<Vec<MediaAsset>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut assets = Vec::new();
    for (index, row) in reader.deserialize::<MediaRow>().enumerate() {
        let row = row.map_err(|e| InputError::new(InputErrorKind::Parse(format!("media CSV: {}", e))))?;
        let id = [row.asset_id, row.id, row.identifier]
            .into_iter()
            .flatten()
            .find(|candidate| !candidate.trim().is_empty())
            .ok_or_else(|| {
                InputError::new(InputErrorKind::MissingField(format!(
                    "asset_id in media CSV row {}",
                    index + 1
                )))
            })?;
        let tags = split_tags(row.tags.as_deref().unwrap_or_default());
        assets.push(build_asset(id, row.description.unwrap_or_default(), tags)?);
    }
    Ok(assets)
}

/// Tags given either as a list or a `|`-separated string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TagField {
    Text(String),
    List(Vec<String>),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MediaEntry {
    asset_id: Option<String>,
    id: Option<String>,
    identifier: Option<String>,
    description: Option<String>,
    tags: Option<TagField>,
}

/// Parse media assets from a JSON array of objects.
///
/// Objects use the same fields as the CSV form; `tags` may be a list or a
/// `|`-separated string.
pub fn parse_media_json(text: &str) -> ReelsmithResult<Vec<MediaAsset>> {
    let entries: Vec<MediaEntry> = serde_json::from_str(text).map_err(|e| {
        InputError::new(InputErrorKind::Parse(format!(
            "media JSON must be an array of objects: {}",
            e
        )))
    })?;

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let id = [entry.asset_id, entry.id, entry.identifier]
                .into_iter()
                .flatten()
                .find(|candidate| !candidate.trim().is_empty())
                .ok_or_else(|| {
                    InputError::new(InputErrorKind::MissingField(format!(
                        "asset_id in media JSON entry {}",
                        index + 1
                    )))
                })?;
            let tags = match entry.tags {
                Some(TagField::Text(text)) => split_tags(&text),
                Some(TagField::List(items)) => dedup_tags(items),
                None => Vec::new(),
            };
            build_asset(id, entry.description.unwrap_or_default(), tags)
        })
        .collect()
}

fn split_tags(text: &str) -> Vec<String> {
    dedup_tags(text.split('|').map(str::to_string))
}

/// Trimmed, non-empty, first occurrence kept.
fn dedup_tags(tags: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !unique.iter().any(|seen| seen == tag) {
            unique.push(tag.to_string());
        }
    }
    unique
}

fn build_asset(id: String, description: String, tags: Vec<String>) -> ReelsmithResult<MediaAsset> {
    let asset = MediaAssetBuilder::default()
        .id(id.trim())
        .description(description)
        .tags(tags)
        .build()
        .map_err(|e| InputError::new(InputErrorKind::MissingField(e.to_string())))?;
    Ok(asset)
}
