//! Static publishing platform profiles.

use derive_getters::Getters;
use reelsmith_error::UnknownPlatformError;
use serde::{Deserialize, Serialize};

/// Normalize a platform key the way every stage compares it.
///
/// ```
/// use reelsmith_core::normalize_platform_key;
///
/// assert_eq!(normalize_platform_key("  YouTube "), "youtube");
/// ```
pub fn normalize_platform_key(key: &str) -> String {
    key.trim().to_lowercase()
}

/// Output constraints of one publishing platform.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct PlatformProfile {
    /// Lookup key, already normalized.
    key: String,

    /// Human-readable name.
    display_name: String,

    /// Aspect ratio, e.g. `16:9`.
    aspect_ratio: String,

    /// Output resolution, e.g. `1080x1920`.
    resolution: String,

    /// Maximum video duration in seconds.
    duration_limit_secs: u32,

    /// Whether burned-in captions are expected.
    captions: bool,

    /// Output file extension without the dot.
    file_extension: String,
}

impl PlatformProfile {
    /// Display name lowercased with spaces replaced by underscores.
    ///
    /// Used to build export file names.
    pub fn normalized_name(&self) -> String {
        self.display_name.to_lowercase().replace(' ', "_")
    }
}

/// Read-only table of platform profiles.
///
/// Built once at startup and handed to the stages that need it.
///
/// # Examples
///
/// ```
/// use reelsmith_core::PlatformTable;
///
/// let table = PlatformTable::builtin();
/// let profile = table.lookup("Instagram").unwrap();
/// assert_eq!(profile.display_name(), "Instagram Reels");
/// assert!(table.lookup("myspace").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformTable {
    profiles: Vec<PlatformProfile>,
}

impl PlatformTable {
    /// Create a table from explicit profiles.
    ///
    /// Keys are normalized; a later profile with a duplicate key is dropped.
    pub fn new(profiles: impl IntoIterator<Item = PlatformProfile>) -> Self {
        let mut unique: Vec<PlatformProfile> = Vec::new();
        for mut profile in profiles {
            profile.key = normalize_platform_key(&profile.key);
            if !unique.iter().any(|p| p.key == profile.key) {
                unique.push(profile);
            }
        }
        Self { profiles: unique }
    }

    /// The built-in YouTube, Instagram, TikTok and Facebook profiles.
    pub fn builtin() -> Self {
        Self::new([
            profile("youtube", "YouTube", "16:9", "3840x2160", 43_200, true),
            profile("instagram", "Instagram Reels", "9:16", "1080x1920", 90, true),
            profile("tiktok", "TikTok", "9:16", "1080x1920", 180, true),
            profile("facebook", "Facebook Feed", "1:1", "1080x1080", 240, false),
        ])
    }

    /// Find a profile by key, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownPlatformError`] naming the key and every known key.
    pub fn lookup(&self, key: &str) -> Result<&PlatformProfile, UnknownPlatformError> {
        let normalized = normalize_platform_key(key);
        self.profiles
            .iter()
            .find(|p| p.key == normalized)
            .ok_or_else(|| UnknownPlatformError::new(key, self.keys()))
    }

    /// Whether a key resolves to a profile.
    pub fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_ok()
    }

    /// Every key in table order.
    pub fn keys(&self) -> Vec<String> {
        self.profiles.iter().map(|p| p.key.clone()).collect()
    }

    /// Iterate profiles in table order.
    pub fn iter(&self) -> impl Iterator<Item = &PlatformProfile> {
        self.profiles.iter()
    }
}

impl Default for PlatformTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn profile(
    key: &str,
    display_name: &str,
    aspect_ratio: &str,
    resolution: &str,
    duration_limit_secs: u32,
    captions: bool,
) -> PlatformProfile {
    PlatformProfile {
        key: key.to_string(),
        display_name: display_name.to_string(),
        aspect_ratio: aspect_ratio.to_string(),
        resolution: resolution.to_string(),
        duration_limit_secs,
        captions,
        file_extension: "mp4".to_string(),
    }
}
