//! Video generation engines.

use reelsmith_error::UnsupportedEngineError;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// External video generation engine a prompt is written for.
///
/// # Examples
///
/// ```
/// use reelsmith_core::Engine;
///
/// let engine: Engine = "Google Veo 3".parse().unwrap();
/// assert_eq!(engine, Engine::GoogleVeo3);
/// assert_eq!(engine.to_string(), "google_veo_3");
///
/// assert!("unknown_engine".parse::<Engine>().is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum Engine {
    /// Google Veo 3 cinematic generation
    #[serde(rename = "google_veo_3")]
    #[display("google_veo_3")]
    GoogleVeo3,
    /// Canva video templates
    #[serde(rename = "canva")]
    #[display("canva")]
    Canva,
}

impl Engine {
    /// Wire identifier of the engine.
    pub fn as_str(&self) -> &'static str {
        match self {
            Engine::GoogleVeo3 => "google_veo_3",
            Engine::Canva => "canva",
        }
    }

    /// Identifiers of every supported engine, in declaration order.
    pub fn names() -> Vec<String> {
        Engine::iter().map(|engine| engine.as_str().to_string()).collect()
    }
}

impl std::str::FromStr for Engine {
    type Err = UnsupportedEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace([' ', '-'], "_");
        Engine::iter()
            .find(|engine| engine.as_str() == key)
            .ok_or_else(|| UnsupportedEngineError::new(s, Engine::names()))
    }
}
