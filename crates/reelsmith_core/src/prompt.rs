//! Engine prompt payloads.

use crate::Engine;
use derive_getters::Getters;
use serde::Serialize;
use std::collections::BTreeMap;

/// Structured prompt for one video engine.
///
/// The payload is kept in key order, so two prompts built from the same
/// fields compare and hash equal regardless of insertion order.
///
/// # Examples
///
/// ```
/// use reelsmith_core::{Engine, Prompt};
///
/// let a = Prompt::new(Engine::Canva, [("b", "2"), ("a", "1")], "");
/// let b = Prompt::new(Engine::Canva, [("a", "1"), ("b", "2")], "");
/// assert_eq!(a.canonical_json(), b.canonical_json());
/// assert_eq!(a.field("a"), Some("1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct Prompt {
    /// Target engine.
    engine: Engine,

    /// Named text fields sent to the engine.
    payload: BTreeMap<String, String>,

    /// Plain-text rendition of the prompt.
    text: String,
}

impl Prompt {
    /// Create a prompt from named fields and a plain-text rendition.
    pub fn new<K, V>(
        engine: Engine,
        fields: impl IntoIterator<Item = (K, V)>,
        text: impl Into<String>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            engine,
            payload: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            text: text.into(),
        }
    }

    /// Value of a payload field.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.payload.get(name).map(String::as_str)
    }

    /// Canonical JSON of the engine and payload, keys sorted.
    pub fn canonical_json(&self) -> String {
        serde_json::json!({
            "engine": self.engine.as_str(),
            "payload": self.payload,
        })
        .to_string()
    }
}
