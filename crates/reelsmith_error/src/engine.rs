//! Unsupported engine error.

/// A video engine outside the supported set was requested.
///
/// Always names the offending value and the full valid set.
///
/// # Examples
///
/// ```
/// use reelsmith_error::UnsupportedEngineError;
///
/// let err = UnsupportedEngineError::new(
///     "unknown_engine",
///     vec!["google_veo_3".to_string(), "canva".to_string()],
/// );
/// let message = format!("{}", err);
/// assert!(message.contains("unknown_engine"));
/// assert!(message.contains("google_veo_3, canva"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display(
    "Unsupported engine '{}'. Supported engines: {} at line {} in {}",
    value,
    valid.join(", "),
    line,
    file
)]
pub struct UnsupportedEngineError {
    /// The engine identifier that was requested
    pub value: String,
    /// Every engine identifier that would have been accepted
    pub valid: Vec<String>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl UnsupportedEngineError {
    /// Create a new error at the current location.
    #[track_caller]
    pub fn new(value: impl Into<String>, valid: Vec<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            value: value.into(),
            valid,
            line: location.line(),
            file: location.file(),
        }
    }
}
