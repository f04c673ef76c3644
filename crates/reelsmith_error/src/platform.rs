//! Unknown platform error.

/// A platform key with no entry in the profile table.
///
/// # Examples
///
/// ```
/// use reelsmith_error::UnknownPlatformError;
///
/// let err = UnknownPlatformError::new("myspace", vec!["youtube".to_string()]);
/// assert_eq!(err.key, "myspace");
/// assert!(format!("{}", err).contains("Known platforms: youtube"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display(
    "Unknown platform '{}'. Known platforms: {} at line {} in {}",
    key,
    valid.join(", "),
    line,
    file
)]
pub struct UnknownPlatformError {
    /// The platform key as supplied by the caller
    pub key: String,
    /// Every key present in the profile table
    pub valid: Vec<String>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl UnknownPlatformError {
    /// Create a new error at the current location.
    #[track_caller]
    pub fn new(key: impl Into<String>, valid: Vec<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            key: key.into(),
            valid,
            line: location.line(),
            file: location.file(),
        }
    }
}
