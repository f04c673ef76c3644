//! Top-level error wrapper types.

use crate::{InputError, IoWriteError, JsonError, UnknownPlatformError, UnsupportedEngineError};

/// Every failure a pipeline stage can surface.
///
/// # Examples
///
/// ```
/// use reelsmith_error::{ReelsmithError, UnknownPlatformError};
///
/// let platform_err = UnknownPlatformError::new("myspace", vec!["youtube".to_string()]);
/// let err: ReelsmithError = platform_err.into();
/// assert!(format!("{}", err).contains("myspace"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ReelsmithErrorKind {
    /// Unparseable or incomplete source document
    #[from(InputError)]
    Input(InputError),
    /// Engine outside the supported set
    #[from(UnsupportedEngineError)]
    Engine(UnsupportedEngineError),
    /// Platform missing from the profile table
    #[from(UnknownPlatformError)]
    Platform(UnknownPlatformError),
    /// Artifact or sidecar write failure
    #[from(IoWriteError)]
    IoWrite(IoWriteError),
    /// JSON serialization error
    #[from(JsonError)]
    Json(JsonError),
}

/// Reelsmith error with kind discrimination.
///
/// # Examples
///
/// ```
/// use reelsmith_error::{ReelsmithErrorKind, ReelsmithResult, UnsupportedEngineError};
///
/// fn pick_engine() -> ReelsmithResult<()> {
///     Err(UnsupportedEngineError::new("sora", vec!["canva".to_string()]))?
/// }
///
/// let err = pick_engine().unwrap_err();
/// assert!(matches!(err.kind(), ReelsmithErrorKind::Engine(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Reelsmith Error: {}", _0)]
pub struct ReelsmithError(Box<ReelsmithErrorKind>);

impl ReelsmithError {
    /// Create a new error from a kind.
    pub fn new(kind: ReelsmithErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ReelsmithErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to ReelsmithErrorKind
impl<T> From<T> for ReelsmithError
where
    T: Into<ReelsmithErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Reelsmith operations.
pub type ReelsmithResult<T> = std::result::Result<T, ReelsmithError>;
