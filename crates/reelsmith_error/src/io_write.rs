//! Artifact write error types.

/// Kinds of artifact write failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum IoWriteErrorKind {
    /// Failed to create the output directory
    #[display("Failed to create output directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write a manifest, sidecar or dump file
    #[display("Failed to write file: {}", _0)]
    FileWrite(String),
}

/// Write error with location tracking.
///
/// # Examples
///
/// ```
/// use reelsmith_error::{IoWriteError, IoWriteErrorKind};
///
/// let err = IoWriteError::new(IoWriteErrorKind::FileWrite("/readonly/x.json".to_string()));
/// assert!(format!("{}", err).contains("Failed to write file"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("IO Write Error: {} at line {} in {}", kind, line, file)]
pub struct IoWriteError {
    /// The kind of error that occurred
    pub kind: IoWriteErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl IoWriteError {
    /// Create a new write error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: IoWriteErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
