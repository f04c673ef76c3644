//! Malformed input error types.

/// Kinds of malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum InputErrorKind {
    /// Source could not be read from disk
    #[display("Cannot read source: {}", _0)]
    Unreadable(String),
    /// Source is not valid for its structured format
    #[display("Cannot parse source: {}", _0)]
    Parse(String),
    /// A required field is absent or blank
    #[display("Missing required field: {}", _0)]
    MissingField(String),
    /// Source is neither a directory nor a recognized document type
    #[display("Unsupported source format: {}", _0)]
    UnsupportedFormat(String),
    /// A value parses but cannot be used, such as a time offset past the calendar range
    #[display("Value out of range: {}", _0)]
    OutOfRange(String),
}

/// Malformed input error with location tracking.
///
/// Raised for scenario, media and configuration documents alike.
///
/// # Examples
///
/// ```
/// use reelsmith_error::{InputError, InputErrorKind};
///
/// let err = InputError::new(InputErrorKind::MissingField("title".to_string()));
/// assert!(format!("{}", err).contains("Missing required field: title"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Malformed Input: {} at line {} in {}", kind, line, file)]
pub struct InputError {
    /// The kind of error that occurred
    pub kind: InputErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl InputError {
    /// Create a new input error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: InputErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
