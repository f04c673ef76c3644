//! Error types for the Reelsmith pipeline.
//!
//! This crate provides the error types shared by every pipeline stage.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind (or the offending value) with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Stages surface four families of failure:
//! - malformed input ([`InputError`])
//! - a value outside an enumerated set ([`UnsupportedEngineError`], [`UnknownPlatformError`])
//! - artifact write failures ([`IoWriteError`])
//! - output serialization failures ([`JsonError`])
//!
//! # Examples
//!
//! ```
//! use reelsmith_error::{InputError, InputErrorKind, ReelsmithResult};
//!
//! fn load() -> ReelsmithResult<String> {
//!     Err(InputError::new(InputErrorKind::MissingField("title".to_string())))?
//! }
//!
//! match load() {
//!     Ok(title) => println!("Got: {}", title),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod engine;
mod error;
mod input;
mod io_write;
mod json;
mod platform;

pub use engine::UnsupportedEngineError;
pub use error::{ReelsmithError, ReelsmithErrorKind, ReelsmithResult};
pub use input::{InputError, InputErrorKind};
pub use io_write::{IoWriteError, IoWriteErrorKind};
pub use json::JsonError;
pub use platform::UnknownPlatformError;
