//! Platform export descriptors.

use crate::{Engine, PlatformProfile, RenderRecord};
use derive_getters::Getters;
use serde::Serialize;
use std::path::PathBuf;

/// One rendered video mapped onto one publishing platform.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct ExportDescriptor {
    /// Render this export derives from.
    #[serde(skip)]
    render: RenderRecord,

    /// Engine of the source render.
    engine: Engine,

    /// Normalized platform key.
    platform: String,

    /// Constraints the export must satisfy.
    profile: PlatformProfile,

    /// Where the platform-ready file belongs.
    output_path: PathBuf,
}

impl ExportDescriptor {
    /// Create a descriptor for a render and platform profile.
    pub fn new(render: RenderRecord, profile: PlatformProfile, output_path: PathBuf) -> Self {
        Self {
            engine: *render.engine(),
            platform: profile.key().clone(),
            render,
            profile,
            output_path,
        }
    }
}
