//! Platform table command handler.

use reelsmith::{JsonError, PlatformTable, ReelsmithResult};

/// Print the built-in platform profiles as JSON.
pub fn list_platforms() -> ReelsmithResult<()> {
    let table = PlatformTable::builtin();
    let profiles: Vec<_> = table.iter().collect();
    let json = serde_json::to_string_pretty(&profiles)
        .map_err(|e| JsonError::new(format!("Failed to serialize platform table: {}", e)))?;
    println!("{}", json);
    Ok(())
}
