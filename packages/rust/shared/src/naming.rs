//! Output naming for assembled loot tables.
//!
//! The raid level is free-form author input used only to build the output
//! file name `raid_level_<level>.json`. It is validated up front so a stray
//! path separator cannot redirect the write somewhere else on disk.

use std::path::{Path, PathBuf};

use crate::error::{LootBuilderError, Result};

/// File name prefix for assembled loot tables.
const OUTPUT_PREFIX: &str = "raid_level_";

/// Default name of the pool fragment subdirectory.
pub const POOLS_DIR_NAME: &str = "gen_pools";

/// Validate a raid level identifier.
///
/// Accepted levels are non-empty and consist only of ASCII alphanumerics,
/// `-`, `_`, and `.`. The names `.` and `..` are rejected. There is no
/// escaping; anything else is rejected outright.
pub fn validate_level(level: &str) -> Result<()> {
    if level.is_empty() {
        return Err(LootBuilderError::naming("level must not be empty"));
    }

    if level == "." || level == ".." {
        return Err(LootBuilderError::naming(format!(
            "level '{level}' is a reserved name"
        )));
    }

    if let Some(bad) = level
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        return Err(LootBuilderError::naming(format!(
            "level '{level}' contains disallowed character {bad:?}"
        )));
    }

    Ok(())
}

/// Build the output file name `raid_level_<level>.json` for a validated level.
pub fn output_file_name(level: &str) -> Result<String> {
    validate_level(level)?;
    Ok(format!("{OUTPUT_PREFIX}{level}.json"))
}

/// Resolve the full output path for a level under the given output directory.
pub fn output_path(output_dir: &Path, level: &str) -> Result<PathBuf> {
    Ok(output_dir.join(output_file_name(level)?))
}

/// Default pools directory: the `gen_pools` subfolder of the output directory.
pub fn default_pools_dir(output_dir: &Path) -> PathBuf {
    output_dir.join(POOLS_DIR_NAME)
}
