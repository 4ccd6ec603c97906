//! Pool fragment collection.
//!
//! Lists the `.json` fragment files in the pools directory, in whatever
//! order the filesystem listing returns them. The order only decides the
//! order of pools in the final array.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use lootbuilder_shared::{LootBuilderError, Result};

/// Collect every `.json` fragment file in `pools_dir`, non-recursively.
///
/// Fails with [`LootBuilderError::MissingPoolsDir`] if the directory does
/// not exist, before any output is produced.
#[instrument(skip_all, fields(dir = %pools_dir.display()))]
pub fn collect_fragments(pools_dir: &Path) -> Result<Vec<PathBuf>> {
    if !pools_dir.is_dir() {
        return Err(LootBuilderError::missing_pools_dir(pools_dir));
    }

    let entries =
        std::fs::read_dir(pools_dir).map_err(|e| LootBuilderError::io(pools_dir, e))?;

    let mut fragments = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| LootBuilderError::io(pools_dir, e))?;
        let path = entry.path();

        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            debug!(file = %path.display(), "found pool fragment");
            fragments.push(path);
        }
    }

    info!(count = fragments.len(), "pool fragments collected");
    Ok(fragments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_only_json_files() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("a.json"), "{}").unwrap();
        std::fs::write(tmp.path().join("b.json"), "{}").unwrap();
        std::fs::write(tmp.path().join("notes.txt"), "ignore me").unwrap();
        std::fs::write(tmp.path().join("backup.json.bak"), "{}").unwrap();

        let mut names: Vec<String> = collect_fragments(tmp.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();

        assert_eq!(names, ["a.json", "b.json"]);
    }

    #[test]
    fn covers_every_fragment_exactly_once() {
        let tmp = tempfile::tempdir().unwrap();
        for i in 0..10 {
            std::fs::write(tmp.path().join(format!("pool_{i}.json")), "{}").unwrap();
        }

        let fragments = collect_fragments(tmp.path()).unwrap();
        assert_eq!(fragments.len(), 10);

        let mut names: Vec<_> = fragments
            .iter()
            .map(|p| p.file_name().unwrap().to_os_string())
            .collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 10);
    }

    #[test]
    fn skips_directories_with_json_extension() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir(tmp.path().join("nested.json")).unwrap();
        std::fs::write(tmp.path().join("real.json"), "{}").unwrap();

        let fragments = collect_fragments(tmp.path()).unwrap();
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].file_name().unwrap(), "real.json");
    }

    #[test]
    fn empty_directory_yields_no_fragments() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(collect_fragments(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("gen_pools");

        let err = collect_fragments(&missing).unwrap_err();
        assert!(matches!(err, LootBuilderError::MissingPoolsDir { .. }));
        assert!(err.to_string().contains("gen_pools"));
    }
}
