use std::fs;
use std::path::Path;

use cards_store::models::SourceFile;
use cards_store::schema::{RECORD_EXTENSION, RECORDS_PREFIX, SCHEMA_PREFIX};
use tracing::{debug, warn};

use super::{StoreError, StoreResult};

/// Reads the schema and record directories under `root` into source files.
///
/// Files are visited per role directory in sorted name order. Paths are
/// reported relative to `root` with `/` separators, so they follow the same
/// conventions as the embedded snapshot. One missing role directory is
/// skipped; at least one of them must exist.
///
/// # Errors
/// Returns `StoreError::MissingDataDir` if `root` is not a directory or holds
/// neither role directory, and `StoreError::Io` if a directory listing or file
/// read fails.
pub fn read_dir(root: &Path) -> StoreResult<Vec<SourceFile>> {
    if !root.is_dir() {
        return Err(missing_data_dir(root));
    }

    let mut sources = Vec::new();
    let mut found_role_dir = false;
    for prefix in [SCHEMA_PREFIX, RECORDS_PREFIX] {
        let dir = root.join(prefix.trim_end_matches('/'));
        if !dir.is_dir() {
            warn!(dir = %dir.display(), "data directory missing, skipping");
            continue;
        }
        found_role_dir = true;

        let entries = fs::read_dir(&dir).map_err(|source| io_error(&dir, source))?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| io_error(&dir, source))?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                warn!(path = %path.display(), "skipping non-utf8 file name");
                continue;
            };
            if !name.ends_with(RECORD_EXTENSION) {
                debug!(path = %path.display(), "skipping non-json file");
                continue;
            }
            names.push(name);
        }
        names.sort();

        for name in names {
            let path = dir.join(&name);
            let content = fs::read_to_string(&path).map_err(|source| io_error(&path, source))?;
            sources.push(SourceFile::new(format!("{prefix}{name}"), content));
        }
    }

    if found_role_dir {
        Ok(sources)
    } else {
        Err(missing_data_dir(root))
    }
}

fn missing_data_dir(root: &Path) -> StoreError {
    StoreError::MissingDataDir(root.display().to_string())
}

fn io_error(path: &Path, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.display().to_string(),
        source,
    }
}
