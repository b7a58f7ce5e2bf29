use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use serde_json::Value;

use crate::consts::SNAPSHOT_FILENAME_FORMAT;
use crate::error::AppError;
use crate::utils::debug_log;

/// `messages_YYYYMMDD_HHMMSS.json` for the given local time
pub(crate) fn default_filename(now: NaiveDateTime) -> String {
    now.format(SNAPSHOT_FILENAME_FORMAT).to_string()
}

/// Keep only the last path component so the file cannot escape the output directory.
///
/// Both `/` and `\` count as separators regardless of platform.
pub(crate) fn sanitize_filename(name: &str) -> Result<&str, AppError> {
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default();
    if base.is_empty() || base == "." || base == ".." {
        return Err(AppError::InvalidFilename {
            input: name.to_string(),
        });
    }
    Ok(base)
}

/// Write `data` as 2-space indented UTF-8 JSON into `dir` and return the path.
pub(crate) fn save_json(
    data: &Value,
    dir: &Path,
    filename: Option<&str>,
) -> Result<PathBuf, AppError> {
    let name = match filename {
        Some(name) => sanitize_filename(name)?.to_string(),
        None => default_filename(Local::now().naive_local()),
    };

    fs::create_dir_all(dir).map_err(|source| AppError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(name);
    let mut content = serde_json::to_string_pretty(data)?;
    content.push('\n');
    fs::write(&path, content).map_err(|source| AppError::Write {
        path: path.clone(),
        source,
    })?;

    debug_log!("saved snapshot to {}", path.display());
    Ok(path)
}
