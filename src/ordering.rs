//! Human ordering of dataset files (`curl2` before `curl10`).

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Split a stem into its non-digit head and trailing number.
fn split_num(stem: &str) -> (&str, Option<u64>) {
    let head = stem.trim_end_matches(|c: char| c.is_ascii_digit());
    let tail = &stem[head.len()..];
    (head, tail.parse().ok())
}

fn sort_key(path: &Path) -> (String, Option<u64>) {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let (head, number) = split_num(&stem);
    (head.to_string(), number)
}

/// Every entry of `folder`, failing on the first unreadable entry.
pub fn list_dir(folder: &Path) -> Result<Vec<PathBuf>> {
    fs::read_dir(folder)
        .with_context(|| format!("Failed to read folder: {:?}", folder))?
        .map(|entry| {
            entry
                .map(|e| e.path())
                .with_context(|| format!("Failed to read entry in {:?}", folder))
        })
        .collect()
}

/// Files of `folder` sorted by name prefix, then by trailing number.
pub fn files_in_order<P: AsRef<Path>>(folder: P) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = list_dir(folder.as_ref())?
        .into_iter()
        .filter(|path| path.is_file())
        .collect();
    sort_in_order(&mut files);
    Ok(files)
}

pub fn sort_in_order(files: &mut [PathBuf]) {
    files.sort_by_cached_key(|path| sort_key(path));
}
