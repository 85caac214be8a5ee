//! Markdown file discovery
//!
//! Lists the `.md` files directly inside a directory and resolves a
//! user-supplied name against that listing.

use log::{debug, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::thread;
use walkdir::WalkDir;

use crate::error::{MdliteError, Result};

const MARKDOWN_EXTENSION: &str = "md";

/// Check if a file name carries exactly the `.md` extension
pub fn has_markdown_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .is_some_and(|ext| ext == MARKDOWN_EXTENSION)
}

/// List the Markdown files directly inside `dir`, sorted by name
///
/// Entries are stat'ed in parallel; symlinks are followed so a link to a
/// Markdown file counts as one.
pub fn list_markdown_files(dir: &Path) -> Result<Vec<String>> {
    let mut candidates = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| {
            MdliteError::Directory(format!("Cannot list '{}': {}", dir.display(), e))
        })?;

        let Some(name) = entry.file_name().to_str() else {
            warn!("Skipping non UTF-8 file name in {}", dir.display());
            continue;
        };

        if has_markdown_extension(name) {
            candidates.push((name.to_string(), entry.into_path()));
        }
    }

    let mut markdowns = stat_regular_files(candidates)?;
    markdowns.sort();

    debug!("Found {} Markdown files in {}", markdowns.len(), dir.display());
    Ok(markdowns)
}

/// Keep the candidates that are regular files, spreading the stat calls over worker threads
fn stat_regular_files(candidates: Vec<(String, PathBuf)>) -> Result<Vec<String>> {
    if candidates.is_empty() {
        return Ok(Vec::new());
    }

    let workers = thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .min(candidates.len());
    let chunk_size = candidates.len().div_ceil(workers);

    thread::scope(|scope| {
        let handles: Vec<_> = candidates
            .chunks(chunk_size)
            .map(|chunk| scope.spawn(move || stat_chunk(chunk)))
            .collect();

        let mut files = Vec::new();
        for handle in handles {
            let chunk = handle
                .join()
                .map_err(|_| MdliteError::Directory("File stat worker panicked".to_string()))??;
            files.extend(chunk);
        }
        Ok(files)
    })
}

fn stat_chunk(chunk: &[(String, PathBuf)]) -> Result<Vec<String>> {
    let mut files = Vec::new();

    for (name, path) in chunk {
        match fs::metadata(path) {
            Ok(metadata) if metadata.is_file() => files.push(name.clone()),
            Ok(_) => {}
            // dangling symlink, or removed since the listing
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Skipping {}: {}", path.display(), e);
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(files)
}

/// Append `.md` unless the name already ends with exactly that extension
pub fn normalize_file_name(name: &str) -> String {
    if has_markdown_extension(name) {
        name.to_string()
    } else {
        format!("{}.{}", name, MARKDOWN_EXTENSION)
    }
}

/// Find `wanted` among `files`, ignoring case
pub fn find_file<'a>(files: &'a [String], wanted: &str) -> Option<&'a str> {
    let wanted = wanted.to_lowercase();
    files
        .iter()
        .find(|f| f.to_lowercase() == wanted)
        .map(String::as_str)
}
