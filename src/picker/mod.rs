//! Interactive selection module
//!
//! Walks the directory tree one prompt at a time until the user settles
//! on a directory.

mod prompt;

pub use prompt::{Prompter, TerminalPrompter};

#[cfg(test)]
pub(crate) use prompt::testing;

use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{MdliteError, Result};

pub const UP_LABEL: &str = "[Up one level]";
pub const SELECT_LABEL: &str = "[Select this folder]";

/// One row of the directory prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirChoice {
    Enter(String),
    Up,
    SelectCurrent,
}

impl DirChoice {
    pub fn label(&self) -> &str {
        match self {
            DirChoice::Enter(name) => name.as_str(),
            DirChoice::Up => UP_LABEL,
            DirChoice::SelectCurrent => SELECT_LABEL,
        }
    }
}

/// Names of the directories directly inside `dir`, sorted
///
/// Symlinks are not followed, so a link to a directory is not offered.
/// Names that are not valid UTF-8 are skipped.
pub fn subdirectories(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            MdliteError::Directory(format!(
                "Cannot read '{}': {}. Run with --change to start from the current directory.",
                dir.display(),
                e
            ))
        })?;

        if !entry.file_type().is_dir() {
            continue;
        }
        match entry.file_name().to_str() {
            Some(name) => names.push(name.to_string()),
            None => warn!("Skipping non UTF-8 folder name in {}", dir.display()),
        }
    }

    Ok(names)
}

/// Build the prompt rows for `dir`: subdirectories, then up (unless at the root), then select
pub fn directory_choices(dir: &Path) -> Result<Vec<DirChoice>> {
    let mut choices: Vec<DirChoice> = subdirectories(dir)?
        .into_iter()
        .map(DirChoice::Enter)
        .collect();

    if dir.parent().is_some() {
        choices.push(DirChoice::Up);
    }
    choices.push(DirChoice::SelectCurrent);

    Ok(choices)
}

fn prompt_message(dir: &Path) -> String {
    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string());
    format!("Select a folder (current: {})", name)
}

/// Let the user navigate from `start` and return the directory they select
pub fn choose_directory(start: &Path, prompter: &mut dyn Prompter) -> Result<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let choices = directory_choices(&current)?;
        let labels: Vec<String> = choices.iter().map(|c| c.label().to_string()).collect();

        let index = prompter.select(&prompt_message(&current), &labels)?;
        let choice = choices
            .get(index)
            .ok_or_else(|| MdliteError::Prompt(format!("No folder choice at index {}", index)))?;

        match choice {
            DirChoice::SelectCurrent => {
                debug!("Selected {}", current.display());
                return Ok(current);
            }
            DirChoice::Up => {
                if let Some(parent) = current.parent() {
                    current = parent.to_path_buf();
                }
            }
            DirChoice::Enter(name) => current.push(name),
        }
        debug!("Browsing {}", current.display());
    }
}
