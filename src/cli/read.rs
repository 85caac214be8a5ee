use log::debug;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::ParsedArgs;
use crate::display::{self, Notice};
use crate::error::{MdliteError, Result};
use crate::markdown;
use crate::picker::{self, Prompter};
use crate::state::StateStore;

const FILE_PROMPT: &str = "Select a Markdown file to read";

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Printed(PathBuf),
    NoMarkdownFiles(PathBuf),
    NotFound(String),
}

/// Everything a run talks to besides its arguments
pub struct Session<'a> {
    pub cwd: &'a Path,
    pub store: &'a StateStore,
    pub prompter: &'a mut dyn Prompter,
    pub out: &'a mut dyn Write,
    pub colors: bool,
}

/// Pick a directory, remember it, then print one of its Markdown files
pub fn run(args: &ParsedArgs, session: Session<'_>) -> Result<Outcome> {
    let start_dir = resolve_start_dir(args, session.cwd, session.store)?;
    debug!("Starting in {}", start_dir.display());

    let selected_dir = picker::choose_directory(&start_dir, session.prompter)?;
    session.store.set_last_dir(&selected_dir)?;

    let files = markdown::list_markdown_files(&selected_dir)?;
    if files.is_empty() {
        let notice = Notice::NoMarkdownFiles(selected_dir.clone());
        display::print_notice(session.out, &notice, session.colors)?;
        return Ok(Outcome::NoMarkdownFiles(selected_dir));
    }

    let file_name = match &args.file_name {
        Some(requested) => {
            let wanted = markdown::normalize_file_name(requested);
            match markdown::find_file(&files, &wanted) {
                Some(found) => found.to_string(),
                None => {
                    let notice = Notice::FileNotFound(wanted.clone());
                    display::print_notice(session.out, &notice, session.colors)?;
                    return Ok(Outcome::NotFound(wanted));
                }
            }
        }
        None => {
            let index = session.prompter.select(FILE_PROMPT, &files)?;
            files
                .get(index)
                .cloned()
                .ok_or_else(|| MdliteError::Prompt(format!("No file choice at index {}", index)))?
        }
    };

    display::print_file(session.out, &selected_dir, &file_name, session.colors)?;
    Ok(Outcome::Printed(selected_dir.join(file_name)))
}

/// `--change` beats `--dir`, which beats the remembered directory, which beats the cwd
fn resolve_start_dir(args: &ParsedArgs, cwd: &Path, store: &StateStore) -> Result<PathBuf> {
    let start = if args.change_dir {
        cwd.to_path_buf()
    } else if let Some(dir) = &args.dir {
        cwd.join(dir)
    } else if let Some(last) = store.last_dir() {
        cwd.join(last)
    } else {
        cwd.to_path_buf()
    };

    let unusable = |reason: &dyn std::fmt::Display| {
        MdliteError::Directory(format!(
            "Cannot open '{}': {}. Run with --change to start from the current directory.",
            start.display(),
            reason
        ))
    };

    let start_dir = fs::canonicalize(&start).map_err(|e| unusable(&e))?;
    if !start_dir.is_dir() {
        return Err(unusable(&"not a directory"));
    }
    // the chosen folder is persisted as a JSON string
    if start_dir.to_str().is_none() {
        return Err(unusable(&"path is not valid UTF-8"));
    }

    Ok(start_dir)
}
