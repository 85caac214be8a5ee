//! Banner and notice output

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use termimad::crossterm::style::Stylize;

use crate::error::Result;

/// User-facing messages that end a run without printing a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    NoMarkdownFiles(PathBuf),
    FileNotFound(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::NoMarkdownFiles(dir) => {
                write!(f, "📂 '{}' contains no Markdown files.", dir.display())
            }
            Notice::FileNotFound(name) => write!(f, "❌ '{}' does not exist.", name),
        }
    }
}

pub fn print_notice(out: &mut dyn Write, notice: &Notice, colors: bool) -> io::Result<()> {
    if colors {
        writeln!(out, "{}", notice.to_string().yellow())
    } else {
        writeln!(out, "{}", notice)
    }
}

/// Read `dir/file_name` and write it under a banner
///
/// Invalid UTF-8 is replaced rather than rejected; the content is
/// otherwise written exactly as stored.
pub fn print_file(out: &mut dyn Write, dir: &Path, file_name: &str, colors: bool) -> Result<()> {
    let bytes = fs::read(dir.join(file_name))?;
    let content = String::from_utf8_lossy(&bytes);

    let banner = format!("==== 📄 {} ====", file_name);
    if colors {
        writeln!(out, "\n{}\n", banner.bold().cyan())?;
    } else {
        writeln!(out, "\n{}\n", banner)?;
    }
    writeln!(out, "{}", content)?;
    out.flush()?;

    Ok(())
}
