//! Command-line interface module
//!
//! - args: scan raw tokens into a `ParsedArgs` request
//! - read: choose a directory and print one of its Markdown files

pub mod args;
pub mod read;
