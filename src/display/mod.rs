//! Terminal display module
//!
//! Writes file banners and notices, styled only when the terminal wants color.

mod formatter;
mod terminal;

pub use formatter::{print_file, print_notice, Notice};
pub use terminal::should_use_colors;
