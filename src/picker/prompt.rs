use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::Select;

use crate::error::{MdliteError, Result};

/// Rows shown at once before the list starts scrolling
const PAGE_SIZE: usize = 15;

/// Single-select prompt
pub trait Prompter {
    /// Ask the user to pick one of `items`, returning its index
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<usize>;
}

/// Interactive prompt rendered on the terminal
pub struct TerminalPrompter {
    theme: Box<dyn Theme>,
}

impl TerminalPrompter {
    pub fn new(colors: bool) -> Self {
        let theme: Box<dyn Theme> = if colors {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        };
        Self { theme }
    }
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<usize> {
        Select::with_theme(self.theme.as_ref())
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .max_length(PAGE_SIZE)
            .interact()
            .map_err(|e| MdliteError::Prompt(e.to_string()))
    }
}
