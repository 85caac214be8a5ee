//! TTY detection and color support logic

use std::env;
use std::io::IsTerminal;

/// Color-related environment variables, captured once
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ColorEnv {
    /// `NO_COLOR` set to anything non-empty (https://no-color.org/)
    no_color: bool,
    /// `CLICOLOR_FORCE` set to anything but `0`
    force: bool,
    /// `CLICOLOR=0`
    clicolor_off: bool,
}

impl ColorEnv {
    fn from_process() -> Self {
        Self {
            no_color: env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()),
            force: env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0"),
            clicolor_off: env::var("CLICOLOR").is_ok_and(|v| v == "0"),
        }
    }

    fn allows_color(self, is_tty: bool) -> bool {
        if self.no_color {
            false
        } else if self.force {
            true
        } else {
            !self.clicolor_off && is_tty
        }
    }
}

/// Determine if colors should be used based on environment and TTY status
pub fn should_use_colors() -> bool {
    ColorEnv::from_process().allows_color(std::io::stdout().is_terminal())
}
