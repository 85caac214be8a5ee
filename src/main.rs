mod cli;
mod display;
mod error;
mod markdown;
mod picker;
mod state;

use clap::Parser;
use std::io;

use crate::cli::args::ParsedArgs;
use crate::cli::read::{self, Outcome, Session};
use crate::error::Result;
use crate::picker::TerminalPrompter;
use crate::state::StateStore;

#[derive(Parser)]
#[command(name = "mdlite", version)]
#[command(about = "Browse to a folder and print one of its Markdown files", long_about = None)]
#[command(after_help = "Options after the file name:\n  \
    --dir <PATH>  Start browsing from PATH instead of the remembered folder\n  \
    --change      Ignore the remembered folder and start from the current directory")]
struct Cli {
    /// Markdown file to print (the `.md` extension is optional), plus `--dir <PATH>` and `--change`
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    tokens: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let args = ParsedArgs::parse(&cli.tokens);
    log::debug!("Parsed arguments: {:?}", args);

    let cwd = std::env::current_dir()?;
    let store = StateStore::new(state::default_path(&cwd));
    log::debug!("State file: {}", store.path().display());
    let colors = display::should_use_colors();

    let mut prompter = TerminalPrompter::new(colors);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let outcome = read::run(
        &args,
        Session {
            cwd: &cwd,
            store: &store,
            prompter: &mut prompter,
            out: &mut out,
            colors,
        },
    )?;
    match outcome {
        Outcome::Printed(path) => log::debug!("Printed {}", path.display()),
        Outcome::NoMarkdownFiles(dir) => log::debug!("Nothing to print in {}", dir.display()),
        Outcome::NotFound(name) => log::debug!("No match for {}", name),
    }

    Ok(())
}
