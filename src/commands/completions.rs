//! Command: emit shell completions.
use clap::CommandFactory;

use crate::cli::{Cli, CompletionsOpts};

/// Write completions for the requested shell to stdout.
pub fn run(opts: &CompletionsOpts) {
    clap_complete::generate(opts.shell, &mut Cli::command(), "gldn", &mut std::io::stdout());
}
