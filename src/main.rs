//! `gldn` command-line entry point.
use anyhow::Result;
use clap::Parser;

use gldn::{cli, commands, logging};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();

    match &args.command {
        cli::Command::Completions(opts) => {
            commands::completions::run(opts);
            return Ok(());
        }
        cli::Command::Version => {
            commands::version::run();
            return Ok(());
        }
        _ => {}
    }

    let name = args.command.name();
    logging::init_subscriber(args.verbose, name);
    let log = logging::Logger::new(name);

    match &args.command {
        cli::Command::Link(opts) => commands::link::run(&args.global, opts, &log),
        cli::Command::Unlink(opts) => commands::unlink::run(&args.global, opts, &log),
        cli::Command::Relink(opts) => commands::relink::run(&args.global, opts, &log),
        cli::Command::Ignored(opts) => commands::ignored::run(&args.global, opts, &log),
        cli::Command::List(opts) => commands::list::run(&args.global, opts, &log),
        cli::Command::Init(opts) => commands::init::run(&args.global, opts, &log),
        cli::Command::Completions(_) | cli::Command::Version => Ok(()),
    }
}
