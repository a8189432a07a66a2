//! Assay CLI - lab dataset quality analysis.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = assay::logging::init_logging(cli.verbose, cli.quiet) {
        eprintln!("Warning: {}", e);
    }

    let result = match cli.command {
        Commands::Analyze {
            file,
            name,
            format,
            output,
            config,
            summarizer,
            mode,
        } => commands::analyze::run(commands::analyze::AnalyzeArgs {
            file,
            name,
            format,
            output,
            config,
            summarizer: summarizer.into(),
            mode,
        }),

        Commands::Profile { file, json } => commands::profile::run(file, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
