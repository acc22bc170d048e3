// SPDX-License-Identifier: MIT
//
// swatch — derive color scales from a single seed.
//
// This is the command-line front end over the two library crates:
//
//   swatch-color → ColorComponents, hex / 8-bit RGB codecs
//   swatch-theme → schemes, variants, dynamic colors, themes
//
// Every command is a pure lookup followed by printing:
//
//   argv → clap → Command → swatch-theme resolution → rows on stdout
//
// Logs go to stderr so output stays pipeable.

mod cli;
mod commands;

use std::io;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    if let Err(e) = commands::run(&cli.command, &mut stdout.lock()) {
        tracing::debug!(event = "cli.command.failed", error = %e);
        eprintln!("swatch: {e}");
        process::exit(1);
    }
}

/// `--verbose` forces debug output; otherwise `RUST_LOG` decides, with
/// warnings as the floor.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
