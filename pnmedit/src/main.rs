mod repl;

use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::{ErrorLevel, Verbosity};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

/// Interactive editor for PNM (P2/P3/P5/P6) raster images.
///
/// Reads one command per line from stdin (or a script file) and prints one
/// status line per command.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
	/// Read commands from this file instead of stdin
	#[arg(value_name = "SCRIPT")]
	script: Option<PathBuf>,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	let stdout = io::stdout();
	match &cli.script {
		Some(path) => repl::run(BufReader::new(File::open(path)?), stdout.lock()),
		None => repl::run(io::stdin().lock(), stdout.lock()),
	}
}
