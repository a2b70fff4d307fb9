mod cli;

use clap::Parser;
use logstat_core::logging::init_logging;
use logstat_core::stats::SnapshotFormat;
use std::num::NonZeroU64;

/// Shell status for a SIGINT death (128 + 2), used if the signal cannot be re-raised.
const EXIT_INTERRUPTED: i32 = 130;

#[derive(Parser, Debug)]
#[command(
    name = "logstat",
    version,
    about = "logstat: running totals for an HTTP access log read from stdin"
)]
struct Cli {
    /// Emit a snapshot after every N consumed lines
    #[arg(long, value_name = "N", default_value = "10")]
    every: NonZeroU64,

    /// Snapshot output format
    #[arg(long, value_enum, default_value_t = SnapshotFormat::Text)]
    format: SnapshotFormat,
}

fn main() {
    let cli = Cli::parse();

    init_logging();

    if let Err(e) = cli::stats::run(cli.every, cli.format) {
        if cli::stats::was_interrupted(&e) {
            cli::stats::reraise_interrupt();
            std::process::exit(EXIT_INTERRUPTED);
        }

        eprintln!("logstat error: {e:#}");
        std::process::exit(1);
    }
}
