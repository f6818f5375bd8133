//! # Main — CLI Entry Point
//!
//! Parses arguments, initializes logging, and dispatches to [`cli::run_search`].
//! Maps the result to the exit statuses spec.md §6/§7 define: 0 (no
//! counterexamples), 2 (counterexamples found, verified), 1 (input error or
//! self-test failure).
//!
//! `search` is kept as an explicit subcommand (rather than flattening its
//! flags onto the top level) to mirror the teacher's one-subcommand-per-form
//! dispatch shape and leave room for a future `self-test` subcommand that
//! only runs §4.5's startup cross-check.

mod cli;

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use cli::RunOutcome;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "8n3-search", about = "Search for counterexamples to the 8n+3 = a^2 + 2p conjecture")]
struct Cli {
    /// Number of rayon worker threads for the parallel driver (0 or absent
    /// uses all logical cores).
    #[arg(long, env = "N3_THREADS", global = true)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a half-open range [start, end) of n for counterexamples.
    Search {
        /// Start of the range (inclusive).
        #[arg(long)]
        start: u64,
        /// End of the range (exclusive).
        #[arg(long)]
        end: u64,
        /// Use the parallel range driver instead of the sequential one.
        #[arg(long)]
        parallel: bool,
        /// Stop at the first counterexample instead of exhausting the range.
        #[arg(long)]
        stop_at_first: bool,
        /// Skip the startup self-test (spec.md §4.5) that cross-checks known
        /// (n, a, p) solutions before searching.
        #[arg(long, env = "N3_SKIP_SELF_TEST")]
        skip_self_test: bool,
    },
}

fn main() -> ExitCode {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt().json().with_target(false).init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    let cli = Cli::parse();
    cli::configure_rayon(cli.threads);

    let Commands::Search {
        start,
        end,
        parallel,
        stop_at_first,
        skip_self_test,
    } = cli.command;

    match cli::run_search(start, end, parallel, stop_at_first, skip_self_test) {
        Ok(RunOutcome::NoCounterexamples) => ExitCode::from(0),
        Ok(RunOutcome::CounterexamplesFound(_)) => ExitCode::from(2),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}
