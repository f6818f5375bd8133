//! # CLI Execution Logic
//!
//! Extracted from `main.rs` to keep the entry point slim, following the
//! teacher's split between clap's `Cli`/`Commands` structs (kept in
//! `main.rs`) and their execution bodies (here). Contains input validation,
//! the self-test gate, search dispatch, and rayon thread-pool configuration.

use std::time::Instant;

use anyhow::{anyhow, Result};
use tracing::info;

use crate::driver::{self, SearchOutcome};
use crate::progress::Progress;
use crate::verify;

/// Upper bound on `n_end` from spec.md §6: ensures `N = 8n + 3` fits in
/// `u64` with headroom for the driver's incremental `+8` step.
pub const MAX_N_END: u64 = 1 << 61;

/// The result of running a search: how `main` decides its exit status.
#[derive(Debug)]
pub enum RunOutcome {
    /// The range completed with no counterexamples (exit 0).
    NoCounterexamples,
    /// At least one verified counterexample was found (exit 2).
    CounterexamplesFound(Vec<u64>),
}

/// Validate a requested `[start, end)` range per spec.md §6: `start < end`
/// and `end` small enough that `8n + 3` cannot overflow `u64`.
pub fn validate_range(start: u64, end: u64) -> Result<()> {
    if start >= end {
        return Err(anyhow!(
            "invalid range: start ({start}) must be less than end ({end})"
        ));
    }
    if end > MAX_N_END {
        return Err(anyhow!(
            "invalid range: end ({end}) exceeds the supported bound ({MAX_N_END}); \
             N = 8n+3 must fit in u64"
        ));
    }
    Ok(())
}

/// Run the `search` subcommand: validate the range, optionally run the
/// startup self-test, drive the search (sequential or parallel), verify
/// every reported counterexample, and print the spec.md §6 output format.
pub fn run_search(
    start: u64,
    end: u64,
    parallel: bool,
    stop_at_first: bool,
    skip_self_test: bool,
) -> Result<RunOutcome> {
    validate_range(start, end)?;

    if skip_self_test {
        info!("skipping startup self-test (--skip-self-test)");
    } else {
        verify::run_self_test()?;
        info!("startup self-test passed");
    }

    info!(start, end, parallel, "search starting");
    let progress = Progress::new();
    let reporter = progress.start_reporter();
    let search_start = Instant::now();

    let outcome: SearchOutcome = if parallel {
        driver::run_parallel(start, end, stop_at_first, &progress)
    } else {
        driver::run_sequential(start, end, stop_at_first, &progress)
    };

    let mut confirmed = Vec::new();
    for ce in &outcome.counterexamples {
        match verify::verify_outcome(ce.n) {
            verify::VerifyOutcome::Confirmed => {
                println!("n={} N={}", ce.n, ce.big_n);
                confirmed.push(ce.n);
            }
            // Per spec.md §4.5: a solver-reported counterexample that the
            // verifier re-derives a solution for indicates a bug, not a
            // valid outcome.
            verify::VerifyOutcome::SpuriousReport { a, p } => {
                return Err(anyhow!(
                    "verification mismatch at n={}: solver reported a counterexample \
                     but the verifier found (a={a}, p={p})",
                    ce.n
                ));
            }
        }
    }

    progress.stop();
    let _ = reporter; // background thread exits on its own next tick

    print_summary(&progress, search_start.elapsed(), confirmed.len());

    if confirmed.is_empty() {
        Ok(RunOutcome::NoCounterexamples)
    } else {
        Ok(RunOutcome::CounterexamplesFound(confirmed))
    }
}

fn print_summary(progress: &Progress, elapsed: std::time::Duration, found: usize) {
    use std::sync::atomic::Ordering;
    let tested = progress.tested.load(Ordering::Relaxed);
    let rate = if elapsed.as_secs_f64() > 0.0 {
        tested as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    };
    println!(
        "elapsed={:.3}s tested={} rate={:.2}/s counterexamples={}",
        elapsed.as_secs_f64(),
        tested,
        rate,
        found
    );
}

/// Configure the rayon global thread pool. A no-op (rayon picks a default
/// based on available cores) when `threads` is `None` or `Some(0)`.
pub fn configure_rayon(threads: Option<usize>) {
    let num_threads = threads.unwrap_or(0);
    if num_threads > 0 {
        if let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
        {
            tracing::warn!(error = %e, "could not configure rayon thread pool");
        }
    }
}
