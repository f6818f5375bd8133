//! # Driver — Range Search over `n`
//!
//! Drives [`crate::solver::find_solution`] across a contiguous range of `n`,
//! amortizing the two quantities that would otherwise be recomputed from
//! scratch at every `n` (spec.md §4.4):
//!
//! - `big_n = 8n + 3` is tracked incrementally (`big_n += 8` per step).
//! - `a_max`, the largest odd `a` with `a^2 <= big_n`, only changes when
//!   `(a_max + 2)^2 <= big_n`, which on average happens far less than once
//!   per step — so it is nudged upward in place rather than recomputed with
//!   [`crate::montgomery::isqrt64`] every iteration.
//!
//! Candidate `n` are partitioned into fixed-size blocks; within a block the
//! sequential driver walks `n` one at a time (each depends on the previous
//! block's final `a_max`), while the parallel driver assigns whole blocks to
//! rayon workers, each independently seeding its own `a_max` via `isqrt64`
//! once per block (spec.md §5: "amortization is local to a worker's
//! contiguous sub-range").

use std::sync::atomic::Ordering;
use std::sync::Arc;

use rayon::prelude::*;

use crate::montgomery::isqrt64;
use crate::progress::Progress;
use crate::solver::{find_solution_from_n_and_max, Solution};

/// Number of `n` values processed per unit of work, both for the sequential
/// progress-polling cadence and for parallel block partitioning. 2^18
/// matches the cadence spec.md §5 describes for progress/yield checks.
pub const BLOCK_SIZE: u64 = 1 << 18;

/// One confirmed counterexample: no `(a, p)` pair satisfies the equation
/// for this `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counterexample {
    pub n: u64,
    pub big_n: u64,
}

/// Outcome of searching a range: every counterexample found, plus the total
/// count of `n` examined (useful when `stop_at_first` cuts the range short).
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    pub counterexamples: Vec<Counterexample>,
    pub tested: u64,
}

/// Advance the incremental `(big_n, a_max)` pair by one step of `n`
/// (`n -> n + 1`), returning the new pair. `a_max` only grows when the next
/// odd candidate still fits.
#[inline]
fn advance(big_n: u64, mut a_max: u64) -> (u64, u64) {
    let big_n = big_n + 8;
    loop {
        match (a_max + 2).checked_mul(a_max + 2) {
            Some(sq) if sq <= big_n => a_max += 2,
            _ => break,
        }
    }
    (big_n, a_max)
}

/// Search `[start, end)` sequentially on the calling thread, amortizing
/// `(big_n, a_max)` across the whole range. Stops early at the first
/// counterexample if `stop_at_first` is set.
pub fn run_sequential(
    start: u64,
    end: u64,
    stop_at_first: bool,
    progress: &Arc<Progress>,
) -> SearchOutcome {
    let mut outcome = SearchOutcome::default();
    if start >= end {
        return outcome;
    }

    let mut big_n = 8u64.wrapping_mul(start).wrapping_add(3);
    let mut a_max = {
        let r = isqrt64(big_n);
        if r % 2 == 1 {
            r
        } else {
            r.saturating_sub(1)
        }
    };

    let mut n = start;
    while n < end {
        let sol = find_solution_from_n_and_max(big_n, a_max);
        let was_counterexample = !sol.is_some();
        record(&sol, n, progress, &mut outcome);
        if was_counterexample && stop_at_first {
            return outcome;
        }

        n += 1;
        if n < end {
            let (next_big_n, next_a_max) = advance(big_n, a_max);
            big_n = next_big_n;
            a_max = next_a_max;
        }

        if n & (BLOCK_SIZE - 1) == 0 {
            *progress.current.lock().unwrap() = format!("n={n}");
        }
    }
    outcome
}

/// Search `[start, end)` using rayon over fixed-size blocks. Each block
/// independently seeds its own `(big_n, a_max)` amortization chain and
/// proceeds sequentially within itself; blocks run in parallel across the
/// global rayon pool. `stop_at_first` trims the result to the
/// lowest-`n` counterexample across all blocks but does not abort
/// in-flight blocks early (spec.md §5's "parallel driver may overshoot a
/// requested early stop by up to one block").
pub fn run_parallel(
    start: u64,
    end: u64,
    stop_at_first: bool,
    progress: &Arc<Progress>,
) -> SearchOutcome {
    if start >= end {
        return SearchOutcome::default();
    }

    let blocks: Vec<(u64, u64)> = {
        let mut v = Vec::new();
        let mut b = start;
        while b < end {
            let block_end = (b + BLOCK_SIZE).min(end);
            v.push((b, block_end));
            b = block_end;
        }
        v
    };

    let results: Vec<SearchOutcome> = blocks
        .into_par_iter()
        .map(|(block_start, block_end)| run_block(block_start, block_end, progress))
        .collect();

    let mut combined = SearchOutcome::default();
    for r in results {
        combined.tested += r.tested;
        combined.counterexamples.extend(r.counterexamples);
    }
    combined.counterexamples.sort_by_key(|c| c.n);
    if stop_at_first {
        combined.counterexamples.truncate(1);
    }
    combined
}

/// Run one block `[block_start, block_end)` sequentially, seeding its own
/// amortization chain. Shared by [`run_parallel`]'s worker closures.
fn run_block(block_start: u64, block_end: u64, progress: &Arc<Progress>) -> SearchOutcome {
    let mut outcome = SearchOutcome::default();
    if block_start >= block_end {
        return outcome;
    }

    let mut big_n = 8u64.wrapping_mul(block_start).wrapping_add(3);
    let mut a_max = {
        let r = isqrt64(big_n);
        if r % 2 == 1 {
            r
        } else {
            r.saturating_sub(1)
        }
    };

    let mut n = block_start;
    while n < block_end {
        let sol = find_solution_from_n_and_max(big_n, a_max);
        record(&sol, n, progress, &mut outcome);

        n += 1;
        if n < block_end {
            let (next_big_n, next_a_max) = advance(big_n, a_max);
            big_n = next_big_n;
            a_max = next_a_max;
        }
    }
    outcome
}

fn record(sol: &Solution, n: u64, progress: &Arc<Progress>, outcome: &mut SearchOutcome) {
    progress.tested.fetch_add(1, Ordering::Relaxed);
    if sol.is_some() {
        if sol.a <= u64::from(u32::MAX) {
            progress.fits_32bit.fetch_add(1, Ordering::Relaxed);
        }
    } else {
        let big_n = 8u64.wrapping_mul(n).wrapping_add(3);
        progress.found.fetch_add(1, Ordering::Relaxed);
        outcome.counterexamples.push(Counterexample { n, big_n });
    }
}
