//! # Progress — Atomic Search Progress Counters
//!
//! Thread-safe progress tracking shared between engine search threads and the
//! background status reporter. Uses atomics for lock-free counter updates
//! from parallel Rayon workers, and a Mutex only for the current-candidate
//! string (low contention — updated once per block, not per candidate).
//!
//! ## Background Reporter
//!
//! A dedicated thread prints progress to stderr every 30 seconds:
//! tested count, found count, rate (candidates/sec), and current candidate.
//! Shuts down cleanly via the `shutdown` atomic flag.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

pub struct Progress {
    /// Number of `n` values fully processed (a solution found or a
    /// counterexample confirmed).
    pub tested: AtomicU64,
    /// Number of counterexamples found so far (spec.md §3/§7).
    pub found: AtomicU64,
    /// Number of solutions found whose `a` fits in 32 bits — spec.md §3's
    /// "candidates fitting in 32 bits" statistic.
    pub fits_32bit: AtomicU64,
    pub current: Mutex<String>,
    start: Instant,
    shutdown: AtomicBool,
}

impl Progress {
    pub fn new() -> Arc<Self> {
        Arc::new(Progress {
            tested: AtomicU64::new(0),
            found: AtomicU64::new(0),
            fits_32bit: AtomicU64::new(0),
            current: Mutex::new(String::new()),
            start: Instant::now(),
            shutdown: AtomicBool::new(false),
        })
    }

    pub fn start_reporter(self: &Arc<Self>) -> thread::JoinHandle<()> {
        let progress = Arc::clone(self);
        thread::spawn(move || loop {
            thread::sleep(Duration::from_secs(30));
            if progress.shutdown.load(Ordering::Relaxed) {
                break;
            }
            progress.print_status();
        })
    }

    pub fn print_status(&self) {
        let elapsed = self.start.elapsed();
        let tested = self.tested.load(Ordering::Relaxed);
        let found = self.found.load(Ordering::Relaxed);
        let fits_32bit = self.fits_32bit.load(Ordering::Relaxed);
        let current = self.current.lock().unwrap().clone();
        let rate = if elapsed.as_secs() > 0 {
            tested as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };
        let h = elapsed.as_secs() / 3600;
        let m = (elapsed.as_secs() % 3600) / 60;
        let s = elapsed.as_secs() % 60;
        eprintln!(
            "[{:02}:{:02}:{:02}] current: {} | tested: {} | {:.2}/s | counterexamples: {} | a fits u32: {}",
            h, m, s, current, tested, rate, found, fits_32bit
        );
    }

    pub fn stop(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }
}
