//! # 8n+3 Counterexample Search — Core Library
//!
//! Searches for counterexamples to the claim that every `N = 8n + 3` can be
//! written as `a^2 + 2p` with `a` an odd positive integer and `p` prime.
//!
//! ## Module organization
//!
//! - [`montgomery`] — Montgomery modular arithmetic and `isqrt64` (§4.1).
//! - [`primality`] — deterministic 64-bit primality oracle (§4.2).
//! - [`solver`] — per-`n` search for `(a, p)` (§4.3).
//! - [`driver`] — sequential and parallel range drivers (§4.4, §5).
//! - [`verify`] — counterexample cross-checks and the startup self-test (§4.5).
//! - [`progress`] — atomic search-progress counters and the status reporter.
//!
//! The dependency order mirrors the pipeline: modular arithmetic underlies
//! the primality oracle, which underlies the solver, which the driver
//! iterates and the verifier double-checks.

pub mod driver;
pub mod montgomery;
pub mod primality;
pub mod progress;
pub mod solver;
pub mod verify;
