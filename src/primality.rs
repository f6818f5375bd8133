//! # Primality — Deterministic 64-bit Primality Oracle
//!
//! `is_prime` is total over `0 <= n < 2^64` and deterministic: trial
//! division against the first 30 odd primes, then Miller-Rabin against the
//! smallest literature-proven deterministic base set for `n`'s size, drawn
//! from [`witness_table`]. Every base in the selected tier must pass for
//! `n` to be reported prime; the first base that exposes `n` as composite
//! short-circuits the rest.
//!
//! ## Pipeline
//!
//! 1. Handle `n < 2`, `n ∈ {2, 3}`, and even `n` directly.
//! 2. Trial division against [`TRIAL_PRIMES`]; `n <= 127` surviving is prime.
//! 3. [`is_prime_mr`]: Miller-Rabin against [`witness_table::bases_for`],
//!    sharing one set of Montgomery constants when `n < 2^63`.
//!
//! ## References
//!
//! - Pomerance, Selfridge & Wagstaff (1980); Jaeschke (1993): deterministic
//!   Miller-Rabin base sets, as tabulated on Wikipedia's Miller-Rabin
//!   article and implemented in `const_primes`'s `check.rs`.

pub mod witness_table;

use crate::montgomery::{self, MontgomeryCtx};

/// The first 30 odd primes, 3 through 127: the trial-division filter shared
/// by every candidate the oracle sees before falling back to Miller-Rabin.
pub const TRIAL_PRIMES: [u64; 30] = [
    3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
    101, 103, 107, 109, 113, 127,
];

/// Deterministic primality test over the full domain `0 <= n < 2^64`.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        // 2 and 3
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    for &p in TRIAL_PRIMES.iter() {
        if n == p {
            return true;
        }
        if n % p == 0 {
            return false;
        }
    }
    if n <= 127 {
        // n survived trial division by every prime up to 127, and is not
        // itself one of them, but any composite <= 127 has a prime factor
        // <= 11 < 127 which would have been caught above.
        return true;
    }

    is_prime_mr(n)
}

/// The Miller-Rabin fast path: assumes `n` is odd and `n > 127`.
///
/// Runs Miller-Rabin against every base in [`witness_table::bases_for`]`(n)`,
/// sharing one set of Montgomery constants when `n < MONTGOMERY_LIMIT` (the
/// "shared constants optimization" of spec.md §4.2). Short-circuits to
/// `false` on the first base that exposes `n` as composite.
pub fn is_prime_mr(n: u64) -> bool {
    debug_assert!(n % 2 == 1 && n > 127);

    let ctx = if n < montgomery::MONTGOMERY_LIMIT {
        Some(MontgomeryCtx::new(n))
    } else {
        None
    };

    witness_table::bases_for(n)
        .iter()
        .all(|&a| mr_witness(n, a, ctx.as_ref()))
}

/// Run one Miller-Rabin round for base `a` against odd `n > 1`, selecting
/// the Montgomery fast path (when `ctx` is supplied) or the 128-bit
/// fallback. Returns `true` if `n` is a probable prime to this base,
/// `false` if this round proves `n` composite.
fn mr_witness(n: u64, a: u64, ctx: Option<&MontgomeryCtx>) -> bool {
    if a % n == 0 {
        // Degenerate: the witness is a multiple of the candidate. This
        // witness carries no evidence either way; defer to the other round.
        return true;
    }
    match ctx {
        Some(ctx) => mr_round_montgomery(ctx, a),
        None => mr_round_fallback(n, a),
    }
}

/// Decompose `n - 1 = d * 2^k` with `d` odd.
fn odd_part(n_minus_1: u64) -> (u64, u32) {
    let k = n_minus_1.trailing_zeros();
    (n_minus_1 >> k, k)
}

fn mr_round_montgomery(ctx: &MontgomeryCtx, a: u64) -> bool {
    let n = ctx.n;
    let n_minus_1 = n - 1;
    let (d, k) = odd_part(n_minus_1);

    let a_mont = ctx.to_mont(a % n);
    let mut x = ctx.pow_mod_branchless(a_mont, d);
    let one = ctx.one();
    let n_minus_1_mont = ctx.to_mont(n_minus_1);

    if x == one || x == n_minus_1_mont {
        return true;
    }
    for _ in 1..k {
        x = ctx.sqr(x);
        if x == n_minus_1_mont {
            return true;
        }
    }
    false
}

fn mr_round_fallback(n: u64, a: u64) -> bool {
    let n_minus_1 = n - 1;
    let (d, k) = odd_part(n_minus_1);

    let mut x = montgomery::powmod(a % n, d, n);
    if x == 1 || x == n_minus_1 {
        return true;
    }
    for _ in 1..k {
        x = montgomery::mulmod(x, x, n);
        if x == n_minus_1 {
            return true;
        }
    }
    false
}
