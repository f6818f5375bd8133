//! # Witness set — deterministic Miller-Rabin bases for all of u64
//!
//! spec.md's FJ64_262K design picks a second base from a published 2^18
//! hash-indexed table whose construction is external to this system. Absent
//! network access to retrieve that table, an earlier version of this module
//! built a from-scratch substitute table and verified it only against a
//! bundled corpus of known base-2 strong pseudoprimes — which left every
//! *other* base-2 strong pseudoprime that happened to collide with a
//! default witness silently misclassified as prime (e.g. `873181 = 661 *
//! 1321` was accepted as prime by that construction). That breaks the
//! oracle's one non-negotiable contract (spec.md §4.2: deterministic over
//! all `0 <= n < 2^64`), so it has been replaced with a tiered, literature-
//! sourced deterministic base set, following the approach in
//! `const_primes`'s `check.rs` (Sörngård): pick the smallest threshold at
//! or above `n` from a fixed table and run Miller-Rabin with every base
//! listed for that threshold. The table (Pomerance/Selfridge/Wagstaff and
//! Jaeschke, as tabulated on Wikipedia's Miller-Rabin article) is proven
//! deterministic for every `n` below its threshold, and the final tier
//! (bases {2,3,5,7,11,13,17,19,23,29,31,37}) is proven deterministic up to
//! roughly 3.3 * 10^24, comfortably covering all of u64. This costs more
//! than FJ64's fixed two rounds for large `n` (up to 12), but is actually
//! correct over the full domain rather than only over a bundled corpus.

/// `(threshold, bases)`: for `n <= threshold`, Miller-Rabin against every
/// base in `bases` is deterministic. Entries are in increasing threshold
/// order; the smallest threshold `>= n` selects the base set to use.
///
/// Source: Pomerance, Selfridge & Wagstaff (1980) and Jaeschke (1993), as
/// tabulated at
/// <https://en.wikipedia.org/wiki/Miller%E2%80%93Rabin_primality_test#Testing_against_small_sets_of_bases>.
pub const WITNESS_SETS: &[(u64, &[u64])] = &[
    (2_046, &[2]),
    (1_373_652, &[2, 3]),
    (9_080_190, &[31, 73]),
    (25_326_000, &[2, 3, 5]),
    (4_759_123_140, &[2, 7, 61]),
    (1_112_004_669_632, &[2, 13, 23, 1_662_803]),
    (2_152_302_898_746, &[2, 3, 5, 7, 11]),
    (3_474_749_660_382, &[2, 3, 5, 7, 11, 13]),
    (341_550_071_728_320, &[2, 3, 5, 7, 11, 13, 17]),
    (3_825_123_056_546_413_050, &[2, 3, 5, 7, 11, 13, 17, 19, 23]),
    (u64::MAX, &[2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37]),
];

/// The deterministic base set to use for candidate `n`: the bases attached
/// to the smallest threshold `>= n`. `n` is always `<= u64::MAX`, the final
/// entry's threshold, so this never falls through.
pub fn bases_for(n: u64) -> &'static [u64] {
    for &(threshold, bases) in WITNESS_SETS {
        if n <= threshold {
            return bases;
        }
    }
    unreachable!("u64::MAX is the last threshold; every n <= u64::MAX matches some tier");
}
