//! # Solver — Per-n Search for N = a^2 + 2p
//!
//! For a single `n`, with `N = 8n + 3`, finds an odd `a >= 1` and a prime `p`
//! with `a^2 + 2p = N`, or determines that none exists (a counterexample).
//!
//! ## Iteration order
//!
//! `a` iterates from `a_max` downward by 2 to 1, testing the smallest `p`
//! candidates first. This is a deliberate design decision (spec.md §9, not a
//! micro-optimization): smaller candidates are denser in primes and cheaper
//! to reject by trial division, so top-down iteration tests roughly an order
//! of magnitude fewer candidates on average than bottom-up.
//!
//! ## Incremental update
//!
//! Rather than recompute `p = (N - a^2) / 2` from scratch at each step, the
//! loop maintains `(p, delta)` and applies `p += delta; delta -= 4` as `a`
//! decreases by 2 — one addition in place of one multiplication per
//! candidate.

use crate::montgomery::isqrt64;
use crate::primality::is_prime;

/// A solution to `a^2 + 2p = N` with `a` odd, `a >= 1`, `p` prime — or the
/// sentinel `a == 0` meaning no such pair exists (a counterexample).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution {
    pub a: u64,
    pub p: u64,
}

impl Solution {
    /// The sentinel returned when no solution exists for this `n`.
    pub const NONE: Solution = Solution { a: 0, p: 0 };

    /// Whether this represents an actual solution (as opposed to the
    /// counterexample sentinel).
    pub fn is_some(&self) -> bool {
        self.a != 0
    }
}

/// The largest odd integer `a` with `a*a <= n`.
fn odd_floor_isqrt(n: u64) -> u64 {
    let r = isqrt64(n);
    if r % 2 == 1 {
        r
    } else {
        r.saturating_sub(1)
    }
}

/// Find a solution for `n`, computing `N` and `a_max` from scratch. For
/// batch use over a range, prefer [`find_solution_from_n_and_max`], which
/// lets the caller amortize both across consecutive `n` (spec.md §4.4).
pub fn find_solution(n: u64) -> Solution {
    let big_n = 8u64.wrapping_mul(n).wrapping_add(3);
    let a_max = odd_floor_isqrt(big_n);
    find_solution_from_n_and_max(big_n, a_max)
}

/// Find a solution given precomputed `big_n = 8n + 3` and `a_max`, the
/// largest odd integer with `a_max^2 <= big_n`.
///
/// # Preconditions
/// `a_max` is odd and `a_max * a_max <= big_n < (a_max + 2) * (a_max + 2)`.
pub fn find_solution_from_n_and_max(big_n: u64, a_max: u64) -> Solution {
    if a_max == 0 {
        return Solution::NONE;
    }
    debug_assert!(a_max % 2 == 1);
    debug_assert!(a_max.checked_mul(a_max).is_some_and(|sq| sq <= big_n));

    let mut a = a_max;
    // p = (N - a^2) / 2, delta = 2*(a - 1): the amount added to p when a
    // drops to a-2 (see the module doc for the derivation).
    let mut p = (big_n - a * a) / 2;
    let mut delta = 2 * (a - 1);

    loop {
        if p >= 2 && is_prime(p) {
            return Solution { a, p };
        }
        if a < 3 {
            return Solution::NONE;
        }
        p += delta;
        delta -= 4;
        a -= 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concrete_scenarios_from_spec() {
        // n=1 -> (a=1, p=5): 1 + 2*5 = 11 = 8*1+3
        assert_eq!(find_solution(1), Solution { a: 1, p: 5 });
        // n=2 -> (a=3, p=5): 9 + 2*5 = 19 = 8*2+3
        assert_eq!(find_solution(2), Solution { a: 3, p: 5 });
        // n=3 -> (a=1, p=13): 1 + 2*13 = 27 = 8*3+3
        assert_eq!(find_solution(3), Solution { a: 1, p: 13 });
    }

    #[test]
    fn n_equals_4_yields_valid_solution_with_largest_a() {
        let sol = find_solution(4);
        assert!(sol.is_some());
        assert_eq!(sol.a * sol.a + 2 * sol.p, 35);
        assert!(is_prime(sol.p));
        // Top-down iteration should prefer a=5 (p=5) over a=1 (p=17).
        assert_eq!(sol, Solution { a: 5, p: 5 });
    }

    #[test]
    fn n_equals_zero_has_no_solution() {
        // N=3, a_max=1, p=(3-1)/2=1, not prime (p<2 guard) -> counterexample.
        let sol = find_solution(0);
        assert_eq!(sol, Solution::NONE);
    }

    #[test]
    fn every_solution_satisfies_defining_equation() {
        for n in 0u64..10_000 {
            let sol = find_solution(n);
            if sol.is_some() {
                let big_n = 8 * n + 3;
                assert_eq!(sol.a * sol.a + 2 * sol.p, big_n, "n={n}");
                assert_eq!(sol.a % 2, 1, "n={n}: a must be odd");
                assert!(is_prime(sol.p), "n={n}: p={} must be prime", sol.p);
            }
        }
    }

    #[test]
    fn no_counterexamples_up_to_ten_thousand() {
        // Per spec.md §8 concrete scenario 7.
        for n in 1u64..10_000 {
            assert!(find_solution(n).is_some(), "unexpected counterexample at n={n}");
        }
    }

    #[test]
    fn returned_a_is_the_largest_valid_one() {
        for n in 1u64..2_000 {
            let sol = find_solution(n);
            if !sol.is_some() {
                continue;
            }
            let big_n = 8 * n + 3;
            let a_max = odd_floor_isqrt(big_n);
            let mut a = a_max;
            while a > sol.a {
                let p = (big_n - a * a) / 2;
                assert!(
                    p < 2 || !is_prime(p),
                    "n={n}: found a={} with p={} prime, larger than reported a={}",
                    a,
                    p,
                    sol.a
                );
                a -= 2;
            }
        }
    }

    #[test]
    fn from_n_and_max_matches_from_scratch() {
        for n in 0u64..5_000 {
            let big_n = 8 * n + 3;
            let a_max = odd_floor_isqrt(big_n);
            assert_eq!(find_solution_from_n_and_max(big_n, a_max), find_solution(n));
        }
    }

    #[test]
    fn large_n_near_sixty_one_bit_bound() {
        // n near 2^61 - 1: N approaches 2^64, forcing the oracle's 128-bit
        // fallback to engage for at least some candidates (spec.md §8).
        let n = (1u64 << 61) - 1_000;
        let sol = find_solution(n);
        if sol.is_some() {
            assert_eq!(sol.a * sol.a + 2 * sol.p, 8 * n + 3);
            assert!(is_prime(sol.p));
        }
    }

    #[test]
    fn odd_floor_isqrt_matches_definition() {
        for n in 0u64..5_000 {
            let a = odd_floor_isqrt(n);
            assert!(a == 0 || a % 2 == 1, "n={n}: a={a} should be 0 or odd");
            assert!(a * a <= n, "n={n}: a={a} squared exceeds n");
            assert!((a + 2) * (a + 2) > n, "n={n}: a={a} is not the largest odd root");
        }
    }
}
