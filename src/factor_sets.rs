//! Candidate factor-set enumeration and selection.
//!
//! Turning a composite into a small product expression runs in three
//! stages: narrow the divisor list to a median-centered window when it is
//! too long, enumerate every divisor subset whose product reconstructs the
//! number, then keep the subset whose rounded mean sits closest to the
//! number's decimal magnitude. Enumeration order breaks ties, so all three
//! stages are order-preserving by contract.

use num_integer::Roots;
use num_traits::{CheckedMul, One};

use crate::combinations::combinations;
use crate::primes::divisors;

/// Product of a slice, or `None` on overflow.
///
/// An overflowing product can never equal a `u64` target, so callers treat
/// `None` as a failed match.
pub fn checked_product<T: CheckedMul + One + Copy>(xs: &[T]) -> Option<T> {
    xs.iter().try_fold(T::one(), |acc, x| acc.checked_mul(x))
}

/// Number of decimal digits of `x` (x >= 1).
pub fn digit_len(x: u64) -> u32 {
    x.ilog10() + 1
}

/// ceil(log10(x)), computed exactly in integers as the smallest k with
/// 10^k >= x. Avoids floating-point log, which can land powers of ten on
/// the wrong side of the ceiling.
pub fn ceil_log10(x: u64) -> u32 {
    if x <= 1 {
        0
    } else {
        digit_len(x - 1)
    }
}

/// round(x^(1/n)), computed exactly.
///
/// Takes the floor nth root, then rounds up when the real root is at least
/// halfway to the next integer, i.e. when (2r+1)^n <= 2^n * x. Matches
/// round-half-up on exact midpoints.
pub fn rounded_nth_root(x: u64, n: u32) -> u64 {
    let r = x.nth_root(n);
    let midpoint = (2u128 * r as u128 + 1).checked_pow(n);
    let scaled = (x as u128).checked_mul(1u128 << n);
    match (midpoint, scaled) {
        (Some(m), Some(s)) if m <= s => r + 1,
        _ => r,
    }
}

/// Arithmetic mean rounded to the nearest integer, half away from zero.
pub(crate) fn rounded_mean(xs: &[u64]) -> i64 {
    let sum: f64 = xs.iter().map(|&v| v as f64).sum();
    (sum / xs.len() as f64).round() as i64
}

/// Index of the first value whose distance to `target` is minimal.
///
/// Later values win only on a strict improvement, so ties keep the
/// earliest candidate; enumeration order is part of the selection
/// contract, not an accident. Values 1000 or more away never match: a
/// list whose entries are all that far from the target yields `None`,
/// sending the caller to its fallback.
pub(crate) fn closest_index(values: &[i64], target: i64) -> Option<usize> {
    let mut best: Option<usize> = None;
    let mut min_distance = 1000i64;
    for (i, &v) in values.iter().enumerate() {
        let distance = (target - v).abs();
        if distance < min_distance {
            min_distance = distance;
            best = Some(i);
        }
    }
    best
}

/// Restrict an ascending list to a window of `l` elements on each side of
/// its median (one central element for odd lengths, two for even).
///
/// Returns the list unchanged when the window does not fit (`l` exceeds
/// half the length) or the list is a single element. The median is removed
/// by value before splitting, which is safe here because divisor lists
/// never repeat. The two tails index asymmetrically: the upper head clamps
/// at the end of its half, but a lower-tail request past its half wraps
/// the start to max(2*half_len - l, 0), keeping only the innermost
/// elements. Both behaviors are part of the narrowing contract.
pub fn median_window(a: &[u64], l: usize) -> Vec<u64> {
    if a.is_empty() {
        return Vec::new();
    }
    let mid = (a.len() + 1) / 2;
    let median: Vec<u64> = if a.len() % 2 == 0 {
        vec![a[mid - 1], a[mid]]
    } else {
        vec![a[mid - 1]]
    };
    if l > a.len() / 2 || a.len() == 1 {
        return a.to_vec();
    }
    let rest: Vec<u64> = a.iter().copied().filter(|e| !median.contains(e)).collect();
    let half = rest.len() / 2;
    let (lower, upper) = rest.split_at(half);
    let start = if l <= lower.len() {
        lower.len() - l
    } else {
        // Wrapped start for an oversized request: max(2*len - l, 0).
        (2 * lower.len()).saturating_sub(l)
    };
    let mut window = lower[start..].to_vec();
    window.extend_from_slice(&median);
    window.extend_from_slice(&upper[..l.min(upper.len())]);
    window
}

/// All combinations of divisors of `x` whose product is exactly `x`,
/// excluding any set that starts with 1 or has a single element. Output
/// order is ascending bitmask order over the (possibly narrowed) divisor
/// list.
///
/// When `x` has more divisors than round(x^(1/digits)) — an estimate of a
/// typical factor magnitude — the divisor list is first narrowed to a
/// median-centered window of that half-width to keep the subset search
/// tractable. The threshold is a tuned heuristic; selection downstream
/// depends on exactly which divisors survive it.
pub fn factor_sets(x: u64) -> Vec<Vec<u64>> {
    let mut divs = divisors(x);
    let len = digit_len(x);
    let estimate = rounded_nth_root(x, len);
    if divs.len() as u64 > estimate {
        divs = median_window(&divs, estimate as usize);
    }
    combinations(&divs)
        .into_iter()
        .filter(|set| checked_product(set) == Some(x))
        .filter(|set| set[0] != 1 && set.len() != 1)
        .collect()
}

/// Pick the factor set whose rounded mean is closest to ceil(log10(x)),
/// among sets shorter than one more than that magnitude.
///
/// Returns `None` when no set survives the length filter, or when every
/// survivor's mean is at least 1000 from the target; the encoder then
/// falls back to the flat prime factorization.
pub fn choose_factors(x: u64) -> Option<Vec<u64>> {
    let target = ceil_log10(x);
    let candidates: Vec<Vec<u64>> = factor_sets(x)
        .into_iter()
        .filter(|set| set.len() < 1 + target as usize)
        .collect();
    let means: Vec<i64> = candidates.iter().map(|set| rounded_mean(set)).collect();
    closest_index(&means, target as i64).map(|i| candidates[i].clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_len() {
        assert_eq!(digit_len(1), 1);
        assert_eq!(digit_len(9), 1);
        assert_eq!(digit_len(10), 2);
        assert_eq!(digit_len(99_999), 5);
    }

    #[test]
    fn test_ceil_log10() {
        assert_eq!(ceil_log10(1), 0);
        assert_eq!(ceil_log10(10), 1);
        assert_eq!(ceil_log10(11), 2);
        assert_eq!(ceil_log10(100), 2);
        assert_eq!(ceil_log10(101), 3);
        assert_eq!(ceil_log10(17), 2);
        assert_eq!(ceil_log10(1000), 3);
    }

    #[test]
    fn test_rounded_nth_root() {
        assert_eq!(rounded_nth_root(16, 2), 4);
        assert_eq!(rounded_nth_root(18, 2), 4); // 4.24 rounds down
        assert_eq!(rounded_nth_root(24, 2), 5); // 4.90 rounds up
        assert_eq!(rounded_nth_root(30, 2), 5);
        assert_eq!(rounded_nth_root(120, 3), 5); // 4.93 rounds up
        assert_eq!(rounded_nth_root(64, 2), 8);
        assert_eq!(rounded_nth_root(9, 1), 9);
    }

    #[test]
    fn test_checked_product() {
        assert_eq!(checked_product(&[3u64, 4]), Some(12));
        assert_eq!(checked_product::<u64>(&[]), Some(1));
        assert_eq!(
            checked_product(&[u64::MAX, 2]),
            None,
            "overflow must yield None, not wrap"
        );
    }

    #[test]
    fn test_closest_index_keeps_first_tie() {
        // 3 and 1 are both at distance 1 from 2; the first wins.
        assert_eq!(closest_index(&[3, 1], 2), Some(0));
        // A strict improvement later in the scan still wins.
        assert_eq!(closest_index(&[3, 1, 2], 2), Some(2));
        assert_eq!(closest_index(&[5, 4, 4], 2), Some(1));
        assert_eq!(closest_index(&[], 2), None);
    }

    #[test]
    fn test_closest_index_far_values_never_match() {
        // The scan starts from a distance threshold of 1000: 999 away
        // still matches, 1000 away no longer does.
        assert_eq!(closest_index(&[1004], 5), Some(0));
        assert_eq!(closest_index(&[1005], 5), None);
        assert_eq!(closest_index(&[1263, 2522], 5), None);
        assert_eq!(closest_index(&[1263, 8], 5), Some(1));
    }

    #[test]
    fn test_median_window_odd() {
        // Median of 7 elements is the 4th; l=2 keeps two on each side.
        assert_eq!(
            median_window(&[1, 2, 3, 4, 5, 6, 7], 2),
            vec![2, 3, 4, 5, 6]
        );
    }

    #[test]
    fn test_median_window_even() {
        // Even length keeps the two central elements.
        assert_eq!(median_window(&[1, 2, 3, 4], 0), vec![2, 3]);
        assert_eq!(median_window(&[1, 2, 3, 4, 5, 6], 1), vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_median_window_too_large_request() {
        let a = vec![1, 2, 3, 4, 5];
        assert_eq!(median_window(&a, 3), a, "oversized window returns input");
        assert_eq!(median_window(&[9], 0), vec![9]);
    }

    #[test]
    fn test_median_window_lower_tail_wraps() {
        // Ten divisors of 162 with a half-window of 5: the request exceeds
        // the 4-element lower half [1,2,3,6], so the start wraps to
        // 2*4 - 5 = 3 and only 6 survives from below the median.
        assert_eq!(
            median_window(&[1, 2, 3, 6, 9, 18, 27, 54, 81, 162], 5),
            vec![6, 9, 18, 27, 54, 81, 162]
        );
        // Same shape with a 5-element lower half and l = 6: the lower tail
        // keeps one element while the upper head clamps to its whole half.
        assert_eq!(
            median_window(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12], 6),
            vec![5, 6, 7, 8, 9, 10, 11, 12]
        );
    }

    #[test]
    fn test_factor_sets_18() {
        // Divisors [1,2,3,6,9,18]; {3,6} has mask 12, {2,9} mask 18.
        assert_eq!(factor_sets(18), vec![vec![3, 6], vec![2, 9]]);
    }

    #[test]
    fn test_factor_sets_constraints() {
        for set in factor_sets(24) {
            assert!(set.len() >= 2, "singleton sets are excluded: {:?}", set);
            assert_ne!(set[0], 1, "sets led by 1 are excluded: {:?}", set);
            assert_eq!(
                set.iter().product::<u64>(),
                24,
                "every set must multiply back to the input: {:?}",
                set
            );
        }
    }

    #[test]
    fn test_choose_factors() {
        assert_eq!(choose_factors(18), Some(vec![3, 6]));
        assert_eq!(choose_factors(60), Some(vec![6, 10]));
        assert_eq!(choose_factors(24), Some(vec![4, 6]));
        // 162's divisors narrow to [6,9,18,27,54,81,162]; {9,18} has the
        // smallest mask among sets that multiply back to 162.
        assert_eq!(choose_factors(162), Some(vec![9, 18]));
    }

    #[test]
    fn test_choose_factors_far_means_yield_none() {
        // 10084 = 2^2 * 2521: the only sets are [4,2521] and [2,5042],
        // with rounded means 1263 and 2522 — both at least 1000 from the
        // magnitude target 5, so nothing is selected.
        assert_eq!(choose_factors(10_084), None);
    }
}
