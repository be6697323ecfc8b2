//! Merge cheap sub-products back into a chosen factor set.
//!
//! A set like `[2, 8, 13]` reads better as `[13, 16]`: any sub-combination
//! whose product is 16 or less collapses to a single base-case factor in
//! the final notation. One merge per pass; the encoder applies a single
//! pass after selection.

use crate::combinations::combinations;
use crate::factor_sets::{ceil_log10, checked_product, closest_index, rounded_mean};

/// Merge the best sub-combination of `a` with product <= 16 into a single
/// element, or return `a` unchanged when no sub-combination qualifies.
///
/// Candidates need at least two elements. Among them, the one whose
/// rounded mean is closest to ceil(log10(product(a))) wins, earliest
/// enumeration first on ties. Removal is by value: every occurrence of a
/// merged value leaves the list, which with duplicate inputs can remove
/// more elements than the chosen sub-combination held. That value-based
/// behavior is part of the notation's contract.
pub fn simplify(a: &[u64]) -> Vec<u64> {
    let total = match checked_product(a) {
        Some(p) => p,
        None => return a.to_vec(),
    };
    let candidates: Vec<Vec<u64>> = combinations(a)
        .into_iter()
        .filter(|set| set.len() > 1 && checked_product(set).map_or(false, |p| p <= 16))
        .collect();
    let means: Vec<i64> = candidates.iter().map(|set| rounded_mean(set)).collect();
    let merged = match closest_index(&means, ceil_log10(total) as i64) {
        Some(i) => &candidates[i],
        None => return a.to_vec(),
    };
    let product: u64 = merged.iter().product();
    let mut out: Vec<u64> = a.iter().copied().filter(|e| !merged.contains(e)).collect();
    out.push(product);
    out
}
