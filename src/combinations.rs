//! Bitmask subset enumeration.
//!
//! Every non-empty subset of a slice corresponds to a nonzero bitmask over
//! its indices. Subsets come out in ascending mask order and elements keep
//! their original relative order, so enumeration is deterministic and
//! callers scanning for a first match can rely on it.

/// Enumerate all non-empty subsets of `list`.
///
/// Mask `i` selects `list[j]` for every set bit `j`, giving exactly
/// `2^len - 1` subsets. An empty input yields no subsets. No filtering
/// happens here; callers apply their own predicates.
pub fn combinations<T: Copy>(list: &[T]) -> Vec<Vec<T>> {
    assert!(
        list.len() < usize::BITS as usize,
        "subset enumeration over {} elements would overflow the mask",
        list.len()
    );
    let count = 1usize << list.len();
    let mut subsets = Vec::with_capacity(count - 1);
    for mask in 1..count {
        let mut subset = Vec::new();
        for (j, &item) in list.iter().enumerate() {
            if mask & (1 << j) != 0 {
                subset.push(item);
            }
        }
        subsets.push(subset);
    }
    subsets
}
