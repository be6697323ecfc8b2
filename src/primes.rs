//! Trial-division number theory: divisor scans, prime factorization with
//! first-occurrence grouping, primality with prime ranking, and
//! perfect-power detection.

/// Outcome of a primality check.
///
/// A prime carries its 1-based rank among the primes (2 is rank 1, 3 is
/// rank 2, ...), which the notation layer prints as `:rank`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primality {
    Composite,
    Prime { rank: usize },
}

/// Outcome of a perfect-power check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerForm {
    NotPower,
    /// `base^exponent`, where `base` is the product of the distinct prime
    /// factors and `exponent` their shared multiplicity (always > 1).
    Power { base: u64, exponent: u32 },
}

/// All divisors of `n` in ascending order, found by a full trial scan.
///
/// Deliberately O(n): the scan order fixes the divisor ordering that the
/// combination search downstream depends on.
pub fn divisors(n: u64) -> Vec<u64> {
    (1..=n).filter(|i| n % i == 0).collect()
}

/// Prime factorization of `n` as a flat list with repetition, in
/// non-decreasing order. `n <= 1` yields an empty list.
pub fn prime_factors(n: u64) -> Vec<u64> {
    let mut m = n;
    let mut i = 2u64;
    let mut factors = Vec::new();
    while (i as u128) * (i as u128) <= m as u128 {
        if m % i != 0 {
            i += 1;
        } else {
            m /= i;
            factors.push(i);
        }
    }
    if m > 1 {
        factors.push(m);
    }
    factors
}

/// Group a flat factor list into (prime, multiplicity) pairs, ordered by
/// first occurrence. A single pass; the list stays short, so the linear
/// lookup beats a map.
pub fn group_factors(factors: &[u64]) -> Vec<(u64, u32)> {
    let mut grouped: Vec<(u64, u32)> = Vec::new();
    for &p in factors {
        match grouped.iter_mut().find(|(q, _)| *q == p) {
            Some((_, count)) => *count += 1,
            None => grouped.push((p, 1)),
        }
    }
    grouped
}

/// Trial-division primality check up to the square root. Primes come back
/// tagged with their rank.
///
/// Callers are expected to pass n >= 2: inputs below 2 have no candidate
/// divisor to test and come back as `Prime { rank: 1 }`. The encoder never
/// reaches this function for n <= 16.
pub fn primality(n: u64) -> Primality {
    let mut f = 2u64;
    while (f as u128) * (f as u128) <= n as u128 {
        if n % f == 0 {
            return Primality::Composite;
        }
        f += 1;
    }
    Primality::Prime {
        rank: prime_rank(n),
    }
}

/// 1-based rank of `num` among the primes, via a sieve of Eratosthenes
/// over [2, num).
///
/// Counts the primes strictly below `num` and adds one, so a prime input
/// maps to its ordinal: `prime_rank(2) == 1`, `prime_rank(3) == 2`,
/// `prime_rank(17) == 7`. The `:k` notation depends on exactly this
/// convention.
pub fn prime_rank(num: u64) -> usize {
    let limit = num as usize;
    let mut composite = vec![false; limit.max(2)];
    let mut below = 0usize;
    for i in 2..limit {
        if !composite[i] {
            below += 1;
            let mut j = i * i;
            while j < limit {
                composite[j] = true;
                j += i;
            }
        }
    }
    below + 1
}

/// Detect `n = base^exponent` where every distinct prime factor shares the
/// same multiplicity and that multiplicity is not 1.
///
/// The reported base is the product of the distinct primes, so
/// 36 = 2²·3² reports `Power { base: 6, exponent: 2 }`. A bare product of
/// distinct primes (shared exponent 1) is not a power.
pub fn power_form(n: u64) -> PowerForm {
    let grouped = group_factors(&prime_factors(n));
    let exponent = match grouped.first() {
        Some(&(_, e)) => e,
        None => return PowerForm::NotPower,
    };
    if exponent == 1 || grouped.iter().any(|&(_, e)| e != exponent) {
        return PowerForm::NotPower;
    }
    let base = grouped.iter().map(|&(p, _)| p).product();
    PowerForm::Power { base, exponent }
}
