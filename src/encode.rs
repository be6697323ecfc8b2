//! The notation encoder.
//!
//! `code` is the single public contract of the core: a pure, deterministic
//! map from a positive integer to its factorization code. Everything else
//! here is the domain error type, the grouped-factorization display, and a
//! parallel batch entry point for drivers.

use std::fmt;

use rayon::prelude::*;

use crate::factor_sets::choose_factors;
use crate::primes::{group_factors, power_form, primality, prime_factors, PowerForm, Primality};
use crate::simplify::simplify;

/// Out-of-domain encoder input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// `code` and `encode_range` are defined for integers >= 1.
    OutOfDomain { value: u64 },
    /// `factorize` needs an integer >= 2.
    NotFactorable { value: u64 },
    /// Range iteration needs a nonzero step.
    ZeroStep,
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::OutOfDomain { value } => write!(
                f,
                "{} is out of domain: factorization codes are defined for integers >= 1",
                value
            ),
            EncodeError::NotFactorable { value } => write!(
                f,
                "{} cannot be factorized: expected an integer >= 2",
                value
            ),
            EncodeError::ZeroStep => write!(f, "range step must be nonzero"),
        }
    }
}

impl std::error::Error for EncodeError {}

/// Encode `n` as a factorization code.
///
/// Base cases first: n <= 16 prints as itself, the k-th prime prints as
/// `:k`, and a perfect power prints as `base^exponent`. Any other
/// composite is split into the chosen factor set (falling back to the flat
/// prime factorization when no set survives selection), simplified once,
/// and each factor encoded recursively, joined with `|`.
///
/// Recursion terminates because every sub-factor is a proper divisor
/// greater than 1, so depth is at most logarithmic in `n`.
pub fn code(n: u64) -> Result<String, EncodeError> {
    if n < 1 {
        return Err(EncodeError::OutOfDomain { value: n });
    }
    Ok(encode(n))
}

fn encode(n: u64) -> String {
    if n <= 16 {
        return n.to_string();
    }
    if let Primality::Prime { rank } = primality(n) {
        return format!(":{}", rank);
    }
    if let PowerForm::Power { base, exponent } = power_form(n) {
        return format!("{}^{}", base, exponent);
    }
    let chosen = choose_factors(n).unwrap_or_else(|| prime_factors(n));
    let factors = simplify(&chosen);
    let parts: Vec<String> = factors.iter().map(|&f| encode(f)).collect();
    parts.join("|")
}

/// Grouped prime factorization display: `60 -> "2^2*3*5"`.
///
/// Primes appear in first-occurrence order with `^multiplicity` suffixes
/// for repeated factors. Rejects 0 and 1, which have no prime
/// factorization to display.
pub fn factorize(n: u64) -> Result<String, EncodeError> {
    if n < 2 {
        return Err(EncodeError::NotFactorable { value: n });
    }
    let parts: Vec<String> = group_factors(&prime_factors(n))
        .iter()
        .map(|&(p, e)| {
            if e == 1 {
                p.to_string()
            } else {
                format!("{}^{}", p, e)
            }
        })
        .collect();
    Ok(parts.join("*"))
}

/// Encode an inclusive range in parallel.
///
/// Each `code` call is independent and side-effect-free, so the batch fans
/// out across rayon workers with no coordination; results come back in
/// input order. The whole range is validated up front — `min` below 1 or a
/// zero step fails before any encoding starts.
pub fn encode_range(min: u64, max: u64, step: u64) -> Result<Vec<(u64, String)>, EncodeError> {
    if step == 0 {
        return Err(EncodeError::ZeroStep);
    }
    if min < 1 {
        return Err(EncodeError::OutOfDomain { value: min });
    }
    let values: Vec<u64> = (min..=max).step_by(step as usize).collect();
    Ok(values.par_iter().map(|&n| (n, encode(n))).collect())
}
