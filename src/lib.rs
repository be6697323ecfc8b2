//! Compact factorization codes for positive integers.
//!
//! Given a positive integer, [`code`] produces a short notation describing
//! how to factor it into a human-scannable expression, recursing until
//! every sub-factor is at most 16:
//!
//! * `a|b` — multiply the pieces, each of which is itself a code
//! * `:k` — the number is the k-th prime (2 is the 1st)
//! * `a^b` — every distinct prime factor is raised to the same power `b`,
//!   and `a` is the product of those primes (100 = 2²·5² encodes as `10^2`)
//! * plain digits — the number itself, once it is 16 or less
//!
//! The core is purely functional: no I/O, no shared state, and the same
//! input always produces the same code. Evaluating the pipe-joined leaves
//! of a code and multiplying them reproduces the input exactly.

pub mod combinations;
pub mod encode;
pub mod factor_sets;
pub mod primes;
pub mod simplify;

pub use combinations::combinations;
pub use encode::{code, encode_range, factorize, EncodeError};
pub use factor_sets::{choose_factors, factor_sets, median_window};
pub use primes::{
    divisors, group_factors, power_form, primality, prime_factors, prime_rank, PowerForm,
    Primality,
};
pub use simplify::simplify;
