//! # Group Module
//!
//! Arithmetic in the order-`q` subgroup of `(Z/pZ)*` for a safe prime `p = 2q + 1`.
//!
//! [`DomainParameters`] carries the group description and the operations that need it,
//! [`math`] holds the parameter-free helpers.

pub mod math;
pub mod params;

pub use math::{bit_length, extract_unbiased, mod_pow, zq_to_bits};
pub use params::DomainParameters;
