//! # DDH-PKE
//!
//! Hybrid public-key encryption over a safe-prime group `p = 2q + 1`, built only from
//! primitives whose security reduces to the decisional Diffie-Hellman assumption:
//!
//! * a DDH pseudorandom generator ([`prg::DdhPrg`]),
//! * the Naor-Reingold PRF used as a MAC ([`mac`]),
//! * a generic encrypt-then-MAC transform ([`cca::EncryptThenMac`]),
//! * ElGamal (CPA) and hash-free Cramer-Shoup (CCA2) public-key encryption ([`pke`]).
//!
//! This is a teaching construction. It is not constant time and must not protect real data.

pub mod cca;
pub mod codec;
pub mod errors;
pub mod group;
pub mod mac;
pub mod pke;
pub mod preset;
pub mod prg;
pub mod random;

pub use errors::DDHCryptoError;
pub use group::DomainParameters;
pub use random::{RandomSource, ReaderSource, RngSource};
