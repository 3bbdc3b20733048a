//! # Public-Key Encryption
//!
//! - [`elgamal`]: ElGamal hybrid encryption (CPA only).
//! - [`cramer_shoup`]: hash-free Cramer-Shoup over a single group element (CCA2).
//! - [`hybrid`]: Cramer-Shoup wrapping a session key for the encrypt-then-MAC cipher.

pub mod cramer_shoup;
pub mod elgamal;
pub mod hybrid;

pub use cramer_shoup::{
    CramerShoupCiphertext, CramerShoupKeyPair, CramerShoupPublicKey, CramerShoupSecretKey,
};
pub use elgamal::{ElGamalCiphertext, ElGamalKeyPair, ElGamalPublicKey};
pub use hybrid::HybridCiphertext;
