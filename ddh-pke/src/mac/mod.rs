//! # MAC Module
//!
//! A CBC-style MAC chained through the Naor-Reingold PRF instead of a block cipher.

pub mod prf;

use crate::errors::DDHCryptoError;
use crate::group::DomainParameters;
use crate::prg::DdhPrg;

pub use prf::PrfKeys;

use num_bigint::BigUint;

/// Signature shared by MAC constructions usable with [`crate::cca::EncryptThenMac`]:
/// `(message, tag bits, key, parameters) -> tag`.
pub type MacFn = fn(&[u8], u64, &BigUint, &DomainParameters) -> Result<BigUint, DDHCryptoError>;

/// Computes a `bits`-bit tag over `message` under `key`.
///
/// The chaining value starts from the PRF applied to the *unpadded* octet length, so a
/// message and its zero-extension get unrelated tags. The message is then padded with
/// `bits/8 - len mod bits/8` zero octets (a whole block when it is already aligned) and
/// each big-endian block is XORed into the chaining value before the next PRF call. Every
/// PRF output is stretched back to `bits` bits through a fresh PRG.
///
/// # Errors
///
/// Returns `DDHCryptoError::InvalidParameters` unless `bits` is a positive multiple of 8.
pub fn naor_reingold_mac(
    message: &[u8],
    bits: u64,
    key: &BigUint,
    params: &DomainParameters,
) -> Result<BigUint, DDHCryptoError> {
    if bits == 0 || bits % 8 != 0 {
        return Err(DDHCryptoError::InvalidParameters(format!(
            "MAC size must be a positive multiple of 8 bits, got {}",
            bits
        )));
    }
    let block_len = (bits / 8) as usize;

    let keys = PrfKeys::derive(bits, &mut DdhPrg::new(params, key.clone()));

    let length_seed = keys.eval(&BigUint::from(message.len()), params);
    let mut chain = DdhPrg::new(params, length_seed).next_bits(bits)?;

    let mut padded = message.to_vec();
    padded.resize(message.len() + block_len - message.len() % block_len, 0);

    for block in padded.chunks_exact(block_len) {
        let input = BigUint::from_bytes_be(block) ^ &chain;
        chain = DdhPrg::new(params, keys.eval(&input, params)).next_bits(bits)?;
    }

    Ok(chain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::groups::SAFE_PRIME_128;

    fn big(v: u64) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn test_mac_regression() -> Result<(), DDHCryptoError> {
        let tag = naor_reingold_mac(b"attack at dawn", 32, &big(777), &SAFE_PRIME_128)?;
        assert_eq!(tag, big(4078793481));
        Ok(())
    }

    #[test]
    fn test_mac_of_empty_message() -> Result<(), DDHCryptoError> {
        let tag = naor_reingold_mac(b"", 32, &big(777), &SAFE_PRIME_128)?;
        assert_eq!(tag, big(3503651485));
        Ok(())
    }

    #[test]
    fn test_mac_binds_unpadded_length() -> Result<(), DDHCryptoError> {
        // both pad to the same two blocks
        let short = naor_reingold_mac(b"abcd", 32, &big(777), &SAFE_PRIME_128)?;
        let extended = naor_reingold_mac(b"abcd\0", 32, &big(777), &SAFE_PRIME_128)?;

        assert_eq!(short, big(4135696717));
        assert_eq!(extended, big(3502318289));
        Ok(())
    }

    #[test]
    fn test_mac_depends_on_key() -> Result<(), DDHCryptoError> {
        let a = naor_reingold_mac(b"attack at dawn", 32, &big(777), &SAFE_PRIME_128)?;
        let b = naor_reingold_mac(b"attack at dawn", 32, &big(778), &SAFE_PRIME_128)?;
        assert_ne!(a, b);
        Ok(())
    }

    #[test]
    fn test_tag_fits_requested_size() -> Result<(), DDHCryptoError> {
        for bits in [8u64, 16, 64, 128] {
            let tag = naor_reingold_mac(b"sized", bits, &big(5), &SAFE_PRIME_128)?;
            assert!(tag.bits() <= bits);
        }
        Ok(())
    }

    #[test]
    fn test_rejects_unaligned_sizes() {
        assert!(naor_reingold_mac(b"x", 0, &big(1), &SAFE_PRIME_128).is_err());
        assert!(naor_reingold_mac(b"x", 12, &big(1), &SAFE_PRIME_128).is_err());
    }
}
