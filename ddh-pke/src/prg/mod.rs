//! # DDH Pseudorandom Generator
//!
//! The generator keeps a secret exponent `s`. Each step outputs `y^s` and replaces `s` by
//! `x^s`, both folded into `[1, q]`. Distinguishing the output from random breaks DDH in
//! the subgroup generated by `x` and `y`.

use crate::errors::DDHCryptoError;
use crate::group::{DomainParameters, zq_to_bits};
use crate::random::RandomSource;

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Smallest `q` bit length for which a PRG output can carry a whole octet.
const MIN_KEYSTREAM_Q_BITS: u64 = 9;

/// PRG state owned by a single encryption or decryption call.
#[derive(Debug, Clone)]
pub struct DdhPrg<'a> {
    params: &'a DomainParameters,
    seed: BigUint,
    state: BigUint,
    current: BigUint,
}

impl<'a> DdhPrg<'a> {
    pub fn new(params: &'a DomainParameters, seed: BigUint) -> Self {
        Self {
            params,
            state: seed.clone(),
            current: seed.clone(),
            seed,
        }
    }

    /// Draws a fresh seed uniformly from `Z/qZ`.
    pub fn random_seed<R: RandomSource + ?Sized>(
        params: &DomainParameters,
        rng: &mut R,
    ) -> Result<BigUint, DDHCryptoError> {
        params.random_exponent(rng)
    }

    /// The most recent output (the seed before the first advance).
    pub fn current(&self) -> &BigUint {
        &self.current
    }

    /// Steps the generator and returns the new output element.
    pub fn advance(&mut self) -> BigUint {
        let params = self.params;
        let next_state = params.fold_inclusive(&params.pow(&params.x, &self.state));
        let output = params.fold_inclusive(&params.pow(&params.y, &self.state));

        self.state = next_state;
        self.current = output;
        self.current.clone()
    }

    /// Returns exactly `n` pseudorandom bits as an integer below `2^n`.
    ///
    /// Unbiased bits of successive outputs are appended below the bits collected so far
    /// until at least `n` bits exist; the low `n` bits are kept.
    pub fn next_bits(&mut self, n: u64) -> Result<BigUint, DDHCryptoError> {
        let mut stream = BigUint::zero();
        while stream.bits() < n {
            let chunk = self.next_chunk()?;
            stream = (stream << chunk.bits()) + chunk;
        }

        let mask = (BigUint::one() << n) - 1u32;
        Ok(stream & mask)
    }

    /// Produces `len` keystream octets.
    ///
    /// Each output contributes its low octets for as long as at least eight unbiased bits
    /// remain; leftover high bits are discarded.
    ///
    /// # Errors
    ///
    /// Returns `DDHCryptoError::InvalidParameters` if `q` is too small for any output to
    /// carry a full octet.
    pub fn keystream(&mut self, len: usize) -> Result<Vec<u8>, DDHCryptoError> {
        if len > 0 && self.params.q.bits() < MIN_KEYSTREAM_Q_BITS {
            return Err(DDHCryptoError::InvalidParameters(format!(
                "q must have at least {} bits to produce a keystream",
                MIN_KEYSTREAM_Q_BITS
            )));
        }

        let mut stream = Vec::with_capacity(len);
        while stream.len() < len {
            let mut chunk = self.next_chunk()?;
            while chunk.bits() >= 8 {
                let low = chunk.iter_u32_digits().next().unwrap_or(0);
                stream.push((low & 0xff) as u8);
                chunk >>= 8u32;
            }
        }
        stream.truncate(len);

        Ok(stream)
    }

    /// XORs `data` with the keystream. Encryption and decryption are the same operation.
    pub fn apply_keystream(&mut self, data: &[u8]) -> Result<Vec<u8>, DDHCryptoError> {
        log::trace!("applying {} keystream octets", data.len());

        let stream = self.keystream(data.len())?;
        Ok(data.iter().zip(stream).map(|(byte, key)| byte ^ key).collect())
    }

    /// Restores the original seed so the same output sequence can be replayed.
    pub fn reset(&mut self) {
        self.state = self.seed.clone();
        self.current = self.seed.clone();
    }

    fn next_chunk(&mut self) -> Result<BigUint, DDHCryptoError> {
        let output = self.advance();
        zq_to_bits(&output, &self.params.q).ok_or_else(|| {
            DDHCryptoError::EncodingFailure("PRG output admits no unbiased bits".to_string())
        })
    }
}
