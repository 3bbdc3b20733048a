//! # Randomness Source
//!
//! Every operation that needs entropy receives a [`RandomSource`] explicitly. The core only
//! ever asks for raw octets and for uniform values below a modulus.

use crate::errors::DDHCryptoError;
use crate::group::bit_length;

use num_bigint::BigUint;
use num_traits::{One, Zero};

use rand::RngCore;

use std::io::Read;

pub trait RandomSource {
    /// Fills `dest` with the next octets of the stream.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), DDHCryptoError>;

    /// Draws a value uniformly from `[0, modulus)` by rejection sampling.
    ///
    /// Reads `ceil(log256(modulus))` octets as a big-endian integer and retries until the
    /// value is below `modulus`.
    ///
    /// # Errors
    ///
    /// Returns `DDHCryptoError::InvalidParameters` for a zero modulus and propagates
    /// failures of the underlying stream.
    fn next_uniform(&mut self, modulus: &BigUint) -> Result<BigUint, DDHCryptoError> {
        if modulus.is_zero() {
            return Err(DDHCryptoError::InvalidParameters(
                "Cannot sample below a zero modulus".to_string(),
            ));
        }

        let octets = bit_length(&(modulus - BigUint::one()), 256) as usize;
        let mut buffer = vec![0u8; octets];
        loop {
            self.fill_bytes(&mut buffer)?;
            let candidate = BigUint::from_bytes_be(&buffer);
            if &candidate < modulus {
                return Ok(candidate);
            }
        }
    }
}

/// Reads randomness sequentially from a byte stream, such as `/dev/urandom` or a file of
/// pre-generated octets.
///
/// An exhausted stream is fatal for the operation in progress.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> RandomSource for ReaderSource<R> {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), DDHCryptoError> {
        self.reader
            .read_exact(dest)
            .map_err(DDHCryptoError::RandomnessExhausted)
    }
}

/// Adapts any `rand` generator, e.g. `rand::rng()` or a seeded `StdRng` in tests.
#[derive(Debug)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: RngCore> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore> RandomSource for RngSource<R> {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), DDHCryptoError> {
        self.rng.fill_bytes(dest);
        Ok(())
    }
}
