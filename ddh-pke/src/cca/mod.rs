//! # Generic CCA2 Transform
//!
//! Encrypt-then-MAC over the DDH PRG: a CPA-secure stream cipher whose ciphertext is
//! authenticated before anything is decrypted.

use crate::codec::{base64_octets, decimal};
use crate::errors::DDHCryptoError;
use crate::group::DomainParameters;
use crate::mac::{MacFn, PrfKeys, naor_reingold_mac};
use crate::prg::DdhPrg;
use crate::random::RandomSource;

use num_bigint::BigUint;
use num_traits::One;

use serde::{Deserialize, Serialize};

/// `(nonce, body, tag)` produced by [`EncryptThenMac::encrypt`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymmetricCiphertext {
    #[serde(with = "decimal")]
    pub nonce: BigUint,
    #[serde(with = "base64_octets")]
    pub body: Vec<u8>,
    #[serde(with = "decimal")]
    pub tag: BigUint,
}

/// The encrypt-then-MAC combinator, parameterized by the tag size and the MAC.
#[derive(Debug, Clone, Copy)]
pub struct EncryptThenMac {
    mac_bits: u64,
    mac: MacFn,
}

impl EncryptThenMac {
    /// Creates the transform for `mac_bits`-bit nonces and tags.
    ///
    /// `mac_bits` must be a positive multiple of 8.
    pub fn try_with(mac_bits: u64, mac: MacFn) -> Result<Self, DDHCryptoError> {
        if mac_bits == 0 || mac_bits % 8 != 0 {
            return Err(DDHCryptoError::InvalidParameters(format!(
                "MAC size must be a positive multiple of 8 bits, got {}",
                mac_bits
            )));
        }

        Ok(Self { mac_bits, mac })
    }

    /// The transform with the Naor-Reingold MAC.
    pub fn with_naor_reingold(mac_bits: u64) -> Result<Self, DDHCryptoError> {
        Self::try_with(mac_bits, naor_reingold_mac)
    }

    pub fn mac_bits(&self) -> u64 {
        self.mac_bits
    }

    /// Takes the next output of `prg` as a symmetric key.
    pub fn generate_key(prg: &mut DdhPrg<'_>) -> BigUint {
        prg.advance()
    }

    /// Encrypts `message` under `key`.
    ///
    /// From the PRG seeded with `key`: the first `mac_bits + 1` outputs key the PRF that
    /// turns a random nonce into the body keystream seed, and the output after those is the
    /// MAC key. The MAC covers the encrypted body.
    pub fn encrypt<R: RandomSource + ?Sized>(
        &self,
        message: &[u8],
        key: &BigUint,
        params: &DomainParameters,
        rng: &mut R,
    ) -> Result<SymmetricCiphertext, DDHCryptoError> {
        let mut prg = DdhPrg::new(params, key.clone());
        let nonce = rng.next_uniform(&(BigUint::one() << self.mac_bits))?;

        let body = self
            .body_generator(&mut prg, &nonce, params)
            .apply_keystream(message)?;
        let tag = (self.mac)(&body, self.mac_bits, &prg.advance(), params)?;

        log::debug!(
            "encrypted {} octets with a {}-bit tag",
            message.len(),
            self.mac_bits
        );

        Ok(SymmetricCiphertext { nonce, body, tag })
    }

    /// Verifies the tag and, only if it matches, decrypts the body.
    ///
    /// # Errors
    ///
    /// Returns `DDHCryptoError::AuthenticationFailure` on a tag mismatch; no plaintext is
    /// produced in that case.
    pub fn decrypt(
        &self,
        ciphertext: &SymmetricCiphertext,
        key: &BigUint,
        params: &DomainParameters,
    ) -> Result<Vec<u8>, DDHCryptoError> {
        let mut prg = DdhPrg::new(params, key.clone());
        let mut body_prg = self.body_generator(&mut prg, &ciphertext.nonce, params);

        let expected = (self.mac)(&ciphertext.body, self.mac_bits, &prg.advance(), params)?;
        if expected != ciphertext.tag {
            log::debug!("symmetric ciphertext rejected: tag mismatch");
            return Err(DDHCryptoError::AuthenticationFailure);
        }

        body_prg.apply_keystream(&ciphertext.body)
    }

    fn body_generator<'a>(
        &self,
        prg: &mut DdhPrg<'a>,
        nonce: &BigUint,
        params: &'a DomainParameters,
    ) -> DdhPrg<'a> {
        let keys = PrfKeys::derive(self.mac_bits, prg);
        DdhPrg::new(params, keys.eval(nonce, params))
    }
}
