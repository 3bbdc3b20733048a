//! ElGamal hybrid encryption, secure against chosen-plaintext attacks only.
//!
//! ElGamal carries a random PRG seed encoded into the subgroup; the message itself is
//! XORed with that PRG's keystream.

use crate::codec::{base64_octets, decimal};
use crate::errors::DDHCryptoError;
use crate::group::DomainParameters;
use crate::prg::DdhPrg;
use crate::random::RandomSource;

use num_bigint::BigUint;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElGamalKeyPair {
    #[serde(with = "decimal")]
    pub generator: BigUint,
    #[serde(with = "decimal")]
    pub public_key: BigUint,
    #[serde(with = "decimal")]
    pub secret_key: BigUint,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElGamalPublicKey {
    #[serde(with = "decimal")]
    pub generator: BigUint,
    #[serde(with = "decimal")]
    pub key: BigUint,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElGamalCiphertext {
    #[serde(with = "decimal")]
    pub c1: BigUint,
    #[serde(with = "decimal")]
    pub c2: BigUint,
    #[serde(with = "base64_octets")]
    pub body: Vec<u8>,
}

impl ElGamalKeyPair {
    /// Samples a fresh subgroup generator `g` and secret `x`; the public key is `g^x`.
    pub fn generate<R: RandomSource + ?Sized>(
        params: &DomainParameters,
        rng: &mut R,
    ) -> Result<Self, DDHCryptoError> {
        let generator = params.sample_generator(rng)?;
        let secret_key = params.random_exponent(rng)?;
        let public_key = params.pow(&generator, &secret_key);

        Ok(Self {
            generator,
            public_key,
            secret_key,
        })
    }

    pub fn public_key(&self) -> ElGamalPublicKey {
        ElGamalPublicKey {
            generator: self.generator.clone(),
            key: self.public_key.clone(),
        }
    }

    /// Recovers the PRG seed from `(c1, c2)` and strips the keystream from the body.
    ///
    /// Without authentication a modified ciphertext decrypts to garbage rather than failing.
    pub fn decrypt(
        &self,
        ciphertext: &ElGamalCiphertext,
        params: &DomainParameters,
    ) -> Result<Vec<u8>, DDHCryptoError> {
        let shared = params.pow(&ciphertext.c1, &self.secret_key);
        let encoded = params.mul(&ciphertext.c2, &params.invert(&shared));
        let seed = params.decode_key(&encoded)?;

        DdhPrg::new(params, seed).apply_keystream(&ciphertext.body)
    }
}

impl ElGamalPublicKey {
    pub fn encrypt<R: RandomSource + ?Sized>(
        &self,
        message: &[u8],
        params: &DomainParameters,
        rng: &mut R,
    ) -> Result<ElGamalCiphertext, DDHCryptoError> {
        let ephemeral = params.random_exponent(rng)?;
        let c1 = params.pow(&self.generator, &ephemeral);
        let shared = params.pow(&self.key, &ephemeral);

        let seed = params.random_exponent(rng)?;
        let c2 = params.mul(&params.encode_key(&seed), &shared);
        let body = DdhPrg::new(params, seed).apply_keystream(message)?;

        Ok(ElGamalCiphertext { c1, c2, body })
    }
}
