//! Hash-free Cramer-Shoup encryption of a single group element (CCA2).
//!
//! The safe-prime structure replaces the hash: the folded ciphertext components serve
//! directly as exponents, each multiplied by the ephemeral `r`.

use crate::codec::{decimal, decimal_array};
use crate::errors::DDHCryptoError;
use crate::group::DomainParameters;
use crate::random::RandomSource;

use num_bigint::BigUint;
use num_traits::One;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CramerShoupPublicKey {
    #[serde(with = "decimal")]
    pub g1: BigUint,
    #[serde(with = "decimal")]
    pub g2: BigUint,
    /// `g1^x1 · g2^x2`
    #[serde(with = "decimal")]
    pub c: BigUint,
    /// `d_i = g1^y_{2i} · g2^y_{2i+1}`
    #[serde(with = "decimal_array")]
    pub d: [BigUint; 3],
    /// `g1^z`
    #[serde(with = "decimal")]
    pub h: BigUint,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CramerShoupSecretKey {
    #[serde(with = "decimal")]
    pub x1: BigUint,
    #[serde(with = "decimal")]
    pub x2: BigUint,
    #[serde(with = "decimal_array")]
    pub y: [BigUint; 6],
    #[serde(with = "decimal")]
    pub z: BigUint,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CramerShoupKeyPair {
    pub public: CramerShoupPublicKey,
    pub secret: CramerShoupSecretKey,
}

/// `(c1, c2, e, v)`; `v` binds the other three components to the public key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CramerShoupCiphertext {
    #[serde(with = "decimal")]
    pub c1: BigUint,
    #[serde(with = "decimal")]
    pub c2: BigUint,
    #[serde(with = "decimal")]
    pub e: BigUint,
    #[serde(with = "decimal")]
    pub v: BigUint,
}

impl CramerShoupKeyPair {
    /// Draws `x1, x2, y0..y5` from `Z/qZ`, then the generators `g1, g2`, then `z`.
    pub fn generate<R: RandomSource + ?Sized>(
        params: &DomainParameters,
        rng: &mut R,
    ) -> Result<Self, DDHCryptoError> {
        let x1 = params.random_exponent(rng)?;
        let x2 = params.random_exponent(rng)?;
        let mut y: [BigUint; 6] = Default::default();
        for slot in y.iter_mut() {
            *slot = params.random_exponent(rng)?;
        }

        let g1 = params.sample_generator(rng)?;
        let g2 = params.sample_generator(rng)?;
        let z = params.random_exponent(rng)?;

        let pair =
            |a: &BigUint, b: &BigUint| params.mul(&params.pow(&g1, a), &params.pow(&g2, b));
        let c = pair(&x1, &x2);
        let d = [0, 1, 2].map(|i| pair(&y[2 * i], &y[2 * i + 1]));
        let h = params.pow(&g1, &z);

        log::debug!("generated Cramer-Shoup key pair over a {}-bit group", params.p.bits());

        Ok(Self {
            public: CramerShoupPublicKey { g1, g2, c, d, h },
            secret: CramerShoupSecretKey { x1, x2, y, z },
        })
    }
}

impl CramerShoupPublicKey {
    /// Encrypts the group element `message`, which must lie in `[0, p)`.
    pub fn encrypt<R: RandomSource + ?Sized>(
        &self,
        params: &DomainParameters,
        message: &BigUint,
        rng: &mut R,
    ) -> Result<CramerShoupCiphertext, DDHCryptoError> {
        if message >= &params.p {
            return Err(DDHCryptoError::InvalidParameters(
                "Cramer-Shoup plaintext must be below p".to_string(),
            ));
        }

        let r = params.random_exponent(rng)?;
        let c1 = params.pow(&self.g1, &r);
        let c2 = params.pow(&self.g2, &r);
        let e = params.mul(&params.pow(&self.h, &r), message);

        let [c1q, c2q, eq] = [&c1, &c2, &e].map(|component| params.fold(component) * &r);
        let v = [
            params.pow(&self.c, &r),
            params.pow(&self.d[0], &c1q),
            params.pow(&self.d[1], &c2q),
            params.pow(&self.d[2], &eq),
        ]
        .iter()
        .fold(BigUint::from(1u32), |acc, factor| params.mul(&acc, factor));

        Ok(CramerShoupCiphertext { c1, c2, e, v })
    }
}

impl CramerShoupSecretKey {
    /// Checks the verification tag and recovers the plaintext element.
    ///
    /// # Errors
    ///
    /// Returns `DDHCryptoError::AuthenticationFailure` if the tag does not verify, a
    /// component lies outside `[0, p)`, or `c1`/`c2` is not in the order-`q` subgroup.
    pub fn decrypt(
        &self,
        params: &DomainParameters,
        ciphertext: &CramerShoupCiphertext,
    ) -> Result<BigUint, DDHCryptoError> {
        let CramerShoupCiphertext { c1, c2, e, v } = ciphertext;
        if [c1, c2, e, v].iter().any(|component| *component >= &params.p) {
            return Err(DDHCryptoError::AuthenticationFailure);
        }
        // c1 = c2 = 0 would verify v = 0 under any key
        if [c1, c2].iter().any(|component| !params.pow(component, &params.q).is_one()) {
            log::debug!("Cramer-Shoup ciphertext rejected: component outside the subgroup");
            return Err(DDHCryptoError::AuthenticationFailure);
        }

        let [c1q, c2q, eq] = [c1, c2, e].map(|component| params.fold(component));
        let y = &self.y;
        let exponent1 = &self.x1 + &y[0] * &c1q + &y[2] * &c2q + &y[4] * &eq;
        let exponent2 = &self.x2 + &y[1] * &c1q + &y[3] * &c2q + &y[5] * &eq;

        let expected = params.mul(&params.pow(c1, &exponent1), &params.pow(c2, &exponent2));
        if &expected != v {
            log::debug!("Cramer-Shoup ciphertext rejected: verification tag mismatch");
            return Err(DDHCryptoError::AuthenticationFailure);
        }

        let mask = params.pow(c1, &self.z);
        Ok(params.mul(e, &params.invert(&mask)))
    }
}
