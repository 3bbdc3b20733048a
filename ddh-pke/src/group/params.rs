use crate::codec::decimal;
use crate::errors::DDHCryptoError;
use crate::group::math::mod_pow;
use crate::random::RandomSource;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Description of a safe-prime group: `p = 2q + 1` together with two generators `x`, `y`
/// of the subgroup of order `q`.
///
/// Loaded once and shared read-only by every operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainParameters {
    #[serde(with = "decimal")]
    pub p: BigUint,
    #[serde(with = "decimal")]
    pub q: BigUint,
    /// Generator used by the PRF and for the PRG state update.
    #[serde(with = "decimal")]
    pub x: BigUint,
    /// Generator used for the PRG output.
    #[serde(with = "decimal")]
    pub y: BigUint,
}

impl DomainParameters {
    /// Builds parameters and validates them with [`DomainParameters::check`].
    pub fn try_with(
        p: BigUint,
        q: BigUint,
        x: BigUint,
        y: BigUint,
    ) -> Result<Self, DDHCryptoError> {
        let params = Self { p, q, x, y };
        params.check()?;

        Ok(params)
    }

    /// Validates the safe-prime structure.
    ///
    /// Checks `p == 2q + 1`, that `q` is odd (so `p ≡ 3 mod 4` and square roots are a
    /// single exponentiation) and that `x^q ≡ y^q ≡ 1 (mod p)` with `x, y ≠ 1`.
    /// Primality is not tested.
    pub fn check(&self) -> Result<(), DDHCryptoError> {
        if self.p != (&self.q << 1u32) + 1u32 {
            return Err(DDHCryptoError::InvalidParameters(
                "p must equal 2q + 1".to_string(),
            ));
        }

        if self.q.is_even() {
            return Err(DDHCryptoError::InvalidParameters(
                "q must be an odd prime".to_string(),
            ));
        }

        for (name, generator) in [("x", &self.x), ("y", &self.y)] {
            if generator.is_one() || !mod_pow(generator, &self.q, &self.p)?.is_one() {
                return Err(DDHCryptoError::InvalidParameters(format!(
                    "{} does not generate the subgroup of order q",
                    name
                )));
            }
        }

        Ok(())
    }

    /// Computes `base^exponent mod p`.
    pub fn pow(&self, base: &BigUint, exponent: &BigUint) -> BigUint {
        base.modpow(exponent, &self.p)
    }

    /// Computes `(a * b) mod p`.
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.p
    }

    /// Computes `a^-1 mod p` as `a^(p-2)` (Fermat). Zero maps to zero.
    pub fn invert(&self, a: &BigUint) -> BigUint {
        self.pow(a, &(&self.p - 2u32))
    }

    /// Quadratic-residue fold: `x` if `x < q`, otherwise `p - x`.
    ///
    /// Subgroup elements map injectively into `Z/qZ`-sized exponents. `x` is reduced
    /// modulo `p` first.
    ///
    /// # Example
    ///
    /// ```
    /// # use ddh_pke::preset::groups::TOY_23;
    /// # use num_bigint::BigUint;
    /// assert_eq!(TOY_23.fold(&BigUint::from(10u32)), BigUint::from(10u32));
    /// assert_eq!(TOY_23.fold(&BigUint::from(11u32)), BigUint::from(12u32));
    /// assert_eq!(TOY_23.fold(&BigUint::from(18u32)), BigUint::from(5u32));
    /// ```
    pub fn fold(&self, x: &BigUint) -> BigUint {
        let x = x % &self.p;
        if x < self.q { x } else { &self.p - x }
    }

    /// Like [`DomainParameters::fold`] but leaves `q` itself in place, so the subgroup
    /// maps exactly onto `[1, q]`.
    ///
    /// This is the fold used by the PRG and by [`DomainParameters::decode_key`].
    pub fn fold_inclusive(&self, x: &BigUint) -> BigUint {
        let x = x % &self.p;
        if x <= self.q { x } else { &self.p - x }
    }

    /// Embeds `k ∈ Z/qZ` into the subgroup as `(k + 1)^2 mod p`.
    pub fn encode_key(&self, k: &BigUint) -> BigUint {
        self.pow(&(k + 1u32), &BigUint::from(2u32))
    }

    /// Inverts [`DomainParameters::encode_key`]: square root `e^((p+1)/4)`, inclusive fold,
    /// minus one.
    ///
    /// # Errors
    ///
    /// Returns `DDHCryptoError::EncodingFailure` if `encoded` is zero.
    pub fn decode_key(&self, encoded: &BigUint) -> Result<BigUint, DDHCryptoError> {
        let exponent = (&self.p + 1u32) >> 2u32;
        let root = self.fold_inclusive(&self.pow(encoded, &exponent));
        if root.is_zero() {
            return Err(DDHCryptoError::EncodingFailure(
                "Encoded key is not a non-zero square".to_string(),
            ));
        }

        Ok(root - 1u32)
    }

    /// Draws a uniform exponent in `Z/qZ`.
    pub fn random_exponent<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<BigUint, DDHCryptoError> {
        rng.next_uniform(&self.q)
    }

    /// Samples a generator of the order-`q` subgroup by rejection: uniform in `[0, p)`
    /// until `g^q ≡ 1` and `g ≠ 1`.
    pub fn sample_generator<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<BigUint, DDHCryptoError> {
        loop {
            let candidate = rng.next_uniform(&self.p)?;
            if !candidate.is_one() && self.pow(&candidate, &self.q).is_one() {
                return Ok(candidate);
            }
        }
    }
}

/// Parses the parameter file format: four decimal integers `p`, `q`, `x`, `y`, one per
/// line. The result is checked.
impl FromStr for DomainParameters {
    type Err = DDHCryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split_whitespace()
            .map(|token| {
                token.parse::<BigUint>().map_err(|e| {
                    DDHCryptoError::ParseError(format!(
                        "{:?} is not a decimal integer: {}",
                        token, e
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let [p, q, x, y]: [BigUint; 4] = values.try_into().map_err(|values: Vec<BigUint>| {
            DDHCryptoError::ParseError(format!(
                "Expected 4 integers (p, q, x, y), found {}",
                values.len()
            ))
        })?;

        Self::try_with(p, q, x, y)
    }
}

impl fmt::Display for DomainParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.p)?;
        writeln!(f, "{}", self.q)?;
        writeln!(f, "{}", self.x)?;
        writeln!(f, "{}", self.y)
    }
}
