//! The Naor-Reingold pseudorandom function.
//!
//! `n + 1` PRG outputs are drawn once as the key; every evaluation afterwards costs a
//! single exponentiation.

use crate::group::DomainParameters;
use crate::prg::DdhPrg;

use num_bigint::BigUint;

/// Key set `k_0, k_1, ..., k_n` for inputs of `n` bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrfKeys {
    base: BigUint,
    factors: Vec<BigUint>,
}

impl PrfKeys {
    /// Advances `prg` exactly `bits + 1` times and keeps the outputs in order.
    pub fn derive(bits: u64, prg: &mut DdhPrg<'_>) -> Self {
        let base = prg.advance();
        let factors = (0..bits).map(|_| prg.advance()).collect();

        Self { base, factors }
    }

    /// Number of input bits the keys cover.
    pub fn input_bits(&self) -> u64 {
        self.factors.len() as u64
    }

    /// Evaluates `x^(k_0 · Π k_i) mod p`, the product running over the set bits `i - 1` of
    /// `input` (least significant first) and taken modulo `q`.
    ///
    /// Bits of `input` above the key length are ignored.
    pub fn eval(&self, input: &BigUint, params: &DomainParameters) -> BigUint {
        let mut exponent = self.base.clone();
        for (position, factor) in self.factors.iter().enumerate() {
            if input.bit(position as u64) {
                exponent = (exponent * factor) % &params.q;
            }
        }

        params.pow(&params.x, &exponent)
    }
}
