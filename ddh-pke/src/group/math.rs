//! Big-integer helpers shared by the group, the PRG and the MAC.

use crate::errors::DDHCryptoError;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

/// Computes `base^exponent mod modulus` by square-and-multiply.
///
/// The exponent is not reduced; callers that work in `Z/qZ` keep their exponents there.
///
/// # Errors
///
/// Returns `DDHCryptoError::InvalidParameters` if `modulus` is zero.
///
/// # Example
///
/// ```
/// # use ddh_pke::group::mod_pow;
/// # use num_bigint::BigUint;
/// let r = mod_pow(&BigUint::from(4u32), &BigUint::from(13u32), &BigUint::from(497u32)).unwrap();
/// assert_eq!(r, BigUint::from(445u32));
/// ```
pub fn mod_pow(
    base: &BigUint,
    exponent: &BigUint,
    modulus: &BigUint,
) -> Result<BigUint, DDHCryptoError> {
    if modulus.is_zero() {
        return Err(DDHCryptoError::InvalidParameters(
            "Modulus must be non-zero".to_string(),
        ));
    }

    Ok(base.modpow(exponent, modulus))
}

/// Number of `base`-ary digits of `x`, with `bit_length(0, base) == 0`.
///
/// `base` must be at least 2.
///
/// # Example
///
/// ```
/// # use ddh_pke::group::bit_length;
/// # use num_bigint::BigUint;
/// assert_eq!(bit_length(&BigUint::from(255u32), 2), 8);
/// assert_eq!(bit_length(&BigUint::from(256u32), 256), 2);
/// assert_eq!(bit_length(&BigUint::from(999u32), 10), 3);
/// assert_eq!(bit_length(&BigUint::from(0u32), 16), 0);
/// ```
pub fn bit_length(x: &BigUint, base: u32) -> u64 {
    debug_assert!(base >= 2, "bit_length needs a base of at least 2");

    if base.is_power_of_two() {
        let digit_bits = base.trailing_zeros() as u64;
        return x.bits().div_ceil(digit_bits);
    }

    let base = BigUint::from(base);
    let mut rest = x.clone();
    let mut digits = 0;
    while !rest.is_zero() {
        rest /= &base;
        digits += 1;
    }
    digits
}

/// Extracts an unbiased value from `x`, which is uniform in `[0, source_bound)`.
///
/// The low bits of `source_bound` are consumed one at a time. Whenever the current bit
/// is set, the dyadic interval of size `width` is removed from `x`; `width` doubles on
/// every step until `x` falls below it. The result is then uniform below `width`.
///
/// Returns `None` when the range collapses to width 1, which happens only for `x == 0`
/// with the default starting width.
pub fn extract_unbiased(x: &BigUint, width: &BigUint, source_bound: &BigUint) -> Option<BigUint> {
    let mut x = x.clone();
    let mut width = width.clone();
    let mut bound = source_bound.clone();

    while x >= width {
        if bound.is_odd() {
            x -= &width;
        }
        width <<= 1u32;
        bound >>= 1u32;
    }

    if width.is_one() { None } else { Some(x) }
}

/// Maps an element of `Z/qZ` to a uniformly distributed bitstring.
pub fn zq_to_bits(x: &BigUint, q: &BigUint) -> Option<BigUint> {
    extract_unbiased(x, &BigUint::one(), q)
}
