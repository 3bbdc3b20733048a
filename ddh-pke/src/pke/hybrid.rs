//! Cramer-Shoup key encapsulation combined with the encrypt-then-MAC transform.

use crate::cca::{EncryptThenMac, SymmetricCiphertext};
use crate::errors::DDHCryptoError;
use crate::group::DomainParameters;
use crate::pke::cramer_shoup::{CramerShoupCiphertext, CramerShoupPublicKey, CramerShoupSecretKey};
use crate::random::RandomSource;

use serde::{Deserialize, Serialize};

/// Encapsulated session key followed by the authenticated body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HybridCiphertext {
    pub key: CramerShoupCiphertext,
    pub body: SymmetricCiphertext,
}

/// Encrypts `message` for the holder of `public`.
///
/// A session key `k` is drawn from `Z/qZ`, `encode_key(k)` is sealed with Cramer-Shoup and
/// the message is sealed under `k` with `mac_bits`-bit tags.
pub fn encrypt<R: RandomSource + ?Sized>(
    params: &DomainParameters,
    public: &CramerShoupPublicKey,
    message: &[u8],
    mac_bits: u64,
    rng: &mut R,
) -> Result<HybridCiphertext, DDHCryptoError> {
    let cipher = EncryptThenMac::with_naor_reingold(mac_bits)?;

    let session_key = params.random_exponent(rng)?;
    let key = public.encrypt(params, &params.encode_key(&session_key), rng)?;
    let body = cipher.encrypt(message, &session_key, params, rng)?;

    log::debug!("hybrid encryption of {} octets done", message.len());

    Ok(HybridCiphertext { key, body })
}

/// Decrypts a [`HybridCiphertext`].
///
/// # Errors
///
/// Any failure to open either layer is reported as `DDHCryptoError::AuthenticationFailure`,
/// so callers cannot tell which check rejected the ciphertext.
pub fn decrypt(
    params: &DomainParameters,
    secret: &CramerShoupSecretKey,
    ciphertext: &HybridCiphertext,
    mac_bits: u64,
) -> Result<Vec<u8>, DDHCryptoError> {
    let cipher = EncryptThenMac::with_naor_reingold(mac_bits)?;

    let encoded = secret.decrypt(params, &ciphertext.key)?;
    let session_key = params
        .decode_key(&encoded)
        .map_err(|_| DDHCryptoError::AuthenticationFailure)?;

    cipher.decrypt(&ciphertext.body, &session_key, params)
}
