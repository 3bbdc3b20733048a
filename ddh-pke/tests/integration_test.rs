use ddh_pke::errors::DDHCryptoError;
use ddh_pke::pke::cramer_shoup::CramerShoupKeyPair;
use ddh_pke::pke::elgamal::ElGamalKeyPair;
use ddh_pke::pke::hybrid::{self, HybridCiphertext};
use ddh_pke::preset::groups::{OAKLEY_768, SAFE_PRIME_128};
use ddh_pke::random::RngSource;
use ddh_pke::DomainParameters;

#[test]
fn happy_flow() -> Result<(), DDHCryptoError> {
    let params = &*SAFE_PRIME_128;
    let mut rng = RngSource::new(rand::rng());

    let keypair = CramerShoupKeyPair::generate(params, &mut rng)?;

    let original_data = "Heh safasdkjfhkjas fha sdf asda";

    let ciphertext = hybrid::encrypt(
        params,
        &keypair.public,
        original_data.as_bytes(),
        128,
        &mut rng,
    )?;

    let decoded_data = hybrid::decrypt(params, &keypair.secret, &ciphertext, 128)?;

    assert_eq!(original_data.as_bytes(), decoded_data.as_slice());

    Ok(())
}

#[test]
fn files_roundtrip() -> Result<(), DDHCryptoError> {
    // everything a recipient receives survives its text form
    let params: DomainParameters = OAKLEY_768.to_string().parse()?;
    let mut rng = RngSource::new(rand::rng());

    let keypair = CramerShoupKeyPair::generate(&params, &mut rng)?;
    let public_json = serde_json::to_string_pretty(&keypair.public)?;
    let secret_json = serde_json::to_string_pretty(&keypair.secret)?;

    let ciphertext = hybrid::encrypt(
        &params,
        &serde_json::from_str(&public_json)?,
        b"stored on disk",
        64,
        &mut rng,
    )?;
    let ciphertext_json = serde_json::to_string(&ciphertext)?;

    let restored: HybridCiphertext = serde_json::from_str(&ciphertext_json)?;
    let decoded = hybrid::decrypt(&params, &serde_json::from_str(&secret_json)?, &restored, 64)?;
    assert_eq!(decoded, b"stored on disk");

    Ok(())
}

#[test]
fn elgamal_happy_flow() -> Result<(), DDHCryptoError> {
    let params = &*OAKLEY_768;
    let mut rng = RngSource::new(rand::rng());

    let keypair = ElGamalKeyPair::generate(params, &mut rng)?;
    let message = vec![0u8; 300];

    let ciphertext = keypair.public_key().encrypt(&message, params, &mut rng)?;
    assert_ne!(ciphertext.body, message);
    assert_eq!(keypair.decrypt(&ciphertext, params)?, message);

    Ok(())
}

#[test]
fn corrupted_ciphertext_is_reported() -> Result<(), DDHCryptoError> {
    let params = &*SAFE_PRIME_128;
    let mut rng = RngSource::new(rand::rng());

    let keypair = CramerShoupKeyPair::generate(params, &mut rng)?;
    let mut ciphertext = hybrid::encrypt(params, &keypair.public, b"do not touch", 128, &mut rng)?;
    ciphertext.body.tag += 1u32;

    let err = hybrid::decrypt(params, &keypair.secret, &ciphertext, 128).unwrap_err();
    assert_eq!(err.to_string(), "Ciphertext invalid or corrupted");

    Ok(())
}
