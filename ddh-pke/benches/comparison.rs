use aes_gcm::{
    Aes256Gcm,
    aead::{Aead, AeadCore, KeyInit, OsRng as AesOsRng},
};
use chacha20poly1305::{ChaCha20Poly1305, aead::OsRng as ChaChaOsRng};
use criterion::{Bencher, Criterion, black_box, criterion_group, criterion_main};
use ddh_pke::pke::cramer_shoup::{CramerShoupKeyPair, CramerShoupPublicKey, CramerShoupSecretKey};
use ddh_pke::pke::hybrid;
use ddh_pke::preset::groups::SAFE_PRIME_128;
use ddh_pke::random::RngSource;
use rand::RngCore;

const DATA_SIZE_BYTES: usize = 1024;
const MAC_BITS: u64 = 128;

fn generate_data(size: usize) -> Vec<u8> {
    let mut data = vec![0u8; size];
    rand::rng().fill_bytes(&mut data);
    data
}

fn setup_ddh() -> (CramerShoupPublicKey, CramerShoupSecretKey, Vec<u8>) {
    let mut rng = RngSource::new(rand::rng());
    let keypair = CramerShoupKeyPair::generate(&SAFE_PRIME_128, &mut rng)
        .expect("Failed to generate key pair");

    (keypair.public, keypair.secret, generate_data(DATA_SIZE_BYTES))
}

fn bench_ddh_encrypt(b: &mut Bencher) {
    let (public, _, data) = setup_ddh();
    let mut rng = RngSource::new(rand::rng());

    b.iter(|| {
        let _ciphertext = hybrid::encrypt(
            &SAFE_PRIME_128,
            black_box(&public),
            black_box(&data),
            MAC_BITS,
            &mut rng,
        )
        .expect("DDH-PKE encryption failed");
    });
}

fn bench_ddh_decrypt(b: &mut Bencher) {
    let (public, secret, data) = setup_ddh();
    let mut rng = RngSource::new(rand::rng());
    let ciphertext = hybrid::encrypt(&SAFE_PRIME_128, &public, &data, MAC_BITS, &mut rng)
        .expect("DDH-PKE encryption failed during setup");

    b.iter(|| {
        let _plaintext = hybrid::decrypt(&SAFE_PRIME_128, &secret, black_box(&ciphertext), MAC_BITS)
            .expect("DDH-PKE decryption failed");
    });
}

fn setup_aes() -> (Aes256Gcm, Vec<u8>) {
    let key_bytes = Aes256Gcm::generate_key(AesOsRng);
    let cipher = Aes256Gcm::new(&key_bytes);
    (cipher, generate_data(DATA_SIZE_BYTES))
}

fn bench_aes_encrypt(b: &mut Bencher) {
    let (cipher, data) = setup_aes();

    b.iter(|| {
        let nonce = Aes256Gcm::generate_nonce(&mut AesOsRng);
        let _ciphertext = cipher
            .encrypt(black_box(&nonce), black_box(data.as_slice()))
            .expect("AES encryption failed");
    });
}

fn bench_aes_decrypt(b: &mut Bencher) {
    let (cipher, data) = setup_aes();
    let nonce = Aes256Gcm::generate_nonce(&mut AesOsRng);
    let ciphertext = cipher
        .encrypt(&nonce, data.as_slice())
        .expect("AES encryption failed during setup");

    b.iter(|| {
        let _plaintext = cipher
            .decrypt(black_box(&nonce), black_box(ciphertext.as_slice()))
            .expect("AES decryption failed");
    });
}

fn setup_chacha() -> (ChaCha20Poly1305, Vec<u8>) {
    let key_bytes = ChaCha20Poly1305::generate_key(&mut ChaChaOsRng);
    let cipher = ChaCha20Poly1305::new(&key_bytes);
    (cipher, generate_data(DATA_SIZE_BYTES))
}

fn bench_chacha_encrypt(b: &mut Bencher) {
    let (cipher, data) = setup_chacha();

    b.iter(|| {
        let nonce = ChaCha20Poly1305::generate_nonce(&mut ChaChaOsRng);
        let _ciphertext = cipher
            .encrypt(black_box(&nonce), black_box(data.as_slice()))
            .expect("ChaCha20Poly1305 encryption failed");
    });
}

fn bench_chacha_decrypt(b: &mut Bencher) {
    let (cipher, data) = setup_chacha();
    let nonce = ChaCha20Poly1305::generate_nonce(&mut ChaChaOsRng);
    let ciphertext = cipher
        .encrypt(&nonce, data.as_slice())
        .expect("ChaCha20Poly1305 encryption failed during setup");

    b.iter(|| {
        let _plaintext = cipher
            .decrypt(black_box(&nonce), black_box(ciphertext.as_slice()))
            .expect("ChaCha20Poly1305 decryption failed");
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Crypto Comparison");
    group.sample_size(10);

    group.bench_function("DDH-PKE Encrypt", bench_ddh_encrypt);
    group.bench_function("DDH-PKE Decrypt", bench_ddh_decrypt);

    group.bench_function("AES-256-GCM Encrypt", bench_aes_encrypt);
    group.bench_function("AES-256-GCM Decrypt", bench_aes_decrypt);

    group.bench_function("ChaCha20Poly1305 Encrypt", bench_chacha_encrypt);
    group.bench_function("ChaCha20Poly1305 Decrypt", bench_chacha_decrypt);

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
