use crate::group::DomainParameters;

use lazy_static::lazy_static;
use num_bigint::BigUint;
use num_traits::Zero;

/// Names accepted by [`by_name`].
pub const PRESET_NAMES: [&str; 4] = ["toy-23", "safe-prime-128", "oakley-768", "modp-1536"];

const OAKLEY_768_PRIME: &str = "\
    FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD129024E088A67CC74\
    020BBEA63B139B22514A08798E3404DDEF9519B3CD3A431B302B0A6DF25F1437\
    4FE1356D6D51C245E485B576625E7EC6F44C42E9A63A3620FFFFFFFFFFFFFFFF";

const MODP_1536_PRIME: &str = "\
    FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD129024E088A67CC74\
    020BBEA63B139B22514A08798E3404DDEF9519B3CD3A431B302B0A6DF25F1437\
    4FE1356D6D51C245E485B576625E7EC6F44C42E9A637ED6B0BFF5CB6F406B7ED\
    EE386BFB5A899FA5AE9F24117C4B1FE649286651ECE45B3DC2007CB8A163BF05\
    98DA48361C55D39A69163FA8FD24CF5F83655D23DCA3AD961C62F356208552BB\
    9ED529077096966D670C354E4ABC9804F1746C08CA237327FFFFFFFFFFFFFFFF";

lazy_static! {
    /// `p = 23`: small enough to follow every step by hand. Too small for a keystream.
    pub static ref TOY_23: DomainParameters = from_prime(BigUint::from(23u32));

    /// A 128-bit safe prime. Fast, and only suitable for tests.
    pub static ref SAFE_PRIME_128: DomainParameters =
        from_prime(BigUint::from(340282366920938463463374607431768196007u128));

    /// RFC 2409 First Oakley Group (768 bits).
    pub static ref OAKLEY_768: DomainParameters = from_prime(hex_constant(OAKLEY_768_PRIME));

    /// RFC 3526 group 5 (1536 bits).
    pub static ref MODP_1536: DomainParameters = from_prime(hex_constant(MODP_1536_PRIME));
}

/// Looks a preset up by its CLI name, see [`PRESET_NAMES`].
pub fn by_name(name: &str) -> Option<&'static DomainParameters> {
    match name {
        "toy-23" => Some(&*TOY_23),
        "safe-prime-128" => Some(&*SAFE_PRIME_128),
        "oakley-768" => Some(&*OAKLEY_768),
        "modp-1536" => Some(&*MODP_1536),
        _ => None,
    }
}

// Every preset prime is ≡ 7 mod 8, so 4 = 2^2 and 9 = 3^2 both lie in the order-q subgroup.
fn from_prime(p: BigUint) -> DomainParameters {
    let q = (&p - 1u32) >> 1u32;
    DomainParameters {
        p,
        q,
        x: BigUint::from(4u32),
        y: BigUint::from(9u32),
    }
}

fn hex_constant(digits: &str) -> BigUint {
    digits
        .chars()
        .filter_map(|c| c.to_digit(16))
        .fold(BigUint::zero(), |acc, digit| (acc << 4u32) + digit)
}
