#[derive(thiserror::Error, Debug)]
pub enum DDHCryptoError {
    /// Domain parameters fail the safe-prime or generator checks, or an operation
    /// was asked for something the group cannot provide.
    #[error("InvalidParameters: {0}")]
    InvalidParameters(String),
    /// A MAC tag or a Cramer-Shoup verification tag did not match.
    ///
    /// Both checks share this variant so callers cannot learn which one failed.
    #[error("Ciphertext invalid or corrupted")]
    AuthenticationFailure,
    #[error("EncodingFailure: {0}")]
    EncodingFailure(String),
    #[error("Randomness source exhausted: {0}")]
    RandomnessExhausted(#[source] std::io::Error),

    #[error("Could not parse: {0}")]
    ParseError(String),

    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
}
