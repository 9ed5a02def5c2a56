// RSA Errors
// Error type shared by factorization, key derivation and the text codec

use super::bigint::RsaBigInt;

/// Errors raised by the RSA routines
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RsaError {
    /// A cipher text token could not be turned back into a character.
    #[error("Malformed cipher text: {0}")]
    MalformedCipherText(String),
    /// A plaintext character has no entry in the codebook.
    #[error("Character {0:?} is not in the codebook")]
    UnknownSymbol(char),
    /// A plaintext value does not fit below the modulus.
    #[error("Message value {value} must be smaller than the modulus {n}")]
    MessageOutOfRange { value: RsaBigInt, n: RsaBigInt },
    /// A search ran past its configured cap.
    #[error("{search} search gave up after {limit} iterations")]
    UnboundedSearch { search: &'static str, limit: u64 },
    #[error("Invalid key domain: {0}")]
    InvalidDomain(String),
    #[error("No public exponent in [2, {phi}) is coprime to {phi}")]
    NoPublicExponent { phi: RsaBigInt },
    #[error("{e} has no inverse in [2, {phi})")]
    NoInverse { e: RsaBigInt, phi: RsaBigInt },
    #[error("Invalid codebook: {0}")]
    InvalidCodebook(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for RSA operations
pub type RsaResult<T> = Result<T, RsaError>;
