//! Textbook RSA over small primes.
//!
//! Derives `(e, d, n)` from two primes by brute-force exponent search,
//! encrypts text one character at a time, and factorizes integers with
//! Pollard's rho. None of this is fit for real cryptographic use: there is
//! no padding and the searches are linear in the totient.

pub mod rsa;
pub mod ui;
pub mod util;

pub use rsa::{
    coprime, decrypt, derive_keys, derive_keys_with, encrypt, factorize, factorize_with,
    find_one_factor, get_private_key, get_public_key, Codebook, FactorSearch, RsaBigInt,
    RsaError, RsaKeyPair, RsaPrivateKey, RsaPublicKey, RsaResult,
};
pub use util::{FactorConfig, KeyConfig, ScanOrder};
