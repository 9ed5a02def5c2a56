// RSA Module - Main module file
// Exports key derivation, the text codec and Pollard's rho factorization

pub mod bigint;
pub mod codebook;
pub mod decrypt;
pub mod encrypt;
pub mod error;
pub mod factor;
pub mod keygen;

pub use bigint::{coprime, from_u64, RsaBigInt};
pub use codebook::Codebook;
pub use decrypt::{decrypt, decrypt_values};
pub use encrypt::{encrypt, encrypt_values, DELIMITER};
pub use error::{RsaError, RsaResult};
pub use factor::{factorize, factorize_with, find_one_factor, FactorSearch};
pub use keygen::{
    derive_keys, derive_keys_with, get_private_key, get_public_key, RsaKeyPair, RsaPrivateKey,
    RsaPublicKey,
};
