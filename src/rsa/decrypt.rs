// RSA Decryption Implementation
// Splits delimited cipher text and applies value^d mod n per token

use log::trace;
use num_traits::{ToPrimitive, Zero};

use super::bigint::{mod_pow, RsaBigInt};
use super::codebook::Codebook;
use super::encrypt::DELIMITER;
use super::error::{RsaError, RsaResult};
use super::keygen::RsaPrivateKey;

/// Decrypt raw values, each of which must be below n
pub fn decrypt_values(
    values: &[RsaBigInt],
    d: &RsaBigInt,
    n: &RsaBigInt,
) -> RsaResult<Vec<RsaBigInt>> {
    if n.is_zero() {
        return Err(RsaError::InvalidInput("modulus must not be zero".to_string()));
    }

    values
        .iter()
        .map(|c| {
            if c >= n {
                return Err(RsaError::MalformedCipherText(format!(
                    "{} is not below the modulus {}",
                    c, n
                )));
            }
            Ok(mod_pow(c, d, n))
        })
        .collect()
}

/// Parse the delimited cipher text into integers
fn parse_tokens(cipher_text: &str) -> RsaResult<Vec<RsaBigInt>> {
    if cipher_text.is_empty() {
        return Ok(Vec::new());
    }

    cipher_text
        .split(DELIMITER)
        .map(|token| {
            token.parse::<RsaBigInt>().map_err(|_| {
                RsaError::MalformedCipherText(format!("{:?} is not a number", token))
            })
        })
        .collect()
}

/// Map a decrypted integer back to its character
fn decode_value(value: &RsaBigInt, codebook: Option<&Codebook>) -> RsaResult<char> {
    let code = value.to_u32().ok_or_else(|| {
        RsaError::MalformedCipherText(format!("{} does not decode to a character", value))
    })?;

    let symbol = match codebook {
        Some(book) => book.decode(code),
        None => char::from_u32(code),
    };
    symbol.ok_or_else(|| {
        RsaError::MalformedCipherText(format!("{} does not decode to a character", code))
    })
}

/// Decrypt cipher text with the private exponent d and modulus n
pub fn decrypt(
    cipher_text: &str,
    d: &RsaBigInt,
    n: &RsaBigInt,
    codebook: Option<&Codebook>,
) -> RsaResult<String> {
    if let Some(book) = codebook {
        book.check_modulus(n)?;
    }

    let cipher = parse_tokens(cipher_text)?;
    let plain = decrypt_values(&cipher, d, n)?;
    trace!("decrypted {} tokens", plain.len());

    plain.iter().map(|m| decode_value(m, codebook)).collect()
}

impl RsaPrivateKey {
    /// Decrypt cipher text using this private key
    pub fn decrypt(&self, cipher_text: &str, codebook: Option<&Codebook>) -> RsaResult<String> {
        decrypt(cipher_text, &self.d, &self.n, codebook)
    }
}
