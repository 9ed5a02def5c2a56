// RSA Encryption Implementation
// Per-character textbook RSA: value^e mod n, joined with a delimiter

use log::trace;
use num_traits::Zero;

use super::bigint::{mod_pow, RsaBigInt};
use super::codebook::Codebook;
use super::error::{RsaError, RsaResult};
use super::keygen::RsaPublicKey;

/// Separator between encrypted values in cipher text
pub const DELIMITER: char = '-';

/// Encrypt raw values, each of which must be below n
pub fn encrypt_values(
    values: &[RsaBigInt],
    e: &RsaBigInt,
    n: &RsaBigInt,
) -> RsaResult<Vec<RsaBigInt>> {
    if n.is_zero() {
        return Err(RsaError::InvalidInput("modulus must not be zero".to_string()));
    }

    values
        .iter()
        .map(|m| {
            if m >= n {
                return Err(RsaError::MessageOutOfRange {
                    value: m.clone(),
                    n: n.clone(),
                });
            }
            Ok(mod_pow(m, e, n))
        })
        .collect()
}

/// Map a character to the integer it encrypts as
fn encode_char(symbol: char, codebook: Option<&Codebook>) -> RsaResult<RsaBigInt> {
    let value = match codebook {
        Some(book) => book.encode(symbol).ok_or(RsaError::UnknownSymbol(symbol))?,
        None => u32::from(symbol),
    };
    Ok(RsaBigInt::from(value))
}

/// Encrypt a message with the public exponent e and modulus n
///
/// Characters are encoded through the codebook when one is given, otherwise
/// by their Unicode scalar value. Every value must be smaller than n.
pub fn encrypt(
    message: &str,
    e: &RsaBigInt,
    n: &RsaBigInt,
    codebook: Option<&Codebook>,
) -> RsaResult<String> {
    if let Some(book) = codebook {
        book.check_modulus(n)?;
    }

    let plain = message
        .chars()
        .map(|c| encode_char(c, codebook))
        .collect::<RsaResult<Vec<_>>>()?;

    let cipher = encrypt_values(&plain, e, n)?;
    trace!("encrypted {} characters", cipher.len());

    let tokens: Vec<String> = cipher.iter().map(|c| c.to_string()).collect();
    Ok(tokens.join(DELIMITER.to_string().as_str()))
}

impl RsaPublicKey {
    /// Encrypt a message using this public key
    pub fn encrypt(&self, message: &str, codebook: Option<&Codebook>) -> RsaResult<String> {
        encrypt(message, &self.e, &self.n, codebook)
    }
}
