// RSA Key Derivation
// Derives a textbook RSA key pair (e, d, n) from two given primes

use log::debug;
use num_traits::{One, Zero};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::iter;

use super::bigint::{coprime, is_probable_prime, random_biguint, RsaBigInt};
use super::error::{RsaError, RsaResult};
use crate::util::config::{KeyConfig, ScanOrder};

const PRIME_CHECK_ROUNDS: u32 = 20;

/// RSA Public Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    pub e: RsaBigInt, // Public exponent
    pub n: RsaBigInt, // Modulus
}

/// RSA Private Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPrivateKey {
    pub d: RsaBigInt, // Private exponent
    pub n: RsaBigInt, // Modulus (same as public)
}

/// RSA Key Pair (both halves of a single derivation)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaKeyPair {
    pub public_key: RsaPublicKey,
    pub private_key: RsaPrivateKey,
    pub phi: RsaBigInt,
}

impl RsaPublicKey {
    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.n.bits()
    }

    pub fn into_parts(self) -> (RsaBigInt, RsaBigInt) {
        (self.e, self.n)
    }
}

impl RsaPrivateKey {
    pub fn into_parts(self) -> (RsaBigInt, RsaBigInt) {
        (self.d, self.n)
    }
}

impl RsaKeyPair {
    /// Derive the key pair for primes p and q
    pub fn derive(p: &RsaBigInt, q: &RsaBigInt, config: &KeyConfig) -> RsaResult<Self> {
        check_domain(p, q, config)?;

        // Step 1: n = p * q and φ(n) = (p-1)(q-1)
        let n = p * q;
        let phi = (p - 1u8) * (q - 1u8);

        // Step 2: public exponent coprime to φ(n)
        let e = find_public_exponent(&phi, config)?;

        // Step 3: private exponent, the inverse of e mod φ(n)
        let d = find_private_exponent(&e, &phi, config)?;

        debug!("derived e={} d={} n={} (phi={})", e, d, n, phi);

        Ok(Self {
            public_key: RsaPublicKey { e, n: n.clone() },
            private_key: RsaPrivateKey { d, n },
            phi,
        })
    }

    /// Get the bit length of the key
    pub fn bit_length(&self) -> u64 {
        self.public_key.bit_length()
    }

    /// Split into the (e, d, n) triple
    pub fn into_parts(self) -> (RsaBigInt, RsaBigInt, RsaBigInt) {
        (self.public_key.e, self.private_key.d, self.public_key.n)
    }
}

fn check_domain(p: &RsaBigInt, q: &RsaBigInt, config: &KeyConfig) -> RsaResult<()> {
    let two = RsaBigInt::from(2u8);
    if p < &two || q < &two {
        return Err(RsaError::InvalidDomain(format!(
            "p and q must be at least 2, got p={} q={}",
            p, q
        )));
    }

    if config.check_primes {
        if p == q {
            return Err(RsaError::InvalidDomain(format!("p and q are both {}", p)));
        }
        for value in [p, q] {
            if !is_probable_prime(value, PRIME_CHECK_ROUNDS) {
                return Err(RsaError::InvalidDomain(format!("{} is not prime", value)));
            }
        }
    }

    Ok(())
}

/// Ascending integers in [from, to)
fn ascending(from: RsaBigInt, to: RsaBigInt) -> impl Iterator<Item = RsaBigInt> {
    iter::successors(Some(from), |c| Some(c + 1u8)).take_while(move |c| c < &to)
}

/// Candidates in [2, phi) for the configured order, each visited once
fn exponent_candidates(phi: &RsaBigInt, order: ScanOrder) -> impl Iterator<Item = RsaBigInt> {
    let low = RsaBigInt::from(2u8);
    let start = if phi <= &low {
        low.clone()
    } else {
        let span = phi - &low;
        let offset = match order {
            ScanOrder::Ascending => RsaBigInt::zero(),
            ScanOrder::RandomOffset => random_biguint(&mut rand::thread_rng(), &span),
            ScanOrder::Seeded(seed) => random_biguint(&mut StdRng::seed_from_u64(seed), &span),
        };
        &low + offset
    };

    ascending(start.clone(), phi.clone()).chain(ascending(low, start))
}

/// Search for the public exponent e
pub fn find_public_exponent(phi: &RsaBigInt, config: &KeyConfig) -> RsaResult<RsaBigInt> {
    for (tried, candidate) in exponent_candidates(phi, config.order).enumerate() {
        check_budget("public exponent", tried, config)?;
        if coprime(&candidate, phi) {
            debug!("public exponent {} after {} candidates", candidate, tried + 1);
            return Ok(candidate);
        }
    }

    Err(RsaError::NoPublicExponent { phi: phi.clone() })
}

/// Search for the private exponent d, (d * e) mod phi == 1
///
/// Brute force over [2, phi). This is O(phi) and only usable with small
/// primes; the extended Euclidean algorithm does the same in O(log phi).
pub fn find_private_exponent(
    e: &RsaBigInt,
    phi: &RsaBigInt,
    config: &KeyConfig,
) -> RsaResult<RsaBigInt> {
    let candidates = ascending(RsaBigInt::from(2u8), phi.clone());
    for (tried, candidate) in candidates.enumerate() {
        check_budget("private exponent", tried, config)?;
        if (&candidate * e % phi).is_one() {
            return Ok(candidate);
        }
    }

    Err(RsaError::NoInverse {
        e: e.clone(),
        phi: phi.clone(),
    })
}

fn check_budget(search: &'static str, tried: usize, config: &KeyConfig) -> RsaResult<()> {
    match config.max_candidates {
        Some(limit) if tried as u64 >= limit => Err(RsaError::UnboundedSearch { search, limit }),
        _ => Ok(()),
    }
}

/// Derive (e, d, n) with the default configuration
pub fn derive_keys(p: &RsaBigInt, q: &RsaBigInt) -> RsaResult<(RsaBigInt, RsaBigInt, RsaBigInt)> {
    derive_keys_with(p, q, &KeyConfig::default())
}

pub fn derive_keys_with(
    p: &RsaBigInt,
    q: &RsaBigInt,
    config: &KeyConfig,
) -> RsaResult<(RsaBigInt, RsaBigInt, RsaBigInt)> {
    RsaKeyPair::derive(p, q, config).map(RsaKeyPair::into_parts)
}

/// Public key (e, n) for p and q
pub fn get_public_key(p: &RsaBigInt, q: &RsaBigInt) -> RsaResult<(RsaBigInt, RsaBigInt)> {
    let keypair = RsaKeyPair::derive(p, q, &KeyConfig::default())?;
    Ok(keypair.public_key.into_parts())
}

/// Private key (d, n) for p and q
pub fn get_private_key(p: &RsaBigInt, q: &RsaBigInt) -> RsaResult<(RsaBigInt, RsaBigInt)> {
    let keypair = RsaKeyPair::derive(p, q, &KeyConfig::default())?;
    Ok(keypair.private_key.into_parts())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::bigint::from_u64;

    fn keys(p: u64, q: u64) -> (RsaBigInt, RsaBigInt, RsaBigInt) {
        derive_keys(&from_u64(p), &from_u64(q)).unwrap()
    }

    #[test]
    fn test_small_textbook_keys() {
        assert_eq!(keys(3, 11), (from_u64(3), from_u64(7), from_u64(33)));
        assert_eq!(keys(61, 53), (from_u64(7), from_u64(1783), from_u64(3233)));
        assert_eq!(keys(2, 5), (from_u64(3), from_u64(3), from_u64(10)));
    }

    #[test]
    fn test_key_properties() {
        let keypair = RsaKeyPair::derive(&from_u64(101), &from_u64(113), &KeyConfig::default())
            .unwrap();

        assert_eq!(keypair.public_key.n, from_u64(101 * 113));
        assert_eq!(keypair.public_key.n, keypair.private_key.n);
        assert_eq!(keypair.phi, from_u64(100 * 112));
        assert!(coprime(&keypair.public_key.e, &keypair.phi));

        let product = &keypair.public_key.e * &keypair.private_key.d;
        assert!((product % &keypair.phi).is_one());
        assert_eq!(keypair.bit_length(), 14);
    }

    #[test]
    fn test_public_and_private_halves_match() {
        let (p, q) = (from_u64(61), from_u64(53));
        let (e, n) = get_public_key(&p, &q).unwrap();
        let (d, n_private) = get_private_key(&p, &q).unwrap();

        assert_eq!(n, n_private);
        assert_eq!((e, d), (from_u64(7), from_u64(1783)));
    }

    #[test]
    fn test_seeded_order_is_reproducible() {
        let config = KeyConfig::default().with_seed(2024);
        let first = derive_keys_with(&from_u64(101), &from_u64(113), &config).unwrap();
        let second = derive_keys_with(&from_u64(101), &from_u64(113), &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_random_order_yields_valid_exponent() {
        let config = KeyConfig::default().with_order(ScanOrder::RandomOffset);
        let phi = from_u64(100 * 112);
        for _ in 0..20 {
            let (e, d, _) = derive_keys_with(&from_u64(101), &from_u64(113), &config).unwrap();
            assert!(e >= from_u64(2) && e < phi);
            assert!(coprime(&e, &phi));
            assert!((e * d % &phi).is_one());
        }
    }

    #[test]
    fn test_candidates_wrap_around() {
        let phi = from_u64(10);
        let all: Vec<RsaBigInt> = exponent_candidates(&phi, ScanOrder::Seeded(9)).collect();
        let mut sorted = all.clone();
        sorted.sort();
        assert_eq!(sorted, (2..10).map(from_u64).collect::<Vec<_>>());
    }

    #[test]
    fn test_no_public_exponent() {
        // phi = 2 leaves an empty candidate range
        let result = derive_keys(&from_u64(2), &from_u64(3));
        assert_eq!(
            result,
            Err(RsaError::NoPublicExponent { phi: from_u64(2) })
        );
    }

    #[test]
    fn test_candidate_cap() {
        let config = KeyConfig::default().with_max_candidates(1);
        // phi = 20: 2 is rejected, so the second candidate is over budget
        let result = derive_keys_with(&from_u64(3), &from_u64(11), &config);
        assert_eq!(
            result,
            Err(RsaError::UnboundedSearch {
                search: "public exponent",
                limit: 1
            })
        );
    }

    #[test]
    fn test_domain_checks() {
        assert!(matches!(
            derive_keys(&from_u64(1), &from_u64(11)),
            Err(RsaError::InvalidDomain(_))
        ));

        let strict = KeyConfig::default().with_prime_check(true);
        assert!(matches!(
            derive_keys_with(&from_u64(9), &from_u64(11), &strict),
            Err(RsaError::InvalidDomain(_))
        ));
        assert!(matches!(
            derive_keys_with(&from_u64(11), &from_u64(11), &strict),
            Err(RsaError::InvalidDomain(_))
        ));
        assert!(derive_keys_with(&from_u64(3), &from_u64(11), &strict).is_ok());
    }
}
