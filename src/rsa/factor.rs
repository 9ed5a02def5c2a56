// Pollard's Rho Factorization
// Splits an integer into factors with the x^2 + 1 walk and cycle detection

use log::{debug, trace};
use num_traits::{One, Zero};

use super::bigint::{abs_diff, gcd, RsaBigInt};
use super::error::{RsaError, RsaResult};
use crate::util::config::FactorConfig;

/// Outcome of a single rho search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactorSearch {
    /// A divisor strictly between 1 and n
    Found(RsaBigInt),
    /// The walk closed on itself with gcd = n. Usually n is prime, but small
    /// composites such as 4 stall the same way.
    LikelyPrime,
}

/// Search for one nontrivial divisor of `n` (n >= 2)
pub fn find_one_factor(n: &RsaBigInt, config: &FactorConfig) -> RsaResult<FactorSearch> {
    if n < &RsaBigInt::from(2u8) {
        return Err(RsaError::InvalidInput(format!(
            "rho search needs n >= 2, got {}",
            n
        )));
    }

    let mut x_fixed = RsaBigInt::from(2u8);
    let mut x = x_fixed.clone();
    let mut cycle_size: u64 = 2;
    let mut factor = RsaBigInt::one();
    let mut steps: u64 = 0;

    while factor.is_one() {
        for _ in 0..cycle_size {
            if let Some(limit) = config.max_steps {
                if steps >= limit {
                    return Err(RsaError::UnboundedSearch {
                        search: "rho factor",
                        limit,
                    });
                }
            }
            steps += 1;

            x = (&x * &x + 1u8) % n;
            factor = gcd(&abs_diff(&x, &x_fixed), n);
            if !factor.is_one() {
                break;
            }
        }

        cycle_size *= 2;
        x_fixed = x.clone();
    }

    trace!("rho on {} settled on {} after {} steps", n, factor, steps);

    if &factor == n {
        Ok(FactorSearch::LikelyPrime)
    } else {
        Ok(FactorSearch::Found(factor))
    }
}

/// Factorize n with the default step cap
pub fn factorize(n: &RsaBigInt) -> RsaResult<Vec<RsaBigInt>> {
    factorize_with(n, &FactorConfig::default())
}

/// Factorize n into factors in order of discovery
///
/// The product of the result equals `n`. Entries are not guaranteed to be
/// prime: whatever the search cannot split further is kept whole.
pub fn factorize_with(n: &RsaBigInt, config: &FactorConfig) -> RsaResult<Vec<RsaBigInt>> {
    if n.is_zero() {
        return Err(RsaError::InvalidInput("cannot factorize 0".to_string()));
    }

    let mut factors = Vec::new();
    let mut residual = n.clone();

    while residual > RsaBigInt::one() {
        let next = match find_one_factor(&residual, config)? {
            FactorSearch::Found(factor) => factor,
            FactorSearch::LikelyPrime => residual.clone(),
        };
        residual /= &next;
        factors.push(next);
    }

    debug!("factorized {} into {:?}", n, factors);
    Ok(factors)
}
