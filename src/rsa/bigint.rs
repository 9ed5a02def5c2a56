// RSA Big Integer Operations
// Wrapper around num-bigint for the arithmetic the toy RSA routines share

use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::Rng;

/// RSA Big Integer type alias
pub type RsaBigInt = BigUint;

/// Create a big integer from u64
pub fn from_u64(n: u64) -> RsaBigInt {
    RsaBigInt::from(n)
}

/// Modular exponentiation: base^exp mod modulus
/// Uses square-and-multiply algorithm
pub fn mod_pow(base: &RsaBigInt, exp: &RsaBigInt, modulus: &RsaBigInt) -> RsaBigInt {
    if modulus.is_one() {
        return RsaBigInt::zero();
    }

    let mut result = RsaBigInt::one();
    let mut base = base % modulus;
    let mut exp = exp.clone();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exp >>= 1;
    }

    result
}

/// Greatest common divisor
pub fn gcd(a: &RsaBigInt, b: &RsaBigInt) -> RsaBigInt {
    a.gcd(b)
}

/// Returns true when `a` and `b` share no factor besides 1.
///
/// Works for any `num_integer::Integer`, signed or not. The gcd is always
/// non-negative and `gcd(0, b) == |b|`, so `coprime(0, b)` holds only for
/// `b == ±1`, and `coprime(0, 0)` is false.
pub fn coprime<T: Integer>(a: &T, b: &T) -> bool {
    a.gcd(b).is_one()
}

/// |a - b| without leaving the unsigned domain
pub fn abs_diff(a: &RsaBigInt, b: &RsaBigInt) -> RsaBigInt {
    if a >= b {
        a - b
    } else {
        b - a
    }
}

/// Generate a random big integer in range [0, bound)
pub fn random_biguint<R: Rng + ?Sized>(rng: &mut R, bound: &RsaBigInt) -> RsaBigInt {
    rng.gen_biguint_below(bound)
}

/// Miller-Rabin primality test
/// Returns true if n is probably prime
pub fn is_probable_prime(n: &RsaBigInt, iterations: u32) -> bool {
    let two = RsaBigInt::from(2u8);
    if n < &two {
        return false;
    }
    if n == &two || n == &RsaBigInt::from(3u8) {
        return true;
    }
    if n.is_even() {
        return false;
    }

    // Write n-1 as d * 2^s with d odd
    let n_minus_one = n - 1u8;
    let mut d = n_minus_one.clone();
    let mut s = 0u32;
    while d.is_even() {
        d >>= 1;
        s += 1;
    }

    let mut rng = rand::thread_rng();
    'witness: for _ in 0..iterations {
        // Pick random witness a in [2, n-2]
        let a = rng.gen_biguint_range(&two, &(n - 1u8));

        let mut x = mod_pow(&a, &d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }

        for _ in 1..s {
            x = mod_pow(&x, &two, n);
            if x == n_minus_one {
                continue 'witness;
            }
        }

        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_mod_pow() {
        // 3^5 mod 7 = 243 mod 7 = 5
        let result = mod_pow(&from_u64(3), &from_u64(5), &from_u64(7));
        assert_eq!(result, from_u64(5));

        // 8^7 mod 33 = 2
        assert_eq!(mod_pow(&from_u64(8), &from_u64(7), &from_u64(33)), from_u64(2));
        assert_eq!(mod_pow(&from_u64(8), &from_u64(7), &from_u64(1)), from_u64(0));
    }

    #[test]
    fn test_coprime() {
        assert!(coprime(&from_u64(3), &from_u64(20)));
        assert!(!coprime(&from_u64(4), &from_u64(20)));
        assert!(coprime(&9i64, &-28i64));
        assert!(!coprime(&-6i64, &15i64));
    }

    #[test]
    fn test_coprime_with_zero() {
        assert!(coprime(&0i64, &1i64));
        assert!(coprime(&0i64, &-1i64));
        assert!(!coprime(&0i64, &5i64));
        assert!(!coprime(&0i64, &0i64));
    }

    #[test]
    fn test_abs_diff() {
        assert_eq!(abs_diff(&from_u64(2), &from_u64(9)), from_u64(7));
        assert_eq!(abs_diff(&from_u64(9), &from_u64(2)), from_u64(7));
    }

    #[test]
    fn test_random_biguint_below_bound() {
        let mut rng = StdRng::seed_from_u64(7);
        let bound = from_u64(18);
        for _ in 0..100 {
            assert!(random_biguint(&mut rng, &bound) < bound);
        }
    }

    #[test]
    fn test_is_probable_prime() {
        assert!(is_probable_prime(&from_u64(2), 5));
        assert!(is_probable_prime(&from_u64(3), 5));
        assert!(is_probable_prime(&from_u64(7), 5));
        assert!(is_probable_prime(&from_u64(65537), 10));
        assert!(!is_probable_prime(&from_u64(1), 5));
        assert!(!is_probable_prime(&from_u64(4), 5));
        assert!(!is_probable_prime(&from_u64(9), 5));
        assert!(!is_probable_prime(&from_u64(91), 10));
    }
}
