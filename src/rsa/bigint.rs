// RSA Big Integer Operations
// Wrapper around num-bigint for RSA-specific operations

use log::trace;
use num_bigint::{BigInt, BigUint, RandBigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::{thread_rng, Rng};

/// RSA Big Integer type alias
pub type RsaBigInt = BigUint;

/// Miller-Rabin witness rounds used when nothing else is configured.
/// False-positive probability per accepted candidate is at most 4^-rounds.
pub const DEFAULT_MR_ROUNDS: u32 = 5;

/// Create a big integer from u64
pub fn from_u64(n: u64) -> RsaBigInt {
    RsaBigInt::from(n)
}

/// Modular exponentiation: base^exp mod modulus
pub fn mod_pow(base: &RsaBigInt, exp: &RsaBigInt, modulus: &RsaBigInt) -> RsaBigInt {
    base.modpow(exp, modulus)
}

/// Extended Euclidean Algorithm
/// Returns (gcd, x, y) such that a*x + b*y = gcd = gcd(a, b)
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if b.is_zero() {
        return (a.clone(), BigInt::one(), BigInt::zero());
    }

    let (quotient, remainder) = a.div_rem(b);
    let (gcd, x1, y1) = extended_gcd(b, &remainder);
    let y = x1 - &quotient * &y1;

    (gcd, y1, y)
}

/// Compute modular inverse: a^(-1) mod m, in [0, m)
/// Returns None if inverse doesn't exist
pub fn mod_inverse(a: &RsaBigInt, m: &RsaBigInt) -> Option<RsaBigInt> {
    if m.is_zero() {
        return None;
    }

    let a = BigInt::from_biguint(Sign::Plus, a.clone());
    let m = BigInt::from_biguint(Sign::Plus, m.clone());
    let (gcd, x, _) = extended_gcd(&a, &m);

    if !gcd.is_one() {
        return None;
    }

    // mod_floor keeps the result non-negative
    x.mod_floor(&m).to_biguint()
}

/// Miller-Rabin primality test using the thread-local RNG for witnesses
pub fn is_probable_prime(candidate: &RsaBigInt, rounds: u32) -> bool {
    is_probable_prime_with(candidate, rounds, &mut thread_rng())
}

/// Miller-Rabin primality test drawing witnesses from `rng`
pub fn is_probable_prime_with<R: Rng + ?Sized>(
    candidate: &RsaBigInt,
    rounds: u32,
    rng: &mut R,
) -> bool {
    let two = RsaBigInt::from(2u8);
    let three = RsaBigInt::from(3u8);

    if *candidate == two || *candidate == three {
        return true;
    }
    if *candidate <= RsaBigInt::one() || candidate.is_even() {
        return false;
    }

    // Write candidate-1 as s * 2^r with s odd
    let n_minus_one = candidate - 1u8;
    let mut s = n_minus_one.clone();
    let mut r = 0u64;
    while s.is_even() {
        s >>= 1;
        r += 1;
    }

    for round in 0..rounds {
        // Witness in [2, candidate-2]; upper bound of the range is exclusive
        let a = rng.gen_biguint_range(&two, &n_minus_one);
        let mut x = mod_pow(&a, &s, candidate);

        if x.is_one() || x == n_minus_one {
            continue;
        }

        let mut passed = false;
        for _ in 1..r {
            x = mod_pow(&x, &two, candidate);
            if x == n_minus_one {
                passed = true;
                break;
            }
        }

        if !passed {
            trace!("{} is composite, witness {} in round {}", candidate, a, round);
            return false;
        }
    }

    true
}

/// Greatest common divisor
pub fn gcd(a: &RsaBigInt, b: &RsaBigInt) -> RsaBigInt {
    a.gcd(b)
}

/// Least common multiple
pub fn lcm(a: &RsaBigInt, b: &RsaBigInt) -> RsaBigInt {
    if a.is_zero() || b.is_zero() {
        return RsaBigInt::zero();
    }
    a.lcm(b)
}
