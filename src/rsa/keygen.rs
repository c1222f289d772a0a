// RSA Key Generation
// Derives the prime pair, modulus, Carmichael totient and both exponents

use std::fmt;

use log::debug;
use num_bigint::RandBigInt;
use num_traits::One;
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};

use super::bigint::{gcd, is_probable_prime_with, lcm, mod_inverse, RsaBigInt};
use super::config::{ExponentSearch, RsaConfig};
use super::error::{RsaError, RsaResult};

/// RSA Public Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    pub n: RsaBigInt, // Modulus
    pub e: RsaBigInt, // Public exponent
}

impl RsaPublicKey {
    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.n.bits()
    }
}

/// RSA key material. Immutable once generated.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPair {
    p: RsaBigInt,
    q: RsaBigInt,
    n: RsaBigInt,
    phi: RsaBigInt, // lcm(p-1, q-1)
    e: RsaBigInt,
    d: RsaBigInt,
    bit_length: u32,
}

impl KeyPair {
    /// Generate a key pair from two `bit_length`-bit probable primes using
    /// the default configuration.
    pub fn generate(bit_length: u32) -> RsaResult<Self> {
        Self::generate_with(&RsaConfig::new(bit_length))
    }

    /// Generate a key pair, seeding the RNG from `config.seed` when present.
    pub fn generate_with(config: &RsaConfig) -> RsaResult<Self> {
        match config.seed {
            Some(seed) => Self::generate_with_rng(config, &mut StdRng::seed_from_u64(seed)),
            None => Self::generate_with_rng(config, &mut thread_rng()),
        }
    }

    pub fn generate_with_rng<R: Rng + ?Sized>(config: &RsaConfig, rng: &mut R) -> RsaResult<Self> {
        if config.bit_length < 2 {
            return Err(RsaError::InvalidBitLength(config.bit_length));
        }

        let mut attempts = 0u64;
        let p = search_prime(config, rng, &mut attempts)?;
        let mut q = search_prime(config, rng, &mut attempts)?;
        while q == p {
            q = search_prime(config, rng, &mut attempts)?;
        }
        debug!(
            "found two {}-bit primes after {} candidates",
            config.bit_length, attempts
        );

        Self::from_primes(p, q, config.bit_length, config.exponent_search)
    }

    /// Derive a key pair from known primes. `p` and `q` must be distinct
    /// primes; primality is not re-checked here.
    pub fn from_primes(
        p: RsaBigInt,
        q: RsaBigInt,
        bit_length: u32,
        search: ExponentSearch,
    ) -> RsaResult<Self> {
        let two = RsaBigInt::from(2u8);
        if p < two || q < two || p == q {
            return Err(RsaError::InvalidPrimePair { p, q });
        }

        let n = &p * &q;
        let phi = lcm(&(&p - 1u8), &(&q - 1u8));
        if phi <= RsaBigInt::one() {
            return Err(RsaError::DegenerateTotient);
        }

        let e = find_e(&phi);
        let d = match search {
            ExponentSearch::Linear => find_d(&e, &phi),
            ExponentSearch::Euclidean => {
                find_d_euclidean(&e, &phi).ok_or(RsaError::DegenerateTotient)?
            }
        };
        debug!("derived e={} for a {}-bit modulus", e, n.bits());

        Ok(Self {
            p,
            q,
            n,
            phi,
            e,
            d,
            bit_length,
        })
    }

    pub fn public_key(&self) -> RsaPublicKey {
        RsaPublicKey {
            n: self.n.clone(),
            e: self.e.clone(),
        }
    }

    pub fn n(&self) -> &RsaBigInt {
        &self.n
    }

    pub fn e(&self) -> &RsaBigInt {
        &self.e
    }

    pub fn d(&self) -> &RsaBigInt {
        &self.d
    }

    pub fn p(&self) -> &RsaBigInt {
        &self.p
    }

    pub fn q(&self) -> &RsaBigInt {
        &self.q
    }

    pub(crate) fn phi(&self) -> &RsaBigInt {
        &self.phi
    }

    /// Prime bit length the pair was generated with
    pub fn bit_length(&self) -> u32 {
        self.bit_length
    }
}

// Only the public half is printed
impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("n", &self.n)
            .field("e", &self.e)
            .field("bit_length", &self.bit_length)
            .finish_non_exhaustive()
    }
}

/// Draw uniform integers below 2^bit_length until one is a probable prime.
/// No top-bit or parity fix-up is applied, so small primes are possible.
pub fn generate_prime(bit_length: u32) -> RsaResult<RsaBigInt> {
    let config = RsaConfig::new(bit_length);
    let mut attempts = 0u64;
    search_prime(&config, &mut thread_rng(), &mut attempts)
}

fn search_prime<R: Rng + ?Sized>(
    config: &RsaConfig,
    rng: &mut R,
    attempts: &mut u64,
) -> RsaResult<RsaBigInt> {
    while *attempts < config.max_attempts {
        *attempts += 1;
        let candidate = rng.gen_biguint(u64::from(config.bit_length));
        if is_probable_prime_with(&candidate, config.rounds, rng) {
            return Ok(candidate);
        }
    }

    Err(RsaError::PrimeSearchExhausted {
        bit_length: config.bit_length,
        attempts: *attempts,
    })
}

/// Smallest e >= 2 with gcd(e, phi) == 1.
/// Terminates for any phi >= 2 since phi + 1 is always coprime.
pub fn find_e(phi: &RsaBigInt) -> RsaBigInt {
    let mut e = RsaBigInt::from(2u8);
    while !gcd(&e, phi).is_one() {
        e += 1u8;
    }
    e
}

/// Smallest d >= 2 with (d * e) mod phi == 1, by linear scan.
/// Worst case O(phi) iterations; callers must ensure gcd(e, phi) == 1.
pub fn find_d(e: &RsaBigInt, phi: &RsaBigInt) -> RsaBigInt {
    let mut d = RsaBigInt::from(2u8);
    while !((&d * e) % phi).is_one() {
        d += 1u8;
    }
    d
}

/// Same result as `find_d`, computed with the extended Euclidean algorithm.
/// An inverse of 1 is lifted to 1 + phi to keep d >= 2.
pub fn find_d_euclidean(e: &RsaBigInt, phi: &RsaBigInt) -> Option<RsaBigInt> {
    let d = mod_inverse(e, phi)?;
    if d < RsaBigInt::from(2u8) {
        Some(d + phi)
    } else {
        Some(d)
    }
}
