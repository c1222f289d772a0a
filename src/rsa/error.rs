// RSA Error Types
// Errors surfaced by key generation and the engine operations

use num_bigint::BigUint;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RsaError {
    #[error("Bit length must be at least 2, got {0}")]
    InvalidBitLength(u32),

    #[error("No {bit_length}-bit prime found after {attempts} candidates")]
    PrimeSearchExhausted { bit_length: u32, attempts: u64 },

    #[error("p={p} and q={q} are not two distinct primes")]
    InvalidPrimePair { p: BigUint, q: BigUint },

    #[error("Totient must be greater than 1")]
    DegenerateTotient,

    #[error("Character {ch:?} (code point {code_point}) does not fit below modulus {modulus}")]
    CharacterOutOfRange {
        ch: char,
        code_point: u32,
        modulus: BigUint,
    },

    #[error("Ciphertext value at index {index} is not below modulus {modulus}")]
    CiphertextOutOfRange { index: usize, modulus: BigUint },

    #[error("Decrypted value {value} at index {index} is not a valid character")]
    InvalidCodePoint { index: usize, value: BigUint },

    #[error("A {digest_bit_length}-bit digest does not fit below modulus {modulus}")]
    DigestOutOfRange {
        digest_bit_length: u32,
        modulus: BigUint,
    },
}

/// Result type for RSA operations
pub type RsaResult<T> = Result<T, RsaError>;
