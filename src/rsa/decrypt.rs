// RSA Decryption Implementation
// Inverts the per-character encryption with the private exponent

use num_traits::ToPrimitive;

use super::bigint::{mod_pow, RsaBigInt};
use super::error::{RsaError, RsaResult};
use super::keygen::KeyPair;

/// Decrypt a ciphertext sequence back to a string.
///
/// Values must lie in `[0, n)`. A recovered value that is not a Unicode
/// scalar value means the ciphertext was not produced by the matching key.
pub fn decrypt_to_string(ciphertext: &[RsaBigInt], keypair: &KeyPair) -> RsaResult<String> {
    ciphertext
        .iter()
        .enumerate()
        .map(|(index, c)| decrypt_char(index, c, keypair))
        .collect()
}

fn decrypt_char(index: usize, c: &RsaBigInt, keypair: &KeyPair) -> RsaResult<char> {
    if c >= keypair.n() {
        return Err(RsaError::CiphertextOutOfRange {
            index,
            modulus: keypair.n().clone(),
        });
    }

    let m = mod_pow(c, keypair.d(), keypair.n());
    m.to_u32()
        .and_then(char::from_u32)
        .ok_or(RsaError::InvalidCodePoint { index, value: m })
}
