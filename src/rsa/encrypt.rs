// RSA Encryption Implementation
// Textbook per-character encryption, one ciphertext value per char

use super::bigint::{mod_pow, RsaBigInt};
use super::error::{RsaError, RsaResult};
use super::keygen::RsaPublicKey;

/// Encrypt a string using an RSA public key.
///
/// Each character's code point `m` becomes `m^e mod n`. Every code point
/// must be below `n`; a character that does not fit is rejected with
/// [`RsaError::CharacterOutOfRange`] rather than being wrapped.
pub fn encrypt_string(plaintext: &str, public_key: &RsaPublicKey) -> RsaResult<Vec<RsaBigInt>> {
    plaintext
        .chars()
        .map(|ch| encrypt_char(ch, public_key))
        .collect()
}

/// Encrypt a single character
pub fn encrypt_char(ch: char, public_key: &RsaPublicKey) -> RsaResult<RsaBigInt> {
    let code_point = u32::from(ch);
    let m = RsaBigInt::from(code_point);
    if m >= public_key.n {
        return Err(RsaError::CharacterOutOfRange {
            ch,
            code_point,
            modulus: public_key.n.clone(),
        });
    }

    Ok(mod_pow(&m, &public_key.e, &public_key.n))
}
