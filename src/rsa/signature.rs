// RSA Signatures
// Signs a truncated SHA-1 digest of the message with the private exponent

use num_traits::One;
use sha1::{Digest, Sha1};

use super::bigint::{mod_pow, RsaBigInt};
use super::error::{RsaError, RsaResult};
use super::keygen::{KeyPair, RsaPublicKey};

/// Hex-encoded SHA-1 of the UTF-8 message, independent of any key
pub fn hash_message(message: &str) -> String {
    hex::encode(Sha1::digest(message.as_bytes()))
}

/// SHA-1 digest of the message as a big-endian integer, keeping only the
/// low `digest_bit_length` bits. Widths of 160 or more keep the full digest.
pub fn message_digest(message: &str, digest_bit_length: u32) -> RsaBigInt {
    let digest = RsaBigInt::from_bytes_be(&Sha1::digest(message.as_bytes()));
    let mask = (RsaBigInt::one() << digest_bit_length) - 1u8;
    digest & mask
}

/// Sign `message`: masked digest raised to d mod n.
///
/// The masked digest must be below `n`, otherwise the signature could
/// never verify and [`RsaError::DigestOutOfRange`] is returned.
pub fn sign_message(
    message: &str,
    digest_bit_length: u32,
    keypair: &KeyPair,
) -> RsaResult<RsaBigInt> {
    let digest = message_digest(message, digest_bit_length);
    if &digest >= keypair.n() {
        return Err(RsaError::DigestOutOfRange {
            digest_bit_length,
            modulus: keypair.n().clone(),
        });
    }

    Ok(mod_pow(&digest, keypair.d(), keypair.n()))
}

/// Verify a signature produced by [`sign_message`] with the same digest width.
/// Signatures outside `[0, n)` are rejected.
pub fn verify_signature(
    message: &str,
    signature: &RsaBigInt,
    digest_bit_length: u32,
    public_key: &RsaPublicKey,
) -> bool {
    if signature >= &public_key.n {
        return false;
    }

    let expected = message_digest(message, digest_bit_length);
    mod_pow(signature, &public_key.e, &public_key.n) == expected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::bigint::from_u64;
    use crate::rsa::config::ExponentSearch;

    fn toy_keypair() -> KeyPair {
        KeyPair::from_primes(from_u64(61), from_u64(53), 6, ExponentSearch::Linear).unwrap()
    }

    #[test]
    fn test_hash_message() {
        assert_eq!(hash_message(""), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
        assert_eq!(hash_message("Hi"), "94dd9e08c129c785f7f256e82fbe0a30e6d1ae40");
        assert_eq!(hash_message("Hello, Bob!").len(), 40);
    }

    #[test]
    fn test_message_digest_mask() {
        assert_eq!(message_digest("Hi", 16), from_u64(44608));
        assert_eq!(message_digest("Hi", 11), from_u64(1600));
        assert_eq!(message_digest("Hi", 0), from_u64(0));

        let full = RsaBigInt::parse_bytes(b"94dd9e08c129c785f7f256e82fbe0a30e6d1ae40", 16).unwrap();
        assert_eq!(message_digest("Hi", 160), full);
        assert_eq!(message_digest("Hi", 200), full);
    }

    #[test]
    fn test_sign_known_value() {
        // 1600^223 mod 3233
        let signature = sign_message("Hi", 11, &toy_keypair()).unwrap();
        assert_eq!(signature, from_u64(1478));
    }

    #[test]
    fn test_sign_verify() {
        let keypair = toy_keypair();
        let public_key = keypair.public_key();
        for message in ["", "Hi", "Hello, Bob!"] {
            let signature = sign_message(message, 11, &keypair).unwrap();
            assert!(verify_signature(message, &signature, 11, &public_key));
        }
    }

    #[test]
    fn test_verify_rejects_other_message() {
        let keypair = toy_keypair();
        let signature = sign_message("Hi", 11, &keypair).unwrap();
        assert!(!verify_signature("Hello, Bob!", &signature, 11, &keypair.public_key()));
    }

    #[test]
    fn test_verify_rejects_tampered_signature() {
        let keypair = toy_keypair();
        let signature = sign_message("Hi", 11, &keypair).unwrap();
        let tampered = &signature + 1u8;
        assert!(!verify_signature("Hi", &tampered, 11, &keypair.public_key()));
    }

    #[test]
    fn test_verify_rejects_mismatched_width() {
        // "Hi" masks to 1600 at 11 bits and 576 at 10 bits
        let keypair = toy_keypair();
        let signature = sign_message("Hi", 11, &keypair).unwrap();
        assert!(!verify_signature("Hi", &signature, 10, &keypair.public_key()));
    }

    #[test]
    fn test_verify_rejects_out_of_range_signature() {
        let keypair = toy_keypair();
        let public_key = keypair.public_key();
        let signature = sign_message("Hi", 11, &keypair).unwrap();
        let wrapped = signature + &public_key.n;
        assert!(!verify_signature("Hi", &wrapped, 11, &public_key));
    }

    #[test]
    fn test_sign_digest_too_wide() {
        // 44608 does not fit below 3233
        let result = sign_message("Hi", 16, &toy_keypair());
        assert_eq!(
            result.unwrap_err(),
            RsaError::DigestOutOfRange {
                digest_bit_length: 16,
                modulus: from_u64(3233),
            }
        );
    }
}
