// RSA Module - Main module file
// Exports all RSA-related functionality

pub mod bigint;
pub mod config;
pub mod decrypt;
pub mod encrypt;
pub mod engine;
pub mod error;
pub mod keygen;
pub mod signature;

pub use bigint::{is_probable_prime, RsaBigInt, DEFAULT_MR_ROUNDS};
pub use config::{ExponentSearch, RsaConfig};
pub use decrypt::decrypt_to_string;
pub use encrypt::{encrypt_char, encrypt_string};
pub use engine::RsaEngine;
pub use error::{RsaError, RsaResult};
pub use keygen::{generate_prime, KeyPair, RsaPublicKey};
pub use signature::{hash_message, sign_message, verify_signature};
