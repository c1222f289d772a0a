//! Textbook RSA: key generation, per-character encryption and truncated
//! SHA-1 signatures, plus the sender/receiver roles used by the demo binary.
//!
//! No padding and no side-channel hardening. For teaching only.

pub mod party;
pub mod rsa;

pub use rsa::{hash_message, RsaConfig, RsaEngine, RsaError, RsaResult};
