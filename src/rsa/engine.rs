// RSA Engine
// Owns one key pair and exposes encrypt/decrypt/sign/verify

use super::bigint::RsaBigInt;
use super::config::RsaConfig;
use super::decrypt::decrypt_to_string;
use super::encrypt::encrypt_string;
use super::error::RsaResult;
use super::keygen::{KeyPair, RsaPublicKey};
use super::signature::{sign_message, verify_signature};

/// An RSA engine is only ever constructed around a fully generated key
/// pair, and the pair never changes afterwards. Share it with `Arc`.
#[derive(Debug, Clone)]
pub struct RsaEngine {
    keypair: KeyPair,
    public_key: RsaPublicKey,
}

impl RsaEngine {
    /// Generate a fresh key pair from two `bit_length`-bit primes
    pub fn new(bit_length: u32) -> RsaResult<Self> {
        Self::with_config(&RsaConfig::new(bit_length))
    }

    pub fn with_config(config: &RsaConfig) -> RsaResult<Self> {
        KeyPair::generate_with(config).map(Self::from_key_pair)
    }

    pub fn from_key_pair(keypair: KeyPair) -> Self {
        let public_key = keypair.public_key();
        Self {
            keypair,
            public_key,
        }
    }

    pub fn public_key(&self) -> &RsaPublicKey {
        &self.public_key
    }

    pub fn modulus(&self) -> &RsaBigInt {
        &self.public_key.n
    }

    /// Prime bit length of the key; the demo also uses it as digest width
    pub fn bit_length(&self) -> u32 {
        self.keypair.bit_length()
    }

    pub fn keypair(&self) -> &KeyPair {
        &self.keypair
    }

    pub fn encrypt(&self, message: &str) -> RsaResult<Vec<RsaBigInt>> {
        encrypt_string(message, &self.public_key)
    }

    pub fn decrypt(&self, ciphertext: &[RsaBigInt]) -> RsaResult<String> {
        decrypt_to_string(ciphertext, &self.keypair)
    }

    pub fn sign(&self, message: &str, digest_bit_length: u32) -> RsaResult<RsaBigInt> {
        sign_message(message, digest_bit_length, &self.keypair)
    }

    pub fn verify(&self, message: &str, signature: &RsaBigInt, digest_bit_length: u32) -> bool {
        verify_signature(message, signature, digest_bit_length, &self.public_key)
    }
}
