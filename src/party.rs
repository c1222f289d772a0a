// Sender and Receiver roles
// Thin collaborators around a shared engine; neither holds key material

use std::sync::Arc;

use log::{debug, warn};

use crate::rsa::{RsaBigInt, RsaEngine, RsaResult};

/// What travels from sender to receiver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedMessage {
    pub ciphertext: Vec<RsaBigInt>,
    pub signature: RsaBigInt,
}

/// What the receiver recovers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedMessage {
    pub text: String,
    pub signature_valid: bool,
}

pub struct Sender {
    engine: Arc<RsaEngine>,
}

impl Sender {
    pub fn new(engine: Arc<RsaEngine>) -> Self {
        Self { engine }
    }

    /// Encrypt and sign `message`, using the key's bit length as digest width
    pub fn send_message(&self, message: &str) -> RsaResult<SignedMessage> {
        let ciphertext = self.engine.encrypt(message)?;
        let signature = self.engine.sign(message, self.engine.bit_length())?;
        Ok(SignedMessage {
            ciphertext,
            signature,
        })
    }
}

pub struct Receiver {
    engine: Arc<RsaEngine>,
}

impl Receiver {
    pub fn new(engine: Arc<RsaEngine>) -> Self {
        Self { engine }
    }

    /// Decrypt the ciphertext, then check the signature against the plaintext
    pub fn receive_message(&self, message: &SignedMessage) -> RsaResult<ReceivedMessage> {
        let text = self.engine.decrypt(&message.ciphertext)?;
        let signature_valid = self
            .engine
            .verify(&text, &message.signature, self.engine.bit_length());

        if signature_valid {
            debug!("signature verified for {} characters", text.chars().count());
        } else {
            warn!("signature does not match the decrypted message");
        }

        Ok(ReceivedMessage {
            text,
            signature_valid,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::bigint::from_u64;
    use crate::rsa::{ExponentSearch, KeyPair};

    fn shared_engine() -> Arc<RsaEngine> {
        // 16-bit primes, modulus well above 2^16
        let keypair = KeyPair::from_primes(
            from_u64(65521),
            from_u64(65519),
            16,
            ExponentSearch::Euclidean,
        )
        .unwrap();
        Arc::new(RsaEngine::from_key_pair(keypair))
    }

    #[test]
    fn test_send_receive() {
        let engine = shared_engine();
        let sender = Sender::new(Arc::clone(&engine));
        let receiver = Receiver::new(Arc::clone(&engine));

        let sent = sender.send_message("Hello, Bob!").unwrap();
        assert_eq!(sent.ciphertext.len(), 11);

        let received = receiver.receive_message(&sent).unwrap();
        assert_eq!(received.text, "Hello, Bob!");
        assert!(received.signature_valid);
    }

    #[test]
    fn test_tampered_ciphertext() {
        let engine = shared_engine();
        let sender = Sender::new(Arc::clone(&engine));
        let receiver = Receiver::new(engine);

        let mut sent = sender.send_message("Hello, Bob!").unwrap();
        sent.ciphertext.swap(0, 1);

        let received = receiver.receive_message(&sent).unwrap();
        assert_eq!(received.text, "eHllo, Bob!");
        assert!(!received.signature_valid);
    }

    #[test]
    fn test_tampered_signature() {
        let engine = shared_engine();
        let sender = Sender::new(Arc::clone(&engine));
        let receiver = Receiver::new(engine);

        let mut sent = sender.send_message("Hi").unwrap();
        sent.signature += 1u8;

        let received = receiver.receive_message(&sent).unwrap();
        assert_eq!(received.text, "Hi");
        assert!(!received.signature_valid);
    }
}
