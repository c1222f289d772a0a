// RSA Configuration
// Parameters for key generation, shared by the engine and the demo binary

use super::bigint::DEFAULT_MR_ROUNDS;

/// How the private exponent is searched for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExponentSearch {
    /// Scan d = 2, 3, ... until (d * e) mod phi == 1. O(phi).
    Linear,
    /// Modular inverse via the extended Euclidean algorithm.
    /// Produces the same d as `Linear`.
    #[default]
    Euclidean,
}

/// Configuration for RSA key generation
#[derive(Clone, Debug)]
pub struct RsaConfig {
    /// Bit length of each prime, also the default digest width
    pub bit_length: u32,
    /// Miller-Rabin witness rounds per candidate
    pub rounds: u32,
    /// Ceiling on prime candidates drawn per key pair
    pub max_attempts: u64,
    /// Seed for reproducible keys; thread RNG when absent
    pub seed: Option<u64>,
    pub exponent_search: ExponentSearch,
}

impl Default for RsaConfig {
    fn default() -> Self {
        Self {
            bit_length: 16,
            rounds: DEFAULT_MR_ROUNDS,
            max_attempts: 1_000_000,
            seed: None,
            exponent_search: ExponentSearch::default(),
        }
    }
}

impl RsaConfig {
    pub fn new(bit_length: u32) -> Self {
        Self::default().with_bit_length(bit_length)
    }

    pub fn with_bit_length(mut self, bit_length: u32) -> Self {
        self.bit_length = bit_length;
        self
    }

    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_exponent_search(mut self, search: ExponentSearch) -> Self {
        self.exponent_search = search;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RsaConfig::default();
        assert_eq!(config.bit_length, 16);
        assert_eq!(config.rounds, 5);
        assert_eq!(config.seed, None);
        assert_eq!(config.exponent_search, ExponentSearch::Euclidean);
    }

    #[test]
    fn test_builder_chain() {
        let config = RsaConfig::new(32)
            .with_rounds(12)
            .with_max_attempts(10)
            .with_seed(99)
            .with_exponent_search(ExponentSearch::Linear);

        assert_eq!(config.bit_length, 32);
        assert_eq!(config.rounds, 12);
        assert_eq!(config.max_attempts, 10);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.exponent_search, ExponentSearch::Linear);
    }
}
