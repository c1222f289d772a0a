use std::process;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use log::{info, LevelFilter};

use rsa_demo::party::{Receiver, Sender};
use rsa_demo::rsa::{ExponentSearch, RsaConfig};
use rsa_demo::{hash_message, RsaEngine};

/// Sender encrypts and signs a message, receiver decrypts and verifies it
#[derive(Debug, Parser)]
#[command(name = "rsa_demo", version, about)]
struct Args {
    /// Bit length of each prime, also used as the digest width
    #[arg(short, long, default_value_t = 16)]
    bits: u32,

    #[arg(short, long, default_value = "Hello, Bob!")]
    message: String,

    /// Miller-Rabin rounds per prime candidate
    #[arg(short, long, default_value_t = 5)]
    rounds: u32,

    /// Seed for reproducible keys
    #[arg(short, long)]
    seed: Option<u64>,

    /// Find d by linear scan instead of the extended Euclidean algorithm
    #[arg(long)]
    linear_search: bool,
}

impl Args {
    fn config(&self) -> RsaConfig {
        let search = if self.linear_search {
            ExponentSearch::Linear
        } else {
            ExponentSearch::Euclidean
        };
        let config = RsaConfig::new(self.bits)
            .with_rounds(self.rounds)
            .with_exponent_search(search);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let start = Instant::now();

    let engine = Arc::new(RsaEngine::with_config(&args.config()).context("key generation failed")?);
    info!(
        "generated key: n={} ({} bits), e={}",
        engine.modulus(),
        engine.modulus().bits(),
        engine.public_key().e
    );

    let sender = Sender::new(Arc::clone(&engine));
    let receiver = Receiver::new(Arc::clone(&engine));

    println!("Original message: {}", args.message);

    let sent = sender
        .send_message(&args.message)
        .context("sender could not encrypt and sign")?;
    let encrypted: Vec<String> = sent.ciphertext.iter().map(ToString::to_string).collect();
    println!("Encrypted message: [{}]", encrypted.join(", "));
    println!("Signature: {}", sent.signature);

    let received = receiver
        .receive_message(&sent)
        .context("receiver could not decrypt")?;
    println!(
        "The signature is {}.",
        if received.signature_valid { "valid" } else { "not valid" }
    );
    println!("Decrypted message: {}", received.text);

    println!("Hash of message: {}", hash_message(&args.message));
    println!("Execution time: {:?}", start.elapsed());

    Ok(())
}

fn main() {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error running demo: {:#}", e);
        process::exit(1);
    }
}
