// Command Line Front-End
// Parses the toy-rsa subcommands and prints their results

use std::io::Write;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use crate::rsa::{decrypt, encrypt, factorize, RsaBigInt, RsaKeyPair};
use crate::util::config::KeyConfig;

#[derive(Parser, Debug)]
#[command(name = "toy-rsa")]
#[command(about = "Textbook RSA over small primes and Pollard's rho factorization")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Derive and print the key pair for two primes
    Keys {
        p: RsaBigInt,
        q: RsaBigInt,

        /// Pick the public exponent from a seeded random start
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Encrypt a message with the public key of p and q
    Encrypt {
        p: RsaBigInt,
        q: RsaBigInt,
        message: String,
    },

    /// Decrypt cipher text with the private key of p and q
    Decrypt {
        p: RsaBigInt,
        q: RsaBigInt,
        cipher: String,
    },

    /// Factorize n with Pollard's rho
    Factor { n: RsaBigInt },
}

impl Command {
    /// Execute the command, writing results to `out`
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        match self {
            Command::Keys { p, q, seed } => {
                let config = match seed {
                    Some(seed) => KeyConfig::default().with_seed(*seed),
                    None => KeyConfig::default(),
                };
                let keypair = RsaKeyPair::derive(p, q, &config)
                    .with_context(|| format!("deriving keys for p={} q={}", p, q))?;
                info!("derived a {}-bit modulus", keypair.bit_length());

                writeln!(out, "n   = {}", keypair.public_key.n)?;
                writeln!(out, "phi = {}", keypair.phi)?;
                writeln!(out, "e   = {}", keypair.public_key.e)?;
                writeln!(out, "d   = {}", keypair.private_key.d)?;
            }
            Command::Encrypt { p, q, message } => {
                let keypair = derive(p, q)?;
                let key = &keypair.public_key;
                let cipher = encrypt(message, &key.e, &key.n, None).context("encrypting message")?;
                writeln!(out, "{}", cipher)?;
            }
            Command::Decrypt { p, q, cipher } => {
                let keypair = derive(p, q)?;
                let key = &keypair.private_key;
                let plain = decrypt(cipher, &key.d, &key.n, None).context("decrypting cipher text")?;
                writeln!(out, "{}", plain)?;
            }
            Command::Factor { n } => {
                let factors = factorize(n).with_context(|| format!("factorizing {}", n))?;
                let listed: Vec<String> = factors.iter().map(|f| f.to_string()).collect();
                writeln!(out, "{}", listed.join(" "))?;
            }
        }

        Ok(())
    }
}

fn derive(p: &RsaBigInt, q: &RsaBigInt) -> Result<RsaKeyPair> {
    RsaKeyPair::derive(p, q, &KeyConfig::default())
        .with_context(|| format!("deriving keys for p={} q={}", p, q))
}
