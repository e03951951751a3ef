//! Command-line interface for `aes-core`.

#![forbid(unsafe_code)]

use std::fs;
use std::path::PathBuf;

use aes_core::{expand_key, Gf256, RoundKeys, Word128};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// AES-128 key schedule and GF(2^8) calculator.
#[derive(Parser)]
#[command(name = "keysched", version, author, about = "AES-128 key schedule CLI")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand an AES-128 key into its 11 round keys.
    Expand {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Print each round key as a 4x4 state matrix.
        #[arg(long, default_value_t = false)]
        columns: bool,
        /// Also write the expansion to this file (bincode).
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Print an expansion previously written with `expand --out`.
    Show {
        /// Path to the serialized expansion.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Print each round key as a 4x4 state matrix.
        #[arg(long, default_value_t = false)]
        columns: bool,
    },
    /// Evaluate one GF(2^8) operation. Operands are decimal or 0x-prefixed hex.
    Field {
        /// Operation to perform.
        #[arg(value_enum)]
        op: FieldOp,
        /// First operand.
        a: String,
        /// Second operand (binary operations only).
        b: Option<String>,
    },
    /// Verify the built-in AES-128 and field arithmetic vectors.
    Check,
    /// Expand a random key.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FieldOp {
    Add,
    Mul,
    Div,
    Inv,
    Xtime,
}

const NIST_KEY: &str = "2b7e151628aed2a6abf7158809cf4f3c";
const NIST_ROUND_1: &str = "a0fafe1788542cb123a339392a6c7605";
const NIST_ROUND_10: &str = "d014f9a8c9ee2589e13f0cc8b6630ca6";

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Commands::Expand {
            key_hex,
            columns,
            out,
        } => cmd_expand(&key_hex, columns, out.as_ref()),
        Commands::Show { input, columns } => cmd_show(&input, columns),
        Commands::Field { op, a, b } => cmd_field(op, &a, b.as_deref()),
        Commands::Check => cmd_check(),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_expand(key_hex: &str, columns: bool, out: Option<&PathBuf>) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let round_keys = expand_key(&key);
    print_round_keys(&round_keys, columns);
    if let Some(path) = out {
        let bytes = bincode::serialize(&round_keys).context("serialize round keys")?;
        fs::write(path, bytes).with_context(|| format!("write {}", path.display()))?;
        info!(path = %path.display(), "wrote expansion");
    }
    Ok(())
}

fn cmd_show(input: &PathBuf, columns: bool) -> Result<()> {
    let bytes = fs::read(input).with_context(|| format!("read {}", input.display()))?;
    let round_keys: RoundKeys =
        bincode::deserialize(&bytes).context("deserialize round keys")?;
    if expand_key(round_keys.first()) != round_keys {
        bail!("{} is not a valid AES-128 expansion", input.display());
    }
    print_round_keys(&round_keys, columns);
    Ok(())
}

fn cmd_field(op: FieldOp, a: &str, b: Option<&str>) -> Result<()> {
    let a = parse_element(a)?;
    let binary = |b: Option<&str>| -> Result<Gf256> {
        match b {
            Some(value) => parse_element(value),
            None => bail!("{op:?} takes two operands"),
        }
    };
    let result = match op {
        FieldOp::Add => a + binary(b)?,
        FieldOp::Mul => a * binary(b)?,
        FieldOp::Div => a / binary(b)?,
        FieldOp::Inv => a.inverse(),
        FieldOp::Xtime => a.mul_x(),
    };
    debug!(?op, %a, %result, "field operation");
    println!("{result} ({})", result.value());
    Ok(())
}

fn cmd_check() -> Result<()> {
    let field_cases = [
        ("12 * 10", Gf256(12) * Gf256(10), Gf256(120)),
        ("0x1c * 0xff", Gf256(0x1c) * Gf256(0xff), Gf256::ONE),
        ("inverse(12)", Gf256(12).inverse(), Gf256(0xb0)),
        ("120 / 10", Gf256(120) / Gf256(10), Gf256(12)),
        ("inverse(0)", Gf256::ZERO.inverse(), Gf256::ZERO),
    ];
    for (label, actual, expected) in field_cases {
        if actual != expected {
            bail!("{label}: expected {expected}, got {actual}");
        }
        debug!(label, %actual, "field vector ok");
    }

    let round_keys = expand_key(&parse_key_hex(NIST_KEY)?);
    let round_1 = parse_key_hex(NIST_ROUND_1)?;
    let round_10 = parse_key_hex(NIST_ROUND_10)?;
    if round_keys.get(1) != Some(&round_1) || round_keys.last() != &round_10 {
        bail!("key expansion does not match the NIST AES-128 vector");
    }
    println!("ok: field arithmetic and AES-128 key expansion vectors");
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key_bytes = [0u8; 16];
    rng.fill_bytes(&mut key_bytes);
    let key = Word128::from(key_bytes);
    println!("demo key: {}", hex::encode(key_bytes));
    print_round_keys(&expand_key(&key), false);
    Ok(())
}

fn print_round_keys(round_keys: &RoundKeys, columns: bool) {
    for round_key in round_keys.iter() {
        if columns {
            println!("round {:2}:", round_key.round);
            for row in round_key.key.to_columns() {
                println!("  {}", hex::encode(row));
            }
        } else {
            println!("round {:2}: {}", round_key.round, round_key.key);
        }
    }
}

fn parse_key_hex(hex_str: &str) -> Result<Word128> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    Word128::from_bytes(&bytes).context("AES-128 key must be 16 bytes (32 hex characters)")
}

fn parse_element(text: &str) -> Result<Gf256> {
    let text = text.trim();
    let value = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(digits) => i64::from_str_radix(digits, 16),
        None => text.parse::<i64>(),
    }
    .with_context(|| format!("parse field element {text:?}"))?;
    let byte = u8::try_from(value)
        .with_context(|| format!("field element {value} must be between 0 and 255"))?;
    Ok(Gf256(byte))
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    let mut seed_bytes = [0u8; 32];
    match seed {
        Some(value) => seed_bytes[..8].copy_from_slice(&value.to_le_bytes()),
        None => rand::rngs::OsRng.fill_bytes(&mut seed_bytes),
    }
    ChaCha20Rng::from_seed(seed_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_and_hex_elements() {
        assert_eq!(parse_element("12").unwrap(), Gf256(12));
        assert_eq!(parse_element("0xb0").unwrap(), Gf256(0xb0));
        assert_eq!(parse_element(" 0XFF ").unwrap(), Gf256(0xff));
        assert!(parse_element("256").is_err());
        assert!(parse_element("-1").is_err());
        assert!(parse_element("0xzz").is_err());
    }

    #[test]
    fn parses_key_hex() {
        let key = parse_key_hex(NIST_KEY).unwrap();
        assert_eq!(key.to_string(), NIST_KEY);
        assert!(parse_key_hex("2b7e").is_err());
        assert!(parse_key_hex("not hex").is_err());
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut a = seeded_rng(Some(42));
        let mut b = seeded_rng(Some(42));
        assert_eq!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn builtin_vectors_pass() {
        cmd_check().unwrap();
    }

    #[test]
    fn expansion_file_roundtrip() {
        let round_keys = expand_key(&parse_key_hex(NIST_KEY).unwrap());
        let bytes = bincode::serialize(&round_keys).unwrap();
        let decoded: RoundKeys = bincode::deserialize(&bytes).unwrap();
        assert_eq!(decoded, round_keys);
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
