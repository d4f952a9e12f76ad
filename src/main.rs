//! Pentaprint CLI - Multi-Strategy Text Fingerprinting
//!
//! Command-line interface for fingerprinting text and simulating ledger
//! submissions.

use clap::{Parser, Subcommand};
use log::error;
use pentaprint::{
    Config, DigestAlgorithm, FingerprintConfig, FingerprintGenerator, LedgerConfig, MockLedger,
    PentaprintError, Result, Strategy, SAMPLING_SALT, SAMPLING_SEPARATOR, STRATEGY_COUNT,
};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pentaprint")]
#[command(author = "Pentaprint Contributors")]
#[command(version)]
#[command(about = "Multi-strategy text fingerprinting", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the five fingerprint digests for a text
    Fingerprint {
        /// Text to fingerprint (alternative to --input)
        text: Option<String>,

        /// Input file (use "-" for stdin)
        #[arg(short, long)]
        input: Option<String>,

        /// Digest algorithms per slot, comma-separated
        /// (e.g., "sha256,sha256,sha256,sha256,md5")
        #[arg(short, long)]
        algorithms: Option<String>,

        /// Compute strategies on the rayon thread pool
        #[arg(short, long)]
        parallel: bool,
    },

    /// Fingerprint a text and simulate a ledger submission
    Submit {
        /// Text to fingerprint (alternative to --input)
        text: Option<String>,

        /// Input file (use "-" for stdin)
        #[arg(short, long)]
        input: Option<String>,

        /// Seed for the ledger's pseudo-random source (deterministic run)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Show strategy order, algorithms, and protocol constants
    Info,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let result = match cli.command {
        Commands::Fingerprint {
            text,
            input,
            algorithms,
            parallel,
        } => fingerprint_text(text, input, algorithms, parallel),

        Commands::Submit { text, input, seed } => submit_text(text, input, seed),

        Commands::Info => show_info(),
    };

    if let Err(e) = result {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Resolves the input text from a positional argument, a file, or stdin.
fn resolve_text(text: Option<String>, input: Option<String>) -> Result<String> {
    match (input, text) {
        (Some(path), _) if path == "-" => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        (Some(path), _) => Ok(fs::read_to_string(PathBuf::from(path))?),
        (None, Some(t)) => Ok(t),
        (None, None) => Err(PentaprintError::InvalidInput(
            "No input provided. Pass a text argument, --input <file>, or --input - for stdin"
                .to_string(),
        )),
    }
}

/// Parses a comma-separated per-slot algorithm list.
fn parse_algorithms(list: &str) -> Result<[DigestAlgorithm; STRATEGY_COUNT]> {
    let parsed: Vec<DigestAlgorithm> = list
        .split(',')
        .map(|s| s.trim().parse())
        .collect::<Result<_>>()?;

    parsed.try_into().map_err(|v: Vec<DigestAlgorithm>| {
        PentaprintError::Config(format!(
            "Expected {} algorithms, got {}",
            STRATEGY_COUNT,
            v.len()
        ))
    })
}

fn fingerprint_text(
    text: Option<String>,
    input: Option<String>,
    algorithms: Option<String>,
    parallel: bool,
) -> Result<()> {
    let text = resolve_text(text, input)?;

    let mut config = FingerprintConfig {
        parallel,
        ..Default::default()
    };
    if let Some(list) = algorithms {
        config.algorithms = parse_algorithms(&list)?;
    }

    let generator = FingerprintGenerator::new(config);
    let set = generator.generate(&text);

    for (index, (strategy, digest)) in set.iter().enumerate() {
        println!("{}. {:<12} {}", index + 1, strategy.name(), digest);
    }

    Ok(())
}

fn submit_text(text: Option<String>, input: Option<String>, seed: Option<u64>) -> Result<()> {
    let text = resolve_text(text, input)?;

    let generator = FingerprintGenerator::default_config();
    let set = generator.generate(&text);

    println!("Fingerprints:");
    for (index, (strategy, digest)) in set.iter().enumerate() {
        println!("  {}. {:<12} {}", index + 1, strategy.name(), digest);
    }
    println!();

    let ledger_config = LedgerConfig {
        seed,
        ..Default::default()
    };
    println!("Simulating submission to {}...", ledger_config.network);

    let mut ledger = MockLedger::new(ledger_config);
    let receipt = ledger.submit(&set)?;

    println!("{}", serde_json::to_string_pretty(&receipt)?);

    Ok(())
}

fn show_info() -> Result<()> {
    let config = Config::default();

    println!("pentaprint {}", pentaprint::VERSION);
    println!();
    println!("Strategies (fixed slot order):");
    for (index, strategy) in Strategy::ALL.iter().enumerate() {
        println!(
            "  {}. {:<12} {}",
            index + 1,
            strategy.name(),
            config.fingerprint.algorithm(*strategy)
        );
    }
    println!();
    println!("Protocol constants:");
    println!("  sampling salt:      {:?}", SAMPLING_SALT);
    println!("  sampling separator: {:?}", SAMPLING_SEPARATOR);
    println!();
    println!("Ledger defaults:");
    println!("  network:  {}", config.ledger.network);
    println!("  chain id: {}", config.ledger.chain_id);
    println!("  contract: {}", config.ledger.contract);

    Ok(())
}
