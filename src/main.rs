//! zw-stego - Zero-width Unicode steganography.
//!
//! Hides payloads after a signal phrase in a text file and decodes them
//! again.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use zw_stego::config::DEFAULT_OUTPUT_FILE;
use zw_stego::document::{read_carrier, write_carrier};
use zw_stego::{compose_multi, extract_all, inject, StegoConfig};

#[derive(Parser)]
#[command(name = "zw-stego")]
#[command(author, version)]
#[command(
    about = "Zero-width Unicode stego encoder/decoder",
    long_about = "Hides text payloads as invisible zero-width characters right after a signal phrase, and decodes them again."
)]
struct Cli {
    /// JSON configuration file (signal phrase, markers, default payloads)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Signal phrase to use instead of the configured one
    #[arg(long, global = true)]
    signal: Option<String>,

    /// Print diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inject one payload after the first signal phrase
    Inject {
        /// Input base text file
        #[arg(long)]
        infile: PathBuf,

        /// Output file name
        #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
        outfile: PathBuf,

        /// Payload to embed (default: configured default payload)
        #[arg(long)]
        payload: Option<String>,
    },

    /// Append one signal line per payload to the input text
    Multi {
        /// Input base text file
        #[arg(long)]
        infile: PathBuf,

        /// Output file name
        #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
        outfile: PathBuf,

        /// Payload to embed, may be repeated (default: configured payloads)
        #[arg(long = "payload")]
        payloads: Vec<String>,
    },

    /// Decode all payloads from a file
    Decode {
        /// Input file carrying payloads
        #[arg(long)]
        infile: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref(), cli.signal)?;

    if cli.verbose {
        eprintln!("Signal phrase: {:?}", config.signal_phrase);
        eprintln!(
            "Markers: U+{:04X} (0), U+{:04X} (1)",
            u32::from(config.zero_marker),
            u32::from(config.one_marker)
        );
    }

    match cli.command {
        Commands::Inject {
            infile,
            outfile,
            payload,
        } => cmd_inject(&config, &infile, &outfile, payload, cli.verbose),

        Commands::Multi {
            infile,
            outfile,
            payloads,
        } => cmd_multi(&config, &infile, &outfile, payloads, cli.verbose),

        Commands::Decode { infile } => cmd_decode(&config, &infile, cli.verbose),
    }
}

fn load_config(path: Option<&Path>, signal: Option<String>) -> Result<StegoConfig> {
    let mut config = match path {
        Some(path) => StegoConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => StegoConfig::default(),
    };

    if let Some(signal) = signal {
        config = config.with_signal_phrase(signal);
    }

    config.validate()?;
    Ok(config)
}

fn read_input(infile: &Path) -> Result<String> {
    read_carrier(infile).with_context(|| format!("Failed to read: {}", infile.display()))
}

fn write_output(outfile: &Path, text: &str, verbose: bool) -> Result<()> {
    write_carrier(outfile, text)
        .with_context(|| format!("Failed to write: {}", outfile.display()))?;

    if verbose {
        eprintln!("Wrote {} bytes to {}", text.len(), outfile.display());
    }

    Ok(())
}

fn cmd_inject(
    config: &StegoConfig,
    infile: &Path,
    outfile: &Path,
    payload: Option<String>,
    verbose: bool,
) -> Result<()> {
    let base_text = read_input(infile)?;
    let payload = payload.unwrap_or_else(|| config.default_payload.clone());

    if verbose {
        eprintln!("Payload: {} chars", payload.chars().count());
    }

    let encoded = inject(&base_text, &payload, config)?;
    write_output(outfile, &encoded, verbose)?;

    println!("[✔] Payload injected → {}", outfile.display());
    Ok(())
}

fn cmd_multi(
    config: &StegoConfig,
    infile: &Path,
    outfile: &Path,
    payloads: Vec<String>,
    verbose: bool,
) -> Result<()> {
    let base_text = read_input(infile)?;

    let payloads = config.batch(payloads);

    if verbose {
        eprintln!("Payloads: {}", payloads.len());
    }

    let output = compose_multi(&base_text, &payloads, config)?;
    write_output(outfile, &output, verbose)?;

    println!("[✔] Multi-payload embedded → {}", outfile.display());
    Ok(())
}

fn cmd_decode(config: &StegoConfig, infile: &Path, verbose: bool) -> Result<()> {
    let text = read_input(infile)?;
    let results = extract_all(&text, config);

    if verbose {
        let failed = results.iter().filter(|r| !r.is_ok()).count();
        eprintln!("Signal lines: {} ({} failed)", results.len(), failed);
    }

    println!("🔍 Extracted payloads:");
    for (i, result) in results.iter().enumerate() {
        match &result.outcome {
            Ok(payload) => println!("Payload {}: {}", i + 1, payload),
            Err(e) => println!("Payload {}: [ERROR] {}", i + 1, e),
        }
    }

    Ok(())
}
