//! Command-line front end for the Rail Fence cipher.
//!
//! - `railfence encode` - write text across the rails and read them off
//! - `railfence decode` - rebuild the zig-zag and read the plaintext back

#![forbid(unsafe_code)]

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use railfence::config::{Config, Operation, DEFAULT_RAILS};
use railfence::session::{self, Source};

/// Rail Fence transposition cipher.
#[derive(Parser)]
#[command(name = "railfence")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode plaintext into ciphertext.
    Encode(RunArgs),

    /// Decode ciphertext back into plaintext.
    Decode(RunArgs),
}

#[derive(Args)]
struct RunArgs {
    /// Number of rails (2..=100).
    #[arg(short, long, env = "RAILFENCE_RAILS", default_value_t = DEFAULT_RAILS, allow_negative_numbers = true)]
    rails: i64,

    /// Text to transform.
    #[arg(short, long, conflicts_with = "file")]
    text: Option<String>,

    /// UTF-8 text file to transform. Standard input is read when neither
    /// --text nor --file is given.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// File name to save the result under.
    #[arg(short, long)]
    output: Option<String>,

    /// Directory the result is saved into.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Save the result to a file.
    #[arg(long)]
    save: bool,

    /// Do not print the rail grid.
    #[arg(long)]
    no_grid: bool,
}

impl RunArgs {
    fn config(&self, operation: Operation) -> Config {
        let mut config = Config::new(operation)
            .with_rails(self.rails)
            .with_grid(!self.no_grid);
        if let Some(name) = &self.output {
            config = config.with_output_name(name.clone());
        }
        config
    }

    fn source(&self) -> Source {
        match (&self.text, &self.file) {
            (Some(text), _) => Source::Inline(text.clone()),
            (None, Some(path)) => Source::File(path.clone()),
            (None, None) => Source::Stdin,
        }
    }
}

fn execute(operation: Operation, args: RunArgs) -> anyhow::Result<()> {
    let config = args.config(operation);
    let outcome = session::run(&config, &args.source())
        .with_context(|| format!("{} failed", operation))?;

    if let Some(grid) = &outcome.grid_text {
        println!("{}", grid);
    }
    println!("{}", outcome.output);

    if args.save {
        let path = outcome
            .save(&args.out_dir)
            .context("could not save result")?;
        eprintln!("saved to {}", path.display());
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only the result.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encode(args) => execute(Operation::Encode, args),
        Commands::Decode(args) => execute(Operation::Decode, args),
    }
}
