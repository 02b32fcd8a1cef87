mod args;
mod config;
mod global;
mod handlers;

use args::{ConfigAction, DecodeArgs, EncodeArgs, IntArgs, ParseArgs};
use clap::{Parser, Subcommand};
use global::GlobalArgs;
use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "proquint")]
#[command(version)]
#[command(about = "Encode binary data and integers as pronounceable proquint syllables", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode bytes (or a hex string) as proquint text
    Encode(EncodeArgs),
    /// Decode proquint text back to bytes
    Decode(DecodeArgs),
    /// Encode a 16, 32 or 64-bit integer
    Int(IntArgs),
    /// Decode proquint text as an integer
    Parse(ParseArgs),
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(&cli.global);

    let settings = config::load_settings(&cli.global)?;

    match cli.command {
        Command::Encode(args) => handlers::encode::handle(args, &cli.global, &settings),
        Command::Decode(args) => handlers::decode::handle(args, &cli.global, &settings),
        Command::Int(args) => handlers::int::handle(args, &settings),
        Command::Parse(args) => handlers::parse::handle(args),
        Command::Config { action } => handlers::config::handle(action, &settings),
    }
}

/// Diagnostics go to stderr so they never mix with encoded output.
/// `RUST_LOG` takes precedence over `-v`/`-q`.
fn init_tracing(global: &GlobalArgs) {
    let default_level = if global.verbose {
        "debug"
    } else if global.quiet {
        "error"
    } else {
        "warn"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
