//! # veristate CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Veristate CLI — verifiable-state primitive demonstrations.
///
/// Walks a virtual monotonic counter through its lifecycle and verifies
/// generalized-index Merkle inclusion proofs.
#[derive(Parser, Debug)]
#[command(name = "veristate", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the counter lifecycle demonstration.
    Counter(veristate_cli::counter::CounterArgs),
    /// Verify a Merkle inclusion proof from a JSON document.
    Verify(veristate_cli::verify::VerifyArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Counter(args) => veristate_cli::counter::run(args),
        Commands::Verify(args) => veristate_cli::verify::run(args),
    }
}
