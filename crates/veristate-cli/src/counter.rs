//! # Counter Demonstration
//!
//! Runs one counter through create, read, increment (twice), and destroy,
//! printing the certificate issued at each step as JSON. Mirrors the
//! canonical usage pattern of the counter service.

use anyhow::Context;

use veristate_counter::{Certificate, CounterService, Nonce};

/// Arguments for the `counter` subcommand.
#[derive(clap::Args, Debug)]
pub struct CounterArgs {
    /// Nonce echoed into every certificate of the demonstration.
    #[arg(long, default_value_t = 123)]
    pub nonce: u64,
}

fn print_certificate(label: &str, cert: &Certificate) -> anyhow::Result<()> {
    let json = serde_json::to_string(cert).context("serializing certificate")?;
    println!("{label} certificate: {json}");
    Ok(())
}

/// Run the counter lifecycle demonstration.
pub fn run(args: CounterArgs) -> anyhow::Result<()> {
    let nonce = Nonce(args.nonce);
    let mut service = CounterService::new();

    let created = service.create(nonce).context("creating counter")?;
    print_certificate("create", &created)?;
    let id = created.counter_id;

    let read = service.read(id, nonce).context("reading counter")?;
    print_certificate("read", &read)?;

    for _ in 0..2 {
        let incremented = service
            .increment(id, nonce)
            .context("incrementing counter")?;
        print_certificate("increment", &incremented)?;
    }

    let destroyed = service.destroy(id, nonce).context("destroying counter")?;
    print_certificate("destroy", &destroyed)?;

    tracing::info!(counter = %id, "lifecycle demonstration complete");
    Ok(())
}
