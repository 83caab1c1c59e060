//! # Proof Verification Subcommand
//!
//! Reads a JSON proof document and runs it through the generalized-index
//! verifier. The document shape exercises the `0x` hex encoding of every
//! 32-byte value:
//!
//! ```json
//! {
//!   "root": "0x…64 hex digits…",
//!   "index": 4,
//!   "branch": ["0x…", "0x…"],
//!   "leaf": "0x…"
//! }
//! ```

use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

use veristate_core::Value;
use veristate_merkle::verify_proof;

/// Arguments for the `verify` subcommand.
#[derive(clap::Args, Debug)]
pub struct VerifyArgs {
    /// Path to the JSON proof document.
    #[arg(long)]
    pub proof: PathBuf,
}

/// A Merkle inclusion proof as carried on the wire.
#[derive(Debug, Deserialize)]
pub struct ProofDocument {
    /// The claimed tree root.
    pub root: Value,
    /// Generalized index of the leaf (1 = root, children of i are 2i, 2i+1).
    pub index: u64,
    /// Sibling hashes ordered from the leaf level upward.
    pub branch: Vec<Value>,
    /// The leaf whose inclusion is being proven.
    pub leaf: Value,
}

/// Run the proof verification subcommand.
///
/// Prints `proof valid` and exits cleanly on success; a failed
/// verification is reported as an error with the verifier's diagnosis.
pub fn run(args: VerifyArgs) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(&args.proof)
        .with_context(|| format!("reading {}", args.proof.display()))?;
    let doc: ProofDocument = serde_json::from_str(&raw).context("parsing proof document")?;

    tracing::debug!(
        index = doc.index,
        branch_len = doc.branch.len(),
        "verifying proof"
    );
    verify_proof(&doc.root, doc.index, &doc.branch, &doc.leaf)
        .context("proof verification failed")?;

    println!("proof valid");
    Ok(())
}
