//! # veristate-cli — Demonstration Driver
//!
//! Host-process wiring around the core crates: a `counter` subcommand that
//! walks a counter through its full lifecycle printing each certificate,
//! and a `verify` subcommand that checks a Merkle inclusion proof supplied
//! as JSON. The core crates carry no CLI surface of their own; everything
//! process-shaped lives here.

pub mod counter;
pub mod verify;
