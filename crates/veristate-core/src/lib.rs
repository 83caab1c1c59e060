//! # veristate-core — Foundational Types for the Veristate Primitives
//!
//! Defines the 32-byte `Value` shared by the Merkle proof verifier and any
//! component that needs a fixed-size opaque identifier, together with its
//! textual encoding and the format-error taxonomy.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrapper for the hash primitive.** `Value` wraps `[u8; 32]`
//!    with byte-exact equality. No bare byte slices cross component
//!    boundaries.
//!
//! 2. **One textual encoding.** A `Value` serializes as a `0x`-prefixed
//!    lowercase hex string of exactly 64 digits, and deserializes only from
//!    that shape. Wrong length, missing prefix, and non-hex input are
//!    distinct `FormatError` variants.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `veristate-*` crates (this is the leaf of the
//!   DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use error::FormatError;
pub use value::Value;
