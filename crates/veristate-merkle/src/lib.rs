//! # veristate-merkle — Generalized-Index Proof Verification
//!
//! Verifies Merkle inclusion proofs for single 32-byte values in a binary
//! tree addressed by generalized indices (1 = root, children of `i` are
//! `2i` and `2i + 1`).
//!
//! ## Design
//!
//! Verification is a pure function over the claimed root, the generalized
//! index, the ordered sibling branch, and the leaf. The three failure modes
//! stay distinct because they indicate different caller bugs: a branch
//! longer than the index supports, a branch shorter than the index demands,
//! and a genuine non-membership.
//!
//! ## Crate Policy
//!
//! - Depends only on `veristate-core` internally.
//! - No mocking of cryptographic operations in tests; all tests hash real
//!   bytes with real SHA-256.
//! - No shared mutable state; every public function is safe under
//!   unsynchronized concurrent calls.

pub mod proof;

pub use proof::{hash_pair, verify_proof, VerificationError};
