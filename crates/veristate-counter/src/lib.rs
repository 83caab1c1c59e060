//! # veristate-counter — Virtual Monotonic Counter Service
//!
//! A service owning a collection of virtual monotonic counters, each
//! identified by a random 64-bit id. Every lifecycle operation (create,
//! read, increment, destroy) returns a [`Certificate`] binding the counter
//! id and resulting value to a caller-supplied nonce, so callers can detect
//! replayed responses without the service interpreting the nonce at all.
//!
//! ## Key Design Principles
//!
//! 1. **Counters never leave the service.** The per-counter record is
//!    private; all external interaction happens through certificates.
//!
//! 2. **Not-found is an error, never a zero certificate.** A missing id
//!    yields [`CounterError::NotFound`], keeping "counter at value 0"
//!    distinguishable from "no such counter".
//!
//! 3. **Exclusive access is compiler-enforced.** Mutating operations take
//!    `&mut self`; hosts sharing a service across threads wrap it in a
//!    `Mutex`.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `veristate-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests; entropy exhaustion is a
//!   returned error, not an abort.

pub mod certificate;
pub mod service;

pub use certificate::{Certificate, CounterId, Nonce};
pub use service::{CounterError, CounterService};
