//! # Counter Service — Lifecycle State Machine
//!
//! The service owns a map from [`CounterId`] to its private counter record.
//! Each counter moves through a small lifecycle:
//!
//! ```text
//! Created (value = 0) ──▶ Active ──▶ Destroyed (terminal)
//!                           │  ▲
//!                           └──┘ increment
//! ```
//!
//! Destruction removes the entry outright, so the live ids are always
//! exactly the keys of the map and a destroyed id cannot be operated on
//! again.
//!
//! ## Design Decision
//!
//! Identifier generation re-draws while the fresh id collides with a live
//! counter. The collision probability at 64 random bits is negligible, but
//! a re-draw costs one map lookup and removes the overwrite case from the
//! state machine entirely.

use std::collections::HashMap;

use rand::rngs::OsRng;
use rand::RngCore;
use thiserror::Error;

use crate::certificate::{Certificate, CounterId, Nonce};

/// Errors returned by counter operations.
#[derive(Error, Debug)]
pub enum CounterError {
    /// The addressed counter does not exist (never created, or destroyed).
    ///
    /// Expected in normal operation, e.g. racing a destroy. Deliberately
    /// not representable as a zero-valued certificate.
    #[error("{0} not found")]
    NotFound(CounterId),

    /// The counter is at `u64::MAX` and cannot be incremented.
    ///
    /// The stored value is left unchanged; it never wraps.
    #[error("{0} is at the maximum value")]
    ValueOverflow(CounterId),

    /// The OS entropy source failed while generating a counter id.
    ///
    /// Unrecoverable for the failing call: there is no safe fallback
    /// identifier source.
    #[error("entropy source unavailable: {0}")]
    Entropy(#[from] rand::Error),
}

/// A live counter. Private to the service; external interaction happens
/// only through certificates.
#[derive(Debug, Clone, Copy)]
struct Counter {
    id: CounterId,
    value: u64,
}

/// The virtual monotonic counter service.
///
/// Mutating operations take `&mut self`, so single-writer access is
/// enforced by the borrow checker. Hosts that share a service across
/// threads must wrap it in explicit mutual exclusion (e.g. a `Mutex`);
/// the service itself defines no internal locking.
#[derive(Debug, Default)]
pub struct CounterService {
    counters: HashMap<CounterId, Counter>,
}

impl CounterService {
    /// Create a service with no counters.
    pub fn new() -> Self {
        Self {
            counters: HashMap::new(),
        }
    }

    /// Number of live counters.
    pub fn live_count(&self) -> usize {
        self.counters.len()
    }

    /// Create a new counter at value 0 under a fresh random id.
    ///
    /// Fails only when the OS entropy source is unavailable.
    pub fn create(&mut self, nonce: Nonce) -> Result<Certificate, CounterError> {
        let id = self.fresh_id()?;
        self.counters.insert(id, Counter { id, value: 0 });
        tracing::debug!(counter = %id, "created counter");
        Ok(Certificate {
            counter_id: id,
            value: 0,
            nonce,
        })
    }

    /// Read the current value of a counter without modifying it.
    pub fn read(&self, id: CounterId, nonce: Nonce) -> Result<Certificate, CounterError> {
        let counter = self.counters.get(&id).ok_or(CounterError::NotFound(id))?;
        Ok(Certificate {
            counter_id: counter.id,
            value: counter.value,
            nonce,
        })
    }

    /// Increment a counter by one and certify the new value.
    ///
    /// At `u64::MAX` the increment is refused with
    /// [`CounterError::ValueOverflow`] and the counter is left unchanged.
    pub fn increment(&mut self, id: CounterId, nonce: Nonce) -> Result<Certificate, CounterError> {
        let counter = self
            .counters
            .get_mut(&id)
            .ok_or(CounterError::NotFound(id))?;
        counter.value = counter
            .value
            .checked_add(1)
            .ok_or(CounterError::ValueOverflow(id))?;
        tracing::debug!(counter = %id, value = counter.value, "incremented counter");
        Ok(Certificate {
            counter_id: counter.id,
            value: counter.value,
            nonce,
        })
    }

    /// Destroy a counter, removing it from the collection.
    ///
    /// The destroy certificate carries value 0; the counter no longer has
    /// a value. The id may not be operated on again.
    pub fn destroy(&mut self, id: CounterId, nonce: Nonce) -> Result<Certificate, CounterError> {
        let counter = self
            .counters
            .remove(&id)
            .ok_or(CounterError::NotFound(id))?;
        tracing::debug!(counter = %id, "destroyed counter");
        Ok(Certificate {
            counter_id: counter.id,
            value: 0,
            nonce,
        })
    }

    /// Draw a random id not currently in use.
    ///
    /// 8 bytes from the OS entropy source, interpreted little-endian.
    fn fresh_id(&self) -> Result<CounterId, CounterError> {
        loop {
            let mut bytes = [0u8; 8];
            OsRng.try_fill_bytes(&mut bytes)?;
            let id = CounterId(u64::from_le_bytes(bytes));
            if !self.counters.contains_key(&id) {
                return Ok(id);
            }
        }
    }
}
