//! # Counter Identity and Certificates
//!
//! Newtype wrappers for the counter identifier and the caller-supplied
//! nonce, plus the certificate record every counter operation returns.
//! The newtypes prevent accidental identifier confusion: a `CounterId`
//! cannot be passed where a `Nonce` is expected even though both wrap a
//! `u64`.

use serde::{Deserialize, Serialize};

/// Unique identifier for a virtual monotonic counter.
///
/// Randomly generated from an OS entropy source at creation and unique
/// among live counters. Never reused while the counter exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CounterId(pub u64);

impl CounterId {
    /// Access the inner integer.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for CounterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "counter:{:016x}", self.0)
    }
}

/// Caller-supplied freshness token.
///
/// The service never interprets a nonce; it only echoes it back in the
/// certificate so the caller can tie the response to its request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Nonce(pub u64);

impl Nonce {
    /// Access the inner integer.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// Attestation record returned by every counter operation.
///
/// Immutable once issued. `value` is the post-operation value (the
/// pre-operation value for reads, and 0 for destroys, whose counter no
/// longer has a value). The service does not retain issued certificates;
/// their lifetime is the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    /// The counter the operation addressed.
    pub counter_id: CounterId,
    /// The counter value the certificate attests to.
    pub value: u64,
    /// The caller's nonce, echoed verbatim.
    pub nonce: Nonce,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_id_display_is_padded_hex() {
        assert_eq!(
            CounterId(0x2a).to_string(),
            "counter:000000000000002a"
        );
        assert_eq!(
            CounterId(u64::MAX).to_string(),
            "counter:ffffffffffffffff"
        );
    }

    #[test]
    fn test_inner_accessors() {
        assert_eq!(CounterId(0x2a).as_u64(), 0x2a);
        assert_eq!(Nonce(123).as_u64(), 123);
    }

    #[test]
    fn test_certificate_json_round_trip() {
        let cert = Certificate {
            counter_id: CounterId(7),
            value: 3,
            nonce: Nonce(99),
        };
        let json = serde_json::to_string(&cert).unwrap();
        let back: Certificate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cert);
    }

    #[test]
    fn test_certificate_json_field_names() {
        let cert = Certificate {
            counter_id: CounterId(1),
            value: 0,
            nonce: Nonce(5),
        };
        let json: serde_json::Value = serde_json::to_value(cert).unwrap();
        assert_eq!(json["counter_id"], 1);
        assert_eq!(json["value"], 0);
        assert_eq!(json["nonce"], 5);
    }
}
