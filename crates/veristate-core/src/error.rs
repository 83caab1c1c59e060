//! # Error Types — Textual Encoding Failures
//!
//! Errors raised while parsing the `0x`-prefixed hex encoding of a
//! [`Value`](crate::Value). All errors use `thiserror` for derive-based
//! `Display` and `Error` implementations.
//!
//! ## Design
//!
//! Each way an input can be malformed gets its own variant so callers can
//! report the exact defect: missing prefix, wrong digit count, or a byte
//! that is not a hex digit.

use thiserror::Error;

/// Error while parsing a textual `Value`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// The string does not start with `0x`.
    #[error("hex string missing 0x prefix")]
    MissingPrefix,

    /// The string holds the wrong number of hex digits after the prefix.
    #[error("hex string has {digits} digits, want 64")]
    InvalidLength {
        /// Number of digits found after the `0x` prefix.
        digits: usize,
    },

    /// A character after the prefix is not a hex digit.
    #[error("invalid hex digit at offset {offset}")]
    InvalidDigit {
        /// Character offset of the offending character, counted from the
        /// first digit after the prefix.
        offset: usize,
    },
}
