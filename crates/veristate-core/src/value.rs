//! # Value — Fixed 32-Byte Opaque Identifier
//!
//! `Value` is the single hash-sized primitive of the workspace: a Merkle
//! leaf, an interior node, and a tree root are all `Value`s. Equality is
//! byte-exact and a `Value` is immutable once constructed.
//!
//! ## Textual Encoding
//!
//! A `Value` renders as `0x` followed by exactly 64 lowercase hex digits.
//! Parsing accepts upper- and mixed-case digits but always re-emits
//! lowercase. Anything else is rejected with a [`FormatError`] naming the
//! defect. The serde implementations are written by hand so that JSON
//! round-trips through exactly this encoding and nothing else.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::FormatError;

/// A 32-byte leaf value, hash node, or tree root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Value(pub [u8; 32]);

impl Value {
    /// The all-zero value.
    pub const ZERO: Value = Value([0u8; 32]);

    /// Wrap raw bytes.
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Access the raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render as a `0x`-prefixed lowercase hex string (66 chars total).
    pub fn to_hex(&self) -> String {
        let digits: String = self.0.iter().map(|b| format!("{b:02x}")).collect();
        format!("0x{digits}")
    }

    /// Parse a `0x`-prefixed hex string of exactly 64 digits.
    ///
    /// Case-insensitive on input. Fails with the `FormatError` variant
    /// matching the first defect found: missing prefix, then length, then
    /// digit validity.
    ///
    /// Decoding is one nibble per character. Integer-parsing helpers such
    /// as `from_str_radix` also accept a leading sign, which must never
    /// reach a wire encoding, so each character is mapped through
    /// `to_digit(16)` instead.
    pub fn from_hex(s: &str) -> Result<Self, FormatError> {
        let digits = s.strip_prefix("0x").ok_or(FormatError::MissingPrefix)?;
        let count = digits.chars().count();
        if count != 64 {
            return Err(FormatError::InvalidLength { digits: count });
        }
        let mut bytes = [0u8; 32];
        for (i, c) in digits.chars().enumerate() {
            let nibble = c
                .to_digit(16)
                .ok_or(FormatError::InvalidDigit { offset: i })? as u8;
            bytes[i / 2] = (bytes[i / 2] << 4) | nibble;
        }
        Ok(Self(bytes))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<[u8; 32]> for Value {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HexVisitor;

        impl de::Visitor<'_> for HexVisitor {
            type Value = Value;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a 0x-prefixed hex string of 64 digits")
            }

            fn visit_str<E: de::Error>(self, s: &str) -> Result<Value, E> {
                Value::from_hex(s).map_err(E::custom)
            }
        }

        // Non-string JSON input fails here with serde's own type error.
        deserializer.deserialize_str(HexVisitor)
    }
}
