//! # Value Objects
//!
//! Identifiers and opaque strings carried by registry records. Each type
//! validates on construction, so anything that reaches the workflow is
//! already well-formed.

use super::errors::ValueError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical clock reading (block height or sequence number).
pub type BlockHeight = u64;

/// Appraised property value, supplied by the admin on approval.
pub type PropertyValue = u128;

// =============================================================================
// PROPERTY ID
// =============================================================================

/// Key shared by the `Properties` and `VerificationRequests` maps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(pub u64);

impl PropertyId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PropertyId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

// =============================================================================
// PRINCIPAL
// =============================================================================

/// Opaque identifier of a calling party (owner, admin, or any sender).
///
/// Any non-empty string is accepted; no address-format checks are applied.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Principal(String);

impl Principal {
    pub fn new(value: impl Into<String>) -> Result<Self, ValueError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValueError::EmptyPrincipal);
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Principal {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Principal {
    type Error = ValueError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Principal> for String {
    fn from(principal: Principal) -> Self {
        principal.0
    }
}

// =============================================================================
// DOCUMENTS HASH
// =============================================================================

/// Hex digest of the supporting documents, e.g. `0x1234567890abcdef`.
///
/// The original spelling (including any `0x` prefix) is preserved so that
/// queries return exactly what the owner submitted.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocumentsHash(String);

impl DocumentsHash {
    pub fn parse(value: impl Into<String>) -> Result<Self, ValueError> {
        let value = value.into();
        let digits = strip_hex_prefix(&value);
        if digits.is_empty() {
            return Err(ValueError::EmptyDocumentsHash);
        }
        hex::decode(digits).map_err(|e| ValueError::InvalidDocumentsHash {
            value: value.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decoded digest bytes.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        // Validated in `parse`.
        hex::decode(strip_hex_prefix(&self.0)).unwrap_or_default()
    }
}

fn strip_hex_prefix(value: &str) -> &str {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value)
}

impl fmt::Display for DocumentsHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for DocumentsHash {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<DocumentsHash> for String {
    fn from(hash: DocumentsHash) -> Self {
        hash.0
    }
}

/// Serde representation for `PropertyValue`.
///
/// JSON numbers are written when the value fits in a `u64`, decimal strings
/// otherwise. Both forms are accepted on input.
pub mod property_value_serde {
    use super::PropertyValue;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &PropertyValue, serializer: S) -> Result<S::Ok, S::Error> {
        match u64::try_from(*value) {
            Ok(small) => serializer.serialize_u64(small),
            Err(_) => serializer.serialize_str(&value.to_string()),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<PropertyValue, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(u64),
            Decimal(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(n) => Ok(PropertyValue::from(n)),
            Repr::Decimal(s) => s.parse().map_err(de::Error::custom),
        }
    }
}
