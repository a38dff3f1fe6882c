//! Method names and argument decoding.
//!
//! Decoding is where calling-convention violations stop: wrong arity, wrong
//! JSON types (a non-boolean `approve`, say), or malformed principals and
//! digests are reported as `IpcError::InvalidArguments` and never reach the
//! workflow.

use super::errors::IpcError;
use crate::domain::{DocumentsHash, Principal, PropertyId, PropertyValue};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Every method the registry recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    GetAdmin,
    IsPropertyVerified,
    GetProperty,
    GetVerificationRequest,
    SetAdmin,
    SubmitProperty,
    VerifyProperty,
}

impl Method {
    pub const ALL: [Method; 7] = [
        Method::GetAdmin,
        Method::IsPropertyVerified,
        Method::GetProperty,
        Method::GetVerificationRequest,
        Method::SetAdmin,
        Method::SubmitProperty,
        Method::VerifyProperty,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GetAdmin => "get-admin",
            Self::IsPropertyVerified => "is-property-verified",
            Self::GetProperty => "get-property",
            Self::GetVerificationRequest => "get-verification-request",
            Self::SetAdmin => "set-admin",
            Self::SubmitProperty => "submit-property",
            Self::VerifyProperty => "verify-property",
        }
    }

    /// Read-only methods take no sender and have no side effects.
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        matches!(
            self,
            Self::GetAdmin
                | Self::IsPropertyVerified
                | Self::GetProperty
                | Self::GetVerificationRequest
        )
    }

    /// Number of positional arguments.
    #[must_use]
    pub fn arity(&self) -> usize {
        match self {
            Self::GetAdmin => 0,
            Self::IsPropertyVerified
            | Self::GetProperty
            | Self::GetVerificationRequest
            | Self::SetAdmin => 1,
            Self::SubmitProperty | Self::VerifyProperty => 3,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = IpcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| IpcError::MethodNotFound {
                method: s.to_string(),
            })
    }
}

/// Size limits applied while decoding.
#[derive(Debug, Clone, Copy)]
pub struct ArgumentLimits {
    pub max_address_len: usize,
    pub max_documents_hash_len: usize,
}

/// Positional arguments of one call, checked against the method's arity.
pub struct Args<'a> {
    method: Method,
    values: &'a [Value],
    limits: ArgumentLimits,
}

impl<'a> Args<'a> {
    pub fn new(
        method: Method,
        values: &'a [Value],
        limits: ArgumentLimits,
    ) -> Result<Self, IpcError> {
        if values.len() != method.arity() {
            return Err(IpcError::InvalidArguments {
                method: method.as_str(),
                reason: format!("expected {} arguments, got {}", method.arity(), values.len()),
            });
        }
        Ok(Self {
            method,
            values,
            limits,
        })
    }

    fn invalid(&self, index: usize, reason: impl Into<String>) -> IpcError {
        IpcError::InvalidArguments {
            method: self.method.as_str(),
            reason: format!("argument {index}: {}", reason.into()),
        }
    }

    fn get(&self, index: usize) -> &Value {
        // Arity was checked in `new`.
        &self.values[index]
    }

    pub fn property_id(&self, index: usize) -> Result<PropertyId, IpcError> {
        self.get(index)
            .as_u64()
            .map(PropertyId::new)
            .ok_or_else(|| self.invalid(index, "expected unsigned integer property id"))
    }

    pub fn principal(&self, index: usize) -> Result<Principal, IpcError> {
        let raw = self
            .get(index)
            .as_str()
            .ok_or_else(|| self.invalid(index, "expected principal string"))?;
        Principal::new(raw).map_err(|e| self.invalid(index, e.to_string()))
    }

    pub fn address(&self, index: usize) -> Result<String, IpcError> {
        let raw = self
            .get(index)
            .as_str()
            .ok_or_else(|| self.invalid(index, "expected address string"))?;
        if raw.len() > self.limits.max_address_len {
            return Err(self.invalid(
                index,
                format!(
                    "address is {} bytes, limit is {}",
                    raw.len(),
                    self.limits.max_address_len
                ),
            ));
        }
        Ok(raw.to_string())
    }

    pub fn documents_hash(&self, index: usize) -> Result<DocumentsHash, IpcError> {
        let raw = self
            .get(index)
            .as_str()
            .ok_or_else(|| self.invalid(index, "expected documents hash string"))?;
        if raw.len() > self.limits.max_documents_hash_len {
            return Err(self.invalid(
                index,
                format!(
                    "documents hash is {} chars, limit is {}",
                    raw.len(),
                    self.limits.max_documents_hash_len
                ),
            ));
        }
        DocumentsHash::parse(raw).map_err(|e| self.invalid(index, e.to_string()))
    }

    /// Unsigned value, as a JSON number or a decimal string for amounts
    /// beyond `u64`.
    pub fn value(&self, index: usize) -> Result<PropertyValue, IpcError> {
        match self.get(index) {
            Value::Number(n) => n
                .as_u64()
                .map(PropertyValue::from)
                .ok_or_else(|| self.invalid(index, "expected unsigned integer value")),
            Value::String(s) => s
                .parse::<PropertyValue>()
                .map_err(|e| self.invalid(index, e.to_string())),
            _ => Err(self.invalid(index, "expected unsigned integer value")),
        }
    }

    pub fn boolean(&self, index: usize) -> Result<bool, IpcError> {
        self.get(index)
            .as_bool()
            .ok_or_else(|| self.invalid(index, "expected boolean"))
    }
}
