//! Call envelopes.
//!
//! Identity comes only from the `sender` field of the envelope, filled in by
//! the host after authentication. Arguments never carry identity.

use crate::domain::Principal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A single call into the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallRequest {
    /// Echoed back in the response.
    pub correlation_id: Uuid,
    /// Method name, e.g. `submit-property`.
    pub method: String,
    /// Positional arguments.
    #[serde(default)]
    pub args: Vec<Value>,
    /// Authenticated sender. Required for mutating calls.
    #[serde(default)]
    pub sender: Option<Principal>,
}

impl CallRequest {
    /// Read-only call with a fresh correlation id.
    pub fn read_only(method: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            correlation_id: Uuid::new_v4(),
            method: method.into(),
            args,
            sender: None,
        }
    }

    /// Mutating call with a fresh correlation id.
    pub fn public(method: impl Into<String>, args: Vec<Value>, sender: Principal) -> Self {
        Self {
            correlation_id: Uuid::new_v4(),
            method: method.into(),
            args,
            sender: Some(sender),
        }
    }
}

/// Tagged call result: `{"type": "ok" | "err" | "some" | "none", "value": ..}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum CallResult {
    /// Success payload (boolean for mutating calls).
    Ok(Value),
    /// Contract error code.
    Err(u32),
    /// Present optional record.
    Some(Value),
    /// Absent optional record.
    None,
}

impl CallResult {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Error code, if this is an `err` result.
    #[must_use]
    pub fn error_code(&self) -> Option<u32> {
        match self {
            Self::Err(code) => Some(*code),
            _ => None,
        }
    }

    /// Payload of `ok` and `some` results.
    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Ok(value) | Self::Some(value) => Some(value),
            Self::Err(_) | Self::None => None,
        }
    }
}

/// Response to a `CallRequest`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallResponse {
    pub correlation_id: Uuid,
    pub result: CallResult,
}
