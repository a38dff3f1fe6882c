//! Error types for the registry workflow.
//!
//! The numeric codes are an external contract shared with existing callers
//! and must not change.

use super::value_objects::PropertyId;
use thiserror::Error;

/// Fixed error codes returned in `err(..)` call results.
pub mod codes {
    /// A property record already exists for the id.
    pub const PROPERTY_EXISTS: u32 = 100;
    /// A verification request is already pending for the id.
    pub const REQUEST_PENDING: u32 = 101;
    /// No verification request is pending for the id.
    pub const NO_PENDING_REQUEST: u32 = 102;
    /// Sender is not the current admin.
    pub const NOT_AUTHORIZED: u32 = 403;
    /// Unrecognized method name.
    pub const METHOD_NOT_FOUND: u32 = 404;
}

/// Rejections produced by the workflow. None of them mutate state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Not authorized: {sender} is not the registry admin")]
    NotAuthorized { sender: String },

    #[error("Property {property_id} already exists")]
    PropertyExists { property_id: PropertyId },

    #[error("Verification request for property {property_id} is already pending")]
    RequestPending { property_id: PropertyId },

    #[error("No pending verification request for property {property_id}")]
    NoPendingRequest { property_id: PropertyId },
}

impl RegistryError {
    /// Contract error code for this rejection.
    #[must_use]
    pub fn code(&self) -> u32 {
        match self {
            Self::NotAuthorized { .. } => codes::NOT_AUTHORIZED,
            Self::PropertyExists { .. } => codes::PROPERTY_EXISTS,
            Self::RequestPending { .. } => codes::REQUEST_PENDING,
            Self::NoPendingRequest { .. } => codes::NO_PENDING_REQUEST,
        }
    }
}

/// Construction failures for value objects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("Principal must not be empty")]
    EmptyPrincipal,

    #[error("Documents hash must not be empty")]
    EmptyDocumentsHash,

    #[error("Invalid documents hash {value:?}: {reason}")]
    InvalidDocumentsHash { value: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let id = PropertyId::new(1);
        assert_eq!(
            RegistryError::NotAuthorized {
                sender: "ST2".into()
            }
            .code(),
            403
        );
        assert_eq!(RegistryError::PropertyExists { property_id: id }.code(), 100);
        assert_eq!(RegistryError::RequestPending { property_id: id }.code(), 101);
        assert_eq!(RegistryError::NoPendingRequest { property_id: id }.code(), 102);
    }

    #[test]
    fn test_error_display() {
        let err = RegistryError::RequestPending {
            property_id: PropertyId::new(9),
        };
        assert_eq!(
            err.to_string(),
            "Verification request for property 9 is already pending"
        );
    }
}
