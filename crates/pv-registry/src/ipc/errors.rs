use crate::domain::codes;
use thiserror::Error;

/// Boundary failures. Only `MethodNotFound` has a contract code; the rest
/// are calling-convention violations that never reach the workflow.
#[derive(Debug, Error)]
pub enum IpcError {
    #[error("Method not found: {method}")]
    MethodNotFound { method: String },

    #[error("Invalid arguments for {method}: {reason}")]
    InvalidArguments { method: &'static str, reason: String },

    #[error("Missing sender for {method}")]
    MissingSender { method: &'static str },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IpcError {
    /// Contract error code, if the failure has one.
    #[must_use]
    pub fn code(&self) -> Option<u32> {
        match self {
            Self::MethodNotFound { .. } => Some(codes::METHOD_NOT_FOUND),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_method_not_found_has_code() {
        let err = IpcError::MethodNotFound {
            method: "burn-property".into(),
        };
        assert_eq!(err.code(), Some(404));
        assert_eq!(err.to_string(), "Method not found: burn-property");

        let err = IpcError::MissingSender {
            method: "set-admin",
        };
        assert_eq!(err.code(), None);
    }
}
