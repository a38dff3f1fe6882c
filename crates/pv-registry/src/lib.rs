//! # pv-registry - Property Verification Registry
//!
//! Tracks real-world property records through a two-phase lifecycle: an
//! owner submits a verification request, then the single admin approves or
//! rejects it.
//!
//! ## Lifecycle (per property id)
//!
//! ```text
//! Empty ──submit-property──▶ Pending ──verify-property(approve)──▶ Verified
//!   ▲                          │
//!   └──verify-property(reject)─┘
//! ```
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | An id is pending or verified, never both | `service/registry_service.rs` - `submit_property()` |
//! | INVARIANT-2 | Stored requests are always `pending` | `domain/entities.rs` - `VerificationRequest::pending()` |
//! | INVARIANT-3 | Stored properties are always verified | `domain/entities.rs` - `Property::from_approved_request()` |
//!
//! ## Error Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 100 | Property already exists |
//! | 101 | Request already pending |
//! | 102 | No pending request |
//! | 403 | Sender is not the admin |
//! | 404 | Method not found |
//!
//! ## Usage Example
//!
//! ```
//! use pv_registry::prelude::*;
//!
//! let admin = Principal::new("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM").unwrap();
//! let owner = Principal::new("ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG").unwrap();
//! let mut registry = InMemoryRegistry::in_memory(&RegistryConfig::new(admin.clone())).unwrap();
//!
//! let id = PropertyId::new(1);
//! let hash = DocumentsHash::parse("0x1234567890abcdef").unwrap();
//! registry.submit_property(&owner, id, "123 Main St".into(), hash).unwrap();
//! registry.verify_property(&admin, id, 1_000_000, true).unwrap();
//!
//! assert!(registry.is_property_verified(id));
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod events;
pub mod ipc;
pub mod ports;
pub mod service;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::adapters::{BlockHeightClock, InMemoryEventLog, InMemoryStateStore, NoopEventSink};
    pub use crate::config::{ConfigError, RegistryConfig};
    pub use crate::domain::{
        check_all_invariants, codes, BlockHeight, DocumentsHash, InvariantViolation, Principal,
        Property, PropertyId, PropertyLifecycle, PropertyValue, RegistryError, RequestStatus,
        ValueError, VerificationRequest,
    };
    pub use crate::events::RegistryEvent;
    pub use crate::ipc::{CallRequest, CallResponse, CallResult, InMemoryHandler, IpcError, RegistryHandler};
    pub use crate::ports::{EventSink, LogicalClock, RegistryApi, StateStore};
    pub use crate::service::{InMemoryRegistry, RegistryService, RegistryStats};
}

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
