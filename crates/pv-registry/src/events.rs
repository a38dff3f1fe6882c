//! # Registry Events
//!
//! Emitted through the `EventSink` port after every accepted mutation.
//! Rejected calls never emit.

use crate::domain::{BlockHeight, Principal, PropertyId, PropertyValue};
use serde::{Deserialize, Serialize};

/// Event topic names.
pub mod topics {
    pub const ADMIN_CHANGED: &str = "registry.admin_changed";
    pub const PROPERTY_SUBMITTED: &str = "registry.property_submitted";
    pub const PROPERTY_APPROVED: &str = "registry.property_approved";
    pub const PROPERTY_REJECTED: &str = "registry.property_rejected";
}

/// A state transition that has been applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum RegistryEvent {
    AdminChanged {
        previous: Principal,
        new: Principal,
    },
    #[serde(rename_all = "camelCase")]
    PropertySubmitted {
        property_id: PropertyId,
        owner: Principal,
        request_time: BlockHeight,
    },
    #[serde(rename_all = "camelCase")]
    PropertyApproved {
        property_id: PropertyId,
        owner: Principal,
        #[serde(with = "crate::domain::value_objects::property_value_serde")]
        value: PropertyValue,
        creation_time: BlockHeight,
    },
    #[serde(rename_all = "camelCase")]
    PropertyRejected {
        property_id: PropertyId,
        owner: Principal,
    },
}

impl RegistryEvent {
    #[must_use]
    pub fn topic(&self) -> &'static str {
        match self {
            Self::AdminChanged { .. } => topics::ADMIN_CHANGED,
            Self::PropertySubmitted { .. } => topics::PROPERTY_SUBMITTED,
            Self::PropertyApproved { .. } => topics::PROPERTY_APPROVED,
            Self::PropertyRejected { .. } => topics::PROPERTY_REJECTED,
        }
    }

    /// Property the event concerns, if any.
    #[must_use]
    pub fn property_id(&self) -> Option<PropertyId> {
        match self {
            Self::AdminChanged { .. } => None,
            Self::PropertySubmitted { property_id, .. }
            | Self::PropertyApproved { property_id, .. }
            | Self::PropertyRejected { property_id, .. } => Some(*property_id),
        }
    }
}
