//! # Domain Entities
//!
//! The two record kinds held by the registry, plus the derived per-id
//! lifecycle state.
//!
//! Field names serialize in camelCase (`documentsHash`, `requestTime`,
//! `creationTime`) to match the record shape existing callers read.

use super::value_objects::{property_value_serde, BlockHeight, DocumentsHash, Principal, PropertyValue};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a verification request.
///
/// Requests are deleted on adjudication, so `Pending` is the only status
/// ever stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Pending,
}

impl RequestStatus {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pending claim awaiting admin adjudication.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRequest {
    /// Principal that submitted the request.
    pub owner: Principal,
    /// Free-text street address.
    pub address: String,
    /// Digest of the supporting documents.
    pub documents_hash: DocumentsHash,
    pub status: RequestStatus,
    /// Clock reading when the request was submitted.
    pub request_time: BlockHeight,
}

impl VerificationRequest {
    #[must_use]
    pub fn pending(
        owner: Principal,
        address: String,
        documents_hash: DocumentsHash,
        request_time: BlockHeight,
    ) -> Self {
        Self {
            owner,
            address,
            documents_hash,
            status: RequestStatus::Pending,
            request_time,
        }
    }
}

/// The durable outcome of an approved request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub owner: Principal,
    pub address: String,
    /// Always `true` for stored records.
    pub verified: bool,
    #[serde(with = "property_value_serde")]
    pub value: PropertyValue,
    /// Clock reading when the request was approved.
    pub creation_time: BlockHeight,
}

impl Property {
    /// Build the verified record from the request it replaces.
    #[must_use]
    pub fn from_approved_request(
        request: VerificationRequest,
        value: PropertyValue,
        creation_time: BlockHeight,
    ) -> Self {
        Self {
            owner: request.owner,
            address: request.address,
            verified: true,
            value,
            creation_time,
        }
    }
}

/// Lifecycle of a single property id.
///
/// ```text
/// Empty ──submit──▶ Pending ──approve──▶ Verified (terminal)
///                     │
///                     └──reject──▶ Empty
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyLifecycle {
    /// Neither a request nor a property exists.
    Empty,
    /// A verification request is waiting for the admin.
    Pending,
    /// A verified property record exists.
    Verified,
}

impl PropertyLifecycle {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Verified)
    }

    /// Whether `submit-property` can succeed from this state.
    #[must_use]
    pub fn accepts_submission(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl fmt::Display for PropertyLifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Empty => "EMPTY",
            Self::Pending => "PENDING",
            Self::Verified => "VERIFIED",
        };
        f.write_str(s)
    }
}
