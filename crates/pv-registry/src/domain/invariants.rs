//! Domain invariants for the registry.
//!
//! | ID | Invariant |
//! |----|-----------|
//! | INVARIANT-1 | Exclusive state: an id is in at most one of the two maps |
//! | INVARIANT-2 | Every stored request has status `pending` |
//! | INVARIANT-3 | Every stored property has `verified == true` |

use super::entities::RequestStatus;
use super::value_objects::PropertyId;
use crate::ports::outbound::StateStore;
use std::fmt;

/// A broken invariant, found by scanning a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// INVARIANT-1
    BothRequestAndProperty { property_id: PropertyId },
    /// INVARIANT-2
    NonPendingRequest {
        property_id: PropertyId,
        status: RequestStatus,
    },
    /// INVARIANT-3
    UnverifiedProperty { property_id: PropertyId },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BothRequestAndProperty { property_id } => write!(
                f,
                "INVARIANT-1 violated: property {property_id} has both a request and a record"
            ),
            Self::NonPendingRequest {
                property_id,
                status,
            } => write!(
                f,
                "INVARIANT-2 violated: request {property_id} has status {status}"
            ),
            Self::UnverifiedProperty { property_id } => write!(
                f,
                "INVARIANT-3 violated: property {property_id} is stored unverified"
            ),
        }
    }
}

/// INVARIANT-1: no id appears in both maps.
pub fn check_exclusive_state<S: StateStore + ?Sized>(store: &S) -> Vec<InvariantViolation> {
    store
        .request_ids()
        .into_iter()
        .filter(|id| store.get_property(*id).is_some())
        .map(|property_id| InvariantViolation::BothRequestAndProperty { property_id })
        .collect()
}

/// INVARIANT-2: requests never leave the `pending` status while stored.
pub fn check_request_status<S: StateStore + ?Sized>(store: &S) -> Vec<InvariantViolation> {
    store
        .request_ids()
        .into_iter()
        .filter_map(|property_id| {
            let request = store.get_request(property_id)?;
            (request.status != RequestStatus::Pending).then_some(
                InvariantViolation::NonPendingRequest {
                    property_id,
                    status: request.status,
                },
            )
        })
        .collect()
}

/// INVARIANT-3: rejected requests never produce a property record.
pub fn check_property_verified<S: StateStore + ?Sized>(store: &S) -> Vec<InvariantViolation> {
    store
        .property_ids()
        .into_iter()
        .filter(|id| store.get_property(*id).is_some_and(|p| !p.verified))
        .map(|property_id| InvariantViolation::UnverifiedProperty { property_id })
        .collect()
}

/// Run every check and collect all violations.
pub fn check_all_invariants<S: StateStore + ?Sized>(store: &S) -> Vec<InvariantViolation> {
    let mut violations = check_exclusive_state(store);
    violations.extend(check_request_status(store));
    violations.extend(check_property_verified(store));
    violations
}
