//! # Driven Ports (SPI - Outbound)
//!
//! What the registry workflow depends on:
//! - a keyed record store (`StateStore`)
//! - a logical clock for timestamps (`LogicalClock`)
//! - somewhere to publish applied transitions (`EventSink`)

use crate::domain::{BlockHeight, Principal, Property, PropertyId, VerificationRequest};
use crate::events::RegistryEvent;
use std::sync::Arc;

// =============================================================================
// STATE STORE
// =============================================================================

/// Keyed storage for the admin scalar and the two record maps.
///
/// Pure storage: no validation happens here. The workflow checks every
/// precondition before calling any mutating method, so a mutation that
/// reaches the store is always applied in full.
pub trait StateStore: Send + Sync {
    fn admin(&self) -> Principal;

    fn set_admin(&mut self, admin: Principal);

    fn get_property(&self, id: PropertyId) -> Option<Property>;

    /// Returns the replaced record, if any.
    fn insert_property(&mut self, id: PropertyId, property: Property) -> Option<Property>;

    fn delete_property(&mut self, id: PropertyId) -> Option<Property>;

    fn get_request(&self, id: PropertyId) -> Option<VerificationRequest>;

    /// Returns the replaced request, if any.
    fn insert_request(
        &mut self,
        id: PropertyId,
        request: VerificationRequest,
    ) -> Option<VerificationRequest>;

    fn delete_request(&mut self, id: PropertyId) -> Option<VerificationRequest>;

    /// All ids in the `Properties` map, unordered.
    fn property_ids(&self) -> Vec<PropertyId>;

    /// All ids in the `VerificationRequests` map, unordered.
    fn request_ids(&self) -> Vec<PropertyId>;

    fn has_property(&self, id: PropertyId) -> bool {
        self.get_property(id).is_some()
    }

    fn has_request(&self, id: PropertyId) -> bool {
        self.get_request(id).is_some()
    }
}

// =============================================================================
// LOGICAL CLOCK
// =============================================================================

/// Monotonically non-decreasing counter used to timestamp records.
pub trait LogicalClock: Send + Sync {
    fn now(&self) -> BlockHeight;
}

impl<T: LogicalClock + ?Sized> LogicalClock for Arc<T> {
    fn now(&self) -> BlockHeight {
        (**self).now()
    }
}

// =============================================================================
// EVENT SINK
// =============================================================================

/// Receives every applied state transition, in application order.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: RegistryEvent);
}

impl<T: EventSink + ?Sized> EventSink for Arc<T> {
    fn emit(&self, event: RegistryEvent) {
        (**self).emit(event);
    }
}
