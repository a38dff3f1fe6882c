//! Registry Service
//!
//! The workflow: authorization and transition rules over a `StateStore`.
//! Every mutating operation checks all preconditions first and only then
//! touches the store, so a rejected call leaves state exactly as it was.

use crate::adapters::{BlockHeightClock, InMemoryEventLog, InMemoryStateStore};
use crate::config::{ConfigError, RegistryConfig};
use crate::domain::{
    check_all_invariants, DocumentsHash, Principal, Property, PropertyId, PropertyLifecycle,
    PropertyValue, RegistryError, VerificationRequest,
};
use crate::events::RegistryEvent;
use crate::ports::inbound::RegistryApi;
use crate::ports::outbound::{EventSink, LogicalClock, StateStore};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Counters maintained by the service.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RegistryStats {
    /// Accepted `submit-property` calls.
    pub submissions: u64,
    /// Requests approved into property records.
    pub approvals: u64,
    /// Requests rejected by the admin.
    pub rejections: u64,
    /// Mutating calls refused with an error code.
    pub rejected_calls: u64,
    /// Accepted `set-admin` calls.
    pub admin_changes: u64,
}

/// The registry workflow.
///
/// Owns its store, so several registries can coexist in one process.
pub struct RegistryService<S: StateStore, C: LogicalClock, E: EventSink> {
    store: S,
    clock: C,
    events: E,
    stats: RegistryStats,
}

/// Registry over the in-memory adapters, with shared handles to the clock
/// and the event log.
pub type InMemoryRegistry =
    RegistryService<InMemoryStateStore, Arc<BlockHeightClock>, Arc<InMemoryEventLog>>;

impl InMemoryRegistry {
    /// Deploy a registry from configuration using the in-memory adapters.
    ///
    /// The event log is bounded by `max_event_log_len`.
    pub fn in_memory(config: &RegistryConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(
            InMemoryStateStore::new(config.initial_admin.clone()),
            Arc::new(BlockHeightClock::new(config.genesis_height)),
            Arc::new(InMemoryEventLog::bounded(config.max_event_log_len)),
        ))
    }
}

impl<S: StateStore, C: LogicalClock, E: EventSink> RegistryService<S, C, E> {
    pub fn new(store: S, clock: C, events: E) -> Self {
        Self {
            store,
            clock,
            events,
            stats: RegistryStats::default(),
        }
    }

    pub fn stats(&self) -> &RegistryStats {
        &self.stats
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn events(&self) -> &E {
        &self.events
    }

    /// Derived lifecycle state for one id.
    pub fn lifecycle(&self, property_id: PropertyId) -> PropertyLifecycle {
        if self.store.has_property(property_id) {
            PropertyLifecycle::Verified
        } else if self.store.has_request(property_id) {
            PropertyLifecycle::Pending
        } else {
            PropertyLifecycle::Empty
        }
    }

    fn require_admin(&self, sender: &Principal) -> Result<(), RegistryError> {
        if *sender == self.store.admin() {
            Ok(())
        } else {
            Err(RegistryError::NotAuthorized {
                sender: sender.to_string(),
            })
        }
    }

    fn reject<T>(&mut self, err: RegistryError) -> Result<T, RegistryError> {
        self.stats.rejected_calls += 1;
        warn!(code = err.code(), error = %err, "Registry call rejected");
        Err(err)
    }

    fn debug_check_invariants(&self) {
        if cfg!(debug_assertions) {
            let violations = check_all_invariants(&self.store);
            debug_assert!(violations.is_empty(), "{violations:?}");
        }
    }
}

impl<S: StateStore, C: LogicalClock, E: EventSink> RegistryApi for RegistryService<S, C, E> {
    #[instrument(skip(self, new_admin), fields(sender = %sender))]
    fn set_admin(
        &mut self,
        sender: &Principal,
        new_admin: Principal,
    ) -> Result<bool, RegistryError> {
        if let Err(err) = self.require_admin(sender) {
            return self.reject(err);
        }

        let previous = self.store.admin();
        self.store.set_admin(new_admin.clone());
        self.stats.admin_changes += 1;

        info!(previous = %previous, new_admin = %new_admin, "Admin changed");
        self.events.emit(RegistryEvent::AdminChanged {
            previous,
            new: new_admin,
        });
        Ok(true)
    }

    #[instrument(skip(self, address, documents_hash), fields(sender = %sender, property_id = %property_id))]
    fn submit_property(
        &mut self,
        sender: &Principal,
        property_id: PropertyId,
        address: String,
        documents_hash: DocumentsHash,
    ) -> Result<bool, RegistryError> {
        if self.store.has_property(property_id) {
            return self.reject(RegistryError::PropertyExists { property_id });
        }
        if self.store.has_request(property_id) {
            return self.reject(RegistryError::RequestPending { property_id });
        }

        let request_time = self.clock.now();
        let request =
            VerificationRequest::pending(sender.clone(), address, documents_hash, request_time);
        self.store.insert_request(property_id, request);
        self.stats.submissions += 1;

        info!(request_time, "Verification request submitted");
        self.events.emit(RegistryEvent::PropertySubmitted {
            property_id,
            owner: sender.clone(),
            request_time,
        });
        self.debug_check_invariants();
        Ok(true)
    }

    #[instrument(skip(self), fields(sender = %sender, property_id = %property_id))]
    fn verify_property(
        &mut self,
        sender: &Principal,
        property_id: PropertyId,
        value: PropertyValue,
        approve: bool,
    ) -> Result<bool, RegistryError> {
        if let Err(err) = self.require_admin(sender) {
            return self.reject(err);
        }
        let Some(request) = self.store.delete_request(property_id) else {
            return self.reject(RegistryError::NoPendingRequest { property_id });
        };

        let owner = request.owner.clone();
        if approve {
            let creation_time = self.clock.now();
            let property = Property::from_approved_request(request, value, creation_time);
            self.store.insert_property(property_id, property);
            self.stats.approvals += 1;

            info!(value, creation_time, "Property verified");
            self.events.emit(RegistryEvent::PropertyApproved {
                property_id,
                owner,
                value,
                creation_time,
            });
        } else {
            self.stats.rejections += 1;

            info!("Verification request rejected");
            self.events
                .emit(RegistryEvent::PropertyRejected { property_id, owner });
        }

        self.debug_check_invariants();
        Ok(approve)
    }

    fn is_property_verified(&self, property_id: PropertyId) -> bool {
        let verified = self
            .store
            .get_property(property_id)
            .is_some_and(|p| p.verified);
        debug!(%property_id, verified, "is-property-verified");
        verified
    }

    fn get_property(&self, property_id: PropertyId) -> Option<Property> {
        debug!(%property_id, "get-property");
        self.store.get_property(property_id)
    }

    fn get_verification_request(&self, property_id: PropertyId) -> Option<VerificationRequest> {
        debug!(%property_id, "get-verification-request");
        self.store.get_request(property_id)
    }

    fn get_admin(&self) -> Principal {
        self.store.admin()
    }
}
