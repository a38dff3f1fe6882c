//! # Driving Ports (API - Inbound)
//!
//! The registry's public operations. Mutating calls take the authenticated
//! sender supplied by the host; read-only calls take none and never fail.

use crate::domain::{
    DocumentsHash, Principal, Property, PropertyId, PropertyValue, RegistryError,
    VerificationRequest,
};

/// Primary API of the property verification registry.
pub trait RegistryApi {
    // === Mutating ===

    /// Transfer admin rights. Only the current admin may call this.
    fn set_admin(&mut self, sender: &Principal, new_admin: Principal)
        -> Result<bool, RegistryError>;

    /// Open a verification request owned by `sender`.
    ///
    /// Fails with `PropertyExists` if the id is already verified, or
    /// `RequestPending` if a request is already open for it.
    fn submit_property(
        &mut self,
        sender: &Principal,
        property_id: PropertyId,
        address: String,
        documents_hash: DocumentsHash,
    ) -> Result<bool, RegistryError>;

    /// Adjudicate a pending request.
    ///
    /// Returns `Ok(true)` when approved and `Ok(false)` when rejected; the
    /// payload encodes the decision, not success.
    fn verify_property(
        &mut self,
        sender: &Principal,
        property_id: PropertyId,
        value: PropertyValue,
        approve: bool,
    ) -> Result<bool, RegistryError>;

    // === Read-only ===

    fn is_property_verified(&self, property_id: PropertyId) -> bool;

    fn get_property(&self, property_id: PropertyId) -> Option<Property>;

    fn get_verification_request(&self, property_id: PropertyId) -> Option<VerificationRequest>;

    fn get_admin(&self) -> Principal;
}
