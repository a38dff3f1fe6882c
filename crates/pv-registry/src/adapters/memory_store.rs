use crate::domain::{Principal, Property, PropertyId, VerificationRequest};
use crate::ports::StateStore;
use std::collections::HashMap;

/// In-memory implementation of `StateStore`.
///
/// Owns both record maps and the admin scalar; one instance per registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryStateStore {
    admin: Principal,
    properties: HashMap<PropertyId, Property>,
    requests: HashMap<PropertyId, VerificationRequest>,
}

impl InMemoryStateStore {
    /// Create an empty store. A registry always has an admin.
    pub fn new(admin: Principal) -> Self {
        Self {
            admin,
            properties: HashMap::new(),
            requests: HashMap::new(),
        }
    }

    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    pub fn request_count(&self) -> usize {
        self.requests.len()
    }
}

impl StateStore for InMemoryStateStore {
    fn admin(&self) -> Principal {
        self.admin.clone()
    }

    fn set_admin(&mut self, admin: Principal) {
        self.admin = admin;
    }

    fn get_property(&self, id: PropertyId) -> Option<Property> {
        self.properties.get(&id).cloned()
    }

    fn insert_property(&mut self, id: PropertyId, property: Property) -> Option<Property> {
        self.properties.insert(id, property)
    }

    fn delete_property(&mut self, id: PropertyId) -> Option<Property> {
        self.properties.remove(&id)
    }

    fn get_request(&self, id: PropertyId) -> Option<VerificationRequest> {
        self.requests.get(&id).cloned()
    }

    fn insert_request(
        &mut self,
        id: PropertyId,
        request: VerificationRequest,
    ) -> Option<VerificationRequest> {
        self.requests.insert(id, request)
    }

    fn delete_request(&mut self, id: PropertyId) -> Option<VerificationRequest> {
        self.requests.remove(&id)
    }

    fn property_ids(&self) -> Vec<PropertyId> {
        self.properties.keys().copied().collect()
    }

    fn request_ids(&self) -> Vec<PropertyId> {
        self.requests.keys().copied().collect()
    }

    fn has_property(&self, id: PropertyId) -> bool {
        self.properties.contains_key(&id)
    }

    fn has_request(&self, id: PropertyId) -> bool {
        self.requests.contains_key(&id)
    }
}
