pub mod registry_service;

pub use registry_service::{InMemoryRegistry, RegistryService, RegistryStats};
