//! # IPC Boundary
//!
//! Decodes JSON call envelopes, dispatches them to the registry service and
//! encodes tagged results. This is where the calling convention is enforced.

pub mod errors;
pub mod handler;
pub mod methods;
pub mod payloads;

pub use errors::IpcError;
pub use handler::{InMemoryHandler, RegistryHandler};
pub use methods::{ArgumentLimits, Method};
pub use payloads::{CallRequest, CallResponse, CallResult};
