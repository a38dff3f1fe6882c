//! # Adapters Layer
//!
//! Concrete implementations of the outbound ports.

pub mod clock;
pub mod event_log;
pub mod memory_store;

pub use clock::BlockHeightClock;
pub use event_log::{InMemoryEventLog, NoopEventSink};
pub use memory_store::InMemoryStateStore;
