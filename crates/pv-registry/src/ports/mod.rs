//! # Ports Layer
//!
//! - **Driving Port (Inbound)**: `RegistryApi`
//! - **Driven Ports (Outbound)**: `StateStore`, `LogicalClock`, `EventSink`
//! - No concrete implementations in this module

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
