//! # Property Registry Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── integration/
//! │   ├── flows.rs       # Multi-call scenarios through the JSON boundary
//! │   └── properties.rs  # Randomized call sequences
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p pv-tests
//! cargo test -p pv-tests integration::flows::
//! ```

pub mod integration;
