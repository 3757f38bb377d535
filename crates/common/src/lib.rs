//! DashView Common Utilities
//!
//! Shared infrastructure for all DashView crates:
//! - Error types and result aliases
//! - Clock and frame-cadence utilities for export timing
//! - Tracing/logging initialization
//! - Configuration loading

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;

pub use clock::*;
pub use config::*;
pub use error::*;
