//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! client, provider and http modules emit tracing events
//!     → logging.rs (EnvFilter + fmt layer)
//!     → stdout
//! ```

pub mod logging;
