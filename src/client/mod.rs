//! Resource client subsystem.
//!
//! # Data Flow
//! ```text
//! ClientConfig (base URL, timeout)
//!     → resource.rs (ResourceClient: builds <base>/pokemon?offset=&limit=)
//!     → reqwest GET
//!     → types.rs (NamedResourcePage decoded from JSON)
//! ```
//!
//! # Design Decisions
//! - One GET per call: no retries, no caching, no page traversal
//! - Failures are surfaced unmodified as `TransportError`
//! - Absent or zero bounds resolve to offset 0 / limit 20

pub mod error;
pub mod resource;
pub mod types;

pub use error::{ClientError, TransportError, TransportResult};
pub use resource::{
    resolve_page_bounds, ResourceClient, DEFAULT_BASE_URL, DEFAULT_LIMIT, DEFAULT_OFFSET,
};
pub use types::{Endpoint, NamedResourcePage, NamedResourceRef};
