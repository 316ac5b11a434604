//! Scope-bound client provider.
//!
//! # Data Flow
//! ```text
//! bootstrap constructs one Arc<ResourceClient>
//!     → ClientProvider::new (non-owning share)
//!     → scope()/sync_scope() or ClientProviderLayer (per request)
//!     → get_client() from any code running inside the scope
//! ```
//!
//! # Design Decisions
//! - Backed by a tokio task-local, not a global: lookup only succeeds inside
//!   a bound scope
//! - Lookup outside a scope is a wiring bug: `get_client` panics,
//!   `try_get_client` returns `WiringError`

pub mod layer;
pub mod scope;

pub use layer::{ClientProviderLayer, ClientProviderService};
pub use scope::{get_client, try_get_client, ClientProvider, WiringError};
