//! HTTP surface of the bootstrap server.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum router, TraceLayer, TimeoutLayer)
//!     → ClientProviderLayer (binds the session client)
//!     → route handler calls get_client().list_page(..)
//!     → response.rs (upstream failures become 502)
//! ```

pub mod response;
pub mod server;

pub use response::ApiError;
pub use server::{shutdown_signal, HttpServer, PageQuery};
