//! Typed PokeAPI list client with a scope-bound client provider.

pub mod client;
pub mod config;
pub mod http;
pub mod observability;
pub mod provider;

pub use client::{NamedResourcePage, NamedResourceRef, ResourceClient, TransportError};
pub use config::AppConfig;
pub use http::HttpServer;
pub use provider::{get_client, try_get_client, ClientProvider, WiringError};
