//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the consumer routes
//! - Mount the client provider at the root so every route can look it up
//! - Wire up middleware (tracing, timeouts)
//! - Serve on a listener until the shutdown future resolves

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::{extract::Query, routing::get, Json, Router};
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::client::{NamedResourcePage, ResourceClient};
use crate::config::AppConfig;
use crate::http::response::ApiError;
use crate::provider::{get_client, ClientProvider, ClientProviderLayer};

/// Query string of the list route. Missing bounds use the client defaults.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

/// HTTP server exposing the session client to its routes.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a server around the session's single client.
    pub fn new(config: AppConfig, client: Arc<ResourceClient>) -> Self {
        let provider = ClientProvider::new(client);
        let router = Self::build_router(&config, provider);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &AppConfig, provider: ClientProvider) -> Router {
        Router::new()
            .route("/pokemon", get(list_pokemon))
            .route("/health", get(health))
            .layer(ClientProviderLayer::new(provider))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.server.request_timeout_secs,
            )))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until `shutdown` resolves.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The router, for driving requests without a socket.
    pub fn into_router(self) -> Router {
        self.router
    }
}

async fn list_pokemon(Query(query): Query<PageQuery>) -> Result<Json<NamedResourcePage>, ApiError> {
    let client = get_client();
    let page = client.list_page(query.offset, query.limit).await?;
    Ok(Json(page))
}

async fn health() -> &'static str {
    "OK"
}

/// Resolve on Ctrl+C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn server() -> HttpServer {
        let mut config = AppConfig::default();
        config.client.base_url = "http://127.0.0.1:1/api/v2".into();
        config.client.no_proxy = true;
        let client = Arc::new(ResourceClient::new(&config.client).unwrap());
        HttpServer::new(config, client)
    }

    #[tokio::test]
    async fn test_health_route() {
        let response = server()
            .into_router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_bad_gateway() {
        let response = server()
            .into_router()
            .oneshot(Request::get("/pokemon").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_invalid_query_is_rejected() {
        let response = server()
            .into_router()
            .oneshot(Request::get("/pokemon?limit=-3").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
