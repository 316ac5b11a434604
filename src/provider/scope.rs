//! Task-local binding of the session's client.

use std::future::Future;
use std::sync::Arc;

use thiserror::Error;
use tokio::task::futures::TaskLocalFuture;

use crate::client::ResourceClient;

tokio::task_local! {
    static CURRENT_CLIENT: Arc<ResourceClient>;
}

/// Client lookup happened outside any provider scope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("No ResourceClient set, run inside ClientProvider::scope or mount ClientProviderLayer")]
pub struct WiringError;

/// Makes one client reachable by lookup from everything run inside its scope.
///
/// Does not own the client: it is constructed by the bootstrap and shared.
/// Scopes nest, and the innermost provider wins. Tasks spawned from inside a
/// scope start outside of it.
#[derive(Debug, Clone)]
pub struct ClientProvider {
    client: Arc<ResourceClient>,
}

impl ClientProvider {
    pub fn new(client: Arc<ResourceClient>) -> Self {
        Self { client }
    }

    /// Run `fut` with this provider's client bound.
    pub fn scope<F>(&self, fut: F) -> TaskLocalFuture<Arc<ResourceClient>, F>
    where
        F: Future,
    {
        CURRENT_CLIENT.scope(self.client.clone(), fut)
    }

    /// Run `f` synchronously with this provider's client bound.
    pub fn sync_scope<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        CURRENT_CLIENT.sync_scope(self.client.clone(), f)
    }

    /// The bound client.
    pub fn client(&self) -> &Arc<ResourceClient> {
        &self.client
    }
}

/// Look up the client bound to the current scope.
pub fn try_get_client() -> Result<Arc<ResourceClient>, WiringError> {
    CURRENT_CLIENT.try_with(Arc::clone).map_err(|_| WiringError)
}

/// Look up the client bound to the current scope.
///
/// # Panics
/// Outside a provider scope. That is a wiring bug in the caller, not a
/// runtime condition; use [`try_get_client`] to probe instead.
pub fn get_client() -> Arc<ResourceClient> {
    match try_get_client() {
        Ok(client) => client,
        Err(e) => panic!("{}", e),
    }
}
