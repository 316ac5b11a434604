//! Tower middleware that mounts a [`ClientProvider`] around a service.

use std::sync::Arc;
use std::task::{Context, Poll};

use tokio::task::futures::TaskLocalFuture;
use tower::{Layer, Service};

use crate::client::ResourceClient;
use crate::provider::scope::ClientProvider;

/// Binds the provider's client for the duration of every request.
#[derive(Debug, Clone)]
pub struct ClientProviderLayer {
    provider: ClientProvider,
}

impl ClientProviderLayer {
    pub fn new(provider: ClientProvider) -> Self {
        Self { provider }
    }
}

impl<S> Layer<S> for ClientProviderLayer {
    type Service = ClientProviderService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ClientProviderService {
            inner,
            provider: self.provider.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClientProviderService<S> {
    inner: S,
    provider: ClientProvider,
}

impl<S, Req> Service<Req> for ClientProviderService<S>
where
    S: Service<Req>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = TaskLocalFuture<Arc<ResourceClient>, S::Future>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Req) -> Self::Future {
        self.provider.scope(self.inner.call(req))
    }
}
