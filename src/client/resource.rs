//! Typed client for the paginated named-resource listing.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::client::error::{ClientError, TransportResult};
use crate::client::types::{Endpoint, NamedResourcePage};
use crate::config::ClientConfig;

/// Public API root used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Offset used when the caller supplies none (or zero).
pub const DEFAULT_OFFSET: u32 = 0;

/// Page size used when the caller supplies none (or zero).
pub const DEFAULT_LIMIT: u32 = 20;

/// Substitute defaults for absent or zero page bounds.
///
/// Zero counts as "not supplied", so `limit = Some(0)` asks for 20 results.
pub fn resolve_page_bounds(offset: Option<u32>, limit: Option<u32>) -> (u32, u32) {
    let offset = offset.filter(|&n| n != 0).unwrap_or(DEFAULT_OFFSET);
    let limit = limit.filter(|&n| n != 0).unwrap_or(DEFAULT_LIMIT);
    (offset, limit)
}

/// Client bound to one API root and one resource collection.
///
/// Holds the HTTP transport for its whole lifetime. The base URL is fixed at
/// construction; one instance is meant to serve a whole session.
#[derive(Debug)]
pub struct ResourceClient {
    http: Client,
    base_url: Url,
    /// `<base>/<endpoint>`, without query.
    list_url: Url,
    endpoint: Endpoint,
}

impl ResourceClient {
    /// Create a client for the `pokemon` collection under `config.base_url`.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| ClientError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        if base_url.scheme() != "http" && base_url.scheme() != "https" {
            return Err(ClientError::InvalidBaseUrl {
                url: config.base_url.clone(),
                reason: format!("unsupported scheme '{}'", base_url.scheme()),
            });
        }

        let endpoint = Endpoint::Pokemon;
        let list_url = endpoint_url(&base_url, endpoint).ok_or_else(|| {
            ClientError::InvalidBaseUrl {
                url: config.base_url.clone(),
                reason: "URL cannot carry a path".to_string(),
            }
        })?;

        let mut builder = Client::builder().timeout(Duration::from_secs(config.timeout_secs));
        if config.no_proxy {
            builder = builder.no_proxy();
        }
        let http = builder.build()?;

        tracing::info!(
            base_url = %base_url,
            endpoint = %endpoint,
            timeout_secs = config.timeout_secs,
            "Resource client initialized"
        );

        Ok(Self {
            http,
            base_url,
            list_url,
            endpoint,
        })
    }

    /// Create a client against `base_url` with otherwise default settings.
    pub fn with_base_url(base_url: &str) -> Result<Self, ClientError> {
        Self::new(&ClientConfig {
            base_url: base_url.to_string(),
            ..ClientConfig::default()
        })
    }

    /// Exact URL `list_page` requests for the given bounds.
    pub fn page_url(&self, offset: Option<u32>, limit: Option<u32>) -> Url {
        let (offset, limit) = resolve_page_bounds(offset, limit);
        let mut url = self.list_url.clone();
        url.query_pairs_mut()
            .append_pair("offset", &offset.to_string())
            .append_pair("limit", &limit.to_string());
        url
    }

    /// Fetch one page of the collection.
    ///
    /// Issues exactly one GET. Connection failures, non-success statuses and
    /// undecodable bodies all surface as [`TransportError`](crate::client::TransportError).
    pub async fn list_page(
        &self,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> TransportResult<NamedResourcePage> {
        let url = self.page_url(offset, limit);
        let (offset, limit) = resolve_page_bounds(offset, limit);
        tracing::debug!(
            endpoint = %self.endpoint,
            offset,
            limit,
            url = %url,
            "Listing resources"
        );

        let resp = self.http.get(url).send().await?.error_for_status()?;
        let text = resp.text().await?;
        let page: NamedResourcePage = serde_json::from_str(&text)?;

        tracing::debug!(
            count = page.count,
            results = page.results.len(),
            "Page decoded"
        );
        Ok(page)
    }

    /// The configured API root.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The collection this client lists.
    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }
}

fn endpoint_url(base: &Url, endpoint: Endpoint) -> Option<Url> {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);
    {
        let mut segments = url.path_segments_mut().ok()?;
        segments.pop_if_empty().push(endpoint.as_str());
    }
    Some(url)
}
