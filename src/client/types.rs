//! Response shapes of the list endpoints and the resource paths they live at.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Resource collections reachable from the API root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Pokemon,
}

impl Endpoint {
    /// Path segment appended to the base URL.
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Pokemon => "pokemon",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pointer to a resource, retrievable in full at `url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResourceRef {
    /// The name of the referenced resource.
    pub name: String,
    /// The URL of the referenced resource.
    pub url: String,
}

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResourcePage {
    /// Total number of resources across all pages.
    pub count: u64,
    /// URL of the next page, `None` on the last page.
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page, `None` on the first page.
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<NamedResourceRef>,
}
