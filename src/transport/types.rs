//! Transport types and traits
//!
//! Defines the collaborator seam between the paged cursor and whatever
//! performs the actual page fetches.

use crate::error::Result;
use crate::types::{JsonValue, StringMap};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

/// Shared handle to a page transport.
///
/// Cursors and domain objects hold the transport through this handle; the
/// transport is shared, never owned, and never reconfigured by its users.
pub type TransportHandle = Arc<dyn PageTransport>;

/// One decoded page of a remote collection
#[derive(Debug, Clone, Default)]
pub struct PageResponse {
    /// Raw records in remote order (the array-shaped body)
    pub records: Vec<JsonValue>,
    /// Navigation links advertised by the response: relation name
    /// (`"next"`, `"last"`, ...) to absolute URL
    pub links: HashMap<String, String>,
}

impl PageResponse {
    /// Create a response holding the given records and no links
    pub fn new(records: Vec<JsonValue>) -> Self {
        Self {
            records,
            links: HashMap::new(),
        }
    }

    /// Attach a navigation link for the given relation
    #[must_use]
    pub fn with_link(mut self, rel: impl Into<String>, url: impl Into<String>) -> Self {
        self.links.insert(rel.into(), url.into());
        self
    }

    /// Get the advertised URL for a relation, if any
    pub fn link(&self, rel: &str) -> Option<&str> {
        self.links.get(rel).map(String::as_str)
    }

    /// Number of records in this page
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if this page holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// A transport capable of fetching one page of a remote collection.
///
/// The cursor only ever issues GET requests through this trait. Connection
/// handling, authentication, retries, and timeouts are the implementation's
/// concern and surface here as ordinary fetch errors.
#[async_trait]
pub trait PageTransport: Send + Sync {
    /// Perform one GET against `locator` with the given query parameters.
    ///
    /// `locator` is either a path relative to [`base_url`](Self::base_url)
    /// or a full absolute URL.
    async fn get(&self, locator: &str, params: &StringMap) -> Result<PageResponse>;

    /// The API base URL this transport resolves relative locators against
    fn base_url(&self) -> &str;
}
