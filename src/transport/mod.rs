//! Transport module
//!
//! The collaborator seam the paged cursor fetches through, plus the default
//! reqwest-backed implementation.
//!
//! # Overview
//!
//! - [`PageTransport`] - object-safe trait: one GET, one decoded page
//! - [`PageResponse`] - array-shaped records plus navigation links
//! - [`HttpTransport`] - reqwest implementation with retry, backoff, rate
//!   limiting, bearer auth, and `Link` header parsing
//! - CRUD glue verbs (`get_json`, `post_json`, `put_json`, `delete_json`)
//!   for one-request-per-endpoint resource methods

mod http;
mod links;
mod rate_limit;
mod types;

pub use http::{HttpTransport, HttpTransportConfig, HttpTransportConfigBuilder, RequestConfig};
pub use links::{parse_link_header, reduce_locator, REL_LAST, REL_NEXT};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
pub use types::{PageResponse, PageTransport, TransportHandle};
