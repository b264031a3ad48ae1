//! # pagecursor
//!
//! A minimal, Rust-native client kit for lazily consuming paginated REST
//! APIs: a remote, page-delimited list behaves like one in-memory ordered
//! sequence, and pages are fetched only as the consumer demands elements.
//!
//! ## Features
//!
//! - **Lazy paging**: positional access, full iteration, and slice-style
//!   range views each fetch the minimum number of pages
//! - **Permanent buffering**: a page is fetched at most once per cursor;
//!   buffered elements are never dropped or reordered
//! - **Structured navigation**: RFC 5988 `Link` headers drive the
//!   cursor-advance protocol
//! - **Pluggable transport**: any `PageTransport` works; the bundled
//!   reqwest transport adds retry, backoff, rate limiting, and bearer auth
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pagecursor::{HttpTransport, JsonFactory, PagedCursor, Result};
//! use futures::TryStreamExt;
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let transport = Arc::new(HttpTransport::new("https://api.example.com/v1")?);
//!
//!     let cursor = PagedCursor::new(
//!         transport,
//!         JsonFactory::<serde_json::Value>::new(),
//!         "/widgets",
//!         HashMap::new(),
//!     );
//!
//!     // Positional access fetches exactly the pages it needs
//!     let tenth = cursor.element_at(9).await?;
//!
//!     // Range views stay lazy too
//!     if let Some(view) = cursor.get(5..15).await?.into_range() {
//!         let slice = view.collect().await?;
//!     }
//!
//!     // Full iteration re-walks the buffer, then grows to exhaustion
//!     let all: Vec<_> = cursor.stream().try_collect().await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(missing_docs)] // TODO: document the remaining public items before 1.0

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for pagecursor
pub mod error;

/// Common types and type aliases
pub mod types;

/// Element factories (raw record -> domain object)
pub mod factory;

/// Page transport seam and the reqwest-backed implementation
pub mod transport;

/// The lazy paginated collection and its range views
pub mod cursor;

// ============================================================================
// Re-exports
// ============================================================================

pub use cursor::{PagedCursor, RangeView, Selection, DEFAULT_PER_PAGE, PER_PAGE_PARAM};
pub use error::{Error, Result};
pub use factory::{ElementFactory, FnFactory, JsonFactory};
pub use transport::{
    HttpTransport, HttpTransportConfig, PageResponse, PageTransport, RequestConfig,
    TransportHandle,
};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
