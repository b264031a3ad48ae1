//! Element factories
//!
//! A factory turns one raw page record into a typed domain object. The
//! shared transport handle is passed alongside the record so domain objects
//! can keep it for onward calls of their own.

use crate::error::Result;
use crate::transport::TransportHandle;
use crate::types::JsonValue;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

/// Builds one domain object from one raw page record.
///
/// Null records never reach a factory; the cursor skips them while decoding
/// a page.
pub trait ElementFactory: Send + Sync {
    /// The domain object this factory produces
    type Item: Clone + Send;

    /// Build one domain object from a raw record
    fn build(&self, transport: &TransportHandle, record: JsonValue) -> Result<Self::Item>;
}

/// Factory that deserializes records into `T` with serde.
///
/// The transport handle is ignored; use [`FnFactory`] when domain objects
/// need to capture it.
pub struct JsonFactory<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonFactory<T> {
    /// Create a new serde-backed factory
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for JsonFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for JsonFactory<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for JsonFactory<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonFactory").finish()
    }
}

impl<T> ElementFactory for JsonFactory<T>
where
    T: DeserializeOwned + Clone + Send + Sync,
{
    type Item = T;

    fn build(&self, _transport: &TransportHandle, record: JsonValue) -> Result<T> {
        Ok(serde_json::from_value(record)?)
    }
}

/// Factory backed by a closure.
///
/// The closure receives the shared transport handle and the raw record,
/// mirroring the construction convention of domain objects that issue
/// requests of their own.
pub struct FnFactory<F> {
    build: F,
}

impl<F> FnFactory<F> {
    /// Wrap a closure as an element factory
    pub fn new(build: F) -> Self {
        Self { build }
    }
}

impl<T, F> ElementFactory for FnFactory<F>
where
    F: Fn(&TransportHandle, JsonValue) -> Result<T> + Send + Sync,
    T: Clone + Send,
{
    type Item = T;

    fn build(&self, transport: &TransportHandle, record: JsonValue) -> Result<T> {
        (self.build)(transport, record)
    }
}
