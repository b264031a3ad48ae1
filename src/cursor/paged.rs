//! The lazy paginated collection

use super::range::RangeView;
use crate::error::{Error, Result};
use crate::factory::ElementFactory;
use crate::transport::{reduce_locator, TransportHandle, REL_NEXT};
use crate::types::{Index, JsonValue, StringMap};
use futures::Stream;
use tokio::sync::Mutex;
use tracing::debug;

/// Query-parameter key of the page-size hint sent with every fetch
pub const PER_PAGE_PARAM: &str = "per_page";

/// Default page-size hint
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Query-parameter key used by the page-indexed fetch
const PAGE_PARAM: &str = "page";

/// Buffered elements plus the pending next-page locator.
///
/// `elements` is append-only; `next_locator` moves present -> present or
/// present -> absent, never back.
struct CursorState<T> {
    elements: Vec<T>,
    next_locator: Option<String>,
}

/// A remote, page-delimited list presented as one lazily-fetched sequence.
///
/// The cursor buffers every element it has seen and asks the transport for
/// the next page only when a requested position is not yet buffered and a
/// next-page locator is still known. Already-buffered positions are served
/// without network activity.
///
/// All operations take `&self`; the buffered state lives behind an async
/// mutex held across each fetch, so consumers racing on one cursor
/// serialize on growth and each page is fetched at most once.
pub struct PagedCursor<F: ElementFactory> {
    transport: TransportHandle,
    factory: F,
    first_locator: String,
    params: StringMap,
    state: Mutex<CursorState<F::Item>>,
}

/// Result of polymorphic indexing into a cursor
pub enum Selection<'a, F: ElementFactory> {
    /// A single element, fetched as needed
    Item(F::Item),
    /// A lazy view over a range of positions
    Range(RangeView<'a, F>),
}

impl<'a, F: ElementFactory> Selection<'a, F> {
    /// The single element, if this selection is a point
    pub fn into_item(self) -> Option<F::Item> {
        match self {
            Self::Item(item) => Some(item),
            Self::Range(_) => None,
        }
    }

    /// The range view, if this selection is a range
    pub fn into_range(self) -> Option<RangeView<'a, F>> {
        match self {
            Self::Item(_) => None,
            Self::Range(view) => Some(view),
        }
    }
}

impl<F: ElementFactory> PagedCursor<F> {
    /// Create a cursor over the collection at `locator`.
    ///
    /// `params` is snapshotted and reused for every page fetch; a
    /// `per_page` hint of [`DEFAULT_PER_PAGE`] is added when absent.
    pub fn new(
        transport: TransportHandle,
        factory: F,
        locator: impl Into<String>,
        mut params: StringMap,
    ) -> Self {
        params
            .entry(PER_PAGE_PARAM.to_string())
            .or_insert_with(|| DEFAULT_PER_PAGE.to_string());
        let first_locator = locator.into();

        Self {
            state: Mutex::new(CursorState {
                elements: Vec::new(),
                next_locator: Some(first_locator.clone()),
            }),
            transport,
            factory,
            first_locator,
            params,
        }
    }

    /// Get the element at a zero-based position, fetching pages as needed.
    ///
    /// Returns [`Error::OutOfRange`] when the position lies past the true
    /// length of the now-exhausted collection.
    pub async fn element_at(&self, index: usize) -> Result<F::Item> {
        let mut state = self.state.lock().await;
        while state.elements.len() <= index && state.next_locator.is_some() {
            self.grow_locked(&mut state).await?;
        }

        match state.elements.get(index) {
            Some(item) => Ok(item.clone()),
            None => Err(Error::out_of_range(index, state.elements.len())),
        }
    }

    /// Lazily iterate the whole collection.
    ///
    /// Each call produces a fresh iteration that re-walks already-buffered
    /// elements without refetching, then keeps growing until exhaustion.
    pub fn stream(&self) -> impl Stream<Item = Result<F::Item>> + '_ {
        futures::stream::try_unfold(0usize, move |index| async move {
            match self.element_at(index).await {
                Ok(item) => Ok(Some((item, index + 1))),
                Err(err) if err.is_out_of_range() => Ok(None),
                Err(err) => Err(err),
            }
        })
    }

    /// Polymorphic indexing: a point key resolves to one element, a range
    /// key to a [`RangeView`].
    pub async fn get(&self, key: impl Into<Index>) -> Result<Selection<'_, F>> {
        match key.into() {
            Index::Point(index) => Ok(Selection::Item(self.element_at(index).await?)),
            Index::Range { start, stop, step } => {
                Ok(Selection::Range(RangeView::new(self, start, stop, step)))
            }
        }
    }

    /// True iff a next-page locator is still known
    pub async fn has_more(&self) -> bool {
        self.state.lock().await.next_locator.is_some()
    }

    /// True iff position `index` is buffered or the cursor can still grow
    pub async fn is_larger_than(&self, index: usize) -> bool {
        let state = self.state.lock().await;
        state.elements.len() > index || state.next_locator.is_some()
    }

    /// Number of elements buffered so far
    pub async fn buffered_len(&self) -> usize {
        self.state.lock().await.elements.len()
    }

    /// Fetch exactly one page and append its elements to the buffer.
    ///
    /// Returns only the newly added elements. On an exhausted cursor this
    /// is a no-op returning an empty batch.
    pub async fn grow(&self) -> Result<Vec<F::Item>> {
        let mut state = self.state.lock().await;
        self.grow_locked(&mut state).await
    }

    /// Fetch a single page by zero-based page number.
    ///
    /// Issues a one-shot request against the first locator with the
    /// original parameters plus a 1-based `page` hint (omitted for page 0).
    /// The buffered state and the next-page locator are untouched; every
    /// call returns a fresh batch even for pages already buffered through
    /// normal growth.
    pub async fn fetch_page(&self, page: usize) -> Result<Vec<F::Item>> {
        let mut params = self.params.clone();
        if page != 0 {
            params.insert(PAGE_PARAM.to_string(), (page + 1).to_string());
        }

        let response = self.transport.get(&self.first_locator, &params).await?;
        self.build_records(response.records)
    }

    async fn grow_locked(&self, state: &mut CursorState<F::Item>) -> Result<Vec<F::Item>> {
        let Some(locator) = state.next_locator.clone() else {
            return Ok(Vec::new());
        };

        debug!("fetching page: {locator}");
        let response = self.transport.get(&locator, &self.params).await?;

        // Advance the locator only once the page decoded in full, so a
        // failed page is re-fetched instead of skipped.
        let added = self.build_records(response.records)?;
        state.next_locator = response
            .links
            .get(REL_NEXT)
            .map(|url| reduce_locator(url, self.transport.base_url()));

        state.elements.extend(added.iter().cloned());
        Ok(added)
    }

    /// Build domain objects from raw records, skipping null entries
    fn build_records(&self, records: Vec<JsonValue>) -> Result<Vec<F::Item>> {
        let mut items = Vec::with_capacity(records.len());
        for record in records {
            if record.is_null() {
                continue;
            }
            items.push(self.factory.build(&self.transport, record)?);
        }
        Ok(items)
    }
}

impl<F: ElementFactory> std::fmt::Debug for PagedCursor<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PagedCursor")
            .field("first_locator", &self.first_locator)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}
