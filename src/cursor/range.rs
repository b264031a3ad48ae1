//! Read-only strided views over a paged cursor

use super::paged::PagedCursor;
use crate::error::Result;
use crate::factory::ElementFactory;
use futures::{Stream, TryStreamExt};

/// A possibly-bounded, possibly-strided view over a [`PagedCursor`].
///
/// A view is cheap and disposable: it borrows the cursor, holds only its
/// bounds, and re-derives visibility from the cursor's buffered length and
/// exhaustion flag on every iteration. Iterating a view triggers cursor
/// growth exactly as positional access does, and no further.
pub struct RangeView<'a, F: ElementFactory> {
    cursor: &'a PagedCursor<F>,
    start: usize,
    stop: Option<usize>,
    step: usize,
}

impl<'a, F: ElementFactory> RangeView<'a, F> {
    /// # Panics
    ///
    /// Panics if `step` is zero. Negative strides are unrepresentable.
    pub(crate) fn new(
        cursor: &'a PagedCursor<F>,
        start: usize,
        stop: Option<usize>,
        step: usize,
    ) -> Self {
        assert!(step > 0, "range step must be positive");
        Self {
            cursor,
            start,
            stop,
            step,
        }
    }

    /// Lazily iterate the positions of this view in ascending order.
    ///
    /// Terminates at the `stop` bound when one is set, or silently once the
    /// cursor is exhausted short of it: an open-ended or over-long range
    /// yields fewer elements rather than failing.
    pub fn stream(&self) -> impl Stream<Item = Result<F::Item>> + 'a {
        let cursor = self.cursor;
        let stop = self.stop;
        let step = self.step;

        futures::stream::try_unfold(self.start, move |index| async move {
            if stop.is_some_and(|stop| index >= stop) {
                return Ok(None);
            }
            if !cursor.is_larger_than(index).await {
                return Ok(None);
            }
            match cursor.element_at(index).await {
                Ok(item) => Ok(Some((item, index + step))),
                Err(err) if err.is_out_of_range() => Ok(None),
                Err(err) => Err(err),
            }
        })
    }

    /// Collect the whole view into a vector
    pub async fn collect(&self) -> Result<Vec<F::Item>> {
        self.stream().try_collect().await
    }
}

impl<F: ElementFactory> std::fmt::Debug for RangeView<'_, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeView")
            .field("start", &self.start)
            .field("stop", &self.stop)
            .field("step", &self.step)
            .finish_non_exhaustive()
    }
}
