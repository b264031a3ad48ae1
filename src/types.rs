//! Common types used throughout pagecursor
//!
//! This module contains shared type definitions, type aliases,
//! and the indexing key used by the paged cursor.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

// ============================================================================
// Indexing Key
// ============================================================================

/// Indexing key for a paged cursor.
///
/// A cursor can be addressed by a single position or by a slice-style
/// range. The two shapes are dispatched explicitly; there is no runtime
/// type inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Index {
    /// A single zero-based position
    Point(usize),
    /// A half-open range with an optional exclusive upper bound
    Range {
        /// First position included
        start: usize,
        /// Exclusive upper bound, open-ended if absent
        stop: Option<usize>,
        /// Stride between positions, must be positive
        step: usize,
    },
}

impl Index {
    /// Create a range key with an explicit stride.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero. A zero stride is a programmer error,
    /// not a recoverable condition.
    pub fn range(start: usize, stop: Option<usize>, step: usize) -> Self {
        assert!(step > 0, "range step must be positive");
        Self::Range { start, stop, step }
    }

    /// Check if this is a point key
    pub fn is_point(&self) -> bool {
        matches!(self, Self::Point(_))
    }

    /// Check if this is a range key
    pub fn is_range(&self) -> bool {
        matches!(self, Self::Range { .. })
    }
}

impl From<usize> for Index {
    fn from(index: usize) -> Self {
        Self::Point(index)
    }
}

impl From<Range<usize>> for Index {
    fn from(range: Range<usize>) -> Self {
        Self::Range {
            start: range.start,
            stop: Some(range.end),
            step: 1,
        }
    }
}

impl From<RangeFrom<usize>> for Index {
    fn from(range: RangeFrom<usize>) -> Self {
        Self::Range {
            start: range.start,
            stop: None,
            step: 1,
        }
    }
}

impl From<RangeTo<usize>> for Index {
    fn from(range: RangeTo<usize>) -> Self {
        Self::Range {
            start: 0,
            stop: Some(range.end),
            step: 1,
        }
    }
}

impl From<RangeFull> for Index {
    fn from(_: RangeFull) -> Self {
        Self::Range {
            start: 0,
            stop: None,
            step: 1,
        }
    }
}

// ============================================================================
// Backoff Type
// ============================================================================

/// Type of backoff for transport retries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackoffType {
    /// Constant delay between retries
    Constant,
    /// Linear increase in delay
    Linear,
    /// Exponential increase in delay
    #[default]
    Exponential,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_from_usize() {
        assert_eq!(Index::from(7), Index::Point(7));
        assert!(Index::from(0).is_point());
    }

    #[test]
    fn test_index_from_ranges() {
        assert_eq!(
            Index::from(2..9),
            Index::Range {
                start: 2,
                stop: Some(9),
                step: 1
            }
        );
        assert_eq!(
            Index::from(4..),
            Index::Range {
                start: 4,
                stop: None,
                step: 1
            }
        );
        assert_eq!(
            Index::from(..6),
            Index::Range {
                start: 0,
                stop: Some(6),
                step: 1
            }
        );
        assert!(Index::from(..).is_range());
    }

    #[test]
    fn test_index_range_with_step() {
        let key = Index::range(0, Some(10), 3);
        assert_eq!(
            key,
            Index::Range {
                start: 0,
                stop: Some(10),
                step: 3
            }
        );
    }

    #[test]
    #[should_panic(expected = "range step must be positive")]
    fn test_index_zero_step_panics() {
        let _ = Index::range(0, None, 0);
    }

    #[test]
    fn test_backoff_type_serde() {
        let backoff: BackoffType = serde_json::from_str("\"linear\"").unwrap();
        assert_eq!(backoff, BackoffType::Linear);

        let json = serde_json::to_string(&BackoffType::Exponential).unwrap();
        assert_eq!(json, "\"exponential\"");
    }
}
