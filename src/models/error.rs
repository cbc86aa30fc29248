//! Error types for pagination

use thiserror::Error;

/// Errors raised by the caller-side pager.
///
/// The page list generator itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    #[error("page {page} is out of range (1..={total_pages})")]
    PageOutOfRange { page: i64, total_pages: i64 },

    #[error("rows per page must be at least 1")]
    InvalidPerPage,

    #[error("{0} rows need more pages than can be counted")]
    TooManyPages(usize),

    #[error("pagination size must be at least {min}, got {0}", min = crate::MIN_PAGINATION_SIZE)]
    InvalidPaginationSize(i64),
}

/// A page list that breaks one of the display invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("list has {len} slots but only {max_length} fit")]
    TooLong { len: usize, max_length: i64 },

    #[error("page {0} must always be shown when truncating")]
    MissingEndpoint(i64),

    #[error("untruncated list must be every page in order")]
    NotContiguous,

    #[error("page {page} follows page {previous}")]
    NotAscending { previous: i64, page: i64 },

    #[error("gap at slot {index} sits next to another gap")]
    AdjacentGaps { index: usize },

    #[error("gap at slot {index} hides no pages")]
    EmptyGap { index: usize },

    #[error("gap at slot {index} is not between two pages")]
    DanglingGap { index: usize },

    #[error("current page {0} is missing")]
    MissingCurrent(i64),
}
