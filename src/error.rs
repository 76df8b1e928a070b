//! src/error.rs
//!
//! Local-data errors reported while ingesting caller-supplied series.
//!
//! None of these are retryable and none involve external resources; a bad
//! point is excluded from the series and reported alongside the usable data.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    /// A point carried a date string that is not `YYYY-MM-DD`.
    #[error("entity `{entity}`: unparseable date `{raw}`")]
    BadDate { entity: String, raw: String },

    /// A point's date repeats or precedes the previous point in the same
    /// series, violating the strictly-increasing invariant.
    #[error("entity `{entity}`: date `{raw}` is out of order")]
    OutOfOrder { entity: String, raw: String },
}
