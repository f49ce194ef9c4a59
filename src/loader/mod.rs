//! Dataset loading and normalization.
//!
//! [`load_records`] and [`load_boundaries`] read a file every time they are
//! called. [`DatasetCache`] wraps both so that repeated loads of an unchanged
//! file reuse the first result.

mod boundaries;
mod cache;
mod records;

pub use boundaries::{ProvinceBoundary, load_boundaries};
pub use cache::{DatasetCache, FileSignature};
pub use records::{load_records, parse_happen_date, parse_records, strip_parenthesized};
