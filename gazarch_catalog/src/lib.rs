#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Place catalog loading and indexing.
//!
//! The catalog is a YAML document listing campus places with their
//! display titles, optional category/number, optional map link, and the
//! alias strings users may type. Loading happens once at startup and
//! produces a read-only [`CatalogIndex`] that conversation handlers share
//! freely; a broken catalog file is fatal, a broken individual entry is
//! skipped with a warning.

mod error;
mod index;
mod schema;

pub use error::{CatalogError, Result};
pub use index::CatalogIndex;
pub use schema::{ExclusionEntry, ExclusionSet, PlaceRecord};
