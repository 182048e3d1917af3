#![deny(
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

//! Shared leaf types for the campus location resolver.
//!
//! Everything here is pure and allocation-light: the text normalizer,
//! the two place categories numeric references can disambiguate between,
//! and the locale heuristics used to pick a reply language.

pub mod kind;
pub mod locale;
pub mod text;

pub use kind::PlaceKind;
pub use locale::Locale;
pub use text::normalize;
