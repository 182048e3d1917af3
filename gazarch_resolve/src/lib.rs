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

//! Turn-by-turn resolution of location queries.
//!
//! Given the raw text of one conversation turn plus the conversation's
//! pending disambiguation state, the [`Resolver`] produces exactly one
//! [`Outcome`] following a fixed precedence order, and [`reply::render`]
//! turns that outcome into a Mongolian or English message. The only
//! cross-turn memory is a [`PendingReference`]: a bare building number
//! waiting for its category, one turn deep.

pub mod extract;
mod engine;
mod reply;
mod session;
mod state;

pub use engine::{Outcome, Resolver};
pub use reply::render;
pub use session::{LocationSession, Reply};
pub use state::PendingReference;
