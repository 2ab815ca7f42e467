//! annotext - document/query text-annotation service.
//!
//! Core library exposing domain modules for workspace crates.

// Model types use `from_str` methods that return Option<Self>,
// not Result<Self, Error> as std::str::FromStr requires.
#![allow(clippy::should_implement_trait)]

pub mod config;
pub mod error;
pub mod models;
pub mod provider;
pub mod store;
