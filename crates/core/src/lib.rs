//! Domain types, validation rules, and pure business logic for the
//! car-rental backend.
//!
//! Nothing in this crate performs I/O. The `db` crate persists the types
//! defined here and the `api` crate exposes them over HTTP.

pub mod car;
pub mod catalog;
pub mod coerce;
pub mod contact;
pub mod dashboard;
pub mod error;
pub mod lead;
pub mod nullable;
pub mod pricing;
pub mod settings;
pub mod types;
