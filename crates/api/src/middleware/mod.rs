//! Authentication extractors.
//!
//! - [`auth::AuthAdmin`] -- Resolves the admin behind the session cookie.

pub mod auth;
