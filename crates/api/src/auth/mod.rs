//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`session`] -- Session tokens, their keyed hashes, and the session cookie.

pub mod password;
pub mod session;
