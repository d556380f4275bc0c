//! Row models and the DTOs repositories accept.

pub mod admin_user;
pub mod car;
pub mod lead;
pub mod session;
pub mod setting;
