//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod admin_user_repo;
pub mod car_repo;
pub mod lead_repo;
pub mod session_repo;
pub mod setting_repo;

pub use admin_user_repo::AdminUserRepo;
pub use car_repo::CarRepo;
pub use lead_repo::LeadRepo;
pub use session_repo::AdminSessionRepo;
pub use setting_repo::SettingRepo;
