pub mod auth;
pub mod cars;
pub mod dashboard;
pub mod leads;
pub mod public;
pub mod settings;
