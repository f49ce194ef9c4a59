pub mod config;
pub mod error;
pub mod loader;
pub mod map;
pub mod output;
pub mod record;
pub mod reports;
