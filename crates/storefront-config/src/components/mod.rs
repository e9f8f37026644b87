//! Configuration sections

mod database;
mod logging;
mod server;

pub use database::DatabaseConfig;
pub use logging::LoggingConfig;
pub use server::ServerConfig;
