//! HTTP API for the storefront catalog
//!
//! Routes live under `/api` for categories, products and tags, plus
//! `/health` and `/ready` probes. Handlers hold an [`AppState`] with the
//! catalog store and report failures as [`WebError`].

pub mod routes;
pub mod server;

mod error;
mod extract;
mod state;

pub use error::{Result, WebError};
pub use server::{build_router, start_server};
pub use state::AppState;
pub use storefront_config::ServerConfig;
