//! Cryptid tracker: REST backend for users, cryptids and sighting reports on PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod response;
pub mod routes;
pub mod schemas;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use response::{success_many, success_one, success_one_ok};
pub use routes::{api_routes, app, common_routes, common_routes_with_ready};
pub use service::{CryptidService, SightingService, UserService};
pub use state::AppState;
pub use store::{connect, ensure_database_exists};
