/// Shared infrastructure concerns
///
/// Infrastructure shared across modules: the connection pool and the handle
/// that owns its lifecycle.
pub mod database;
pub mod database_state;

// Re-exports for convenience
pub use database::{Database, DbConnection, DbPool, PoolStatus};
pub use database_state::{DatabaseHandle, DatabaseState};
