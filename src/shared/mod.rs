// Shared kernel used by every module

pub mod config; // Environment-driven configuration
pub mod errors; // Application error type
pub mod infrastructure; // Connection pool and its lifecycle handle
pub mod utils; // Logging helpers
pub mod validation; // Boundary validation primitives

// Re-exports for convenience
pub use config::{AppConfig, DatabaseConfig};
pub use errors::{AppError, AppResult};
pub use infrastructure::{Database, DatabaseHandle, DatabaseState};
