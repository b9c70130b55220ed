//! Staff Directory Server - employee record management service
//!
//! # Module structure
//!
//! ```text
//! directory-server/src/
//! ├── core/          # Config, state, HTTP server
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # Embedded SurrealDB storage layer
//! ├── services/      # External collaborators (media store)
//! ├── middleware/    # Request logging
//! ├── pf.rs          # Provident fund arithmetic
//! └── utils/         # Errors, logger, date helpers
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod pf;
pub mod services;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env` and initialize logging.
///
/// Call once at process start, before reading [`Config`].
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_logger();
    Ok(())
}
