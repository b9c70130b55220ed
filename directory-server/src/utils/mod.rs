//! Utility module - shared helpers and types
//!
//! - [`AppError`] - application error type
//! - [`AppResult`] - handler result alias
//! - logger and date helpers

pub mod error;
pub mod logger;
pub mod result;
pub mod time;

pub use error::{AppError, AppResponse};
pub use result::AppResult;
