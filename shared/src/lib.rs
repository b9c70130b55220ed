//! Shared types for the staff directory service
//!
//! Wire-facing payload and response types used by the server and any
//! future API clients.

pub mod models;

// Re-exports
pub use models::{EmployeeCreate, EmployeeResponse, EmployeeUpdate, MediaAsset};
