//! API route modules
//!
//! - [`health`] - health check
//! - [`employees`] - employee directory endpoints

pub mod employees;
pub mod health;
