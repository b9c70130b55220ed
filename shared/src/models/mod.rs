//! Wire models
//!
//! All structs here serialize with camelCase keys — the field names the
//! HTTP API exposes to browser clients.

pub mod employee;
pub mod media;

pub use employee::{EmployeeCreate, EmployeeResponse, EmployeeUpdate};
pub use media::MediaAsset;
