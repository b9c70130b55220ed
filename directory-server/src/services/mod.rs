//! External collaborator services

pub mod media;

pub use media::{MediaStore, RemoteMediaStore};
