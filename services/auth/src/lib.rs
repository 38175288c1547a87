//! Authentication lookup for the Conjunto Residencial backend
//!
//! This crate resolves login attempts against the `users` table: given an
//! email address it returns the stored login-relevant record, or nothing
//! when the address is unknown. Password verification, sessions, and the
//! HTTP surface live outside this crate.

pub mod models;
pub mod repositories;

pub use models::User;
pub use repositories::UserRepository;
