//! User model and related functionality

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Login-relevant view of one row in the `users` table
///
/// Rows pre-exist in storage and are only ever read by this service. The
/// storage columns `clave_hash` and `role_user` are selected under the
/// aliases `password_hash` and `role`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub user_id: i32,
    pub names: String,
    pub surnames: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}
