//! User repository for login lookups

use sqlx::Row;
use tracing::info;

use common::database::{self, DatabaseConfig};
use common::error::{DatabaseError, DatabaseResult};

use crate::models::User;

/// User repository
///
/// Every lookup opens its own connection from the configured database and
/// owns it for the duration of the call; nothing is shared between
/// concurrent lookups.
#[derive(Clone)]
pub struct UserRepository {
    config: DatabaseConfig,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }

    /// Find the login-relevant user record for an email address
    ///
    /// The email travels as a bound parameter, never as SQL text. Returns
    /// `Ok(None)` when no row matches. Connection failures surface as
    /// `DatabaseError::Connection`, execution failures as
    /// `DatabaseError::Query`; neither is swallowed or printed.
    pub async fn find_by_email(&self, email: &str) -> DatabaseResult<Option<User>> {
        info!("Looking up user by email: {}", email);

        let mut conn = database::connect(&self.config).await?;

        let row = tokio::time::timeout(
            self.config.query_timeout,
            sqlx::query(
                r#"
                SELECT user_id, names, surnames, email,
                       clave_hash AS password_hash, role_user AS role
                FROM users
                WHERE email = $1
                "#,
            )
            .bind(email)
            .fetch_optional(&mut conn),
        )
        .await
        .map_err(|_| DatabaseError::Timeout(self.config.query_timeout))?
        .map_err(DatabaseError::Query)?;

        match row {
            Some(row) => {
                let user = User {
                    user_id: row.get("user_id"),
                    names: row.get("names"),
                    surnames: row.get("surnames"),
                    email: row.get("email"),
                    password_hash: row.get("password_hash"),
                    role: row.get("role"),
                };
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }
}
