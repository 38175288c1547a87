//! Integration tests for the database infrastructure
//!
//! These tests verify that the PostgreSQL database is properly configured
//! and accessible from the backend through the `DATABASE_*` environment
//! variables.

use common::database::{DatabaseConfig, connect, health_check};
use sqlx::Row;

/// Test that verifies PostgreSQL is accessible and can perform basic
/// operations over a single owned connection
#[tokio::test]
async fn test_database_infrastructure() -> Result<(), Box<dyn std::error::Error>> {
    let config = DatabaseConfig::from_env()?;
    let mut conn = connect(&config).await?;

    // Verify PostgreSQL connectivity
    assert!(health_check(&mut conn).await?, "Database health check failed");

    // Perform a simple query to test database connectivity
    let row = sqlx::query("SELECT 1 as result").fetch_one(&mut conn).await?;

    let result: i32 = row.get("result");
    assert_eq!(result, 1, "PostgreSQL simple query test failed");

    Ok(())
}
