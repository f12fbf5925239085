//! Schema bootstrap run once at startup.

use sqlx::MySqlPool;

use crate::InfrastructureError;

/// `table_number` is UNIQUE so two racing allocations cannot both commit
const CREATE_TABLES: &str = r#"
    CREATE TABLE IF NOT EXISTS restaurant_tables (
        id CHAR(36) NOT NULL PRIMARY KEY,
        table_number INT UNSIGNED NOT NULL,
        number_of_people INT UNSIGNED NOT NULL DEFAULT 0,
        date_time DATETIME(3) NOT NULL,
        customer_name VARCHAR(255) NULL,
        phone_number VARCHAR(32) NULL,
        note TEXT NULL,
        UNIQUE KEY uq_restaurant_tables_number (table_number)
    )
"#;

const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id CHAR(36) NOT NULL PRIMARY KEY,
        username VARCHAR(255) NOT NULL,
        email VARCHAR(255) NOT NULL,
        password_hash VARCHAR(255) NOT NULL,
        phone_number VARCHAR(32) NULL,
        address VARCHAR(512) NULL,
        role VARCHAR(16) NOT NULL DEFAULT 'user',
        avatar VARCHAR(512) NOT NULL,
        verification_code VARCHAR(16) NULL,
        is_verified BOOLEAN NOT NULL DEFAULT FALSE,
        created_at DATETIME(3) NOT NULL,
        updated_at DATETIME(3) NOT NULL,
        UNIQUE KEY uq_users_email (email),
        KEY idx_users_unverified (is_verified, created_at)
    )
"#;

const CREATE_ADMINS: &str = r#"
    CREATE TABLE IF NOT EXISTS admins (
        id CHAR(36) NOT NULL PRIMARY KEY,
        username VARCHAR(255) NOT NULL,
        email VARCHAR(255) NOT NULL,
        password_hash VARCHAR(255) NOT NULL,
        role VARCHAR(16) NOT NULL DEFAULT 'admin',
        avatar VARCHAR(512) NOT NULL,
        created_at DATETIME(3) NOT NULL,
        updated_at DATETIME(3) NOT NULL,
        UNIQUE KEY uq_admins_email (email)
    )
"#;

/// Create the application tables when they do not exist yet
pub async fn ensure_schema(pool: &MySqlPool) -> Result<(), InfrastructureError> {
    tracing::info!("Ensuring database schema");

    for statement in [CREATE_TABLES, CREATE_USERS, CREATE_ADMINS] {
        sqlx::query(statement).execute(pool).await?;
    }

    tracing::info!("Database schema ready");
    Ok(())
}
