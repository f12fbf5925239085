//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use swp_core::domain::entities::{Role, User};
use swp_core::errors::DomainError;
use swp_core::repositories::UserRepository;

use super::{column, id_column, is_unique_violation, query_failed};

const SELECT_COLUMNS: &str = r#"
    SELECT id, username, email, password_hash, phone_number, address,
           role, avatar, verification_code, is_verified,
           created_at, updated_at
    FROM users
"#;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &MySqlRow) -> Result<User, DomainError> {
        let role: String = column(row, "role")?;

        Ok(User {
            id: id_column(row)?,
            username: column(row, "username")?,
            email: column(row, "email")?,
            password_hash: column(row, "password_hash")?,
            phone_number: column(row, "phone_number")?,
            address: column(row, "address")?,
            role: role.parse::<Role>().map_err(DomainError::persistence)?,
            avatar: column(row, "avatar")?,
            verification_code: column(row, "verification_code")?,
            is_verified: column(row, "is_verified")?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }

    async fn fetch_one_where(
        &self,
        condition: &str,
        value: String,
    ) -> Result<Option<User>, DomainError> {
        let query = format!("{} WHERE {} LIMIT 1", SELECT_COLUMNS, condition);

        let row = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failed("Database query failed"))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.fetch_one_where("email = ?", email.to_string()).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        self.fetch_one_where("id = ?", id.to_string()).await
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let query = format!("{} ORDER BY created_at ASC", SELECT_COLUMNS);

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed("Failed to list users"))?;

        rows.iter().map(Self::row_to_user).collect()
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (
                id, username, email, password_hash, phone_number, address,
                role, avatar, verification_code, is_verified,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.phone_number)
            .bind(&user.address)
            .bind(user.role.as_str())
            .bind(&user.avatar)
            .bind(&user.verification_code)
            .bind(user.is_verified)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    DomainError::validation("Email is already registered")
                } else {
                    DomainError::persistence(format!("Failed to create user: {}", e))
                }
            })?;

        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            UPDATE users SET
                username = ?,
                password_hash = ?,
                phone_number = ?,
                address = ?,
                role = ?,
                avatar = ?,
                verification_code = ?,
                is_verified = ?,
                updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&user.username)
            .bind(&user.password_hash)
            .bind(&user.phone_number)
            .bind(&user.address)
            .bind(user.role.as_str())
            .bind(&user.avatar)
            .bind(&user.verification_code)
            .bind(user.is_verified)
            .bind(user.updated_at)
            .bind(user.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(query_failed("Failed to update user"))?;

        if result.rows_affected() == 0 && self.find_by_id(user.id).await?.is_none() {
            return Err(DomainError::not_found("User not found"));
        }

        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(query_failed("Failed to delete user"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_unverified_before(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE is_verified = FALSE AND created_at < ?")
            .bind(cutoff)
            .execute(&self.pool)
            .await
            .map_err(query_failed("Failed to delete unverified users"))?;

        Ok(result.rows_affected())
    }
}
