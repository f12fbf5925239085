//! MySQL implementation of the AdminRepository trait.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use swp_core::domain::entities::{Admin, Role};
use swp_core::errors::DomainError;
use swp_core::repositories::AdminRepository;

use super::{column, id_column, is_unique_violation, query_failed};

const SELECT_COLUMNS: &str = r#"
    SELECT id, username, email, password_hash, role, avatar,
           created_at, updated_at
    FROM admins
"#;

pub struct MySqlAdminRepository {
    pool: MySqlPool,
}

impl MySqlAdminRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_admin(row: &MySqlRow) -> Result<Admin, DomainError> {
        let role: String = column(row, "role")?;

        Ok(Admin {
            id: id_column(row)?,
            username: column(row, "username")?,
            email: column(row, "email")?,
            password_hash: column(row, "password_hash")?,
            role: role.parse::<Role>().map_err(DomainError::persistence)?,
            avatar: column(row, "avatar")?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl AdminRepository for MySqlAdminRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, DomainError> {
        let query = format!("{} WHERE email = ? LIMIT 1", SELECT_COLUMNS);

        let row = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failed("Database query failed"))?;

        row.as_ref().map(Self::row_to_admin).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Admin>, DomainError> {
        let query = format!("{} WHERE id = ? LIMIT 1", SELECT_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failed("Database query failed"))?;

        row.as_ref().map(Self::row_to_admin).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Admin>, DomainError> {
        let query = format!("{} ORDER BY created_at ASC", SELECT_COLUMNS);

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed("Failed to list admins"))?;

        rows.iter().map(Self::row_to_admin).collect()
    }

    async fn create(&self, admin: Admin) -> Result<Admin, DomainError> {
        let query = r#"
            INSERT INTO admins (
                id, username, email, password_hash, role, avatar,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(admin.id.to_string())
            .bind(&admin.username)
            .bind(&admin.email)
            .bind(&admin.password_hash)
            .bind(admin.role.as_str())
            .bind(&admin.avatar)
            .bind(admin.created_at)
            .bind(admin.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    DomainError::validation("Admin already exists")
                } else {
                    DomainError::persistence(format!("Failed to create admin: {}", e))
                }
            })?;

        Ok(admin)
    }

    async fn update(&self, admin: Admin) -> Result<Admin, DomainError> {
        let query = r#"
            UPDATE admins SET
                username = ?,
                email = ?,
                password_hash = ?,
                avatar = ?,
                updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&admin.username)
            .bind(&admin.email)
            .bind(&admin.password_hash)
            .bind(&admin.avatar)
            .bind(admin.updated_at)
            .bind(admin.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    DomainError::validation("Email already in use by another admin")
                } else {
                    DomainError::persistence(format!("Failed to update admin: {}", e))
                }
            })?;

        if result.rows_affected() == 0 && self.find_by_id(admin.id).await?.is_none() {
            return Err(DomainError::not_found("Admin not found"));
        }

        Ok(admin)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM admins WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(query_failed("Failed to delete admin"))?;

        Ok(result.rows_affected() > 0)
    }
}
