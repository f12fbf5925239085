//! MySQL implementation of the TableRepository trait.
//!
//! Batches are written with one multi-row INSERT inside a transaction, and the
//! UNIQUE key on `table_number` rejects a batch that collides with a
//! concurrent allocation.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::{MySql, MySqlPool, QueryBuilder};
use uuid::Uuid;

use swp_core::domain::entities::Table;
use swp_core::errors::DomainError;
use swp_core::repositories::TableRepository;

use super::{column, id_column, is_unique_violation, query_failed};

const SELECT_COLUMNS: &str = r#"
    SELECT id, table_number, number_of_people, date_time,
           customer_name, phone_number, note
    FROM restaurant_tables
"#;

/// MySQL implementation of TableRepository
pub struct MySqlTableRepository {
    pool: MySqlPool,
}

impl MySqlTableRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_table(row: &MySqlRow) -> Result<Table, DomainError> {
        Ok(Table {
            id: id_column(row)?,
            table_number: column(row, "table_number")?,
            number_of_people: column(row, "number_of_people")?,
            date_time: column(row, "date_time")?,
            customer_name: column(row, "customer_name")?,
            phone_number: column(row, "phone_number")?,
            note: column(row, "note")?,
        })
    }
}

#[async_trait]
impl TableRepository for MySqlTableRepository {
    async fn find_all(&self) -> Result<Vec<Table>, DomainError> {
        let query = format!("{} ORDER BY table_number ASC", SELECT_COLUMNS);

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed("Failed to list tables"))?;

        rows.iter().map(Self::row_to_table).collect()
    }

    async fn table_numbers(&self) -> Result<Vec<u32>, DomainError> {
        sqlx::query_scalar::<_, u32>("SELECT table_number FROM restaurant_tables")
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed("Failed to read table numbers"))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Table>, DomainError> {
        let query = format!("{} WHERE id = ? LIMIT 1", SELECT_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failed("Database query failed"))?;

        row.as_ref().map(Self::row_to_table).transpose()
    }

    async fn insert_many(&self, tables: Vec<Table>) -> Result<Vec<Table>, DomainError> {
        if tables.is_empty() {
            return Ok(tables);
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(query_failed("Failed to start transaction"))?;

        let mut builder: QueryBuilder<MySql> = QueryBuilder::new(
            "INSERT INTO restaurant_tables \
             (id, table_number, number_of_people, date_time, customer_name, phone_number, note) ",
        );
        builder.push_values(tables.iter(), |mut row, table| {
            row.push_bind(table.id.to_string())
                .push_bind(table.table_number)
                .push_bind(table.number_of_people)
                .push_bind(table.date_time)
                .push_bind(table.customer_name.clone())
                .push_bind(table.phone_number.clone())
                .push_bind(table.note.clone());
        });

        if let Err(e) = builder.build().execute(&mut *tx).await {
            // Dropping the transaction rolls it back
            if is_unique_violation(&e) {
                tracing::warn!("Table number collision during batch insert: {}", e);
                return Err(DomainError::persistence(format!(
                    "Duplicate table number: {}",
                    e
                )));
            }
            return Err(query_failed("Failed to insert tables")(e));
        }

        tx.commit()
            .await
            .map_err(query_failed("Failed to commit tables"))?;

        tracing::debug!(count = tables.len(), "Inserted table batch");
        Ok(tables)
    }

    async fn update(&self, table: Table) -> Result<Table, DomainError> {
        let query = r#"
            UPDATE restaurant_tables SET
                number_of_people = ?,
                date_time = ?,
                customer_name = ?,
                phone_number = ?,
                note = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(table.number_of_people)
            .bind(table.date_time)
            .bind(&table.customer_name)
            .bind(&table.phone_number)
            .bind(&table.note)
            .bind(table.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(query_failed("Failed to update table"))?;

        // MySQL reports zero affected rows for an unchanged record too
        if result.rows_affected() == 0 && self.find_by_id(table.id).await?.is_none() {
            return Err(DomainError::not_found("Table not found"));
        }

        Ok(table)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM restaurant_tables WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(query_failed("Failed to delete table"))?;

        Ok(result.rows_affected() > 0)
    }
}
