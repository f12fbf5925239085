use serde::{Deserialize, Serialize};

use swp_core::domain::entities::Table;

/// Body of `POST /admin/tables`
///
/// `quantity` stays raw JSON so that strings, negatives and fractions are
/// all answered with the same validation message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTablesRequest {
    #[serde(default)]
    pub quantity: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateTablesResponse {
    pub message: String,
    pub tables: Vec<Table>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TablesResponse {
    pub tables: Vec<Table>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableResponse {
    pub message: String,
    pub table: Table,
}
