//! Table inventory endpoints under `/admin/tables`

use actix_web::{web, HttpResponse};

use swp_core::domain::entities::TablePatch;
use swp_core::repositories::{AdminRepository, TableRepository, UserRepository};
use swp_core::services::parse_quantity;
use swp_shared::MessageResponse;

use crate::app::AppState;
use crate::dto::table::{CreateTablesRequest, CreateTablesResponse, TableResponse, TablesResponse};
use crate::handlers::error_response;
use crate::middleware::JwtAuth;

use super::parse_id;

const TABLE_NOT_FOUND: &str = "Table not found";

pub fn configure<T, U, A>(cfg: &mut web::ServiceConfig)
where
    T: TableRepository + 'static,
    U: UserRepository + 'static,
    A: AdminRepository + 'static,
{
    cfg.service(
        web::resource("/tables")
            .wrap(JwtAuth::admin())
            .route(web::post().to(create_tables::<T, U, A>))
            .route(web::get().to(list_tables::<T, U, A>)),
    )
    .service(
        web::resource("/tables/{id}")
            .wrap(JwtAuth::admin())
            .route(web::put().to(update_table::<T, U, A>))
            .route(web::delete().to(delete_table::<T, U, A>)),
    );
}

/// Handler for POST /admin/tables
///
/// Allocates `quantity` new tables, filling gaps in the numbering first.
///
/// # Request Body
/// ```json
/// { "quantity": 3 }
/// ```
///
/// # Response
/// - 201 `{ "message", "tables" }` ascending by number
/// - 400 quantity missing, non-numeric or not positive
/// - 500 `{ "message": "Error creating tables", "error" }`
pub async fn create_tables<T, U, A>(
    state: web::Data<AppState<T, U, A>>,
    body: web::Json<CreateTablesRequest>,
) -> HttpResponse
where
    T: TableRepository + 'static,
    U: UserRepository + 'static,
    A: AdminRepository + 'static,
{
    let quantity = match parse_quantity(body.quantity.as_ref()) {
        Ok(quantity) => quantity,
        Err(error) => return error_response(&error, "Error creating tables"),
    };

    match state.table_service.create_tables(quantity).await {
        Ok(tables) => HttpResponse::Created().json(CreateTablesResponse {
            message: "Tables created successfully".to_string(),
            tables,
        }),
        Err(error) => error_response(&error, "Error creating tables"),
    }
}

pub async fn list_tables<T, U, A>(state: web::Data<AppState<T, U, A>>) -> HttpResponse
where
    T: TableRepository + 'static,
    U: UserRepository + 'static,
    A: AdminRepository + 'static,
{
    match state.table_service.list_tables().await {
        Ok(tables) => HttpResponse::Ok().json(TablesResponse { tables }),
        Err(error) => error_response(&error, "Error fetching tables"),
    }
}

pub async fn update_table<T, U, A>(
    state: web::Data<AppState<T, U, A>>,
    path: web::Path<String>,
    body: web::Json<TablePatch>,
) -> HttpResponse
where
    T: TableRepository + 'static,
    U: UserRepository + 'static,
    A: AdminRepository + 'static,
{
    let id = match parse_id(&path, TABLE_NOT_FOUND) {
        Ok(id) => id,
        Err(error) => return error_response(&error, "Error updating table"),
    };

    match state.table_service.update_table(id, body.into_inner()).await {
        Ok(table) => HttpResponse::Ok().json(TableResponse {
            message: "Table updated successfully".to_string(),
            table,
        }),
        Err(error) => error_response(&error, "Error updating table"),
    }
}

pub async fn delete_table<T, U, A>(
    state: web::Data<AppState<T, U, A>>,
    path: web::Path<String>,
) -> HttpResponse
where
    T: TableRepository + 'static,
    U: UserRepository + 'static,
    A: AdminRepository + 'static,
{
    let result = match parse_id(&path, TABLE_NOT_FOUND) {
        Ok(id) => state.table_service.delete_table(id).await,
        Err(error) => Err(error),
    };

    match result {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Table deleted successfully")),
        Err(error) => error_response(&error, "Error deleting table"),
    }
}
