//! Party Table API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::core::ServerState;
use crate::utils::AppResult;
use shared::dto::TableListResponse;
use shared::models::{PartyTable, TableCreate, TableUpdate};

/// GET /tables - list all registered tables
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<TableListResponse>> {
    let tables = state.admission().table_list();
    Ok(Json(TableListResponse { tables }))
}

/// POST /tables - register a table
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TableCreate>,
) -> AppResult<Json<PartyTable>> {
    payload.validate()?;
    let table = state.admission().add_table(payload.id, payload.capacity)?;
    Ok(Json(table))
}

/// PUT /tables/{id} - replace a table's capacity
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<TableUpdate>,
) -> AppResult<Json<PartyTable>> {
    let table = state.admission().update_table(id, payload.capacity)?;
    Ok(Json(table))
}
