//! Guest API Handlers
//!
//! The wire format speaks in `accompanying_guests`; the admission
//! controller does the party arithmetic.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};
use shared::dto::{
    ArrivedGuestListResponse, BookGuestRequest, CheckInRequest, GuestListResponse, GuestResponse,
    SeatsResponse,
};

/// POST /guest_list/{name} - book a table for a guest and friends
pub async fn book(
    State(state): State<ServerState>,
    Path(name): Path<String>,
    Json(payload): Json<BookGuestRequest>,
) -> AppResult<Json<GuestResponse>> {
    let name = valid_name(name)?;
    let booking = state
        .admission()
        .book_guest(&name, payload.table, payload.accompanying_guests)?;
    Ok(Json(GuestResponse { name: booking.name }))
}

/// GET /guest_list - everyone who booked a table
pub async fn guest_list(State(state): State<ServerState>) -> AppResult<Json<GuestListResponse>> {
    let guests = state
        .admission()
        .guest_list()
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(GuestListResponse { guests }))
}

/// PUT /guests/{name} - check in an arrived guest and friends
pub async fn check_in(
    State(state): State<ServerState>,
    Path(name): Path<String>,
    Json(payload): Json<CheckInRequest>,
) -> AppResult<Json<GuestResponse>> {
    let name = valid_name(name)?;
    let arrival = state
        .admission()
        .check_in_guest(&name, payload.accompanying_guests)?;
    Ok(Json(GuestResponse { name: arrival.name }))
}

/// DELETE /guests/{name} - a guest (and their whole party) leaves
pub async fn remove(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> AppResult<Json<GuestResponse>> {
    let name = valid_name(name)?;
    state.admission().remove_departed_guest(&name)?;
    Ok(Json(GuestResponse { name }))
}

/// GET /guests - everyone who has arrived
pub async fn arrived_list(
    State(state): State<ServerState>,
) -> AppResult<Json<ArrivedGuestListResponse>> {
    let guests = state
        .admission()
        .arrived_list()
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(ArrivedGuestListResponse { guests }))
}

/// GET /seats_empty - free seats across the whole party plan
pub async fn seats_empty(State(state): State<ServerState>) -> AppResult<Json<SeatsResponse>> {
    Ok(Json(SeatsResponse {
        seats_empty: state.admission().available_seats(),
    }))
}

fn valid_name(name: String) -> AppResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("Guest name must not be empty".into()));
    }
    Ok(trimmed.to_string())
}
