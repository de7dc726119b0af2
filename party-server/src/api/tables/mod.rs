//! Party Table API module

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/table", post(handler::create))
        .route("/table/{id}", put(handler::update))
        .route("/tables_list", get(handler::list))
}
