//! Guest API module
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /guest_list/{name} | POST | book a table for a guest |
//! | /guest_list | GET | guests who booked |
//! | /guests/{name} | PUT | check in an arrived guest |
//! | /guests/{name} | DELETE | remove a departed guest |
//! | /guests | GET | guests who arrived |
//! | /seats_empty | GET | free seats across all tables |

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/guest_list/{name}", post(handler::book))
        .route("/guest_list", get(handler::guest_list))
        .route(
            "/guests/{name}",
            put(handler::check_in).delete(handler::remove),
        )
        .route("/guests", get(handler::arrived_list))
        .route("/seats_empty", get(handler::seats_empty))
}
