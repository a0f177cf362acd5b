pub mod contact;

use axum::routing::get;
use axum::Router;

use crate::state::SharedState;

pub fn contact_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(contact::index))
        .route("/contact", get(contact::status).post(contact::submit))
}
