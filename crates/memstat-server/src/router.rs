//! Axum router wiring.
//!
//! Everything under `/update/` goes to the update handler, whatever the
//! method; the handler answers 405 itself. Other paths get the default 404.

use axum::{routing::any, Router};

use crate::{app_state::AppState, handler};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // the wildcard does not match an empty tail
        .route("/update/", any(handler::update))
        .route("/update/*rest", any(handler::update))
        .with_state(state)
}
