//! Metric update handler.
//!
//! `POST /update/<kind>/<name>/<value>`: escape check, method check, then path
//! parsing and validation, then exactly one store mutation. A rejected request
//! never touches the store.

use axum::{
    extract::State,
    http::{header, Method, Uri},
    response::{IntoResponse, Response},
};

use memstat_core::error::{MemstatError, Result};
use memstat_core::update::{check_escapes, MetricUpdate};

use crate::app_state::AppState;
use crate::error::{HttpError, TEXT_PLAIN_UTF8};

pub async fn update(State(app): State<AppState>, method: Method, uri: Uri) -> Response {
    let span = tracing::debug_span!("update", %method, path = %uri.path());
    span.in_scope(|| match apply(&app, &method, uri.path()) {
        Ok(update) => {
            tracing::debug!(
                kind = %update.kind(),
                name = update.name(),
                ?update,
                "metric updated"
            );
            ([(header::CONTENT_TYPE, TEXT_PLAIN_UTF8)], "OK").into_response()
        }
        Err(e) => {
            tracing::debug!(error = ?e, code = e.client_code().as_str(), "update rejected");
            HttpError::from(e).into_response()
        }
    })
}

fn apply(app: &AppState, method: &Method, path: &str) -> Result<MetricUpdate> {
    // an undecodable request target is refused whatever the method
    check_escapes(path)?;
    if *method != Method::POST {
        return Err(MemstatError::MethodNotAllowed);
    }
    let update = MetricUpdate::from_path(path)?;
    app.store().apply(&update);
    Ok(update)
}
