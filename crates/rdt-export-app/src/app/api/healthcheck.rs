use salvo::http::StatusCode;
use salvo::prelude::Json;
use salvo::{Depot, Response, Router, handler};
use serde_json::json;

use crate::service_handler::get_export_service_from_depot;

/// ## Summary
/// Liveness probe. Round-trips a statement through a pooled connection, which
/// replaces a connection the server dropped.
///
/// ## Errors
/// Returns HTTP 503 if the database cannot be reached
/// Returns HTTP 500 if the export service is missing from the depot
#[handler]
async fn healthcheck(depot: &mut Depot, res: &mut Response) {
    let service = match get_export_service_from_depot(depot) {
        Ok(s) => s,
        Err(e) => {
            e.render(res);
            return;
        }
    };

    match service.ping().await {
        Ok(()) => {
            res.render(Json(json!({"status": "OK"})));
        }
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            res.status_code(StatusCode::SERVICE_UNAVAILABLE);
            res.render(Json(json!({"status": "UNAVAILABLE"})));
        }
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::new().get(healthcheck)
}
