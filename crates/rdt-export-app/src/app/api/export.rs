use salvo::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use salvo::http::{HeaderValue, StatusCode};
use salvo::{Depot, Request, Response, Router, handler};

use rdt_export_core::constants::{EVENT_ID_QUERY_PARAM, EXPORT_ROUTE_COMPONENT, XLSX_CONTENT_TYPE};
use rdt_export_core::error::{CoreError, CoreResult};
use rdt_export_service::export::ExportFile;

use crate::error::AppError;
use crate::service_handler::get_export_service_from_depot;

/// ## Summary
/// Validates the raw `rdt_event_id` query value.
///
/// ## Errors
/// Returns `CoreError::InvalidInput` if the value is missing, not a decimal
/// integer, or zero.
pub(super) fn parse_event_id(raw: Option<&str>) -> CoreResult<u64> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| CoreError::InvalidInput(format!("{EVENT_ID_QUERY_PARAM} is required")))?;

    match raw.parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(CoreError::InvalidInput(format!(
            "{EVENT_ID_QUERY_PARAM} must be a positive integer"
        ))),
    }
}

fn write_attachment(res: &mut Response, file: ExportFile) -> Result<(), AppError> {
    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{}\"", file.filename))
        .map_err(|_e| CoreError::InvariantViolation("attachment name is not a valid header value"))?;

    res.status_code(StatusCode::OK);
    res.headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(XLSX_CONTENT_TYPE));
    res.headers_mut().insert(CONTENT_DISPOSITION, disposition);
    res.body(file.bytes);

    Ok(())
}

/// ## Summary
/// GET /export?rdt_event_id=<id> - Download the participants of an event as
/// an `.xlsx` workbook.
///
/// ## Errors
/// Returns HTTP 400 if `rdt_event_id` is missing or malformed
/// Returns HTTP 404 if the event does not exist
/// Returns HTTP 503 if the database cannot be reached
/// Returns HTTP 500 if the query or rendering fails
#[handler]
async fn export(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let raw = req.query::<String>(EVENT_ID_QUERY_PARAM);
    let event_id = match parse_event_id(raw.as_deref()) {
        Ok(id) => id,
        Err(e) => {
            AppError::from(e).render(res);
            return;
        }
    };

    tracing::debug!(event_id, "Processing export request");

    let service = match get_export_service_from_depot(depot) {
        Ok(s) => s,
        Err(e) => {
            e.render(res);
            return;
        }
    };

    let file = match service.export(event_id).await {
        Ok(f) => f,
        Err(e) => {
            AppError::from(e).render(res);
            return;
        }
    };

    tracing::info!(event_id, rows = file.rows, "Export served");

    if let Err(e) = write_attachment(res, file) {
        e.render(res);
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(EXPORT_ROUTE_COMPONENT).get(export)
}
