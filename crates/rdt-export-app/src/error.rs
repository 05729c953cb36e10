use salvo::http::StatusCode;
use salvo::writing::Json;
use serde::Serialize;
use thiserror::Error;

use rdt_export_core::error::CoreError;
use rdt_export_service::error::ServiceError;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] ServiceError),

    #[error(transparent)]
    CoreError(#[from] CoreError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    /// ## Summary
    /// Maps the error to the status code the client sees.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::ServiceError(ServiceError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::ServiceError(ServiceError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            Self::ServiceError(ServiceError::CoreError(CoreError::InvalidInput(_)))
            | Self::CoreError(CoreError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// ## Summary
    /// Writes the status code and a JSON error body.
    ///
    /// Server-side failures are logged here and reported with a generic
    /// message; client errors echo the reason.
    pub fn render(&self, res: &mut salvo::Response) {
        let status = self.status_code();

        let message = if status.is_server_error() {
            tracing::error!(error = %self, status = %status, "Request failed");
            match status {
                StatusCode::SERVICE_UNAVAILABLE => "Database unavailable".to_string(),
                _ => "Internal server error".to_string(),
            }
        } else {
            tracing::debug!(error = %self, status = %status, "Request rejected");
            self.to_string()
        };

        res.status_code(status);
        res.render(Json(ErrorResponse { error: message }));
    }
}
