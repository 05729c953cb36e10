use thiserror::Error;

/// Service layer errors - combines all error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    DatabaseError(#[from] rdt_export_db::error::DbError),

    #[error(transparent)]
    CoreError(#[from] rdt_export_core::error::CoreError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("xlsx write error: {0}")]
    XlsxError(#[from] rust_xlsxwriter::XlsxError),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
