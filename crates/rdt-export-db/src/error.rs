use diesel::result::DatabaseErrorKind;
use thiserror::Error;

/// Database layer errors
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] diesel::result::Error),

    /// A statement failed because the link to the server went away.
    #[error("Connection lost: {0}")]
    ConnectionLost(diesel::result::Error),

    #[error("Pool error: {0}")]
    PoolError(#[from] diesel_async::pooled_connection::bb8::RunError),

    #[error(transparent)]
    CoreError(#[from] rdt_export_core::error::CoreError),
}

impl DbError {
    /// ## Summary
    /// Returns `true` when the failure came from the link to the server
    /// rather than from the statement itself.
    ///
    /// A fresh checkout from the pool may succeed where this one failed.
    #[must_use]
    pub fn is_connectivity(&self) -> bool {
        match self {
            Self::PoolError(_) | Self::ConnectionLost(_) => true,
            Self::DatabaseError(diesel::result::Error::DatabaseError(kind, _)) => matches!(
                kind,
                DatabaseErrorKind::ClosedConnection | DatabaseErrorKind::UnableToSendCommand
            ),
            Self::DatabaseError(_) | Self::CoreError(_) => false,
        }
    }

    /// ## Summary
    /// Returns `true` for statement errors that may hide a dropped link.
    ///
    /// The MySQL backend reports driver and I/O failures as
    /// `DatabaseErrorKind::Unknown`, the same kind as unmapped server errors.
    #[must_use]
    pub const fn may_be_link_failure(err: &diesel::result::Error) -> bool {
        matches!(
            err,
            diesel::result::Error::DatabaseError(DatabaseErrorKind::Unknown, _)
        )
    }

    /// ## Summary
    /// Classifies a failed statement given whether the same connection still
    /// answers a ping.
    #[must_use]
    pub fn from_query(err: diesel::result::Error, link_alive: bool) -> Self {
        if !link_alive && Self::may_be_link_failure(&err) {
            Self::ConnectionLost(err)
        } else {
            Self::DatabaseError(err)
        }
    }
}

pub type DbResult<T> = std::result::Result<T, DbError>;
