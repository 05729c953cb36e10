use std::future::Future;

use rdt_export_db::db::DbProvider;
use rdt_export_db::db::query;
use rdt_export_db::error::{DbError, DbResult};
use rdt_export_db::model::event::Event;
use rdt_export_db::model::participant::ParticipantRecord;

use super::{BoxFuture, ExportRepository};
use crate::error::{ServiceError, ServiceResult};

/// [`ExportRepository`] backed by a pooled MySQL connection per call.
///
/// A connectivity failure is retried once on a fresh checkout; a second one is
/// reported as [`ServiceError::Unavailable`].
pub struct DbExportRepository<P: DbProvider> {
    pub(super) provider: P,
}

impl<P: DbProvider> DbExportRepository<P> {
    #[must_use]
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }

    async fn find_event_once(&self, event_id: u64) -> DbResult<Option<Event>> {
        let mut conn = self.provider.get_connection().await?;
        match query::event::find_by_id(&mut conn, event_id).await {
            Ok(event) => Ok(event),
            Err(e) => Err(query::diagnose(&mut conn, e).await),
        }
    }

    async fn participants_once(&self, event_id: u64) -> DbResult<Vec<ParticipantRecord>> {
        let mut conn = self.provider.get_connection().await?;
        match query::participant::list_by_event(&mut conn, event_id).await {
            Ok(rows) => Ok(rows),
            Err(e) => Err(query::diagnose(&mut conn, e).await),
        }
    }

    async fn ping_once(&self) -> DbResult<()> {
        let mut conn = self.provider.get_connection().await?;
        query::ping(&mut conn)
            .await
            .map_err(|e| DbError::from_query(e, false))
    }
}

impl<P: DbProvider> ExportRepository for DbExportRepository<P> {
    #[tracing::instrument(skip(self))]
    fn find_event(&self, event_id: u64) -> BoxFuture<'_, ServiceResult<Option<Event>>> {
        Box::pin(async move {
            retry_once("find_event", move || self.find_event_once(event_id)).await
        })
    }

    #[tracing::instrument(skip(self))]
    fn participants_for_event(
        &self,
        event_id: u64,
    ) -> BoxFuture<'_, ServiceResult<Vec<ParticipantRecord>>> {
        Box::pin(async move {
            retry_once("participants_for_event", move || {
                self.participants_once(event_id)
            })
            .await
        })
    }

    #[tracing::instrument(skip(self))]
    fn ping(&self) -> BoxFuture<'_, ServiceResult<()>> {
        Box::pin(async move { retry_once("ping", move || self.ping_once()).await })
    }
}

/// ## Summary
/// Runs `attempt`, and runs it a second time if the first failure was a
/// connectivity failure.
///
/// ## Errors
/// Returns [`ServiceError::Unavailable`] when both attempts lose the
/// connection, and the wrapped database error for any other failure.
pub(super) async fn retry_once<T, F, Fut>(op: &'static str, mut attempt: F) -> ServiceResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = DbResult<T>>,
{
    match attempt().await {
        Ok(value) => Ok(value),
        Err(e) if e.is_connectivity() => {
            tracing::warn!(op, error = %e, "Lost database connection, retrying once");
            attempt().await.map_err(classify)
        }
        Err(e) => Err(classify(e)),
    }
}

fn classify(e: DbError) -> ServiceError {
    if e.is_connectivity() {
        tracing::error!(error = %e, "Database unavailable");
        ServiceError::Unavailable(e.to_string())
    } else {
        ServiceError::DatabaseError(e)
    }
}
