//! Retry behaviour of the database-backed repository.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};

use diesel_async::pooled_connection::bb8::RunError;
use rdt_export_core::error::CoreError;
use rdt_export_db::db::DbProvider;
use rdt_export_db::db::connection::DbConnection;
use rdt_export_db::error::{DbError, DbResult};

use super::*;
use crate::error::{ServiceError, ServiceResult};

/// Provider whose checkouts always fail with a fixed kind of error.
struct FailingProvider {
    calls: AtomicUsize,
    connectivity: bool,
}

impl FailingProvider {
    fn new(connectivity: bool) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            connectivity,
        }
    }
}

impl DbProvider for FailingProvider {
    fn get_connection<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = DbResult<DbConnection<'a>>> + Send + 'a>> {
        Box::pin(async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.connectivity {
                Err(DbError::PoolError(RunError::TimedOut))
            } else {
                Err(DbError::CoreError(CoreError::InvariantViolation(
                    "provider misconfigured",
                )))
            }
        })
    }
}

#[test_log::test(tokio::test)]
async fn test_connectivity_failure_is_retried_once() {
    let repo = DbExportRepository::new(FailingProvider::new(true));

    let result = repo.find_event(7).await;

    assert!(matches!(result, Err(ServiceError::Unavailable(_))));
    assert_eq!(repo.provider.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_ping_reports_unavailable() {
    let repo = DbExportRepository::new(FailingProvider::new(true));

    assert!(matches!(repo.ping().await, Err(ServiceError::Unavailable(_))));
}

#[tokio::test]
async fn test_other_failures_are_not_retried() {
    let repo = DbExportRepository::new(FailingProvider::new(false));

    let result = repo.participants_for_event(7).await;

    assert!(matches!(result, Err(ServiceError::DatabaseError(_))));
    assert_eq!(repo.provider.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_retry_recovers_after_one_failure() {
    let calls = AtomicUsize::new(0);

    let result = db::retry_once("test", || {
        let n = calls.fetch_add(1, Ordering::SeqCst);
        async move {
            if n == 0 {
                Err(DbError::PoolError(RunError::TimedOut))
            } else {
                Ok(n)
            }
        }
    })
    .await;

    assert_eq!(result.ok(), Some(1));
}

fn connection_lost() -> DbError {
    DbError::from_query(
        diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::Unknown,
            Box::new("Input/output error: broken pipe".to_string()),
        ),
        false,
    )
}

#[tokio::test]
async fn test_dropped_link_mid_statement_is_retried() {
    let calls = AtomicUsize::new(0);

    let result = db::retry_once("test", || {
        let n = calls.fetch_add(1, Ordering::SeqCst);
        async move {
            if n == 0 {
                Err(connection_lost())
            } else {
                Ok(n)
            }
        }
    })
    .await;

    assert_eq!(result.ok(), Some(1));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_dropped_link_twice_is_unavailable() {
    let calls = AtomicUsize::new(0);

    let result: ServiceResult<()> = db::retry_once("test", || {
        calls.fetch_add(1, Ordering::SeqCst);
        async { Err(connection_lost()) }
    })
    .await;

    assert!(matches!(result, Err(ServiceError::Unavailable(_))));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_statement_error_on_live_link_is_not_retried() {
    let calls = AtomicUsize::new(0);

    let result: ServiceResult<()> = db::retry_once("test", || {
        calls.fetch_add(1, Ordering::SeqCst);
        async {
            Err(DbError::from_query(
                diesel::result::Error::DatabaseError(
                    diesel::result::DatabaseErrorKind::Unknown,
                    Box::new("Unknown column".to_string()),
                ),
                true,
            ))
        }
    })
    .await;

    assert!(matches!(result, Err(ServiceError::DatabaseError(_))));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_memory_repository_filters_by_event() {
    use rdt_export_db::model::event::Event;
    use rdt_export_db::model::participant::ParticipantRecord;

    let mut first = ParticipantRecord::default();
    first.invitation.rdt_event_id = 1;
    let mut second = ParticipantRecord::default();
    second.invitation.rdt_event_id = 2;

    let repo = memory::InMemoryExportRepository::new(
        vec![Event {
            id: 1,
            event_name: "Tes Masif".to_string(),
            host_name: None,
        }],
        vec![first, second],
    );

    assert_eq!(repo.participants_for_event(1).await.map(|p| p.len()).ok(), Some(1));
    assert!(repo.find_event(2).await.ok().flatten().is_none());

    repo.set_offline(true);
    assert!(matches!(repo.ping().await, Err(ServiceError::Unavailable(_))));
}
