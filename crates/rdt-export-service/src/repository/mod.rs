//! Data-access seam between the export use case and the store.

mod db;
#[cfg(any(test, feature = "test-support"))]
pub mod memory;

use std::future::Future;
use std::pin::Pin;

use rdt_export_db::model::event::Event;
use rdt_export_db::model::participant::ParticipantRecord;

use crate::error::ServiceResult;

pub use db::DbExportRepository;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Read-only access to the events and joined participant rows.
pub trait ExportRepository: Send + Sync {
    /// Returns `Ok(None)` when no event has this id.
    fn find_event(&self, event_id: u64) -> BoxFuture<'_, ServiceResult<Option<Event>>>;

    fn participants_for_event(
        &self,
        event_id: u64,
    ) -> BoxFuture<'_, ServiceResult<Vec<ParticipantRecord>>>;

    /// Checks that the store answers, replacing a dropped connection if needed.
    fn ping(&self) -> BoxFuture<'_, ServiceResult<()>>;
}

#[cfg(test)]
mod tests;
