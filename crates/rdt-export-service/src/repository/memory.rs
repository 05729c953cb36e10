//! In-memory [`ExportRepository`] for handler and use-case tests.

use std::sync::atomic::{AtomicBool, Ordering};

use rdt_export_db::model::event::Event;
use rdt_export_db::model::participant::ParticipantRecord;

use super::{BoxFuture, ExportRepository};
use crate::error::{ServiceError, ServiceResult};

#[derive(Debug, Default)]
pub struct InMemoryExportRepository {
    events: Vec<Event>,
    participants: Vec<ParticipantRecord>,
    offline: AtomicBool,
}

impl InMemoryExportRepository {
    #[must_use]
    pub fn new(events: Vec<Event>, participants: Vec<ParticipantRecord>) -> Self {
        Self {
            events,
            participants,
            offline: AtomicBool::new(false),
        }
    }

    /// Makes every call fail as if the store were unreachable.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> ServiceResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(ServiceError::Unavailable("store offline".to_string()));
        }
        Ok(())
    }
}

impl ExportRepository for InMemoryExportRepository {
    fn find_event(&self, event_id: u64) -> BoxFuture<'_, ServiceResult<Option<Event>>> {
        Box::pin(async move {
            self.check_online()?;
            Ok(self.events.iter().find(|e| e.id == event_id).cloned())
        })
    }

    fn participants_for_event(
        &self,
        event_id: u64,
    ) -> BoxFuture<'_, ServiceResult<Vec<ParticipantRecord>>> {
        Box::pin(async move {
            self.check_online()?;
            Ok(self
                .participants
                .iter()
                .filter(|p| p.invitation.rdt_event_id == event_id)
                .cloned()
                .collect())
        })
    }

    fn ping(&self) -> BoxFuture<'_, ServiceResult<()>> {
        Box::pin(async move { self.check_online() })
    }
}
