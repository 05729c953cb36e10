//! Participant export use case.
//!
//! Lookup → fetch → transform every row → render, all in memory. Nothing is
//! written back to the store.

pub mod cell;
pub mod columns;
pub mod render;
pub mod transform;

use std::sync::Arc;

use chrono::NaiveDate;
use chrono_tz::Tz;

use rdt_export_core::config::ExportConfig;

use self::columns::HEADER;
use self::render::render_workbook;
use self::transform::{ExportRow, RowTransformer, today_in};
use crate::error::{ServiceError, ServiceResult};
use crate::repository::ExportRepository;

/// A rendered export ready to be sent as a download.
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub bytes: Vec<u8>,
    /// Attachment name including the extension.
    pub filename: String,
    /// Number of data rows, header excluded.
    pub rows: usize,
}

pub struct ExportService {
    repository: Arc<dyn ExportRepository>,
    tz: Tz,
    filename: String,
    sheet: String,
}

impl ExportService {
    /// ## Summary
    /// Builds the service from a repository and the export settings.
    ///
    /// ## Errors
    /// Returns an error if the configured timezone is unknown.
    pub fn new(repository: Arc<dyn ExportRepository>, config: &ExportConfig) -> ServiceResult<Self> {
        Ok(Self {
            repository,
            tz: config.tz()?,
            filename: config.attachment_name(),
            sheet: config.sheet.clone(),
        })
    }

    #[must_use]
    pub const fn tz(&self) -> Tz {
        self.tz
    }

    /// ## Summary
    /// Exports an event using today's date in the configured zone for ages.
    ///
    /// ## Errors
    /// See [`Self::export_as_of`].
    pub async fn export(&self, event_id: u64) -> ServiceResult<ExportFile> {
        self.export_as_of(event_id, today_in(self.tz)).await
    }

    /// ## Summary
    /// Exports every joined participant row of an event as an `.xlsx` file,
    /// computing ages against `today`.
    ///
    /// An event without invitations yields a header-only workbook.
    ///
    /// ## Errors
    /// - [`ServiceError::NotFound`] if no event has this id
    /// - [`ServiceError::Unavailable`] if the store cannot be reached
    /// - any database or render failure
    #[tracing::instrument(skip(self))]
    pub async fn export_as_of(&self, event_id: u64, today: NaiveDate) -> ServiceResult<ExportFile> {
        let event = self
            .repository
            .find_event(event_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("rdt event {event_id}")))?;

        let records = self.repository.participants_for_event(event_id).await?;
        tracing::debug!(records = records.len(), "Fetched participant rows");

        let transformer = RowTransformer::new(self.tz, today);
        let rows: Vec<ExportRow> = records
            .iter()
            .map(|record| transformer.transform(&event, record))
            .collect();

        let bytes = render_workbook(&self.sheet, &HEADER, &rows)?;

        tracing::info!(rows = rows.len(), bytes = bytes.len(), "Export rendered");

        Ok(ExportFile {
            bytes,
            filename: self.filename.clone(),
            rows: rows.len(),
        })
    }

    /// ## Summary
    /// Liveness probe against the store.
    ///
    /// ## Errors
    /// Returns [`ServiceError::Unavailable`] when the store cannot be reached.
    pub async fn ping(&self) -> ServiceResult<()> {
        self.repository.ping().await
    }
}
