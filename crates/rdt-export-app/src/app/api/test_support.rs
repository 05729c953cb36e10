//! Router wiring shared by the handler tests.

use std::sync::Arc;

use salvo::Router;

use rdt_export_core::config::ExportConfig;
use rdt_export_service::export::ExportService;
use rdt_export_service::fixtures;
use rdt_export_service::repository::ExportRepository;
use rdt_export_service::repository::memory::InMemoryExportRepository;

use super::routes;
use crate::service_handler::ExportServiceHandler;

pub const BASE_URL: &str = "http://127.0.0.1:5800";

/// Builds the full router over an in-memory store holding the fixture event
/// and two of its participants.
pub fn router() -> (Router, Arc<InMemoryExportRepository>) {
    let repository = Arc::new(InMemoryExportRepository::new(
        vec![fixtures::event()],
        vec![
            fixtures::participant("RDT-0002"),
            fixtures::pending_participant("RDT-0001"),
        ],
    ));
    let dyn_repository: Arc<dyn ExportRepository> = repository.clone();

    let service = ExportService::new(dyn_repository, &ExportConfig::default())
        .expect("default export config is valid");

    let router = Router::new()
        .hoop(ExportServiceHandler {
            service: Arc::new(service),
        })
        .push(routes());

    (router, repository)
}
