use salvo::async_trait;
use std::sync::Arc;

use crate::error::AppResult;
use rdt_export_core::error::CoreError;
use rdt_export_service::export::ExportService;

pub struct ExportServiceHandler {
    pub service: Arc<ExportService>,
}

#[async_trait]
impl salvo::Handler for ExportServiceHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.service));
    }
}

/// ## Summary
/// Retrieves the export service from the depot.
///
/// ## Errors
/// Returns an error if the export service is not found in the depot.
pub fn get_export_service_from_depot(depot: &salvo::Depot) -> AppResult<Arc<ExportService>> {
    depot
        .obtain::<Arc<ExportService>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Export service not found in depot").into())
}
