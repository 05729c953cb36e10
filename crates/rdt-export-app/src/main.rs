use std::sync::Arc;

use rdt_export_app::app::api::routes;
use rdt_export_app::service_handler::ExportServiceHandler;
use rdt_export_core::config::load_config;
use rdt_export_db::db::connection::create_pool;
use rdt_export_service::export::ExportService;
use rdt_export_service::repository::DbExportRepository;
use salvo::conn::TcpListener;
use salvo::logging::Logger;
use salvo::{Listener, Router};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting RDT participant export server");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let pool = create_pool(&config.db.url()?, u32::from(config.db.connections)).await?;

    tracing::info!(
        host = %config.db.host,
        database = %config.db.database,
        "Database connection pool created"
    );

    let repository = DbExportRepository::new(pool);
    let service = ExportService::new(Arc::new(repository), &config.export)?;

    let bind_addr = config.server.bind_addr();
    let acceptor = TcpListener::new(bind_addr.clone()).bind().await;

    let router = Router::new()
        .hoop(Logger::new())
        .hoop(ExportServiceHandler {
            service: Arc::new(service),
        })
        .push(routes());

    tracing::info!("Server listening on {bind_addr}");

    let server = salvo::Server::new(acceptor);
    let handle = server.handle();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for shutdown signal");
            return;
        }
        tracing::info!("Shutdown signal received, draining connections");
        handle.stop_graceful(None);
    });

    server.serve(router).await;

    tracing::info!("Server stopped");

    Ok(())
}
