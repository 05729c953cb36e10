//! HTTP surface of the RDT participant export service.

pub mod app;
pub mod error;
pub mod service_handler;
