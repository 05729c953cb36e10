//! Shared settings, constants and error types for the RDT participant export
//! service.

pub mod config;
pub mod constants;
pub mod error;
