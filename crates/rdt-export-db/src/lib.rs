//! Read-only MySQL access for the RDT participant export: schema, row models,
//! the connection pool and the lookup/join queries.

pub mod db;
pub mod error;
pub mod model;
