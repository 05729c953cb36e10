//! Export use case: repository seam, row transformer and workbook renderer.

pub mod error;
pub mod export;
#[cfg(any(test, feature = "test-support"))]
pub mod fixtures;
pub mod repository;
