// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod catalog_service;
pub mod cleanup_service;
pub mod ingest_service;

// Re-export all services and their types
pub use catalog_service::{CatalogService, DEFAULT_TOP_N};
pub use cleanup_service::CleanupService;
pub use ingest_service::{IngestOutcome, IngestService};
