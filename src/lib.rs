// src/lib.rs
// Screenvault - TV series catalog fed by the OMDb API
//
// Architecture:
// - Domain-centric: entities and the genre taxonomy live in `domain`
// - Repositories: dumb SQL mappers behind the `SeriesRepository` trait
// - Services: ingestion, read queries and the startup cleanup pass
// - Integrations: the OMDb client behind the `MetadataSource` trait

pub mod db;
pub mod domain;
pub mod error;
pub mod integrations;
pub mod repositories;
pub mod services;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{validate_episode, validate_series, Category, Episode, Series};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{create_connection_pool, initialize_database, ConnectionPool};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{EpisodeMatch, SeriesRepository, SqliteSeriesRepository};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{CatalogService, CleanupService, IngestOutcome, IngestService, DEFAULT_TOP_N};

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::{
    EpisodeData, MetadataSource, OmdbClient, SeasonData, SeriesData, DEFAULT_BASE_URL,
};
