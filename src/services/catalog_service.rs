// src/services/catalog_service.rs
//
// Read-query layer over the persisted catalog. Validates caller input before
// any store query is issued; not-found is an empty result, never an error.

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::category::Category;
use crate::domain::episode::Episode;
use crate::domain::series::Series;
use crate::error::{AppError, AppResult};
use crate::repositories::{EpisodeMatch, SeriesRepository};

/// Default result size for the ranking queries
pub const DEFAULT_TOP_N: u32 = 5;

pub struct CatalogService {
    series_repo: Arc<dyn SeriesRepository>,
}

impl CatalogService {
    pub fn new(series_repo: Arc<dyn SeriesRepository>) -> Self {
        Self { series_repo }
    }

    pub fn find_by_title(&self, texto: &str) -> AppResult<Option<Series>> {
        self.series_repo.find_by_title_substring(texto)
    }

    pub fn top_series(&self) -> AppResult<Vec<Series>> {
        self.series_repo.find_top_by_rating(DEFAULT_TOP_N)
    }

    pub fn find_by_category(&self, genero: Category) -> AppResult<Vec<Series>> {
        self.series_repo.find_by_category(genero)
    }

    pub fn find_by_min_seasons(&self, temporadas: u32) -> AppResult<Vec<Series>> {
        self.series_repo.find_by_min_seasons(temporadas)
    }

    /// Rejects thresholds outside the provider's 0.0–10.0 scale before any
    /// query is issued.
    pub fn find_by_min_rating(&self, evaluacion: f64) -> AppResult<Vec<Series>> {
        if !(0.0..=10.0).contains(&evaluacion) {
            return Err(AppError::InvalidInput(format!(
                "rating threshold must be between 0.0 and 10.0, got {}",
                evaluacion
            )));
        }
        self.series_repo.find_by_min_rating(evaluacion)
    }

    pub fn find_episodes_by_title(&self, texto: &str) -> AppResult<Vec<EpisodeMatch>> {
        self.series_repo.find_episodes_by_title_substring(texto)
    }

    pub fn top_episodes(&self, serie_id: Uuid) -> AppResult<Vec<Episode>> {
        self.series_repo
            .find_top_episodes_of_series(serie_id, DEFAULT_TOP_N)
    }

    pub fn episodes_of_series(&self, serie_id: Uuid) -> AppResult<Vec<Episode>> {
        self.series_repo.find_episodes_of_series(serie_id)
    }

    pub fn episodes_of_season(&self, serie_id: Uuid, temporada: u32) -> AppResult<Vec<Episode>> {
        self.series_repo.find_episodes_of_season(serie_id, temporada)
    }

    pub fn recent_releases(&self) -> AppResult<Vec<Series>> {
        self.series_repo.find_most_recent_releases(DEFAULT_TOP_N)
    }

    pub fn list_all(&self) -> AppResult<Vec<Series>> {
        self.series_repo.find_all()
    }
}
