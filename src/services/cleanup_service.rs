// src/services/cleanup_service.rs
//
// Startup sweep of structurally invalid series.

use std::sync::Arc;

use crate::error::AppResult;
use crate::repositories::SeriesRepository;

pub struct CleanupService {
    series_repo: Arc<dyn SeriesRepository>,
}

impl CleanupService {
    pub fn new(series_repo: Arc<dyn SeriesRepository>) -> Self {
        Self { series_repo }
    }

    /// Remove every series with a blank title, in one batch.
    ///
    /// Runs once at process start, before any interactive use. Idempotent:
    /// with no new ingestion in between, a second run removes nothing. A
    /// series with a non-blank title is never touched, no matter how
    /// incomplete its episode list is.
    pub fn cleanup_invalid_series(&self) -> AppResult<usize> {
        let invalidas = self.series_repo.find_invalid()?;

        if invalidas.is_empty() {
            return Ok(0);
        }

        log::info!("removing {} invalid series", invalidas.len());
        self.series_repo.delete_all(&invalidas)?;

        Ok(invalidas.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::create_test_pool;
    use crate::db::migrations::initialize_database;
    use crate::domain::series::Series;
    use crate::repositories::SqliteSeriesRepository;

    fn setup() -> (Arc<SqliteSeriesRepository>, CleanupService) {
        let pool = Arc::new(create_test_pool().unwrap());
        {
            let conn = pool.get().unwrap();
            initialize_database(&conn).unwrap();
        }
        let repo = Arc::new(SqliteSeriesRepository::new(pool));
        let service = CleanupService::new(repo.clone());
        (repo, service)
    }

    #[test]
    fn test_cleanup_removes_only_blank_titles() {
        let (repo, service) = setup();

        repo.save(&Series::new(String::new())).unwrap();
        let mut incompleta = Series::new("Sin episodios".to_string());
        incompleta.total_temporadas = 4;
        repo.save(&incompleta).unwrap();

        let removidas = service.cleanup_invalid_series().unwrap();
        assert_eq!(removidas, 1);

        let restantes = repo.find_all().unwrap();
        assert_eq!(restantes.len(), 1);
        assert_eq!(restantes[0].titulo, "Sin episodios");
    }

    #[test]
    fn test_cleanup_is_idempotent() {
        let (repo, service) = setup();

        repo.save(&Series::new("   ".to_string())).unwrap();

        assert_eq!(service.cleanup_invalid_series().unwrap(), 1);
        assert_eq!(service.cleanup_invalid_series().unwrap(), 0);
        assert!(repo.find_invalid().unwrap().is_empty());
    }

    #[test]
    fn test_cleanup_on_clean_store_is_a_noop() {
        let (_repo, service) = setup();
        assert_eq!(service.cleanup_invalid_series().unwrap(), 0);
    }
}
