// src/services/ingest_service.rs
//
// Fetch-and-normalize-and-persist pipeline for one series.

use chrono::NaiveDate;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::category::Category;
use crate::domain::episode::Episode;
use crate::domain::series::{validate_series, Series};
use crate::error::{AppError, AppResult};
use crate::integrations::{MetadataSource, SeasonData, SeriesData};
use crate::repositories::SeriesRepository;

/// Result of ingesting one series.
///
/// Ingestion never fails on "not found": a provider response with no usable
/// title produces an `Invalid` outcome whose record is persisted anyway and
/// left to the startup cleanup. Callers can still inspect the partial data
/// before it is discarded.
#[derive(Debug, Clone)]
pub enum IngestOutcome {
    Valid(Series),
    Invalid { series: Series, reason: String },
}

impl IngestOutcome {
    pub fn series(&self) -> &Series {
        match self {
            IngestOutcome::Valid(series) => series,
            IngestOutcome::Invalid { series, .. } => series,
        }
    }

    pub fn into_series(self) -> Series {
        match self {
            IngestOutcome::Valid(series) => series,
            IngestOutcome::Invalid { series, .. } => series,
        }
    }
}

pub struct IngestService {
    source: Arc<dyn MetadataSource>,
    series_repo: Arc<dyn SeriesRepository>,
}

impl IngestService {
    pub fn new(source: Arc<dyn MetadataSource>, series_repo: Arc<dyn SeriesRepository>) -> Self {
        Self {
            source,
            series_repo,
        }
    }

    /// Fetch one series' summary, normalize it and persist it.
    ///
    /// Transport failures propagate unchanged; a lookup miss does not.
    pub fn ingest_series(&self, titulo: &str) -> AppResult<IngestOutcome> {
        let datos = self.source.fetch_series(titulo)?;
        let series = map_series(datos);

        if series.is_invalid() {
            log::warn!("provider returned no usable title for '{}'", titulo);
            self.series_repo.save(&series)?;
            return Ok(IngestOutcome::Invalid {
                series,
                reason: "provider response had no usable title".to_string(),
            });
        }

        validate_series(&series).map_err(AppError::Domain)?;
        self.series_repo.save(&series)?;
        log::info!("stored series '{}'", series.titulo);

        Ok(IngestOutcome::Valid(series))
    }

    /// Fetch every season's episode batch for an already-known series and
    /// persist the assembled list.
    ///
    /// Seasons are requested strictly in order, one request per season. A
    /// failed or unparseable season contributes zero episodes and ingestion
    /// continues with the remaining seasons. The assembled list replaces the
    /// prior episode list in full.
    pub fn ingest_episodes(&self, mut series: Series) -> AppResult<Series> {
        let mut episodios = Vec::new();

        for temporada in 1..=series.total_temporadas {
            match self.source.fetch_season(&series.titulo, temporada) {
                Ok(datos) => {
                    episodios.extend(map_season(series.id, temporada, datos));
                }
                Err(e) => {
                    log::warn!(
                        "season {} of '{}' skipped: {}",
                        temporada,
                        series.titulo,
                        e
                    );
                }
            }
        }

        log::info!(
            "assembled {} episodes for '{}'",
            episodios.len(),
            series.titulo
        );
        series.replace_episodios(episodios);
        self.series_repo.save(&series)?;

        Ok(series)
    }
}

fn map_series(datos: SeriesData) -> Series {
    let mut series = Series::new(datos.titulo.unwrap_or_default());
    series.sinopsis = datos
        .sinopsis
        .filter(|s| s != "N/A")
        .unwrap_or_default();
    series.total_temporadas = parse_entero(datos.total_temporadas.as_deref()).unwrap_or(0);
    series.evaluacion = parse_decimal(datos.evaluacion.as_deref());
    series.genero = datos
        .genero
        .as_deref()
        .and_then(Category::from_provider_label);
    series
}

/// Episodes are tagged with the season that was requested, not whatever the
/// provider echoes back, so the assembled list always comes out in ascending
/// season blocks.
fn map_season(serie_id: Uuid, temporada: u32, datos: SeasonData) -> Vec<Episode> {
    datos
        .episodios
        .into_iter()
        .filter_map(|entrada| {
            let numero = parse_entero(entrada.numero_episodio.as_deref())?;
            let mut episodio = Episode::new(
                serie_id,
                temporada,
                numero,
                entrada.titulo.unwrap_or_default(),
            );
            episodio.evaluacion = parse_decimal(entrada.evaluacion.as_deref());
            episodio.fecha_de_lanzamiento = parse_fecha(entrada.fecha_de_lanzamiento.as_deref());
            Some(episodio)
        })
        .collect()
}

// OMDb reports numerics as text and uses "N/A" for unknowns; anything that
// does not parse is treated as absent.

fn parse_decimal(valor: Option<&str>) -> Option<f64> {
    valor.and_then(|v| v.trim().parse().ok())
}

fn parse_entero(valor: Option<&str>) -> Option<u32> {
    valor.and_then(|v| v.trim().parse().ok())
}

fn parse_fecha(valor: Option<&str>) -> Option<NaiveDate> {
    valor.and_then(|v| NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d").ok())
}
