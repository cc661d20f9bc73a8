use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::category::Category;
use crate::domain::episode::Episode;

/// One catalogued television series with its episode collection.
///
/// The provider title is the catalog identity: re-ingesting the same title
/// replaces the stored record rather than merging into it. A blank title
/// marks the record as invalid; such records are tolerated in the store
/// until the startup cleanup removes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Series {
    /// Internal immutable identifier (storage key)
    pub id: Uuid,

    /// Provider title; blank for a malformed ingestion
    pub titulo: String,

    /// Plot summary as reported by the provider
    pub sinopsis: String,

    /// Total season count reported by the provider
    pub total_temporadas: u32,

    /// Aggregate rating, 0.0–10.0 (if known)
    pub evaluacion: Option<f64>,

    /// Normalized genre (if the provider reported one)
    pub genero: Option<Category>,

    /// Ordered episode collection, season-ascending
    pub episodios: Vec<Episode>,

    /// Creation timestamp
    pub creado_en: DateTime<Utc>,

    /// Last update timestamp
    pub actualizado_en: DateTime<Utc>,
}

impl Series {
    /// Create a new Series with an empty episode list.
    pub fn new(titulo: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            titulo,
            sinopsis: String::new(),
            total_temporadas: 0,
            evaluacion: None,
            genero: None,
            episodios: Vec::new(),
            creado_en: now,
            actualizado_en: now,
        }
    }

    /// A blank title is the sole invalidity criterion used by the cleanup
    /// pass.
    pub fn is_invalid(&self) -> bool {
        self.titulo.trim().is_empty()
    }

    /// Replace the episode list in full. Episodes are never merged or
    /// appended across ingestions.
    pub fn replace_episodios(&mut self, episodios: Vec<Episode>) {
        self.episodios = episodios;
        self.actualizado_en = Utc::now();
    }
}

impl std::fmt::Display for Series {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let genero = self
            .genero
            .map(|g| g.to_string())
            .unwrap_or_else(|| "sin género".to_string());
        let evaluacion = self
            .evaluacion
            .map(|e| e.to_string())
            .unwrap_or_else(|| "sin evaluación".to_string());
        write!(
            f,
            "{} ({}, {} temporadas, evaluación: {})",
            self.titulo, genero, self.total_temporadas, evaluacion
        )
    }
}
