use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One (season, number) unit belonging to a Series.
///
/// Episodes are owned exclusively by their series: the whole list is created
/// and destroyed together, there is no independent lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Episode {
    /// Internal immutable identifier
    pub id: Uuid,

    /// Reference to the owning Series (REQUIRED)
    pub serie_id: Uuid,

    /// Season this episode belongs to (1-based)
    pub temporada: u32,

    /// Episode number within the season (1-based)
    pub numero_episodio: u32,

    /// Episode title
    pub titulo: String,

    /// Rating, 0.0–10.0 (if known)
    pub evaluacion: Option<f64>,

    /// Release date (if known)
    pub fecha_de_lanzamiento: Option<NaiveDate>,
}

impl Episode {
    pub fn new(serie_id: Uuid, temporada: u32, numero_episodio: u32, titulo: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            serie_id,
            temporada,
            numero_episodio,
            titulo,
            evaluacion: None,
            fecha_de_lanzamiento: None,
        }
    }
}

impl std::fmt::Display for Episode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let evaluacion = self
            .evaluacion
            .map(|e| e.to_string())
            .unwrap_or_else(|| "sin evaluación".to_string());
        write!(
            f,
            "T{} E{} - {} (evaluación: {})",
            self.temporada, self.numero_episodio, self.titulo, evaluacion
        )
    }
}
