// src/integrations/mod.rs
//
// External metadata providers
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - Providers return wire-shaped DTOs; services map them
// - Absence of an expected field is "absent", never a transport error

pub mod omdb;

use serde::{Deserialize, Serialize};

use crate::error::AppResult;

/// Provider of series/season/episode facts.
///
/// Implementations block the caller until the request completes; there is no
/// overlap between calls.
#[cfg_attr(test, mockall::automock)]
pub trait MetadataSource: Send + Sync {
    /// Fetch one series' summary, keyed by title.
    fn fetch_series(&self, titulo: &str) -> AppResult<SeriesData>;

    /// Fetch one season's episode batch for a series.
    fn fetch_season(&self, titulo: &str, temporada: u32) -> AppResult<SeasonData>;
}

/// Series summary as it comes off the wire.
///
/// OMDb reports every numeric field as text and substitutes "N/A" for
/// unknown values; a lookup miss comes back with all fields missing. Parsing
/// into domain values happens at the service layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeriesData {
    #[serde(rename = "Title")]
    pub titulo: Option<String>,

    #[serde(rename = "Plot")]
    pub sinopsis: Option<String>,

    #[serde(rename = "totalSeasons")]
    pub total_temporadas: Option<String>,

    #[serde(rename = "imdbRating")]
    pub evaluacion: Option<String>,

    #[serde(rename = "Genre")]
    pub genero: Option<String>,
}

/// One season's episode batch as it comes off the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeasonData {
    /// Season number as reported by the provider (informational; the
    /// ingestor tags episodes with the season it requested)
    #[serde(rename = "Season")]
    pub temporada: Option<String>,

    #[serde(rename = "Episodes", default)]
    pub episodios: Vec<EpisodeData>,
}

/// One episode entry within a season response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EpisodeData {
    #[serde(rename = "Title")]
    pub titulo: Option<String>,

    #[serde(rename = "Episode")]
    pub numero_episodio: Option<String>,

    #[serde(rename = "imdbRating")]
    pub evaluacion: Option<String>,

    #[serde(rename = "Released")]
    pub fecha_de_lanzamiento: Option<String>,
}

pub use omdb::client::{OmdbClient, DEFAULT_BASE_URL};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_response_decodes() {
        let json = r#"{
            "Title": "Example Show",
            "Plot": "A show about examples.",
            "totalSeasons": "2",
            "imdbRating": "8.3",
            "Genre": "Sci-Fi, Drama",
            "Response": "True"
        }"#;

        let datos: SeriesData = serde_json::from_str(json).unwrap();
        assert_eq!(datos.titulo.as_deref(), Some("Example Show"));
        assert_eq!(datos.total_temporadas.as_deref(), Some("2"));
        assert_eq!(datos.genero.as_deref(), Some("Sci-Fi, Drama"));
    }

    #[test]
    fn test_lookup_miss_decodes_to_absent_fields() {
        // A miss is not a transport error: every field is simply absent
        let json = r#"{"Response": "False", "Error": "Series not found!"}"#;

        let datos: SeriesData = serde_json::from_str(json).unwrap();
        assert!(datos.titulo.is_none());
        assert!(datos.genero.is_none());
    }

    #[test]
    fn test_season_response_decodes() {
        let json = r#"{
            "Title": "Example Show",
            "Season": "1",
            "Episodes": [
                {"Title": "Pilot", "Released": "2015-02-08", "Episode": "1", "imdbRating": "8.7"},
                {"Title": "Second", "Released": "N/A", "Episode": "2", "imdbRating": "N/A"}
            ],
            "Response": "True"
        }"#;

        let datos: SeasonData = serde_json::from_str(json).unwrap();
        assert_eq!(datos.temporada.as_deref(), Some("1"));
        assert_eq!(datos.episodios.len(), 2);
        assert_eq!(datos.episodios[0].titulo.as_deref(), Some("Pilot"));
    }

    #[test]
    fn test_season_without_episodes_decodes_empty() {
        let json = r#"{"Response": "False", "Error": "Series or season not found!"}"#;

        let datos: SeasonData = serde_json::from_str(json).unwrap();
        assert!(datos.episodios.is_empty());
    }
}
