use serde::{Deserialize, Serialize};

/// Closed genre taxonomy for catalogued series.
///
/// Every value carries two labels: the canonical name the OMDb provider
/// reports, and the Spanish display name shown to users. The set is fixed at
/// compile time; there is no runtime registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    // Primary genres
    Accion,
    Aventura,
    Animacion,
    Comedia,
    Crimen,
    Documental,
    Drama,
    Familia,
    Fantasia,
    Historico,
    Terror,
    Musical,
    Misterio,
    Romance,
    CienciaFiccion,
    Thriller,
    Belico,
    Western,

    // Secondary genres
    Anime,
    Biografia,
    Deportes,
    Reality,
    Musica,
    GameShow,
    Cortometraje,
    Lifestyle,
    Supernatural,
    Ficcion,

    // Hybrid genres seen in the wild
    FantasiaCientifica,
    CrimenPoliciaco,
    AventuraFamiliar,
    DramaHistorico,
    ComediaDramatica,
    SuspensoPsicologico,
    AventuraAnimada,
    CienciaFiccionDistopica,
    AccionAventura,
    DramaPolitico,
}

impl Category {
    /// Every taxonomy value, in declaration order. Matching walks this table,
    /// so declaration order decides which value wins when labels overlap.
    pub const ALL: [Category; 38] = [
        Category::Accion,
        Category::Aventura,
        Category::Animacion,
        Category::Comedia,
        Category::Crimen,
        Category::Documental,
        Category::Drama,
        Category::Familia,
        Category::Fantasia,
        Category::Historico,
        Category::Terror,
        Category::Musical,
        Category::Misterio,
        Category::Romance,
        Category::CienciaFiccion,
        Category::Thriller,
        Category::Belico,
        Category::Western,
        Category::Anime,
        Category::Biografia,
        Category::Deportes,
        Category::Reality,
        Category::Musica,
        Category::GameShow,
        Category::Cortometraje,
        Category::Lifestyle,
        Category::Supernatural,
        Category::Ficcion,
        Category::FantasiaCientifica,
        Category::CrimenPoliciaco,
        Category::AventuraFamiliar,
        Category::DramaHistorico,
        Category::ComediaDramatica,
        Category::SuspensoPsicologico,
        Category::AventuraAnimada,
        Category::CienciaFiccionDistopica,
        Category::AccionAventura,
        Category::DramaPolitico,
    ];

    /// Canonical label as reported by the OMDb provider.
    pub fn omdb_label(self) -> &'static str {
        match self {
            Category::Accion => "Action",
            Category::Aventura => "Adventure",
            Category::Animacion => "Animation",
            Category::Comedia => "Comedy",
            Category::Crimen => "Crime",
            Category::Documental => "Documentary",
            Category::Drama => "Drama",
            Category::Familia => "Family",
            Category::Fantasia => "Fantasy",
            Category::Historico => "History",
            Category::Terror => "Horror",
            Category::Musical => "Musical",
            Category::Misterio => "Mystery",
            Category::Romance => "Romance",
            Category::CienciaFiccion => "Sci-Fi",
            Category::Thriller => "Thriller",
            Category::Belico => "War",
            Category::Western => "Western",
            Category::Anime => "Anime",
            Category::Biografia => "Biography",
            Category::Deportes => "Sport",
            Category::Reality => "Reality TV",
            Category::Musica => "Music",
            Category::GameShow => "Game Show",
            Category::Cortometraje => "Short",
            Category::Lifestyle => "Lifestyle",
            Category::Supernatural => "Supernatural",
            Category::Ficcion => "Fiction",
            Category::FantasiaCientifica => "Science Fantasy",
            Category::CrimenPoliciaco => "Crime, Police",
            Category::AventuraFamiliar => "Family Adventure",
            Category::DramaHistorico => "Historical Drama",
            Category::ComediaDramatica => "Comedy-Drama",
            Category::SuspensoPsicologico => "Psychological Thriller",
            Category::AventuraAnimada => "Animated Adventure",
            Category::CienciaFiccionDistopica => "Dystopian Sci-Fi",
            Category::AccionAventura => "Action-Adventure",
            Category::DramaPolitico => "Political Drama",
        }
    }

    /// Spanish display label.
    pub fn display_label(self) -> &'static str {
        match self {
            Category::Accion => "Acción",
            Category::Aventura => "Aventura",
            Category::Animacion => "Animación",
            Category::Comedia => "Comedia",
            Category::Crimen => "Crimen",
            Category::Documental => "Documental",
            Category::Drama => "Drama",
            Category::Familia => "Familia",
            Category::Fantasia => "Fantasía",
            Category::Historico => "Histórico",
            Category::Terror => "Terror",
            Category::Musical => "Musical",
            Category::Misterio => "Misterio",
            Category::Romance => "Romance",
            Category::CienciaFiccion => "Ciencia Ficción",
            Category::Thriller => "Thriller",
            Category::Belico => "Bélico",
            Category::Western => "Western",
            Category::Anime => "Anime",
            Category::Biografia => "Biografía",
            Category::Deportes => "Deportes",
            Category::Reality => "Reality",
            Category::Musica => "Música",
            Category::GameShow => "Programa de concursos",
            Category::Cortometraje => "Cortometraje",
            Category::Lifestyle => "Estilo de vida",
            Category::Supernatural => "Supernatural",
            Category::Ficcion => "Ficción",
            Category::FantasiaCientifica => "Fantasía Científica",
            Category::CrimenPoliciaco => "Crimen Policiaco",
            Category::AventuraFamiliar => "Aventura Familiar",
            Category::DramaHistorico => "Drama Histórico",
            Category::ComediaDramatica => "Comedia Dramática",
            Category::SuspensoPsicologico => "Suspenso Psicológico",
            Category::AventuraAnimada => "Aventura Animada",
            Category::CienciaFiccionDistopica => "Ciencia Ficción Distópica",
            Category::AccionAventura => "Acción-Aventura",
            Category::DramaPolitico => "Drama Político",
        }
    }

    /// Resolve a provider-reported genre string.
    ///
    /// Providers report genres inconsistently (canonical names, localized
    /// names, or genres not in the taxonomy), so resolution is tiered: first
    /// an exact case-insensitive pass over the canonical labels, then a
    /// looser pass over either label. A non-blank string that matches nothing
    /// still resolves to [`Category::Drama`] rather than failing ingestion.
    ///
    /// Multi-genre strings ("Action, Adventure") are resolved from their
    /// first token only. A blank or empty string resolves to `None`; no
    /// default is applied.
    pub fn from_provider_label(raw: &str) -> Option<Category> {
        if raw.trim().is_empty() {
            return None;
        }

        let token = first_token(raw);

        for category in Category::ALL {
            if eq_ignore_case(category.omdb_label(), token) {
                return Some(category);
            }
        }

        for category in Category::ALL {
            if eq_ignore_case(category.omdb_label(), token)
                || eq_ignore_case(category.display_label(), token)
            {
                return Some(category);
            }
        }

        Some(Category::Drama)
    }

    /// Resolve a display-language genre string, as typed by a user.
    ///
    /// Single tier: case-insensitive match against the display labels only,
    /// with the same never-fail default as [`Category::from_provider_label`].
    pub fn from_display_label(raw: &str) -> Option<Category> {
        if raw.trim().is_empty() {
            return None;
        }

        let token = first_token(raw);

        for category in Category::ALL {
            if eq_ignore_case(category.display_label(), token) {
                return Some(category);
            }
        }

        Some(Category::Drama)
    }

    /// Resolve the exact canonical label, as stored by the repository.
    /// Unlike the provider-facing lookups this never falls back to a default.
    pub fn from_stored_label(stored: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|category| category.omdb_label() == stored)
    }
}

fn first_token(raw: &str) -> &str {
    raw.split(',').next().unwrap_or("").trim()
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    // Labels contain accented characters, so ASCII-only folding is not enough
    a.to_lowercase() == b.to_lowercase()
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_canonical_match_any_case() {
        assert_eq!(Category::from_provider_label("Sci-Fi"), Some(Category::CienciaFiccion));
        assert_eq!(Category::from_provider_label("sci-fi"), Some(Category::CienciaFiccion));
        assert_eq!(Category::from_provider_label("DRAMA"), Some(Category::Drama));
        assert_eq!(Category::from_provider_label("horror"), Some(Category::Terror));
    }

    #[test]
    fn test_display_label_match_in_provider_mode() {
        // No canonical label matches, so the second tier accepts the
        // localized name
        assert_eq!(Category::from_provider_label("Terror"), Some(Category::Terror));
        assert_eq!(Category::from_provider_label("ciencia ficción"), Some(Category::CienciaFiccion));
        assert_eq!(Category::from_provider_label("Bélico"), Some(Category::Belico));
    }

    #[test]
    fn test_blank_input_is_absent_not_default() {
        assert_eq!(Category::from_provider_label(""), None);
        assert_eq!(Category::from_provider_label("   "), None);
        assert_eq!(Category::from_display_label(""), None);
        assert_eq!(Category::from_display_label("  \t"), None);
    }

    #[test]
    fn test_unrecognized_genre_defaults_to_drama() {
        // Deliberate never-fail policy: unknown genres resolve to Drama
        assert_eq!(Category::from_provider_label("Telenovela"), Some(Category::Drama));
        assert_eq!(Category::from_provider_label("Mockumentary"), Some(Category::Drama));
        assert_eq!(Category::from_display_label("Telenovela"), Some(Category::Drama));
    }

    #[test]
    fn test_multi_token_uses_first_only() {
        assert_eq!(Category::from_provider_label("Action, Adventure"), Some(Category::Accion));
        assert_eq!(Category::from_provider_label("Comedy, Drama, Romance"), Some(Category::Comedia));
        assert_eq!(Category::from_provider_label(" Mystery , Thriller"), Some(Category::Misterio));
    }

    #[test]
    fn test_display_mode_matches_display_labels_only() {
        assert_eq!(Category::from_display_label("Aventura"), Some(Category::Aventura));
        assert_eq!(Category::from_display_label("programa de concursos"), Some(Category::GameShow));
        // Canonical-only names fall through to the default in this mode
        assert_eq!(Category::from_display_label("Sci-Fi"), Some(Category::Drama));
    }

    #[test]
    fn test_stored_label_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_stored_label(category.omdb_label()), Some(category));
        }
        assert_eq!(Category::from_stored_label("No Such Genre"), None);
    }

    #[test]
    fn test_display_renders_display_label() {
        assert_eq!(Category::CienciaFiccion.to_string(), "Ciencia Ficción");
        assert_eq!(Category::GameShow.to_string(), "Programa de concursos");
    }
}
