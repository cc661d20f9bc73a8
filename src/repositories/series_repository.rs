// src/repositories/series_repository.rs
//
// Series persistence
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - Explicit SQL only

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection, Row};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::ConnectionPool;
use crate::domain::category::Category;
use crate::domain::episode::Episode;
use crate::domain::series::Series;
use crate::error::{AppError, AppResult};

/// An episode hit together with the title of its owning series.
#[derive(Debug, Clone, Serialize)]
pub struct EpisodeMatch {
    pub serie_titulo: String,
    pub episodio: Episode,
}

#[cfg_attr(test, mockall::automock)]
pub trait SeriesRepository: Send + Sync {
    /// Insert-or-replace by title identity. A previously stored record with
    /// the same non-blank title is replaced; the episode list is rewritten
    /// wholesale.
    fn save(&self, series: &Series) -> AppResult<()>;
    fn find_by_title_substring(&self, texto: &str) -> AppResult<Option<Series>>;
    fn find_top_by_rating(&self, limite: u32) -> AppResult<Vec<Series>>;
    fn find_by_category(&self, genero: Category) -> AppResult<Vec<Series>>;
    fn find_by_min_seasons(&self, temporadas: u32) -> AppResult<Vec<Series>>;
    fn find_by_min_rating(&self, evaluacion: f64) -> AppResult<Vec<Series>>;
    fn find_episodes_by_title_substring(&self, texto: &str) -> AppResult<Vec<EpisodeMatch>>;
    fn find_top_episodes_of_series(&self, serie_id: Uuid, limite: u32) -> AppResult<Vec<Episode>>;
    fn find_episodes_of_series(&self, serie_id: Uuid) -> AppResult<Vec<Episode>>;
    fn find_episodes_of_season(&self, serie_id: Uuid, temporada: u32) -> AppResult<Vec<Episode>>;
    fn find_most_recent_releases(&self, limite: u32) -> AppResult<Vec<Series>>;
    fn find_all(&self) -> AppResult<Vec<Series>>;
    fn find_invalid(&self) -> AppResult<Vec<Series>>;
    fn delete_all(&self, series: &[Series]) -> AppResult<()>;
}

pub struct SqliteSeriesRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteSeriesRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Map database row to Series (episodes loaded separately) - returns
    /// rusqlite::Error for query_map compatibility
    fn row_to_series(row: &Row) -> Result<Series, rusqlite::Error> {
        let id_str: String = row.get("id")?;
        let id = Uuid::parse_str(&id_str)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let titulo: String = row.get("titulo")?;
        let sinopsis: String = row.get("sinopsis")?;

        let total_temporadas: i64 = row.get("total_temporadas")?;
        let evaluacion: Option<f64> = row.get("evaluacion")?;

        let genero_str: Option<String> = row.get("genero")?;
        let genero = match genero_str {
            Some(s) => Some(Category::from_stored_label(&s).ok_or(rusqlite::Error::InvalidQuery)?),
            None => None,
        };

        let creado_en_str: String = row.get("creado_en")?;
        let creado_en = DateTime::parse_from_rfc3339(&creado_en_str)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let actualizado_en_str: String = row.get("actualizado_en")?;
        let actualizado_en = DateTime::parse_from_rfc3339(&actualizado_en_str)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        Ok(Series {
            id,
            titulo,
            sinopsis,
            total_temporadas: total_temporadas as u32,
            evaluacion,
            genero,
            episodios: Vec::new(),
            creado_en,
            actualizado_en,
        })
    }

    fn row_to_episode(row: &Row) -> Result<Episode, rusqlite::Error> {
        let id_str: String = row.get("id")?;
        let id = Uuid::parse_str(&id_str)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let serie_id_str: String = row.get("serie_id")?;
        let serie_id = Uuid::parse_str(&serie_id_str)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let temporada: i64 = row.get("temporada")?;
        let numero_episodio: i64 = row.get("numero_episodio")?;
        let titulo: String = row.get("titulo")?;
        let evaluacion: Option<f64> = row.get("evaluacion")?;

        let fecha_str: Option<String> = row.get("fecha_de_lanzamiento")?;
        let fecha_de_lanzamiento = fecha_str
            .map(|s| {
                NaiveDate::parse_from_str(&s, "%Y-%m-%d")
                    .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
            })
            .transpose()?;

        Ok(Episode {
            id,
            serie_id,
            temporada: temporada as u32,
            numero_episodio: numero_episodio as u32,
            titulo,
            evaluacion,
            fecha_de_lanzamiento,
        })
    }

    fn load_episodios(conn: &Connection, serie_id: Uuid) -> AppResult<Vec<Episode>> {
        let mut stmt = conn.prepare(
            "SELECT id, serie_id, temporada, numero_episodio, titulo, evaluacion,
                    fecha_de_lanzamiento
             FROM episodios
             WHERE serie_id = ?1
             ORDER BY temporada, numero_episodio",
        )?;

        let episodios: Vec<Episode> = stmt
            .query_map(params![serie_id.to_string()], Self::row_to_episode)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(episodios)
    }

    fn hydrate(conn: &Connection, mut series: Vec<Series>) -> AppResult<Vec<Series>> {
        for serie in &mut series {
            serie.episodios = Self::load_episodios(conn, serie.id)?;
        }
        Ok(series)
    }
}

impl SeriesRepository for SqliteSeriesRepository {
    fn save(&self, series: &Series) -> AppResult<()> {
        let conn = self.pool.get()?;

        // One stored record per non-blank title: re-ingestion replaces,
        // never merges. Blank (invalid) titles may accumulate until cleanup.
        if !series.titulo.trim().is_empty() {
            conn.execute(
                "DELETE FROM series WHERE id <> ?1 AND titulo = ?2",
                params![series.id.to_string(), series.titulo],
            )?;
        }

        conn.execute(
            "INSERT OR REPLACE INTO series (
                id, titulo, sinopsis, total_temporadas, evaluacion, genero,
                creado_en, actualizado_en
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                series.id.to_string(),
                series.titulo,
                series.sinopsis,
                series.total_temporadas as i64,
                series.evaluacion,
                series.genero.map(|g| g.omdb_label()),
                series.creado_en.to_rfc3339(),
                series.actualizado_en.to_rfc3339(),
            ],
        )?;

        // The episode list is rewritten as a unit
        conn.execute(
            "DELETE FROM episodios WHERE serie_id = ?1",
            params![series.id.to_string()],
        )?;

        for episodio in &series.episodios {
            conn.execute(
                "INSERT INTO episodios (
                    id, serie_id, temporada, numero_episodio, titulo,
                    evaluacion, fecha_de_lanzamiento
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    episodio.id.to_string(),
                    series.id.to_string(),
                    episodio.temporada as i64,
                    episodio.numero_episodio as i64,
                    episodio.titulo,
                    episodio.evaluacion,
                    episodio.fecha_de_lanzamiento.map(|f| f.to_string()),
                ],
            )?;
        }

        Ok(())
    }

    fn find_by_title_substring(&self, texto: &str) -> AppResult<Option<Series>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, titulo, sinopsis, total_temporadas, evaluacion, genero,
                    creado_en, actualizado_en
             FROM series
             WHERE LOWER(titulo) LIKE '%' || LOWER(?1) || '%'
             LIMIT 1",
        )?;

        match stmt.query_row(params![texto], Self::row_to_series) {
            Ok(mut serie) => {
                serie.episodios = Self::load_episodios(&conn, serie.id)?;
                Ok(Some(serie))
            }
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn find_top_by_rating(&self, limite: u32) -> AppResult<Vec<Series>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, titulo, sinopsis, total_temporadas, evaluacion, genero,
                    creado_en, actualizado_en
             FROM series
             ORDER BY evaluacion DESC
             LIMIT ?1",
        )?;

        let series: Vec<Series> = stmt
            .query_map(params![limite as i64], Self::row_to_series)?
            .collect::<Result<Vec<_>, _>>()?;

        Self::hydrate(&conn, series)
    }

    fn find_by_category(&self, genero: Category) -> AppResult<Vec<Series>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, titulo, sinopsis, total_temporadas, evaluacion, genero,
                    creado_en, actualizado_en
             FROM series
             WHERE genero = ?1
             ORDER BY titulo",
        )?;

        let series: Vec<Series> = stmt
            .query_map(params![genero.omdb_label()], Self::row_to_series)?
            .collect::<Result<Vec<_>, _>>()?;

        Self::hydrate(&conn, series)
    }

    fn find_by_min_seasons(&self, temporadas: u32) -> AppResult<Vec<Series>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, titulo, sinopsis, total_temporadas, evaluacion, genero,
                    creado_en, actualizado_en
             FROM series
             WHERE total_temporadas >= ?1
             ORDER BY titulo",
        )?;

        let series: Vec<Series> = stmt
            .query_map(params![temporadas as i64], Self::row_to_series)?
            .collect::<Result<Vec<_>, _>>()?;

        Self::hydrate(&conn, series)
    }

    fn find_by_min_rating(&self, evaluacion: f64) -> AppResult<Vec<Series>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, titulo, sinopsis, total_temporadas, evaluacion, genero,
                    creado_en, actualizado_en
             FROM series
             WHERE evaluacion >= ?1
             ORDER BY evaluacion DESC",
        )?;

        let series: Vec<Series> = stmt
            .query_map(params![evaluacion], Self::row_to_series)?
            .collect::<Result<Vec<_>, _>>()?;

        Self::hydrate(&conn, series)
    }

    fn find_episodes_by_title_substring(&self, texto: &str) -> AppResult<Vec<EpisodeMatch>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT e.id, e.serie_id, e.temporada, e.numero_episodio, e.titulo,
                    e.evaluacion, e.fecha_de_lanzamiento, s.titulo AS serie_titulo
             FROM episodios e
             JOIN series s ON s.id = e.serie_id
             WHERE LOWER(e.titulo) LIKE '%' || LOWER(?1) || '%'
             ORDER BY s.titulo, e.temporada, e.numero_episodio",
        )?;

        let matches: Vec<EpisodeMatch> = stmt
            .query_map(params![texto], |row| {
                let episodio = Self::row_to_episode(row)?;
                let serie_titulo: String = row.get("serie_titulo")?;
                Ok(EpisodeMatch {
                    serie_titulo,
                    episodio,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(matches)
    }

    fn find_top_episodes_of_series(&self, serie_id: Uuid, limite: u32) -> AppResult<Vec<Episode>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, serie_id, temporada, numero_episodio, titulo, evaluacion,
                    fecha_de_lanzamiento
             FROM episodios
             WHERE serie_id = ?1
             ORDER BY evaluacion DESC
             LIMIT ?2",
        )?;

        let episodios: Vec<Episode> = stmt
            .query_map(params![serie_id.to_string(), limite as i64], Self::row_to_episode)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(episodios)
    }

    fn find_episodes_of_series(&self, serie_id: Uuid) -> AppResult<Vec<Episode>> {
        let conn = self.pool.get()?;
        Self::load_episodios(&conn, serie_id)
    }

    fn find_episodes_of_season(&self, serie_id: Uuid, temporada: u32) -> AppResult<Vec<Episode>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, serie_id, temporada, numero_episodio, titulo, evaluacion,
                    fecha_de_lanzamiento
             FROM episodios
             WHERE serie_id = ?1 AND temporada = ?2
             ORDER BY numero_episodio",
        )?;

        let episodios: Vec<Episode> = stmt
            .query_map(
                params![serie_id.to_string(), temporada as i64],
                Self::row_to_episode,
            )?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(episodios)
    }

    fn find_most_recent_releases(&self, limite: u32) -> AppResult<Vec<Series>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT s.id, s.titulo, s.sinopsis, s.total_temporadas, s.evaluacion,
                    s.genero, s.creado_en, s.actualizado_en
             FROM series s
             JOIN episodios e ON e.serie_id = s.id
             GROUP BY s.id
             ORDER BY MAX(e.fecha_de_lanzamiento) DESC
             LIMIT ?1",
        )?;

        let series: Vec<Series> = stmt
            .query_map(params![limite as i64], Self::row_to_series)?
            .collect::<Result<Vec<_>, _>>()?;

        Self::hydrate(&conn, series)
    }

    fn find_all(&self) -> AppResult<Vec<Series>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, titulo, sinopsis, total_temporadas, evaluacion, genero,
                    creado_en, actualizado_en
             FROM series
             ORDER BY titulo",
        )?;

        let series: Vec<Series> = stmt
            .query_map([], Self::row_to_series)?
            .collect::<Result<Vec<_>, _>>()?;

        Self::hydrate(&conn, series)
    }

    fn find_invalid(&self) -> AppResult<Vec<Series>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, titulo, sinopsis, total_temporadas, evaluacion, genero,
                    creado_en, actualizado_en
             FROM series
             WHERE TRIM(titulo) = ''",
        )?;

        let series: Vec<Series> = stmt
            .query_map([], Self::row_to_series)?
            .collect::<Result<Vec<_>, _>>()?;

        Self::hydrate(&conn, series)
    }

    fn delete_all(&self, series: &[Series]) -> AppResult<()> {
        let conn = self.pool.get()?;

        for serie in series {
            // Episodes go with their series (ON DELETE CASCADE)
            conn.execute(
                "DELETE FROM series WHERE id = ?1",
                params![serie.id.to_string()],
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::create_test_pool;
    use crate::db::migrations::initialize_database;

    fn setup() -> SqliteSeriesRepository {
        let pool = Arc::new(create_test_pool().unwrap());
        {
            let conn = pool.get().unwrap();
            initialize_database(&conn).unwrap();
        }
        SqliteSeriesRepository::new(pool)
    }

    fn serie(
        titulo: &str,
        evaluacion: Option<f64>,
        genero: Option<Category>,
        temporadas: u32,
    ) -> Series {
        let mut s = Series::new(titulo.to_string());
        s.evaluacion = evaluacion;
        s.genero = genero;
        s.total_temporadas = temporadas;
        s
    }

    fn episodio(
        serie_id: Uuid,
        temporada: u32,
        numero: u32,
        titulo: &str,
        evaluacion: Option<f64>,
        fecha: Option<&str>,
    ) -> Episode {
        let mut e = Episode::new(serie_id, temporada, numero, titulo.to_string());
        e.evaluacion = evaluacion;
        e.fecha_de_lanzamiento =
            fecha.map(|f| NaiveDate::parse_from_str(f, "%Y-%m-%d").unwrap());
        e
    }

    #[test]
    fn test_find_by_title_substring_is_case_insensitive() {
        let repo = setup();
        repo.save(&serie("Breaking Bad", Some(9.5), Some(Category::Drama), 5))
            .unwrap();

        let encontrada = repo.find_by_title_substring("breaking").unwrap();
        assert_eq!(encontrada.unwrap().titulo, "Breaking Bad");

        let encontrada = repo.find_by_title_substring("BAD").unwrap();
        assert!(encontrada.is_some());

        assert!(repo.find_by_title_substring("chernobyl").unwrap().is_none());
    }

    #[test]
    fn test_save_replaces_record_with_same_title() {
        let repo = setup();
        repo.save(&serie("Dark", Some(8.7), None, 2)).unwrap();

        let reingestada = serie("Dark", Some(8.8), Some(Category::CienciaFiccion), 3);
        repo.save(&reingestada).unwrap();

        let todas = repo.find_all().unwrap();
        assert_eq!(todas.len(), 1);
        assert_eq!(todas[0].id, reingestada.id);
        assert_eq!(todas[0].total_temporadas, 3);
        assert_eq!(todas[0].genero, Some(Category::CienciaFiccion));
    }

    #[test]
    fn test_save_rewrites_episode_list_wholesale() {
        let repo = setup();
        let mut s = serie("Dark", None, None, 1);
        s.episodios = vec![
            episodio(s.id, 1, 1, "Secretos", Some(8.0), None),
            episodio(s.id, 1, 2, "Mentiras", Some(8.2), None),
        ];
        repo.save(&s).unwrap();

        s.episodios = vec![episodio(s.id, 1, 1, "Secretos", Some(8.1), None)];
        repo.save(&s).unwrap();

        let cargada = repo.find_by_title_substring("Dark").unwrap().unwrap();
        assert_eq!(cargada.episodios.len(), 1);
        assert_eq!(cargada.episodios[0].evaluacion, Some(8.1));
    }

    #[test]
    fn test_find_top_by_rating_orders_and_limits() {
        let repo = setup();
        repo.save(&serie("Media", Some(7.0), None, 1)).unwrap();
        repo.save(&serie("Alta", Some(9.4), None, 1)).unwrap();
        repo.save(&serie("Baja", Some(5.1), None, 1)).unwrap();
        repo.save(&serie("Sin nota", None, None, 1)).unwrap();

        let top = repo.find_top_by_rating(2).unwrap();
        let titulos: Vec<&str> = top.iter().map(|s| s.titulo.as_str()).collect();
        assert_eq!(titulos, vec!["Alta", "Media"]);
    }

    #[test]
    fn test_find_by_category() {
        let repo = setup();
        repo.save(&serie("Dark", None, Some(Category::CienciaFiccion), 3))
            .unwrap();
        repo.save(&serie("Fargo", None, Some(Category::Crimen), 5))
            .unwrap();
        repo.save(&serie("Sin género", None, None, 1)).unwrap();

        let sci_fi = repo.find_by_category(Category::CienciaFiccion).unwrap();
        assert_eq!(sci_fi.len(), 1);
        assert_eq!(sci_fi[0].titulo, "Dark");
    }

    #[test]
    fn test_find_by_min_seasons_boundary() {
        let repo = setup();
        repo.save(&serie("Corta", None, None, 2)).unwrap();
        repo.save(&serie("Larga", None, None, 7)).unwrap();

        let resultado = repo.find_by_min_seasons(2).unwrap();
        assert_eq!(resultado.len(), 2);

        let resultado = repo.find_by_min_seasons(3).unwrap();
        assert_eq!(resultado.len(), 1);
        assert_eq!(resultado[0].titulo, "Larga");
    }

    #[test]
    fn test_find_by_min_rating_is_inclusive() {
        let repo = setup();
        repo.save(&serie("Justa", Some(7.0), None, 1)).unwrap();
        repo.save(&serie("Mejor", Some(8.5), None, 1)).unwrap();
        repo.save(&serie("Peor", Some(6.9), None, 1)).unwrap();
        repo.save(&serie("Sin nota", None, None, 1)).unwrap();

        let resultado = repo.find_by_min_rating(7.0).unwrap();
        let titulos: Vec<&str> = resultado.iter().map(|s| s.titulo.as_str()).collect();
        assert_eq!(titulos, vec!["Mejor", "Justa"]);
    }

    #[test]
    fn test_find_episodes_by_title_substring_includes_owner() {
        let repo = setup();
        let mut s = serie("Dark", None, None, 1);
        s.episodios = vec![
            episodio(s.id, 1, 1, "Secretos", None, None),
            episodio(s.id, 1, 2, "Mentiras", None, None),
        ];
        repo.save(&s).unwrap();

        let hits = repo.find_episodes_by_title_substring("secre").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].serie_titulo, "Dark");
        assert_eq!(hits[0].episodio.titulo, "Secretos");

        assert!(repo
            .find_episodes_by_title_substring("finale")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_find_top_episodes_of_series_orders_and_limits() {
        let repo = setup();
        let mut s = serie("Dark", None, None, 1);
        s.episodios = vec![
            episodio(s.id, 1, 1, "Uno", Some(7.5), None),
            episodio(s.id, 1, 2, "Dos", Some(9.1), None),
            episodio(s.id, 1, 3, "Tres", Some(8.0), None),
        ];
        repo.save(&s).unwrap();

        let top = repo.find_top_episodes_of_series(s.id, 2).unwrap();
        let titulos: Vec<&str> = top.iter().map(|e| e.titulo.as_str()).collect();
        assert_eq!(titulos, vec!["Dos", "Tres"]);
    }

    #[test]
    fn test_find_episodes_of_season() {
        let repo = setup();
        let mut s = serie("Dark", None, None, 2);
        s.episodios = vec![
            episodio(s.id, 1, 1, "Uno", None, None),
            episodio(s.id, 2, 1, "Dos", None, None),
            episodio(s.id, 2, 2, "Tres", None, None),
        ];
        repo.save(&s).unwrap();

        let temporada_dos = repo.find_episodes_of_season(s.id, 2).unwrap();
        assert_eq!(temporada_dos.len(), 2);
        assert!(temporada_dos.iter().all(|e| e.temporada == 2));
    }

    #[test]
    fn test_loaded_episodes_come_back_season_ascending() {
        let repo = setup();
        let mut s = serie("Dark", None, None, 2);
        s.episodios = vec![
            episodio(s.id, 2, 1, "Tarde", None, None),
            episodio(s.id, 1, 1, "Temprano", None, None),
        ];
        repo.save(&s).unwrap();

        let cargada = repo.find_by_title_substring("Dark").unwrap().unwrap();
        let temporadas: Vec<u32> = cargada.episodios.iter().map(|e| e.temporada).collect();
        assert_eq!(temporadas, vec![1, 2]);
    }

    #[test]
    fn test_find_most_recent_releases_orders_by_newest_episode() {
        let repo = setup();

        let mut vieja = serie("Vieja", None, None, 1);
        vieja.episodios = vec![episodio(vieja.id, 1, 1, "Uno", None, Some("2015-03-01"))];
        repo.save(&vieja).unwrap();

        let mut nueva = serie("Nueva", None, None, 1);
        nueva.episodios = vec![
            episodio(nueva.id, 1, 1, "Uno", None, Some("2014-01-01")),
            episodio(nueva.id, 1, 2, "Dos", None, Some("2023-06-10")),
        ];
        repo.save(&nueva).unwrap();

        let recientes = repo.find_most_recent_releases(5).unwrap();
        let titulos: Vec<&str> = recientes.iter().map(|s| s.titulo.as_str()).collect();
        assert_eq!(titulos, vec!["Nueva", "Vieja"]);
    }

    #[test]
    fn test_find_invalid_and_delete_all_cascade() {
        let repo = setup();

        let mut invalida = serie("", None, None, 1);
        invalida.episodios = vec![episodio(invalida.id, 1, 1, "Huérfano", None, None)];
        repo.save(&invalida).unwrap();
        repo.save(&serie("Válida", Some(8.0), None, 1)).unwrap();

        let invalidas = repo.find_invalid().unwrap();
        assert_eq!(invalidas.len(), 1);

        repo.delete_all(&invalidas).unwrap();
        assert!(repo.find_invalid().unwrap().is_empty());

        // The valid record survives, and the invalid record's episodes are gone
        assert_eq!(repo.find_all().unwrap().len(), 1);
        assert!(repo.find_episodes_of_series(invalida.id).unwrap().is_empty());
    }
}
