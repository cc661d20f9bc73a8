// src/main.rs
//
// Interactive menu over the catalog services.

use anyhow::Context;
use std::io::Write;
use std::sync::Arc;

use screenvault::db::{create_connection_pool, initialize_database};
use screenvault::domain::Category;
use screenvault::error::{AppError, AppResult};
use screenvault::integrations::{MetadataSource, OmdbClient, DEFAULT_BASE_URL};
use screenvault::repositories::{SeriesRepository, SqliteSeriesRepository};
use screenvault::services::{CatalogService, CleanupService, IngestOutcome, IngestService};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // 1. INFRASTRUCTURE
    let pool = Arc::new(create_connection_pool()?);

    // Initialize schema (idempotent)
    {
        let conn = pool.get()?;
        initialize_database(&conn)?;
    }

    let api_key =
        std::env::var("OMDB_APIKEY").context("OMDB_APIKEY environment variable is not set")?;
    let base_url =
        std::env::var("OMDB_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    // 2. REPOSITORIES
    let series_repo: Arc<dyn SeriesRepository> = Arc::new(SqliteSeriesRepository::new(pool));

    // 3. SERVICES
    let source: Arc<dyn MetadataSource> = Arc::new(OmdbClient::with_base_url(base_url, api_key));
    let ingest = IngestService::new(source, series_repo.clone());
    let catalog = CatalogService::new(series_repo.clone());
    let cleanup = CleanupService::new(series_repo);

    // Invalid records left over from earlier runs are swept before any
    // interactive use
    cleanup.cleanup_invalid_series()?;

    run_menu(&ingest, &catalog);
    Ok(())
}

fn run_menu(ingest: &IngestService, catalog: &CatalogService) {
    loop {
        println!(
            "\n1 - Buscar series\n\
             2 - Buscar episodios\n\
             3 - Listar series buscadas\n\
             4 - Buscar series por título\n\
             5 - Top 5 mejores series\n\
             6 - Buscar series por categoría\n\
             7 - Buscar series por cantidad de temporadas\n\
             8 - Buscar series por número de evaluación\n\
             9 - Buscar episodios por su nombre\n\
             10 - Buscar top 5 episodios\n\
             11 - Lanzamientos más recientes\n\
             12 - Ver episodios por temporada\n\
             0 - Salir\n"
        );

        let opcion = leer_linea("Elige una opción: ");
        let resultado = match opcion.as_str() {
            "1" => buscar_serie_web(ingest),
            "2" => buscar_episodios_por_serie(ingest, catalog),
            "3" => listar_series_buscadas(catalog),
            "4" => buscar_series_por_titulo(catalog),
            "5" => buscar_top_series(catalog),
            "6" => buscar_series_por_categoria(catalog),
            "7" => buscar_series_por_temporadas(catalog),
            "8" => buscar_series_por_evaluacion(catalog),
            "9" => buscar_episodios_por_nombre(catalog),
            "10" => buscar_top_episodios(catalog),
            "11" => lanzamientos_recientes(catalog),
            "12" => ver_episodios_por_temporada(catalog),
            "0" => {
                println!("Cerrando la aplicación...");
                return;
            }
            _ => {
                println!("Opción inválida");
                Ok(())
            }
        };

        if let Err(e) = resultado {
            println!("Error: {}", e);
        }
    }
}

fn leer_linea(prompt: &str) -> String {
    print!("{}", prompt);
    let _ = std::io::stdout().flush();

    let mut linea = String::new();
    if std::io::stdin().read_line(&mut linea).is_err() {
        return String::new();
    }
    linea.trim().to_string()
}

fn buscar_serie_web(ingest: &IngestService) -> AppResult<()> {
    let nombre = leer_linea("Escribe el nombre de la serie que deseas buscar: ");

    match ingest.ingest_series(&nombre)? {
        IngestOutcome::Valid(serie) => {
            println!("{}", serie.sinopsis);
            println!("Serie guardada: {}", serie.titulo);
        }
        IngestOutcome::Invalid { .. } => {
            println!("Error: Serie no encontrada o datos inválidos");
        }
    }
    Ok(())
}

fn buscar_episodios_por_serie(ingest: &IngestService, catalog: &CatalogService) -> AppResult<()> {
    let nombre = leer_linea("Escribe el nombre de una serie para ver sus episodios: ");

    match catalog.find_by_title(&nombre)? {
        Some(serie) => {
            println!("Buscando episodios de: {}", serie.titulo);
            let serie = ingest.ingest_episodes(serie)?;
            println!("Episodios guardados: {}", serie.episodios.len());
        }
        None => println!("Serie no encontrada en el catálogo local"),
    }
    Ok(())
}

fn listar_series_buscadas(catalog: &CatalogService) -> AppResult<()> {
    let series = catalog.list_all()?;

    let invalidas = series.iter().filter(|s| s.is_invalid()).count();
    if invalidas > 0 {
        println!("\nAdvertencia: {} series inválidas no se mostrarán", invalidas);
    }

    let mut visibles: Vec<_> = series.into_iter().filter(|s| !s.is_invalid()).collect();
    visibles.sort_by_key(|s| s.genero);

    for serie in visibles {
        println!("{}", serie);
    }
    Ok(())
}

fn buscar_series_por_titulo(catalog: &CatalogService) -> AppResult<()> {
    let nombre = leer_linea("Escribe el nombre de la serie que deseas buscar: ");

    match catalog.find_by_title(&nombre)? {
        Some(serie) => println!("La serie buscada es: {}", serie),
        None => println!("Serie no encontrada"),
    }
    Ok(())
}

fn buscar_top_series(catalog: &CatalogService) -> AppResult<()> {
    println!("Buscando el top 5 de las mejores series...");
    for serie in catalog.top_series()? {
        println!("{}", serie);
    }
    Ok(())
}

fn buscar_series_por_categoria(catalog: &CatalogService) -> AppResult<()> {
    let genero = leer_linea("Escriba el género/categoría de la serie que desea buscar: ");

    match Category::from_display_label(&genero) {
        Some(categoria) => {
            println!("Las series de la categoría {}:", categoria);
            for serie in catalog.find_by_category(categoria)? {
                println!("{}", serie);
            }
        }
        None => println!("Categoría no válida"),
    }
    Ok(())
}

fn buscar_series_por_temporadas(catalog: &CatalogService) -> AppResult<()> {
    let entrada = leer_linea("Ingrese una cantidad mínima de temporadas: ");

    // Non-numeric input is reported without issuing any query
    let temporadas: u32 = match entrada.parse() {
        Ok(valor) => valor,
        Err(_) => {
            println!("Debe ingresar un número entero");
            return Ok(());
        }
    };

    println!("Las series con {} o más temporadas:", temporadas);
    for serie in catalog.find_by_min_seasons(temporadas)? {
        println!("{}", serie);
    }
    Ok(())
}

fn buscar_series_por_evaluacion(catalog: &CatalogService) -> AppResult<()> {
    let entrada = leer_linea("Ingrese una evaluación mínima (0.0 - 10.0): ");

    let minima: f64 = match entrada.parse() {
        Ok(valor) => valor,
        Err(_) => {
            println!("Debe ingresar un número válido");
            return Ok(());
        }
    };

    match catalog.find_by_min_rating(minima) {
        Ok(series) => {
            println!("Las series con evaluación de {} o más:", minima);
            for serie in series {
                println!("{}", serie);
            }
            Ok(())
        }
        Err(AppError::InvalidInput(_)) => {
            println!("La evaluación debe estar entre 0 y 10");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn buscar_episodios_por_nombre(catalog: &CatalogService) -> AppResult<()> {
    let nombre = leer_linea("Escribe el nombre del episodio que deseas buscar: ");

    for hit in catalog.find_episodes_by_title(&nombre)? {
        println!(
            "Serie: {} Temporada {} Episodio {} Evaluación {}",
            hit.serie_titulo,
            hit.episodio.temporada,
            hit.episodio.numero_episodio,
            hit.episodio
                .evaluacion
                .map(|e| e.to_string())
                .unwrap_or_else(|| "N/A".to_string())
        );
    }
    Ok(())
}

fn buscar_top_episodios(catalog: &CatalogService) -> AppResult<()> {
    let nombre = leer_linea("Escribe el nombre de la serie: ");

    match catalog.find_by_title(&nombre)? {
        Some(serie) => {
            for episodio in catalog.top_episodes(serie.id)? {
                println!("Serie: {} - {}", serie.titulo, episodio);
            }
        }
        None => println!("Serie no encontrada"),
    }
    Ok(())
}

fn ver_episodios_por_temporada(catalog: &CatalogService) -> AppResult<()> {
    let nombre = leer_linea("Escribe el nombre de la serie: ");

    let serie = match catalog.find_by_title(&nombre)? {
        Some(serie) => serie,
        None => {
            println!("Serie no encontrada");
            return Ok(());
        }
    };

    let entrada = leer_linea("Número de temporada (o \"todas\"): ");
    let episodios = if entrada.eq_ignore_ascii_case("todas") {
        catalog.episodes_of_series(serie.id)?
    } else {
        let temporada: u32 = match entrada.parse() {
            Ok(valor) => valor,
            Err(_) => {
                println!("Debe ingresar un número entero o \"todas\"");
                return Ok(());
            }
        };
        catalog.episodes_of_season(serie.id, temporada)?
    };

    for episodio in episodios {
        println!("{}", episodio);
    }
    Ok(())
}

fn lanzamientos_recientes(catalog: &CatalogService) -> AppResult<()> {
    println!("Series con lanzamientos más recientes:");
    for serie in catalog.recent_releases()? {
        println!("{}", serie);
    }
    Ok(())
}
