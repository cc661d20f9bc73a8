use super::entity::Series;
use crate::domain::{DomainError, DomainResult};

/// Validates all Series invariants
/// These are the rules that must hold for a Series stored by normal ingestion
pub fn validate_series(series: &Series) -> DomainResult<()> {
    validate_titulo(&series.titulo)?;
    validate_evaluacion(series.evaluacion)?;
    Ok(())
}

/// Titulo cannot be blank for a valid series
fn validate_titulo(titulo: &str) -> DomainResult<()> {
    if titulo.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Series title cannot be blank".to_string(),
        ));
    }
    Ok(())
}

/// Rating, when present, stays within the provider's 0.0–10.0 scale
fn validate_evaluacion(evaluacion: Option<f64>) -> DomainResult<()> {
    if let Some(valor) = evaluacion {
        if !(0.0..=10.0).contains(&valor) {
            return Err(DomainError::InvariantViolation(format!(
                "Rating {} is outside the 0.0-10.0 scale",
                valor
            )));
        }
    }
    Ok(())
}

/// Invariants that must hold true for the Series domain:
///
/// 1. A Series stored by normal ingestion has a non-blank title
/// 2. A blank title marks the record invalid; only the cleanup pass removes it
/// 3. Identity (UUID) is immutable
/// 4. The episode list is replaced as a whole, never merged
/// 5. Rating, when present, is within 0.0-10.0
