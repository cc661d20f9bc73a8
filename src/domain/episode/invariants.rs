use super::entity::Episode;
use crate::domain::{DomainError, DomainResult};

/// Validates all Episode invariants
pub fn validate_episode(episode: &Episode) -> DomainResult<()> {
    if episode.temporada == 0 {
        return Err(DomainError::InvariantViolation(
            "Episode season must be 1 or greater".to_string(),
        ));
    }
    if episode.numero_episodio == 0 {
        return Err(DomainError::InvariantViolation(
            "Episode number must be 1 or greater".to_string(),
        ));
    }
    if let Some(valor) = episode.evaluacion {
        if !(0.0..=10.0).contains(&valor) {
            return Err(DomainError::InvariantViolation(format!(
                "Episode rating {} is outside the 0.0-10.0 scale",
                valor
            )));
        }
    }
    Ok(())
}
