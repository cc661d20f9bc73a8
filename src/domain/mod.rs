// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file declares all domain modules and re-exports their public API.
// All other modules import from `crate::domain::*`

use thiserror::Error;

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod category;
pub mod episode;
pub mod series;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Genre taxonomy
pub use category::Category;

// Series domain
pub use series::{validate_series, Series};

// Episode domain
pub use episode::{validate_episode, Episode};

// ============================================================================
// DOMAIN ERRORS
// ============================================================================

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
