// errors.rs
use thiserror::Error;

/// Error del dominio de lecciones
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Error de validación: {0}")]
    ValidationError(String),
}
