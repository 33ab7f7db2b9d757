//! Errores de los colaboradores externos y de la sesión.

use flow_core::FlowError;
use thiserror::Error;

/// Fallo al obtener contenido o progreso.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("flow not found: {0}")]
    NotFound(String),
    #[error("content source unavailable: {0}")]
    Unavailable(String),
    #[error("cannot decode content: {0}")]
    Decode(String),
}

/// Fallo al registrar una finalización.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("completion rejected: {0}")]
    Rejected(String),
    #[error("progress recorder unavailable: {0}")]
    Unavailable(String),
}

/// Error de una sesión de aprendizaje: agrupa los anteriores.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SessionError {
    #[error(transparent)]
    Flow(#[from] FlowError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Record(#[from] RecordError),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e.to_string())
    }
}
