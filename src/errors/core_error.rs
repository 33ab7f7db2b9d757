use thiserror::Error;

use flow_adapters::{FetchError, SessionError};
use flow_core::FlowError;
use flow_domain::DomainError;

/// Errores de nivel aplicación (binarios y configuración).
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Error interno: {0}")]
    Internal(String),
    #[error("Error en IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error("Error de dominio: {0}")]
    Domain(#[from] DomainError),
    #[error("Error de sesión: {0}")]
    Session(#[from] SessionError),
}

impl From<FlowError> for CoreError {
    fn from(e: FlowError) -> Self {
        CoreError::Session(e.into())
    }
}

impl From<FetchError> for CoreError {
    fn from(e: FetchError) -> Self {
        CoreError::Session(e.into())
    }
}

impl CoreError {
    /// Código de salida de los binarios: 4 rechazo por estado, 5 fallo externo.
    pub fn exit_code(&self) -> i32 {
        match self {
            CoreError::Session(SessionError::Flow(_)) => 4,
            _ => 5,
        }
    }
}
