//! Colaboradores externos consumidos por las sesiones.
//!
//! Los tres son request/response asíncronos; el controlador del core nunca los
//! llama directamente.

mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use flow_core::Step;
use serde::{Deserialize, Serialize};

use crate::errors::{FetchError, RecordError};

pub use memory::{CompletionRecord, InMemoryContentProvider, InMemoryProgressRecorder, StaticProgressSource};

/// Entrega los steps de un flujo.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    async fn fetch_steps(&self, flow_id: &str) -> Result<Vec<Step>, FetchError>;
}

/// Acuse de recibo de una finalización registrada.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub flow_id: String,
    pub recorded_at: DateTime<Utc>,
}

/// Recibe el resultado de un flujo terminado.
#[async_trait]
pub trait ProgressRecorder: Send + Sync {
    async fn record_completion(&self, flow_id: &str, score: u32, time_spent_seconds: u64) -> Result<Ack, RecordError>;
}

/// Fuente autoritativa del progreso de un usuario (actividades completadas).
#[async_trait]
pub trait UnlockDataSource: Send + Sync {
    async fn fetch_progress_value(&self, user_id: &str) -> Result<u32, FetchError>;
}
