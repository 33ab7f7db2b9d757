//! Implementaciones en memoria de los colaboradores (demo y tests).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use flow_core::Step;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Ack, ContentProvider, ProgressRecorder, UnlockDataSource};
use crate::errors::{FetchError, RecordError};

/// Catálogo fijo de flujos, en orden de registro.
#[derive(Debug, Default, Clone)]
pub struct InMemoryContentProvider {
    flows: IndexMap<String, Vec<Step>>,
}

impl InMemoryContentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra (o reemplaza) los steps de un flujo.
    pub fn register(&mut self, flow_id: impl Into<String>, steps: Vec<Step>) {
        self.flows.insert(flow_id.into(), steps);
    }

    pub fn with_flow(mut self, flow_id: impl Into<String>, steps: Vec<Step>) -> Self {
        self.register(flow_id, steps);
        self
    }

    /// Ids registrados en orden de registro.
    pub fn flow_ids(&self) -> Vec<&str> {
        self.flows.keys().map(String::as_str).collect()
    }
}

#[async_trait]
impl ContentProvider for InMemoryContentProvider {
    async fn fetch_steps(&self, flow_id: &str) -> Result<Vec<Step>, FetchError> {
        self.flows
            .get(flow_id)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(flow_id.to_string()))
    }
}

/// Registro de una finalización aceptada.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRecord {
    pub score: u32,
    pub time_spent_seconds: u64,
    pub recorded_at: DateTime<Utc>,
}

/// Guarda todas las finalizaciones por flujo. Compartible entre tareas.
#[derive(Debug, Default)]
pub struct InMemoryProgressRecorder {
    records: DashMap<String, Vec<CompletionRecord>>,
}

impl InMemoryProgressRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records_for(&self, flow_id: &str) -> Vec<CompletionRecord> {
        self.records.get(flow_id).map(|r| r.value().clone()).unwrap_or_default()
    }

    /// Total de finalizaciones registradas (todas los flujos).
    pub fn completed_count(&self) -> usize {
        self.records.iter().map(|r| r.value().len()).sum()
    }
}

#[async_trait]
impl ProgressRecorder for InMemoryProgressRecorder {
    async fn record_completion(&self, flow_id: &str, score: u32, time_spent_seconds: u64) -> Result<Ack, RecordError> {
        if flow_id.is_empty() {
            return Err(RecordError::Rejected("empty flow id".into()));
        }
        let recorded_at = Utc::now();
        self.records
            .entry(flow_id.to_string())
            .or_default()
            .push(CompletionRecord { score,
                                     time_spent_seconds,
                                     recorded_at });
        Ok(Ack { flow_id: flow_id.to_string(),
                 recorded_at })
    }
}

/// Progreso fijo por usuario; usuarios desconocidos tienen progreso 0.
#[derive(Debug, Default)]
pub struct StaticProgressSource {
    values: DashMap<String, u32>,
}

impl StaticProgressSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, user_id: impl Into<String>, progress: u32) {
        self.values.insert(user_id.into(), progress);
    }
}

#[async_trait]
impl UnlockDataSource for StaticProgressSource {
    async fn fetch_progress_value(&self, user_id: &str) -> Result<u32, FetchError> {
        Ok(self.values.get(user_id).map(|v| *v).unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flow_core::StepContent;

    #[tokio::test]
    async fn content_provider_reports_missing_flow() {
        let provider = InMemoryContentProvider::new();
        assert_eq!(provider.fetch_steps("nope").await, Err(FetchError::NotFound("nope".into())));
    }

    #[tokio::test]
    async fn content_provider_keeps_registration_order() {
        let step = Step::read_only(0, StepContent::counting(1));
        let provider = InMemoryContentProvider::new().with_flow("b", vec![])
                                                     .with_flow("a", vec![step.clone()]);
        assert_eq!(provider.flow_ids(), vec!["b", "a"]);
        assert_eq!(provider.fetch_steps("a").await.unwrap(), vec![step]);
    }

    #[tokio::test]
    async fn recorder_accumulates_records() {
        let recorder = InMemoryProgressRecorder::new();
        recorder.record_completion("story-1", 3, 40).await.unwrap();
        recorder.record_completion("story-1", 4, 35).await.unwrap();
        assert_eq!(recorder.records_for("story-1").len(), 2);
        assert_eq!(recorder.completed_count(), 2);
        assert!(recorder.record_completion("", 1, 1).await.is_err());
    }

    #[tokio::test]
    async fn progress_source_defaults_to_zero() {
        let source = StaticProgressSource::new();
        source.set("kid", 12);
        assert_eq!(source.fetch_progress_value("kid").await, Ok(12));
        assert_eq!(source.fetch_progress_value("other").await, Ok(0));
    }
}
