//! Sesión de aprendizaje: une el controlador con los colaboradores.
//!
//! Ciclo de vida: `start` obtiene los steps del `ContentProvider` una sola
//! vez; las transiciones son síncronas; `finish` entrega el puntaje al
//! `ProgressRecorder`. Abandonar la sesión es simplemente soltarla.

use chrono::{DateTime, Utc};
use flow_core::{Answer, FlowEngine, FlowError, FlowPhase, FlowState, InMemoryEventStore};
use flow_domain::{LessonCatalog, LessonStatus};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::errors::{FetchError, RecordError, SessionError};
use crate::providers::{Ack, ContentProvider, ProgressRecorder, UnlockDataSource};

/// Resultado entregado al llamador tras registrar la finalización.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionReport {
    pub flow_id: String,
    pub score: u32,
    pub step_count: usize,
    /// `score / step_count * 100`.
    pub percentage: f64,
    pub time_spent_seconds: u64,
    pub ack: Ack,
}

#[derive(Debug)]
pub struct LearningSession {
    flow_id: String,
    engine: FlowEngine<InMemoryEventStore>,
    started_at: DateTime<Utc>,
    ack: Option<Ack>,
}

impl LearningSession {
    /// Obtiene el contenido de `flow_id` e inicializa el flujo.
    pub async fn start<P>(provider: &P, flow_id: &str) -> Result<Self, SessionError>
        where P: ContentProvider + ?Sized
    {
        let steps = provider.fetch_steps(flow_id).await.map_err(|e| {
                                                          warn!("fetching steps for '{}' failed: {}", flow_id, e);
                                                          e
                                                      })?;
        Self::from_steps(flow_id, steps, Utc::now())
    }

    /// Inicia una sesión con steps ya obtenidos y un instante de inicio dado.
    pub fn from_steps(flow_id: &str, steps: Vec<flow_core::Step>, started_at: DateTime<Utc>) -> Result<Self, SessionError> {
        let engine = FlowEngine::start(steps)?;
        Ok(Self { flow_id: flow_id.to_string(),
                  engine,
                  started_at,
                  ack: None })
    }

    pub fn flow_id(&self) -> &str {
        &self.flow_id
    }

    pub fn state(&self) -> &FlowState {
        self.engine.state()
    }

    pub fn phase(&self) -> FlowPhase {
        self.engine.phase()
    }

    pub fn engine(&self) -> &FlowEngine<InMemoryEventStore> {
        &self.engine
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn is_recorded(&self) -> bool {
        self.ack.is_some()
    }

    pub fn finish_reading(&mut self) -> Result<&FlowState, FlowError> {
        self.engine.finish_reading()
    }

    pub fn submit_answer(&mut self, step_index: usize, answer: Answer) -> Result<&FlowState, FlowError> {
        self.engine.submit_answer(step_index, answer)
    }

    pub fn advance(&mut self) -> Result<&FlowState, FlowError> {
        self.engine.advance()
    }

    pub fn go_back(&mut self) -> Result<&FlowState, FlowError> {
        self.engine.go_back()
    }

    /// Registra la finalización midiendo el tiempo hasta ahora.
    pub async fn finish<R>(&mut self, recorder: &R) -> Result<CompletionReport, SessionError>
        where R: ProgressRecorder + ?Sized
    {
        self.finish_at(recorder, Utc::now()).await
    }

    /// Registra la finalización con `now` como instante de cierre.
    ///
    /// # Errores
    /// - `FlowError::NotComplete` si el flujo no llegó a `Complete`.
    /// - `RecordError` del colaborador; la sesión queda intacta y se puede
    ///   volver a intentar.
    pub async fn finish_at<R>(&mut self, recorder: &R, now: DateTime<Utc>) -> Result<CompletionReport, SessionError>
        where R: ProgressRecorder + ?Sized
    {
        let state = self.engine.state();
        if !state.is_complete() {
            return Err(FlowError::NotComplete.into());
        }
        if self.ack.is_some() {
            return Err(RecordError::Rejected(format!("completion of '{}' already recorded", self.flow_id)).into());
        }
        let score = state.score();
        let step_count = state.len();
        let percentage = state.percentage();
        let time_spent_seconds = u64::try_from((now - self.started_at).num_seconds()).unwrap_or(0);

        let ack = match recorder.record_completion(&self.flow_id, score, time_spent_seconds).await {
            Ok(ack) => ack,
            Err(e) => {
                warn!("recording completion of '{}' failed: {}", self.flow_id, e);
                return Err(e.into());
            }
        };
        info!("flow '{}' recorded: score {}/{} in {}s", self.flow_id, score, step_count, time_spent_seconds);
        self.ack = Some(ack.clone());
        Ok(CompletionReport { flow_id: self.flow_id.clone(),
                              score,
                              step_count,
                              percentage,
                              time_spent_seconds,
                              ack })
    }
}

/// Estado de la ruta de lecciones de un usuario según su progreso actual.
pub async fn lesson_path<S>(source: &S, user_id: &str, catalog: &LessonCatalog) -> Result<Vec<LessonStatus>, FetchError>
    where S: UnlockDataSource + ?Sized
{
    let progress = source.fetch_progress_value(user_id).await?;
    Ok(catalog.statuses(progress))
}
