//! Tipos de evento del flujo y estructura `FlowEvent`.
//!
//! Rol en el flujo:
//! - `FlowEngine` agrega un evento por cada transición aceptada a un
//!   `EventStore` append-only. Las transiciones rechazadas no se registran.
//! - El `FlowRepository` reconstruye el `FlowState` reproduciendo estos
//!   eventos sobre la misma lista de steps.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::step::Answer;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FlowEventKind {
    /// Primer evento de un `flow_id`: fija el hash de la definición y la
    /// cantidad de steps.
    FlowInitialized { definition_hash: String, step_count: usize },
    /// El usuario terminó de leer el step (revela la pregunta o avanza).
    ReadingFinished { step_index: usize },
    /// Respuesta registrada. `correct` es informativo; el replay lo recalcula.
    AnswerSubmitted { step_index: usize, answer: Answer, correct: bool },
    StepAdvanced { from: usize, to: usize },
    SteppedBack { from: usize, to: usize },
    /// Cierre: el cursor alcanzó `step_count`. Derivado, no se reproduce.
    FlowCompleted { score: u32, step_count: usize },
}

impl FlowEventKind {
    /// Código compacto de una letra (útil para logs y asserts de secuencia).
    pub fn code(&self) -> &'static str {
        match self {
            FlowEventKind::FlowInitialized { .. } => "I",
            FlowEventKind::ReadingFinished { .. } => "R",
            FlowEventKind::AnswerSubmitted { .. } => "A",
            FlowEventKind::StepAdvanced { .. } => "F",
            FlowEventKind::SteppedBack { .. } => "B",
            FlowEventKind::FlowCompleted { .. } => "C",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowEvent {
    pub seq: u64, // asignado por el EventStore (orden append)
    pub flow_id: Uuid,
    pub kind: FlowEventKind,
    pub ts: DateTime<Utc>, // metadato, no participa del replay
}
