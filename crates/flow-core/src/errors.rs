//! Errores del controlador de flujo.
//!
//! Todos los fallos de transición se reportan como variantes tipadas; el
//! controlador nunca reintenta ni silencia errores.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum FlowError {
    #[error("flow has no steps")] EmptyFlow,
    #[error("step {requested} is not the current step ({current})")] InvalidStep { requested: usize, current: usize },
    #[error("step {step_index} requires an answer before advancing")] AnswerRequired { step_index: usize },
    #[error("already at the first step")] AtFirstStep,
    #[error("step {step_index} does not take an answer")] AnswerNotExpected { step_index: usize },
    #[error("answer does not fit step {step_index}: {reason}")] IncompatibleAnswer { step_index: usize, reason: String },
    #[error("step at position {expected} carries index {found}")] MisnumberedStep { expected: usize, found: usize },
    #[error("malformed step {step_index}: {reason}")] MalformedStep { step_index: usize, reason: String },
    #[error("flow is not complete")] NotComplete,
    #[error("journal was recorded for definition {recorded}, steps hash to {actual}")] DefinitionMismatch { recorded: String, actual: String },
    #[error("corrupt journal at seq {seq}: {reason}")] CorruptJournal { seq: u64, reason: String },
}

impl FlowError {
    /// Errores esperables de interacción (la UI los usa para deshabilitar
    /// acciones) frente a errores de programación.
    pub fn is_recoverable(&self) -> bool {
        matches!(self,
                 FlowError::AnswerRequired { .. } | FlowError::AtFirstStep | FlowError::IncompatibleAnswer { .. } | FlowError::NotComplete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(FlowError::EmptyFlow.to_string(), "flow has no steps");
        assert_eq!(FlowError::InvalidStep { requested: 2, current: 0 }.to_string(),
                   "step 2 is not the current step (0)");
        assert_eq!(FlowError::AnswerRequired { step_index: 1 }.to_string(),
                   "step 1 requires an answer before advancing");
    }

    #[test]
    fn recoverable_classification() {
        assert!(FlowError::AnswerRequired { step_index: 0 }.is_recoverable());
        assert!(!FlowError::InvalidStep { requested: 1, current: 0 }.is_recoverable());
        assert!(!FlowError::EmptyFlow.is_recoverable());
    }

    #[test]
    fn errors_roundtrip_through_json() {
        let err = FlowError::CorruptJournal { seq: 3, reason: "x".into() };
        let json = serde_json::to_string(&err).unwrap();
        let back: FlowError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }
}
