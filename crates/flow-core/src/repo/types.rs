//! Reconstrucción (`replay`) de un `FlowState` a partir del journal.
//!
//! El repositorio no guarda estado: re-aplica cada transición registrada con
//! las mismas funciones puras del controlador, de modo que el resultado es
//! idéntico al estado vivo que produjo el journal.
use log::debug;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::constants::ENGINE_VERSION;
use crate::engine::controller;
use crate::errors::FlowError;
use crate::event::{FlowEvent, FlowEventKind};
use crate::hashing::hash_value;
use crate::model::FlowState;
use crate::step::Step;

/// Hash de una lista de steps; ata un journal a los steps con los que se grabó.
pub fn definition_hash(steps: &[Step]) -> String {
    let steps_json = serde_json::to_value(steps).unwrap_or(Value::Null);
    hash_value(&json!({
        "engine_version": ENGINE_VERSION,
        "steps": steps_json,
    }))
}

/// Trait para reconstruir (`replay`) el estado de un flow a partir de eventos.
pub trait FlowRepository {
    fn load(&self, flow_id: Uuid, events: &[FlowEvent], steps: Vec<Step>) -> Result<FlowState, FlowError>;
}

#[derive(Debug, Default)]
pub struct InMemoryFlowRepository;

impl InMemoryFlowRepository {
    pub fn new() -> Self {
        Self
    }
}

impl FlowRepository for InMemoryFlowRepository {
    fn load(&self, flow_id: Uuid, events: &[FlowEvent], steps: Vec<Step>) -> Result<FlowState, FlowError> {
        let actual = definition_hash(&steps);
        let mut events = events.iter();
        match events.next() {
            Some(FlowEvent { kind: FlowEventKind::FlowInitialized { definition_hash, step_count },
                             .. }) => {
                if *definition_hash != actual || *step_count != steps.len() {
                    return Err(FlowError::DefinitionMismatch { recorded: definition_hash.clone(),
                                                               actual });
                }
            }
            Some(other) => return Err(corrupt(other.seq, "journal does not start with FlowInitialized")),
            None => return Err(corrupt(0, "empty journal")),
        }

        let mut state = controller::initialize(steps)?;
        for ev in events {
            if ev.flow_id != flow_id {
                return Err(corrupt(ev.seq, "event belongs to another flow"));
            }
            state = replay_one(&state, ev)?;
        }
        debug!("replayed flow {} up to step {}/{}", flow_id, state.current_index(), state.len());
        Ok(state)
    }
}

fn replay_one(state: &FlowState, ev: &FlowEvent) -> Result<FlowState, FlowError> {
    let reapply = |res: Result<FlowState, FlowError>| res.map_err(|e| corrupt(ev.seq, &e.to_string()));
    match &ev.kind {
        FlowEventKind::FlowInitialized { .. } => Err(corrupt(ev.seq, "duplicate FlowInitialized")),
        FlowEventKind::ReadingFinished { step_index } => {
            expect_cursor(state, *step_index, ev.seq)?;
            reapply(controller::finish_reading(state))
        }
        FlowEventKind::AnswerSubmitted { step_index, answer, .. } => {
            reapply(controller::submit_answer(state, *step_index, answer.clone()))
        }
        FlowEventKind::StepAdvanced { from, to } => {
            expect_cursor(state, *from, ev.seq)?;
            let next = reapply(controller::advance(state))?;
            expect_cursor(&next, *to, ev.seq)?;
            Ok(next)
        }
        FlowEventKind::SteppedBack { from, to } => {
            expect_cursor(state, *from, ev.seq)?;
            let next = reapply(controller::go_back(state))?;
            expect_cursor(&next, *to, ev.seq)?;
            Ok(next)
        }
        FlowEventKind::FlowCompleted { score, .. } => {
            if !state.is_complete() || state.score() != *score {
                return Err(corrupt(ev.seq, "FlowCompleted does not match replayed state"));
            }
            Ok(state.clone())
        }
    }
}

fn expect_cursor(state: &FlowState, index: usize, seq: u64) -> Result<(), FlowError> {
    if state.current_index() == index {
        Ok(())
    } else {
        Err(corrupt(seq, &format!("cursor at {} but event refers to {}", state.current_index(), index)))
    }
}

fn corrupt(seq: u64, reason: &str) -> FlowError {
    FlowError::CorruptJournal { seq,
                                reason: reason.to_string() }
}
