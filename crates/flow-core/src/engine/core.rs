//! Core FlowEngine implementation

use log::{debug, info};
use uuid::Uuid;

use super::controller;
use crate::errors::FlowError;
use crate::event::{EventStore, FlowEvent, FlowEventKind, InMemoryEventStore};
use crate::model::FlowState;
use crate::repo::{definition_hash, FlowRepository};
use crate::step::{Answer, FlowPhase, Step};

/// Sesión viva de un flujo.
///
/// Mantiene el `FlowState` actual y registra en el `EventStore` cada
/// transición aceptada. Un único escritor: todas las transiciones toman
/// `&mut self`, así que el llamador debe serializar eventos concurrentes.
#[derive(Debug)]
pub struct FlowEngine<E>
    where E: EventStore
{
    flow_id: Uuid,
    event_store: E,
    state: FlowState,
    /// `FlowCompleted` ya está en el journal; volver atrás y re-completar no
    /// lo repite.
    completion_journaled: bool,
}

impl FlowEngine<InMemoryEventStore> {
    /// Inicia un flujo nuevo con journal en memoria y `flow_id` aleatorio.
    pub fn start(steps: Vec<Step>) -> Result<Self, FlowError> {
        Self::start_with_store(InMemoryEventStore::default(), Uuid::new_v4(), steps)
    }
}

impl<E> FlowEngine<E> where E: EventStore
{
    /// Inicia un flujo y registra `FlowInitialized` en la store dada.
    pub fn start_with_store(mut event_store: E, flow_id: Uuid, steps: Vec<Step>) -> Result<Self, FlowError> {
        let hash = definition_hash(&steps);
        let state = controller::initialize(steps)?;
        event_store.append_kind(flow_id,
                                FlowEventKind::FlowInitialized { definition_hash: hash,
                                                                 step_count: state.len() });
        debug!("flow {} initialized with {} steps", flow_id, state.len());
        Ok(Self { flow_id,
                  event_store,
                  state,
                  completion_journaled: false })
    }

    /// Reconstruye una sesión a partir del journal existente de `flow_id`.
    pub fn restore<R>(event_store: E, repository: &R, flow_id: Uuid, steps: Vec<Step>) -> Result<Self, FlowError>
        where R: FlowRepository
    {
        let events = event_store.list(flow_id);
        let state = repository.load(flow_id, &events, steps)?;
        let completion_journaled = events.iter()
                                         .any(|e| matches!(e.kind, FlowEventKind::FlowCompleted { .. }));
        Ok(Self { flow_id,
                  event_store,
                  state,
                  completion_journaled })
    }

    pub fn flow_id(&self) -> Uuid {
        self.flow_id
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn phase(&self) -> FlowPhase {
        self.state.phase()
    }

    pub fn event_store(&self) -> &E {
        &self.event_store
    }

    /// Devuelve la store (por ejemplo para restaurar la sesión más tarde).
    pub fn into_event_store(self) -> E {
        self.event_store
    }

    pub fn events(&self) -> Vec<FlowEvent> {
        self.event_store.list(self.flow_id)
    }

    /// Secuencia compacta de códigos de evento (ver `FlowEventKind::code`).
    pub fn event_codes(&self) -> Vec<&'static str> {
        self.events().iter().map(|e| e.kind.code()).collect()
    }

    pub fn submit_answer(&mut self, step_index: usize, answer: Answer) -> Result<&FlowState, FlowError> {
        let next = controller::submit_answer(&self.state, step_index, answer.clone());
        let correct = next.as_ref()
                          .map(|s| s.steps()[step_index].is_correct(&answer))
                          .unwrap_or(false);
        self.commit(next,
                    FlowEventKind::AnswerSubmitted { step_index,
                                                     answer,
                                                     correct })
    }

    pub fn advance(&mut self) -> Result<&FlowState, FlowError> {
        let from = self.state.current_index();
        let next = controller::advance(&self.state);
        self.commit(next, FlowEventKind::StepAdvanced { from, to: from + 1 })
    }

    pub fn go_back(&mut self) -> Result<&FlowState, FlowError> {
        let from = self.state.current_index();
        let next = controller::go_back(&self.state);
        self.commit(next,
                    FlowEventKind::SteppedBack { from,
                                                 to: from.saturating_sub(1) })
    }

    pub fn finish_reading(&mut self) -> Result<&FlowState, FlowError> {
        let step_index = self.state.current_index();
        let next = controller::finish_reading(&self.state);
        self.commit(next, FlowEventKind::ReadingFinished { step_index })
    }

    fn commit(&mut self, next: Result<FlowState, FlowError>, kind: FlowEventKind) -> Result<&FlowState, FlowError> {
        let next = match next {
            Ok(s) => s,
            Err(e) => {
                debug!("flow {}: transition rejected: {}", self.flow_id, e);
                return Err(e);
            }
        };
        self.state = next;
        self.event_store.append_kind(self.flow_id, kind);
        if !self.completion_journaled && self.state.is_complete() {
            self.completion_journaled = true;
            info!("flow {} complete with score {}/{}", self.flow_id, self.state.score(), self.state.len());
            self.event_store.append_kind(self.flow_id,
                                         FlowEventKind::FlowCompleted { score: self.state.score(),
                                                                        step_count: self.state.len() });
        }
        Ok(&self.state)
    }
}
