//! `FlowState`: objeto de sesión mutable sólo a través del controlador.
//!
//! Los steps se fijan al inicializar y se comparten (`Arc`) entre las copias
//! que produce cada transición, de modo que clonar el estado sólo copia el
//! cursor, las respuestas y el puntaje.
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::step::{Answer, FlowPhase, Step};

#[derive(Debug, Clone, PartialEq)]
pub struct FlowState {
    pub(crate) steps: Arc<[Step]>,
    pub(crate) current_index: usize,
    pub(crate) answers: BTreeMap<usize, Answer>,
    pub(crate) score: u32,
    /// Steps que ya sumaron punto (nunca se acreditan dos veces).
    pub(crate) credited: BTreeSet<usize>,
    /// La pregunta del step actual fue revelada con `finish_reading`.
    pub(crate) revealed: bool,
}

impl FlowState {
    pub(crate) fn new(steps: Vec<Step>) -> Self {
        Self { steps: steps.into(),
               current_index: 0,
               answers: BTreeMap::new(),
               score: 0,
               credited: BTreeSet::new(),
               revealed: false }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Siempre falso para un estado construido con `initialize`.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// `0..len` durante el flujo, `len` cuando está completo.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_step(&self) -> Option<&Step> {
        self.steps.get(self.current_index)
    }

    pub fn answers(&self) -> &BTreeMap<usize, Answer> {
        &self.answers
    }

    pub fn answer_for(&self, step_index: usize) -> Option<&Answer> {
        self.answers.get(&step_index)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_complete(&self) -> bool {
        self.current_index == self.steps.len()
    }

    pub fn phase(&self) -> FlowPhase {
        match self.current_step() {
            None => FlowPhase::Complete,
            Some(step) if step.requires_answer && (self.revealed || self.answers.contains_key(&step.index)) => {
                FlowPhase::Answering(step.index)
            }
            Some(step) => FlowPhase::Reading(step.index),
        }
    }

    /// Si `advance` sería aceptado ahora (habilita el botón "continuar").
    pub fn can_advance(&self) -> bool {
        match self.current_step() {
            None => false,
            Some(step) => !step.requires_answer || self.answers.contains_key(&step.index),
        }
    }

    /// Puntaje normalizado a 0..=100 sobre la cantidad total de steps.
    pub fn percentage(&self) -> f64 {
        if self.steps.is_empty() {
            return 0.0;
        }
        f64::from(self.score) / self.steps.len() as f64 * 100.0
    }
}
