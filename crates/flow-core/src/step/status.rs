/// Fase observable de un flujo.
///
/// Las transiciones válidas son:
/// - `Reading(i)` -> `Answering(i)` (steps con respuesta requerida)
/// - `Reading(i)` -> `Reading(i+1)` | `Complete` (steps de sólo lectura)
/// - `Answering(i)` -> `Answering(i)` (la respuesta se puede revisar)
/// - `Answering(i)` -> `Reading(i+1)` | `Complete`
///
/// `go_back` es la única transición que retrocede el índice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowPhase {
    /// El usuario está leyendo el contenido del step `i`.
    Reading(usize),
    /// La pregunta del step `i` está visible y acepta respuestas.
    Answering(usize),
    /// Todos los steps fueron superados.
    Complete,
}

impl FlowPhase {
    pub fn step_index(&self) -> Option<usize> {
        match self {
            FlowPhase::Reading(i) | FlowPhase::Answering(i) => Some(*i),
            FlowPhase::Complete => None,
        }
    }
}
