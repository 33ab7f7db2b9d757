//! flow-core: controlador secuencial de flujos de aprendizaje.
//!
//! Un flujo (evaluación de lectura, cuento, juego) es una lista ordenada de
//! steps. El controlador lleva la posición actual, las respuestas y el
//! puntaje, y decide si se puede avanzar. No hace I/O: el contenido llega
//! ya cargado y el puntaje final lo entrega el llamador.
pub mod constants;
pub mod engine;
pub mod errors;
pub mod event;
pub mod hashing;
pub mod model;
pub mod repo;
pub mod step;

pub use engine::FlowEngine;
pub use errors::FlowError;
pub use event::{EventStore, FlowEvent, FlowEventKind, InMemoryEventStore};
pub use model::FlowState;
pub use repo::{definition_hash, FlowRepository, InMemoryFlowRepository};
pub use step::{Answer, AnswerKind, FlowPhase, Step, StepContent};
