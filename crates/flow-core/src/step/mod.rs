//! Definiciones relacionadas a Steps.
//!
//! Un Step es una unidad ordenada de contenido dentro de un flujo (escena de
//! cuento, pregunta de evaluación, elemento de juego). Este módulo define:
//! - `Step`: posición, contenido y respuesta correcta opcional.
//! - `StepContent`: tipo suma cerrado con las variantes de contenido.
//! - `Answer`: respuesta enviada por el usuario.
//! - `FlowPhase`: fase derivada del flujo (`Reading`, `Answering`, `Complete`).

pub mod answer;
pub mod definition;
mod status;

pub use answer::{Answer, AnswerKind};
pub use definition::{Step, StepContent};
pub use status::FlowPhase;
