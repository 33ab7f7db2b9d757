//! flow-domain: entidades de dominio de la ruta de lecciones.
//!
//! El estado bloqueado/completado de una lección es siempre función pura del
//! progreso externo; nunca se almacena.
mod errors;
mod lesson;

pub use errors::DomainError;
pub use lesson::{evaluate, Difficulty, Lesson, LessonCatalog, LessonEntry, LessonStatus, DEFAULT_THEMES, PROGRESS_PER_LESSON};
