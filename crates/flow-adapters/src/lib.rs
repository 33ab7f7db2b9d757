//! flow-adapters: capa de adaptación entre el core y el mundo exterior.
//!
//! Este crate provee:
//! - Traits asíncronos de los colaboradores (`ContentProvider`,
//!   `ProgressRecorder`, `UnlockDataSource`) y versiones en memoria.
//! - Payloads del backend y un `StepEncoder` que los convierte en steps.
//! - `LearningSession`, que obtiene el contenido, aplica transiciones y
//!   entrega el resultado final.

pub mod encoder;
pub mod errors;
pub mod payloads;
pub mod providers;
pub mod sample;
pub mod session;

pub use errors::{FetchError, RecordError, SessionError};
pub use providers::{Ack, ContentProvider, ProgressRecorder, UnlockDataSource};
pub use session::{lesson_path, CompletionReport, LearningSession};
