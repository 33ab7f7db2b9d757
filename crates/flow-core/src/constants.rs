//! Constantes del motor de flujos.
//!
//! `ENGINE_VERSION` forma parte del `definition_hash`: un journal grabado con
//! otra versión del motor no se puede reproducir sobre los mismos steps.

/// Versión lógica del motor. Mantener estable mientras el formato de eventos
/// y la semántica de transiciones no cambien.
pub const ENGINE_VERSION: &str = "R1.0";

/// Rango por defecto de las respuestas numéricas (`CountingInput`).
pub const DEFAULT_COUNTING_MIN: i64 = 0;
pub const DEFAULT_COUNTING_MAX: i64 = 20;
