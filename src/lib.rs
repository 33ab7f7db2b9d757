//! readflow
//!
//! Este crate actúa como la librería de aplicación de readflow:
//! - Expone `errors` con los errores de nivel aplicación.
//! - Expone `config` para leer la configuración del entorno e iniciar el logging.
//! - Reexporta los crates del workspace para los binarios.
//!
//! La lógica de flujos vive en `flow-core`; la ruta de lecciones en
//! `flow-domain`; colaboradores y sesiones en `flow-adapters`.

pub mod config;
pub mod errors;

pub use flow_adapters as adapters;
pub use flow_core as flow;
pub use flow_domain as domain;
