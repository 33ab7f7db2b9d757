//! Modelos del flujo (estado de sesión).

mod state;

pub use state::FlowState;
