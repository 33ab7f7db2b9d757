//! Engine: controlador puro (`controller`) y `FlowEngine`, que aplica las
//! transiciones sobre un estado vivo y las registra en un `EventStore`.

pub mod controller;
pub mod core;

pub use self::core::FlowEngine;
pub use controller::{advance, finish_reading, go_back, initialize, submit_answer};
