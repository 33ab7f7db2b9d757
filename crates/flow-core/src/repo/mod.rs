pub mod types;
pub use types::{definition_hash, FlowRepository, InMemoryFlowRepository};
