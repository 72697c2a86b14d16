pub mod engine;

pub use engine::{DealStyle, EngineConfig};
