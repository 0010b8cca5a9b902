// Engine library root: data generation and chart computations, no UI code.

pub mod chart;
pub mod config;
pub mod data;
pub mod error;

pub use error::{EngineError, Result};
