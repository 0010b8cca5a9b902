pub mod generator;

pub use generator::{generate_data, DataSource, GenerationPolicy, SyntheticSource};
