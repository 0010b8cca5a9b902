pub mod models;
pub mod navigation;

pub use models::{DataPoint, Range, Screen, UnknownRange};
