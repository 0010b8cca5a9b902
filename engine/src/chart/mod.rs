// Derived display values for the chart screens
pub mod domain;
pub mod layout;
pub mod model;
pub mod tooltip;

pub use domain::{calculate_domain, Domain};
pub use layout::{BarShape, ChartBounds, ChartLayout, PlotPoint, Tick};
pub use model::BarChartModel;
pub use tooltip::{TextMeasurer, Tooltip};
