// Chart geometry: canvas size, plot bounds, point positions and bar shapes
use super::domain::Domain;
use crate::config::settings::ChartSettings;
use shared::DataPoint;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartBounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ChartBounds {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// A data point mapped to canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotPoint {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub value: u32,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarShape {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
}

impl BarShape {
    /// SVG path with rounded top corners and a square base.
    pub fn path(&self) -> String {
        let (x0, x1) = (self.x, self.x + self.width);
        let (top, bottom) = (self.y, self.y + self.height);
        let r = self.corner_radius;
        if r <= 0.0 {
            return format!(
                "M{x0:.2},{bottom:.2} L{x0:.2},{top:.2} L{x1:.2},{top:.2} L{x1:.2},{bottom:.2} Z"
            );
        }
        format!(
            "M{x0:.2},{bottom:.2} L{x0:.2},{:.2} A{r:.2},{r:.2} 0 0 1 {:.2},{top:.2} \
             L{:.2},{top:.2} A{r:.2},{r:.2} 0 0 1 {x1:.2},{:.2} L{x1:.2},{bottom:.2} Z",
            top + r,
            x0 + r,
            x1 - r,
            top + r,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub bounds: ChartBounds,
    pub points: Vec<PlotPoint>,
    pub bars: Vec<BarShape>,
    pub ticks: Vec<Tick>,
}

impl ChartLayout {
    pub fn compute(data: &[DataPoint], domain: Domain, settings: &ChartSettings) -> Self {
        let padding = settings.padding;
        let dp = &settings.domain_padding;
        // Room for the x-axis labels under the plot.
        let label_band = settings.tick_font_size * 2.0;

        let min_width = 2.0 * padding + dp.left + dp.right + settings.slot_width;
        let width = (data.len() as f64 * settings.slot_width).max(min_width);
        let height = settings.canvas_height;

        let bounds = ChartBounds {
            left: padding + dp.left,
            top: padding + dp.top,
            right: width - padding - dp.right,
            bottom: (height - padding - label_band).max(padding + dp.top),
        };

        let slot = if data.is_empty() {
            0.0
        } else {
            bounds.width() / data.len() as f64
        };

        let span = f64::from(domain.span());
        let value_to_y = |value: u32| {
            if span <= 0.0 {
                return bounds.bottom;
            }
            let clamped = f64::from(value.clamp(domain.min, domain.max));
            let ratio = (clamped - f64::from(domain.min)) / span;
            bounds.bottom - ratio * bounds.height()
        };

        let points: Vec<PlotPoint> = data
            .iter()
            .enumerate()
            .map(|(index, point)| PlotPoint {
                index,
                x: bounds.left + slot * (index as f64 + 0.5),
                y: value_to_y(point.hours),
                value: point.hours,
                label: point.label.clone(),
            })
            .collect();

        let bar_width = (slot - settings.bar_gap).max(1.0);
        let bars = points
            .iter()
            .map(|p| {
                let bar_height = bounds.bottom - p.y;
                BarShape {
                    index: p.index,
                    x: p.x - bar_width / 2.0,
                    y: p.y,
                    width: bar_width,
                    height: bar_height,
                    corner_radius: settings
                        .corner_radius
                        .min(bar_width / 2.0)
                        .min(bar_height)
                        .max(0.0),
                }
            })
            .collect();

        // At most `tick_count` labels, spread evenly from the first point.
        let stride = match settings.tick_count {
            0 => 1,
            count => points.len().div_ceil(count).max(1),
        };
        let ticks = points
            .iter()
            .step_by(stride)
            .map(|p| Tick {
                x: p.x,
                y: bounds.bottom + settings.tick_font_size + 4.0,
                label: p.label.clone(),
            })
            .collect();

        ChartLayout {
            width,
            height,
            bounds,
            points,
            bars,
            ticks,
        }
    }

    /// Index of the point whose slot centre is closest to `x`, for drag scrubbing.
    pub fn nearest_point(&self, x: f64) -> Option<usize> {
        self.points
            .iter()
            .min_by(|a, b| (a.x - x).abs().total_cmp(&(b.x - x).abs()))
            .map(|p| p.index)
    }

    /// `x,y` pairs for an SVG polyline through every point.
    pub fn polyline(&self) -> String {
        self.points
            .iter()
            .map(|p| format!("{:.2},{:.2}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
