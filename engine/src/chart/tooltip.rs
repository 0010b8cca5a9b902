// Tooltip text and placement for a pressed point
use super::layout::PlotPoint;

/// Advance width of rendered text in pixels.
pub trait TextMeasurer {
    fn measure_width(&self, text: &str) -> f64;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub text: String,
    /// Left edge of the text baseline.
    pub text_x: f64,
    pub text_y: f64,
    pub marker_x: f64,
    pub marker_y: f64,
}

impl Tooltip {
    pub fn text_for(hours: u32) -> String {
        format!("{} hrs", hours)
    }

    pub fn for_point(point: &PlotPoint, measurer: Option<&dyn TextMeasurer>, offset: f64) -> Self {
        let text = Self::text_for(point.value);
        // Without a loaded font there is nothing to centre on.
        let text_x = match measurer {
            Some(m) => point.x - m.measure_width(&text) / 2.0,
            None => 0.0,
        };
        Tooltip {
            text_x,
            text_y: point.y - offset,
            marker_x: point.x,
            marker_y: point.y,
            text,
        }
    }
}
