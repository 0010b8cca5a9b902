// Chart rendering settings, loaded as part of the GUI config file
use crate::error::{EngineError, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ChartSettings {
    /// Horizontal space given to each data point; the canvas grows with the dataset.
    pub slot_width: f64,
    pub canvas_height: f64,
    pub padding: f64,
    pub domain_padding: DomainPadding,
    pub bar_gap: f64,
    pub corner_radius: f64,
    pub tick_count: usize,
    pub tick_font_size: f64,
    pub tooltip_font_size: f64,
    /// Distance between the tooltip baseline and the pressed point.
    pub tooltip_offset: f64,
    pub marker_radius: f64,
    pub marker_opacity: f64,
    pub gradient: Gradient,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DomainPadding {
    pub left: f64,
    pub right: f64,
    pub top: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Gradient {
    pub start: String,
    pub end: String,
}

impl Default for ChartSettings {
    fn default() -> Self {
        ChartSettings {
            slot_width: 80.0,
            canvas_height: 480.0,
            padding: 5.0,
            domain_padding: DomainPadding::default(),
            bar_gap: 5.0,
            corner_radius: 10.0,
            tick_count: 5,
            tick_font_size: 12.0,
            tooltip_font_size: 24.0,
            tooltip_offset: 15.0,
            marker_radius: 8.0,
            marker_opacity: 0.8,
            gradient: Gradient::default(),
        }
    }
}

impl Default for DomainPadding {
    fn default() -> Self {
        DomainPadding {
            left: 50.0,
            right: 50.0,
            top: 30.0,
        }
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Gradient {
            start: "#FF69B4".to_string(),
            end: "#FFB6C150".to_string(),
        }
    }
}

impl ChartSettings {
    pub fn validate(&self) -> Result<()> {
        if !(self.slot_width > 0.0) {
            return Err(EngineError::ConfigError(format!(
                "slot_width must be positive, got {}",
                self.slot_width
            )));
        }
        if !(self.canvas_height > 0.0) {
            return Err(EngineError::ConfigError(format!(
                "canvas_height must be positive, got {}",
                self.canvas_height
            )));
        }
        if self.bar_gap < 0.0 || self.padding < 0.0 {
            return Err(EngineError::ConfigError(
                "bar_gap and padding cannot be negative".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.marker_opacity) {
            return Err(EngineError::ConfigError(format!(
                "marker_opacity must be within 0..=1, got {}",
                self.marker_opacity
            )));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let settings: ChartSettings = serde_json::from_str(json)
            .map_err(|e| EngineError::ConfigError(format!("invalid chart settings: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = ChartSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.slot_width, 80.0);
        assert_eq!(settings.domain_padding.top, 30.0);
        assert_eq!(settings.gradient.start, "#FF69B4");
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let settings = ChartSettings::from_json(r#"{ "bar_gap": 8, "domain_padding": { "top": 40 } }"#).unwrap();
        assert_eq!(settings.bar_gap, 8.0);
        assert_eq!(settings.domain_padding.top, 40.0);
        assert_eq!(settings.domain_padding.left, 50.0);
        assert_eq!(settings.tooltip_offset, 15.0);
    }

    #[test]
    fn rejects_zero_slot_width() {
        let err = ChartSettings::from_json(r#"{ "slot_width": 0 }"#).unwrap_err();
        assert!(matches!(err, EngineError::ConfigError(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            ChartSettings::from_json("{ slot_width: }"),
            Err(EngineError::ConfigError(_))
        ));
    }
}
