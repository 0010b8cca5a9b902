// Chart screens and the pieces they share
#![allow(non_snake_case)]
pub mod bar;
pub mod line;

use dioxus::prelude::*;
use dioxus::html::input_data::MouseButton;
use engine::chart::{BarChartModel, ChartLayout, TextMeasurer, Tooltip};
use engine::config::settings::ChartSettings;

use crate::config::theme::ThemePalette;
use crate::config::AppConfig;
use crate::state::app_state::AppState;

/// Everything a chart screen draws for the current model.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartView {
    pub layout: ChartLayout,
    pub tooltip: Option<Tooltip>,
}

pub fn chart_view(
    model: &BarChartModel,
    settings: &ChartSettings,
    measurer: &dyn TextMeasurer,
) -> Option<ChartView> {
    let layout = match model.layout(settings) {
        Ok(layout) => layout,
        Err(e) => {
            tracing::warn!("Cannot lay out {} chart: {}", model.range(), e);
            return None;
        }
    };
    let tooltip = model.tooltip(&layout, settings, Some(measurer));
    Some(ChartView { layout, tooltip })
}

/// Transparent layer over the plot: a press selects the nearest slot and
/// dragging with the button held moves the selection.
#[component]
pub fn PressSurface(layout: ChartLayout) -> Element {
    let mut state = use_context::<AppState>();
    let width = layout.width;
    let height = layout.height;
    let on_press = layout.clone();

    rsx! {
        rect {
            x: "0",
            y: "0",
            width: "{width}",
            height: "{height}",
            fill: "transparent",
            style: "cursor: pointer;",
            onmousedown: move |evt: MouseEvent| {
                if let Some(index) = on_press.nearest_point(evt.element_coordinates().x) {
                    state.press(index);
                }
            },
            onmousemove: move |evt: MouseEvent| {
                if !evt.held_buttons().contains(MouseButton::Primary) {
                    return;
                }
                if let Some(index) = layout.nearest_point(evt.element_coordinates().x) {
                    state.press(index);
                }
            },
        }
    }
}

#[component]
pub fn TooltipOverlay(tooltip: Tooltip, palette: ThemePalette, font_family: String) -> Element {
    let config = use_context::<AppConfig>();
    let settings = &config.chart;

    rsx! {
        g {
            class: "chart-tooltip",
            pointer_events: "none",
            text {
                x: "{tooltip.text_x}",
                y: "{tooltip.text_y}",
                fill: "{palette.label}",
                font_family: "{font_family}",
                font_size: "{settings.tooltip_font_size}",
                "{tooltip.text}"
            }
            circle {
                cx: "{tooltip.marker_x}",
                cy: "{tooltip.marker_y}",
                r: "{settings.marker_radius}",
                fill: "{palette.marker}",
                opacity: "{settings.marker_opacity}",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::fonts::LoadedFont;
    use engine::data::SyntheticSource;

    fn font() -> LoadedFont {
        LoadedFont::bundled("DejaVu Sans").unwrap()
    }

    #[test]
    fn view_has_a_bar_per_point_and_no_tooltip_at_rest() {
        let settings = ChartSettings::default();
        let model = BarChartModel::new(&mut SyntheticSource::seeded(11));
        let font = font();
        let view = chart_view(&model, &settings, &font.metrics(settings.tooltip_font_size)).unwrap();
        assert_eq!(view.layout.bars.len(), model.data().len());
        assert!(view.tooltip.is_none());
    }

    #[test]
    fn pressed_point_gets_a_centred_tooltip() {
        let settings = ChartSettings::default();
        let mut model = BarChartModel::new(&mut SyntheticSource::seeded(11));
        model.press(3).unwrap();
        let font = font();
        let metrics = font.metrics(settings.tooltip_font_size);
        let view = chart_view(&model, &settings, &metrics).unwrap();
        let tooltip = view.tooltip.unwrap();
        let point = &view.layout.points[3];
        assert_eq!(tooltip.text, format!("{} hrs", model.data()[3].hours));
        assert_eq!(tooltip.marker_x, point.x);
        let centred = point.x - metrics.measure_width(&tooltip.text) / 2.0;
        assert!((tooltip.text_x - centred).abs() < 1e-9);
        assert!(tooltip.text_x < point.x);
    }
}
