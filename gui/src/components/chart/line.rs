// Line chart screen: the same hours series drawn as a polyline
#![allow(non_snake_case)]
use dioxus::prelude::*;

use super::{chart_view, ChartView, PressSurface, TooltipOverlay};
use crate::components::range_picker::RangePicker;
use crate::config::fonts::LoadedFont;
use crate::config::AppConfig;
use crate::state::app_state::AppState;

const LINE_WIDTH: f64 = 3.0;

#[component]
pub fn LineChartScreen() -> Element {
    let mut state = use_context::<AppState>();
    let config = use_context::<AppConfig>();
    let font = use_context::<LoadedFont>();
    let palette = state.theme.read().palette();
    let settings = &config.chart;

    let metrics = font.metrics(settings.tooltip_font_size);
    let Some(ChartView { layout, tooltip }) = chart_view(&state.chart.read(), settings, &metrics) else {
        return rsx! {
            div { style: "padding: 20px; color: {palette.muted};", "No data for this range." }
        };
    };

    let points = layout.polyline();
    let font_family = font.css_family();
    let tick_size = settings.tick_font_size;
    let line_color = settings.gradient.start.clone();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; flex: 1; padding: 30px 5px;",
            div { style: "padding-bottom: 20px;", RangePicker {} }
            div {
                style: "overflow-x: auto; overflow-y: hidden; padding-top: 10px;",
                svg {
                    width: "{layout.width}",
                    height: "{layout.height}",
                    onmouseup: move |_| state.release(),
                    onmouseleave: move |_| state.release(),
                    polyline {
                        points: "{points}",
                        fill: "none",
                        stroke: "{line_color}",
                        stroke_width: "{LINE_WIDTH}",
                        stroke_linejoin: "round",
                    }
                    for tick in layout.ticks.iter() {
                        text {
                            x: "{tick.x}",
                            y: "{tick.y}",
                            text_anchor: "middle",
                            fill: "{palette.label}",
                            font_family: "{font_family}",
                            font_size: "{tick_size}",
                            "{tick.label}"
                        }
                    }
                    PressSurface { layout: layout.clone() }
                    if let Some(tooltip) = tooltip {
                        TooltipOverlay { tooltip: tooltip, palette: palette.clone(), font_family: font_family.clone() }
                    }
                }
            }
        }
    }
}
