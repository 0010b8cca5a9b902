// Bar chart screen: range picker plus a horizontally scrolling SVG chart
#![allow(non_snake_case)]
use dioxus::prelude::*;

use super::{chart_view, ChartView, PressSurface, TooltipOverlay};
use crate::components::range_picker::RangePicker;
use crate::config::fonts::LoadedFont;
use crate::config::AppConfig;
use crate::state::app_state::AppState;

const GRADIENT_ID: &str = "bar-gradient";

#[component]
pub fn BarChartScreen() -> Element {
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

    let font_family = font.css_family();
    let tick_size = settings.tick_font_size;

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
                    defs {
                        linearGradient {
                            id: GRADIENT_ID,
                            x1: "0",
                            y1: "0",
                            x2: "0",
                            y2: "1",
                            stop { offset: "0%", stop_color: "{settings.gradient.start}" }
                            stop { offset: "100%", stop_color: "{settings.gradient.end}" }
                        }
                    }
                    for bar in layout.bars.iter() {
                        path {
                            key: "{bar.index}",
                            d: bar.path(),
                            fill: "url(#{GRADIENT_ID})",
                        }
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
