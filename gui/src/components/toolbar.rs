// Toolbar: screen title, way back home, palette and theme toggles
#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::state::app_state::AppState;

#[component]
pub fn Toolbar() -> Element {
    let mut state = use_context::<AppState>();
    let config = use_context::<AppConfig>();
    let palette = state.theme.read().palette();
    let current_screen = *state.screen.read();
    let title = current_screen.unwrap_or(config.app.title.as_str()).to_string();
    let button_style = format!(
        "background: none; border: 1px solid {}; color: {}; border-radius: 4px; padding: 4px 10px; cursor: pointer;",
        palette.border, palette.foreground
    );

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 8px; padding: 10px 12px; border-bottom: 1px solid {palette.border};",
            if current_screen.is_some() {
                button {
                    style: "{button_style}",
                    onclick: move |_| state.go_home(),
                    "← Back"
                }
            }
            span { style: "flex: 1; font-weight: bold;", "{title}" }
            button {
                style: "{button_style}",
                title: "{config.shortcuts.command_palette}",
                onclick: move |_| state.toggle_command_palette(),
                "Screens"
            }
            button {
                style: "{button_style}",
                onclick: move |_| {
                    let next = state.theme.peek().toggled();
                    state.theme.set(next);
                },
                "Theme"
            }
        }
    }
}
