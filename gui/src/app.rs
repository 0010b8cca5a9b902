#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::navigation::{BAR_CHART, LINE_CHART};

use crate::components::chart::bar::BarChartScreen;
use crate::components::chart::line::LineChartScreen;
use crate::components::command_palette::CommandPalette;
use crate::components::screen_list::ScreenList;
use crate::components::toolbar::Toolbar;
use crate::config::fonts::LoadedFont;
use crate::config::{AppConfig, Shortcut};
use crate::state::app_state::AppState;

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let font = use_context::<LoadedFont>();
    let mut state = use_context_provider(|| {
        let theme = config.app.theme.resolve(os_prefers_dark());
        tracing::info!("Using {:?} theme", theme);
        AppState::new(theme)
    });
    let palette = state.theme.read().palette();
    let font_family = font.css_family();

    let palette_shortcut = config.palette_shortcut();
    let home_shortcut = config.home_shortcut();
    let handle_keydown = move |evt: KeyboardEvent| {
        let key = evt.key().to_string();
        let modifiers = evt.modifiers();
        let pressed = |shortcut: &Option<Shortcut>| {
            shortcut.as_ref().is_some_and(|s| {
                s.matches(&key, modifiers.ctrl() || modifiers.meta(), modifiers.shift(), modifiers.alt())
            })
        };
        if pressed(&palette_shortcut) {
            state.toggle_command_palette();
        } else if pressed(&home_shortcut) {
            state.go_home();
        }
    };

    let error = state.error_message.read().clone();
    let screen = match *state.screen.read() {
        Some(BAR_CHART) => rsx! { BarChartScreen {} },
        Some(LINE_CHART) => rsx! { LineChartScreen {} },
        _ => rsx! { ScreenList {} },
    };

    rsx! {
        div {
            tabindex: "0",
            style: "display: flex; flex-direction: column; min-height: 100vh; margin: 0; background-color: {palette.background}; color: {palette.foreground}; font-family: {font_family}; outline: none;",
            onkeydown: handle_keydown,
            Toolbar {}
            if let Some(message) = error {
                div {
                    style: "padding: 8px 12px; background-color: #5c1f1f; color: #ffdede;",
                    onclick: move |_| state.error_message.set(None),
                    "{message}"
                }
            }
            {screen}
            CommandPalette {}
        }
    }
}

fn os_prefers_dark() -> bool {
    matches!(dioxus_desktop::window().window.theme(), dioxus_desktop::tao::window::Theme::Dark)
}
