//! Home screen: one entry per registered chart screen.

use crate::state::app_state::AppState;
use dioxus::prelude::*;
use shared::navigation::screens;

#[component]
pub fn ScreenList() -> Element {
    let mut state = use_context::<AppState>();
    let palette = state.theme.read().palette();

    rsx! {
        ul {
            style: "list-style: none; margin: 0; padding: 16px; display: flex; flex-direction: column; gap: 12px;",
            for screen in screens() {
                li {
                    key: "{screen.navigation_id}",
                    style: "padding: 18px 16px; background-color: {palette.surface}; border: 1px solid {palette.border}; border-radius: 8px; cursor: pointer; font-size: 1.1em;",
                    onclick: move |_| state.navigate(screen.navigation_id),
                    "{screen.name}"
                }
            }
        }
    }
}
