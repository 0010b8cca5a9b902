//! Range selector shared by both chart screens.

use crate::state::app_state::AppState;
use dioxus::prelude::*;
use shared::Range;

/// Dropdown of the four ranges; changing it regenerates the dataset.
#[component]
pub fn RangePicker() -> Element {
    let mut state = use_context::<AppState>();
    let current = state.chart.read().range();
    let palette = state.theme.read().palette();

    let on_change = move |evt: Event<FormData>| {
        state.select_range_id(&evt.value());
    };

    rsx! {
        select {
            style: "height: 50px; width: 150px; background-color: {palette.surface}; color: {palette.foreground}; border: 1px solid {palette.border}; border-radius: 4px;",
            onchange: on_change,
            for (id, label, selected) in Range::ALL.map(|r| (r.id(), r.label(), r == current)) {
                option {
                    key: "{id}",
                    value: id,
                    selected: selected,
                    "{label}"
                }
            }
        }
    }
}
