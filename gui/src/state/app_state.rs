//! Application state provided through the Dioxus context.
//!
//! `AppState` bundles the reactive signals shared by the shell and both chart
//! screens. Components fetch it with `use_context::<AppState>()`.

use crate::config::theme::Theme;
use dioxus::prelude::*;
use engine::chart::BarChartModel;
use engine::data::SyntheticSource;
use shared::navigation::find_screen;

#[derive(Clone, Copy)]
pub struct AppState {
    /// Navigation id of the open screen, `None` on the screen list.
    pub screen: Signal<Option<&'static str>>,
    pub chart: Signal<BarChartModel>,
    pub theme: Signal<Theme>,
    pub command_palette_visible: Signal<bool>,
    pub error_message: Signal<Option<String>>,
}

impl AppState {
    pub fn new(theme: Theme) -> Self {
        let mut source = SyntheticSource::from_entropy();
        Self {
            screen: Signal::new(None),
            chart: Signal::new(BarChartModel::new(&mut source)),
            theme: Signal::new(theme),
            command_palette_visible: Signal::new(false),
            error_message: Signal::new(None),
        }
    }

    pub fn navigate(&mut self, navigation_id: &str) {
        match find_screen(navigation_id) {
            Some(screen) => {
                tracing::info!("Navigating to {}", screen.navigation_id);
                self.screen.set(Some(screen.navigation_id));
                self.error_message.set(None);
            }
            None => {
                tracing::warn!("No screen registered for navigation id '{}'", navigation_id);
                self.error_message.set(Some(format!("Unknown screen: {}", navigation_id)));
            }
        }
    }

    pub fn go_home(&mut self) {
        self.chart.write().release();
        self.screen.set(None);
    }

    pub fn select_range_id(&mut self, id: &str) {
        let mut source = SyntheticSource::from_entropy();
        let result = self.chart.write().select_range_id(id, &mut source);
        if let Err(e) = result {
            tracing::warn!("{}", e);
            self.error_message.set(Some(e.to_string()));
        }
    }

    pub fn press(&mut self, index: usize) {
        // Drags fire a press per mouse move; only a new slot needs a redraw.
        if self.chart.peek().active() == Some(index) {
            return;
        }
        let result = self.chart.write().press(index);
        if let Err(e) = result {
            tracing::debug!("Ignoring press: {}", e);
        }
    }

    pub fn release(&mut self) {
        if self.chart.peek().active().is_some() {
            self.chart.write().release();
        }
    }

    pub fn toggle_command_palette(&mut self) {
        let visible = *self.command_palette_visible.peek();
        self.command_palette_visible.set(!visible);
    }
}
