// Command palette (VSCode style) for jumping between screens
#![allow(non_snake_case)]
use dioxus::prelude::*;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use shared::navigation::screens;

use crate::state::app_state::AppState;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Navigate { navigation_id: &'static str },
    Home,
    Exit,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CommandDefinition {
    pub id: usize,
    pub name: String,
    pub description: String,
    pub action: Command,
}

impl CommandDefinition {
    fn new(id: usize, name: &str, description: &str, action: Command) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            action,
        }
    }
}

/// One entry per registered screen, then the fixed commands.
pub fn all_commands() -> Vec<CommandDefinition> {
    let mut commands: Vec<CommandDefinition> = screens()
        .iter()
        .enumerate()
        .map(|(id, screen)| {
            CommandDefinition::new(
                id,
                screen.name,
                &format!("Open the {} screen", screen.navigation_id),
                Command::Navigate {
                    navigation_id: screen.navigation_id,
                },
            )
        })
        .collect();
    let next = commands.len();
    commands.push(CommandDefinition::new(next, "Home", "Back to the screen list", Command::Home));
    commands.push(CommandDefinition::new(next + 1, "Exit Application", "Close the window", Command::Exit));
    commands
}

/// Best fuzzy matches first; an empty query keeps the original order.
pub fn filter_commands(commands: &[CommandDefinition], query: &str) -> Vec<CommandDefinition> {
    if query.trim().is_empty() {
        return commands.to_vec();
    }
    let matcher = SkimMatcherV2::default();
    let mut scored: Vec<(i64, &CommandDefinition)> = commands
        .iter()
        .filter_map(|cmd| matcher.fuzzy_match(&cmd.name, query.trim()).map(|score| (score, cmd)))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, cmd)| cmd.clone()).collect()
}

#[component]
pub fn CommandPalette() -> Element {
    let mut state = use_context::<AppState>();
    let palette = state.theme.read().palette();

    let mut filter_text = use_signal(String::new);
    let mut selected_index = use_signal(|| 0usize);
    let filtered = use_memo(move || filter_commands(&all_commands(), &filter_text.read()));

    // Reset the highlight whenever the result list changes.
    use_effect(move || {
        let _ = filtered.read().len();
        selected_index.set(0);
    });

    if !*state.command_palette_visible.read() {
        return None;
    }

    let mut execute = move |command: Command| {
        state.command_palette_visible.set(false);
        filter_text.set(String::new());
        match command {
            Command::Navigate { navigation_id } => state.navigate(navigation_id),
            Command::Home => state.go_home(),
            Command::Exit => {
                tracing::info!("[COMMAND ACTION] Exit Application");
                dioxus_desktop::window().close();
            }
        }
    };

    let handle_keydown = move |evt: KeyboardEvent| {
        let len = filtered.read().len();
        match evt.key() {
            Key::ArrowDown if len > 0 => selected_index.set((selected_index() + 1) % len),
            Key::ArrowUp if len > 0 => selected_index.set((selected_index() + len - 1) % len),
            Key::Enter => {
                let action = filtered.read().get(selected_index()).map(|cmd| cmd.action.clone());
                if let Some(action) = action {
                    execute(action);
                }
            }
            Key::Escape => {
                state.command_palette_visible.set(false);
                filter_text.set(String::new());
            }
            _ => {}
        }
    };

    let commands = filtered();

    rsx! {
        div {
            class: "command-palette",
            style: "position: fixed; top: 10%; left: 50%; transform: translateX(-50%); background-color: {palette.surface}; color: {palette.foreground}; border: 1px solid {palette.border}; padding: 15px; z-index: 1000; width: 80%; max-width: 600px; border-radius: 8px; box-shadow: 0 5px 15px rgba(0,0,0,0.5);",
            onkeydown: handle_keydown,
            input {
                id: "command-palette-input",
                r#type: "text",
                value: "{filter_text}",
                placeholder: "Go to screen...",
                autofocus: true,
                style: "width: calc(100% - 20px); padding: 10px; margin-bottom: 10px; background-color: {palette.background}; color: {palette.foreground}; border: 1px solid {palette.border}; border-radius: 4px;",
                oninput: move |evt| filter_text.set(evt.value()),
            }
            ul {
                style: "list-style: none; padding: 0; margin: 0; max-height: 300px; overflow-y: auto;",
                if commands.is_empty() {
                    li { style: "padding: 8px; color: {palette.muted};", "No screens match your search." }
                }
                for (idx, bg_color, cmd_def) in commands.into_iter().enumerate().map(|(idx, cmd)| {
                    let bg_color = if idx == selected_index() { palette.border.clone() } else { "transparent".to_string() };
                    (idx, bg_color, cmd)
                }) {
                    li {
                        key: "{cmd_def.id}",
                        style: "padding: 10px 12px; cursor: pointer; border-radius: 3px; background-color: {bg_color};",
                        onclick: {
                            let action = cmd_def.action.clone();
                            move |_| execute(action.clone())
                        },
                        onmouseenter: move |_| selected_index.set(idx),
                        div { style: "font-weight: bold;", "{cmd_def.name}" }
                        div { style: "font-size: 0.9em; color: {palette.muted};", "{cmd_def.description}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_cover_every_screen() {
        let commands = all_commands();
        let targets: Vec<_> = commands
            .iter()
            .filter_map(|c| match c.action {
                Command::Navigate { navigation_id } => Some(navigation_id),
                _ => None,
            })
            .collect();
        assert_eq!(targets, vec!["Line Chart", "Bar Chart"]);
        assert!(commands.iter().any(|c| c.action == Command::Exit));
        let ids: Vec<_> = commands.iter().map(|c| c.id).collect();
        assert_eq!(ids, (0..commands.len()).collect::<Vec<_>>());
    }

    #[test]
    fn empty_query_keeps_everything() {
        let commands = all_commands();
        assert_eq!(filter_commands(&commands, "  "), commands);
    }

    #[test]
    fn fuzzy_query_finds_the_bar_chart() {
        let result = filter_commands(&all_commands(), "bar");
        assert_eq!(
            result.first().map(|c| &c.action),
            Some(&Command::Navigate {
                navigation_id: "Bar Chart"
            })
        );
    }

    #[test]
    fn unmatched_query_is_empty() {
        assert!(filter_commands(&all_commands(), "zzzz").is_empty());
    }
}
