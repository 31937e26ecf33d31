//! Option list for choice steps
//!
//! Multi-choice steps render as a checkbox list, single-choice steps as a
//! radio list. The web form shows each option as a photo tile; in the
//! terminal the marker carries the selection state instead.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{List, ListItem, ListState},
    Frame,
};

use crate::wizard::StepKind;

use super::super::app::App;

/// Render the option list for the active choice step
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(step) = app.wizard.current_step() else {
        return;
    };

    let items: Vec<ListItem> = step
        .options
        .iter()
        .map(|option| {
            let selected = match step.kind {
                StepKind::MultiChoice => app.wizard.answers().is_selected(step.field, option),
                _ => app.wizard.answers().text(step.field) == *option,
            };

            let marker = match (step.kind, selected) {
                (StepKind::MultiChoice, true) => "[x] ",
                (StepKind::MultiChoice, false) => "[ ] ",
                (_, true) => "(o) ",
                (_, false) => "( ) ",
            };

            let style = if selected {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            ListItem::new(format!("{}{}", marker, option)).style(style)
        })
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.highlighted));

    frame.render_stateful_widget(list, area, &mut state);
}
