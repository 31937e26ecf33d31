//! TUI views
//!
//! Renders the active step: a question header, one of the four step bodies,
//! the navigation hints, and the status bar. Once the wizard completes, the
//! thank-you screen replaces everything.

pub mod choices;
pub mod complete;
pub mod contact;
pub mod number;
pub mod status_bar;

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::wizard::StepKind;

use super::app::App;
use super::layout::WizardLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    if app.wizard.is_completed() {
        complete::render(frame);
        return;
    }

    let Some(step) = app.wizard.current_step() else {
        return;
    };
    let layout = WizardLayout::new(frame.area());

    // Question header
    let header = Paragraph::new(Line::from(Span::styled(
        step.question,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(header, layout.header);

    // Step body
    match step.kind {
        StepKind::MultiChoice | StepKind::SingleChoice => {
            choices::render(frame, app, layout.body);
        }
        StepKind::Number => {
            number::render(frame, app, layout.body);
        }
        StepKind::ContactTriplet => {
            contact::render(frame, app, layout.body);
        }
    }

    render_hints(frame, app, layout.hints);
    status_bar::render(frame, app, layout.status_bar);
}

/// Render the Back/Next hint line; the Next hint dims while the step is
/// invalid, which is the only surfacing of a failed validity check
fn render_hints(frame: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let mut spans = vec![];

    let back_style = if app.wizard.step_index() > 0 {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    spans.push(Span::styled(" Esc: Back ", back_style));

    // single-choice steps advance on selection, like the web form's
    // missing Next button
    if app.current_kind() != Some(StepKind::SingleChoice) {
        let label = if app.wizard.step_index() + 1 == app.wizard.step_count() {
            " Enter: Submit "
        } else {
            " Enter: Next "
        };
        let next_style = if app.wizard.is_valid() {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::raw("│"));
        spans.push(Span::styled(label, next_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
