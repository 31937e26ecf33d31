//! Event handler for the TUI
//!
//! Routes keyboard events to the wizard based on the active step's input
//! kind. All state transitions happen synchronously in here (plus the
//! deadline check for the single-choice feedback delay).

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::wizard::StepKind;

use super::app::App;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    // a scheduled single-choice advance fires on whatever event arrives next
    // after its deadline, usually a tick
    app.fire_pending_advance();

    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Ctrl+C always quits, whatever the step
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    if app.wizard.is_completed() {
        return handle_completed_key(app, key);
    }

    // while the selection highlight lingers, step input is ignored
    if app.auto_advance_pending() {
        return Ok(());
    }

    match app.current_kind() {
        Some(StepKind::MultiChoice) | Some(StepKind::SingleChoice) => {
            handle_choice_key(app, key)
        }
        Some(StepKind::Number) => handle_number_key(app, key),
        Some(StepKind::ContactTriplet) => handle_contact_key(app, key),
        None => Ok(()),
    }
}

/// Keys on the terminal thank-you screen
fn handle_completed_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Enter | KeyCode::Esc
    ) {
        app.quit();
    }
    Ok(())
}

/// Keys on multi-choice and single-choice steps
fn handle_choice_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let single = app.current_kind() == Some(StepKind::SingleChoice);

    match key.code {
        KeyCode::Char('q') => app.quit(),

        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),

        KeyCode::Char(' ') => {
            if single {
                app.select_highlighted();
            } else {
                app.toggle_highlighted();
            }
        }

        KeyCode::Enter => {
            if single {
                app.select_highlighted();
            } else {
                app.next();
            }
        }

        KeyCode::Esc | KeyCode::Left | KeyCode::Char('b') | KeyCode::Char('h') => {
            app.back();
        }

        _ => {}
    }
    Ok(())
}

/// Keys on the numeric area step
fn handle_number_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        // the stored answer stays a raw string; the input layer only lets
        // digits and a single decimal point through
        KeyCode::Char(c) if c.is_ascii_digit() => {
            app.area_input.insert(c);
            app.sync_area();
        }
        KeyCode::Char('.') if !app.area_input.value().contains('.') => {
            app.area_input.insert('.');
            app.sync_area();
        }
        KeyCode::Backspace => {
            app.area_input.backspace();
            app.sync_area();
        }

        KeyCode::Left => app.area_input.move_left(),
        KeyCode::Right => app.area_input.move_right(),
        KeyCode::Home => app.area_input.move_start(),
        KeyCode::End => app.area_input.move_end(),

        KeyCode::Enter => app.next(),
        KeyCode::Esc => app.back(),

        _ => {}
    }
    Ok(())
}

/// Keys on the contact step
fn handle_contact_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let part = app.contact_focus;

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            app.contact_focus = part.next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.contact_focus = part.prev();
        }

        KeyCode::Char(c) if !c.is_control() => {
            app.contact_input_mut(part).insert(c);
            app.sync_contact(part);
        }
        KeyCode::Backspace => {
            app.contact_input_mut(part).backspace();
            app.sync_contact(part);
        }

        KeyCode::Left => app.contact_input_mut(part).move_left(),
        KeyCode::Right => app.contact_input_mut(part).move_right(),
        KeyCode::Home => app.contact_input_mut(part).move_start(),
        KeyCode::End => app.contact_input_mut(part).move_end(),

        KeyCode::Enter => app.next(),
        KeyCode::Esc => app.back(),

        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::app::AUTO_ADVANCE_DELAY;
    use super::*;
    use crate::wizard::ContactPart;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::from(code))
    }

    #[test]
    fn test_space_toggles_on_multi_step() {
        let mut app = App::new();
        handle_event(&mut app, key(KeyCode::Char(' '))).unwrap();
        assert_eq!(
            app.wizard.answers().selections("userType"),
            ["Architect".to_string()]
        );
        handle_event(&mut app, key(KeyCode::Char(' '))).unwrap();
        assert!(app.wizard.answers().selections("userType").is_empty());
    }

    #[test]
    fn test_enter_rejected_on_empty_multi_step() {
        let mut app = App::new();
        handle_event(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.wizard.step_index(), 0);
    }

    #[test]
    fn test_enter_advances_valid_multi_step() {
        let mut app = App::new();
        handle_event(&mut app, key(KeyCode::Char(' '))).unwrap();
        handle_event(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.wizard.step_index(), 1);
    }

    #[test]
    fn test_step_input_ignored_while_advance_pending() {
        let mut app = App::new();
        handle_event(&mut app, key(KeyCode::Char(' '))).unwrap();
        handle_event(&mut app, key(KeyCode::Enter)).unwrap();

        // single-choice step: pick the first option
        handle_event(&mut app, key(KeyCode::Enter)).unwrap();
        assert!(app.auto_advance_pending());
        let chosen = app.wizard.answers().text("projectType").to_string();

        handle_event(&mut app, key(KeyCode::Down)).unwrap();
        handle_event(&mut app, key(KeyCode::Char(' '))).unwrap();
        assert_eq!(app.highlighted, 0);
        assert_eq!(app.wizard.answers().text("projectType"), chosen);
    }

    #[test]
    fn test_number_step_filters_input() {
        let mut app = App::new();
        // walk to the area step
        handle_event(&mut app, key(KeyCode::Char(' '))).unwrap();
        handle_event(&mut app, key(KeyCode::Enter)).unwrap();
        handle_event(&mut app, key(KeyCode::Enter)).unwrap();
        app.pending_advance = std::time::Instant::now().checked_sub(AUTO_ADVANCE_DELAY);
        handle_event(&mut app, key(KeyCode::Char(' '))).unwrap();
        handle_event(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.current_kind(), Some(StepKind::Number));

        for code in [
            KeyCode::Char('4'),
            KeyCode::Char('x'),
            KeyCode::Char('.'),
            KeyCode::Char('5'),
            KeyCode::Char('.'),
        ] {
            handle_event(&mut app, key(code)).unwrap();
        }
        assert_eq!(app.wizard.answers().text("area"), "4.5");
    }

    #[test]
    fn test_contact_tab_cycles_focus() {
        let mut app = App::new();
        // contact handling only needs the focus state, reachable directly
        app.contact_focus = ContactPart::Name;
        app.contact_focus = app.contact_focus.next();
        assert_eq!(app.contact_focus, ContactPart::Email);
        assert_eq!(app.contact_focus.prev(), ContactPart::Name);
    }

    #[test]
    fn test_ctrl_c_quits_anywhere() {
        let mut app = App::new();
        let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        handle_event(&mut app, event).unwrap();
        assert!(app.should_quit);
    }
}
