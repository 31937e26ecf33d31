//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash,
//! and runs the main draw/event loop.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::path::Path;

use crate::export::write_lead_json;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;
use super::views;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Set up panic hook to restore the terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the wizard full-screen
///
/// If `output` is given and the wizard reaches its terminal state, the
/// completed lead is written there as JSON after the terminal is restored.
pub fn run_tui(output: Option<&Path>) -> Result<()> {
    let mut terminal = init_terminal()?;

    let mut app = App::new();
    let events = EventHandler::default();

    loop {
        // fire a due single-choice advance before drawing, so the step
        // flips even when no further input arrives
        app.fire_pending_advance();

        terminal.draw(|frame| {
            views::render(frame, &mut app);
        })?;

        match events.next()? {
            event @ Event::Key(_) => {
                handle_event(&mut app, event)?;
            }
            Event::Tick => {
                handle_event(&mut app, Event::Tick)?;
            }
            Event::Resize(_, _) => {
                // terminal redraws on the next loop iteration
            }
        }

        if app.should_quit {
            break;
        }
    }

    restore_terminal()?;

    if app.wizard.is_completed() {
        if let Some(path) = output {
            let lead = write_lead_json(&app.wizard, path)?;
            println!("Lead {} written to {}", lead.id, path.display());
        }
    }

    Ok(())
}
