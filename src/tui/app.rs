//! Application state for the TUI
//!
//! The App struct owns the wizard session exclusively; every mutation goes
//! through the key handler of the currently shown step.

use std::time::{Duration, Instant};

use crate::wizard::{Advance, ContactPart, StepKind, Wizard};

use super::widgets::TextInput;

/// Feedback delay between picking a single-choice option and moving on,
/// mirroring the web form's highlight-then-advance behaviour
pub const AUTO_ADVANCE_DELAY: Duration = Duration::from_millis(300);

/// Main application state
pub struct App {
    /// The wizard session being filled in
    pub wizard: Wizard,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Highlighted option index on choice steps
    pub highlighted: usize,

    /// Focused sub-field on the contact step
    pub contact_focus: ContactPart,

    /// Input state for the area step
    pub area_input: TextInput,

    /// Input state for the contact name field
    pub name_input: TextInput,

    /// Input state for the contact email field
    pub email_input: TextInput,

    /// Input state for the contact phone field
    pub phone_input: TextInput,

    /// Deadline of a scheduled single-choice auto-advance, if any
    pub pending_advance: Option<Instant>,
}

impl App {
    /// Create a new App with a fresh wizard session
    pub fn new() -> Self {
        Self {
            wizard: Wizard::new(),
            should_quit: false,
            highlighted: 0,
            contact_focus: ContactPart::Name,
            area_input: TextInput::new().placeholder("Enter area in m²"),
            name_input: TextInput::new()
                .label("Name")
                .placeholder(ContactPart::Name.placeholder()),
            email_input: TextInput::new()
                .label("Email")
                .placeholder(ContactPart::Email.placeholder()),
            phone_input: TextInput::new()
                .label("Phone")
                .placeholder(ContactPart::Phone.placeholder()),
            pending_advance: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Input kind of the active step, if any
    pub fn current_kind(&self) -> Option<StepKind> {
        self.wizard.current_step().map(|s| s.kind)
    }

    /// Whether a single-choice auto-advance is waiting to fire
    ///
    /// Step input is ignored while this holds; only the feedback highlight
    /// remains on screen.
    pub fn auto_advance_pending(&self) -> bool {
        self.pending_advance.is_some()
    }

    /// Fire the scheduled auto-advance once its deadline has passed
    pub fn fire_pending_advance(&mut self) {
        if let Some(deadline) = self.pending_advance {
            if Instant::now() >= deadline {
                self.pending_advance = None;
                if self.wizard.advance() != Advance::Rejected {
                    self.reset_step_cursor();
                }
            }
        }
    }

    /// Move the option highlight up
    pub fn move_up(&mut self) {
        if self.highlighted > 0 {
            self.highlighted -= 1;
        }
    }

    /// Move the option highlight down
    pub fn move_down(&mut self) {
        let count = self
            .wizard
            .current_step()
            .map(|s| s.options.len())
            .unwrap_or(0);
        if self.highlighted + 1 < count {
            self.highlighted += 1;
        }
    }

    /// Toggle the highlighted option on a multi-choice step
    pub fn toggle_highlighted(&mut self) {
        if let Some(option) = self.highlighted_option() {
            self.wizard.toggle_option(option);
        }
    }

    /// Select the highlighted option on a single-choice step and schedule
    /// the advance
    pub fn select_highlighted(&mut self) {
        let Some(option) = self.highlighted_option() else {
            return;
        };
        if self.wizard.choose_option(option) {
            self.pending_advance = Some(Instant::now() + AUTO_ADVANCE_DELAY);
        }
    }

    /// Attempt to advance; a rejected attempt leaves everything as-is and is
    /// only visible as the disabled Next hint
    pub fn next(&mut self) {
        if self.wizard.advance() != Advance::Rejected {
            self.reset_step_cursor();
        }
    }

    /// Go back one step
    pub fn back(&mut self) {
        if self.wizard.retreat() {
            self.reset_step_cursor();
        }
    }

    /// Mutable input state for a contact sub-field
    pub fn contact_input_mut(&mut self, part: ContactPart) -> &mut TextInput {
        match part {
            ContactPart::Name => &mut self.name_input,
            ContactPart::Email => &mut self.email_input,
            ContactPart::Phone => &mut self.phone_input,
        }
    }

    /// Push the area input's content into the wizard
    pub fn sync_area(&mut self) {
        let value = self.area_input.value().to_string();
        self.wizard.set_current_text(value);
    }

    /// Push a contact input's content into the wizard
    pub fn sync_contact(&mut self, part: ContactPart) {
        let value = self.contact_input_mut(part).value().to_string();
        self.wizard.set_contact(part, value);
    }

    fn highlighted_option(&self) -> Option<&'static str> {
        self.wizard
            .current_step()
            .and_then(|s| s.options.get(self.highlighted))
            .copied()
    }

    fn reset_step_cursor(&mut self) {
        self.highlighted = 0;
        self.contact_focus = ContactPart::Name;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
