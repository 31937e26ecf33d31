//! Navigation and validity state machine
//!
//! Owns the answer store and the navigation state for one wizard session.
//! Steps advance only when the active step's validity predicate holds;
//! finishing the last step moves the machine into a terminal completed state
//! after which no mutation is observable.

use super::answers::AnswerStore;
use super::registry::{self, StepDescriptor, StepKind, FIELD_EMAIL, FIELD_NAME, FIELD_PHONE};

/// Outcome of an advance attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the next step
    Moved,
    /// The last step was confirmed; the wizard is now terminal
    Completed,
    /// The validity predicate failed (or the wizard is already terminal);
    /// nothing changed
    Rejected,
}

/// One of the three contact sub-fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactPart {
    #[default]
    Name,
    Email,
    Phone,
}

impl ContactPart {
    /// All parts in display order
    pub const ALL: [ContactPart; 3] = [Self::Name, Self::Email, Self::Phone];

    /// Answer-store key for this part
    pub fn field(self) -> &'static str {
        match self {
            Self::Name => FIELD_NAME,
            Self::Email => FIELD_EMAIL,
            Self::Phone => FIELD_PHONE,
        }
    }

    /// Placeholder text for this part
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Full name",
            Self::Email => "Email",
            Self::Phone => "Phone number",
        }
    }

    /// The next part, wrapping around
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Phone,
            Self::Phone => Self::Name,
        }
    }

    /// The previous part, wrapping around
    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Phone,
            Self::Email => Self::Name,
            Self::Phone => Self::Email,
        }
    }
}

/// One wizard session: answers plus navigation state
#[derive(Debug, Clone)]
pub struct Wizard {
    steps: &'static [StepDescriptor],
    answers: AnswerStore,
    current: usize,
    completed: bool,
}

impl Wizard {
    /// Start a fresh session at the first step
    pub fn new() -> Self {
        Self {
            steps: registry::steps(),
            answers: AnswerStore::new(),
            current: 0,
            completed: false,
        }
    }

    /// Index of the active step
    pub fn step_index(&self) -> usize {
        self.current
    }

    /// Total number of steps
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Whether the wizard reached its terminal state
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// The active step descriptor; `None` once completed
    pub fn current_step(&self) -> Option<&'static StepDescriptor> {
        if self.completed {
            return None;
        }
        self.steps.get(self.current)
    }

    /// Read access to the collected answers
    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    /// Validity predicate for the active step
    ///
    /// Multi-choice needs a non-empty selection set, the contact step needs
    /// name and email, everything else needs a non-empty value.
    pub fn is_valid(&self) -> bool {
        let Some(step) = self.current_step() else {
            return false;
        };
        match step.kind {
            StepKind::MultiChoice => !self.answers.selections(step.field).is_empty(),
            StepKind::ContactTriplet => {
                !self.answers.text(FIELD_NAME).is_empty()
                    && !self.answers.text(FIELD_EMAIL).is_empty()
            }
            StepKind::SingleChoice | StepKind::Number => {
                !self.answers.text(step.field).is_empty()
            }
        }
    }

    /// Attempt to move forward
    ///
    /// Rejected (with no state change) whenever the active step is invalid.
    /// From the last step a valid advance completes the wizard.
    pub fn advance(&mut self) -> Advance {
        if self.completed || !self.is_valid() {
            return Advance::Rejected;
        }
        if self.current + 1 < self.steps.len() {
            self.current += 1;
            Advance::Moved
        } else {
            self.completed = true;
            Advance::Completed
        }
    }

    /// Move back one step; no-op at the first step or once completed
    pub fn retreat(&mut self) -> bool {
        if self.completed || self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Toggle an option on the active multi-choice step
    pub fn toggle_option(&mut self, option: &str) {
        if let Some(step) = self.current_step() {
            if step.kind == StepKind::MultiChoice {
                self.answers.toggle_member(step.field, option);
            }
        }
    }

    /// Select an option on the active single-choice step and advance
    ///
    /// Re-selecting the already-chosen option just replaces the value with
    /// itself; the advance still happens exactly once per call.
    pub fn select_option(&mut self, option: &str) -> Advance {
        let Some(step) = self.current_step() else {
            return Advance::Rejected;
        };
        if step.kind != StepKind::SingleChoice {
            return Advance::Rejected;
        }
        self.answers.set_scalar(step.field, option);
        self.advance()
    }

    /// Record the chosen option on the active single-choice step without
    /// advancing; the caller schedules the advance (TUI feedback delay)
    pub fn choose_option(&mut self, option: &str) -> bool {
        match self.current_step() {
            Some(step) if step.kind == StepKind::SingleChoice => {
                self.answers.set_scalar(step.field, option);
                true
            }
            _ => false,
        }
    }

    /// Replace the free-text value of the active number step
    pub fn set_current_text(&mut self, value: impl Into<String>) {
        if let Some(step) = self.current_step() {
            if step.kind == StepKind::Number {
                self.answers.set_scalar(step.field, value);
            }
        }
    }

    /// Replace one contact sub-field on the active contact step
    pub fn set_contact(&mut self, part: ContactPart, value: impl Into<String>) {
        if let Some(step) = self.current_step() {
            if step.kind == StepKind::ContactTriplet {
                self.answers.set_scalar(part.field(), value);
            }
        }
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drive a fresh wizard through the first five steps with minimal answers
    fn wizard_at_contact_step() -> Wizard {
        let mut w = Wizard::new();
        w.toggle_option("Architect");
        assert_eq!(w.advance(), Advance::Moved);
        assert_eq!(w.select_option("For myself"), Advance::Moved);
        w.toggle_option("Floor");
        assert_eq!(w.advance(), Advance::Moved);
        w.set_current_text("45");
        assert_eq!(w.advance(), Advance::Moved);
        w.toggle_option("Ceramic tiles");
        assert_eq!(w.advance(), Advance::Moved);
        assert_eq!(w.step_index(), 5);
        w
    }

    #[test]
    fn test_starts_at_first_step() {
        let w = Wizard::new();
        assert_eq!(w.step_index(), 0);
        assert!(!w.is_completed());
        assert_eq!(w.current_step().unwrap().field, "userType");
    }

    #[test]
    fn test_advance_rejected_when_invalid() {
        let mut w = Wizard::new();
        assert!(!w.is_valid());
        assert_eq!(w.advance(), Advance::Rejected);
        assert_eq!(w.step_index(), 0);
        assert!(w.answers().selections("userType").is_empty());
    }

    #[test]
    fn test_retreat_at_first_step_is_noop() {
        let mut w = Wizard::new();
        assert!(!w.retreat());
        assert_eq!(w.step_index(), 0);
    }

    #[test]
    fn test_multi_choice_advance() {
        // Scenario A
        let mut w = Wizard::new();
        w.toggle_option("Architect");
        w.toggle_option("Contractor");
        assert!(w.is_valid());
        assert_eq!(w.advance(), Advance::Moved);
        assert_eq!(w.step_index(), 1);
        assert_eq!(
            w.answers().selections("userType"),
            ["Architect".to_string(), "Contractor".to_string()]
        );
    }

    #[test]
    fn test_single_choice_selection_auto_advances() {
        // Scenario B
        let mut w = Wizard::new();
        w.toggle_option("Investor");
        w.advance();
        assert_eq!(w.select_option("For myself"), Advance::Moved);
        assert_eq!(w.answers().text("projectType"), "For myself");
        assert_eq!(w.step_index(), 2);
    }

    #[test]
    fn test_reselect_single_choice_is_idempotent() {
        let mut w = Wizard::new();
        w.toggle_option("Investor");
        w.advance();
        w.select_option("For a client");
        assert!(w.retreat());
        assert_eq!(w.select_option("For a client"), Advance::Moved);
        assert_eq!(w.answers().text("projectType"), "For a client");
        assert_eq!(w.step_index(), 2);
    }

    #[test]
    fn test_toggle_ignored_on_non_multi_step() {
        let mut w = Wizard::new();
        w.toggle_option("Architect");
        w.advance();
        w.toggle_option("For a client");
        assert!(w.answers().value("projectType").is_none());
    }

    #[test]
    fn test_contact_requires_name_and_email() {
        // Scenario C
        let mut w = wizard_at_contact_step();
        w.set_contact(ContactPart::Name, "Ada Lovelace");
        assert!(!w.is_valid());
        assert_eq!(w.advance(), Advance::Rejected);
        assert_eq!(w.step_index(), 5);
        assert!(!w.is_completed());

        w.set_contact(ContactPart::Email, "ada@example.com");
        assert!(w.is_valid());
    }

    #[test]
    fn test_phone_is_optional() {
        let mut w = wizard_at_contact_step();
        w.set_contact(ContactPart::Name, "Ada Lovelace");
        w.set_contact(ContactPart::Email, "ada@example.com");
        assert!(w.answers().text("phone").is_empty());
        assert!(w.is_valid());
    }

    #[test]
    fn test_full_run_completes_and_is_terminal() {
        // Scenario D
        let mut w = wizard_at_contact_step();
        w.set_contact(ContactPart::Name, "Ada Lovelace");
        w.set_contact(ContactPart::Email, "ada@example.com");
        assert_eq!(w.advance(), Advance::Completed);
        assert!(w.is_completed());
        assert!(w.current_step().is_none());

        // no further mutation or navigation is observable
        w.toggle_option("Pool");
        w.set_current_text("999");
        w.set_contact(ContactPart::Name, "someone else");
        assert_eq!(w.advance(), Advance::Rejected);
        assert!(!w.retreat());
        assert_eq!(w.answers().text("name"), "Ada Lovelace");
        assert_eq!(w.answers().text("area"), "45");
        assert!(w.is_completed());
    }

    #[test]
    fn test_retreat_preserves_answers() {
        let mut w = Wizard::new();
        w.toggle_option("Architect");
        w.advance();
        assert!(w.retreat());
        assert_eq!(w.step_index(), 0);
        assert_eq!(w.answers().selections("userType"), ["Architect".to_string()]);
    }

    #[test]
    fn test_choose_option_records_without_advancing() {
        let mut w = Wizard::new();
        w.toggle_option("Architect");
        w.advance();
        assert!(w.choose_option("For myself"));
        assert_eq!(w.step_index(), 1);
        assert_eq!(w.advance(), Advance::Moved);
        assert_eq!(w.step_index(), 2);
    }
}
