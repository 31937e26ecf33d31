//! Step registry
//!
//! The ordered, immutable sequence of question descriptors the wizard walks
//! through. Fixed at build time; nothing mutates it at runtime.

use std::fmt;

/// Kind of input a step presents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Select any number of options (at least one to advance)
    MultiChoice,
    /// Select exactly one option; selection advances automatically
    SingleChoice,
    /// Free-form numeric text (stored as entered)
    Number,
    /// Name / email / phone triplet
    ContactTriplet,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MultiChoice => write!(f, "multi-choice"),
            Self::SingleChoice => write!(f, "single-choice"),
            Self::Number => write!(f, "number"),
            Self::ContactTriplet => write!(f, "contact"),
        }
    }
}

/// One screen of the wizard
#[derive(Debug, Clone, Copy)]
pub struct StepDescriptor {
    /// Question text shown as the step header
    pub question: &'static str,
    /// Input kind for this step
    pub kind: StepKind,
    /// Key under which the answer is stored
    pub field: &'static str,
    /// Options for choice kinds (empty otherwise)
    pub options: &'static [&'static str],
    /// Placeholder for free-text kinds
    pub placeholder: Option<&'static str>,
}

impl StepDescriptor {
    /// Whether this step renders a selectable option list
    pub fn is_choice(&self) -> bool {
        matches!(self.kind, StepKind::MultiChoice | StepKind::SingleChoice)
    }
}

/// Field keys for the contact sub-fields
pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PHONE: &str = "phone";

/// Contact sub-field placeholders, in display order
pub const CONTACT_FIELDS: &[(&str, &str)] = &[
    (FIELD_NAME, "Full name"),
    (FIELD_EMAIL, "Email"),
    (FIELD_PHONE, "Phone number"),
];

static STEPS: &[StepDescriptor] = &[
    StepDescriptor {
        question: "1. Who are you?",
        kind: StepKind::MultiChoice,
        field: "userType",
        options: &["Architect", "Interior Designer", "Investor", "Contractor"],
        placeholder: None,
    },
    StepDescriptor {
        question: "2. Is this project for a client or yourself?",
        kind: StepKind::SingleChoice,
        field: "projectType",
        options: &["For a client", "For myself"],
        placeholder: None,
    },
    StepDescriptor {
        question: "3. For which space are you planning microcement?",
        kind: StepKind::MultiChoice,
        field: "space",
        options: &[
            "Floor",
            "Wall",
            "Stairs",
            "Bathroom",
            "Shower area",
            "Kitchen countertop",
            "Pool",
            "Other",
        ],
        placeholder: None,
    },
    StepDescriptor {
        question: "4. Approximate area (in m²)?",
        kind: StepKind::Number,
        field: "area",
        options: &[],
        placeholder: Some("Enter area in m²"),
    },
    StepDescriptor {
        question: "5. What is the current substrate?",
        kind: StepKind::MultiChoice,
        field: "surface",
        options: &[
            "Ceramic tiles",
            "Screed (cement)",
            "Parquet / wooden surface",
            "Concrete - finished",
            "Concrete - raw",
            "OSB boards",
            "Drywall",
            "Fermacell",
            "Plaster",
            "Other / Not sure",
        ],
        placeholder: None,
    },
    StepDescriptor {
        question: "6. Contact information:",
        kind: StepKind::ContactTriplet,
        field: "contactInfo",
        options: &[],
        placeholder: None,
    },
];

/// The full step registry, in presentation order
pub fn steps() -> &'static [StepDescriptor] {
    STEPS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_six_steps() {
        assert_eq!(steps().len(), 6);
    }

    #[test]
    fn test_step_kinds_in_order() {
        let kinds: Vec<StepKind> = steps().iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                StepKind::MultiChoice,
                StepKind::SingleChoice,
                StepKind::MultiChoice,
                StepKind::Number,
                StepKind::MultiChoice,
                StepKind::ContactTriplet,
            ]
        );
    }

    #[test]
    fn test_choice_steps_have_options() {
        for step in steps() {
            if step.is_choice() {
                assert!(!step.options.is_empty(), "step {} has no options", step.field);
            } else {
                assert!(step.options.is_empty());
            }
        }
    }

    #[test]
    fn test_field_keys() {
        let fields: Vec<&str> = steps().iter().map(|s| s.field).collect();
        assert_eq!(
            fields,
            vec!["userType", "projectType", "space", "area", "surface", "contactInfo"]
        );
    }
}
