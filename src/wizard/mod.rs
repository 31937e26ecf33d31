//! Wizard core
//!
//! UI-independent heart of the intake form: the fixed step registry, the
//! answer store, and the navigation/validity state machine. The TUI and the
//! line-mode runner both drive the same [`Wizard`].

pub mod answers;
pub mod images;
pub mod machine;
pub mod registry;

pub use answers::{AnswerStore, AnswerValue};
pub use machine::{Advance, ContactPart, Wizard};
pub use registry::{steps, StepDescriptor, StepKind};
