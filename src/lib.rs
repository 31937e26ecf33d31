//! intake-cli - Terminal-based lead intake wizard for microcement projects
//!
//! This library drives a six-step intake form for a home-renovation
//! microcement service: respondent role, project ownership, target space,
//! approximate area, current substrate, and contact details. One step is
//! shown at a time; answers live in memory for the session and can be
//! exported as a JSON lead once the wizard completes.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `wizard`: Step registry, answer store, and the navigation state machine
//! - `export`: Completed-lead JSON export
//! - `cli`: Plain prompt mode and registry listing
//! - `tui`: Full-screen interface
//!
//! # Example
//!
//! ```rust
//! use intake_cli::wizard::{Advance, Wizard};
//!
//! let mut wizard = Wizard::new();
//! wizard.toggle_option("Architect");
//! assert_eq!(wizard.advance(), Advance::Moved);
//! ```

pub mod cli;
pub mod error;
pub mod export;
pub mod tui;
pub mod wizard;

pub use error::IntakeError;
