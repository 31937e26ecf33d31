//! Terminal User Interface module
//!
//! Full-screen front end for the wizard using ratatui. One step is shown at
//! a time; the views dispatch on the active step's input kind and the
//! handler routes keys into the wizard core.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
