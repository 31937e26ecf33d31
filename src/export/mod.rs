//! Lead export
//!
//! Serializes a completed wizard session to a JSON file. This is a local
//! stand-in for a submission endpoint; nothing is transmitted anywhere.

pub mod lead;

pub use lead::{write_lead_json, Lead};
