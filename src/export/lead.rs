//! Lead record
//!
//! The completed answer set, stamped with an id and a submission time, using
//! the same camelCase keys the original web form collected.

use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::{IntakeError, IntakeResult};
use crate::wizard::Wizard;

/// A completed intake submission
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    /// Unique id for this submission
    pub id: Uuid,
    /// When the wizard was completed
    pub submitted_at: DateTime<Utc>,
    /// Respondent roles
    pub user_type: Vec<String>,
    /// "For a client" or "For myself"
    pub project_type: String,
    /// Target spaces
    pub space: Vec<String>,
    /// Approximate area in m², as entered
    pub area: String,
    /// Current substrates
    pub surface: Vec<String>,
    /// Contact name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Contact phone (may be empty)
    pub phone: String,
}

impl Lead {
    /// Build a lead from a completed wizard session
    ///
    /// Returns a validation error if the wizard has not reached its terminal
    /// state; partial sessions are never exported.
    pub fn from_wizard(wizard: &Wizard) -> IntakeResult<Self> {
        if !wizard.is_completed() {
            return Err(IntakeError::Validation(
                "cannot export an unfinished wizard session".into(),
            ));
        }
        let answers = wizard.answers();
        Ok(Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            user_type: answers.selections("userType").to_vec(),
            project_type: answers.text("projectType").to_string(),
            space: answers.selections("space").to_vec(),
            area: answers.text("area").to_string(),
            surface: answers.selections("surface").to_vec(),
            name: answers.text("name").to_string(),
            email: answers.text("email").to_string(),
            phone: answers.text("phone").to_string(),
        })
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> IntakeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Write a completed session to `path` as JSON
pub fn write_lead_json(wizard: &Wizard, path: &Path) -> IntakeResult<Lead> {
    let lead = Lead::from_wizard(wizard)?;
    let json = lead.to_json()?;

    let mut file = std::fs::File::create(path)
        .map_err(|e| IntakeError::Export(format!("failed to create {}: {}", path.display(), e)))?;
    file.write_all(json.as_bytes())
        .map_err(|e| IntakeError::Export(format!("failed to write {}: {}", path.display(), e)))?;
    writeln!(file).map_err(|e| IntakeError::Export(e.to_string()))?;

    Ok(lead)
}
