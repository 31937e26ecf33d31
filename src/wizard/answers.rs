//! Answer store
//!
//! Flat mapping from field key to answer value. Mutated only through the
//! handlers of the currently active step; discarded with the session.

use std::collections::HashMap;

/// A stored answer: free text or an insertion-ordered selection set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerValue {
    /// Scalar answer (single-choice, numeric text, contact sub-field)
    Text(String),
    /// Multi-choice selections, in the order they were picked
    Selections(Vec<String>),
}

/// Mapping from field key to answer value
#[derive(Debug, Clone, Default)]
pub struct AnswerStore {
    values: HashMap<String, AnswerValue>,
}

impl AnswerStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the scalar value for `field` unconditionally
    pub fn set_scalar(&mut self, field: &str, value: impl Into<String>) {
        self.values
            .insert(field.to_string(), AnswerValue::Text(value.into()));
    }

    /// Toggle `option` in the selection set for `field`
    ///
    /// Absence counts as an empty set. Removal keeps the order of the
    /// remaining members; addition appends. Toggling the same option twice
    /// restores the prior set.
    pub fn toggle_member(&mut self, field: &str, option: &str) {
        let mut current: Vec<String> = self.selections(field).to_vec();
        if let Some(pos) = current.iter().position(|o| o == option) {
            current.remove(pos);
        } else {
            current.push(option.to_string());
        }
        self.values
            .insert(field.to_string(), AnswerValue::Selections(current));
    }

    /// Current value for `field`, if any
    pub fn value(&self, field: &str) -> Option<&AnswerValue> {
        self.values.get(field)
    }

    /// Scalar value for `field`, empty string if unset or non-scalar
    pub fn text(&self, field: &str) -> &str {
        match self.values.get(field) {
            Some(AnswerValue::Text(s)) => s,
            _ => "",
        }
    }

    /// Selection set for `field`, empty slice if unset or non-set
    pub fn selections(&self, field: &str) -> &[String] {
        match self.values.get(field) {
            Some(AnswerValue::Selections(v)) => v,
            _ => &[],
        }
    }

    /// Whether `option` is currently selected under `field`
    pub fn is_selected(&self, field: &str, option: &str) -> bool {
        self.selections(field).iter().any(|o| o == option)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_scalar_replaces() {
        let mut store = AnswerStore::new();
        store.set_scalar("projectType", "For a client");
        store.set_scalar("projectType", "For myself");
        assert_eq!(store.text("projectType"), "For myself");
    }

    #[test]
    fn test_toggle_on_unset_field() {
        let mut store = AnswerStore::new();
        store.toggle_member("userType", "Architect");
        assert_eq!(store.selections("userType"), ["Architect".to_string()]);
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let mut store = AnswerStore::new();
        store.toggle_member("space", "Floor");
        store.toggle_member("space", "Wall");
        let before = store.selections("space").to_vec();

        store.toggle_member("space", "Stairs");
        store.toggle_member("space", "Stairs");
        assert_eq!(store.selections("space"), before.as_slice());
    }

    #[test]
    fn test_toggle_preserves_insertion_order() {
        let mut store = AnswerStore::new();
        store.toggle_member("surface", "Plaster");
        store.toggle_member("surface", "Drywall");
        store.toggle_member("surface", "Fermacell");
        store.toggle_member("surface", "Drywall");
        assert_eq!(
            store.selections("surface"),
            ["Plaster".to_string(), "Fermacell".to_string()]
        );
    }

    #[test]
    fn test_unset_field_reads() {
        let store = AnswerStore::new();
        assert!(store.value("area").is_none());
        assert_eq!(store.text("area"), "");
        assert!(store.selections("space").is_empty());
        assert!(!store.is_selected("space", "Pool"));
    }
}
