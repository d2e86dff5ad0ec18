//! Result actions for the two toggle operations.
//!
//! The lowercase serialized forms ("selected", "unflagged", ...) are part of
//! the wire protocol and must not change.

use serde::{Deserialize, Serialize};

/// What a selection toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleAction {
    /// A new selection row was inserted.
    Selected,
    /// An existing selection row was deleted.
    Deselected,
    /// The store operation failed; no state changed.
    Error,
}

/// What a trend-flag toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagAction {
    /// The team had no flag for the keyword; one was created.
    Flagged,
    /// The team's existing flag was removed.
    Unflagged,
    /// The store operation failed; no state changed.
    Error,
}

impl ToggleAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToggleAction::Selected => "selected",
            ToggleAction::Deselected => "deselected",
            ToggleAction::Error => "error",
        }
    }
}

impl FlagAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlagAction::Flagged => "flagged",
            FlagAction::Unflagged => "unflagged",
            FlagAction::Error => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&ToggleAction::Deselected).unwrap(),
            "\"deselected\""
        );
        assert_eq!(
            serde_json::to_string(&FlagAction::Unflagged).unwrap(),
            "\"unflagged\""
        );
    }

    #[test]
    fn as_str_matches_serialized_form() {
        for action in [
            ToggleAction::Selected,
            ToggleAction::Deselected,
            ToggleAction::Error,
        ] {
            let json = serde_json::to_string(&action).unwrap();
            assert_eq!(json, format!("\"{}\"", action.as_str()));
        }
    }
}
