//! Editor commands as data
//!
//! Every mutation the editor surface can trigger is a [`Command`]. Commands
//! serialize with a `command` tag so UI controls can carry them verbatim.

use crate::error::EditorError;
use pricegrid_model::{FeatureId, PlanId};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Attribute slice a command writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slice {
    /// `plans`, including membership lists
    Plans,
    /// `features`
    Features,
}

impl Display for Slice {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plans => f.write_str("plans"),
            Self::Features => f.write_str("features"),
        }
    }
}

/// State controller command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Append a default plan
    AddPlan,
    /// Remove the plan with this id
    DeletePlan { plan: PlanId },
    /// Replace a plan's name
    RenamePlan { plan: PlanId, name: String },
    /// Flip a plan's highlight flag
    ToggleHighlight { plan: PlanId },
    /// Toggle a feature id in a plan's membership list
    ToggleFeatureOnPlan { plan: PlanId, feature: FeatureId },
    /// Append a default feature
    AddFeature,
    /// Replace a feature's name
    RenameFeature { feature: FeatureId, name: String },
    /// Remove the feature with this id; plans keep referencing it
    DeleteFeature { feature: FeatureId },
    /// Drop membership ids that name no current feature
    PruneDanglingFeatures,
}

impl Command {
    /// Stable command name, matching the serialized tag
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddPlan => "add_plan",
            Self::DeletePlan { .. } => "delete_plan",
            Self::RenamePlan { .. } => "rename_plan",
            Self::ToggleHighlight { .. } => "toggle_highlight",
            Self::ToggleFeatureOnPlan { .. } => "toggle_feature_on_plan",
            Self::AddFeature => "add_feature",
            Self::RenameFeature { .. } => "rename_feature",
            Self::DeleteFeature { .. } => "delete_feature",
            Self::PruneDanglingFeatures => "prune_dangling_features",
        }
    }

    /// The one slice this command writes
    #[must_use]
    pub fn slice(&self) -> Slice {
        match self {
            Self::AddFeature | Self::RenameFeature { .. } | Self::DeleteFeature { .. } => {
                Slice::Features
            }
            _ => Slice::Plans,
        }
    }

    /// Decode from the tagged JSON form
    ///
    /// # Errors
    /// Returns the `serde_json` error for unknown tags or missing fields
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Encode to the tagged JSON form
    ///
    /// # Errors
    /// Returns [`EditorError::Encode`] if serialization fails
    pub fn to_json(&self) -> Result<String, EditorError> {
        serde_json::to_string(self).map_err(EditorError::Encode)
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_matches_name() {
        let commands = [
            Command::AddPlan,
            Command::DeletePlan { plan: "p".into() },
            Command::RenamePlan {
                plan: "p".into(),
                name: "Pro".into(),
            },
            Command::ToggleHighlight { plan: "p".into() },
            Command::ToggleFeatureOnPlan {
                plan: "p".into(),
                feature: "f".into(),
            },
            Command::AddFeature,
            Command::RenameFeature {
                feature: "f".into(),
                name: "Storage".into(),
            },
            Command::DeleteFeature { feature: "f".into() },
            Command::PruneDanglingFeatures,
        ];

        for command in commands {
            let value: serde_json::Value = serde_json::from_str(&command.to_json().unwrap()).unwrap();
            assert_eq!(value["command"], command.name());
        }
    }

    #[test]
    fn decode_toggle() {
        let command =
            Command::from_json(r#"{"command":"toggle_feature_on_plan","plan":"p","feature":"f"}"#)
                .unwrap();
        assert_eq!(
            command,
            Command::ToggleFeatureOnPlan {
                plan: "p".into(),
                feature: "f".into()
            }
        );
    }

    #[test]
    fn decode_unknown_tag_fails() {
        assert!(Command::from_json(r#"{"command":"undo"}"#).is_err());
    }

    #[test]
    fn membership_toggle_writes_plans() {
        let toggle = Command::ToggleFeatureOnPlan {
            plan: "p".into(),
            feature: "f".into(),
        };
        assert_eq!(toggle.slice(), Slice::Plans);
        assert_eq!(
            Command::DeleteFeature { feature: "f".into() }.slice(),
            Slice::Features
        );
        assert_eq!(Command::PruneDanglingFeatures.slice(), Slice::Plans);
    }
}
