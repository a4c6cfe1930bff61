//! Editor surface events
//!
//! Buttons and checkboxes carry a complete [`Command`]. Text inputs carry an
//! [`InputTarget`] and only become a command once the typed value is known.

use crate::command::Command;
use crate::error::EditorError;
use pricegrid_model::{FeatureId, PlanId};
use serde::{Deserialize, Serialize};

/// Name field a text input edits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "target", content = "id", rename_all = "snake_case")]
pub enum InputTarget {
    /// Name of a plan
    PlanName(PlanId),
    /// Name of a feature
    FeatureName(FeatureId),
}

impl InputTarget {
    /// Rename command for the typed value
    #[must_use]
    pub fn command(&self, value: impl Into<String>) -> Command {
        match self {
            Self::PlanName(plan) => Command::RenamePlan {
                plan: plan.clone(),
                name: value.into(),
            },
            Self::FeatureName(feature) => Command::RenameFeature {
                feature: feature.clone(),
                name: value.into(),
            },
        }
    }

    /// Encode to JSON for a `data-input` attribute
    ///
    /// # Errors
    /// Returns [`EditorError::Encode`] if serialization fails
    pub fn to_json(&self) -> Result<String, EditorError> {
        serde_json::to_string(self).map_err(EditorError::Encode)
    }
}

/// One user interaction on the editor surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// Button press or checkbox change
    Click(Command),
    /// Text input change
    Input {
        /// Field being edited
        target: InputTarget,
        /// New text
        value: String,
    },
}

impl EditorEvent {
    /// Event from a control's `data-command` payload
    ///
    /// # Errors
    /// Returns [`EditorError::InvalidCommand`] if the payload is not a command
    pub fn from_click(data_command: &str) -> Result<Self, EditorError> {
        Command::from_json(data_command)
            .map(Self::Click)
            .map_err(EditorError::InvalidCommand)
    }

    /// Event from an input's `data-input` payload and its current value
    ///
    /// # Errors
    /// Returns [`EditorError::InvalidInputTarget`] if the payload is not a target
    pub fn from_input(data_input: &str, value: impl Into<String>) -> Result<Self, EditorError> {
        let target = serde_json::from_str(data_input).map_err(EditorError::InvalidInputTarget)?;
        Ok(Self::Input {
            target,
            value: value.into(),
        })
    }

    /// Command this event triggers
    #[must_use]
    pub fn into_command(self) -> Command {
        match self {
            Self::Click(command) => command,
            Self::Input { target, value } => target.command(value),
        }
    }
}
