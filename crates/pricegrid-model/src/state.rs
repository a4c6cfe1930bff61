//! The persisted attribute record
//!
//! [`AttributeState`] is the only unit of persisted state. Its JSON shape is
//! `{ "plans": [...], "features": [...] }` and must round-trip exactly.

use crate::entity::{Feature, Plan};
use crate::error::CodecError;
use crate::id::{FeatureId, PlanId};
use crate::sanitize::{sanitize_features, sanitize_plans};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Plans and features of one pricing table
///
/// Any JSON object decodes. A missing or non-list collection decodes as
/// empty, and individual records decode leniently so one corrupt entry never
/// hides the rest of the table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct AttributeState {
    /// Columns, in display order
    pub plans: Vec<Plan>,
    /// Rows, in display order
    pub features: Vec<Feature>,
}

impl TryFrom<Value> for AttributeState {
    type Error = &'static str;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Object(mut record) = value else {
            return Err("expected an object with `plans` and `features`");
        };
        Ok(Self {
            plans: lenient_list(record.remove("plans")),
            features: lenient_list(record.remove("features")),
        })
    }
}

fn lenient_list<T: From<Value>>(value: Option<Value>) -> Vec<T> {
    match value {
        Some(Value::Array(items)) => items.into_iter().map(T::from).collect(),
        _ => Vec::new(),
    }
}

impl AttributeState {
    /// Empty table
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with the given collections, unsanitized
    #[inline]
    #[must_use]
    pub fn from_parts(plans: Vec<Plan>, features: Vec<Feature>) -> Self {
        Self { plans, features }
    }

    /// Copy with the plans slice replaced
    #[must_use]
    pub fn with_plans(&self, plans: Vec<Plan>) -> Self {
        Self {
            plans,
            features: self.features.clone(),
        }
    }

    /// Copy with the features slice replaced
    #[must_use]
    pub fn with_features(&self, features: Vec<Feature>) -> Self {
        Self {
            plans: self.plans.clone(),
            features,
        }
    }

    /// Both collections passed through the sanitizer
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self {
            plans: sanitize_plans(self.plans),
            features: sanitize_features(self.features),
        }
    }

    /// Plan by id
    #[must_use]
    pub fn plan(&self, id: &PlanId) -> Option<&Plan> {
        self.plans.iter().find(|p| &p.id == id)
    }

    /// Feature by id
    #[must_use]
    pub fn feature(&self, id: &FeatureId) -> Option<&Feature> {
        self.features.iter().find(|f| &f.id == id)
    }

    /// Membership ids that name no current feature, per plan
    #[must_use]
    pub fn dangling_references(&self) -> Vec<(&PlanId, &FeatureId)> {
        self.plans
            .iter()
            .flat_map(|plan| {
                plan.features
                    .iter()
                    .filter(|id| self.feature(id).is_none())
                    .map(move |id| (&plan.id, id))
            })
            .collect()
    }

    /// Decode from the persisted JSON shape
    ///
    /// Reading never sanitizes.
    ///
    /// # Errors
    /// Returns [`CodecError::Malformed`] if `json` is not an attribute record
    pub fn from_json(json: &str) -> Result<Self, CodecError> {
        serde_json::from_str(json).map_err(CodecError::Malformed)
    }

    /// Encode to the persisted JSON shape
    ///
    /// # Errors
    /// Returns [`CodecError::Encode`] if serialization fails
    pub fn to_json(&self) -> Result<String, CodecError> {
        serde_json::to_string(self).map_err(CodecError::Encode)
    }

    /// Encode to indented JSON
    ///
    /// # Errors
    /// Returns [`CodecError::Encode`] if serialization fails
    pub fn to_json_pretty(&self) -> Result<String, CodecError> {
        serde_json::to_string_pretty(self).map_err(CodecError::Encode)
    }
}
