//! Plans, features, and the factory that creates them
//!
//! Entities are values. Every update returns a new record; nothing is
//! modified in place once it sits in a collection.

use crate::id::{FeatureId, IdGenerator, PlanId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name given to a freshly created plan
pub const DEFAULT_PLAN_NAME: &str = "New Plan";

/// Name given to a freshly created feature
pub const DEFAULT_FEATURE_NAME: &str = "New Feature";

/// Pricing-table column
///
/// `features` is semantically a set of feature ids stored in insertion order.
/// Decoding is lenient so hand-edited records load: a mistyped `id` or `name`
/// decodes as empty and a missing or non-list `features` is remembered as
/// absent. The sanitizer drops such plans on the next write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct Plan {
    /// Unique identifier
    pub id: PlanId,
    /// Display name
    pub name: String,
    /// Included feature ids
    pub features: Vec<FeatureId>,
    /// Visually emphasized column
    pub highlight: bool,
    #[serde(skip)]
    pub(crate) membership_missing: bool,
}

impl Plan {
    /// Create plan with explicit fields and no highlight
    #[must_use]
    pub fn new(id: impl Into<PlanId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            features: Vec::new(),
            highlight: false,
            membership_missing: false,
        }
    }

    /// False when the record was decoded without a `features` list
    #[inline]
    #[must_use]
    pub fn has_membership_list(&self) -> bool {
        !self.membership_missing
    }

    /// Copy with the given membership list
    #[must_use]
    pub fn with_features(mut self, features: Vec<FeatureId>) -> Self {
        self.features = features;
        self.membership_missing = false;
        self
    }

    /// Copy with the given highlight flag
    #[must_use]
    pub fn with_highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }

    /// Copy with a new name
    #[must_use]
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Copy with the highlight flag flipped
    #[must_use]
    pub fn highlight_toggled(&self) -> Self {
        Self {
            highlight: !self.highlight,
            ..self.clone()
        }
    }
}

/// Pricing-table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct Feature {
    /// Unique identifier
    pub id: FeatureId,
    /// Display name
    pub name: String,
}

impl Feature {
    /// Create feature with explicit fields
    #[must_use]
    pub fn new(id: impl Into<FeatureId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Copy with a new name
    #[must_use]
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }
}

impl From<Value> for Plan {
    fn from(value: Value) -> Self {
        let features = value.get("features").and_then(Value::as_array);
        Self {
            id: PlanId::new(text_field(&value, "id")),
            name: text_field(&value, "name"),
            features: features
                .map(|ids| ids.iter().filter_map(Value::as_str).map(FeatureId::from).collect())
                .unwrap_or_default(),
            highlight: value.get("highlight").and_then(Value::as_bool).unwrap_or(false),
            membership_missing: features.is_none(),
        }
    }
}

impl From<Value> for Feature {
    fn from(value: Value) -> Self {
        Self {
            id: FeatureId::new(text_field(&value, "id")),
            name: text_field(&value, "name"),
        }
    }
}

/// String field of a decoded record, empty when absent or not a string
fn text_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Creates default plans and features with fresh ids
#[derive(Debug, Clone, Default)]
pub struct EntityFactory<G> {
    ids: G,
}

impl<G: IdGenerator> EntityFactory<G> {
    /// Create factory over an id generator
    #[inline]
    #[must_use]
    pub fn new(ids: G) -> Self {
        Self { ids }
    }

    /// New plan: default name, no features, not highlighted
    pub fn create_plan(&mut self) -> Plan {
        Plan::new(self.ids.next_id(), DEFAULT_PLAN_NAME)
    }

    /// New feature with the default name
    pub fn create_feature(&mut self) -> Feature {
        Feature::new(self.ids.next_id(), DEFAULT_FEATURE_NAME)
    }

    /// Underlying generator
    #[inline]
    pub fn ids_mut(&mut self) -> &mut G {
        &mut self.ids
    }
}
