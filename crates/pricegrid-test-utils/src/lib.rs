//! Testing utilities for the pricegrid workspace
//!
//! Deterministic ids and fixture tables.

#![allow(missing_docs)]

use pricegrid_model::{AttributeState, Feature, FeatureId, IdGenerator, Plan};

/// Ids of the form `{prefix}-1`, `{prefix}-2`, ...
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            next: 1,
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

pub fn feature(id: &str, name: &str) -> Feature {
    Feature::new(id, name)
}

pub fn plan(id: &str, name: &str, features: &[&str]) -> Plan {
    Plan::new(id, name).with_features(features.iter().map(|f| FeatureId::from(*f)).collect())
}

pub fn highlighted_plan(id: &str, name: &str, features: &[&str]) -> Plan {
    plan(id, name, features).with_highlight(true)
}

/// Three plans over three features; `pro` is highlighted
///
/// | feature  | basic | pro | team |
/// |----------|-------|-----|------|
/// | storage  | yes   | yes | yes  |
/// | support  | no    | yes | yes  |
/// | sso      | no    | no  | yes  |
pub fn sample_state() -> AttributeState {
    AttributeState::from_parts(
        vec![
            plan("basic", "Basic", &["storage"]),
            highlighted_plan("pro", "Pro", &["storage", "support"]),
            plan("team", "Team", &["storage", "support", "sso"]),
        ],
        vec![
            feature("storage", "Storage"),
            feature("support", "Support"),
            feature("sso", "Single sign-on"),
        ],
    )
}

/// `count` features named `Feature {n}` and no plans
pub fn features_only(count: usize) -> AttributeState {
    AttributeState::from_parts(
        Vec::new(),
        (1..=count)
            .map(|n| feature(&format!("f{n}"), &format!("Feature {n}")))
            .collect(),
    )
}
