//! Write-path filtering of malformed records
//!
//! Records that fail [`Sanitize::is_well_formed`] are dropped, never repaired
//! and never reported. Filtering keeps the relative order of survivors.

use crate::entity::{Feature, Plan};

/// Structural validity check applied before persistence
pub trait Sanitize {
    /// True when the record may be persisted
    fn is_well_formed(&self) -> bool;
}

impl Sanitize for Plan {
    /// Needs a non-empty id, a non-empty name, and a membership list. An
    /// empty list counts; a missing one does not.
    fn is_well_formed(&self) -> bool {
        !self.id.is_empty() && !self.name.is_empty() && self.has_membership_list()
    }
}

impl Sanitize for Feature {
    fn is_well_formed(&self) -> bool {
        !self.id.is_empty() && !self.name.is_empty()
    }
}

/// Keep only well-formed records, in order
#[must_use]
pub fn sanitize<T: Sanitize>(records: Vec<T>) -> Vec<T> {
    records.into_iter().filter(Sanitize::is_well_formed).collect()
}

/// Keep only plans with an id and a name
#[inline]
#[must_use]
pub fn sanitize_plans(plans: Vec<Plan>) -> Vec<Plan> {
    sanitize(plans)
}

/// Keep only features with an id and a name
#[inline]
#[must_use]
pub fn sanitize_features(features: Vec<Feature>) -> Vec<Feature> {
    sanitize(features)
}
