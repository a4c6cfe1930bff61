//! Membership matrix operations
//!
//! The logical `plan x feature -> included?` table is stored denormalized as
//! each plan's own list of feature ids. These functions are pure: inputs are
//! borrowed, results are new values.

use crate::entity::{Feature, Plan};
use crate::id::FeatureId;

/// True iff the feature's id is in the plan's membership list
#[inline]
#[must_use]
pub fn plan_has_feature(plan: &Plan, feature: &Feature) -> bool {
    plan.features.contains(&feature.id)
}

/// Symmetric-difference toggle of a single value
///
/// Present values are removed (every occurrence), absent values are appended.
#[must_use]
pub fn toggle_membership<T: PartialEq + Clone>(collection: &[T], value: &T) -> Vec<T> {
    if collection.contains(value) {
        collection
            .iter()
            .filter(|item| *item != value)
            .cloned()
            .collect()
    } else {
        let mut toggled = collection.to_vec();
        toggled.push(value.clone());
        toggled
    }
}

/// Copy of `plan` with `feature_id` toggled in its membership list
#[must_use]
pub fn switch_feature_in_plan(plan: &Plan, feature_id: &FeatureId) -> Plan {
    Plan {
        features: toggle_membership(&plan.features, feature_id),
        ..plan.clone()
    }
}

/// Copy of `plan` without membership ids that match no known feature
#[must_use]
pub fn without_dangling_features(plan: &Plan, features: &[Feature]) -> Plan {
    Plan {
        features: plan
            .features
            .iter()
            .filter(|id| features.iter().any(|f| &f.id == *id))
            .cloned()
            .collect(),
        ..plan.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn plan_with(ids: &[&str]) -> Plan {
        Plan::new("p", "Plan").with_features(ids.iter().map(|s| FeatureId::from(*s)).collect())
    }

    #[test]
    fn has_feature_checks_id() {
        let plan = plan_with(&["a", "b"]);
        assert!(plan_has_feature(&plan, &Feature::new("a", "A")));
        assert!(!plan_has_feature(&plan, &Feature::new("c", "C")));
    }

    #[test]
    fn toggle_appends_absent_value() {
        assert_eq!(toggle_membership(&[1, 2], &3), vec![1, 2, 3]);
    }

    #[test]
    fn toggle_removes_present_value() {
        assert_eq!(toggle_membership(&[1, 2, 3], &2), vec![1, 3]);
    }

    #[test]
    fn toggle_on_empty() {
        let empty: Vec<&str> = Vec::new();
        assert_eq!(toggle_membership(&empty, &"x"), vec!["x"]);
    }

    #[test]
    fn switch_leaves_input_plan_untouched() {
        let plan = plan_with(&["a"]);
        let switched = switch_feature_in_plan(&plan, &FeatureId::from("b"));

        assert_eq!(plan.features, vec![FeatureId::from("a")]);
        assert_eq!(
            switched.features,
            vec![FeatureId::from("a"), FeatureId::from("b")]
        );
        assert_eq!(switched.name, plan.name);
    }

    #[test]
    fn dangling_ids_pruned_in_order() {
        let plan = plan_with(&["c", "gone", "a"]);
        let features = vec![Feature::new("a", "A"), Feature::new("c", "C")];
        let pruned = without_dangling_features(&plan, &features);

        assert_eq!(
            pruned.features,
            vec![FeatureId::from("c"), FeatureId::from("a")]
        );
    }

    proptest! {
        #[test]
        fn prop_switch_twice_is_identity(
            members in proptest::collection::hash_set("[a-z]{1,6}", 0..8),
            target in "[a-z]{1,6}",
            highlight in any::<bool>(),
        ) {
            let plan = Plan::new("p", "Plan")
                .with_features(members.into_iter().map(FeatureId::from).collect())
                .with_highlight(highlight);
            let target = FeatureId::from(target);

            let twice = switch_feature_in_plan(&switch_feature_in_plan(&plan, &target), &target);

            // A present id comes back at the end of the list; as a set nothing moved.
            if plan.features.contains(&target) {
                let before: HashSet<_> = plan.features.iter().collect();
                let after: HashSet<_> = twice.features.iter().collect();
                prop_assert_eq!(before, after);
                prop_assert_eq!(twice.features.len(), plan.features.len());
                prop_assert_eq!(&twice.id, &plan.id);
                prop_assert_eq!(&twice.name, &plan.name);
                prop_assert_eq!(twice.highlight, plan.highlight);
            } else {
                prop_assert_eq!(twice, plan);
            }
        }

        #[test]
        fn prop_toggle_never_duplicates(
            members in proptest::collection::hash_set(0u8..32, 0..16),
            value in 0u8..32,
        ) {
            let members: Vec<u8> = members.into_iter().collect();
            let toggled = toggle_membership(&members, &value);
            let count = toggled.iter().filter(|v| **v == value).count();
            prop_assert!(count <= 1);
            prop_assert_eq!(count == 1, !members.contains(&value));
        }
    }
}
