//! Opaque identifiers for plans and features
//!
//! Provides [`PlanId`], [`FeatureId`], and the [`IdGenerator`] capability used
//! by the entity factory to mint them.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use uuid::Uuid;

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a raw identifier string
            #[inline]
            #[must_use]
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            /// Raw identifier string
            #[inline]
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// True for the empty identifier, which never survives sanitization
            #[inline]
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self(raw.to_string())
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self(raw)
            }
        }
    };
}

opaque_id!(
    /// Identifier of a plan (pricing-table column)
    PlanId
);

opaque_id!(
    /// Identifier of a feature (pricing-table row)
    ///
    /// Plans reference features by this id. A plan may hold ids of features
    /// that have since been deleted.
    FeatureId
);

/// Source of fresh identifiers
///
/// Uniqueness is the generator's contract; nothing downstream checks it.
pub trait IdGenerator {
    /// Produce a new identifier string
    fn next_id(&mut self) -> String;
}

/// Random 128-bit identifiers (UUID v4)
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl UuidIds {
    /// Create new generator
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for &mut G {
    fn next_id(&mut self) -> String {
        (**self).next_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn uuid_ids_are_distinct() {
        let mut ids = UuidIds::new();
        let minted: HashSet<String> = (0..1000).map(|_| ids.next_id()).collect();
        assert_eq!(minted.len(), 1000);
    }

    #[test]
    fn uuid_ids_parse_as_v4() {
        let raw = UuidIds::new().next_id();
        let parsed = Uuid::parse_str(&raw).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn id_serializes_as_plain_string() {
        let id = PlanId::from("plan-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"plan-1\"");

        let back: FeatureId = serde_json::from_str("\"f\"").unwrap();
        assert_eq!(back.as_str(), "f");
    }

    #[test]
    fn empty_id_detected() {
        assert!(PlanId::default().is_empty());
        assert!(!FeatureId::new("x").is_empty());
    }
}
