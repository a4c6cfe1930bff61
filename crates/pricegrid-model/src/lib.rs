//! Pricegrid Model
//!
//! Plans, features, and the membership matrix of a feature-comparison
//! pricing table.
//!
//! # Core Concepts
//!
//! - [`Plan`]: a column; owns a set of included feature ids and a highlight flag
//! - [`Feature`]: a row; a named capability plans may include
//! - [`AttributeState`]: the persisted `{plans, features}` record
//! - [`EntityFactory`]: mints default entities from an [`IdGenerator`]
//! - [`sanitize_plans`] / [`sanitize_features`]: write-path filtering
//!
//! # Example
//!
//! ```rust
//! use pricegrid_model::{plan_has_feature, switch_feature_in_plan, EntityFactory, UuidIds};
//!
//! let mut factory = EntityFactory::new(UuidIds::new());
//! let plan = factory.create_plan();
//! let feature = factory.create_feature();
//!
//! let plan = switch_feature_in_plan(&plan, &feature.id);
//! assert!(plan_has_feature(&plan, &feature));
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod entity;
mod error;
mod id;
mod matrix;
mod sanitize;
mod state;

// Re-exports
pub use entity::{EntityFactory, Feature, Plan, DEFAULT_FEATURE_NAME, DEFAULT_PLAN_NAME};
pub use error::CodecError;
pub use id::{FeatureId, IdGenerator, PlanId, UuidIds};
pub use matrix::{
    plan_has_feature, switch_feature_in_plan, toggle_membership, without_dangling_features,
};
pub use sanitize::{sanitize, sanitize_features, sanitize_plans, Sanitize};
pub use state::AttributeState;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the pricing-table model
    pub use crate::{
        plan_has_feature, sanitize_features, sanitize_plans, switch_feature_in_plan,
        AttributeState, EntityFactory, Feature, FeatureId, IdGenerator, Plan, PlanId, UuidIds,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
