//! Pricegrid Editor
//!
//! The single writer of a pricing table's persisted attributes.
//!
//! # Core Concepts
//!
//! - [`AttributeStore`]: get/set boundary to the host's persistence
//! - [`Command`]: every mutation the editor can trigger, as data
//! - [`StateController`]: computes, sanitizes, and commits new records
//! - [`EditorEvent`]: UI interactions resolved into commands
//!
//! # Example
//!
//! ```rust
//! use pricegrid_editor::{Command, MemoryStore, StateController};
//! use pricegrid_model::{AttributeState, UuidIds};
//!
//! let mut controller = StateController::new(MemoryStore::new(AttributeState::new()), UuidIds::new());
//! controller.dispatch(Command::AddPlan);
//! controller.dispatch(Command::AddFeature);
//!
//! assert_eq!(controller.state().plans.len(), 1);
//! assert_eq!(controller.state().features[0].name, "New Feature");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod command;
pub mod controller;
pub mod error;
pub mod event;
pub mod store;

// Re-exports for convenience
pub use command::{Command, Slice};
pub use controller::{Commit, StateController};
pub use error::EditorError;
pub use event::{EditorEvent, InputTarget};
pub use store::{AttributeStore, MemoryStore, WriteBackStore};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for driving the editor
    pub use crate::{
        AttributeStore, Command, EditorEvent, InputTarget, MemoryStore, StateController,
    };
    pub use pricegrid_model::{AttributeState, IdGenerator, UuidIds};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
