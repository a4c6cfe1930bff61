//! Pricegrid Render
//!
//! One grid layout, two renderers.
//!
//! # Core Concepts
//!
//! - [`derive_layout`]: column count, row positions, highlight classes, and
//!   iteration order for a record
//! - [`DisplayRenderer`]: read-only grid with yes/no text
//! - [`EditorRenderer`]: the same grid with inputs and command-wired controls
//! - [`RenderConfig`]: heading and label text
//!
//! # Architecture
//!
//! ```text
//! AttributeState → derive_layout → GridLayout ─┬→ DisplayRenderer → HTML
//!                                              └→ EditorRenderer  → HTML + Commands
//! ```
//!
//! # Example
//!
//! ```rust
//! use pricegrid_model::{AttributeState, Feature, Plan};
//! use pricegrid_render::{DisplayRenderer, RenderConfig};
//!
//! let state = AttributeState::from_parts(
//!     vec![Plan::new("pro", "Pro").with_features(vec!["sso".into()])],
//!     vec![Feature::new("sso", "Single sign-on")],
//! );
//! let html = DisplayRenderer::new(RenderConfig::new()).render(&state);
//! assert!(html.contains("Single sign-on"));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Core modules
pub mod config;
pub mod display;
pub mod editor;
pub mod error;
mod html;
pub mod layout;

// Re-exports for convenience
pub use config::RenderConfig;
pub use display::{DisplayCell, DisplayRenderer, DisplayView};
pub use editor::{Button, ButtonVariant, EditorCell, EditorContent, EditorRenderer, EditorView};
pub use error::ConfigError;
pub use pricegrid_editor::EditorError;
pub use html::escape;
pub use layout::{
    cell_class, derive_layout, FeatureRow, GridLayout, HighlightClass, MembershipCell,
    RowPosition, Slot, CONTROL_COLUMNS,
};

/// Which surface to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Read-only table
    #[default]
    Display,
    /// Editable table
    Editor,
}

/// Render `state` for the given surface
///
/// # Errors
/// Returns [`EditorError::Encode`] if an editor control payload cannot be
/// encoded; the display surface never fails
pub fn render(
    view: View,
    state: &pricegrid_model::AttributeState,
    config: &RenderConfig,
) -> Result<String, EditorError> {
    match view {
        View::Display => Ok(DisplayRenderer::new(config.clone()).render(state)),
        View::Editor => EditorRenderer::new(config.clone()).render(state),
    }
}

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for rendering pricing tables
    pub use crate::layout::{derive_layout, GridLayout, HighlightClass};
    pub use crate::{render, DisplayRenderer, EditorRenderer, RenderConfig, View};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
