//! Pricegrid CLI
//!
//! File-level operations behind the `pricegrid` binary. Each function reads a
//! persisted attribute record, does one thing with it, and returns text for
//! the caller to print or write.

#![warn(unreachable_pub)]

use anyhow::{Context, Result};
use pricegrid_editor::{Command, Commit, MemoryStore, StateController};
use pricegrid_model::{AttributeState, UuidIds};
use pricegrid_render::{render, RenderConfig, View};
use std::path::Path;

/// Read and decode an attribute record
///
/// # Errors
/// Fails if the file cannot be read or is not a valid record
pub fn load_state(path: &Path) -> Result<AttributeState> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    AttributeState::from_json(&json).with_context(|| format!("invalid record in {}", path.display()))
}

/// Load render configuration, or the defaults when no path is given
///
/// # Errors
/// Fails if the given file cannot be read or parsed
pub fn load_config(path: Option<&Path>) -> Result<RenderConfig> {
    match path {
        Some(path) => RenderConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(RenderConfig::default()),
    }
}

/// Render the record at `input` as HTML
///
/// # Errors
/// Fails if the record or the configuration cannot be loaded, or if an editor
/// control cannot be encoded
pub fn render_file(view: View, input: &Path, config: Option<&Path>) -> Result<String> {
    let state = load_state(input)?;
    let config = load_config(config)?;
    render(view, &state, &config).context("failed to encode editor controls")
}

/// Dispatch one JSON-encoded command against the record at `input`
///
/// Returns the commit summary and the updated record as pretty JSON.
///
/// # Errors
/// Fails if the record or the command cannot be decoded
pub fn apply_command(input: &Path, command: &str) -> Result<(Commit, String)> {
    let state = load_state(input)?;
    let command = Command::from_json(command)
        .with_context(|| format!("invalid command: {command}"))?;

    let mut controller = StateController::new(MemoryStore::new(state), UuidIds::new());
    let commit = controller.dispatch(command);
    let json = controller
        .state()
        .to_json_pretty()
        .context("failed to encode record")?;
    Ok((commit, json))
}

/// Pretty JSON of an empty record
///
/// # Errors
/// Fails only if encoding fails
pub fn empty_record() -> Result<String> {
    AttributeState::new()
        .to_json_pretty()
        .context("failed to encode record")
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
