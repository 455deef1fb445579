//! CLI execution context.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use till_core::state::AppState;
use till_core::store::Store;

use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// The durable store under the data directory.
    pub store: Store,
    /// Output handler.
    pub output: Output,
}

impl Context {
    /// Open the store at the given (or default) data directory.
    pub fn load(data_dir: Option<&str>, output: Output) -> Result<Self> {
        let dir = match data_dir {
            Some(d) => PathBuf::from(d),
            None => default_data_dir(),
        };
        let store = Store::open(&dir)
            .with_context(|| format!("Failed to open data directory {}", dir.display()))?;
        output.debug(&format!("Data directory: {}", dir.display()));
        Ok(Self { store, output })
    }

    /// Save state, warning instead of failing: a storage error never rolls
    /// back completed in-memory work.
    pub fn persist(&self, state: &AppState) {
        if let Err(e) = state.persist(&self.store) {
            self.output
                .warn(&format!("{e}; changes may not survive a restart"));
        }
    }
}

/// Get the platform-specific data directory.
fn default_data_dir() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".local").join("share").join("till")
    } else {
        PathBuf::from("/tmp").join("till")
    }
}
