//! Handlers for the two binaries.

pub mod extract;
pub mod inject;

use std::fs;
use std::path::Path;

use anyhow::Context;

/// Read a source file; an unreadable source aborts the run.
fn read_source(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
