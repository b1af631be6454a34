//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;

pub mod analyze;
pub mod compare;
pub mod info;
#[cfg(feature = "mcp")]
pub mod serve;

/// Load a document (plain text or PDF) under the configured size limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    lexile_es_core::load_document(path.as_std_path(), max_bytes)
        .with_context(|| format!("failed to load {path}"))
}
