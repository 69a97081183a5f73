//! Catalog document generation.
//!
//! This module builds the design-file tree for a library root and writes
//! it as a single JSON document into that root, where browsing tools pick
//! it up instead of re-scanning the filesystem.

use crate::tree::{build_tree, TreeError};
use camino::Utf8Path;
use std::fs;
use thiserror::Error;

/// File name of the generated catalog document, relative to the root.
pub const CATALOG_FILE_NAME: &str = "catalog.json";

/// Errors that can occur when generating a catalog document.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to build catalog tree: {0}")]
    Tree(#[from] TreeError),

    #[error("Failed to serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write catalog file: {0}")]
    Io(#[from] std::io::Error),
}

/// Builds the catalog for `root` and writes it to `<root>/catalog.json`.
///
/// The document is a pretty-printed JSON array (2-space indentation) in
/// which a file appears as a plain string and a directory as a
/// `[name, children]` pair. It is rewritten from scratch on every call,
/// overwriting any previous document. The write is not atomic, so an
/// interrupted run can leave a truncated file behind.
///
/// # Errors
///
/// Returns `CatalogError` if the tree cannot be built, the catalog cannot
/// be serialized, or the output location is not writable.
pub fn generate_catalog<P: AsRef<Utf8Path>>(root: P) -> Result<(), CatalogError> {
    let root = root.as_ref();
    let catalog = build_tree(root)?;
    let document = serde_json::to_string_pretty(&catalog)?;
    fs::write(root.join(CATALOG_FILE_NAME), document)?;
    Ok(())
}
