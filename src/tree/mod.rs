use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

mod model;
pub use model::{Catalog, CatalogNode};

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("Directory does not exist: {0}")]
    DirectoryNotFound(Utf8PathBuf),

    #[error("Path is not a directory: {0}")]
    NotADirectory(Utf8PathBuf),

    #[error("Failed to read directory: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the ordered catalog of design files and directories under a base directory
pub fn build_tree<P: AsRef<Utf8Path>>(base_dir: P) -> Result<Catalog, TreeError> {
    let base_dir = base_dir.as_ref();

    // Check if directory exists
    if !base_dir.exists() {
        return Err(TreeError::DirectoryNotFound(base_dir.to_owned()));
    }
    if !base_dir.is_dir() {
        return Err(TreeError::NotADirectory(base_dir.to_owned()));
    }

    walk(base_dir)
}

/// List one directory level, sorted by entry name, recursing into every
/// subdirectory and keeping only `.scad` files. The first unlistable
/// directory aborts the whole walk; there is no partial result.
fn walk(dir: &Utf8Path) -> Result<Catalog, TreeError> {
    let mut entries = Vec::new();
    for entry in dir.read_dir_utf8()? {
        entries.push(entry?);
    }
    // Sort once per level, before classifying into files and subdirectories
    entries.sort_by(|a, b| a.file_name().cmp(b.file_name()));

    let mut nodes = Vec::new();
    for entry in entries {
        let name = entry.file_name().to_owned();
        // is_dir follows symlinks, so links are classified the way the
        // filesystem classifies their target
        if entry.path().is_dir() {
            nodes.push(CatalogNode::Directory {
                name,
                children: walk(entry.path())?,
            });
        } else if name.ends_with(".scad") {
            nodes.push(CatalogNode::File(name));
        }
    }

    Ok(nodes)
}
