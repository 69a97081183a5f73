pub mod catalog;
pub mod tree;

pub use catalog::{generate_catalog, CATALOG_FILE_NAME};
pub use tree::{build_tree, Catalog, CatalogNode};
