use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Represents one entry in the catalog tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogNode {
    /// A design file, identified by its base name
    File(String),
    /// A directory with its base name and ordered children
    Directory {
        name: String,
        children: Vec<CatalogNode>,
    },
}

/// The full catalog: the root directory's immediate entries and all descendants
pub type Catalog = Vec<CatalogNode>;

impl CatalogNode {
    /// Base name of the entry, whether file or directory.
    pub fn name(&self) -> &str {
        match self {
            CatalogNode::File(name) => name,
            CatalogNode::Directory { name, .. } => name,
        }
    }

    /// Number of entries in this subtree, counting this node and every
    /// descendant file and directory.
    pub fn entry_count(&self) -> usize {
        match self {
            CatalogNode::File(_) => 1,
            CatalogNode::Directory { children, .. } => {
                1 + children.iter().map(CatalogNode::entry_count).sum::<usize>()
            }
        }
    }
}

// The document shape consumed by the browsing UI: a file is a plain JSON
// string, a directory is a two-element [name, children] array.
impl Serialize for CatalogNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            CatalogNode::File(name) => serializer.serialize_str(name),
            CatalogNode::Directory { name, children } => {
                let mut pair = serializer.serialize_tuple(2)?;
                pair.serialize_element(name)?;
                pair.serialize_element(children)?;
                pair.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for CatalogNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CatalogNodeVisitor;

        impl<'de> Visitor<'de> for CatalogNodeVisitor {
            type Value = CatalogNode;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a file name string or a [name, children] pair")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(CatalogNode::File(value.to_owned()))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let name = seq
                    .next_element::<String>()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let children = seq
                    .next_element::<Vec<CatalogNode>>()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                if seq.next_element::<IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(3, &self));
                }
                Ok(CatalogNode::Directory { name, children })
            }
        }

        deserializer.deserialize_any(CatalogNodeVisitor)
    }
}
