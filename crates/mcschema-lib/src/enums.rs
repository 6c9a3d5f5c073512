//! Enum unification across every block property of a run.
//!
//! Many properties share one value set; they collapse into a single named
//! enum. The first value list seen for a name is canonical. A later sighting
//! with a different list is a conflict and is discarded.

use std::fmt;

use indexmap::IndexMap;

/// Run-wide table of enum types, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumTable {
    types: IndexMap<String, Vec<String>>,
}

/// A name already bound to a different value list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumConflict {
    pub name: String,
    pub canonical: Vec<String>,
    pub rejected: Vec<String>,
    /// Kind whose property produced the rejected list.
    pub owner: String,
}

impl EnumTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `values` under `name`.
    ///
    /// Registering the same list twice is a no-op.
    pub fn register(&mut self, name: &str, values: &[String], owner: &str) -> Option<EnumConflict> {
        match self.types.get(name) {
            None => {
                self.types.insert(name.to_string(), values.to_vec());
                None
            }
            Some(canonical) if canonical.as_slice() == values => None,
            Some(canonical) => Some(EnumConflict {
                name: name.to_string(),
                canonical: canonical.clone(),
                rejected: values.to_vec(),
                owner: owner.to_string(),
            }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.types.get(name).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.types
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl fmt::Display for EnumConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "`{}` on `{}` is [{}], already defined as [{}]",
            self.name,
            self.owner,
            self.rejected.join(", "),
            self.canonical.join(", ")
        )
    }
}
