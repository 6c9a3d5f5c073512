//! Property domain to type tag.

use std::fmt;

use indexmap::IndexMap;
use mcschema_core::{PropertyDescriptor, PropertyDomain};

/// Enum domains shared by many blocks whose category name alone is ambiguous.
///
/// Keyed by the stable identity of the host-side domain. `HORIZONTAL_FACING`
/// and `HOPPER_FACING` are both `Direction` subsets, so without an override
/// they would collide as one `Direction` enum.
pub const WELL_KNOWN_DOMAINS: &[(&str, &str)] = &[
    ("HORIZONTAL_AXIS", "HorizontalAxis"),
    ("HOPPER_FACING", "HopperDirection"),
    ("HORIZONTAL_FACING", "HorizontalDirection"),
    ("VERTICAL_DIRECTION", "VerticalDirection"),
    ("STRAIGHT_RAIL_SHAPE", "StraightRailShape"),
];

/// Semantic type of a property as the generator sees it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// Bounded integer range.
    U8,
    Bool,
    /// Named enum, defined by an `ENUMINFO` record.
    Enum(String),
    /// No rule applies; rendered as `TODO` for manual review.
    Unclassified,
}

impl TypeTag {
    pub const U8_TAG: &'static str = "u8";
    pub const BOOL_TAG: &'static str = "bool";
    pub const UNCLASSIFIED_TAG: &'static str = "TODO";

    pub fn as_str(&self) -> &str {
        match self {
            TypeTag::U8 => Self::U8_TAG,
            TypeTag::Bool => Self::BOOL_TAG,
            TypeTag::Enum(name) => name,
            TypeTag::Unclassified => Self::UNCLASSIFIED_TAG,
        }
    }

    pub fn enum_name(&self) -> Option<&str> {
        match self {
            TypeTag::Enum(name) => Some(name),
            _ => None,
        }
    }

    /// Inverse of [`Self::as_str`].
    pub fn from_report(tag: &str) -> Self {
        match tag {
            Self::U8_TAG => TypeTag::U8,
            Self::BOOL_TAG => TypeTag::Bool,
            Self::UNCLASSIFIED_TAG => TypeTag::Unclassified,
            name => TypeTag::Enum(name.to_string()),
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps property descriptors to type tags.
#[derive(Debug, Clone)]
pub struct Classifier {
    overrides: IndexMap<String, String>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::with_overrides(WELL_KNOWN_DOMAINS.iter().copied())
    }
}

impl Classifier {
    /// Classifier with a custom override table instead of [`WELL_KNOWN_DOMAINS`].
    pub fn with_overrides<'a>(overrides: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            overrides: overrides
                .into_iter()
                .map(|(key, name)| (key.to_string(), name.to_string()))
                .collect(),
        }
    }

    pub fn classify(&self, descriptor: &PropertyDescriptor) -> TypeTag {
        match &descriptor.domain {
            PropertyDomain::IntRange { .. } => TypeTag::U8,
            PropertyDomain::Boolean => TypeTag::Bool,
            PropertyDomain::Enumerated(domain) => {
                let fixed = domain.key.as_deref().and_then(|key| self.overrides.get(key));
                match fixed {
                    Some(name) => TypeTag::Enum(name.clone()),
                    None => TypeTag::Enum(domain.category.clone()),
                }
            }
            PropertyDomain::Unclassified { .. } => TypeTag::Unclassified,
        }
    }
}
