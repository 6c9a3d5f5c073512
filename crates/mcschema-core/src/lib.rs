#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data model for mcschema.
//!
//! Two layers:
//! - **Model**: kinds, property descriptors and class identifiers as the
//!   extractor sees them
//! - **Host**: the collaborator traits a runtime implements so the extractor
//!   can enumerate registries, instantiate entities and inspect types
//!
//! `snapshot` provides a JSON-backed host used by the CLI and in tests.

mod class;
mod host;
mod identifier;
mod invariants;
mod property;
pub mod snapshot;

#[cfg(test)]
mod class_tests;

pub use class::ClassIdentifier;
pub use host::{DummyContext, EntityFactory, Registry, TypeIntrospector};
pub use identifier::Identifier;
pub use property::{
    BlockKind, EntityKind, EnumDomain, EnumValue, PropertyDescriptor, PropertyDomain,
};
pub use snapshot::Snapshot;

/// A registry entry the host could not hand out.
///
/// Expected for a handful of non-kind members sharing the registry container;
/// the extractor skips the entry without reporting it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot access registry entry `{entry}`: {reason}")]
pub struct AccessError {
    pub entry: String,
    pub reason: String,
}

impl AccessError {
    pub fn new(entry: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            entry: entry.into(),
            reason: reason.into(),
        }
    }
}

/// Failure raised by an [`EntityFactory`] while constructing an instance.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InstantiationError {
    /// The constructed object is not an entity of the expected type.
    #[error("instance of `{0}` has an unexpected type")]
    TypeMismatch(Identifier),

    /// The host refused access to the constructor.
    #[error("cannot access constructor for `{0}`")]
    Access(Identifier),
}
