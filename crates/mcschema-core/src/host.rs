//! Capabilities the host runtime provides to the extractor.
//!
//! The extractor never reflects over the runtime itself. It walks explicit
//! registries, asks a factory for representative entity instances and asks an
//! introspector about the types of those instances.

use std::fmt::Debug;
use std::hash::Hash;

use crate::{AccessError, ClassIdentifier, EntityKind, Identifier, InstantiationError};

/// Enumerable container of every declared kind.
///
/// Order is host-defined but must be stable across runs. Entries the host
/// cannot hand out are yielded as [`AccessError`] and skipped by the walkers.
pub trait Registry<K> {
    fn entries<'a>(&'a self) -> impl Iterator<Item = Result<&'a K, AccessError>>
    where
        K: 'a;
}

impl<K> Registry<K> for [K] {
    fn entries<'a>(&'a self) -> impl Iterator<Item = Result<&'a K, AccessError>>
    where
        K: 'a,
    {
        self.iter().map(Ok)
    }
}

impl<K> Registry<K> for Vec<K> {
    fn entries<'a>(&'a self) -> impl Iterator<Item = Result<&'a K, AccessError>>
    where
        K: 'a,
    {
        self.iter().map(Ok)
    }
}

impl<K, R: Registry<K> + ?Sized> Registry<K> for &R {
    fn entries<'a>(&'a self) -> impl Iterator<Item = Result<&'a K, AccessError>>
    where
        K: 'a,
    {
        (**self).entries()
    }
}

/// Stub environment handed to the factory.
///
/// Satisfies construction only; nothing spawned into it is ticked or saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DummyContext {
    world: Identifier,
}

impl Default for DummyContext {
    fn default() -> Self {
        Self {
            world: Identifier::new(Identifier::DEFAULT_NAMESPACE, "overworld"),
        }
    }
}

impl DummyContext {
    pub fn new(world: Identifier) -> Self {
        Self { world }
    }

    /// World the representative instances are constructed in.
    pub fn world(&self) -> &Identifier {
        &self.world
    }
}

/// Constructs one representative object per entity kind.
pub trait EntityFactory {
    type Object;

    /// `Ok(None)` when the host produced no object for the kind.
    fn create(
        &self,
        kind: &EntityKind,
        context: &DummyContext,
    ) -> Result<Option<Self::Object>, InstantiationError>;
}

/// Minimal view of the host's type system.
///
/// Only the direct superclass and the directly declared interfaces are needed;
/// linearization is done by the extractor.
pub trait TypeIntrospector {
    type Type: Copy + Eq + Hash + Debug;
    type Object;

    /// Concrete implementation type of `object`.
    fn type_of(&self, object: &Self::Object) -> Self::Type;

    /// Fully-qualified name, e.g. `net.minecraft.entity.Entity`.
    fn qualified_name(&self, ty: Self::Type) -> &str;

    /// Directly declared interfaces, in declaration order.
    fn interfaces(&self, ty: Self::Type) -> &[Self::Type];

    /// `None` for interfaces and for the universal root.
    fn superclass(&self, ty: Self::Type) -> Option<Self::Type>;

    /// Whether `ty` is the universal root every class extends.
    fn is_root(&self, ty: Self::Type) -> bool;

    fn class_identifier(&self, ty: Self::Type) -> ClassIdentifier {
        ClassIdentifier::from_qualified_name(self.qualified_name(ty))
    }
}
