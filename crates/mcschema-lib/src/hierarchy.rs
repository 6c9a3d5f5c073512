//! Ancestor-chain linearization of implementation types.
//!
//! From a concrete type: its directly declared interfaces, then the direct
//! superclass followed by that superclass's interfaces, and so on up to (but
//! excluding) the universal root. Each type appears once, at its first
//! position.

use std::collections::HashSet;

use indexmap::IndexMap;
use mcschema_core::{ClassIdentifier, TypeIntrospector};

/// Ordered, duplicate-free ancestors of one type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AncestorChain(Vec<ClassIdentifier>);

impl AncestorChain {
    pub fn new(ancestors: Vec<ClassIdentifier>) -> Self {
        Self(ancestors)
    }

    pub fn as_slice(&self) -> &[ClassIdentifier] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassIdentifier> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub struct HierarchyResolver<'a, T: TypeIntrospector> {
    introspector: &'a T,
}

impl<'a, T: TypeIntrospector> HierarchyResolver<'a, T> {
    pub fn new(introspector: &'a T) -> Self {
        Self { introspector }
    }

    /// Ancestors of `ty` as host types, nearest first.
    pub fn resolve_types(&self, ty: T::Type) -> Vec<T::Type> {
        let types = self.introspector;
        let mut chain = Vec::new();
        let mut seen = HashSet::from([ty]);

        for &interface in types.interfaces(ty) {
            if seen.insert(interface) {
                chain.push(interface);
            }
        }

        let mut current = types.superclass(ty);
        while let Some(class) = current {
            // A revisited superclass means the host graph has a cycle.
            if types.is_root(class) || !seen.insert(class) {
                break;
            }
            chain.push(class);
            for &interface in types.interfaces(class) {
                if seen.insert(interface) {
                    chain.push(interface);
                }
            }
            current = types.superclass(class);
        }

        chain
    }

    pub fn resolve(&self, ty: T::Type) -> AncestorChain {
        self.identifiers(&self.resolve_types(ty))
    }

    /// Add `ty` and each member of its own chain to `table`.
    ///
    /// Members get their own chains but are not expanded further, so an
    /// interface inherited only through another interface gets no entry.
    pub fn collect_into(&self, ty: T::Type, table: &mut ClassTable) {
        let types = self.introspector;
        let ancestors = self.resolve_types(ty);
        table.insert(types.class_identifier(ty), self.identifiers(&ancestors));

        for ancestor in ancestors {
            let id = types.class_identifier(ancestor);
            if !table.contains(&id) {
                table.insert(id, self.resolve(ancestor));
            }
        }
    }

    fn identifiers(&self, types: &[T::Type]) -> AncestorChain {
        let mut seen = HashSet::new();
        AncestorChain(
            types
                .iter()
                .map(|&t| self.introspector.class_identifier(t))
                .filter(|id| seen.insert(id.clone()))
                .collect(),
        )
    }
}

/// Every distinct type met during an entity walk, with its own chain, in
/// first-discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassTable {
    classes: IndexMap<ClassIdentifier, AncestorChain>,
}

impl ClassTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries are never replaced; returns `false` if `id` was already present.
    pub fn insert(&mut self, id: ClassIdentifier, chain: AncestorChain) -> bool {
        if self.classes.contains_key(&id) {
            return false;
        }
        self.classes.insert(id, chain);
        true
    }

    pub fn contains(&self, id: &ClassIdentifier) -> bool {
        self.classes.contains_key(id)
    }

    pub fn get(&self, id: &ClassIdentifier) -> Option<&AncestorChain> {
        self.classes.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ClassIdentifier, &AncestorChain)> {
        self.classes.iter()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
