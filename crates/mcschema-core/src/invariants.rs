//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::snapshot::{ClassGraph, ClassId, ClassNode};

impl ClassGraph {
    pub(crate) fn ensure_class(&self, id: ClassId) -> &ClassNode {
        self.node(id).unwrap_or_else(|| {
            panic!(
                "ClassGraph: class {id:?} not found \
                 (ids are only handed out by the graph that owns them)"
            )
        })
    }
}
