//! JSON-backed host.
//!
//! A snapshot is a captured registry: blocks with their default properties,
//! entity kinds with the outcome their factory produces, and the class graph
//! of the implementation types. It implements every host trait, so the
//! extractor can run against it exactly as it would against a live runtime.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{
    AccessError, BlockKind, DummyContext, EntityFactory, EntityKind, EnumDomain, EnumValue,
    Identifier, InstantiationError, PropertyDescriptor, PropertyDomain, Registry,
    TypeIntrospector,
};

/// Qualified name of the universal root when a snapshot does not declare one.
pub const DEFAULT_ROOT: &str = "java.lang.Object";

/// Error while loading a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("block kind `{0}` is declared twice")]
    DuplicateBlock(Identifier),

    #[error("entity kind `{0}` is declared twice")]
    DuplicateEntity(Identifier),
}

/// A captured registry implementing the host traits.
#[derive(Debug, Clone)]
pub struct Snapshot {
    blocks: SnapshotBlocks,
    entities: SnapshotEntities,
    classes: ClassGraph,
}

impl Snapshot {
    /// Parse a snapshot from JSON text.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let raw: RawSnapshot = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    pub fn blocks(&self) -> &SnapshotBlocks {
        &self.blocks
    }

    pub fn entities(&self) -> &SnapshotEntities {
        &self.entities
    }

    pub fn classes(&self) -> &ClassGraph {
        &self.classes
    }

    fn from_raw(raw: RawSnapshot) -> Result<Self, SnapshotError> {
        let mut classes = ClassGraph::with_root(&raw.root);

        // Declare first so ids follow declaration order, then link.
        for name in raw.classes.keys() {
            classes.intern(name);
        }
        for (name, class) in &raw.classes {
            let id = classes.intern(name);
            let superclass = class.superclass.as_deref().map(|s| classes.intern(s));
            let interfaces = class.interfaces.iter().map(|i| classes.intern(i)).collect();
            let node = &mut classes.nodes[id.index()];
            node.superclass = superclass;
            node.interfaces = interfaces;
        }

        let mut block_ids = HashSet::new();
        if let Some(dup) = raw.blocks.iter().find(|b| !block_ids.insert(&b.id)) {
            return Err(SnapshotError::DuplicateBlock(dup.id.clone()));
        }
        let blocks = raw.blocks.into_iter().map(RawBlock::into_entry).collect();

        let mut entries = Vec::with_capacity(raw.entities.len());
        let mut by_id = HashMap::new();
        for entity in raw.entities {
            let outcome = if entity.inaccessible {
                Outcome::Inaccessible
            } else if let Some(failure) = entity.error {
                Outcome::Fails(failure)
            } else if let Some(class) = &entity.class {
                Outcome::Instance(classes.intern(class))
            } else {
                Outcome::Empty
            };

            if by_id.insert(entity.id.clone(), entries.len()).is_some() {
                return Err(SnapshotError::DuplicateEntity(entity.id));
            }
            entries.push(EntityEntry {
                kind: EntityKind::new(entity.id),
                outcome,
            });
        }

        Ok(Self {
            blocks: SnapshotBlocks(blocks),
            entities: SnapshotEntities { entries, by_id },
            classes,
        })
    }
}

// ============================================================================
// Blocks
// ============================================================================

/// Block registry of a snapshot.
#[derive(Debug, Clone, Default)]
pub struct SnapshotBlocks(Vec<Result<BlockKind, AccessError>>);

impl SnapshotBlocks {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Registry<BlockKind> for SnapshotBlocks {
    fn entries<'a>(&'a self) -> impl Iterator<Item = Result<&'a BlockKind, AccessError>>
    where
        BlockKind: 'a,
    {
        self.0.iter().map(|entry| entry.as_ref().map_err(Clone::clone))
    }
}

// ============================================================================
// Entities
// ============================================================================

/// Entity registry of a snapshot; also acts as the entity factory.
#[derive(Debug, Clone, Default)]
pub struct SnapshotEntities {
    entries: Vec<EntityEntry>,
    by_id: HashMap<Identifier, usize>,
}

#[derive(Debug, Clone)]
struct EntityEntry {
    kind: EntityKind,
    outcome: Outcome,
}

#[derive(Debug, Clone, Copy)]
enum Outcome {
    Instance(ClassId),
    Empty,
    Fails(RawFailure),
    Inaccessible,
}

/// Instance handed out by [`SnapshotEntities`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotObject {
    class: ClassId,
}

impl SnapshotObject {
    pub fn class(&self) -> ClassId {
        self.class
    }
}

impl SnapshotEntities {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Registry<EntityKind> for SnapshotEntities {
    fn entries<'a>(&'a self) -> impl Iterator<Item = Result<&'a EntityKind, AccessError>>
    where
        EntityKind: 'a,
    {
        self.entries.iter().map(|entry| match entry.outcome {
            Outcome::Inaccessible => Err(AccessError::new(
                entry.kind.id.to_string(),
                "field is not an entity type",
            )),
            _ => Ok(&entry.kind),
        })
    }
}

impl EntityFactory for SnapshotEntities {
    type Object = SnapshotObject;

    fn create(
        &self,
        kind: &EntityKind,
        _context: &DummyContext,
    ) -> Result<Option<SnapshotObject>, InstantiationError> {
        let Some(&index) = self.by_id.get(&kind.id) else {
            return Err(InstantiationError::Access(kind.id.clone()));
        };

        match self.entries[index].outcome {
            Outcome::Instance(class) => Ok(Some(SnapshotObject { class })),
            Outcome::Empty => Ok(None),
            Outcome::Fails(RawFailure::TypeMismatch) => {
                Err(InstantiationError::TypeMismatch(kind.id.clone()))
            }
            Outcome::Fails(RawFailure::Access) | Outcome::Inaccessible => {
                Err(InstantiationError::Access(kind.id.clone()))
            }
        }
    }
}

// ============================================================================
// Classes
// ============================================================================

/// Handle to a type in a [`ClassGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(u32);

impl ClassId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
pub(crate) struct ClassNode {
    name: String,
    superclass: Option<ClassId>,
    interfaces: Vec<ClassId>,
}

/// Implementation types of a snapshot.
///
/// Types referenced but never declared are leaves: no superclass and no
/// interfaces.
#[derive(Debug, Clone)]
pub struct ClassGraph {
    nodes: Vec<ClassNode>,
    by_name: HashMap<String, ClassId>,
    root: ClassId,
}

impl ClassGraph {
    fn with_root(root: &str) -> Self {
        let mut graph = Self {
            nodes: Vec::new(),
            by_name: HashMap::new(),
            root: ClassId(0),
        };
        graph.root = graph.intern(root);
        graph
    }

    fn intern(&mut self, name: &str) -> ClassId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = ClassId(self.nodes.len() as u32);
        self.nodes.push(ClassNode {
            name: name.to_string(),
            superclass: None,
            interfaces: Vec::new(),
        });
        self.by_name.insert(name.to_string(), id);
        id
    }

    /// Look up a type by its qualified name.
    pub fn lookup(&self, name: &str) -> Option<ClassId> {
        self.by_name.get(name).copied()
    }

    pub fn root(&self) -> ClassId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl TypeIntrospector for ClassGraph {
    type Type = ClassId;
    type Object = SnapshotObject;

    fn type_of(&self, object: &SnapshotObject) -> ClassId {
        object.class
    }

    fn qualified_name(&self, ty: ClassId) -> &str {
        &self.ensure_class(ty).name
    }

    fn interfaces(&self, ty: ClassId) -> &[ClassId] {
        &self.ensure_class(ty).interfaces
    }

    fn superclass(&self, ty: ClassId) -> Option<ClassId> {
        self.ensure_class(ty).superclass
    }

    fn is_root(&self, ty: ClassId) -> bool {
        ty == self.root
    }
}

impl ClassGraph {
    pub(crate) fn node(&self, id: ClassId) -> Option<&ClassNode> {
        self.nodes.get(id.index())
    }
}

// ============================================================================
// Raw JSON layer
// ============================================================================

fn default_root() -> String {
    DEFAULT_ROOT.to_string()
}

#[derive(Debug, Deserialize)]
struct RawSnapshot {
    #[serde(default)]
    blocks: Vec<RawBlock>,
    #[serde(default)]
    entities: Vec<RawEntity>,
    #[serde(default)]
    classes: IndexMap<String, RawClass>,
    #[serde(default = "default_root")]
    root: String,
}

#[derive(Debug, Deserialize)]
struct RawBlock {
    id: Identifier,
    #[serde(default)]
    properties: Vec<RawProperty>,
    #[serde(default)]
    inaccessible: bool,
}

impl RawBlock {
    fn into_entry(self) -> Result<BlockKind, AccessError> {
        if self.inaccessible {
            return Err(AccessError::new(self.id.to_string(), "field is not a block"));
        }
        let properties = self
            .properties
            .into_iter()
            .map(|p| PropertyDescriptor::new(p.name, p.domain.into()))
            .collect();
        Ok(BlockKind::new(self.id, properties))
    }
}

#[derive(Debug, Deserialize)]
struct RawProperty {
    name: String,
    domain: RawDomain,
}

/// Flat domain record; `kind` selects which of the other fields matter.
#[derive(Debug, Deserialize)]
struct RawDomain {
    kind: String,
    #[serde(default)]
    min: i32,
    #[serde(default)]
    max: i32,
    key: Option<String>,
    #[serde(default)]
    category: String,
    #[serde(default)]
    values: Vec<RawEnumValue>,
}

impl From<RawDomain> for PropertyDomain {
    fn from(raw: RawDomain) -> Self {
        match raw.kind.as_str() {
            "int" => PropertyDomain::IntRange {
                min: raw.min,
                max: raw.max,
            },
            "boolean" => PropertyDomain::Boolean,
            "enum" => PropertyDomain::Enumerated(EnumDomain {
                key: raw.key,
                category: raw.category,
                values: raw.values.into_iter().map(Into::into).collect(),
            }),
            _ => PropertyDomain::Unclassified { kind: raw.kind },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawEnumValue {
    Plain(String),
    Identifiable { name: String, id: String },
}

impl From<RawEnumValue> for EnumValue {
    fn from(raw: RawEnumValue) -> Self {
        match raw {
            RawEnumValue::Plain(name) => EnumValue::plain(name),
            RawEnumValue::Identifiable { name, id } => EnumValue::identifiable(name, id),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawEntity {
    id: Identifier,
    class: Option<String>,
    error: Option<RawFailure>,
    #[serde(default)]
    inaccessible: bool,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum RawFailure {
    TypeMismatch,
    Access,
}

#[derive(Debug, Deserialize)]
struct RawClass {
    superclass: Option<String>,
    #[serde(default)]
    interfaces: Vec<String>,
}
