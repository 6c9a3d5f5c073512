use crate::Identifier;

/// One state property of a block kind, as declared by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor {
    /// Unique within one kind's property set.
    pub name: String,
    pub domain: PropertyDomain,
}

impl PropertyDescriptor {
    pub fn new(name: impl Into<String>, domain: PropertyDomain) -> Self {
        Self {
            name: name.into(),
            domain,
        }
    }
}

/// Legal value space of a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyDomain {
    /// Bounded integer range, inclusive on both ends.
    IntRange { min: i32, max: i32 },
    Boolean,
    Enumerated(EnumDomain),
    /// A domain kind the extractor has no rule for.
    Unclassified { kind: String },
}

/// Ordered, distinct enum labels plus the identity needed to name them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDomain {
    /// Stable identity of a shared host-side domain (e.g. `HORIZONTAL_FACING`).
    /// `None` for domains private to one block.
    pub key: Option<String>,
    /// Simple name of the value type, e.g. `Direction`.
    pub category: String,
    pub values: Vec<EnumValue>,
}

impl EnumDomain {
    pub fn new(category: impl Into<String>, values: Vec<EnumValue>) -> Self {
        Self {
            key: None,
            category: category.into(),
            values,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Labels in declaration order.
    pub fn labels(&self) -> Vec<String> {
        self.values.iter().map(|v| v.label().to_string()).collect()
    }
}

/// A single enum constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    /// Constant name as the runtime prints it.
    pub name: String,
    /// Serialized form, present when the constant defines one.
    pub serialized: Option<String>,
}

impl EnumValue {
    pub fn plain(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            serialized: None,
        }
    }

    pub fn identifiable(name: impl Into<String>, serialized: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            serialized: Some(serialized.into()),
        }
    }

    /// The serialized form wins over the printed name.
    pub fn label(&self) -> &str {
        self.serialized.as_deref().unwrap_or(&self.name)
    }
}

/// A block kind with its default property set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockKind {
    pub id: Identifier,
    /// Registry-declared order.
    pub properties: Vec<PropertyDescriptor>,
}

impl BlockKind {
    pub fn new(id: impl Into<Identifier>, properties: Vec<PropertyDescriptor>) -> Self {
        Self {
            id: id.into(),
            properties,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityKind {
    pub id: Identifier,
}

impl EntityKind {
    pub fn new(id: impl Into<Identifier>) -> Self {
        Self { id: id.into() }
    }
}
