use std::fmt;

/// Path-like name of a native implementation type.
///
/// Derived from the fully-qualified type name by turning package separators
/// into path separators and appending the source extension, so
/// `net.minecraft.entity.Entity` becomes `net/minecraft/entity/Entity.java`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassIdentifier(String);

impl ClassIdentifier {
    pub const SOURCE_EXTENSION: &'static str = ".java";

    pub fn from_qualified_name(name: &str) -> Self {
        let mut path = name.replace('.', "/");
        path.push_str(Self::SOURCE_EXTENSION);
        Self(path)
    }

    /// Wrap an already-rendered identifier (e.g. read back from a report).
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ClassIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
