use std::fmt;

use serde::{Deserialize, Serialize};

/// Namespaced registry identifier, `namespace:path`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Identifier {
    namespace: String,
    path: String,
}

impl Identifier {
    /// Namespace assumed when an identifier is written without one.
    pub const DEFAULT_NAMESPACE: &'static str = "minecraft";

    pub fn new(namespace: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            path: path.into(),
        }
    }

    /// Parse `namespace:path`. A bare `path` gets [`Self::DEFAULT_NAMESPACE`].
    pub fn parse(s: &str) -> Self {
        match s.split_once(':') {
            Some((namespace, path)) => Self::new(namespace, path),
            None => Self::new(Self::DEFAULT_NAMESPACE, s),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Name with `namespace` stripped when it matches; foreign namespaces stay qualified.
    ///
    /// ```
    /// use mcschema_core::Identifier;
    /// assert_eq!(Identifier::parse("minecraft:stone").stripped("minecraft"), "stone");
    /// assert_eq!(Identifier::parse("create:cog").stripped("minecraft"), "create:cog");
    /// ```
    pub fn stripped(&self, namespace: &str) -> String {
        if self.namespace == namespace {
            self.path.clone()
        } else {
            self.to_string()
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for Identifier {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.to_string()
    }
}
