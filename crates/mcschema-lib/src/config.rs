//! Run-level knobs of an extraction.

use mcschema_core::{DummyContext, Identifier};

/// Configuration of one extraction run.
///
/// ```
/// use mcschema_core::Identifier;
/// use mcschema_lib::ExtractConfig;
///
/// let config = ExtractConfig::new()
///     .namespace("modded")
///     .player_kind(Identifier::parse("modded:avatar"));
/// # let _ = config;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Namespace stripped from kind names in the report.
    pub(crate) namespace: String,
    /// Entity kind never instantiated.
    pub(crate) player_kind: Identifier,
    pub(crate) context: DummyContext,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            namespace: Identifier::DEFAULT_NAMESPACE.to_string(),
            player_kind: Identifier::new(Identifier::DEFAULT_NAMESPACE, "player"),
            context: DummyContext::default(),
        }
    }
}

impl ExtractConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn player_kind(mut self, kind: Identifier) -> Self {
        self.player_kind = kind;
        self
    }

    pub fn context(mut self, context: DummyContext) -> Self {
        self.context = context;
        self
    }

    /// Report name of a kind: its path when the namespace matches, else the
    /// full identifier.
    pub(crate) fn kind_name(&self, id: &Identifier) -> String {
        id.stripped(&self.namespace)
    }

    pub(crate) fn is_player(&self, id: &Identifier) -> bool {
        *id == self.player_kind
    }
}
