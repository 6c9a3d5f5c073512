use std::ops::Range;

/// Diagnostic kinds, grouped by the pass that reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Extraction
    EnumConflict,
    InstantiationEmpty,

    // Report check - cross references
    UndefinedEnum,
    UndefinedClass,

    // Report check - uniqueness
    DuplicateEnum,
    DuplicateClass,
    DuplicateAncestor,

    // Report check - needs a human
    UnclassifiedProperty,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::InstantiationEmpty | Self::UnclassifiedProperty => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Default hint for this kind, automatically included in diagnostics.
    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::EnumConflict => {
                Some("the first value list is kept; give one of the domains a fixed override")
            }
            Self::UnclassifiedProperty => Some("the generator cannot type this field"),
            _ => None,
        }
    }

    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::EnumConflict => "ambiguous enum type",
            Self::InstantiationEmpty => "entity kind produced no instance",
            Self::UndefinedEnum => "enum type has no ENUMINFO record",
            Self::UndefinedClass => "class has no ENTITYCLASSINFO record",
            Self::DuplicateEnum => "duplicate enum type",
            Self::DuplicateClass => "duplicate class",
            Self::DuplicateAncestor => "duplicate ancestor",
            Self::UnclassifiedProperty => "property has an unclassified type",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::InstantiationEmpty => "entity kind `{}` produced no instance".to_string(),
            Self::UndefinedEnum => "enum type `{}` has no ENUMINFO record".to_string(),
            Self::UndefinedClass => "class `{}` has no ENTITYCLASSINFO record".to_string(),
            Self::DuplicateEnum => "enum type `{}` is defined twice".to_string(),
            Self::DuplicateClass => "class `{}` is listed twice".to_string(),
            Self::DuplicateAncestor => "`{}` appears twice in one ancestor chain".to_string(),
            Self::UnclassifiedProperty => "property `{}` has an unclassified type".to_string(),

            // Standard pattern: fallback + context
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, detail: Option<&str>) -> String {
        match detail {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replacen("{}", detail, 1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// Byte range in the checked report. Extraction diagnostics have none.
    pub(crate) span: Option<Range<usize>>,
    pub(crate) message: String,
    pub(crate) hints: Vec<String>,
}

impl DiagnosticMessage {
    pub(crate) fn with_default_message(kind: DiagnosticKind) -> Self {
        Self {
            kind,
            span: None,
            message: kind.fallback_message().to_string(),
            hints: kind.default_hint().map(str::to_string).into_iter().collect(),
        }
    }

    pub(crate) fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub(crate) fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub(crate) fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.severity())?;
        if let Some(span) = &self.span {
            write!(f, " at {}..{}", span.start, span.end)?;
        }
        write!(f, ": {}", self.message)?;
        for hint in &self.hints {
            write!(f, " (hint: {})", hint)?;
        }
        Ok(())
    }
}
