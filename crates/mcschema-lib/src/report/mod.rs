//! The line-oriented report consumed by the code generator.
//!
//! ```text
//! BLOCKINFO --- <block> - <prop>:<tag> <prop>:<tag> ...
//! ENUMINFO --- <enum> - <value>,<value>,...
//! ENTITYINFO --- <entity> - <class>
//! ENTITYCLASSINFO --- <class> - <ancestor>,<ancestor>,...
//! ```
//!
//! Four sections in that order, separated by one blank line. Every block
//! property pair is followed by a space. An entity that produced no instance
//! has no ` - <class>` suffix.

mod check;
mod emit;
mod parse;

#[cfg(test)]
mod emit_tests;
#[cfg(test)]
mod parse_tests;

use std::ops::Range;

use mcschema_core::ClassIdentifier;

use crate::blocks::BlockRecord;
use crate::entities::EntityRecord;
use crate::hierarchy::AncestorChain;

pub use check::check;
pub use emit::write_report;
pub use parse::parse;

pub const BLOCK_TAG: &str = "BLOCKINFO";
pub const ENUM_TAG: &str = "ENUMINFO";
pub const ENTITY_TAG: &str = "ENTITYINFO";
pub const CLASS_TAG: &str = "ENTITYCLASSINFO";

/// Between the record tag and the record name.
pub const TAG_SEPARATOR: &str = " --- ";
/// Between the record name and its payload.
pub const NAME_SEPARATOR: &str = " - ";
pub const LIST_SEPARATOR: char = ',';
pub const PROPERTY_SEPARATOR: char = ':';

/// Record families, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Section {
    Blocks,
    Enums,
    Entities,
    Classes,
}

impl Section {
    pub fn tag(self) -> &'static str {
        match self {
            Section::Blocks => BLOCK_TAG,
            Section::Enums => ENUM_TAG,
            Section::Entities => ENTITY_TAG,
            Section::Classes => CLASS_TAG,
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            BLOCK_TAG => Some(Section::Blocks),
            ENUM_TAG => Some(Section::Enums),
            ENTITY_TAG => Some(Section::Entities),
            CLASS_TAG => Some(Section::Classes),
            _ => None,
        }
    }
}

/// One `ENUMINFO` record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumRecord {
    pub name: String,
    pub values: Vec<String>,
}

/// One `ENTITYCLASSINFO` record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRecord {
    pub class: ClassIdentifier,
    pub ancestors: AncestorChain,
}

/// A record read back from report text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located<T> {
    pub record: T,
    /// Byte range of the line, without its terminator.
    pub span: Range<usize>,
    /// 1-based.
    pub line: usize,
}

/// A parsed report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub blocks: Vec<Located<BlockRecord>>,
    pub enums: Vec<Located<EnumRecord>>,
    pub entities: Vec<Located<EntityRecord>>,
    pub classes: Vec<Located<ClassRecord>>,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
            && self.enums.is_empty()
            && self.entities.is_empty()
            && self.classes.is_empty()
    }
}
