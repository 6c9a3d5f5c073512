use std::fmt::{self, Write};

use super::{
    BLOCK_TAG, CLASS_TAG, ENTITY_TAG, ENUM_TAG, LIST_SEPARATOR, NAME_SEPARATOR,
    PROPERTY_SEPARATOR, TAG_SEPARATOR,
};
use crate::blocks::BlockRecord;
use crate::entities::EntityRecord;
use crate::enums::EnumTable;
use crate::hierarchy::ClassTable;

/// Serialize the four record families.
pub fn write_report(
    w: &mut impl Write,
    blocks: &[BlockRecord],
    enums: &EnumTable,
    entities: &[EntityRecord],
    classes: &ClassTable,
) -> fmt::Result {
    for block in blocks {
        write!(w, "{BLOCK_TAG}{TAG_SEPARATOR}{}{NAME_SEPARATOR}", block.name)?;
        for (property, tag) in &block.properties {
            write!(w, "{property}{PROPERTY_SEPARATOR}{tag} ")?;
        }
        writeln!(w)?;
    }

    writeln!(w)?;
    for (name, values) in enums.iter() {
        write!(w, "{ENUM_TAG}{TAG_SEPARATOR}{name}{NAME_SEPARATOR}")?;
        write_list(w, values.iter().map(String::as_str))?;
        writeln!(w)?;
    }

    writeln!(w)?;
    for entity in entities {
        write!(w, "{ENTITY_TAG}{TAG_SEPARATOR}{}", entity.name)?;
        if let Some(class) = &entity.class {
            write!(w, "{NAME_SEPARATOR}{class}")?;
        }
        writeln!(w)?;
    }

    writeln!(w)?;
    for (class, chain) in classes.iter() {
        write!(w, "{CLASS_TAG}{TAG_SEPARATOR}{class}{NAME_SEPARATOR}")?;
        write_list(w, chain.iter().map(|c| c.as_str()))?;
        writeln!(w)?;
    }

    Ok(())
}

fn write_list<'a>(w: &mut impl Write, items: impl Iterator<Item = &'a str>) -> fmt::Result {
    for (i, item) in items.enumerate() {
        if i > 0 {
            w.write_char(LIST_SEPARATOR)?;
        }
        w.write_str(item)?;
    }
    Ok(())
}
