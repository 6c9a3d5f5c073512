use mcschema_core::ClassIdentifier;

use super::{
    ClassRecord, EnumRecord, LIST_SEPARATOR, Located, NAME_SEPARATOR, PROPERTY_SEPARATOR, Report,
    Section, TAG_SEPARATOR,
};
use crate::blocks::BlockRecord;
use crate::classify::TypeTag;
use crate::entities::EntityRecord;
use crate::hierarchy::AncestorChain;
use crate::{Error, Result};

/// Read a report back into typed records.
///
/// Blank lines are ignored. Sections must appear in report order, but any of
/// them may be empty.
pub fn parse(source: &str) -> Result<Report> {
    let mut report = Report::default();
    let mut section = Section::Blocks;
    let mut offset = 0;

    for (index, raw) in source.split_inclusive('\n').enumerate() {
        let start = offset;
        offset += raw.len();

        let text = raw.trim_end_matches(['\n', '\r']);
        if text.trim().is_empty() {
            continue;
        }

        let line = index + 1;
        let span = start..start + text.len();
        let fail = |message: String| Error::ReportParse { line, message };

        let (tag, body) = text
            .split_once(TAG_SEPARATOR)
            .ok_or_else(|| fail(format!("expected `<TAG>{TAG_SEPARATOR}<name>`")))?;
        let found = Section::from_tag(tag)
            .ok_or_else(|| fail(format!("unknown record tag `{tag}`")))?;
        if found < section {
            return Err(fail(format!(
                "{} record after the {} section",
                found.tag(),
                section.tag()
            )));
        }
        section = found;

        match section {
            Section::Blocks => {
                let (name, payload) = split_name(body);
                let properties = payload
                    .split(' ')
                    .filter(|pair| !pair.is_empty())
                    .map(|pair| {
                        let (property, tag) = pair.split_once(PROPERTY_SEPARATOR).ok_or_else(
                            || fail(format!("expected `<property>:<tag>`, found `{pair}`")),
                        )?;
                        Ok((property.to_string(), TypeTag::from_report(tag)))
                    })
                    .collect::<Result<Vec<_>>>()?;
                let record = BlockRecord {
                    name: name.to_string(),
                    properties,
                };
                report.blocks.push(Located { record, span, line });
            }
            Section::Enums => {
                let (name, payload) = split_name(body);
                let record = EnumRecord {
                    name: name.to_string(),
                    values: split_list(payload).map(str::to_string).collect(),
                };
                report.enums.push(Located { record, span, line });
            }
            Section::Entities => {
                let record = match body.split_once(NAME_SEPARATOR) {
                    Some((name, class)) => EntityRecord {
                        name: name.to_string(),
                        class: Some(ClassIdentifier::from_raw(class.trim_end())),
                    },
                    None => EntityRecord {
                        name: body.trim_end().to_string(),
                        class: None,
                    },
                };
                report.entities.push(Located { record, span, line });
            }
            Section::Classes => {
                let (class, payload) = split_name(body);
                let record = ClassRecord {
                    class: ClassIdentifier::from_raw(class),
                    ancestors: AncestorChain::new(
                        split_list(payload).map(ClassIdentifier::from_raw).collect(),
                    ),
                };
                report.classes.push(Located { record, span, line });
            }
        }
    }

    Ok(report)
}

/// Split `<name> - <payload>`. The payload may be empty, with or without the
/// trailing space after the dash.
fn split_name(body: &str) -> (&str, &str) {
    if let Some(split) = body.split_once(NAME_SEPARATOR) {
        return split;
    }
    let trimmed = body.trim_end();
    match trimmed.strip_suffix(NAME_SEPARATOR.trim_end()) {
        Some(name) => (name, ""),
        None => (trimmed, ""),
    }
}

fn split_list(payload: &str) -> impl Iterator<Item = &str> {
    payload
        .trim_end()
        .split(LIST_SEPARATOR)
        .filter(|item| !item.is_empty())
}
