use std::collections::HashSet;

use super::Report;
use crate::classify::TypeTag;
use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Cross-check a parsed report.
///
/// Every enum tag must have an `ENUMINFO` record. Every class an entity
/// refers to, and every ancestor in that class's chain, must have its own
/// `ENTITYCLASSINFO` record; chains of the ancestors themselves may name
/// classes that have none. Diagnostics come out in line order.
pub fn check(report: &Report) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();

    let enums: HashSet<&str> = report.enums.iter().map(|e| e.record.name.as_str()).collect();
    let classes: HashSet<&str> = report.classes.iter().map(|c| c.record.class.as_str()).collect();
    let concrete: HashSet<&str> = report
        .entities
        .iter()
        .filter_map(|e| e.record.class.as_ref().map(|c| c.as_str()))
        .collect();

    for block in &report.blocks {
        for (property, tag) in &block.record.properties {
            match tag {
                TypeTag::Unclassified => diagnostics
                    .report(DiagnosticKind::UnclassifiedProperty)
                    .message(format!("{}.{}", block.record.name, property))
                    .span(block.span.clone())
                    .emit(),
                TypeTag::Enum(name) if !enums.contains(name.as_str()) => diagnostics
                    .report(DiagnosticKind::UndefinedEnum)
                    .message(name)
                    .span(block.span.clone())
                    .emit(),
                _ => {}
            }
        }
    }

    let mut seen = HashSet::new();
    for record in &report.enums {
        if !seen.insert(record.record.name.as_str()) {
            diagnostics
                .report(DiagnosticKind::DuplicateEnum)
                .message(&record.record.name)
                .span(record.span.clone())
                .emit();
        }
    }

    for entity in &report.entities {
        if let Some(class) = &entity.record.class
            && !classes.contains(class.as_str())
        {
            diagnostics
                .report(DiagnosticKind::UndefinedClass)
                .message(class.as_str())
                .span(entity.span.clone())
                .emit();
        }
    }

    let mut seen = HashSet::new();
    for record in &report.classes {
        let class = &record.record.class;
        if !seen.insert(class.as_str()) {
            diagnostics
                .report(DiagnosticKind::DuplicateClass)
                .message(class.as_str())
                .span(record.span.clone())
                .emit();
        }

        let closed = concrete.contains(class.as_str());
        let mut chain = HashSet::new();
        for ancestor in record.record.ancestors.iter() {
            if !chain.insert(ancestor.as_str()) {
                diagnostics
                    .report(DiagnosticKind::DuplicateAncestor)
                    .message(ancestor.as_str())
                    .span(record.span.clone())
                    .emit();
            } else if closed && !classes.contains(ancestor.as_str()) {
                diagnostics
                    .report(DiagnosticKind::UndefinedClass)
                    .message(ancestor.as_str())
                    .span(record.span.clone())
                    .emit();
            }
        }
    }

    diagnostics
}
