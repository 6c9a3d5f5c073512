//! Block registry walk.

use log::{debug, info};
use mcschema_core::{BlockKind, PropertyDomain, Registry};

use crate::PassResult;
use crate::classify::{Classifier, TypeTag};
use crate::config::ExtractConfig;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::enums::EnumTable;

/// One `BLOCKINFO` record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockRecord {
    pub name: String,
    /// Property name and tag, in declared order.
    pub properties: Vec<(String, TypeTag)>,
}

/// Walk every block kind in registry order.
///
/// Enum labels of each property are registered with `enums`; a conflicting
/// registration keeps the tag on the record and reports an `EnumConflict`.
pub fn walk_blocks<R>(
    registry: &R,
    classifier: &Classifier,
    enums: &mut EnumTable,
    config: &ExtractConfig,
) -> PassResult<Vec<BlockRecord>>
where
    R: Registry<BlockKind> + ?Sized,
{
    let mut records = Vec::new();
    let mut diagnostics = Diagnostics::new();

    for entry in registry.entries() {
        let kind = match entry {
            Ok(kind) => kind,
            Err(err) => {
                debug!("skipping block entry: {err}");
                continue;
            }
        };

        let name = config.kind_name(&kind.id);
        let mut properties = Vec::with_capacity(kind.properties.len());

        for property in &kind.properties {
            let tag = classifier.classify(property);

            if let (TypeTag::Enum(enum_name), PropertyDomain::Enumerated(domain)) =
                (&tag, &property.domain)
                && let Some(conflict) = enums.register(enum_name, &domain.labels(), &name)
            {
                diagnostics
                    .report(DiagnosticKind::EnumConflict)
                    .message(conflict.to_string())
                    .emit();
            }

            properties.push((property.name.clone(), tag));
        }

        records.push(BlockRecord { name, properties });
    }

    info!(
        "walked {} block kinds, {} enum types",
        records.len(),
        enums.len()
    );

    (records, diagnostics)
}
