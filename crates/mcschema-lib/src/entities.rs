//! Entity registry walk.

use log::{debug, info};
use mcschema_core::{ClassIdentifier, EntityFactory, EntityKind, Registry, TypeIntrospector};

use crate::PassResult;
use crate::config::ExtractConfig;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::hierarchy::{ClassTable, HierarchyResolver};

/// One `ENTITYINFO` record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRecord {
    pub name: String,
    /// `None` when the factory produced nothing for the kind.
    pub class: Option<ClassIdentifier>,
}

/// Walk every entity kind in registry order, instantiating one object each.
///
/// The player kind is never instantiated. Kinds the factory refuses are
/// skipped; kinds it returns nothing for are recorded without a class.
pub fn walk_entities<R, F, T>(
    registry: &R,
    factory: &F,
    introspector: &T,
    config: &ExtractConfig,
) -> PassResult<(Vec<EntityRecord>, ClassTable)>
where
    R: Registry<EntityKind> + ?Sized,
    F: EntityFactory,
    T: TypeIntrospector<Object = F::Object>,
{
    let resolver = HierarchyResolver::new(introspector);
    let mut records = Vec::new();
    let mut classes = ClassTable::new();
    let mut diagnostics = Diagnostics::new();

    for entry in registry.entries() {
        let kind = match entry {
            Ok(kind) => kind,
            Err(err) => {
                debug!("skipping entity entry: {err}");
                continue;
            }
        };

        if config.is_player(&kind.id) {
            debug!("skipping player kind `{}`", kind.id);
            continue;
        }

        let name = config.kind_name(&kind.id);

        let object = match factory.create(kind, &config.context) {
            Ok(object) => object,
            Err(err) => {
                debug!("skipping entity kind `{}`: {err}", kind.id);
                continue;
            }
        };

        let Some(object) = object else {
            diagnostics
                .report(DiagnosticKind::InstantiationEmpty)
                .message(&name)
                .emit();
            records.push(EntityRecord { name, class: None });
            continue;
        };

        let ty = introspector.type_of(&object);
        resolver.collect_into(ty, &mut classes);
        records.push(EntityRecord {
            name,
            class: Some(introspector.class_identifier(ty)),
        });
    }

    info!(
        "walked {} entity kinds, {} classes",
        records.len(),
        classes.len()
    );

    ((records, classes), diagnostics)
}
