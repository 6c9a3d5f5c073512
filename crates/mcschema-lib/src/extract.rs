//! Both walks, bundled.

use std::io;

use mcschema_core::{BlockKind, EntityFactory, EntityKind, Registry, Snapshot, TypeIntrospector};

use crate::blocks::{BlockRecord, walk_blocks};
use crate::classify::Classifier;
use crate::config::ExtractConfig;
use crate::diagnostics::Diagnostics;
use crate::entities::{EntityRecord, walk_entities};
use crate::enums::EnumTable;
use crate::hierarchy::ClassTable;
use crate::report;

/// Everything one run learned about the host.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub blocks: Vec<BlockRecord>,
    pub enums: EnumTable,
    pub entities: Vec<EntityRecord>,
    pub classes: ClassTable,
    diagnostics: Diagnostics,
}

impl Extraction {
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn render_report(&self) -> String {
        let mut out = String::new();
        report::write_report(
            &mut out,
            &self.blocks,
            &self.enums,
            &self.entities,
            &self.classes,
        )
        .expect("String write never fails");
        out
    }

    /// Write the report in one piece.
    pub fn write_report(&self, w: &mut impl io::Write) -> io::Result<()> {
        w.write_all(self.render_report().as_bytes())?;
        w.flush()
    }
}

/// Run the block walk, then the entity walk.
pub fn extract<B, E, F, T>(
    blocks: &B,
    entities: &E,
    factory: &F,
    introspector: &T,
    config: &ExtractConfig,
) -> Extraction
where
    B: Registry<BlockKind> + ?Sized,
    E: Registry<EntityKind> + ?Sized,
    F: EntityFactory,
    T: TypeIntrospector<Object = F::Object>,
{
    let classifier = Classifier::default();
    let mut enums = EnumTable::new();

    let (block_records, mut diagnostics) = walk_blocks(blocks, &classifier, &mut enums, config);
    let ((entity_records, classes), entity_diagnostics) =
        walk_entities(entities, factory, introspector, config);
    diagnostics.extend(entity_diagnostics);

    Extraction {
        blocks: block_records,
        enums,
        entities: entity_records,
        classes,
        diagnostics,
    }
}

/// [`extract`] against a snapshot host.
pub fn extract_snapshot(snapshot: &Snapshot, config: &ExtractConfig) -> Extraction {
    extract(
        snapshot.blocks(),
        snapshot.entities(),
        snapshot.entities(),
        snapshot.classes(),
        config,
    )
}
