use mcschema_core::ClassIdentifier;

use crate::blocks::BlockRecord;
use crate::classify::TypeTag;
use crate::entities::EntityRecord;
use crate::enums::EnumTable;
use crate::hierarchy::{AncestorChain, ClassTable};
use crate::report::write_report;
use crate::test_utils::extract_fixture;

fn render(
    blocks: &[BlockRecord],
    enums: &EnumTable,
    entities: &[EntityRecord],
    classes: &ClassTable,
) -> String {
    let mut out = String::new();
    write_report(&mut out, blocks, enums, entities, classes).unwrap();
    out
}

#[test]
fn block_line_ends_with_space() {
    let blocks = vec![BlockRecord {
        name: "furnace".into(),
        properties: vec![
            ("lit".into(), TypeTag::Bool),
            ("facing".into(), TypeTag::Enum("HorizontalDirection".into())),
        ],
    }];

    let out = render(&blocks, &EnumTable::new(), &[], &ClassTable::new());

    assert_eq!(
        out,
        "BLOCKINFO --- furnace - lit:bool facing:HorizontalDirection \n\n\n\n"
    );
}

#[test]
fn block_without_properties() {
    let blocks = vec![BlockRecord {
        name: "stone".into(),
        properties: vec![],
    }];

    let out = render(&blocks, &EnumTable::new(), &[], &ClassTable::new());

    assert!(out.starts_with("BLOCKINFO --- stone - \n"));
}

#[test]
fn enum_values_are_comma_joined() {
    let mut enums = EnumTable::new();
    enums.register(
        "HorizontalDirection",
        &["north", "south", "east", "west"].map(String::from),
        "furnace",
    );

    let out = render(&[], &enums, &[], &ClassTable::new());

    assert_eq!(
        out,
        "\nENUMINFO --- HorizontalDirection - north,south,east,west\n\n\n"
    );
}

#[test]
fn entity_without_class_has_no_suffix() {
    let entities = vec![
        EntityRecord {
            name: "zombie_horse".into(),
            class: None,
        },
        EntityRecord {
            name: "pig".into(),
            class: Some(ClassIdentifier::from_raw("a/Pig.java")),
        },
    ];

    let out = render(&[], &EnumTable::new(), &entities, &ClassTable::new());

    assert_eq!(
        out,
        "\n\nENTITYINFO --- zombie_horse\nENTITYINFO --- pig - a/Pig.java\n\n"
    );
}

#[test]
fn class_with_empty_chain_keeps_separator() {
    let mut classes = ClassTable::new();
    classes.insert(ClassIdentifier::from_raw("a/Named.java"), AncestorChain::default());

    let out = render(&[], &EnumTable::new(), &[], &classes);

    assert_eq!(out, "\n\n\nENTITYCLASSINFO --- a/Named.java - \n");
}

#[test]
fn full_report() {
    let extraction = extract_fixture();
    let expected = [
        "BLOCKINFO --- furnace - lit:bool facing:HorizontalDirection ",
        "BLOCKINFO --- stone - ",
        "BLOCKINFO --- hopper - enabled:bool facing:HopperDirection ",
        "BLOCKINFO --- wheat - age:u8 ",
        "BLOCKINFO --- smoker - facing:HorizontalDirection lit:bool ",
        "",
        "ENUMINFO --- HorizontalDirection - north,south,east,west",
        "ENUMINFO --- HopperDirection - down,north,south,west,east",
        "",
        "ENTITYINFO --- zombie - net/minecraft/entity/mob/ZombieEntity.java",
        "ENTITYINFO --- zombie_horse",
        "ENTITYINFO --- husk - net/minecraft/entity/mob/HuskEntity.java",
        "",
        "ENTITYCLASSINFO --- net/minecraft/entity/mob/ZombieEntity.java - \
         net/minecraft/entity/mob/Monster.java,net/minecraft/entity/mob/HostileEntity.java,\
         net/minecraft/entity/Entity.java,net/minecraft/util/Nameable.java",
        "ENTITYCLASSINFO --- net/minecraft/entity/mob/Monster.java - \
         net/minecraft/util/Nameable.java",
        "ENTITYCLASSINFO --- net/minecraft/entity/mob/HostileEntity.java - \
         net/minecraft/entity/Entity.java,net/minecraft/util/Nameable.java",
        "ENTITYCLASSINFO --- net/minecraft/entity/Entity.java - net/minecraft/util/Nameable.java",
        "ENTITYCLASSINFO --- net/minecraft/util/Nameable.java - ",
        "ENTITYCLASSINFO --- net/minecraft/entity/mob/HuskEntity.java - \
         net/minecraft/entity/mob/ZombieEntity.java,net/minecraft/entity/mob/Monster.java,\
         net/minecraft/entity/mob/HostileEntity.java,net/minecraft/entity/Entity.java,\
         net/minecraft/util/Nameable.java",
    ];

    let report = extraction.render_report();

    assert_eq!(report.lines().collect::<Vec<_>>(), expected);
    assert!(report.ends_with('\n'));
}
