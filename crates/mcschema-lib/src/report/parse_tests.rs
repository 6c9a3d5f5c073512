use indoc::indoc;
use mcschema_core::ClassIdentifier;

use crate::Error;
use crate::classify::TypeTag;
use crate::report::parse;
use crate::test_utils::extract_fixture;

#[test]
fn reads_every_family() {
    let source = concat!(
        "BLOCKINFO --- furnace - lit:bool facing:HorizontalDirection \n",
        "\n",
        "ENUMINFO --- HorizontalDirection - north,south,east,west\n",
        "\n",
        "ENTITYINFO --- zombie_horse\n",
        "ENTITYINFO --- pig - a/Pig.java\n",
        "\n",
        "ENTITYCLASSINFO --- a/Pig.java - a/Animal.java,a/Entity.java\n",
    );

    let report = parse(source).unwrap();

    let furnace = &report.blocks[0];
    assert_eq!(furnace.record.name, "furnace");
    assert_eq!(
        furnace.record.properties,
        vec![
            ("lit".to_string(), TypeTag::Bool),
            ("facing".to_string(), TypeTag::Enum("HorizontalDirection".into())),
        ]
    );
    assert_eq!(furnace.line, 1);
    assert_eq!(&source[furnace.span.clone()], "BLOCKINFO --- furnace - lit:bool facing:HorizontalDirection ");

    assert_eq!(report.enums[0].record.values, ["north", "south", "east", "west"]);
    assert_eq!(report.enums[0].line, 3);

    assert_eq!(report.entities[0].record.class, None);
    assert_eq!(
        report.entities[1].record.class,
        Some(ClassIdentifier::from_raw("a/Pig.java"))
    );

    let pig = &report.classes[0];
    assert_eq!(pig.line, 8);
    let ancestors: Vec<_> = pig.record.ancestors.iter().map(|c| c.as_str()).collect();
    assert_eq!(ancestors, ["a/Animal.java", "a/Entity.java"]);
}

#[test]
fn empty_payloads() {
    let source = indoc! {"
        BLOCKINFO --- stone -
        ENTITYCLASSINFO --- a/Named.java -
    "};

    let report = parse(source).unwrap();

    assert!(report.blocks[0].record.properties.is_empty());
    assert_eq!(report.blocks[0].record.name, "stone");
    assert!(report.classes[0].record.ancestors.is_empty());
}

#[test]
fn crlf_line_endings() {
    let report = parse("ENUMINFO --- Axis - x,y,z\r\n").unwrap();

    assert_eq!(report.enums[0].record.values, ["x", "y", "z"]);
    assert_eq!(report.enums[0].span, 0..25);
}

#[test]
fn empty_source() {
    let report = parse("\n\n\n").unwrap();

    assert!(report.is_empty());
}

#[test]
fn unknown_tag() {
    let err = parse("BLOCKINFO --- stone - \nITEMINFO --- stick - \n").unwrap_err();

    insta::assert_snapshot!(err.to_string(), @"report line 2: unknown record tag `ITEMINFO`");
}

#[test]
fn missing_tag_separator() {
    let err = parse("hello world\n").unwrap_err();

    assert!(matches!(err, Error::ReportParse { line: 1, .. }));
}

#[test]
fn malformed_property_pair() {
    let err = parse("BLOCKINFO --- furnace - lit \n").unwrap_err();

    insta::assert_snapshot!(err.to_string(), @"report line 1: expected `<property>:<tag>`, found `lit`");
}

#[test]
fn sections_out_of_order() {
    let source = indoc! {"
        ENUMINFO --- Axis - x,y,z
        BLOCKINFO --- log - axis:Axis
    "};

    let err = parse(source).unwrap_err();

    insta::assert_snapshot!(err.to_string(), @"report line 2: BLOCKINFO record after the ENUMINFO section");
}

#[test]
fn reads_back_an_extraction() {
    let extraction = extract_fixture();

    let report = parse(&extraction.render_report()).unwrap();

    let blocks: Vec<_> = report.blocks.into_iter().map(|b| b.record).collect();
    let entities: Vec<_> = report.entities.into_iter().map(|e| e.record).collect();
    assert_eq!(blocks, extraction.blocks);
    assert_eq!(entities, extraction.entities);
    assert_eq!(report.enums.len(), extraction.enums.len());
    assert_eq!(report.classes.len(), extraction.classes.len());
}
