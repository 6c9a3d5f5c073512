use indoc::indoc;
use mcschema_core::Snapshot;

use crate::{ExtractConfig, Extraction, extract_snapshot};

/// A small registry exercising every walk outcome.
pub const FIXTURE: &str = indoc! {r#"
    {
        "blocks": [
            {"id": "minecraft:furnace", "properties": [
                {"name": "lit", "domain": {"kind": "boolean"}},
                {"name": "facing", "domain": {
                    "kind": "enum", "key": "HORIZONTAL_FACING", "category": "Direction",
                    "values": ["north", "south", "east", "west"]
                }}
            ]},
            {"id": "minecraft:stone"},
            {"id": "minecraft:settings", "inaccessible": true},
            {"id": "minecraft:hopper", "properties": [
                {"name": "enabled", "domain": {"kind": "boolean"}},
                {"name": "facing", "domain": {
                    "kind": "enum", "key": "HOPPER_FACING", "category": "Direction",
                    "values": ["down", "north", "south", "west", "east"]
                }}
            ]},
            {"id": "minecraft:wheat", "properties": [
                {"name": "age", "domain": {"kind": "int", "min": 0, "max": 7}}
            ]},
            {"id": "minecraft:smoker", "properties": [
                {"name": "facing", "domain": {
                    "kind": "enum", "key": "HORIZONTAL_FACING", "category": "Direction",
                    "values": ["north", "south", "east", "west"]
                }},
                {"name": "lit", "domain": {"kind": "boolean"}}
            ]}
        ],
        "entities": [
            {"id": "minecraft:player", "class": "net.minecraft.entity.player.PlayerEntity"},
            {"id": "minecraft:zombie", "class": "net.minecraft.entity.mob.ZombieEntity"},
            {"id": "minecraft:zombie_horse"},
            {"id": "minecraft:marker", "error": "type_mismatch"},
            {"id": "minecraft:husk", "class": "net.minecraft.entity.mob.HuskEntity"},
            {"id": "minecraft:field", "inaccessible": true}
        ],
        "classes": {
            "net.minecraft.entity.player.PlayerEntity": {
                "superclass": "net.minecraft.entity.Entity"
            },
            "net.minecraft.entity.mob.HuskEntity": {
                "superclass": "net.minecraft.entity.mob.ZombieEntity"
            },
            "net.minecraft.entity.mob.ZombieEntity": {
                "superclass": "net.minecraft.entity.mob.HostileEntity",
                "interfaces": ["net.minecraft.entity.mob.Monster"]
            },
            "net.minecraft.entity.mob.HostileEntity": {
                "superclass": "net.minecraft.entity.Entity"
            },
            "net.minecraft.entity.Entity": {
                "superclass": "java.lang.Object",
                "interfaces": ["net.minecraft.util.Nameable"]
            },
            "net.minecraft.entity.mob.Monster": {
                "interfaces": ["net.minecraft.util.Nameable"]
            }
        }
    }
"#};

pub fn fixture() -> Snapshot {
    Snapshot::from_json(FIXTURE).unwrap()
}

pub fn extract_fixture() -> Extraction {
    extract_snapshot(&fixture(), &ExtractConfig::default())
}
