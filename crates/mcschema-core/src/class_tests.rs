use crate::ClassIdentifier;

#[test]
fn qualified_name_becomes_source_path() {
    let id = ClassIdentifier::from_qualified_name("net.minecraft.entity.mob.ZombieEntity");
    assert_eq!(id.as_str(), "net/minecraft/entity/mob/ZombieEntity.java");
}

#[test]
fn nested_type_keeps_dollar() {
    let id = ClassIdentifier::from_qualified_name("net.minecraft.entity.Outer$Inner");
    assert_eq!(id.to_string(), "net/minecraft/entity/Outer$Inner.java");
}

#[test]
fn default_package() {
    let id = ClassIdentifier::from_qualified_name("Marker");
    assert_eq!(id.as_str(), "Marker.java");
}

#[test]
fn raw_is_not_rewritten() {
    let id = ClassIdentifier::from_raw("a/b/C.java");
    assert_eq!(id, ClassIdentifier::from_qualified_name("a.b.C"));
}
