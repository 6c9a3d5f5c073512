use mcschema_core::{ClassIdentifier, TypeIntrospector};

use crate::hierarchy::{AncestorChain, ClassTable, HierarchyResolver};
use crate::test_utils::fixture;

/// Hand-built type graph; index 0 is the root.
struct Types {
    names: Vec<&'static str>,
    superclass: Vec<Option<usize>>,
    interfaces: Vec<Vec<usize>>,
}

impl Types {
    fn new() -> Self {
        Self {
            names: vec!["java.lang.Object"],
            superclass: vec![None],
            interfaces: vec![vec![]],
        }
    }

    fn add(&mut self, name: &'static str, superclass: Option<usize>, interfaces: &[usize]) -> usize {
        self.names.push(name);
        self.superclass.push(superclass);
        self.interfaces.push(interfaces.to_vec());
        self.names.len() - 1
    }
}

impl TypeIntrospector for Types {
    type Type = usize;
    type Object = usize;

    fn type_of(&self, object: &usize) -> usize {
        *object
    }

    fn qualified_name(&self, ty: usize) -> &str {
        self.names[ty]
    }

    fn interfaces(&self, ty: usize) -> &[usize] {
        &self.interfaces[ty]
    }

    fn superclass(&self, ty: usize) -> Option<usize> {
        self.superclass[ty]
    }

    fn is_root(&self, ty: usize) -> bool {
        ty == 0
    }
}

fn names(chain: &AncestorChain) -> Vec<&str> {
    chain.iter().map(ClassIdentifier::as_str).collect()
}

#[test]
fn interfaces_follow_their_class() {
    let mut types = Types::new();
    let tick = types.add("a.Tickable", None, &[]);
    let named = types.add("a.Named", None, &[]);
    let entity = types.add("a.Entity", Some(0), &[named]);
    let mob = types.add("a.Mob", Some(entity), &[tick]);
    let zombie = types.add("a.Zombie", Some(mob), &[]);

    let chain = HierarchyResolver::new(&types).resolve(zombie);

    assert_eq!(
        names(&chain),
        ["a/Mob.java", "a/Tickable.java", "a/Entity.java", "a/Named.java"]
    );
}

#[test]
fn own_interfaces_come_first() {
    let mut types = Types::new();
    let monster = types.add("a.Monster", None, &[]);
    let entity = types.add("a.Entity", Some(0), &[]);
    let zombie = types.add("a.Zombie", Some(entity), &[monster]);

    let chain = HierarchyResolver::new(&types).resolve(zombie);

    assert_eq!(names(&chain), ["a/Monster.java", "a/Entity.java"]);
}

#[test]
fn repeated_interface_keeps_first_position() {
    let mut types = Types::new();
    let named = types.add("a.Named", None, &[]);
    let entity = types.add("a.Entity", Some(0), &[named]);
    let mob = types.add("a.Mob", Some(entity), &[named]);

    let chain = HierarchyResolver::new(&types).resolve(mob);

    assert_eq!(names(&chain), ["a/Named.java", "a/Entity.java"]);
}

#[test]
fn root_is_excluded() {
    let mut types = Types::new();
    let entity = types.add("a.Entity", Some(0), &[]);

    let chain = HierarchyResolver::new(&types).resolve(entity);

    assert!(chain.is_empty());
}

#[test]
fn missing_superclass_ends_the_walk() {
    let mut types = Types::new();
    let orphan = types.add("a.Orphan", None, &[]);
    let child = types.add("a.Child", Some(orphan), &[]);

    let chain = HierarchyResolver::new(&types).resolve(child);

    assert_eq!(names(&chain), ["a/Orphan.java"]);
}

#[test]
fn cyclic_superclasses_terminate() {
    let mut types = Types::new();
    let a = types.add("a.A", None, &[]);
    let b = types.add("a.B", Some(a), &[]);
    types.superclass[a] = Some(b);

    let chain = HierarchyResolver::new(&types).resolve(b);

    assert_eq!(names(&chain), ["a/A.java"]);
}

#[test]
fn collect_adds_each_chain_member_once() {
    let mut types = Types::new();
    let base = types.add("a.Base", None, &[]);
    let iface = types.add("a.Iface", None, &[base]);
    let entity = types.add("a.Entity", Some(0), &[iface]);
    let zombie = types.add("a.Zombie", Some(entity), &[]);
    let husk = types.add("a.Husk", Some(zombie), &[]);
    let resolver = HierarchyResolver::new(&types);
    let mut table = ClassTable::new();

    resolver.collect_into(zombie, &mut table);
    resolver.collect_into(husk, &mut table);
    resolver.collect_into(zombie, &mut table);

    let dump: Vec<_> = table
        .iter()
        .map(|(class, chain)| format!("{class} - {}", names(chain).join(",")))
        .collect();
    insta::assert_debug_snapshot!(dump, @r#"
    [
        "a/Zombie.java - a/Entity.java,a/Iface.java",
        "a/Entity.java - a/Iface.java",
        "a/Iface.java - a/Base.java",
        "a/Husk.java - a/Zombie.java,a/Entity.java,a/Iface.java",
    ]
    "#);
}

#[test]
fn superinterfaces_of_interfaces_get_no_entry() {
    let mut types = Types::new();
    let nameable = types.add("a.Nameable", None, &[]);
    let monster = types.add("a.Monster", None, &[nameable]);
    let zombie = types.add("a.Zombie", Some(0), &[monster]);
    let resolver = HierarchyResolver::new(&types);
    let mut table = ClassTable::new();

    resolver.collect_into(zombie, &mut table);

    let dump: Vec<_> = table
        .iter()
        .map(|(class, chain)| format!("{class} - {}", names(chain).join(",")))
        .collect();
    insta::assert_debug_snapshot!(dump, @r#"
    [
        "a/Zombie.java - a/Monster.java",
        "a/Monster.java - a/Nameable.java",
    ]
    "#);
    assert!(!table.contains(&types.class_identifier(nameable)));
}

#[test]
fn class_table_never_replaces() {
    let mut table = ClassTable::new();
    let id = ClassIdentifier::from_raw("a/A.java");

    assert!(table.insert(id.clone(), AncestorChain::default()));
    assert!(!table.insert(
        id.clone(),
        AncestorChain::new(vec![ClassIdentifier::from_raw("a/B.java")])
    ));
    assert_eq!(table.get(&id), Some(&AncestorChain::default()));
}

#[test]
fn snapshot_graph() {
    let snapshot = fixture();
    let classes = snapshot.classes();
    let husk = classes.lookup("net.minecraft.entity.mob.HuskEntity").unwrap();

    let chain = HierarchyResolver::new(classes).resolve(husk);

    insta::assert_debug_snapshot!(names(&chain), @r#"
    [
        "net/minecraft/entity/mob/ZombieEntity.java",
        "net/minecraft/entity/mob/Monster.java",
        "net/minecraft/entity/mob/HostileEntity.java",
        "net/minecraft/entity/Entity.java",
        "net/minecraft/util/Nameable.java",
    ]
    "#);
}
