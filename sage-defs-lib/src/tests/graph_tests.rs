use super::*;

fn plain(id: &str) -> AssetType {
    AssetType::new(id, AssetKind::Plain)
}

fn game(id: &str) -> AssetType {
    AssetType::new(id, AssetKind::GameScoped)
}

fn ids<'a>(nodes: impl IntoIterator<Item = &'a AssetTypeNode>) -> Vec<&'a str> {
    nodes.into_iter().map(AssetTypeNode::id).collect()
}

#[test]
fn test_link_parent_and_child() {
    let mut graph = AssetTypeGraph::new();
    graph.merge([plain("Tank").inheriting("Vehicle"), plain("Vehicle")]);
    assert_eq!(graph.link(), 1);

    let tank = graph.get(AssetKind::Plain, "Tank").unwrap();
    assert_eq!(tank.superclass(), Some("Vehicle"));
    let vehicle = graph.get(AssetKind::Plain, "Vehicle").unwrap();
    assert!(vehicle.has_subclass("Tank"));
    assert_eq!(vehicle.superclass(), None);
    assert_eq!(ids(graph.subclasses_of(AssetKind::Plain, "Vehicle")), vec!["Tank"]);
    assert_eq!(
        graph.superclass_of(AssetKind::Plain, "Tank").map(AssetTypeNode::id),
        Some("Vehicle")
    );
}

#[test]
fn test_dangling_parent_is_tolerated() {
    let mut graph = AssetTypeGraph::new();
    graph.merge([plain("Tank").inheriting("Vehicle")]);
    assert_eq!(graph.link(), 0);
    assert_eq!(graph.get(AssetKind::Plain, "Tank").unwrap().superclass(), None);
    assert!(graph.superclass_of(AssetKind::Plain, "Tank").is_none());
}

#[test]
fn test_namespaces_never_interlink() {
    let mut graph = AssetTypeGraph::new();
    graph.merge([
        plain("Vehicle"),
        game("Tank").inheriting("Vehicle"),
        game("Base"),
        plain("Scout").inheriting("Base"),
    ]);
    assert_eq!(graph.link(), 0);
    assert_eq!(graph.get(AssetKind::GameScoped, "Tank").unwrap().superclass(), None);
    assert_eq!(graph.get(AssetKind::Plain, "Scout").unwrap().superclass(), None);
    assert_eq!(graph.subclasses_of(AssetKind::Plain, "Vehicle").len(), 0);
}

#[test]
fn test_same_id_in_both_namespaces() {
    let mut graph = AssetTypeGraph::new();
    graph.merge([
        plain("Object"),
        game("Object"),
        plain("Unit").inheriting("Object"),
        game("Unit").inheriting("Object"),
    ]);
    assert_eq!(graph.link(), 2);
    assert_eq!(graph.len(), 4);
    assert_eq!(ids(graph.subclasses_of(AssetKind::Plain, "Object")), vec!["Unit"]);
    assert_eq!(
        ids(graph.subclasses_of(AssetKind::GameScoped, "Object")),
        vec!["Unit"]
    );
    assert_eq!(
        graph.get(AssetKind::GameScoped, "Unit").unwrap().kind(),
        AssetKind::GameScoped
    );
}

#[test]
fn test_merge_replaces_by_id() {
    let mut graph = AssetTypeGraph::new();
    graph.merge([plain("Tank").with_type_hash(1)]);
    graph.merge([plain("Tank").with_type_hash(2)]);
    assert_eq!(graph.count(AssetKind::Plain), 1);
    let tank = graph.get(AssetKind::Plain, "Tank").unwrap();
    assert_eq!(tank.asset().type_hash, Some(2));
}

#[test]
fn test_merge_same_record_twice() {
    let mut graph = AssetTypeGraph::new();
    let tank = plain("Tank").inheriting("Vehicle");
    assert_eq!(graph.merge([tank.clone(), tank.clone()]), 2);
    assert_eq!(graph.len(), 1);
    assert_eq!(graph.get(AssetKind::Plain, "Tank").unwrap().asset(), &tank);
}

#[test]
fn test_insert_returns_replaced_record() {
    let mut graph = AssetTypeGraph::new();
    assert!(graph.insert(plain("Tank")).is_none());
    let replaced = graph.insert(plain("Tank").inheriting("Vehicle")).unwrap();
    assert_eq!(replaced.parent_id(), None);
}

#[test]
fn test_relink_after_replacement() {
    let mut graph = AssetTypeGraph::new();
    graph.merge([plain("Vehicle"), plain("Aircraft"), plain("Tank").inheriting("Vehicle")]);
    graph.link();

    graph.insert(plain("Tank").inheriting("Aircraft"));
    assert!(!graph.get(AssetKind::Plain, "Vehicle").unwrap().has_subclass("Tank"));

    graph.link();
    assert_eq!(graph.get(AssetKind::Plain, "Tank").unwrap().superclass(), Some("Aircraft"));
    assert!(graph.get(AssetKind::Plain, "Aircraft").unwrap().has_subclass("Tank"));
    assert!(!graph.get(AssetKind::Plain, "Vehicle").unwrap().has_subclass("Tank"));
}

#[test]
fn test_link_is_idempotent() {
    let mut graph = AssetTypeGraph::new();
    graph.merge([plain("A"), plain("B").inheriting("A"), plain("C").inheriting("A")]);
    assert_eq!(graph.link(), 2);
    assert_eq!(graph.link(), 2);
    assert_eq!(ids(graph.subclasses_of(AssetKind::Plain, "A")), vec!["B", "C"]);
}

#[test]
fn test_remove_scrubs_relations() {
    let mut graph = AssetTypeGraph::new();
    graph.merge([
        plain("Object"),
        plain("Vehicle").inheriting("Object"),
        plain("Tank").inheriting("Vehicle"),
    ]);
    graph.link();

    let removed = graph.remove(AssetKind::Plain, "Vehicle").unwrap();
    assert_eq!(removed.id, "Vehicle");
    assert!(!graph.get(AssetKind::Plain, "Object").unwrap().has_subclass("Vehicle"));
    assert_eq!(graph.get(AssetKind::Plain, "Tank").unwrap().superclass(), None);
    assert!(graph.remove(AssetKind::Plain, "Vehicle").is_none());
}

#[test]
fn test_self_inheritance_is_linked_as_declared() {
    let mut graph = AssetTypeGraph::new();
    graph.merge([plain("Loop").inheriting("Loop")]);
    assert_eq!(graph.link(), 1);

    let node = graph.get(AssetKind::Plain, "Loop").unwrap();
    assert_eq!(node.superclass(), Some("Loop"));
    assert!(node.has_subclass("Loop"));
    assert!(graph.ancestors(AssetKind::Plain, "Loop").is_empty());
    assert!(graph.roots(AssetKind::Plain).is_empty());

    // Removing a self-referencing record leaves nothing behind.
    graph.remove(AssetKind::Plain, "Loop");
    assert!(graph.is_empty());
}

#[test]
fn test_ancestors_follow_chain() {
    let mut graph = AssetTypeGraph::new();
    graph.merge([
        plain("Tank").inheriting("Vehicle"),
        plain("Vehicle").inheriting("Object"),
        plain("Object"),
    ]);
    graph.link();
    assert_eq!(
        ids(graph.ancestors(AssetKind::Plain, "Tank")),
        vec!["Vehicle", "Object"]
    );
    assert!(graph.ancestors(AssetKind::Plain, "Object").is_empty());
    assert!(graph.ancestors(AssetKind::Plain, "Missing").is_empty());
}

#[test]
fn test_ancestors_stop_on_cycle() {
    let mut graph = AssetTypeGraph::new();
    graph.merge([plain("A").inheriting("B"), plain("B").inheriting("A")]);
    assert_eq!(graph.link(), 2);
    assert_eq!(ids(graph.ancestors(AssetKind::Plain, "A")), vec!["B"]);
    assert_eq!(ids(graph.ancestors(AssetKind::Plain, "B")), vec!["A"]);
}

#[test]
fn test_roots_and_iteration_order() {
    let mut graph = AssetTypeGraph::new();
    graph.merge([
        plain("Weapon"),
        plain("Tank").inheriting("Vehicle"),
        plain("Vehicle"),
        game("Rules"),
    ]);
    graph.link();
    assert_eq!(ids(graph.roots(AssetKind::Plain)), vec!["Vehicle", "Weapon"]);
    assert_eq!(ids(graph.asset_types()), vec!["Tank", "Vehicle", "Weapon"]);
    assert_eq!(ids(graph.game_asset_types()), vec!["Rules"]);
    assert_eq!(graph.count(AssetKind::GameScoped), 1);
}

#[test]
fn test_superclass_iff_listed_as_subclass() {
    let mut graph = AssetTypeGraph::new();
    graph.merge([
        plain("Object"),
        plain("Unit").inheriting("Object"),
        plain("Infantry").inheriting("Unit"),
        plain("Orphan").inheriting("Nowhere"),
        plain("Loop").inheriting("Loop"),
        game("Object"),
        game("Rules").inheriting("Object"),
    ]);
    graph.link();

    for &kind in AssetKind::all() {
        for node in graph.iter(kind) {
            for other in graph.iter(kind) {
                assert_eq!(
                    node.superclass() == Some(other.id()),
                    other.has_subclass(node.id()),
                    "{} / {} in {kind}",
                    node.id(),
                    other.id()
                );
            }
        }
    }
}
