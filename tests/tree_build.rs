use bevy_ecs::prelude::Entity;
use dialogue_debugger::{build_tree, structurally_eq, DialogueWorld, NodeRef};

fn sample_world() -> (DialogueWorld, Entity, Entity) {
    let mut world = DialogueWorld::new();
    let guard = world.spawn_actor("Guard");
    world.set_int(guard, "Health", 40);
    world.set_int(guard, "Mana", 10);
    world.set_bool(guard, "Hostile", true);
    world.set_name(guard, "Faction", "keep");
    let merchant = world.spawn_actor("Merchant");
    world.set_float(merchant, "Gold", 12.5);
    (world, guard, merchant)
}

fn child_names(node: &NodeRef) -> Vec<String> {
    node.borrow().children.iter().map(|child| child.borrow().display_name.clone()).collect()
}

#[test]
fn builds_actor_category_variable_hierarchy() {
    let (world, guard, _) = sample_world();
    let (roots, cache) = build_tree(&world, None);
    assert_eq!(roots.len(), 2);
    let names: Vec<String> = roots.iter().map(|root| root.borrow().display_name.clone()).collect();
    assert_eq!(names, vec!["Guard", "Merchant"]);
    assert_eq!(child_names(&roots[0]), vec!["Integers", "Bools", "Names"]);
    assert_eq!(child_names(&roots[1]), vec!["Floats"]);
    let integers = roots[0].borrow().children[0].clone();
    assert_eq!(child_names(&integers), vec!["Health", "Mana"]);
    let health = integers.borrow().children[0].clone();
    assert_eq!(health.borrow().cached_value().as_deref(), Some("40"));
    assert_eq!(cache.len(), 2);
    assert_eq!(cache.get(&guard).map(|props| props.variable_count()), Some(4));
}

#[test]
fn variable_nodes_link_back_to_their_category() {
    let (world, _, _) = sample_world();
    let (roots, _) = build_tree(&world, None);
    let integers = roots[0].borrow().children[0].clone();
    let health = integers.borrow().children[0].clone();
    let parent = health.borrow().parent.upgrade().expect("variable keeps a parent");
    assert_eq!(parent.borrow().display_name, "Integers");
    let grandparent = parent.borrow().parent.upgrade().expect("category keeps a parent");
    assert_eq!(grandparent.borrow().display_name, "Guard");
}

#[test]
fn reference_actor_narrows_the_tree() {
    let (world, _, merchant) = sample_world();
    let (roots, cache) = build_tree(&world, Some(merchant));
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].borrow().display_name, "Merchant");
    assert_eq!(cache.len(), 1);
}

#[test]
fn destroyed_reference_actor_yields_empty_tree() {
    let (mut world, _, merchant) = sample_world();
    assert!(world.despawn_actor(merchant));
    let (roots, cache) = build_tree(&world, Some(merchant));
    assert!(roots.is_empty());
    assert!(cache.is_empty());
}

#[test]
fn rebuild_over_unchanged_state_is_isomorphic() {
    let (world, _, _) = sample_world();
    let (first, _) = build_tree(&world, None);
    let (second, _) = build_tree(&world, None);
    assert!(structurally_eq(&first, &second));
}

#[test]
fn actors_without_variables_have_no_category_nodes() {
    let mut world = DialogueWorld::new();
    let silent = world.spawn_actor("Silent");
    let (roots, cache) = build_tree(&world, None);
    assert_eq!(roots.len(), 1);
    assert!(roots[0].borrow().children.is_empty());
    assert_eq!(cache.get(&silent).map(|props| props.variable_count()), Some(0));
}
