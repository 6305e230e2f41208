use dialogue_debugger::{build_tree, filter_tree, structurally_eq, DialogueWorld, NodeRef};

fn sample_roots() -> Vec<NodeRef> {
    let mut world = DialogueWorld::new();
    let guard = world.spawn_actor("Guard");
    world.set_int(guard, "Health", 40);
    world.set_int(guard, "Mana", 10);
    world.set_bool(guard, "Hostile", true);
    let merchant = world.spawn_actor("Merchant");
    world.set_int(merchant, "Gold", 75);
    let (roots, _) = build_tree(&world, None);
    roots
}

fn count_nodes(roots: &[NodeRef]) -> usize {
    let mut count = 0;
    dialogue_debugger::tree::for_each_node(roots, &mut |_| count += 1);
    count
}

#[test]
fn empty_filter_is_identity() {
    let roots = sample_roots();
    let filtered = filter_tree(&roots, "");
    assert!(structurally_eq(&roots, &filtered));
}

#[test]
fn matches_keep_their_ancestor_chain() {
    let roots = sample_roots();
    let filtered = filter_tree(&roots, "health");
    assert_eq!(filtered.len(), 1);
    let actor = filtered[0].borrow();
    assert_eq!(actor.display_name, "Guard");
    assert_eq!(actor.children.len(), 1);
    let category = actor.children[0].borrow();
    assert_eq!(category.display_name, "Integers");
    assert_eq!(category.children.len(), 1);
    assert_eq!(category.children[0].borrow().display_name, "Health");
}

#[test]
fn every_surviving_node_matches_or_covers_a_match() {
    let roots = sample_roots();
    let needle = "an";
    let filtered = filter_tree(&roots, needle);
    fn check(node: &NodeRef, needle: &str) -> bool {
        let node = node.borrow();
        let matches = node.display_name.to_lowercase().contains(needle);
        let covers = node.children.iter().any(|child| check(child, needle));
        assert!(matches || covers, "node '{}' neither matches nor covers a match", node.display_name);
        matches || covers
    }
    for root in &filtered {
        check(root, needle);
    }
}

#[test]
fn filter_is_case_insensitive() {
    let roots = sample_roots();
    let lower = filter_tree(&roots, "health");
    let upper = filter_tree(&roots, "HEALTH");
    assert!(structurally_eq(&lower, &upper));
}

#[test]
fn filter_is_idempotent() {
    let roots = sample_roots();
    let once = filter_tree(&roots, "gold");
    let twice = filter_tree(&once, "gold");
    assert!(structurally_eq(&once, &twice));
}

#[test]
fn filtering_never_mutates_the_canonical_tree() {
    let roots = sample_roots();
    let before = count_nodes(&roots);
    let _ = filter_tree(&roots, "hostile");
    let _ = filter_tree(&roots, "no such variable");
    assert_eq!(count_nodes(&roots), before);
}

#[test]
fn unmatched_filter_yields_empty_forest() {
    let roots = sample_roots();
    assert!(filter_tree(&roots, "no such variable").is_empty());
}

#[test]
fn matching_interior_node_prunes_unmatched_children() {
    let roots = sample_roots();
    let filtered = filter_tree(&roots, "integers");
    // Both actors own an Integers category; the variables below do not match.
    assert_eq!(filtered.len(), 2);
    for actor in &filtered {
        let actor = actor.borrow();
        assert_eq!(actor.children.len(), 1);
        let category = actor.children[0].borrow();
        assert_eq!(category.display_name, "Integers");
        assert!(category.children.is_empty());
    }
}

#[test]
fn filtered_copies_carry_expansion_state() {
    let roots = sample_roots();
    roots[0].borrow_mut().expanded = true;
    let filtered = filter_tree(&roots, "health");
    assert!(filtered[0].borrow().expanded);
}
