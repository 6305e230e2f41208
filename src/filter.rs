use crate::tree::{NodeIdentity, NodeRef, TreeNode};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::{Rc, Weak};

/// Case-insensitive substring filter over display names. Returns a pruned
/// deep copy containing every node that matches plus the ancestor chain of
/// each match, so matches stay reachable. The input forest is never mutated.
/// An empty filter string returns a full copy, structurally equal to the
/// input.
pub fn filter_tree(roots: &[NodeRef], filter: &str) -> Vec<NodeRef> {
    let needle = filter.to_lowercase();
    roots.iter().filter_map(|root| clone_filtered(root, &needle)).collect()
}

/// Identities surviving `filter_tree`, for callers that render the canonical
/// tree in place instead of a copied one.
pub fn visible_identities(roots: &[NodeRef], filter: &str) -> HashSet<NodeIdentity> {
    let mut visible = HashSet::new();
    let filtered = filter_tree(roots, filter);
    crate::tree::for_each_node(&filtered, &mut |node| {
        visible.insert(node.borrow().identity());
    });
    visible
}

fn clone_filtered(node: &NodeRef, needle: &str) -> Option<NodeRef> {
    let source = node.borrow();
    let children: Vec<NodeRef> =
        source.children.iter().filter_map(|child| clone_filtered(child, needle)).collect();
    let matches = needle.is_empty() || source.display_name.to_lowercase().contains(needle);
    if !matches && children.is_empty() {
        return None;
    }
    let copy = Rc::new(RefCell::new(TreeNode {
        display_name: source.display_name.clone(),
        kind: source.kind.clone(),
        children: Vec::new(),
        parent: Weak::new(),
        expanded: source.expanded,
    }));
    for child in children {
        child.borrow_mut().parent = Rc::downgrade(&copy);
        copy.borrow_mut().children.push(child);
    }
    Some(copy)
}
