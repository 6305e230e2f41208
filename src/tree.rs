use crate::reflection::{
    PropertyDescriptor, PropertyRef, PropertySource, VariableCategory,
};
use bevy_ecs::prelude::Entity;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::{Rc, Weak};

pub type NodeRef = Rc<RefCell<TreeNode>>;

#[derive(Clone, Debug)]
pub enum NodeKind {
    Actor(Entity),
    Category(Entity, VariableCategory),
    Variable { property: PropertyRef, cached_value: String },
}

/// Identity of a node across rebuilds. Two nodes from different builds are
/// the same node iff they mirror the same underlying engine object, never
/// because they occupy the same structural position.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeIdentity {
    Actor(Entity),
    Category(Entity, VariableCategory),
    Variable(PropertyRef),
}

pub struct TreeNode {
    pub display_name: String,
    pub kind: NodeKind,
    pub children: Vec<NodeRef>,
    pub parent: Weak<RefCell<TreeNode>>,
    pub expanded: bool,
}

impl TreeNode {
    fn new(display_name: String, kind: NodeKind) -> NodeRef {
        Rc::new(RefCell::new(Self {
            display_name,
            kind,
            children: Vec::new(),
            parent: Weak::new(),
            expanded: false,
        }))
    }

    pub fn new_actor(display_name: String, actor: Entity) -> NodeRef {
        Self::new(display_name, NodeKind::Actor(actor))
    }

    pub fn new_category(actor: Entity, category: VariableCategory) -> NodeRef {
        Self::new(category.label().to_string(), NodeKind::Category(actor, category))
    }

    pub fn new_variable(property: PropertyRef, cached_value: String) -> NodeRef {
        let name = property.name.clone();
        Self::new(name, NodeKind::Variable { property, cached_value })
    }

    pub fn identity(&self) -> NodeIdentity {
        match &self.kind {
            NodeKind::Actor(actor) => NodeIdentity::Actor(*actor),
            NodeKind::Category(actor, category) => NodeIdentity::Category(*actor, *category),
            NodeKind::Variable { property, .. } => NodeIdentity::Variable(property.clone()),
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self.kind, NodeKind::Variable { .. })
    }

    pub fn property(&self) -> Option<PropertyRef> {
        match &self.kind {
            NodeKind::Variable { property, .. } => Some(property.clone()),
            _ => None,
        }
    }

    pub fn cached_value(&self) -> Option<String> {
        match &self.kind {
            NodeKind::Variable { cached_value, .. } => Some(cached_value.clone()),
            _ => None,
        }
    }

    pub fn set_cached_value(&mut self, value: String) {
        if let NodeKind::Variable { cached_value, .. } = &mut self.kind {
            *cached_value = value;
        }
    }
}

pub fn attach_child(parent: &NodeRef, child: NodeRef) {
    child.borrow_mut().parent = Rc::downgrade(parent);
    parent.borrow_mut().children.push(child);
}

/// Preorder walk over the forest.
pub fn for_each_node(roots: &[NodeRef], visit: &mut impl FnMut(&NodeRef)) {
    for root in roots {
        visit(root);
        let children = root.borrow().children.clone();
        for_each_node(&children, visit);
    }
}

pub fn collect_expanded(roots: &[NodeRef]) -> HashSet<NodeIdentity> {
    let mut expanded = HashSet::new();
    for_each_node(roots, &mut |node| {
        let node = node.borrow();
        if node.expanded {
            expanded.insert(node.identity());
        }
    });
    expanded
}

pub fn apply_expansion(roots: &[NodeRef], expanded: &HashSet<NodeIdentity>) {
    for_each_node(roots, &mut |node| {
        let identity = node.borrow().identity();
        node.borrow_mut().expanded = expanded.contains(&identity);
    });
}

pub fn set_expanded_recursive(node: &NodeRef, expanded: bool) {
    node.borrow_mut().expanded = expanded;
    let children = node.borrow().children.clone();
    for child in &children {
        set_expanded_recursive(child, expanded);
    }
}

/// Shape equality: same names, identities and child structure. Expansion and
/// cached values do not participate.
pub fn structurally_eq(a: &[NodeRef], b: &[NodeRef]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b.iter()).all(|(left, right)| {
        let left = left.borrow();
        let right = right.borrow();
        left.display_name == right.display_name
            && left.identity() == right.identity()
            && structurally_eq(&left.children, &right.children)
    })
}

/// Per-actor cache entry: the materialized property subtree for one live
/// actor, keyed by its generation-checked handle.
#[derive(Clone, Debug)]
pub struct ActorProperties {
    pub actor: Entity,
    pub display_name: String,
    pub categories: Vec<(VariableCategory, Vec<PropertyDescriptor>)>,
}

impl ActorProperties {
    pub fn materialize(source: &dyn PropertySource, actor: Entity) -> Self {
        let display_name = source
            .actor_display_name(actor)
            .unwrap_or_else(|| format!("Actor {}", actor.index()));
        let descriptors = source.enumerate(actor);
        let mut categories = Vec::new();
        for category in VariableCategory::all() {
            let members: Vec<PropertyDescriptor> = descriptors
                .iter()
                .filter(|descriptor| descriptor.kind.category() == category)
                .cloned()
                .collect();
            if !members.is_empty() {
                categories.push((category, members));
            }
        }
        Self { actor, display_name, categories }
    }

    pub fn variable_count(&self) -> usize {
        self.categories.iter().map(|(_, members)| members.len()).sum()
    }
}

/// Builds the canonical actor -> category -> variable forest from live
/// source state. Pure over the source: identical state yields an isomorphic
/// tree. A destroyed reference actor yields an empty forest rather than an
/// error.
pub fn build_tree(
    source: &dyn PropertySource,
    reference_actor: Option<Entity>,
) -> (Vec<NodeRef>, HashMap<Entity, ActorProperties>) {
    let actors = match reference_actor {
        Some(actor) if source.is_alive(actor) => vec![actor],
        Some(_) => Vec::new(),
        None => source.live_actors(),
    };

    let mut roots = Vec::with_capacity(actors.len());
    let mut cache = HashMap::with_capacity(actors.len());
    for actor in actors {
        let properties = ActorProperties::materialize(source, actor);
        let actor_node = TreeNode::new_actor(properties.display_name.clone(), actor);
        for (category, members) in &properties.categories {
            let category_node = TreeNode::new_category(actor, *category);
            for descriptor in members {
                let property =
                    PropertyRef { actor, kind: descriptor.kind, name: descriptor.name.clone() };
                let variable_node = TreeNode::new_variable(property, descriptor.value.clone());
                attach_child(&category_node, variable_node);
            }
            attach_child(&actor_node, category_node);
        }
        cache.insert(actor, properties);
        roots.push(actor_node);
    }
    (roots, cache)
}
