use crate::reflection::PropertySource;
use crate::tree::{
    apply_expansion, build_tree, collect_expanded, ActorProperties, NodeRef,
};
use bevy_ecs::prelude::Entity;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefreshState {
    Idle,
    Refreshing,
}

/// Owns the canonical forest and the per-actor cache, and rebuilds both from
/// live source state. Filtering happens on copies downstream, so refresh is
/// the only mutation path for the canonical tree.
pub struct RefreshController {
    state: RefreshState,
    reference_actor: Option<Entity>,
    roots: Vec<NodeRef>,
    actor_cache: HashMap<Entity, ActorProperties>,
}

impl RefreshController {
    pub fn new(reference_actor: Option<Entity>) -> Self {
        Self {
            state: RefreshState::Idle,
            reference_actor,
            roots: Vec::new(),
            actor_cache: HashMap::new(),
        }
    }

    pub fn state(&self) -> RefreshState {
        self.state
    }

    pub fn reference_actor(&self) -> Option<Entity> {
        self.reference_actor
    }

    pub fn roots(&self) -> &[NodeRef] {
        &self.roots
    }

    pub fn actor_properties(&self, actor: Entity) -> Option<&ActorProperties> {
        self.actor_cache.get(&actor)
    }

    pub fn cached_actors(&self) -> Vec<Entity> {
        self.actor_cache.keys().copied().collect()
    }

    /// Rebuilds the tree from live state. Actors destroyed since the last
    /// refresh drop out silently. With `preserve_expansion` the expanded
    /// identity set is snapshotted first and re-applied to whichever nodes
    /// survive into the new tree; everything else (and everything, when not
    /// preserving) comes back collapsed.
    pub fn refresh_tree(&mut self, source: &dyn PropertySource, preserve_expansion: bool) {
        if self.state == RefreshState::Refreshing {
            // Cannot happen under the single-threaded tick model; guard anyway.
            eprintln!("[debugger] refresh_tree re-entered, ignoring");
            return;
        }
        self.state = RefreshState::Refreshing;
        let snapshot = preserve_expansion.then(|| collect_expanded(&self.roots));
        let (roots, actor_cache) = build_tree(source, self.reference_actor);
        if let Some(snapshot) = snapshot {
            apply_expansion(&roots, &snapshot);
        }
        self.roots = roots;
        self.actor_cache = actor_cache;
        self.state = RefreshState::Idle;
    }
}
