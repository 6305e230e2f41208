use crate::config::MAX_NAME_LENGTH;
use crate::reflection::{PropertyDescriptor, PropertyRef, PropertySource, VariableKind};
use bevy_ecs::prelude::{Component, Entity, World};
use std::collections::BTreeMap;

#[derive(Component, Clone)]
pub struct ActorName(pub String);

/// Per-actor dialogue variable store, one ordered map per variable kind.
#[derive(Component, Clone, Default)]
pub struct DialogueVariables {
    pub integers: BTreeMap<String, i64>,
    pub floats: BTreeMap<String, f64>,
    pub bools: BTreeMap<String, bool>,
    pub names: BTreeMap<String, String>,
    pub texts: BTreeMap<String, String>,
}

// ---------- World container ----------
pub struct DialogueWorld {
    pub world: World,
    spawn_order: Vec<Entity>,
    max_name_length: usize,
}

impl Default for DialogueWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogueWorld {
    pub fn new() -> Self {
        Self { world: World::new(), spawn_order: Vec::new(), max_name_length: MAX_NAME_LENGTH }
    }

    pub fn with_name_limit(max_name_length: usize) -> Self {
        let mut world = Self::new();
        world.max_name_length = max_name_length;
        world
    }

    pub fn max_name_length(&self) -> usize {
        self.max_name_length
    }

    pub fn spawn_actor(&mut self, name: &str) -> Entity {
        let entity =
            self.world.spawn((ActorName(name.to_string()), DialogueVariables::default())).id();
        self.spawn_order.push(entity);
        entity
    }

    pub fn despawn_actor(&mut self, entity: Entity) -> bool {
        let despawned = self.world.despawn(entity);
        if despawned {
            self.spawn_order.retain(|candidate| *candidate != entity);
        }
        despawned
    }

    /// Live actors in spawn order.
    pub fn actors(&self) -> Vec<Entity> {
        self.spawn_order
            .iter()
            .copied()
            .filter(|entity| self.world.get_entity(*entity).is_ok())
            .collect()
    }

    pub fn actor_count(&self) -> usize {
        self.actors().len()
    }

    pub fn actor_name(&self, entity: Entity) -> Option<String> {
        self.world.get::<ActorName>(entity).map(|name| name.0.clone())
    }

    // ---------- Variable setters (create or overwrite) ----------

    pub fn set_int(&mut self, entity: Entity, name: &str, value: i64) -> bool {
        let Some(mut vars) = self.world.get_mut::<DialogueVariables>(entity) else {
            return false;
        };
        vars.integers.insert(name.to_string(), value);
        true
    }

    pub fn set_float(&mut self, entity: Entity, name: &str, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        let Some(mut vars) = self.world.get_mut::<DialogueVariables>(entity) else {
            return false;
        };
        vars.floats.insert(name.to_string(), value);
        true
    }

    pub fn set_bool(&mut self, entity: Entity, name: &str, value: bool) -> bool {
        let Some(mut vars) = self.world.get_mut::<DialogueVariables>(entity) else {
            return false;
        };
        vars.bools.insert(name.to_string(), value);
        true
    }

    pub fn set_name(&mut self, entity: Entity, name: &str, value: &str) -> bool {
        if value.chars().count() > self.max_name_length {
            eprintln!(
                "[debugger] name variable '{name}' rejected: {} chars exceeds limit {}",
                value.chars().count(),
                self.max_name_length
            );
            return false;
        }
        let Some(mut vars) = self.world.get_mut::<DialogueVariables>(entity) else {
            return false;
        };
        vars.names.insert(name.to_string(), value.to_string());
        true
    }

    pub fn set_text(&mut self, entity: Entity, name: &str, value: &str) -> bool {
        let Some(mut vars) = self.world.get_mut::<DialogueVariables>(entity) else {
            return false;
        };
        vars.texts.insert(name.to_string(), value.to_string());
        true
    }

    // ---------- Variable readers ----------

    pub fn int_value(&self, entity: Entity, name: &str) -> Option<i64> {
        self.world.get::<DialogueVariables>(entity).and_then(|vars| vars.integers.get(name).copied())
    }

    pub fn float_value(&self, entity: Entity, name: &str) -> Option<f64> {
        self.world.get::<DialogueVariables>(entity).and_then(|vars| vars.floats.get(name).copied())
    }

    pub fn bool_value(&self, entity: Entity, name: &str) -> Option<bool> {
        self.world.get::<DialogueVariables>(entity).and_then(|vars| vars.bools.get(name).copied())
    }

    pub fn name_value(&self, entity: Entity, name: &str) -> Option<String> {
        self.world.get::<DialogueVariables>(entity).and_then(|vars| vars.names.get(name).cloned())
    }

    pub fn text_value(&self, entity: Entity, name: &str) -> Option<String> {
        self.world.get::<DialogueVariables>(entity).and_then(|vars| vars.texts.get(name).cloned())
    }

    fn has_variable(&self, property: &PropertyRef) -> bool {
        let Some(vars) = self.world.get::<DialogueVariables>(property.actor) else {
            return false;
        };
        match property.kind {
            VariableKind::Int => vars.integers.contains_key(&property.name),
            VariableKind::Float => vars.floats.contains_key(&property.name),
            VariableKind::Bool => vars.bools.contains_key(&property.name),
            VariableKind::Name => vars.names.contains_key(&property.name),
            VariableKind::Text => vars.texts.contains_key(&property.name),
        }
    }
}

impl PropertySource for DialogueWorld {
    fn live_actors(&self) -> Vec<Entity> {
        self.actors()
    }

    fn is_alive(&self, actor: Entity) -> bool {
        self.world.get_entity(actor).is_ok()
    }

    fn actor_display_name(&self, actor: Entity) -> Option<String> {
        self.actor_name(actor)
    }

    fn enumerate(&self, actor: Entity) -> Vec<PropertyDescriptor> {
        let Some(vars) = self.world.get::<DialogueVariables>(actor) else {
            return Vec::new();
        };
        let mut descriptors = Vec::new();
        for (name, value) in &vars.integers {
            descriptors.push(PropertyDescriptor {
                name: name.clone(),
                kind: VariableKind::Int,
                value: value.to_string(),
            });
        }
        for (name, value) in &vars.floats {
            descriptors.push(PropertyDescriptor {
                name: name.clone(),
                kind: VariableKind::Float,
                value: value.to_string(),
            });
        }
        for (name, value) in &vars.bools {
            descriptors.push(PropertyDescriptor {
                name: name.clone(),
                kind: VariableKind::Bool,
                value: value.to_string(),
            });
        }
        for (name, value) in &vars.names {
            descriptors.push(PropertyDescriptor {
                name: name.clone(),
                kind: VariableKind::Name,
                value: value.clone(),
            });
        }
        for (name, value) in &vars.texts {
            descriptors.push(PropertyDescriptor {
                name: name.clone(),
                kind: VariableKind::Text,
                value: value.clone(),
            });
        }
        descriptors
    }

    fn read(&self, property: &PropertyRef) -> Option<String> {
        match property.kind {
            VariableKind::Int => self.int_value(property.actor, &property.name).map(|v| v.to_string()),
            VariableKind::Float => {
                self.float_value(property.actor, &property.name).map(|v| v.to_string())
            }
            VariableKind::Bool => self.bool_value(property.actor, &property.name).map(|v| v.to_string()),
            VariableKind::Name => self.name_value(property.actor, &property.name),
            VariableKind::Text => self.text_value(property.actor, &property.name),
        }
    }

    /// Validated write-back. Only existing variables can be written; parse or
    /// length failures leave the stored value untouched.
    fn write(&mut self, property: &PropertyRef, value: &str) -> bool {
        if !self.has_variable(property) {
            return false;
        }
        let trimmed = value.trim();
        match property.kind {
            VariableKind::Int => match trimmed.parse::<i64>() {
                Ok(parsed) => self.set_int(property.actor, &property.name, parsed),
                Err(_) => false,
            },
            VariableKind::Float => match trimmed.parse::<f64>() {
                Ok(parsed) => self.set_float(property.actor, &property.name, parsed),
                Err(_) => false,
            },
            VariableKind::Bool => match trimmed.to_ascii_lowercase().as_str() {
                "true" => self.set_bool(property.actor, &property.name, true),
                "false" => self.set_bool(property.actor, &property.name, false),
                _ => false,
            },
            VariableKind::Name => self.set_name(property.actor, &property.name, trimmed),
            VariableKind::Text => self.set_text(property.actor, &property.name, value),
        }
    }
}
