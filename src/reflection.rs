use bevy_ecs::prelude::Entity;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VariableKind {
    Int,
    Float,
    Bool,
    Name,
    Text,
}

impl VariableKind {
    pub fn label(self) -> &'static str {
        match self {
            VariableKind::Int => "int",
            VariableKind::Float => "float",
            VariableKind::Bool => "bool",
            VariableKind::Name => "name",
            VariableKind::Text => "text",
        }
    }

    pub fn category(self) -> VariableCategory {
        match self {
            VariableKind::Int => VariableCategory::Integers,
            VariableKind::Float => VariableCategory::Floats,
            VariableKind::Bool => VariableCategory::Bools,
            VariableKind::Name => VariableCategory::Names,
            VariableKind::Text => VariableCategory::Texts,
        }
    }
}

/// The "object" level between actors and variables: one node per non-empty
/// category when the tree is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VariableCategory {
    Integers,
    Floats,
    Bools,
    Names,
    Texts,
}

impl VariableCategory {
    pub fn label(self) -> &'static str {
        match self {
            VariableCategory::Integers => "Integers",
            VariableCategory::Floats => "Floats",
            VariableCategory::Bools => "Bools",
            VariableCategory::Names => "Names",
            VariableCategory::Texts => "Texts",
        }
    }

    pub fn all() -> [VariableCategory; 5] {
        [
            VariableCategory::Integers,
            VariableCategory::Floats,
            VariableCategory::Bools,
            VariableCategory::Names,
            VariableCategory::Texts,
        ]
    }
}

/// Back-reference from a variable node into the live engine property.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PropertyRef {
    pub actor: Entity,
    pub kind: VariableKind,
    pub name: String,
}

/// Materialized snapshot of one variable, as enumerated from a source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyDescriptor {
    pub name: String,
    pub kind: VariableKind,
    pub value: String,
}

/// Engine-agnostic property enumeration surface. The tree model and the
/// value editors only see this trait, so they can be exercised without a
/// running engine session.
pub trait PropertySource {
    fn live_actors(&self) -> Vec<Entity>;
    fn is_alive(&self, actor: Entity) -> bool;
    fn actor_display_name(&self, actor: Entity) -> Option<String>;
    fn enumerate(&self, actor: Entity) -> Vec<PropertyDescriptor>;
    fn read(&self, property: &PropertyRef) -> Option<String>;
    fn write(&mut self, property: &PropertyRef, value: &str) -> bool;
}
