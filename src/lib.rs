pub mod config;
pub mod filter;
#[cfg(feature = "editor")]
pub mod panel;
pub mod reflection;
pub mod refresh;
pub mod time;
pub mod tree;
pub mod values;
pub mod world;

pub use config::{DebuggerConfig, MAX_NAME_LENGTH};
pub use filter::{filter_tree, visible_identities};
#[cfg(feature = "editor")]
pub use panel::DebuggerPanel;
pub use reflection::{
    PropertyDescriptor, PropertyRef, PropertySource, VariableCategory, VariableKind,
};
pub use refresh::{RefreshController, RefreshState};
pub use time::RefreshTimer;
pub use tree::{
    build_tree, structurally_eq, ActorProperties, NodeIdentity, NodeKind, NodeRef, TreeNode,
};
pub use values::PropertyValueEditor;
pub use world::{ActorName, DialogueVariables, DialogueWorld};
