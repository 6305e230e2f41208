use crate::config::DebuggerConfig;
use crate::filter::visible_identities;
use crate::reflection::PropertySource;
use crate::refresh::RefreshController;
use crate::tree::{set_expanded_recursive, NodeIdentity, NodeRef};
use crate::values::PropertyValueEditor;
use crate::world::DialogueWorld;
use bevy_ecs::prelude::Entity;
use egui::{Key, TextEdit, Ui};
use std::collections::{HashMap, HashSet};

/// Live dialogue variable inspector panel: search box, refresh button and
/// the actor/variable tree with editable leaf rows. All tree and edit logic
/// lives below this module; this is presentation glue over the host's egui
/// pass.
pub struct DebuggerPanel {
    config: DebuggerConfig,
    controller: RefreshController,
    filter_string: String,
    visible: Option<HashSet<NodeIdentity>>,
    editors: HashMap<NodeIdentity, PropertyValueEditor>,
    status: Option<String>,
}

impl DebuggerPanel {
    pub fn new(config: DebuggerConfig, reference_actor: Option<Entity>) -> Self {
        Self {
            config,
            controller: RefreshController::new(reference_actor),
            filter_string: String::new(),
            visible: None,
            editors: HashMap::new(),
            status: None,
        }
    }

    /// Current search box contents.
    pub fn filter_text(&self) -> &str {
        &self.filter_string
    }

    pub fn controller(&self) -> &RefreshController {
        &self.controller
    }

    pub fn refresh_tree(&mut self, world: &mut DialogueWorld, preserve_expansion: bool) {
        self.controller.refresh_tree(&*world, preserve_expansion);
        self.rebuild_visible();
        self.sync_editors();
    }

    /// Drives throttled value read-back; call once per host frame.
    pub fn tick(&mut self, dt: f32, world: &DialogueWorld) {
        for editor in self.editors.values_mut() {
            editor.tick(dt, world);
        }
    }

    pub fn show(&mut self, ui: &mut Ui, world: &mut DialogueWorld) {
        ui.heading("Dialogue Variables");
        let mut refresh_requested = false;
        ui.horizontal(|ui| {
            let response = ui.add(
                TextEdit::singleline(&mut self.filter_string).hint_text("Search variables"),
            );
            if response.changed() {
                self.rebuild_visible();
            }
            if ui.button("Refresh").clicked() {
                refresh_requested = true;
            }
        });
        if refresh_requested {
            self.refresh_tree(world, true);
        }
        let roots: Vec<NodeRef> = self.controller.roots().to_vec();
        if roots.is_empty() {
            ui.label("No live actors");
        }
        for root in &roots {
            self.node_row(ui, root, world);
        }
        if let Some(status) = self.status.as_ref() {
            ui.colored_label(egui::Color32::YELLOW, status);
        }
    }

    fn rebuild_visible(&mut self) {
        self.visible = if self.filter_string.is_empty() {
            None
        } else {
            Some(visible_identities(self.controller.roots(), &self.filter_string))
        };
    }

    /// Drops editors whose variable vanished in the last rebuild and seeds
    /// the rest lazily when their row is first drawn.
    fn sync_editors(&mut self) {
        let mut present = HashSet::new();
        crate::tree::for_each_node(self.controller.roots(), &mut |node| {
            let node = node.borrow();
            if node.is_variable() {
                present.insert(node.identity());
            }
        });
        self.editors.retain(|identity, _| present.contains(identity));
    }

    fn node_row(&mut self, ui: &mut Ui, node: &NodeRef, world: &mut DialogueWorld) {
        let identity = node.borrow().identity();
        if let Some(visible) = self.visible.as_ref() {
            if !visible.contains(&identity) {
                return;
            }
        }
        if node.borrow().is_variable() {
            self.variable_row(ui, node, world);
            return;
        }
        let display_name = node.borrow().display_name.clone();
        let expanded = node.borrow().expanded;
        ui.horizontal(|ui| {
            let symbol = if expanded { "v" } else { ">" };
            if ui.small_button(symbol).clicked() {
                node.borrow_mut().expanded = !expanded;
            }
            let label = ui.selectable_label(false, display_name);
            if label.double_clicked() {
                set_expanded_recursive(node, !expanded);
            }
        });
        if node.borrow().expanded {
            let children = node.borrow().children.clone();
            ui.indent(identity, |ui| {
                for child in &children {
                    self.node_row(ui, child, world);
                }
            });
        }
    }

    fn variable_row(&mut self, ui: &mut Ui, node: &NodeRef, world: &mut DialogueWorld) {
        let Some(property) = node.borrow().property() else {
            return;
        };
        let identity = node.borrow().identity();
        let display_name = node.borrow().display_name.clone();
        let cached = node.borrow().cached_value().unwrap_or_default();
        let refresh_seconds = self.config.value_refresh_seconds;
        let alive = world.is_alive(property.actor);
        let mut commit_result: Option<bool> = None;
        ui.horizontal(|ui| {
            ui.label(display_name);
            ui.small(property.kind.label());
            if !alive {
                ui.monospace(cached.as_str());
                return;
            }
            let editor = self
                .editors
                .entry(identity)
                .or_insert_with(|| PropertyValueEditor::new(property.clone(), cached, refresh_seconds));
            let response = ui.add(TextEdit::singleline(editor.buffer_mut()).desired_width(160.0));
            if response.changed() {
                editor.begin_edit();
            }
            let committed = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
            let cancelled = editor.is_editing() && ui.input(|i| i.key_pressed(Key::Escape));
            if committed {
                let accepted = editor.commit(world);
                if accepted {
                    let value = editor.display_value().to_string();
                    node.borrow_mut().set_cached_value(value);
                }
                commit_result = Some(accepted);
            } else if cancelled || (response.lost_focus() && editor.is_editing()) {
                editor.cancel_edit();
            }
        });
        if let Some(accepted) = commit_result {
            self.status = if accepted {
                None
            } else {
                Some(format!(
                    "Invalid {} value for '{}', reverted",
                    property.kind.label(),
                    property.name
                ))
            };
        }
    }
}
