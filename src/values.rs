use crate::reflection::{PropertyRef, PropertySource};
use crate::time::RefreshTimer;

/// Read/write adapter for one variable row. Holds the last-known-good value,
/// the in-flight edit buffer and the read-back timer that keeps the display
/// in sync with out-of-band engine mutation.
pub struct PropertyValueEditor {
    property: PropertyRef,
    cached_value: String,
    edit_buffer: String,
    editing: bool,
    timer: RefreshTimer,
}

impl PropertyValueEditor {
    pub fn new(property: PropertyRef, initial_value: String, refresh_seconds: f32) -> Self {
        Self {
            property,
            edit_buffer: initial_value.clone(),
            cached_value: initial_value,
            editing: false,
            timer: RefreshTimer::new(refresh_seconds),
        }
    }

    pub fn property(&self) -> &PropertyRef {
        &self.property
    }

    pub fn display_value(&self) -> &str {
        &self.cached_value
    }

    pub fn buffer_mut(&mut self) -> &mut String {
        &mut self.edit_buffer
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn begin_edit(&mut self) {
        self.editing = true;
    }

    /// Discards the buffer and restores the last-known-good value.
    pub fn cancel_edit(&mut self) {
        self.edit_buffer = self.cached_value.clone();
        self.editing = false;
    }

    /// Validates and writes the buffer back into the live property. A
    /// rejected edit reverts the buffer; the engine value stays untouched.
    pub fn commit(&mut self, source: &mut dyn PropertySource) -> bool {
        let accepted = source.write(&self.property, &self.edit_buffer);
        if accepted {
            self.cached_value = source
                .read(&self.property)
                .unwrap_or_else(|| self.edit_buffer.trim().to_string());
        } else {
            eprintln!(
                "[debugger] rejected {} edit for '{}'",
                self.property.kind.label(),
                self.property.name
            );
        }
        self.edit_buffer = self.cached_value.clone();
        self.editing = false;
        accepted
    }

    /// Periodic read-back. Re-reads the engine value once per interval,
    /// unless an edit is in progress.
    pub fn tick(&mut self, dt: f32, source: &dyn PropertySource) {
        if !self.timer.advance(dt) {
            return;
        }
        if self.editing {
            return;
        }
        if let Some(value) = source.read(&self.property) {
            if value != self.cached_value {
                self.cached_value = value;
                self.edit_buffer = self.cached_value.clone();
            }
        }
    }
}
