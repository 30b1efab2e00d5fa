//! Canvas editor: the owner of the field list and the selection.
//!
//! Every change to a field goes through [`CanvasEditor::update_field`]; drag,
//! resize, preview input, and the property panel all share it. Fields are
//! only ever created by a palette drop and only ever destroyed by
//! [`CanvasEditor::delete_field`].

use fb_core::FieldId;
use fb_core::model::{DROP_NUDGE_X, FieldPatch, FieldValue, FormField, Point};
use fb_core::registry::FieldType;
use std::time::{SystemTime, UNIX_EPOCH};

/// Wall-clock source in unix milliseconds, used to issue field ids.
pub type Clock = fn() -> u64;

/// A change to the canvas, as produced by tools and applied by the editor.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasMutation {
    UpdateField { id: FieldId, patch: FieldPatch },
    RemoveField { id: FieldId },
    Select { id: Option<FieldId> },
}

pub struct CanvasEditor {
    /// Placed fields in insertion order (also z-order).
    fields: Vec<FormField>,
    selected: Option<FieldId>,
    /// Palette entry currently being dragged toward the canvas.
    dragged_type: Option<&'static FieldType>,
    clock: Clock,
}

impl Default for CanvasEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasEditor {
    /// Create an empty editor reading ids from the system clock.
    ///
    /// `SystemTime` is unavailable on `wasm32-unknown-unknown`; browser
    /// builds pass their own clock through [`CanvasEditor::with_clock`].
    pub fn new() -> Self {
        Self::with_clock(system_millis)
    }

    pub fn with_clock(clock: Clock) -> Self {
        Self {
            fields: Vec::new(),
            selected: None,
            dragged_type: None,
            clock,
        }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, id: FieldId) -> Option<&FormField> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn selected(&self) -> Option<FieldId> {
        self.selected
    }

    pub fn selected_field(&self) -> Option<&FormField> {
        self.selected.and_then(|id| self.field(id))
    }

    // ─── Palette drag ────────────────────────────────────────────────────

    /// Remember which palette entry a drag started from.
    pub fn begin_palette_drag(&mut self, field_type: &'static FieldType) {
        self.dragged_type = Some(field_type);
    }

    pub fn cancel_palette_drag(&mut self) {
        self.dragged_type = None;
    }

    pub fn dragged_type(&self) -> Option<&'static FieldType> {
        self.dragged_type
    }

    /// Drop the dragged palette entry at a canvas-local point. Without an
    /// active palette drag this does nothing.
    pub fn drop_on_canvas(&mut self, at: Point) -> Option<FieldId> {
        let field_type = self.dragged_type.take()?;
        Some(self.create_field(field_type, at))
    }

    // ─── Operations ──────────────────────────────────────────────────────

    /// Place a new field of `field_type` under a canvas-local drop point and
    /// select it.
    pub fn create_field(&mut self, field_type: &FieldType, at: Point) -> FieldId {
        let id = FieldId::issue((self.clock)());
        let at = Point::new(at.x - DROP_NUDGE_X, at.y);
        self.fields.push(FormField::from_type(id, field_type, at));
        self.selected = Some(id);
        log::debug!("created {} field {id} at ({}, {})", field_type.kind, at.x, at.y);
        id
    }

    /// Set or clear the selection.
    pub fn select_field(&mut self, id: Option<FieldId>) {
        self.selected = id;
    }

    /// Remove a field, clearing the selection if it pointed at it.
    /// Returns `false` (and does nothing) for an absent id.
    pub fn delete_field(&mut self, id: FieldId) -> bool {
        let Some(pos) = self.fields.iter().position(|f| f.id == id) else {
            log::debug!("delete ignored: no field {id}");
            return false;
        };
        self.fields.remove(pos);
        if self.selected == Some(id) {
            self.selected = None;
        }
        true
    }

    /// Merge `patch` into a field. Returns `false` for an absent id.
    pub fn update_field(&mut self, id: FieldId, patch: FieldPatch) -> bool {
        match self.fields.iter_mut().find(|f| f.id == id) {
            Some(field) => {
                field.apply(patch);
                true
            }
            None => {
                log::debug!("update ignored: no field {id}");
                false
            }
        }
    }

    /// Store the preview value typed/checked/chosen inside a field.
    pub fn set_field_value(&mut self, id: FieldId, value: FieldValue) -> bool {
        self.update_field(id, FieldPatch::value(value))
    }

    /// Apply a tool-produced mutation. Returns `true` if anything changed.
    pub fn apply(&mut self, mutation: CanvasMutation) -> bool {
        match mutation {
            CanvasMutation::UpdateField { id, patch } => self.update_field(id, patch),
            CanvasMutation::RemoveField { id } => self.delete_field(id),
            CanvasMutation::Select { id } => {
                let changed = self.selected != id;
                self.select_field(id);
                changed
            }
        }
    }
}

fn system_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
